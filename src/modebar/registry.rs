use std::sync::LazyLock;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ModebarError, ModebarResult};

use super::{ButtonEntry, ButtonSpec};

static DEFAULT_REGISTRY: LazyLock<ButtonRegistry> = LazyLock::new(ButtonRegistry::with_defaults);

/// Process-wide registry of built-in buttons.
#[must_use]
pub fn default_registry() -> &'static ButtonRegistry {
    &DEFAULT_REGISTRY
}

/// Name → definition lookup table, iterated in registration order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ButtonRegistry {
    buttons: IndexMap<String, ButtonSpec>,
}

impl ButtonRegistry {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        for spec in builtin_buttons() {
            registry.register(spec);
        }
        registry
    }

    /// Registers `spec` under its own name, returning the definition it replaced.
    pub fn register(&mut self, spec: ButtonSpec) -> Option<ButtonSpec> {
        self.buttons.insert(spec.name.clone(), spec)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ButtonSpec> {
        self.buttons.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.buttons.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.buttons.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    pub fn resolve_name(&self, name: &str) -> ModebarResult<ButtonSpec> {
        self.get(name)
            .cloned()
            .ok_or_else(|| ModebarError::UnresolvedButton {
                name: name.to_owned(),
            })
    }

    pub fn resolve_entry(&self, entry: &ButtonEntry) -> ModebarResult<ButtonSpec> {
        match entry {
            ButtonEntry::Identifier(name) => self.resolve_name(name),
            ButtonEntry::Resolved(spec) => Ok(spec.clone()),
        }
    }

    pub fn resolve_group(&self, group: &[ButtonEntry]) -> ModebarResult<Vec<ButtonSpec>> {
        group.iter().map(|entry| self.resolve_entry(entry)).collect()
    }
}

fn builtin_buttons() -> Vec<ButtonSpec> {
    const SCENE_DRAGMODE: &str = "scene.dragmode";
    const DRAGMODE: &str = "dragmode";
    const HOVERMODE: &str = "hovermode";
    const TOGGLE_CLOSEST: &str = "Toggle show closest data on hover";

    vec![
        ButtonSpec::new("toImage", "Download plot as a png").with_icon("camera"),
        ButtonSpec::new("sendDataToCloud", "Save and edit plot in cloud").with_icon("disk"),
        ButtonSpec::new("zoom2d", "Zoom")
            .with_icon("zoombox")
            .with_attr(DRAGMODE, Some("zoom")),
        ButtonSpec::new("pan2d", "Pan")
            .with_icon("pan")
            .with_attr(DRAGMODE, Some("pan")),
        ButtonSpec::new("select2d", "Box Select")
            .with_icon("selectbox")
            .with_attr(DRAGMODE, Some("select")),
        ButtonSpec::new("lasso2d", "Lasso Select")
            .with_icon("lasso")
            .with_attr(DRAGMODE, Some("lasso")),
        ButtonSpec::new("zoomIn2d", "Zoom in")
            .with_icon("zoom_plus")
            .with_attr("zoom", Some("in")),
        ButtonSpec::new("zoomOut2d", "Zoom out")
            .with_icon("zoom_minus")
            .with_attr("zoom", Some("out")),
        ButtonSpec::new("autoScale2d", "Autoscale")
            .with_icon("autoscale")
            .with_attr("zoom", Some("auto")),
        ButtonSpec::new("resetScale2d", "Reset axes")
            .with_icon("home")
            .with_attr("zoom", Some("reset")),
        ButtonSpec::new("hoverClosestCartesian", "Show closest data on hover")
            .with_icon("tooltip_basic")
            .with_attr(HOVERMODE, Some("closest")),
        ButtonSpec::new("hoverCompareCartesian", "Compare data on hover")
            .with_icon("tooltip_compare")
            .with_attr(HOVERMODE, Some("x")),
        ButtonSpec::new("zoom3d", "Zoom")
            .with_icon("zoombox")
            .with_attr(SCENE_DRAGMODE, Some("zoom")),
        ButtonSpec::new("pan3d", "Pan")
            .with_icon("pan")
            .with_attr(SCENE_DRAGMODE, Some("pan")),
        ButtonSpec::new("orbitRotation", "orbital rotation")
            .with_icon("3d_rotate")
            .with_attr(SCENE_DRAGMODE, Some("orbit")),
        ButtonSpec::new("tableRotation", "turntable rotation")
            .with_icon("z-axis")
            .with_attr(SCENE_DRAGMODE, Some("turntable")),
        ButtonSpec::new("resetCameraDefault3d", "Reset camera to default")
            .with_icon("home")
            .with_attr("resetDefault", None),
        ButtonSpec::new("resetCameraLastSave3d", "Reset camera to last save")
            .with_icon("movie")
            .with_attr("resetLastSave", None),
        ButtonSpec::new("hoverClosest3d", TOGGLE_CLOSEST)
            .with_icon("tooltip_basic")
            .with_attr(HOVERMODE, None)
            .with_toggle(true),
        ButtonSpec::new("zoomInGeo", "Zoom in")
            .with_icon("zoom_plus")
            .with_attr("zoom", Some("in")),
        ButtonSpec::new("zoomOutGeo", "Zoom out")
            .with_icon("zoom_minus")
            .with_attr("zoom", Some("out")),
        ButtonSpec::new("resetGeo", "Reset")
            .with_icon("autoscale")
            .with_attr("reset", None),
        ButtonSpec::new("hoverClosestGeo", TOGGLE_CLOSEST)
            .with_icon("tooltip_basic")
            .with_attr(HOVERMODE, None)
            .with_toggle(true),
        ButtonSpec::new("hoverClosestGl2d", TOGGLE_CLOSEST)
            .with_icon("tooltip_basic")
            .with_attr(HOVERMODE, None)
            .with_toggle(true),
        ButtonSpec::new("hoverClosestPie", TOGGLE_CLOSEST)
            .with_icon("tooltip_basic")
            .with_attr(HOVERMODE, Some("closest")),
    ]
}
