//! Default toolbar derivation.
//!
//! Groups are emitted in a fixed priority order (3D scene, geo, 2D drag
//! modes, 2D zoom, hover modes) which is also the left-to-right layout of the
//! toolbar. Each step is a separate function so the order can be checked
//! group by group.

use tracing::{debug, trace};

use crate::core::{AxisDescriptor, ChartCapabilities, TraceDescriptor, all_axes_fixed};
use crate::error::ModebarResult;

use super::{ButtonRegistry, ButtonSpec, ModebarConfig, ToolbarConfig};

/// Button names of one default group.
pub type NameGroup = Vec<&'static str>;

const GL3D_GROUPS: &[&[&str]] = &[
    &["zoom3d", "pan3d", "orbitRotation", "tableRotation"],
    &["resetCameraDefault3d", "resetCameraLastSave3d"],
    &["hoverClosest3d"],
];
const GEO_GROUPS: &[&[&str]] = &[&["zoomInGeo", "zoomOutGeo", "resetGeo"], &["hoverClosestGeo"]];
const DRAG_ZOOM_PAN: &[&str] = &["zoom2d", "pan2d"];
const DRAG_SELECT: &[&str] = &["select2d", "lasso2d"];
const ZOOM_2D_GROUPS: &[&[&str]] = &[&["zoomIn2d", "zoomOut2d", "autoScale2d", "resetScale2d"]];
const CARTESIAN_HOVER_GROUPS: &[&[&str]] = &[&["hoverClosestCartesian", "hoverCompareCartesian"]];
const GL2D_HOVER_GROUPS: &[&[&str]] = &[&["hoverClosestGl2d"]];
const PIE_HOVER_GROUPS: &[&[&str]] = &[&["hoverClosestPie"]];

/// Resolves the toolbar for one chart state.
///
/// A non-empty custom button list bypasses derivation, removal and additions
/// entirely. Any failure aborts the whole resolution.
pub fn resolve_toolbar(
    registry: &ButtonRegistry,
    capabilities: ChartCapabilities,
    traces: &[TraceDescriptor],
    axes: &[AxisDescriptor],
    config: &ModebarConfig,
) -> ModebarResult<ToolbarConfig> {
    if let Some(custom) = config.active_custom_buttons() {
        debug!(groups = custom.len(), "resolving custom modebar buttons");
        let groups = custom
            .iter()
            .map(|group| registry.resolve_group(group))
            .collect::<ModebarResult<Vec<_>>>()?;
        return Ok(ToolbarConfig::new(groups));
    }

    let names = default_button_names(capabilities, traces, axes);
    let names = remove_buttons(names, &config.buttons_to_remove);

    let mut groups = names
        .iter()
        .map(|group| {
            group
                .iter()
                .map(|name| registry.resolve_name(name))
                .collect::<ModebarResult<Vec<ButtonSpec>>>()
        })
        .collect::<ModebarResult<Vec<_>>>()?;
    let derived = groups.len();
    groups.extend(config.buttons_to_add.resolve(registry)?);

    debug!(
        derived,
        added = groups.len() - derived,
        removed_names = config.buttons_to_remove.len(),
        "resolved default modebar buttons"
    );
    Ok(ToolbarConfig::new(groups))
}

/// Default groups for the given chart state, before removal and additions.
#[must_use]
pub fn default_button_names(
    capabilities: ChartCapabilities,
    traces: &[TraceDescriptor],
    axes: &[AxisDescriptor],
) -> Vec<NameGroup> {
    let zoomable_2d = capabilities.has_2d_axes() && !all_axes_fixed(axes);
    trace!(?capabilities, zoomable_2d, "deriving default modebar groups");

    gl3d_groups(capabilities)
        .chain(geo_groups(capabilities))
        .chain(drag_mode_group(capabilities, traces, zoomable_2d))
        .chain(zoom_2d_groups(zoomable_2d))
        .chain(hover_groups(capabilities))
        .collect()
}

pub fn gl3d_groups(capabilities: ChartCapabilities) -> impl Iterator<Item = NameGroup> {
    groups_when(capabilities.has_gl3d, GL3D_GROUPS)
}

pub fn geo_groups(capabilities: ChartCapabilities) -> impl Iterator<Item = NameGroup> {
    groups_when(capabilities.has_geo, GEO_GROUPS)
}

/// Zoom/pan when any 2D axis is movable, then box/lasso selection when a
/// cartesian trace supports it. Absent when both halves are empty.
#[must_use]
pub fn drag_mode_group(
    capabilities: ChartCapabilities,
    traces: &[TraceDescriptor],
    zoomable_2d: bool,
) -> Option<NameGroup> {
    let zoom_pan: &[&'static str] = if zoomable_2d { DRAG_ZOOM_PAN } else { &[] };
    let select: &[&'static str] = if capabilities.has_cartesian && has_selectable_trace(traces) {
        DRAG_SELECT
    } else {
        &[]
    };

    let group = [zoom_pan, select].concat();
    (!group.is_empty()).then_some(group)
}

pub fn zoom_2d_groups(zoomable_2d: bool) -> impl Iterator<Item = NameGroup> {
    groups_when(zoomable_2d, ZOOM_2D_GROUPS)
}

pub fn hover_groups(capabilities: ChartCapabilities) -> impl Iterator<Item = NameGroup> {
    groups_when(capabilities.has_cartesian, CARTESIAN_HOVER_GROUPS)
        .chain(groups_when(capabilities.has_gl2d, GL2D_HOVER_GROUPS))
        .chain(groups_when(capabilities.has_pie, PIE_HOVER_GROUPS))
}

/// Stops at the first trace that supports point selection.
#[must_use]
pub fn has_selectable_trace(traces: &[TraceDescriptor]) -> bool {
    traces.iter().any(TraceDescriptor::supports_point_selection)
}

/// Drops removed names inside each group. Groups are never dropped, even
/// when every button in them was removed.
#[must_use]
pub fn remove_buttons(groups: Vec<NameGroup>, removed: &[String]) -> Vec<NameGroup> {
    if removed.is_empty() {
        return groups;
    }
    groups
        .into_iter()
        .map(|group| {
            group
                .into_iter()
                .filter(|name| !removed.iter().any(|r| r.as_str() == *name))
                .collect()
        })
        .collect()
}

fn groups_when(
    enabled: bool,
    groups: &'static [&'static [&'static str]],
) -> impl Iterator<Item = NameGroup> {
    enabled
        .then_some(groups)
        .into_iter()
        .flatten()
        .map(|group| group.to_vec())
}
