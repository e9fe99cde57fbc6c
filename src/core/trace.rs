use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModebarError, ModebarResult};

/// Plot subsystem a trace type is drawn by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlotCategory {
    Cartesian,
    Gl3d,
    Geo,
    Gl2d,
    Pie,
    /// Trace type unknown to this crate; contributes no capability.
    Unknown,
}

/// Declared trace type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TraceKind {
    Scatter,
    Bar,
    Histogram,
    Box,
    Heatmap,
    Contour,
    Scatter3d,
    Surface,
    Mesh3d,
    ScatterGeo,
    Choropleth,
    ScatterGl,
    Pie,
    Other(String),
}

impl TraceKind {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Scatter => "scatter",
            Self::Bar => "bar",
            Self::Histogram => "histogram",
            Self::Box => "box",
            Self::Heatmap => "heatmap",
            Self::Contour => "contour",
            Self::Scatter3d => "scatter3d",
            Self::Surface => "surface",
            Self::Mesh3d => "mesh3d",
            Self::ScatterGeo => "scattergeo",
            Self::Choropleth => "choropleth",
            Self::ScatterGl => "scattergl",
            Self::Pie => "pie",
            Self::Other(name) => name,
        }
    }

    #[must_use]
    pub fn category(&self) -> PlotCategory {
        match self {
            Self::Scatter
            | Self::Bar
            | Self::Histogram
            | Self::Box
            | Self::Heatmap
            | Self::Contour => PlotCategory::Cartesian,
            Self::Scatter3d | Self::Surface | Self::Mesh3d => PlotCategory::Gl3d,
            Self::ScatterGeo | Self::Choropleth => PlotCategory::Geo,
            Self::ScatterGl => PlotCategory::Gl2d,
            Self::Pie => PlotCategory::Pie,
            Self::Other(_) => PlotCategory::Unknown,
        }
    }

    /// Whether the built-in module for this type ships a point-selection handler.
    #[must_use]
    pub fn module_selects_points(&self) -> bool {
        matches!(self, Self::Scatter)
    }
}

impl From<String> for TraceKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "scatter" => Self::Scatter,
            "bar" => Self::Bar,
            "histogram" => Self::Histogram,
            "box" => Self::Box,
            "heatmap" => Self::Heatmap,
            "contour" => Self::Contour,
            "scatter3d" => Self::Scatter3d,
            "surface" => Self::Surface,
            "mesh3d" => Self::Mesh3d,
            "scattergeo" => Self::ScatterGeo,
            "choropleth" => Self::Choropleth,
            "scattergl" => Self::ScatterGl,
            "pie" => Self::Pie,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for TraceKind {
    fn from(value: &str) -> Self {
        Self::from(value.to_owned())
    }
}

impl From<TraceKind> for String {
    fn from(value: TraceKind) -> Self {
        match value {
            TraceKind::Other(name) => name,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for TraceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scatter drawing mode flag list, e.g. `"lines+markers"` or `"none"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ScatterMode {
    pub lines: bool,
    pub markers: bool,
    pub text: bool,
}

impl ScatterMode {
    pub const NONE: Self = Self {
        lines: false,
        markers: false,
        text: false,
    };
    pub const LINES: Self = Self {
        lines: true,
        markers: false,
        text: false,
    };
    pub const MARKERS: Self = Self {
        lines: false,
        markers: true,
        text: false,
    };
    pub const TEXT: Self = Self {
        lines: false,
        markers: false,
        text: true,
    };
    pub const LINES_MARKERS: Self = Self {
        lines: true,
        markers: true,
        text: false,
    };
}

impl FromStr for ScatterMode {
    type Err = ModebarError;

    fn from_str(input: &str) -> ModebarResult<Self> {
        let input = input.trim();
        if input == "none" {
            return Ok(Self::NONE);
        }

        let mut mode = Self::NONE;
        for flag in input.split('+') {
            match flag {
                "lines" => mode.lines = true,
                "markers" => mode.markers = true,
                "text" => mode.text = true,
                other => {
                    return Err(ModebarError::InvalidData(format!(
                        "unknown scatter mode flag `{other}` in `{input}`"
                    )));
                }
            }
        }
        Ok(mode)
    }
}

impl TryFrom<String> for ScatterMode {
    type Error = ModebarError;

    fn try_from(value: String) -> ModebarResult<Self> {
        value.parse()
    }
}

impl From<ScatterMode> for String {
    fn from(value: ScatterMode) -> Self {
        value.to_string()
    }
}

impl fmt::Display for ScatterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags: Vec<&str> = [
            (self.lines, "lines"),
            (self.markers, "markers"),
            (self.text, "text"),
        ]
        .into_iter()
        .filter_map(|(on, name)| on.then_some(name))
        .collect();

        if flags.is_empty() {
            f.write_str("none")
        } else {
            f.write_str(&flags.join("+"))
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_scatter_mode() -> ScatterMode {
    ScatterMode::LINES_MARKERS
}

/// One resolved data series as seen by the toolbar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceDescriptor {
    #[serde(rename = "type")]
    pub kind: TraceKind,
    #[serde(default = "default_true")]
    pub visible: bool,
    /// Overrides the module's built-in selection capability when set.
    #[serde(default, rename = "selectPoints", skip_serializing_if = "Option::is_none")]
    pub selects_points: Option<bool>,
    /// Only consulted for scatter traces.
    #[serde(default = "default_scatter_mode")]
    pub mode: ScatterMode,
}

impl TraceDescriptor {
    #[must_use]
    pub fn new(kind: impl Into<TraceKind>) -> Self {
        Self {
            kind: kind.into(),
            visible: true,
            selects_points: None,
            mode: default_scatter_mode(),
        }
    }

    #[must_use]
    pub fn scatter(mode: ScatterMode) -> Self {
        Self::new(TraceKind::Scatter).with_mode(mode)
    }

    #[must_use]
    pub fn with_mode(mut self, mode: ScatterMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    #[must_use]
    pub fn with_selects_points(mut self, selects_points: bool) -> Self {
        self.selects_points = Some(selects_points);
        self
    }

    #[must_use]
    pub fn module_selects_points(&self) -> bool {
        self.selects_points
            .unwrap_or_else(|| self.kind.module_selects_points())
    }

    #[must_use]
    pub fn has_markers(&self) -> bool {
        self.visible && self.mode.markers
    }

    #[must_use]
    pub fn has_text(&self) -> bool {
        self.visible && self.mode.text
    }

    /// Scatter traces only qualify when something point-like is drawn;
    /// any other type qualifies through its module capability alone.
    #[must_use]
    pub fn supports_point_selection(&self) -> bool {
        if !self.module_selects_points() {
            return false;
        }
        match self.kind {
            TraceKind::Scatter => self.has_markers() || self.has_text(),
            _ => true,
        }
    }
}
