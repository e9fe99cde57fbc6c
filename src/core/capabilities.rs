use serde::{Deserialize, Serialize};

use crate::core::trace::{PlotCategory, TraceDescriptor};

/// Rendering subsystems active for the current chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartCapabilities {
    pub has_gl3d: bool,
    pub has_geo: bool,
    pub has_cartesian: bool,
    pub has_gl2d: bool,
    pub has_pie: bool,
}

impl ChartCapabilities {
    /// Derives subsystem flags from the plot category of each trace.
    #[must_use]
    pub fn infer(traces: &[TraceDescriptor]) -> Self {
        traces
            .iter()
            .fold(Self::default(), |mut caps, trace| {
                match trace.kind.category() {
                    PlotCategory::Cartesian => caps.has_cartesian = true,
                    PlotCategory::Gl3d => caps.has_gl3d = true,
                    PlotCategory::Geo => caps.has_geo = true,
                    PlotCategory::Gl2d => caps.has_gl2d = true,
                    PlotCategory::Pie => caps.has_pie = true,
                    PlotCategory::Unknown => {}
                }
                caps
            })
    }

    #[must_use]
    pub fn with_gl3d(mut self, enabled: bool) -> Self {
        self.has_gl3d = enabled;
        self
    }

    #[must_use]
    pub fn with_geo(mut self, enabled: bool) -> Self {
        self.has_geo = enabled;
        self
    }

    #[must_use]
    pub fn with_cartesian(mut self, enabled: bool) -> Self {
        self.has_cartesian = enabled;
        self
    }

    #[must_use]
    pub fn with_gl2d(mut self, enabled: bool) -> Self {
        self.has_gl2d = enabled;
        self
    }

    #[must_use]
    pub fn with_pie(mut self, enabled: bool) -> Self {
        self.has_pie = enabled;
        self
    }

    /// Zoom/pan style 2D interactions are meaningful.
    #[must_use]
    pub(crate) fn has_2d_axes(self) -> bool {
        self.has_cartesian || self.has_gl2d
    }
}
