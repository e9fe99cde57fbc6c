use serde::{Deserialize, Serialize};

use crate::core::{AxisDescriptor, ChartCapabilities, TraceDescriptor};

/// Read-only snapshot of the chart-side inputs the toolbar depends on.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChartState {
    /// Explicit subsystem flags; inferred from `traces` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<ChartCapabilities>,
    #[serde(default)]
    pub traces: Vec<TraceDescriptor>,
    #[serde(default)]
    pub axes: Vec<AxisDescriptor>,
}

impl ChartState {
    #[must_use]
    pub fn new(traces: Vec<TraceDescriptor>, axes: Vec<AxisDescriptor>) -> Self {
        Self {
            capabilities: None,
            traces,
            axes,
        }
    }

    #[must_use]
    pub fn with_capabilities(mut self, capabilities: ChartCapabilities) -> Self {
        self.capabilities = Some(capabilities);
        self
    }

    #[must_use]
    pub fn capabilities(&self) -> ChartCapabilities {
        self.capabilities
            .unwrap_or_else(|| ChartCapabilities::infer(&self.traces))
    }
}
