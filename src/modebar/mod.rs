//! Mode bar (chart toolbar) configuration.
//!
//! Chart state plus host options go in, an ordered list of button groups
//! comes out. Drawing the toolbar is left to a host `ToolbarWidget`.

pub mod button;
pub mod config;
pub mod json_contract;
pub mod manager;
pub mod registry;
pub mod resolver;

pub use button::{ButtonEntry, ButtonGroup, ButtonSpec, ToolbarConfig};
pub use config::{AddedButtons, ModebarConfig};
pub use json_contract::{TOOLBAR_JSON_SCHEMA_V1, ToolbarJsonContractV1};
pub use manager::{ModebarManager, ModebarOutcome, ToolbarWidget};
pub use registry::{ButtonRegistry, default_registry};
pub use resolver::{NameGroup, default_button_names, resolve_toolbar};

use crate::core::ChartState;
use crate::error::ModebarResult;

impl ChartState {
    /// Resolves this chart's toolbar against the built-in registry.
    pub fn resolve_toolbar(&self, config: &ModebarConfig) -> ModebarResult<ToolbarConfig> {
        resolve_toolbar(
            default_registry(),
            self.capabilities(),
            &self.traces,
            &self.axes,
            config,
        )
    }
}
