//! chart-modebar: toolbar configuration for charting engines.
//!
//! Decides which interactive buttons a chart toolbar shows, from the chart's
//! active plot subsystems, its traces and axes, and host overrides.

pub mod core;
pub mod error;
pub mod modebar;
pub mod telemetry;

pub use error::{ModebarError, ModebarResult};
pub use modebar::{ModebarConfig, ToolbarConfig, resolve_toolbar};
