pub mod axis;
pub mod capabilities;
pub mod chart;
pub mod scale;
pub mod trace;

pub use axis::{AxisConvert, AxisDescriptor, CartesianAxis, SceneAxis, all_axes_fixed};
pub use capabilities::ChartCapabilities;
pub use chart::ChartState;
pub use scale::LinearScale;
pub use trace::{PlotCategory, ScatterMode, TraceDescriptor, TraceKind};
