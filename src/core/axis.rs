use serde::{Deserialize, Serialize};

use crate::core::scale::{LinearScale, validate_length};
use crate::error::ModebarResult;

/// Axis summary consumed by toolbar resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisDescriptor {
    pub id: String,
    /// Range is locked against user zoom/pan.
    #[serde(default, rename = "fixedrange")]
    pub fixed_range: bool,
}

impl AxisDescriptor {
    #[must_use]
    pub fn new(id: impl Into<String>, fixed_range: bool) -> Self {
        Self {
            id: id.into(),
            fixed_range,
        }
    }
}

/// `true` when no axis can be zoomed or panned. Vacuously `true` for no axes.
#[must_use]
pub fn all_axes_fixed(axes: &[AxisDescriptor]) -> bool {
    axes.iter().all(|axis| axis.fixed_range)
}

/// Shared data/pixel conversion surface for every axis flavor.
pub trait AxisConvert {
    fn data_to_pixel(&self, value: f64) -> ModebarResult<f64>;
    fn pixel_to_data(&self, pixel: f64) -> ModebarResult<f64>;

    /// Re-derives the pixel mapping after layout assigns `length_px`.
    fn set_scale(&mut self, length_px: f64) -> ModebarResult<()>;

    fn descriptor(&self) -> AxisDescriptor;
}

/// 2D axis: linear domain mapped onto a layout-owned pixel length.
///
/// `length_px` is validated on `new` and `set_scale` only.
#[derive(Debug, Clone, PartialEq)]
pub struct CartesianAxis {
    id: String,
    scale: LinearScale,
    length_px: f64,
    fixed_range: bool,
}

impl CartesianAxis {
    pub fn new(
        id: impl Into<String>,
        range_start: f64,
        range_end: f64,
        length_px: f64,
    ) -> ModebarResult<Self> {
        validate_length(length_px)?;
        Ok(Self {
            id: id.into(),
            scale: LinearScale::new(range_start, range_end)?,
            length_px,
            fixed_range: false,
        })
    }

    #[must_use]
    pub fn with_fixed_range(mut self, fixed_range: bool) -> Self {
        self.fixed_range = fixed_range;
        self
    }

    pub fn set_range(&mut self, range_start: f64, range_end: f64) -> ModebarResult<()> {
        self.scale = LinearScale::new(range_start, range_end)?;
        Ok(())
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        self.scale.domain()
    }

    #[must_use]
    pub fn length_px(&self) -> f64 {
        self.length_px
    }
}

impl AxisConvert for CartesianAxis {
    fn data_to_pixel(&self, value: f64) -> ModebarResult<f64> {
        self.scale
            .domain_to_pixel_unchecked_length(value, self.length_px)
    }

    fn pixel_to_data(&self, pixel: f64) -> ModebarResult<f64> {
        self.scale
            .pixel_to_domain_unchecked_length(pixel, self.length_px)
    }

    fn set_scale(&mut self, length_px: f64) -> ModebarResult<()> {
        validate_length(length_px)?;
        self.length_px = length_px;
        Ok(())
    }

    fn descriptor(&self) -> AxisDescriptor {
        AxisDescriptor::new(self.id.clone(), self.fixed_range)
    }
}

/// 3D scene axis.
///
/// Reuses the cartesian data/pixel conversion, but the scene camera owns the
/// projection, so layout-driven rescaling is ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneAxis {
    inner: CartesianAxis,
}

impl SceneAxis {
    #[must_use]
    pub fn new(inner: CartesianAxis) -> Self {
        Self { inner }
    }

    #[must_use]
    pub fn cartesian(&self) -> &CartesianAxis {
        &self.inner
    }
}

impl AxisConvert for SceneAxis {
    fn data_to_pixel(&self, value: f64) -> ModebarResult<f64> {
        self.inner.data_to_pixel(value)
    }

    fn pixel_to_data(&self, pixel: f64) -> ModebarResult<f64> {
        self.inner.pixel_to_data(pixel)
    }

    fn set_scale(&mut self, _length_px: f64) -> ModebarResult<()> {
        Ok(())
    }

    fn descriptor(&self) -> AxisDescriptor {
        self.inner.descriptor()
    }
}
