use crate::error::{ModebarError, ModebarResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ModebarResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ModebarError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    pub fn domain_to_pixel(self, value: f64, length_px: f64) -> ModebarResult<f64> {
        validate_length(length_px)?;
        self.domain_to_pixel_unchecked_length(value, length_px)
    }

    pub fn pixel_to_domain(self, pixel: f64, length_px: f64) -> ModebarResult<f64> {
        validate_length(length_px)?;
        self.pixel_to_domain_unchecked_length(pixel, length_px)
    }

    /// Caller guarantees `length_px` already passed `validate_length`.
    pub(crate) fn domain_to_pixel_unchecked_length(
        self,
        value: f64,
        length_px: f64,
    ) -> ModebarResult<f64> {
        if !value.is_finite() {
            return Err(ModebarError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok(normalized * length_px)
    }

    /// Caller guarantees `length_px` already passed `validate_length`.
    pub(crate) fn pixel_to_domain_unchecked_length(
        self,
        pixel: f64,
        length_px: f64,
    ) -> ModebarResult<f64> {
        if !pixel.is_finite() {
            return Err(ModebarError::InvalidData("pixel must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = pixel / length_px;
        Ok(self.domain_start + normalized * span)
    }
}

pub(crate) fn validate_length(length_px: f64) -> ModebarResult<()> {
    if !length_px.is_finite() || length_px <= 0.0 {
        return Err(ModebarError::InvalidData(format!(
            "axis pixel length must be finite and > 0, got {length_px}"
        )));
    }
    Ok(())
}
