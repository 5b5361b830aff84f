//! Linear vertical axis for remaining hours.
//!
//! Screen space grows downward while hours grow upward, so the mapping is
//! inverted: zero hours sits on the baseline at `inner_height` and the
//! domain maximum sits at pixel `0.0`.

use serde::{Deserialize, Serialize};

use crate::error::{BurndownError, BurndownResult};

/// Inverted linear scale from hour values to vertical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoursScale {
    y_max: f64,
    inner_height: f64,
}

impl HoursScale {
    pub fn new(y_max: f64, inner_height: f64) -> BurndownResult<Self> {
        if !y_max.is_finite() || y_max < 0.0 {
            return Err(BurndownError::InvalidData(format!(
                "hour domain maximum must be finite and non-negative, got {y_max}"
            )));
        }
        if !inner_height.is_finite() || inner_height <= 0.0 {
            return Err(BurndownError::InvalidData(format!(
                "inner height must be a positive finite number, got {inner_height}"
            )));
        }
        Ok(Self {
            y_max,
            inner_height,
        })
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    #[must_use]
    pub fn inner_height(&self) -> f64 {
        self.inner_height
    }

    /// Maps an hour value to a vertical pixel.
    ///
    /// `0.0` maps exactly to `inner_height` and `y_max` exactly to `0.0`.
    /// With an all-zero domain the scale degenerates to a constant line on
    /// the baseline rather than dividing by zero.
    #[must_use]
    pub fn hours_to_pixel(&self, hours: f64) -> f64 {
        if self.y_max <= 0.0 {
            return self.inner_height;
        }
        self.inner_height - (hours / self.y_max) * self.inner_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_and_ceiling_are_exact() {
        let scale = HoursScale::new(40.0, 450.0).expect("scale should build");
        assert_eq!(scale.hours_to_pixel(0.0), 450.0);
        assert_eq!(scale.hours_to_pixel(40.0), 0.0);
    }

    #[test]
    fn zero_maximum_degenerates_to_baseline() {
        let scale = HoursScale::new(0.0, 450.0).expect("scale should build");
        assert_eq!(scale.hours_to_pixel(0.0), 450.0);
        assert_eq!(scale.hours_to_pixel(17.5), 450.0);
    }

    #[test]
    fn negative_maximum_is_rejected() {
        assert!(HoursScale::new(-1.0, 450.0).is_err());
    }
}
