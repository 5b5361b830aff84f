//! Ordinal time axis with a continuous pixel mapping.
//!
//! The horizontal axis is anchored on the dataset's canonical date domain:
//! each of the `N` dates becomes a knot, and the knots are spaced evenly
//! across the inner width regardless of how many calendar days separate
//! them. Between knots the mapping interpolates linearly on calendar-day
//! offsets, so a date that falls halfway between two knots lands halfway
//! between their pixels even when the knots themselves are unevenly spaced
//! in time. Dates outside the domain extrapolate along the terminal
//! segment.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{BurndownError, BurndownResult};

/// Piecewise-linear scale from calendar dates to horizontal pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    dates: Vec<NaiveDate>,
    inner_width: f64,
}

impl TimeScale {
    /// Builds a scale over a canonical (sorted, deduplicated) date domain.
    ///
    /// The domain must hold at least two distinct dates; a single date has
    /// no spacing to divide the axis by.
    pub fn from_domain(domain: &[NaiveDate], inner_width: f64) -> BurndownResult<Self> {
        if !inner_width.is_finite() || inner_width <= 0.0 {
            return Err(BurndownError::InvalidData(format!(
                "inner width must be a positive finite number, got {inner_width}"
            )));
        }
        if domain.len() < 2 {
            return Err(BurndownError::InsufficientDomain {
                count: domain.len(),
            });
        }
        if domain.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(BurndownError::InvalidData(
                "time domain must be strictly increasing".to_owned(),
            ));
        }
        Ok(Self {
            dates: domain.to_vec(),
            inner_width,
        })
    }

    #[must_use]
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    #[must_use]
    pub fn inner_width(&self) -> f64 {
        self.inner_width
    }

    /// Pixel gap between adjacent knots.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.inner_width / (self.dates.len() - 1) as f64
    }

    /// Pixel position of the knot at `index`.
    ///
    /// Computed as a ratio of the inner width so the first knot is exactly
    /// `0.0` and the last exactly `inner_width`.
    #[must_use]
    pub fn pixel_at_index(&self, index: usize) -> f64 {
        let denominator = (self.dates.len() - 1) as f64;
        self.inner_width * (index as f64 / denominator)
    }

    /// Maps an arbitrary date to a horizontal pixel.
    ///
    /// Domain members land exactly on their knot. Other dates interpolate
    /// on calendar-day offsets between the bracketing knots; dates before
    /// the first knot or after the last extrapolate along the nearest
    /// segment.
    #[must_use]
    pub fn date_to_pixel(&self, date: NaiveDate) -> f64 {
        let (lower, upper) = match self.dates.binary_search(&date) {
            Ok(index) => return self.pixel_at_index(index),
            Err(0) => (0, 1),
            Err(insert) if insert >= self.dates.len() => {
                (self.dates.len() - 2, self.dates.len() - 1)
            }
            Err(insert) => (insert - 1, insert),
        };
        let lower_day = self.day_offset(self.dates[lower]);
        let upper_day = self.day_offset(self.dates[upper]);
        let target_day = self.day_offset(date);
        // Strictly increasing domain guarantees a non-zero day gap.
        let fraction = (target_day - lower_day) / (upper_day - lower_day);
        let knot_position = lower as f64 + fraction;
        self.inner_width * (knot_position / (self.dates.len() - 1) as f64)
    }

    fn day_offset(&self, date: NaiveDate) -> f64 {
        (date - self.dates[0]).num_days() as f64
    }
}
