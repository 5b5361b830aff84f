//! Paired axis mapping and tick generation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::hours_scale::HoursScale;
use crate::core::time_scale::TimeScale;
use crate::core::trend;
use crate::core::types::TrendPoint;
use crate::error::BurndownResult;

/// Number of gridline values on the hours axis, endpoints included.
pub const HOURS_TICK_COUNT: usize = 11;

/// Both chart axes, resolved against one dataset and one inner area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisMapping {
    time: TimeScale,
    hours: HoursScale,
}

impl AxisMapping {
    /// Resolves both scales for a canonical date domain and the retained
    /// actual-trend points.
    ///
    /// The hours ceiling is taken over the retained points only, so
    /// sentinel-valued days never stretch the vertical axis.
    pub fn build(
        domain: &[NaiveDate],
        actual: &[TrendPoint],
        inner_width: f64,
        inner_height: f64,
    ) -> BurndownResult<Self> {
        let time = TimeScale::from_domain(domain, inner_width)?;
        let hours = HoursScale::new(trend::max_hours(actual), inner_height)?;
        Ok(Self { time, hours })
    }

    #[must_use]
    pub fn time(&self) -> &TimeScale {
        &self.time
    }

    #[must_use]
    pub fn hours(&self) -> &HoursScale {
        &self.hours
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.hours.y_max()
    }

    /// One tick per domain date, paired with its knot pixel.
    #[must_use]
    pub fn x_ticks(&self) -> Vec<(NaiveDate, f64)> {
        self.time
            .dates()
            .iter()
            .enumerate()
            .map(|(index, date)| (*date, self.time.pixel_at_index(index)))
            .collect()
    }

    /// Evenly divided hour ticks from zero to the ceiling, each paired with
    /// its pixel. A zero ceiling collapses to a single baseline tick.
    #[must_use]
    pub fn y_ticks(&self) -> Vec<(f64, f64)> {
        if self.hours.y_max() <= 0.0 {
            return vec![(0.0, self.hours.inner_height())];
        }
        even_ticks(self.hours.y_max(), HOURS_TICK_COUNT)
            .into_iter()
            .map(|value| (value, self.hours.hours_to_pixel(value)))
            .collect()
    }
}

/// Divides `[0, max]` into `count` evenly spaced values, endpoints exact.
fn even_ticks(max: f64, count: usize) -> Vec<f64> {
    let denominator = (count - 1) as f64;
    (0..count)
        .map(|index| max * (index as f64 / denominator))
        .collect()
}
