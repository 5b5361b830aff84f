//! Ideal and actual trend synthesis.
//!
//! The ideal line is a straight two-point descent from the planned hours at
//! the sprint start to zero at the sprint end. The actual line threads the
//! recorded burndowns in domain order, skipping days whose hours still carry
//! the unrecorded sentinel.

use chrono::NaiveDate;
use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::core::mapping::AxisMapping;
use crate::core::types::TrendPoint;
use crate::data::BurndownRecord;

/// Hour value that marks a day without a recorded measurement.
pub const UNRECORDED_HOURS: f64 = -1.0;

/// Straight planned descent: full hours on the first day, zero on the last.
#[must_use]
pub fn ideal_trend(start: NaiveDate, planned_hours: f64, end: NaiveDate) -> SmallVec<[TrendPoint; 2]> {
    SmallVec::from_buf([
        TrendPoint::new(start, planned_hours),
        TrendPoint::new(end, 0.0),
    ])
}

/// Records that actually carry a measurement, in their original order.
#[must_use]
pub fn retained_records(records: &[BurndownRecord], sentinel: f64) -> Vec<&BurndownRecord> {
    records
        .iter()
        .filter(|record| record.hours != sentinel)
        .collect()
}

/// Measured burndown line through every retained record.
#[must_use]
pub fn actual_trend(records: &[BurndownRecord], sentinel: f64) -> Vec<TrendPoint> {
    retained_records(records, sentinel)
        .into_iter()
        .map(|record| TrendPoint::new(record.date, record.hours))
        .collect()
}

/// Largest hour value among the given points, clamped to zero when the set
/// is empty or entirely negative.
#[must_use]
pub fn max_hours(points: &[TrendPoint]) -> f64 {
    points
        .iter()
        .map(|point| OrderedFloat(point.hours))
        .max()
        .map_or(0.0, |max| max.into_inner().max(0.0))
}

/// Projects trend points into inner pixel space through both axes.
#[must_use]
pub fn project_trend(points: &[TrendPoint], mapping: &AxisMapping) -> Vec<(f64, f64)> {
    let mut projected = Vec::with_capacity(points.len());
    for point in points {
        projected.push((
            mapping.time().date_to_pixel(point.date),
            mapping.hours().hours_to_pixel(point.hours),
        ));
    }
    projected
}
