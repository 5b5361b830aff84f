//! Payload normalization: date parsing and domain canonicalization.

use chrono::NaiveDate;
use tracing::warn;

use crate::data::dataset::{BurndownDataset, BurndownPayload, BurndownRecord};
use crate::error::{BurndownError, BurndownResult};

/// Parses one formatted date string against the configured format.
pub fn parse_date(value: &str, format: &str) -> BurndownResult<NaiveDate> {
    NaiveDate::parse_from_str(value, format).map_err(|_| BurndownError::MalformedDate {
        value: value.to_owned(),
        format: format.to_owned(),
    })
}

/// Normalizes a raw payload into a dataset ready for axis construction.
///
/// Every date string must parse against `date_format`; the first failure
/// aborts with the offending value. The time domain is canonicalized by
/// sorting and deduplicating, and every hour value must be finite. The
/// payload itself is left untouched.
pub fn normalize_dataset(
    payload: &BurndownPayload,
    date_format: &str,
) -> BurndownResult<BurndownDataset> {
    let start = parse_date(&payload.start, date_format)?;
    let end = parse_date(&payload.end, date_format)?;
    ensure_finite_hours(payload.planned_hours, "plannedHours")?;

    let mut time_domain = Vec::with_capacity(payload.time_domain.len());
    for raw in &payload.time_domain {
        time_domain.push(parse_date(raw, date_format)?);
    }
    let time_domain = canonicalize_domain(time_domain);

    let mut burndowns = Vec::with_capacity(payload.burndowns.len());
    for record in &payload.burndowns {
        ensure_finite_hours(record.hours, "hours")?;
        let mut normalized = BurndownRecord::new(parse_date(&record.date, date_format)?, record.hours);
        if let Some(comment) = &record.comment {
            normalized = normalized.with_comment(comment.clone());
        }
        burndowns.push(normalized);
    }

    Ok(BurndownDataset {
        start,
        end,
        planned_hours: payload.planned_hours,
        time_domain,
        burndowns,
    })
}

/// Sorts the domain ascending and drops repeated dates.
fn canonicalize_domain(mut dates: Vec<NaiveDate>) -> Vec<NaiveDate> {
    let original_count = dates.len();
    dates.sort_unstable();
    dates.dedup();
    if dates.len() < original_count {
        warn!(
            dropped = original_count - dates.len(),
            canonical_count = dates.len(),
            "dropped duplicate dates from time domain"
        );
    }
    dates
}

fn ensure_finite_hours(hours: f64, field: &str) -> BurndownResult<()> {
    if !hours.is_finite() {
        return Err(BurndownError::InvalidData(format!(
            "{field} must be a finite number, got {hours}"
        )));
    }
    Ok(())
}
