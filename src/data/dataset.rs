//! Wire-format payload and its normalized counterpart.
//!
//! The payload mirrors the host contract verbatim: camelCase keys, dates as
//! formatted strings. Normalization turns it into a [`BurndownDataset`]
//! whose dates are parsed and whose domain is canonical.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Raw burndown payload exactly as hosts supply it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BurndownPayload {
    pub start: String,
    pub end: String,
    pub planned_hours: f64,
    pub time_domain: Vec<String>,
    pub burndowns: Vec<BurndownRecordPayload>,
}

/// One raw daily record from the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BurndownRecordPayload {
    pub date: String,
    pub hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl BurndownRecordPayload {
    #[must_use]
    pub fn new(date: impl Into<String>, hours: f64) -> Self {
        Self {
            date: date.into(),
            hours,
            comment: None,
        }
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// Normalized dataset with parsed dates and a canonical time domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BurndownDataset {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub planned_hours: f64,
    pub time_domain: Vec<NaiveDate>,
    pub burndowns: Vec<BurndownRecord>,
}

/// One normalized daily record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BurndownRecord {
    pub date: NaiveDate,
    pub hours: f64,
    pub comment: Option<String>,
}

impl BurndownRecord {
    #[must_use]
    pub fn new(date: NaiveDate, hours: f64) -> Self {
        Self {
            date,
            hours,
            comment: None,
        }
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_round_trips_camel_case_keys() {
        let json = r#"{
            "start": "2024-Jan-01",
            "end": "2024-Jan-10",
            "plannedHours": 40,
            "timeDomain": ["2024-Jan-01", "2024-Jan-10"],
            "burndowns": [{"date": "2024-Jan-01", "hours": 40, "comment": "kickoff"}]
        }"#;
        let payload: BurndownPayload =
            serde_json::from_str(json).expect("payload should deserialize");
        assert_eq!(payload.planned_hours, 40.0);
        assert_eq!(payload.time_domain.len(), 2);
        assert_eq!(payload.burndowns[0].comment.as_deref(), Some("kickoff"));

        let text = serde_json::to_string(&payload).expect("payload should serialize");
        assert!(text.contains("\"plannedHours\""));
        assert!(text.contains("\"timeDomain\""));
    }

    #[test]
    fn absent_comment_is_omitted_on_serialize() {
        let record = BurndownRecordPayload::new("2024-Jan-02", 32.5);
        let text = serde_json::to_string(&record).expect("record should serialize");
        assert!(!text.contains("comment"));
    }
}
