//! Data source classification and asynchronous acquisition.
//!
//! Hosts hand the chart either a ready payload, a JSON document as text, or
//! a URL to fetch one from. String arguments are classified by shape: text
//! that opens a JSON object is treated as the document itself, anything
//! else as a URL reference. Fetching is abstracted behind [`DataAcquirer`]
//! so the engine never owns a network stack.

use std::future::Future;

use serde_json::Value;
use tracing::debug;

use crate::data::dataset::BurndownPayload;
use crate::error::{BurndownError, BurndownResult};

/// Where the burndown payload comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSource {
    /// A payload the host already constructed.
    Inline(BurndownPayload),
    /// A JSON document passed as text.
    JsonText(String),
    /// A URL the acquirer must fetch a JSON document from.
    Url(String),
}

impl ChartSource {
    /// Classifies a string argument: JSON text when it opens an object,
    /// otherwise a URL reference. Blank text carries no data at all.
    pub fn from_text(text: &str) -> BurndownResult<Self> {
        if text.trim().is_empty() {
            return Err(BurndownError::MissingData);
        }
        if text.starts_with('{') {
            Ok(Self::JsonText(text.to_owned()))
        } else {
            Ok(Self::Url(text.to_owned()))
        }
    }
}

impl From<BurndownPayload> for ChartSource {
    fn from(payload: BurndownPayload) -> Self {
        Self::Inline(payload)
    }
}

/// Fetches JSON documents on behalf of the chart engine.
///
/// The engine awaits at most one fetch per render pass. Implementations
/// report transport failures through the returned result; the engine wraps
/// them into [`BurndownError::Acquisition`] context.
pub trait DataAcquirer {
    fn fetch_json(&mut self, url: &str) -> impl Future<Output = BurndownResult<String>> + Send;
}

/// Resolves a source into a payload, fetching when the source is a URL.
pub async fn acquire_payload<A: DataAcquirer>(
    source: &ChartSource,
    acquirer: &mut A,
) -> BurndownResult<BurndownPayload> {
    match source {
        ChartSource::Inline(payload) => Ok(payload.clone()),
        ChartSource::JsonText(text) => parse_payload(text, "inline json"),
        ChartSource::Url(url) => {
            debug!(url = %url, "fetching burndown payload");
            let body = acquirer
                .fetch_json(url)
                .await
                .map_err(|err| match err {
                    already @ BurndownError::Acquisition { .. } => already,
                    other => BurndownError::Acquisition {
                        origin: url.clone(),
                        reason: other.to_string(),
                    },
                })?;
            parse_payload(&body, url)
        }
    }
}

/// Parses JSON text into a payload.
///
/// Blank text and JSON that is not an object mean no data was supplied;
/// malformed JSON or a shape mismatch is an acquisition failure tagged with
/// its origin.
pub fn parse_payload(text: &str, origin: &str) -> BurndownResult<BurndownPayload> {
    if text.trim().is_empty() {
        return Err(BurndownError::MissingData);
    }
    let value: Value = serde_json::from_str(text).map_err(|err| BurndownError::Acquisition {
        origin: origin.to_owned(),
        reason: format!("payload is not valid json: {err}"),
    })?;
    if !value.is_object() {
        return Err(BurndownError::MissingData);
    }
    serde_json::from_value(value).map_err(|err| BurndownError::Acquisition {
        origin: origin.to_owned(),
        reason: format!("payload does not match the burndown contract: {err}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_text_classifies_as_json() {
        let source = ChartSource::from_text("{\"start\": \"2024-Jan-01\"}")
            .expect("text should classify");
        assert!(matches!(source, ChartSource::JsonText(_)));
    }

    #[test]
    fn non_object_text_classifies_as_url() {
        let source =
            ChartSource::from_text("https://example.test/burndown.json").expect("text should classify");
        assert!(matches!(source, ChartSource::Url(_)));
    }

    #[test]
    fn blank_text_is_missing_data() {
        assert!(matches!(
            ChartSource::from_text("   "),
            Err(BurndownError::MissingData)
        ));
    }

    #[test]
    fn non_object_json_is_missing_data() {
        assert!(matches!(
            parse_payload("[1, 2, 3]", "inline json"),
            Err(BurndownError::MissingData)
        ));
    }

    #[test]
    fn malformed_json_reports_its_origin() {
        let err = parse_payload("{not json", "https://example.test/b.json").unwrap_err();
        match err {
            BurndownError::Acquisition { origin, .. } => {
                assert_eq!(origin, "https://example.test/b.json");
            }
            other => panic!("expected Acquisition, got {other:?}"),
        }
    }
}
