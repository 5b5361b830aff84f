//! Payload contract, normalization, and acquisition.

pub mod dataset;
pub mod normalize;
pub mod source;

pub use dataset::{BurndownDataset, BurndownPayload, BurndownRecord, BurndownRecordPayload};
pub use normalize::{normalize_dataset, parse_date};
pub use source::{acquire_payload, parse_payload, ChartSource, DataAcquirer};
