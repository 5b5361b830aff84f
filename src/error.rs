use thiserror::Error;

pub type BurndownResult<T> = Result<T, BurndownError>;

#[derive(Debug, Error)]
pub enum BurndownError {
    #[error("no usable burndown data was provided")]
    MissingData,

    #[error("date `{value}` does not match format `{format}`")]
    MalformedDate { value: String, format: String },

    #[error("time domain needs at least two distinct dates, got {count}")]
    InsufficientDomain { count: usize },

    #[error("failed to acquire burndown data from `{origin}`: {reason}")]
    Acquisition { origin: String, reason: String },

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
