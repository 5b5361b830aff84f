//! Core chart math: axis scales, trend synthesis, and shared geometry types.

pub mod hours_scale;
pub mod mapping;
pub mod time_scale;
pub mod trend;
pub mod types;

pub use hours_scale::HoursScale;
pub use mapping::{AxisMapping, HOURS_TICK_COUNT};
pub use time_scale::TimeScale;
pub use trend::{
    actual_trend, ideal_trend, max_hours, project_trend, retained_records, UNRECORDED_HOURS,
};
pub use types::{Margin, TrendPoint, Viewport};
