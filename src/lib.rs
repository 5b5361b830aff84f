//! Burndown chart engine with a backend-agnostic scene model.
//!
//! The crate turns a sprint's burndown payload into a layered scene:
//! dates are parsed and canonicalized, an ordinal time axis and an
//! inverted hours axis are resolved against the drawable area, the ideal
//! and actual trend lines are synthesized and projected, and the result
//! is handed to a [`render::Renderer`]. An SVG backend ships in the box;
//! a [`render::NullRenderer`] keeps tests headless.
//!
//! Rendering is synchronous end to end except for data acquisition:
//! [`render_source`] awaits a single fetch when the source is a URL, then
//! runs the same pipeline. Hover tooltips are modeled as a small state
//! machine in [`interaction`], decoupled from any event loop.

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{
    render, render_source, render_with_style, ChartConfig, ChartLayout, RenderStyle, RenderedChart,
};
pub use data::{BurndownPayload, BurndownRecord, BurndownRecordPayload, ChartSource, DataAcquirer};
pub use error::{BurndownError, BurndownResult};
