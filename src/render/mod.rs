//! Scene model and rendering backends.
//!
//! The chart engine builds a [`SceneFrame`] out of backend-agnostic
//! primitives; anything implementing [`Renderer`] can draw it. The crate
//! ships an SVG backend and a headless one for tests.

mod frame;
mod null_renderer;
mod primitives;
mod svg_backend;

pub use frame::{SceneFrame, SceneLayer, SceneLayerKind};
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, LinePrimitive, LineStrokeStyle, MarkerPrimitive, PathPrimitive, RectPrimitive,
    TextHAlign, TextPrimitive,
};
pub use svg_backend::{escape_xml, tooltip_overlay_markup, SvgRenderer};

use crate::error::BurndownResult;

/// Drawing backend for finished scenes.
///
/// Rendering the same mount again must replace its previous content, never
/// append to it. Implementations should reject frames that fail
/// [`SceneFrame::validate`].
pub trait Renderer {
    fn render(&mut self, frame: &SceneFrame) -> BurndownResult<()>;
}
