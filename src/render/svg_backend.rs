//! SVG markup backend.
//!
//! Produces one standalone SVG document per mount point. Rendering to a
//! mount that already holds a document replaces it, so repeated renders
//! never stack stale marks.

use indexmap::IndexMap;

use crate::error::BurndownResult;
use crate::interaction::TooltipOverlay;
use crate::render::frame::{SceneFrame, SceneLayer, SceneLayerKind};
use crate::render::primitives::{
    Color, LineStrokeStyle, RectPrimitive, TextHAlign, TextPrimitive,
};
use crate::render::Renderer;

const DASH_PATTERN: &str = "5 5";
const OVERLAY_LINE_HEIGHT: f64 = 16.0;
const OVERLAY_FONT_SIZE: f64 = 11.0;
const OVERLAY_FILL: Color = Color::rgba(1.0, 1.0, 1.0, 0.92);
const OVERLAY_TEXT_COLOR: Color = Color::rgb(0.15, 0.15, 0.15);

/// Renderer that serializes scenes into SVG documents, keyed by mount.
#[derive(Debug, Default, Clone)]
pub struct SvgRenderer {
    documents: IndexMap<String, String>,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Document last rendered for `mount`, if any.
    #[must_use]
    pub fn document(&self, mount: &str) -> Option<&str> {
        self.documents.get(mount).map(String::as_str)
    }

    #[must_use]
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &SceneFrame) -> BurndownResult<()> {
        frame.validate()?;
        let document = svg_document(frame);
        self.documents.insert(frame.mount.clone(), document);
        Ok(())
    }
}

fn svg_document(frame: &SceneFrame) -> String {
    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">",
        frame.viewport.width, frame.viewport.height
    ));
    svg.push_str(&format!(
        "<g transform=\"translate({},{})\">",
        frame.margin.left, frame.margin.top
    ));
    for layer in &frame.layers {
        if layer.is_empty() {
            continue;
        }
        svg.push_str(&layer_markup(layer));
    }
    svg.push_str("</g></svg>");
    svg
}

fn layer_markup(layer: &SceneLayer) -> String {
    let mut group = format!("<g class=\"{}\">", layer.kind.css_class());
    for line in &layer.lines {
        group.push_str(&format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            line.x1,
            line.y1,
            line.x2,
            line.y2,
            line.color.to_css_rgba(),
            line.stroke_width
        ));
    }
    for path in &layer.paths {
        let mut data = String::new();
        for (index, (x, y)) in path.points.iter().enumerate() {
            let command = if index == 0 { 'M' } else { 'L' };
            data.push_str(&format!("{command}{x},{y}"));
        }
        let dash = match path.stroke_style {
            LineStrokeStyle::Solid => String::new(),
            LineStrokeStyle::Dashed => format!(" stroke-dasharray=\"{DASH_PATTERN}\""),
        };
        group.push_str(&format!(
            "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"{}/>",
            data,
            path.color.to_css_rgba(),
            path.stroke_width,
            dash
        ));
    }
    for rect in &layer.rects {
        group.push_str(&format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"{}\" ry=\"{}\" fill=\"{}\"/>",
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            rect.corner_radius,
            rect.corner_radius,
            rect.fill.to_css_rgba()
        ));
    }
    for text in &layer.texts {
        group.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" font-size=\"{}\" text-anchor=\"{}\" fill=\"{}\">{}</text>",
            text.x,
            text.y,
            text.font_size_px,
            text_anchor(text.h_align),
            text.color.to_css_rgba(),
            escape_xml(&text.text)
        ));
    }
    for marker in &layer.markers {
        group.push_str(&format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>",
            marker.x,
            marker.y,
            marker.radius,
            marker.color.to_css_rgba()
        ));
    }
    group.push_str("</g>");
    group
}

fn text_anchor(h_align: TextHAlign) -> &'static str {
    match h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    }
}

/// Markup fragment for a hover overlay, grouped under the `comment` class.
///
/// Hosts insert and remove this fragment on pointer transitions; the chart
/// document itself stays untouched. The group class matches the marker
/// layer so the host stylesheet can restyle both together.
#[must_use]
pub fn tooltip_overlay_markup(overlay: &TooltipOverlay) -> String {
    let mut layer = SceneLayer::empty(SceneLayerKind::Markers);
    layer.rects.push(
        RectPrimitive::new(
            overlay.x,
            overlay.y,
            overlay.width,
            overlay.height,
            OVERLAY_FILL,
        )
        .with_corner_radius(overlay.corner_radius),
    );
    let (text_x, text_y) = overlay.content_origin();
    for (index, line) in overlay.lines.iter().enumerate() {
        layer.texts.push(TextPrimitive::new(
            line.clone(),
            text_x,
            text_y + OVERLAY_LINE_HEIGHT * (index + 1) as f64,
            OVERLAY_FONT_SIZE,
            OVERLAY_TEXT_COLOR,
            TextHAlign::Left,
        ));
    }
    layer_markup(&layer)
}

/// Escapes the five XML-reserved characters for text content.
#[must_use]
pub fn escape_xml(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for character in raw.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Margin, Viewport};
    use crate::render::primitives::{Color, TextPrimitive};
    use crate::render::SceneLayerKind;

    #[test]
    fn escape_covers_reserved_characters() {
        assert_eq!(
            escape_xml("a < b & \"c\" > 'd'"),
            "a &lt; b &amp; &quot;c&quot; &gt; &apos;d&apos;"
        );
    }

    #[test]
    fn rendering_twice_replaces_the_mount_document() {
        let mut renderer = SvgRenderer::new();
        let mut frame = SceneFrame::new("#chart", Viewport::new(960, 500), Margin::default());
        if let Some(layer) = frame.layer_mut(SceneLayerKind::Axes) {
            layer.texts.push(TextPrimitive::new(
                "first",
                0.0,
                0.0,
                11.0,
                Color::rgb(0.0, 0.0, 0.0),
                TextHAlign::Left,
            ));
        }
        renderer.render(&frame).expect("frame should render");

        if let Some(layer) = frame.layer_mut(SceneLayerKind::Axes) {
            layer.texts[0].text = "second".to_owned();
        }
        renderer.render(&frame).expect("frame should render");

        assert_eq!(renderer.document_count(), 1);
        let document = renderer.document("#chart").expect("document exists");
        assert!(document.contains("second"));
        assert!(!document.contains("first"));
    }
}
