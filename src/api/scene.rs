//! Scene assembly: turns resolved geometry into a layered frame.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::api::config::{ChartConfig, ChartLayout};
use crate::core::mapping::AxisMapping;
use crate::render::{
    Color, LinePrimitive, LineStrokeStyle, MarkerPrimitive, PathPrimitive, SceneFrame,
    SceneLayerKind, TextHAlign, TextPrimitive,
};

/// Caption drawn at the top of the hours axis.
pub const HOURS_CAPTION: &str = "Hours";

/// Visual styling for the assembled scene.
///
/// The numeric contract of the chart lives in the scales; everything here
/// only affects how the resulting geometry is painted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    pub axis_color: Color,
    pub axis_stroke_width: f64,
    pub tick_length_px: f64,
    pub label_color: Color,
    pub label_font_size_px: f64,
    /// Baseline distance of x tick labels below the tick end.
    pub x_label_gap_px: f64,
    /// Gap between y tick labels and the tick end.
    pub y_label_gap_px: f64,
    /// How far the axis caption baseline rises above the plotting area.
    pub caption_rise_px: f64,
    pub grid_color: Color,
    pub grid_stroke_width: f64,
    pub ideal_color: Color,
    pub ideal_stroke_style: LineStrokeStyle,
    pub actual_color: Color,
    pub trend_stroke_width: f64,
    pub marker_color: Color,
    pub marker_radius_px: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            axis_color: Color::rgb(0.15, 0.15, 0.15),
            axis_stroke_width: 1.0,
            tick_length_px: 6.0,
            label_color: Color::rgb(0.15, 0.15, 0.15),
            label_font_size_px: 11.0,
            x_label_gap_px: 14.0,
            y_label_gap_px: 4.0,
            caption_rise_px: 6.0,
            grid_color: Color::rgb(0.85, 0.85, 0.85),
            grid_stroke_width: 1.0,
            ideal_color: Color::rgb(0.55, 0.55, 0.55),
            ideal_stroke_style: LineStrokeStyle::Dashed,
            actual_color: Color::rgb(0.82, 0.22, 0.18),
            trend_stroke_width: 1.5,
            marker_color: Color::rgb(0.25, 0.25, 0.25),
            // Matches a 64 square-pixel symbol area.
            marker_radius_px: 4.514,
        }
    }
}

/// Assembles the layered scene for one render pass.
///
/// Trend geometry arrives already projected into inner pixels; this stage
/// only places primitives. The ideal path is stroked before the actual
/// path by layer order, and markers are emitted only when comments are on.
pub(crate) fn build_scene(
    layout: &ChartLayout,
    mapping: &AxisMapping,
    ideal_px: &[(f64, f64)],
    actual_px: &[(f64, f64)],
    style: &RenderStyle,
    config: &ChartConfig,
) -> SceneFrame {
    let inner_width = layout.inner_width;
    let inner_height = layout.inner_height;
    let mut frame = SceneFrame::new(config.mount_selector.clone(), layout.viewport, layout.margin);

    if config.show_grid {
        if let Some(grid) = frame.layer_mut(SceneLayerKind::Grid) {
            for (_, x) in mapping.x_ticks() {
                grid.lines.push(LinePrimitive::new(
                    x,
                    0.0,
                    x,
                    inner_height,
                    style.grid_stroke_width,
                    style.grid_color,
                ));
            }
            for (_, y) in mapping.y_ticks() {
                grid.lines.push(LinePrimitive::new(
                    0.0,
                    y,
                    inner_width,
                    y,
                    style.grid_stroke_width,
                    style.grid_color,
                ));
            }
        }
    }

    if let Some(axes) = frame.layer_mut(SceneLayerKind::Axes) {
        axes.lines.push(LinePrimitive::new(
            0.0,
            inner_height,
            inner_width,
            inner_height,
            style.axis_stroke_width,
            style.axis_color,
        ));
        axes.lines.push(LinePrimitive::new(
            0.0,
            0.0,
            0.0,
            inner_height,
            style.axis_stroke_width,
            style.axis_color,
        ));
        for (date, x) in mapping.x_ticks() {
            axes.lines.push(LinePrimitive::new(
                x,
                inner_height,
                x,
                inner_height + style.tick_length_px,
                style.axis_stroke_width,
                style.axis_color,
            ));
            axes.texts.push(TextPrimitive::new(
                date.format(&config.date_format).to_string(),
                x,
                inner_height + style.tick_length_px + style.x_label_gap_px,
                style.label_font_size_px,
                style.label_color,
                TextHAlign::Center,
            ));
        }
        for (value, y) in mapping.y_ticks() {
            axes.lines.push(LinePrimitive::new(
                -style.tick_length_px,
                y,
                0.0,
                y,
                style.axis_stroke_width,
                style.axis_color,
            ));
            axes.texts.push(TextPrimitive::new(
                format_hours(value),
                -(style.tick_length_px + style.y_label_gap_px),
                y + style.label_font_size_px * 0.32,
                style.label_font_size_px,
                style.label_color,
                TextHAlign::Right,
            ));
        }
        axes.texts.push(TextPrimitive::new(
            HOURS_CAPTION,
            0.0,
            -style.caption_rise_px,
            style.label_font_size_px,
            style.label_color,
            TextHAlign::Right,
        ));
    }

    if let Some(ideal) = frame.layer_mut(SceneLayerKind::IdealTrend) {
        ideal.paths.push(
            PathPrimitive::new(ideal_px.to_vec(), style.trend_stroke_width, style.ideal_color)
                .with_stroke_style(style.ideal_stroke_style),
        );
    }

    if !actual_px.is_empty() {
        if let Some(actual) = frame.layer_mut(SceneLayerKind::ActualTrend) {
            actual.paths.push(PathPrimitive::new(
                actual_px.to_vec(),
                style.trend_stroke_width,
                style.actual_color,
            ));
        }
    }

    if config.show_comments {
        if let Some(markers) = frame.layer_mut(SceneLayerKind::Markers) {
            for (x, y) in actual_px {
                markers.markers.push(MarkerPrimitive::new(
                    *x,
                    *y,
                    style.marker_radius_px,
                    style.marker_color,
                ));
            }
        }
    }

    trace!(
        lines = frame.line_count(),
        paths = frame.path_count(),
        texts = frame.text_count(),
        markers = frame.marker_count(),
        "assembled scene frame"
    );
    frame
}

/// Compact hour labels: whole values lose the fraction, the rest keep up
/// to two significant decimals.
fn format_hours(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{:.0}", value.round())
    } else {
        let text = format!("{value:.2}");
        text.trim_end_matches('0').trim_end_matches('.').to_owned()
    }
}
