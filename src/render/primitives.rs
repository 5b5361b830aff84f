//! Backend-agnostic drawing primitives.
//!
//! Every primitive lives in inner pixel space, after margins are applied.
//! Backends receive them already positioned and only have to draw.

use serde::{Deserialize, Serialize};

use crate::error::{BurndownError, BurndownResult};

/// RGBA color with channels in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(&self) -> BurndownResult<()> {
        for (value, name) in [
            (self.red, "red"),
            (self.green, "green"),
            (self.blue, "blue"),
            (self.alpha, "alpha"),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(BurndownError::InvalidData(format!(
                    "color channel `{name}` must be within [0.0, 1.0], got {value}"
                )));
            }
        }
        Ok(())
    }

    /// CSS `rgba()` form with byte channels, as SVG attributes expect.
    #[must_use]
    pub fn to_css_rgba(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            (self.red * 255.0).round() as u8,
            (self.green * 255.0).round() as u8,
            (self.blue * 255.0).round() as u8,
            self.alpha
        )
    }
}

/// Stroke pattern for line work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineStrokeStyle {
    #[default]
    Solid,
    Dashed,
}

/// Straight segment between two inner-space points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(&self) -> BurndownResult<()> {
        for (value, name) in [
            (self.x1, "x1"),
            (self.y1, "y1"),
            (self.x2, "x2"),
            (self.y2, "y2"),
        ] {
            ensure_finite(value, name)?;
        }
        ensure_positive(self.stroke_width, "stroke_width")?;
        self.color.validate()
    }
}

/// Open polyline through two or more inner-space points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPrimitive {
    pub points: Vec<(f64, f64)>,
    pub stroke_width: f64,
    pub stroke_style: LineStrokeStyle,
    pub color: Color,
}

impl PathPrimitive {
    #[must_use]
    pub fn new(points: Vec<(f64, f64)>, stroke_width: f64, color: Color) -> Self {
        Self {
            points,
            stroke_width,
            stroke_style: LineStrokeStyle::Solid,
            color,
        }
    }

    #[must_use]
    pub fn with_stroke_style(mut self, stroke_style: LineStrokeStyle) -> Self {
        self.stroke_style = stroke_style;
        self
    }

    pub fn validate(&self) -> BurndownResult<()> {
        if self.points.is_empty() {
            return Err(BurndownError::InvalidData(
                "path primitive needs at least one point".to_owned(),
            ));
        }
        for (x, y) in &self.points {
            ensure_finite(*x, "path x")?;
            ensure_finite(*y, "path y")?;
        }
        ensure_positive(self.stroke_width, "stroke_width")?;
        self.color.validate()
    }
}

/// Filled rectangle, optionally with rounded corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
    pub fill: Color,
}

impl RectPrimitive {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64, fill: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            corner_radius: 0.0,
            fill,
        }
    }

    #[must_use]
    pub fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    pub fn validate(&self) -> BurndownResult<()> {
        ensure_finite(self.x, "x")?;
        ensure_finite(self.y, "y")?;
        ensure_positive(self.width, "width")?;
        ensure_positive(self.height, "height")?;
        if !self.corner_radius.is_finite() || self.corner_radius < 0.0 {
            return Err(BurndownError::InvalidData(format!(
                "corner_radius must be finite and non-negative, got {}",
                self.corner_radius
            )));
        }
        self.fill.validate()
    }
}

/// Horizontal anchoring for text runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Positioned text run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> BurndownResult<()> {
        ensure_finite(self.x, "x")?;
        ensure_finite(self.y, "y")?;
        ensure_positive(self.font_size_px, "font_size_px")?;
        self.color.validate()
    }
}

/// Circular marker centered on a trend point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerPrimitive {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Color,
}

impl MarkerPrimitive {
    #[must_use]
    pub fn new(x: f64, y: f64, radius: f64, color: Color) -> Self {
        Self {
            x,
            y,
            radius,
            color,
        }
    }

    pub fn validate(&self) -> BurndownResult<()> {
        ensure_finite(self.x, "x")?;
        ensure_finite(self.y, "y")?;
        ensure_positive(self.radius, "radius")?;
        self.color.validate()
    }
}

fn ensure_finite(value: f64, name: &str) -> BurndownResult<()> {
    if !value.is_finite() {
        return Err(BurndownError::InvalidData(format!(
            "`{name}` must be finite, got {value}"
        )));
    }
    Ok(())
}

fn ensure_positive(value: f64, name: &str) -> BurndownResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(BurndownError::InvalidData(format!(
            "`{name}` must be a positive finite number, got {value}"
        )));
    }
    Ok(())
}
