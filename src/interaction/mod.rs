//! Hover tooltip state machine.
//!
//! The tooltip lives beside the pointer's marker, nudged by a fixed offset
//! and clamped so the box stays inside the inner plotting area. At most one
//! tooltip is visible; entering a new marker replaces the previous overlay
//! and leaving hides it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{BurndownError, BurndownResult};

/// Date heading format, e.g. `Mon, 15 Jan 2024`.
pub const TOOLTIP_DATE_FORMAT: &str = "%a, %e %b %Y";

/// Box shape and placement tuning for the hover overlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipGeometry {
    /// Horizontal shift from the marker to the box origin.
    pub offset_x: f64,
    /// Vertical shift from the marker to the box origin.
    pub offset_y: f64,
    pub width: f64,
    pub height: f64,
    /// Inset used when a clamp pushes the box past the area's near edge.
    pub edge_margin: f64,
    pub corner_radius: f64,
    pub content_padding: f64,
}

impl Default for TooltipGeometry {
    fn default() -> Self {
        Self {
            offset_x: 20.0,
            offset_y: -50.0,
            width: 200.0,
            height: 100.0,
            edge_margin: 10.0,
            corner_radius: 20.0,
            content_padding: 10.0,
        }
    }
}

impl TooltipGeometry {
    pub fn validate(&self) -> BurndownResult<()> {
        for (value, name) in [
            (self.offset_x, "offset_x"),
            (self.offset_y, "offset_y"),
        ] {
            if !value.is_finite() {
                return Err(BurndownError::InvalidData(format!(
                    "tooltip `{name}` must be finite, got {value}"
                )));
            }
        }
        for (value, name) in [(self.width, "width"), (self.height, "height")] {
            if !value.is_finite() || value <= 0.0 {
                return Err(BurndownError::InvalidData(format!(
                    "tooltip `{name}` must be a positive finite number, got {value}"
                )));
            }
        }
        for (value, name) in [
            (self.edge_margin, "edge_margin"),
            (self.corner_radius, "corner_radius"),
            (self.content_padding, "content_padding"),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(BurndownError::InvalidData(format!(
                    "tooltip `{name}` must be finite and non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// One hoverable marker: its pixel position plus the record behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipMarker {
    pub x: f64,
    pub y: f64,
    pub date: NaiveDate,
    pub hours: f64,
    pub comment: Option<String>,
}

impl TooltipMarker {
    #[must_use]
    pub fn new(x: f64, y: f64, date: NaiveDate, hours: f64) -> Self {
        Self {
            x,
            y,
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

/// Resolved overlay box and its text lines, ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipOverlay {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
    pub content_padding: f64,
    /// Heading date, hours line, and the comment when one exists.
    pub lines: SmallVec<[String; 3]>,
}

impl TooltipOverlay {
    /// Top-left corner of the text area inside the box.
    #[must_use]
    pub fn content_origin(&self) -> (f64, f64) {
        (self.x + self.content_padding, self.y + self.content_padding)
    }
}

/// Visibility state of the tooltip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TooltipState {
    Idle,
    Showing {
        marker_index: usize,
        overlay: TooltipOverlay,
    },
}

/// Drives tooltip visibility for one rendered chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipController {
    markers: Vec<TooltipMarker>,
    max_x: f64,
    max_y: f64,
    geometry: TooltipGeometry,
    state: TooltipState,
}

impl TooltipController {
    /// New controller over the chart's markers; `max_x`/`max_y` bound the
    /// inner plotting area the overlay is clamped into.
    #[must_use]
    pub fn new(markers: Vec<TooltipMarker>, max_x: f64, max_y: f64) -> Self {
        Self {
            markers,
            max_x,
            max_y,
            geometry: TooltipGeometry::default(),
            state: TooltipState::Idle,
        }
    }

    pub fn with_geometry(mut self, geometry: TooltipGeometry) -> BurndownResult<Self> {
        geometry.validate()?;
        self.geometry = geometry;
        Ok(self)
    }

    #[must_use]
    pub fn markers(&self) -> &[TooltipMarker] {
        &self.markers
    }

    #[must_use]
    pub fn state(&self) -> &TooltipState {
        &self.state
    }

    #[must_use]
    pub fn geometry(&self) -> &TooltipGeometry {
        &self.geometry
    }

    /// Overlay currently on screen, if the tooltip is showing.
    #[must_use]
    pub fn active_overlay(&self) -> Option<&TooltipOverlay> {
        match &self.state {
            TooltipState::Idle => None,
            TooltipState::Showing { overlay, .. } => Some(overlay),
        }
    }

    /// Pointer entered the marker at `marker_index`.
    ///
    /// Replaces whatever was showing before, so entering marker B straight
    /// from marker A never leaves two overlays behind.
    pub fn pointer_enter(&mut self, marker_index: usize) -> BurndownResult<TooltipOverlay> {
        let marker = self.markers.get(marker_index).ok_or_else(|| {
            BurndownError::InvalidData(format!(
                "tooltip marker index {marker_index} is out of range for {} markers",
                self.markers.len()
            ))
        })?;
        let overlay = build_overlay(marker, &self.geometry, self.max_x, self.max_y);
        self.state = TooltipState::Showing {
            marker_index,
            overlay: overlay.clone(),
        };
        Ok(overlay)
    }

    /// Pointer left the marker area; hides any overlay.
    pub fn pointer_leave(&mut self) {
        self.state = TooltipState::Idle;
    }
}

fn build_overlay(
    marker: &TooltipMarker,
    geometry: &TooltipGeometry,
    max_x: f64,
    max_y: f64,
) -> TooltipOverlay {
    let mut x = marker.x + geometry.offset_x;
    let mut y = marker.y + geometry.offset_y;
    // Far edges first, then near edges; a box wider than the area ends up
    // pinned at the near margin.
    if x + geometry.width > max_x {
        x = max_x - geometry.width;
    }
    if y + geometry.height > max_y {
        y = max_y - geometry.height;
    }
    if x < 0.0 {
        x = geometry.edge_margin;
    }
    if y < 0.0 {
        y = geometry.edge_margin;
    }
    TooltipOverlay {
        x,
        y,
        width: geometry.width,
        height: geometry.height,
        corner_radius: geometry.corner_radius,
        content_padding: geometry.content_padding,
        lines: content_lines(marker),
    }
}

fn content_lines(marker: &TooltipMarker) -> SmallVec<[String; 3]> {
    let mut lines = SmallVec::new();
    lines.push(marker.date.format(TOOLTIP_DATE_FORMAT).to_string());
    lines.push(format!("Hours: {}", marker.hours));
    if let Some(comment) = &marker.comment {
        lines.push(comment.clone());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).expect("valid test date")
    }

    #[test]
    fn controller_starts_idle() {
        let controller = TooltipController::new(Vec::new(), 890.0, 450.0);
        assert_eq!(*controller.state(), TooltipState::Idle);
        assert!(controller.active_overlay().is_none());
    }

    #[test]
    fn unclamped_overlay_sits_at_the_offset() {
        let markers = vec![TooltipMarker::new(300.0, 200.0, day(3), 25.0)];
        let mut controller = TooltipController::new(markers, 890.0, 450.0);
        let overlay = controller.pointer_enter(0).expect("marker exists");
        assert_eq!(overlay.x, 320.0);
        assert_eq!(overlay.y, 150.0);
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut controller = TooltipController::new(Vec::new(), 890.0, 450.0);
        assert!(controller.pointer_enter(0).is_err());
        assert_eq!(*controller.state(), TooltipState::Idle);
    }

    #[test]
    fn leave_returns_to_idle() {
        let markers = vec![TooltipMarker::new(300.0, 200.0, day(3), 25.0)];
        let mut controller = TooltipController::new(markers, 890.0, 450.0);
        controller.pointer_enter(0).expect("marker exists");
        controller.pointer_leave();
        assert_eq!(*controller.state(), TooltipState::Idle);
    }
}
