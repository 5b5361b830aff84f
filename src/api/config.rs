//! Chart configuration and layout resolution.

use serde::{Deserialize, Serialize};

use crate::core::trend::UNRECORDED_HOURS;
use crate::core::types::{Margin, Viewport};
use crate::error::{BurndownError, BurndownResult};

pub const DEFAULT_WIDTH: u32 = 960;
pub const DEFAULT_HEIGHT: u32 = 500;
pub const DEFAULT_MOUNT_SELECTOR: &str = "#chart";
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%b-%d";

/// Host-facing chart options.
///
/// Deserializes from the host contract's camelCase keys; omitted keys fall
/// back to their defaults, so a partial options object is always valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartConfig {
    pub margin: Margin,
    pub width: u32,
    pub height: u32,
    #[serde(rename = "chartNodeSelector")]
    pub mount_selector: String,
    pub show_grid: bool,
    pub show_comments: bool,
    pub date_format: String,
    /// Hour value that marks unrecorded days in the payload.
    pub sentinel_hours: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            margin: Margin::default(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            mount_selector: DEFAULT_MOUNT_SELECTOR.to_owned(),
            show_grid: false,
            show_comments: false,
            date_format: DEFAULT_DATE_FORMAT.to_owned(),
            sentinel_hours: UNRECORDED_HOURS,
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_mount_selector(mut self, mount_selector: impl Into<String>) -> Self {
        self.mount_selector = mount_selector.into();
        self
    }

    #[must_use]
    pub fn with_grid(mut self, show_grid: bool) -> Self {
        self.show_grid = show_grid;
        self
    }

    #[must_use]
    pub fn with_comments(mut self, show_comments: bool) -> Self {
        self.show_comments = show_comments;
        self
    }

    #[must_use]
    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = date_format.into();
        self
    }

    #[must_use]
    pub fn with_sentinel_hours(mut self, sentinel_hours: f64) -> Self {
        self.sentinel_hours = sentinel_hours;
        self
    }

    /// Resolves the drawable layout, rejecting geometry with no room for
    /// an inner plotting area.
    pub fn layout(&self) -> BurndownResult<ChartLayout> {
        let viewport = Viewport::new(self.width, self.height);
        if !viewport.is_valid()
            || self.margin.horizontal() >= self.width
            || self.margin.vertical() >= self.height
        {
            return Err(BurndownError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(ChartLayout {
            viewport,
            margin: self.margin,
            inner_width: f64::from(self.width - self.margin.horizontal()),
            inner_height: f64::from(self.height - self.margin.vertical()),
        })
    }
}

/// Resolved drawing geometry: the viewport and the margin-trimmed inner
/// area every scale and primitive is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub viewport: Viewport,
    pub margin: Margin,
    pub inner_width: f64,
    pub inner_height: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_matches_widget_geometry() {
        let layout = ChartConfig::default().layout().expect("layout resolves");
        assert_eq!(layout.inner_width, 890.0);
        assert_eq!(layout.inner_height, 450.0);
    }

    #[test]
    fn margins_larger_than_viewport_are_rejected() {
        let config = ChartConfig::default().with_size(60, 40);
        assert!(matches!(
            config.layout(),
            Err(BurndownError::InvalidViewport {
                width: 60,
                height: 40
            })
        ));
    }

    #[test]
    fn partial_options_object_fills_defaults() {
        let config: ChartConfig =
            serde_json::from_str(r#"{"width": 640, "showGrid": true}"#)
                .expect("partial config should deserialize");
        assert_eq!(config.width, 640);
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert!(config.show_grid);
        assert_eq!(config.mount_selector, DEFAULT_MOUNT_SELECTOR);
        assert_eq!(config.date_format, DEFAULT_DATE_FORMAT);
    }

    #[test]
    fn grid_and_comments_are_opt_in() {
        let config = ChartConfig::default();
        assert!(!config.show_grid);
        assert!(!config.show_comments);
    }

    #[test]
    fn selector_key_matches_host_contract() {
        let config: ChartConfig =
            serde_json::from_str(r##"{"chartNodeSelector": "#sprint-7"}"##)
                .expect("config should deserialize");
        assert_eq!(config.mount_selector, "#sprint-7");
    }
}
