use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Outer pixel extent of the chart, before margins are carved out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// A viewport is drawable only when both extents are non-zero.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Pixel insets between the viewport edge and the plotting area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margin {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Margin {
    #[must_use]
    pub fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    #[must_use]
    pub fn horizontal(&self) -> u32 {
        self.left + self.right
    }

    #[must_use]
    pub fn vertical(&self) -> u32 {
        self.top + self.bottom
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 20,
            right: 20,
            bottom: 30,
            left: 50,
        }
    }
}

/// One sample on a trend line: a calendar day and the hours remaining on it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub hours: f64,
}

impl TrendPoint {
    #[must_use]
    pub fn new(date: NaiveDate, hours: f64) -> Self {
        Self { date, hours }
    }
}
