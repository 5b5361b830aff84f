//! Headless renderer for tests and dry runs.

use crate::error::BurndownResult;
use crate::render::frame::SceneFrame;
use crate::render::Renderer;

/// Renderer that draws nothing and tallies what it was asked to draw.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NullRenderer {
    pub render_calls: usize,
    pub last_line_count: usize,
    pub last_path_count: usize,
    pub last_text_count: usize,
    pub last_marker_count: usize,
}

impl NullRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &SceneFrame) -> BurndownResult<()> {
        frame.validate()?;
        self.render_calls += 1;
        self.last_line_count = frame.line_count();
        self.last_path_count = frame.path_count();
        self.last_text_count = frame.text_count();
        self.last_marker_count = frame.marker_count();
        Ok(())
    }
}
