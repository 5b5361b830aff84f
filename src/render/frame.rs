//! Layered scene description handed to renderers.
//!
//! Layers carry a fixed stacking order: grid at the back, then axes, the
//! ideal line, the actual line, and markers on top. The actual line always
//! paints over the ideal line where they overlap.

use serde::{Deserialize, Serialize};

use crate::core::types::{Margin, Viewport};
use crate::error::{BurndownError, BurndownResult};
use crate::render::primitives::{
    LinePrimitive, MarkerPrimitive, PathPrimitive, RectPrimitive, TextPrimitive,
};

/// Stacking role of one scene layer, back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SceneLayerKind {
    Grid,
    Axes,
    IdealTrend,
    ActualTrend,
    Markers,
}

impl SceneLayerKind {
    /// Canonical back-to-front ordering.
    #[must_use]
    pub fn stacking_order() -> [SceneLayerKind; 5] {
        [
            SceneLayerKind::Grid,
            SceneLayerKind::Axes,
            SceneLayerKind::IdealTrend,
            SceneLayerKind::ActualTrend,
            SceneLayerKind::Markers,
        ]
    }

    /// Style hook emitted by markup backends.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            SceneLayerKind::Grid => "grid",
            SceneLayerKind::Axes => "axis",
            SceneLayerKind::IdealTrend => "ideal",
            SceneLayerKind::ActualTrend => "line",
            SceneLayerKind::Markers => "comment",
        }
    }
}

/// One stacking layer and its primitives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneLayer {
    pub kind: SceneLayerKind,
    pub lines: Vec<LinePrimitive>,
    pub paths: Vec<PathPrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
    pub markers: Vec<MarkerPrimitive>,
}

impl SceneLayer {
    #[must_use]
    pub fn empty(kind: SceneLayerKind) -> Self {
        Self {
            kind,
            lines: Vec::new(),
            paths: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
            markers: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
            && self.paths.is_empty()
            && self.rects.is_empty()
            && self.texts.is_empty()
            && self.markers.is_empty()
    }

    pub fn validate(&self) -> BurndownResult<()> {
        for line in &self.lines {
            line.validate()?;
        }
        for path in &self.paths {
            path.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        for marker in &self.markers {
            marker.validate()?;
        }
        Ok(())
    }
}

/// Complete scene for one mount point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneFrame {
    pub mount: String,
    pub viewport: Viewport,
    pub margin: Margin,
    pub layers: Vec<SceneLayer>,
}

impl SceneFrame {
    /// New frame with every layer present, empty, in stacking order.
    #[must_use]
    pub fn new(mount: impl Into<String>, viewport: Viewport, margin: Margin) -> Self {
        Self {
            mount: mount.into(),
            viewport,
            margin,
            layers: SceneLayerKind::stacking_order()
                .into_iter()
                .map(SceneLayer::empty)
                .collect(),
        }
    }

    #[must_use]
    pub fn layer(&self, kind: SceneLayerKind) -> Option<&SceneLayer> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    pub fn layer_mut(&mut self, kind: SceneLayerKind) -> Option<&mut SceneLayer> {
        self.layers.iter_mut().find(|layer| layer.kind == kind)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(SceneLayer::is_empty)
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.lines.len()).sum()
    }

    #[must_use]
    pub fn path_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.paths.len()).sum()
    }

    #[must_use]
    pub fn text_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.texts.len()).sum()
    }

    #[must_use]
    pub fn marker_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.markers.len()).sum()
    }

    /// Checks the frame is drawable: a non-zero viewport, margins that
    /// leave room for an inner area, and finite primitives throughout.
    pub fn validate(&self) -> BurndownResult<()> {
        if !self.viewport.is_valid() {
            return Err(BurndownError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if self.margin.horizontal() >= self.viewport.width
            || self.margin.vertical() >= self.viewport.height
        {
            return Err(BurndownError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        for layer in &self.layers {
            layer.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_frame_carries_all_layers_in_stacking_order() {
        let frame = SceneFrame::new("#chart", Viewport::new(960, 500), Margin::default());
        let kinds: Vec<SceneLayerKind> = frame.layers.iter().map(|layer| layer.kind).collect();
        assert_eq!(kinds, SceneLayerKind::stacking_order().to_vec());
        assert!(frame.is_empty());
    }

    #[test]
    fn ideal_layer_stacks_below_actual_layer() {
        let order = SceneLayerKind::stacking_order();
        let ideal = order
            .iter()
            .position(|kind| *kind == SceneLayerKind::IdealTrend)
            .expect("ideal layer present");
        let actual = order
            .iter()
            .position(|kind| *kind == SceneLayerKind::ActualTrend)
            .expect("actual layer present");
        assert!(ideal < actual);
    }

    #[test]
    fn margins_swallowing_the_viewport_fail_validation() {
        let frame = SceneFrame::new(
            "#chart",
            Viewport::new(60, 40),
            Margin::new(20, 20, 30, 50),
        );
        assert!(matches!(
            frame.validate(),
            Err(BurndownError::InvalidViewport { .. })
        ));
    }
}
