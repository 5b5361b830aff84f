//! Chart engine entry points.
//!
//! One render pass takes a payload and a config, normalizes the data,
//! resolves both axes, synthesizes the ideal and actual trends, assembles
//! the layered scene, and hands it to a renderer. Any failure along the
//! way aborts before the backend is touched, leaving whatever the mount
//! showed before untouched.

mod config;
mod scene;

pub use config::{
    ChartConfig, ChartLayout, DEFAULT_DATE_FORMAT, DEFAULT_HEIGHT, DEFAULT_MOUNT_SELECTOR,
    DEFAULT_WIDTH,
};
pub use scene::{RenderStyle, HOURS_CAPTION};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::mapping::AxisMapping;
use crate::core::trend;
use crate::core::types::{TrendPoint, Viewport};
use crate::data::{self, BurndownPayload, ChartSource, DataAcquirer};
use crate::error::BurndownResult;
use crate::interaction::{TooltipController, TooltipMarker};
use crate::render::{Renderer, SceneFrame};

/// Outcome of a successful render pass.
///
/// Holds the scene that was drawn and, when comments are enabled, the
/// tooltip controller wired to the chart's markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedChart {
    scene: SceneFrame,
    tooltip: Option<TooltipController>,
}

impl RenderedChart {
    #[must_use]
    pub fn mount(&self) -> &str {
        &self.scene.mount
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.scene.viewport
    }

    #[must_use]
    pub fn scene(&self) -> &SceneFrame {
        &self.scene
    }

    #[must_use]
    pub fn tooltip(&self) -> Option<&TooltipController> {
        self.tooltip.as_ref()
    }

    pub fn tooltip_mut(&mut self) -> Option<&mut TooltipController> {
        self.tooltip.as_mut()
    }
}

/// Renders a payload with the default style.
pub fn render<R: Renderer>(
    payload: &BurndownPayload,
    config: &ChartConfig,
    renderer: &mut R,
) -> BurndownResult<RenderedChart> {
    render_with_style(payload, config, &RenderStyle::default(), renderer)
}

/// Renders a payload with an explicit style.
pub fn render_with_style<R: Renderer>(
    payload: &BurndownPayload,
    config: &ChartConfig,
    style: &RenderStyle,
    renderer: &mut R,
) -> BurndownResult<RenderedChart> {
    let layout = config.layout()?;
    debug!(
        mount = %config.mount_selector,
        width = layout.viewport.width,
        height = layout.viewport.height,
        "rendering burndown chart"
    );

    let dataset = data::normalize_dataset(payload, &config.date_format)?;
    let retained = trend::retained_records(&dataset.burndowns, config.sentinel_hours);
    let actual: Vec<TrendPoint> = retained
        .iter()
        .map(|record| TrendPoint::new(record.date, record.hours))
        .collect();
    let mapping = AxisMapping::build(
        &dataset.time_domain,
        &actual,
        layout.inner_width,
        layout.inner_height,
    )?;

    let ideal = trend::ideal_trend(dataset.start, dataset.planned_hours, dataset.end);
    let ideal_px = trend::project_trend(&ideal, &mapping);
    let actual_px = trend::project_trend(&actual, &mapping);
    trace!(
        ideal_points = ideal_px.len(),
        actual_points = actual_px.len(),
        y_max = mapping.y_max(),
        "projected trend geometry"
    );

    let frame = scene::build_scene(&layout, &mapping, &ideal_px, &actual_px, style, config);
    renderer.render(&frame)?;

    let tooltip = config.show_comments.then(|| {
        let markers: Vec<TooltipMarker> = retained
            .iter()
            .zip(&actual_px)
            .map(|(record, (x, y))| {
                let mut marker = TooltipMarker::new(*x, *y, record.date, record.hours);
                if let Some(comment) = &record.comment {
                    marker = marker.with_comment(comment.clone());
                }
                marker
            })
            .collect();
        TooltipController::new(markers, layout.inner_width, layout.inner_height)
    });

    debug!(
        mount = %config.mount_selector,
        domain_dates = dataset.time_domain.len(),
        retained_records = actual.len(),
        "burndown chart rendered"
    );
    Ok(RenderedChart {
        scene: frame,
        tooltip,
    })
}

/// Resolves a source, then renders it with the default style.
///
/// This is the only suspension point in the engine: URL sources await one
/// fetch through the acquirer, everything after resolution is synchronous.
/// Hosts that fire several of these concurrently get last-completed-wins
/// semantics, since renderers replace a mount's content wholesale.
pub async fn render_source<A: DataAcquirer, R: Renderer>(
    source: &ChartSource,
    config: &ChartConfig,
    acquirer: &mut A,
    renderer: &mut R,
) -> BurndownResult<RenderedChart> {
    // Configuration errors should not cost a fetch.
    config.layout()?;
    let payload = data::acquire_payload(source, acquirer).await?;
    render(&payload, config, renderer)
}
