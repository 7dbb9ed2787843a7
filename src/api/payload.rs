use std::cmp::Ordering;

use chrono::{NaiveDate, Utc};
use tracing::debug;

use crate::core::dataset::Dataset;
use crate::core::open_range::{self, ResolvedItem};
use crate::core::types::Lane;
use crate::core::{layout, window};
use crate::error::RoadmapResult;

use super::LayoutOptions;

/// Fully materialized handoff for an external renderer: resolved items,
/// lanes in display order, the default visible window, and the
/// recommended chart height.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPayload {
    pub items: Vec<ResolvedItem>,
    pub lanes: Vec<Lane>,
    pub window_start: NaiveDate,
    pub window_end: NaiveDate,
    pub height_px: u32,
}

/// Runs the full layout pipeline over a dataset snapshot.
///
/// Pure with respect to its inputs; `today` only feeds the empty-dataset
/// window fallback.
pub fn build_render_payload(
    dataset: &Dataset,
    options: &LayoutOptions,
    today: NaiveDate,
) -> RoadmapResult<RenderPayload> {
    let options = options.validate()?;

    let mut items = open_range::resolve_all(&dataset.items);
    canonical_paint_order(&mut items);
    let height_px = layout::height_px(&items, &dataset.lanes, options.stacking, options.layout);
    let (window_start, window_end) = window::select_window(&items, today, options.window);

    debug!(
        items = items.len(),
        lanes = dataset.lanes.len(),
        height_px,
        %window_start,
        %window_end,
        "built render payload"
    );

    Ok(RenderPayload {
        items,
        lanes: dataset.lanes.clone(),
        window_start,
        window_end,
        height_px,
    })
}

/// Sorts items into the order a renderer should paint them: by start
/// date, then by `orderKey` (lower first, keyless items last), then by
/// id so equal keys still land in a stable order.
fn canonical_paint_order(items: &mut [ResolvedItem]) {
    items.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then_with(|| match (a.item.order_key, b.item.order_key) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
            .then_with(|| a.item.id.cmp(&b.item.id))
    });
}

/// [`build_render_payload`] with `today` taken from the system clock.
pub fn build_render_payload_now(
    dataset: &Dataset,
    options: &LayoutOptions,
) -> RoadmapResult<RenderPayload> {
    build_render_payload(dataset, options, Utc::now().date_naive())
}
