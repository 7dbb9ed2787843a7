use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::open_range::ResolvedItem;
use crate::core::overlap::max_overlap;
use crate::core::types::{Lane, UNGROUPED_LANE_ID};
use crate::error::{RoadmapError, RoadmapResult};

/// Tuning controls for the height formula:
/// `max(min_height_floor, top_padding + row_height * total_rows)`.
///
/// The exact pixel values are a rendering concern; the formula shape
/// (floor, fixed header pad, linear in stacked rows) is the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutTuning {
    pub min_height_floor: u32,
    pub top_padding: u32,
    pub row_height: u32,
}

impl Default for LayoutTuning {
    fn default() -> Self {
        Self {
            min_height_floor: 260,
            top_padding: 120,
            row_height: 80,
        }
    }
}

impl LayoutTuning {
    pub(crate) fn validate(self) -> RoadmapResult<Self> {
        if self.row_height == 0 {
            return Err(RoadmapError::InvalidConfig(
                "layout row height must be > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Recommended render height in pixels.
///
/// With stacking enabled, each lane contributes its `max_overlap` row
/// count (laneless items fall into the `_ungrouped` bucket); with stacking
/// disabled, each lane contributes exactly one row.
#[must_use]
pub fn height_px(
    items: &[ResolvedItem],
    lanes: &[Lane],
    stacking: bool,
    tuning: LayoutTuning,
) -> u32 {
    let total_rows = if stacking {
        stacked_row_count(items, lanes)
    } else {
        lanes.len().max(1)
    };

    let rows = u32::try_from(total_rows).unwrap_or(u32::MAX);
    let height = tuning
        .min_height_floor
        .max(tuning.top_padding.saturating_add(tuning.row_height.saturating_mul(rows)));
    debug!(total_rows, stacking, height, "computed layout height");
    height
}

fn stacked_row_count(items: &[ResolvedItem], lanes: &[Lane]) -> usize {
    let mut per_lane: IndexMap<&str, Vec<(NaiveDate, NaiveDate)>> = IndexMap::new();
    // Known lanes occupy a row even when empty, in lane order.
    for lane in lanes {
        per_lane.entry(lane.id.as_str()).or_default();
    }
    for item in items {
        let lane_id = if item.item.lane_id.is_empty() {
            UNGROUPED_LANE_ID
        } else {
            item.item.lane_id.as_str()
        };
        per_lane.entry(lane_id).or_default().push((item.start, item.end));
    }

    let rows: usize = per_lane.values().map(|spans| max_overlap(spans)).sum();
    rows.max(1)
}
