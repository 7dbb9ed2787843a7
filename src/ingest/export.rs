use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::dataset::Dataset;
use crate::core::open_range::{SENTINEL_MAX, SENTINEL_MIN};
use crate::core::types::{Item, Lane};
use crate::error::RoadmapResult;

/// Canonical wire form of an item, dates as `YYYY-MM-DD`.
///
/// Open bounds are written as sentinel dates plus `openStart`/`openEnd`
/// flags; the tagged in-memory representation never leaves the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub lane_id: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub open_start: bool,
    pub open_end: bool,
    pub color: String,
    pub order_key: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneRecord {
    pub id: String,
    pub name: String,
    pub order_index: usize,
}

/// The `{ "items": [...], "groups": [...] }` export payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub items: Vec<ItemRecord>,
    pub groups: Vec<LaneRecord>,
}

impl From<&Item> for ItemRecord {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            subtitle: item.subtitle.clone(),
            lane_id: item.lane_id.clone(),
            start: item.start.fixed().unwrap_or(SENTINEL_MIN),
            end: item.end.fixed().unwrap_or(SENTINEL_MAX),
            open_start: item.start.is_unbounded(),
            open_end: item.end.is_unbounded(),
            color: item.color.clone(),
            order_key: item.order_key,
        }
    }
}

impl From<&Lane> for LaneRecord {
    fn from(lane: &Lane) -> Self {
        Self {
            id: lane.id.clone(),
            name: lane.name.clone(),
            order_index: lane.order_index,
        }
    }
}

#[must_use]
pub fn export_document(dataset: &Dataset) -> ExportDocument {
    ExportDocument {
        items: dataset.items.iter().map(ItemRecord::from).collect(),
        groups: dataset.lanes.iter().map(LaneRecord::from).collect(),
    }
}

/// Serializes the canonical export payload. Re-importing the result
/// yields identical ids, dates, and lane references.
pub fn export_json(dataset: &Dataset) -> RoadmapResult<String> {
    let document = export_document(dataset);
    Ok(serde_json::to_string_pretty(&document)?)
}
