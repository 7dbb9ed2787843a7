//! Schema normalization: turns arbitrary, heterogeneous JSON (or
//! UI-collected field values) into the canonical item/lane dataset.
//!
//! Total by design: only a top-level JSON parse failure is surfaced to the
//! caller. Every other anomaly degrades locally — unparseable dates drop
//! the single affected item, lane name collisions reuse the existing lane,
//! unrecognizable documents yield an empty dataset.

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::core::dataset::Dataset;
use crate::core::palette::{is_hex_color, palette_color};
use crate::core::types::{Bound, Item, Lane, UNGROUPED_LANE_ID, new_id};
use crate::error::RoadmapResult;

use super::dates::{parse_date, repair_range};
use super::shape;

// Per-field aliases, first match wins.
const TITLE_ALIASES: [&str; 3] = ["content", "title", "name"];
const SUBTITLE_ALIASES: [&str; 2] = ["subtitle", "description"];
const LANE_ID_ALIASES: [&str; 3] = ["laneId", "group", "groupId"];
const LANE_NAME_ALIASES: [&str; 3] = ["category", "groupName", "group_name"];
const GROUP_LABEL_ALIASES: [&str; 3] = ["name", "content", "title"];
const START_ALIASES: [&str; 2] = ["start", "startDate"];
const END_ALIASES: [&str; 2] = ["end", "endDate"];
const OPEN_START_ALIASES: [&str; 2] = ["openStart", "open_start"];
const OPEN_END_ALIASES: [&str; 2] = ["openEnd", "open_end"];
const ORDER_KEY_ALIASES: [&str; 2] = ["orderKey", "order"];

/// Parses and normalizes a raw import payload.
///
/// Malformed top-level JSON is the only error condition; a parseable
/// document always normalizes, possibly to a partial or empty dataset.
pub fn normalize_document(raw: &str) -> RoadmapResult<Dataset> {
    let doc: Value = serde_json::from_str(raw)?;
    Ok(normalize_value(&doc))
}

/// Normalizes an already-parsed JSON document. Total function.
#[must_use]
pub fn normalize_value(doc: &Value) -> Dataset {
    let Some(parsed) = shape::locate(doc) else {
        debug!("no recognizable items collection in import payload");
        return Dataset::new();
    };
    debug!(
        shape = ?parsed.shape,
        raw_items = parsed.items.len(),
        raw_groups = parsed.groups.len(),
        "located import collections"
    );

    let mut dataset = Dataset::new();
    // Supplied group id -> canonical lane id, covering ids whose group
    // records were deduplicated away.
    let mut lane_alias: IndexMap<String, String> = IndexMap::new();
    for raw_lane in parsed.groups {
        normalize_lane(raw_lane, &mut dataset, &mut lane_alias);
    }

    let mut dropped = 0usize;
    for raw_item in parsed.items {
        match normalize_raw_item(raw_item, &mut dataset, &lane_alias) {
            ItemOutcome::Kept(item) => dataset.items.push(item),
            ItemOutcome::Dropped => dropped += 1,
            ItemOutcome::Background => {}
        }
    }
    if dropped > 0 {
        debug!(dropped, kept = dataset.items.len(), "dropped unnormalizable items");
    }

    dataset
}

fn normalize_lane(
    raw: &Value,
    dataset: &mut Dataset,
    lane_alias: &mut IndexMap<String, String>,
) {
    let Some(obj) = raw.as_object() else {
        trace!("skipping non-object group record");
        return;
    };

    let supplied_id = text_field(obj, &["id"]);
    let Some(name) = text_field(obj, &GROUP_LABEL_ALIASES).or_else(|| supplied_id.clone())
    else {
        trace!("skipping group without a name or id");
        return;
    };

    if let Some(existing) = dataset.lane_by_name(&name) {
        // Names differing only in case/whitespace are the same lane.
        let canonical = existing.id.clone();
        trace!(lane_id = %canonical, name = %name, "reusing lane for duplicate group");
        if let Some(supplied) = supplied_id {
            lane_alias.insert(supplied, canonical);
        }
        return;
    }

    let lane = Lane {
        id: supplied_id.clone().unwrap_or_else(new_id),
        name: name.trim().to_owned(),
        order_index: dataset.lanes.len(),
    };
    if let Some(supplied) = supplied_id {
        lane_alias.insert(supplied, lane.id.clone());
    }
    dataset.lanes.push(lane);
}

enum ItemOutcome {
    Kept(Item),
    Dropped,
    Background,
}

fn normalize_raw_item(
    raw: &Value,
    dataset: &mut Dataset,
    lane_alias: &IndexMap<String, String>,
) -> ItemOutcome {
    let Some(obj) = raw.as_object() else {
        return ItemOutcome::Dropped;
    };
    if text_field(obj, &["type"]).is_some_and(|kind| kind == "background") {
        trace!("skipping background pseudo-item");
        return ItemOutcome::Background;
    }

    let title = text_field(obj, &TITLE_ALIASES).unwrap_or_else(|| "(untitled)".to_owned());
    let subtitle = text_field(obj, &SUBTITLE_ALIASES).unwrap_or_default();
    let open_start = bool_field(obj, &OPEN_START_ALIASES);
    let open_end = bool_field(obj, &OPEN_END_ALIASES);

    let start = if open_start {
        Bound::Unbounded
    } else {
        match text_field(obj, &START_ALIASES).as_deref().and_then(parse_date) {
            Some(date) => Bound::Fixed(date),
            None => {
                // Cannot be laid out without a start date.
                debug!(title = %title, "dropping item with unresolvable start date");
                return ItemOutcome::Dropped;
            }
        }
    };
    let end = if open_end {
        Bound::Unbounded
    } else {
        match text_field(obj, &END_ALIASES).as_deref().and_then(parse_date) {
            Some(date) => Bound::Fixed(date),
            // End defaults to start; an unbounded start mirrors through.
            None => start,
        }
    };
    let (start, end) = repair_bounds(start, end);

    let lane_id = resolve_lane_reference(obj, dataset, lane_alias);
    let color = text_field(obj, &["color"])
        .filter(|candidate| is_hex_color(candidate))
        .unwrap_or_else(|| palette_color(&title, &subtitle).to_owned());
    let id = text_field(obj, &["id"]).unwrap_or_else(new_id);
    let order_key = int_field(obj, &ORDER_KEY_ALIASES);

    ItemOutcome::Kept(Item {
        id,
        title,
        subtitle,
        lane_id,
        start,
        end,
        color,
        order_key,
    })
}

fn resolve_lane_reference(
    obj: &Map<String, Value>,
    dataset: &mut Dataset,
    lane_alias: &IndexMap<String, String>,
) -> String {
    if let Some(reference) = text_field(obj, &LANE_ID_ALIASES) {
        if reference.is_empty() || reference == UNGROUPED_LANE_ID {
            return UNGROUPED_LANE_ID.to_owned();
        }
        if let Some(canonical) = lane_alias.get(&reference) {
            return canonical.clone();
        }
        if dataset.lane(&reference).is_some() {
            return reference;
        }
        // Unknown lane id: keep the item renderable by creating the lane
        // implicitly, with the id doubling as its display name.
        debug!(lane_id = %reference, "creating lane for unknown id reference");
        dataset.lanes.push(Lane {
            id: reference.clone(),
            name: reference.clone(),
            order_index: dataset.lanes.len(),
        });
        return reference;
    }

    if let Some(name) = text_field(obj, &LANE_NAME_ALIASES) {
        if !name.trim().is_empty() {
            return dataset.resolve_or_create_lane(&name);
        }
    }

    UNGROUPED_LANE_ID.to_owned()
}

fn repair_bounds(start: Bound, end: Bound) -> (Bound, Bound) {
    match (start, end) {
        (Bound::Fixed(raw_start), Bound::Fixed(raw_end)) => {
            let (repaired_start, repaired_end) = repair_range(raw_start, raw_end);
            (Bound::Fixed(repaired_start), Bound::Fixed(repaired_end))
        }
        bounds => bounds,
    }
}

fn first_field<'a>(obj: &'a Map<String, Value>, aliases: &[&str]) -> Option<&'a Value> {
    aliases.iter().find_map(|key| obj.get(*key))
}

fn text_field(obj: &Map<String, Value>, aliases: &[&str]) -> Option<String> {
    first_field(obj, aliases).and_then(|value| match value {
        Value::String(text) => Some(text.clone()),
        // Numeric ids arrive from hand-edited exports; stringify them.
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    })
}

fn bool_field(obj: &Map<String, Value>, aliases: &[&str]) -> bool {
    first_field(obj, aliases)
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

fn int_field(obj: &Map<String, Value>, aliases: &[&str]) -> Option<i64> {
    first_field(obj, aliases).and_then(Value::as_i64)
}

/// UI-collected field values for a single item.
///
/// The form-submission counterpart of a raw JSON item record; runs through
/// the same repair, lane-dedup, and color-fallback rules.
#[derive(Debug, Clone, Default)]
pub struct ItemFields {
    /// Existing id to replace; `None` creates a new item.
    pub id: Option<String>,
    pub title: String,
    pub subtitle: String,
    pub lane_name: Option<String>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub open_start: bool,
    pub open_end: bool,
    pub color: Option<String>,
    pub order_key: Option<i64>,
}

/// Builds a canonical item from form fields and upserts it into the
/// dataset.
///
/// Returns `None` (leaving the dataset untouched) when the fields carry
/// no start date and the start is not flagged open.
pub fn normalize_fields(dataset: &mut Dataset, fields: ItemFields) -> Option<Item> {
    let start = if fields.open_start {
        Bound::Unbounded
    } else {
        match fields.start {
            Some(date) => Bound::Fixed(date),
            None => {
                debug!(title = %fields.title, "rejecting fields without a start date");
                return None;
            }
        }
    };
    let end = if fields.open_end {
        Bound::Unbounded
    } else {
        match fields.end.or(fields.start) {
            Some(date) => Bound::Fixed(date),
            None => start,
        }
    };
    let (start, end) = repair_bounds(start, end);

    let title = if fields.title.is_empty() {
        "(untitled)".to_owned()
    } else {
        fields.title
    };
    let lane_id = match fields.lane_name.as_deref().filter(|name| !name.trim().is_empty()) {
        Some(name) => dataset.resolve_or_create_lane(name),
        None => UNGROUPED_LANE_ID.to_owned(),
    };
    let color = fields
        .color
        .filter(|candidate| is_hex_color(candidate))
        .unwrap_or_else(|| palette_color(&title, &fields.subtitle).to_owned());

    let item = Item {
        id: fields.id.unwrap_or_else(new_id),
        title,
        subtitle: fields.subtitle,
        lane_id,
        start,
        end,
        color,
        order_key: fields.order_key,
    };
    dataset.upsert_item(item.clone());
    Some(item)
}
