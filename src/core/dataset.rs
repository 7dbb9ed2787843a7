use tracing::{debug, trace};

use crate::core::types::{Item, Lane, new_id};

/// Canonical item/lane snapshot produced by normalization.
///
/// Edit operations replace by id and never delete a lane as a side effect
/// of removing its last item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub items: Vec<Item>,
    pub lanes: Vec<Lane>,
}

/// Case-insensitive, whitespace-trimmed lane dedup key.
pub(crate) fn lane_key(name: &str) -> String {
    name.trim().to_lowercase()
}

impl Dataset {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    #[must_use]
    pub fn lane(&self, id: &str) -> Option<&Lane> {
        self.lanes.iter().find(|lane| lane.id == id)
    }

    #[must_use]
    pub fn lane_by_name(&self, name: &str) -> Option<&Lane> {
        let key = lane_key(name);
        self.lanes.iter().find(|lane| lane_key(&lane.name) == key)
    }

    /// Returns the id of the lane matching `name` case-insensitively,
    /// creating and appending a new lane when no match exists.
    pub fn resolve_or_create_lane(&mut self, name: &str) -> String {
        if let Some(lane) = self.lane_by_name(name) {
            trace!(lane_id = %lane.id, name, "reusing case-insensitive lane match");
            return lane.id.clone();
        }

        let lane = Lane {
            id: new_id(),
            name: name.trim().to_owned(),
            order_index: self.lanes.len(),
        };
        debug!(lane_id = %lane.id, name = %lane.name, "created lane");
        let id = lane.id.clone();
        self.lanes.push(lane);
        id
    }

    /// Replaces the item with a matching id, or appends when none matches.
    pub fn upsert_item(&mut self, item: Item) {
        match self.items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => {
                trace!(item_id = %item.id, "replacing item");
                *existing = item;
            }
            None => {
                trace!(item_id = %item.id, "appending item");
                self.items.push(item);
            }
        }
    }

    /// Removes the item with the given id. Lanes are left untouched even
    /// when the removed item was the last one referencing them.
    ///
    /// Returns `true` when an item was removed.
    pub fn remove_item(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() < before;
        if removed {
            debug!(item_id = %id, "removed item");
        }
        removed
    }

    /// Returns the subset of items and lanes for the given lane ids.
    ///
    /// An empty filter selects everything, matching the category filter of
    /// the embedding UI.
    #[must_use]
    pub fn filtered(&self, lane_ids: &[String]) -> Self {
        if lane_ids.is_empty() {
            return self.clone();
        }

        Self {
            items: self
                .items
                .iter()
                .filter(|item| lane_ids.iter().any(|id| *id == item.lane_id))
                .cloned()
                .collect(),
            lanes: self
                .lanes
                .iter()
                .filter(|lane| lane_ids.iter().any(|id| *id == lane.id))
                .cloned()
                .collect(),
        }
    }
}
