use chrono::NaiveDate;

use crate::core::types::{Bound, Item};

const fn sentinel(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid sentinel date"),
    }
}

/// Far-past date substituted for an unbounded start at resolution and
/// serialization time.
pub const SENTINEL_MIN: NaiveDate = sentinel(1970, 1, 1);

/// Far-future date substituted for an unbounded end.
pub const SENTINEL_MAX: NaiveDate = sentinel(2100, 1, 1);

/// An item with both endpoints materialized into concrete dates, so overlap
/// and height math can treat every item as a closed interval.
///
/// `open_start`/`open_end` are render hints: the renderer should draw the
/// matching edge as visually open rather than implying a hard boundary at
/// the sentinel date. Window selection uses the same flags to exclude
/// sentinel spans from the longest-item search.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedItem {
    pub item: Item,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub open_start: bool,
    pub open_end: bool,
}

impl ResolvedItem {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open_start || self.open_end
    }
}

/// Materializes unbounded endpoints into sentinel dates.
#[must_use]
pub fn resolve(item: &Item) -> ResolvedItem {
    let (start, open_start) = match item.start {
        Bound::Fixed(date) => (date, false),
        Bound::Unbounded => (SENTINEL_MIN, true),
    };
    let (end, open_end) = match item.end {
        Bound::Fixed(date) => (date, false),
        Bound::Unbounded => (SENTINEL_MAX, true),
    };

    ResolvedItem {
        item: item.clone(),
        start,
        end,
        open_start,
        open_end,
    }
}

#[must_use]
pub fn resolve_all(items: &[Item]) -> Vec<ResolvedItem> {
    items.iter().map(resolve).collect()
}
