use chrono::NaiveDate;
use uuid::Uuid;

/// Reserved lane id for items that carry no lane reference.
///
/// Never backed by a [`Lane`] record; the layout pass buckets these items
/// into an implicit row group of their own.
pub const UNGROUPED_LANE_ID: &str = "_ungrouped";

/// One endpoint of an item's date range.
///
/// Unbounded endpoints stay tagged in memory; they are only materialized
/// into sentinel dates by the open-range resolver and at the
/// serialization boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Fixed(NaiveDate),
    Unbounded,
}

impl Bound {
    #[must_use]
    pub fn is_unbounded(self) -> bool {
        matches!(self, Self::Unbounded)
    }

    #[must_use]
    pub fn fixed(self) -> Option<NaiveDate> {
        match self {
            Self::Fixed(date) => Some(date),
            Self::Unbounded => None,
        }
    }
}

/// A single roadmap bar.
///
/// Invariant: after normalization, fixed/fixed ranges satisfy
/// `end >= start` with a minimum one-day span.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub lane_id: String,
    pub start: Bound,
    pub end: Bound,
    pub color: String,
    /// Optional stacking tie-break; lower sorts first.
    pub order_key: Option<i64>,
}

/// A named row bucket grouping items for display and overlap counting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lane {
    pub id: String,
    pub name: String,
    /// Insertion order, used for default lane ordering.
    pub order_index: usize,
}

/// Synthesizes a fresh unique id for items and lanes that arrive without one.
#[must_use]
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}
