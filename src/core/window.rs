use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::open_range::ResolvedItem;
use crate::error::{RoadmapError, RoadmapResult};

/// Tuning controls for default window selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowTuning {
    pub min_buffer_days: i64,
    pub buffer_pct: f64,
    /// Flat half-window applied around `today` when no item qualifies.
    pub empty_fallback_days: i64,
}

impl Default for WindowTuning {
    fn default() -> Self {
        Self {
            min_buffer_days: 14,
            buffer_pct: 0.15,
            empty_fallback_days: 30,
        }
    }
}

impl WindowTuning {
    pub(crate) fn validate(self) -> RoadmapResult<Self> {
        if !self.buffer_pct.is_finite() || self.buffer_pct < 0.0 {
            return Err(RoadmapError::InvalidConfig(
                "window buffer percentage must be finite and >= 0".to_owned(),
            ));
        }
        if self.min_buffer_days < 0 || self.empty_fallback_days < 0 {
            return Err(RoadmapError::InvalidConfig(
                "window buffer day counts must be >= 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Picks the default visible time range: the longest-span item extended by
/// a proportional buffer on both sides.
///
/// Items with an open endpoint are excluded from the span search
/// unconditionally; their sentinel spans would otherwise dominate every
/// real item. Ties go to the first-encountered item. When nothing
/// qualifies the window is centered on `today` with the flat fallback
/// buffer — the only clock dependence in the engine, injected by the
/// caller.
#[must_use]
pub fn select_window(
    items: &[ResolvedItem],
    today: NaiveDate,
    tuning: WindowTuning,
) -> (NaiveDate, NaiveDate) {
    let mut longest: Option<(NaiveDate, NaiveDate, i64)> = None;
    for item in items {
        if item.is_open() {
            continue;
        }
        let span_days = (item.end - item.start).num_days().max(1);
        if longest.is_none_or(|(_, _, best)| span_days > best) {
            longest = Some((item.start, item.end, span_days));
        }
    }

    match longest {
        Some((start, end, span_days)) => {
            let proportional = (span_days as f64 * tuning.buffer_pct).round() as i64;
            let buffer = tuning.min_buffer_days.max(proportional);
            debug!(span_days, buffer, "window from longest item");
            (start - Duration::days(buffer), end + Duration::days(buffer))
        }
        None => {
            let buffer = tuning.min_buffer_days.max(tuning.empty_fallback_days);
            debug!(buffer, "window fallback centered on today");
            (today - Duration::days(buffer), today + Duration::days(buffer))
        }
    }
}
