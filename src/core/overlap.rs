use chrono::NaiveDate;
use smallvec::SmallVec;

/// Maximum number of simultaneously active intervals under half-open
/// `[start, end)` semantics. Always >= 1: an empty or single-interval lane
/// still occupies one row.
///
/// Sweep line: one `+1` event per start, one `-1` event per end; at equal
/// dates end events are processed first, so an interval ending exactly when
/// another begins does not count as overlapping. Inverted pairs are treated
/// as zero-width points at `start`.
#[must_use]
pub fn max_overlap(intervals: &[(NaiveDate, NaiveDate)]) -> usize {
    let mut events: SmallVec<[(NaiveDate, i8); 32]> = SmallVec::with_capacity(intervals.len() * 2);
    for &(start, end) in intervals {
        events.push((start, 1));
        events.push((end.max(start), -1));
    }

    // Tuple order gives the half-open tie-break: -1 sorts before +1 at
    // equal dates.
    events.sort_unstable();

    let mut active: i64 = 0;
    let mut running_max: i64 = 0;
    for (_, delta) in events {
        active += i64::from(delta);
        running_max = running_max.max(active);
    }

    usize::try_from(running_max.max(1)).unwrap_or(1)
}
