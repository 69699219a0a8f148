use crate::models::event::MachineEvent;
use crate::models::query::DayQuery;
use crate::models::shift::ShiftWindow;
use chrono::{NaiveDateTime, Timelike};
use tracing::debug;

/// Activity timeline of one machine on one day, ready for gap mapping.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Timeline {
    /// Rows matching machine and date, before any filtering.
    pub raw_count: usize,
    /// Sorted, minute-deduplicated timestamps inside the shift window.
    pub points: Vec<NaiveDateTime>,
}

/// Select the query's events and turn them into an ordered timeline.
///
/// Returns `None` when no event at all exists for (machine, date): that is
/// "no data", not "no activity during the shift".
pub fn build_timeline(
    events: &[MachineEvent],
    query: &DayQuery,
    shift: &ShiftWindow,
) -> Option<Timeline> {
    // -----------------------------
    // Select machine + date
    // -----------------------------
    let mut points: Vec<NaiveDateTime> = events
        .iter()
        .filter(|e| e.belongs_to(&query.machine, query.date))
        .map(|e| e.timestamp)
        .collect();

    if points.is_empty() {
        return None;
    }

    let raw_count = points.len();

    // -----------------------------
    // Sort + collapse same-minute duplicates (earliest wins)
    // -----------------------------
    points.sort();
    points.dedup_by_key(|t| (t.date(), t.hour(), t.minute()));

    // -----------------------------
    // Keep only what falls in [start, end)
    // -----------------------------
    let window = shift.as_interval();
    points.retain(|t| window.contains(*t));

    debug!(
        machine = %query.machine,
        date = %query.date,
        raw = raw_count,
        in_window = points.len(),
        "timeline built"
    );

    Some(Timeline { raw_count, points })
}
