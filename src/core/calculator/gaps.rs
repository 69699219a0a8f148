//! Module responsible for turning the activity timeline into candidate gaps:
//! silent stretches at least `threshold` minutes long, pauses not yet excluded.

use crate::models::interval::Interval;
use crate::models::shift::ShiftWindow;
use chrono::NaiveDateTime;

/// Walk `[shift start] + points + [shift end]` and keep every consecutive
/// pair whose distance reaches the threshold.
///
/// `points` must be sorted and inside the shift window.
pub fn candidate_gaps(
    points: &[NaiveDateTime],
    shift: &ShiftWindow,
    threshold: i64,
) -> Vec<Interval> {
    let sequence: Vec<NaiveDateTime> = std::iter::once(shift.start)
        .chain(points.iter().copied())
        .chain(std::iter::once(shift.end))
        .collect();

    sequence
        .windows(2)
        .map(|w| Interval::new(w[0], w[1]))
        .filter(|gap| !gap.is_empty() && gap.meets_threshold(threshold))
        .collect()
}
