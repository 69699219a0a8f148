//! Interval subtraction: remove scheduled time from candidate gaps.

use crate::models::interval::Interval;
use crate::models::shift::ScheduledPause;

/// `base − cut`: zero, one or two remainders, empty remainders omitted.
pub fn subtract(base: Interval, cut: Interval) -> Vec<Interval> {
    if cut.end <= base.start || cut.start >= base.end {
        return vec![base];
    }

    let mut parts = Vec::with_capacity(2);

    if cut.start > base.start {
        parts.push(Interval::new(base.start, cut.start.min(base.end)));
    }
    if cut.end < base.end {
        parts.push(Interval::new(cut.end.max(base.start), base.end));
    }

    parts.retain(|p| !p.is_empty());
    parts
}

/// Subtract every pause, in order, from every surviving fragment.
pub fn subtract_pauses(gaps: &[Interval], pauses: &[ScheduledPause]) -> Vec<Interval> {
    pauses.iter().fold(gaps.to_vec(), |fragments, pause| {
        fragments
            .into_iter()
            .flat_map(|f| subtract(f, pause.as_interval()))
            .collect()
    })
}
