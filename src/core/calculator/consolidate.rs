//! Gap consolidation after pause subtraction.

use crate::models::interval::Interval;

/// Filter, sort, merge truly overlapping intervals, filter again.
///
/// Adjacent intervals (`next.start == current.end`) stay separate.
pub fn consolidate(mut intervals: Vec<Interval>, threshold: i64) -> Vec<Interval> {
    intervals.retain(|iv| iv.meets_threshold(threshold));
    if intervals.is_empty() {
        return intervals;
    }

    intervals.sort_by_key(|iv| iv.start);

    let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
    for iv in intervals {
        match merged.last_mut() {
            Some(cur) if iv.start < cur.end => cur.end = cur.end.max(iv.end),
            _ => merged.push(iv),
        }
    }

    // post-merge threshold re-check
    merged.retain(|iv| iv.meets_threshold(threshold));
    merged
}
