use crate::utils::time::minutes_between;
use chrono::NaiveDateTime;
use serde::Serialize;

/// Half-open time interval `[start, end)` within one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Interval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Interval {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Exact length in minutes (fractional when seconds are involved).
    pub fn duration_minutes(&self) -> f64 {
        minutes_between(self.start, self.end)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// True overlap: touching intervals do not overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn contains(&self, ts: NaiveDateTime) -> bool {
        self.start <= ts && ts < self.end
    }

    pub fn meets_threshold(&self, threshold_minutes: i64) -> bool {
        self.duration_minutes() >= threshold_minutes as f64
    }

    pub fn to_record(&self) -> IntervalRecord {
        IntervalRecord {
            start_time: self.start,
            end_time: self.end,
            duration_minutes: self.duration_minutes(),
        }
    }
}

/// Flat interval row handed to display and export collaborators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntervalRecord {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub duration_minutes: f64,
}
