use crate::models::interval::Interval;
use chrono::NaiveDateTime;
use serde::Serialize;

/// Named scheduled pauses, in the order they are subtracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PauseKind {
    Breakfast,
    Lunch,
    Cleanup,
}

impl PauseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PauseKind::Breakfast => "Breakfast",
            PauseKind::Lunch => "Lunch",
            PauseKind::Cleanup => "Cleanup",
        }
    }
}

/// Active working window of one calendar date, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShiftWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl ShiftWindow {
    pub fn as_interval(&self) -> Interval {
        Interval::new(self.start, self.end)
    }

    pub fn duration_minutes(&self) -> f64 {
        self.as_interval().duration_minutes()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduledPause {
    pub kind: PauseKind,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl ScheduledPause {
    pub fn name(&self) -> &'static str {
        self.kind.as_str()
    }

    pub fn as_interval(&self) -> Interval {
        Interval::new(self.start, self.end)
    }

    pub fn duration_minutes(&self) -> f64 {
        self.as_interval().duration_minutes()
    }
}
