use crate::errors::{AppError, AppResult};
use crate::models::event::normalize_machine_id;
use chrono::NaiveDate;

pub const MIN_THRESHOLD: i64 = 1;
pub const MAX_THRESHOLD: i64 = 30;
pub const DEFAULT_THRESHOLD: i64 = 3;

/// One (machine, date, threshold) request to the gap engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayQuery {
    pub machine: String,
    pub date: NaiveDate,
    pub threshold: i64,
}

impl DayQuery {
    pub fn new(machine: &str, date: NaiveDate, threshold: i64) -> AppResult<Self> {
        if !(MIN_THRESHOLD..=MAX_THRESHOLD).contains(&threshold) {
            return Err(AppError::InvalidThreshold(threshold));
        }

        Ok(Self {
            machine: normalize_machine_id(machine),
            date,
            threshold,
        })
    }
}
