//! Shift window and scheduled pauses of a calendar date.
//!
//! The clock policy is a pure function of the date: Monday to Thursday run
//! the long shift, Friday (and the weekend) the short one. Breakfast and
//! lunch sit at fixed clock times, cleanup is anchored to the shift end.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::shift::{PauseKind, ScheduledPause, ShiftWindow};
use crate::utils::time::{parse_time_strict, parse_window};
use chrono::{Datelike, NaiveDate, NaiveTime, TimeDelta, Weekday};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftPolicy {
    pub shift_start: NaiveTime,
    pub shift_end_long: NaiveTime,
    pub shift_end_short: NaiveTime,
    pub breakfast: (NaiveTime, NaiveTime),
    pub lunch: (NaiveTime, NaiveTime),
    pub cleanup_minutes: i64,
}

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap_or(NaiveTime::MIN)
}

impl Default for ShiftPolicy {
    fn default() -> Self {
        Self {
            shift_start: hm(6, 0),
            shift_end_long: hm(16, 0),
            shift_end_short: hm(15, 0),
            breakfast: (hm(8, 0), hm(8, 20)),
            lunch: (hm(12, 0), hm(12, 40)),
            cleanup_minutes: 20,
        }
    }
}

impl ShiftPolicy {
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let window = |key: &str, raw: &str| {
            parse_window(raw).ok_or_else(|| {
                AppError::Config(format!("{key}: expected HH:MM-HH:MM, got {raw:?}"))
            })
        };

        let policy = Self {
            shift_start: parse_time_strict(&cfg.shift_start)?,
            shift_end_long: parse_time_strict(&cfg.shift_end_long)?,
            shift_end_short: parse_time_strict(&cfg.shift_end_short)?,
            breakfast: window("breakfast_window", &cfg.breakfast_window)?,
            lunch: window("lunch_window", &cfg.lunch_window)?,
            cleanup_minutes: cfg.cleanup_minutes,
        };

        policy.validate()?;
        Ok(policy)
    }

    /// Pauses must fit inside both shift lengths and must not overlap.
    pub fn validate(&self) -> AppResult<()> {
        for end in [self.shift_end_long, self.shift_end_short] {
            if end <= self.shift_start {
                return Err(AppError::Config(format!(
                    "shift end {} must follow shift start {}",
                    end.format("%H:%M"),
                    self.shift_start.format("%H:%M")
                )));
            }
        }

        if self.cleanup_minutes < 0 {
            return Err(AppError::Config("cleanup_minutes must not be negative".into()));
        }

        let shortest = (self.shift_end_long.min(self.shift_end_short) - self.shift_start)
            .num_minutes();
        if self.cleanup_minutes > shortest {
            return Err(AppError::Config(format!(
                "cleanup_minutes {} exceeds the shortest shift ({} min)",
                self.cleanup_minutes, shortest
            )));
        }

        // One representative day per shift length
        let long_day = NaiveDate::from_ymd_opt(2024, 1, 1); // Monday
        let short_day = NaiveDate::from_ymd_opt(2024, 1, 5); // Friday

        for date in [long_day, short_day].into_iter().flatten() {
            let shift = resolve_shift(date, self);
            let pauses = scheduled_pauses(date, self);

            for p in &pauses {
                if p.start < shift.start || p.end > shift.end {
                    return Err(AppError::Config(format!(
                        "{} pause {}-{} falls outside the {} shift",
                        p.name(),
                        p.start.format("%H:%M"),
                        p.end.format("%H:%M"),
                        crate::utils::date::weekday_name(date)
                    )));
                }
            }

            for w in pauses.windows(2) {
                if w[1].start < w[0].end {
                    return Err(AppError::Config(format!(
                        "{} and {} pauses overlap",
                        w[0].name(),
                        w[1].name()
                    )));
                }
            }
        }

        Ok(())
    }

    pub fn shift_end_for(&self, date: NaiveDate) -> NaiveTime {
        match date.weekday() {
            Weekday::Mon | Weekday::Tue | Weekday::Wed | Weekday::Thu => self.shift_end_long,
            Weekday::Fri | Weekday::Sat | Weekday::Sun => self.shift_end_short,
        }
    }
}

pub fn resolve_shift(date: NaiveDate, policy: &ShiftPolicy) -> ShiftWindow {
    ShiftWindow {
        start: date.and_time(policy.shift_start),
        end: date.and_time(policy.shift_end_for(date)),
    }
}

/// The three pauses of `date`, in subtraction order.
///
/// Cleanup never starts before the shift does.
pub fn scheduled_pauses(date: NaiveDate, policy: &ShiftPolicy) -> Vec<ScheduledPause> {
    let shift = resolve_shift(date, policy);
    let cleanup_start = TimeDelta::try_minutes(policy.cleanup_minutes.max(0))
        .and_then(|d| shift.end.checked_sub_signed(d))
        .map_or(shift.start, |t| t.max(shift.start));

    vec![
        ScheduledPause {
            kind: PauseKind::Breakfast,
            start: date.and_time(policy.breakfast.0),
            end: date.and_time(policy.breakfast.1),
        },
        ScheduledPause {
            kind: PauseKind::Lunch,
            start: date.and_time(policy.lunch.0),
            end: date.and_time(policy.lunch.1),
        },
        ScheduledPause {
            kind: PauseKind::Cleanup,
            start: cleanup_start,
            end: shift.end,
        },
    ]
}

pub fn resolve_day(date: NaiveDate, policy: &ShiftPolicy) -> (ShiftWindow, Vec<ScheduledPause>) {
    (resolve_shift(date, policy), scheduled_pauses(date, policy))
}
