use crate::models::interval::{Interval, IntervalRecord};
use crate::models::shift::{ScheduledPause, ShiftWindow};
use crate::utils::formatting::round_to;
use chrono::NaiveDate;
use serde::Serialize;

/// Decimal places used for every displayed/exported minute value.
pub const MINUTE_DECIMALS: u32 = 1;
/// Decimal places used for the displayed/exported loss percentage.
pub const PERCENT_DECIMALS: u32 = 2;

/// Day-level figures, all in minutes except `loss_percentage`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DayIndicators {
    pub total_available: f64,
    pub scheduled_unavailable: f64,
    pub net: f64,
    pub unplanned_lost: f64,
    pub loss_percentage: f64,
}

impl DayIndicators {
    /// The one place where indicator rounding happens.
    pub fn rounded(&self) -> DayIndicators {
        DayIndicators {
            total_available: round_to(self.total_available, MINUTE_DECIMALS),
            scheduled_unavailable: round_to(self.scheduled_unavailable, MINUTE_DECIMALS),
            net: round_to(self.net, MINUTE_DECIMALS),
            unplanned_lost: round_to(self.unplanned_lost, MINUTE_DECIMALS),
            loss_percentage: round_to(self.loss_percentage, PERCENT_DECIMALS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayReport {
    pub machine: String,
    pub date: NaiveDate,
    pub threshold: i64,
    pub shift: ShiftWindow,
    pub pauses: Vec<ScheduledPause>,
    pub intervals: Vec<Interval>,
    pub indicators: DayIndicators,
}

impl DayReport {
    pub fn records(&self) -> Vec<IntervalRecord> {
        self.intervals.iter().map(Interval::to_record).collect()
    }

    pub fn display_indicators(&self) -> DayIndicators {
        self.indicators.rounded()
    }
}

/// Result of one engine run: "no data" is kept apart from "no dead time".
#[derive(Debug, Clone, PartialEq)]
pub enum DayOutcome {
    NoData,
    Computed(DayReport),
}

impl DayOutcome {
    pub fn is_no_data(&self) -> bool {
        matches!(self, DayOutcome::NoData)
    }

    pub fn report(&self) -> Option<&DayReport> {
        match self {
            DayOutcome::NoData => None,
            DayOutcome::Computed(r) => Some(r),
        }
    }

    pub fn into_report(self) -> Option<DayReport> {
        match self {
            DayOutcome::NoData => None,
            DayOutcome::Computed(r) => Some(r),
        }
    }
}
