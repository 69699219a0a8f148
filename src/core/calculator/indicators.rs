use crate::models::day_report::DayIndicators;
use crate::models::interval::Interval;
use crate::models::shift::{ScheduledPause, ShiftWindow};

/// Day indicators from the shift, its pauses and the final dead-time list.
/// Values are exact; rounding belongs to `DayIndicators::rounded`.
pub fn aggregate(
    shift: &ShiftWindow,
    pauses: &[ScheduledPause],
    intervals: &[Interval],
) -> DayIndicators {
    let total_available = shift.duration_minutes();
    let scheduled_unavailable: f64 = pauses.iter().map(ScheduledPause::duration_minutes).sum();
    let net = total_available - scheduled_unavailable;
    let unplanned_lost: f64 = intervals.iter().map(Interval::duration_minutes).sum();

    debug_assert!(
        unplanned_lost <= net.max(0.0) + 1e-9,
        "unplanned time ({unplanned_lost}) exceeds net time ({net})"
    );

    let loss_percentage = if net > 0.0 {
        unplanned_lost / net * 100.0
    } else {
        0.0
    };

    DayIndicators {
        total_available,
        scheduled_unavailable,
        net,
        unplanned_lost,
        loss_percentage,
    }
}
