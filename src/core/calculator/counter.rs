//! Optional enrichment: total of the machine's partial production counter
//! during the shift. Independent from the dead-time computation.

use crate::models::event::MachineEvent;
use crate::models::query::DayQuery;
use crate::models::shift::ShiftWindow;

/// Sum of strictly positive `partial` values of the query's in-shift events.
/// `None` when no such event carries a counter value.
pub fn partial_counter_total(
    events: &[MachineEvent],
    query: &DayQuery,
    shift: &ShiftWindow,
) -> Option<f64> {
    let window = shift.as_interval();

    let values: Vec<f64> = events
        .iter()
        .filter(|e| e.belongs_to(&query.machine, query.date) && window.contains(e.timestamp))
        .filter_map(|e| e.partial)
        .collect();

    if values.is_empty() {
        return None;
    }

    Some(values.into_iter().filter(|v| *v > 0.0).sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calculator::shift::{ShiftPolicy, resolve_shift};
    use chrono::NaiveDate;

    #[test]
    fn sums_only_positive_in_shift_values() {
        let d = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        let q = DayQuery::new("M1", d, 3).unwrap();
        let shift = resolve_shift(d, &ShiftPolicy::default());
        let ts = |h, m| d.and_hms_opt(h, m, 0).unwrap();

        let events = vec![
            MachineEvent::new("M1", ts(7, 0), Some(12.0)),
            MachineEvent::new("M1", ts(8, 0), Some(-3.0)),
            MachineEvent::new("M1", ts(9, 0), None),
            MachineEvent::new("M1", ts(10, 0), Some(8.5)),
            MachineEvent::new("M1", ts(17, 0), Some(100.0)),
            MachineEvent::new("M2", ts(10, 0), Some(50.0)),
        ];

        assert_eq!(partial_counter_total(&events, &q, &shift), Some(20.5));
    }

    #[test]
    fn no_counter_column_gives_none() {
        let d = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        let q = DayQuery::new("M1", d, 3).unwrap();
        let shift = resolve_shift(d, &ShiftPolicy::default());
        let events = vec![MachineEvent::new("M1", d.and_hms_opt(7, 0, 0).unwrap(), None)];

        assert_eq!(partial_counter_total(&events, &q, &shift), None);
    }
}
