use crate::core::calculator::shift::{ShiftPolicy, resolve_day};
use crate::core::calculator::{consolidate, gaps, indicators, interval, timeline};
use crate::models::day_report::{DayOutcome, DayReport};
use crate::models::event::MachineEvent;
use crate::models::query::DayQuery;
use chrono::NaiveDate;
use std::collections::BTreeSet;
use tracing::debug;

pub struct Core;

impl Core {
    /// Run the whole dead-time pipeline for one (machine, date, threshold).
    pub fn analyze_day(
        events: &[MachineEvent],
        query: &DayQuery,
        policy: &ShiftPolicy,
    ) -> DayOutcome {
        let (shift, pauses) = resolve_day(query.date, policy);

        let Some(tl) = timeline::build_timeline(events, query, &shift) else {
            debug!(machine = %query.machine, date = %query.date, "no events for query");
            return DayOutcome::NoData;
        };

        let candidates = gaps::candidate_gaps(&tl.points, &shift, query.threshold);
        let remainders = interval::subtract_pauses(&candidates, &pauses);
        let unplanned = consolidate::consolidate(remainders, query.threshold);
        let indicators = indicators::aggregate(&shift, &pauses, &unplanned);

        debug!(
            candidates = candidates.len(),
            unplanned = unplanned.len(),
            lost = indicators.unplanned_lost,
            "day analyzed"
        );

        DayOutcome::Computed(DayReport {
            machine: query.machine.clone(),
            date: query.date,
            threshold: query.threshold,
            shift,
            pauses,
            intervals: unplanned,
            indicators,
        })
    }

    /// Distinct machine ids, sorted.
    pub fn available_machines(events: &[MachineEvent]) -> Vec<String> {
        events
            .iter()
            .map(|e| e.machine.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct dates with at least one event for `machine`, sorted.
    pub fn available_dates(events: &[MachineEvent], machine: &str) -> Vec<NaiveDate> {
        let machine = crate::models::event::normalize_machine_id(machine);
        events
            .iter()
            .filter(|e| e.machine == machine)
            .map(MachineEvent::date)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
