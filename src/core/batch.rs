//! Fan-out of independent day queries over the shared, read-only event table.

use crate::core::calculator::shift::ShiftPolicy;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::day_report::DayOutcome;
use crate::models::event::MachineEvent;
use crate::models::query::DayQuery;
use chrono::NaiveDate;
use rayon::prelude::*;

/// Analyze every query in parallel; results keep the order of `queries`.
pub fn analyze_many(
    events: &[MachineEvent],
    queries: &[DayQuery],
    policy: &ShiftPolicy,
) -> Vec<(DayQuery, DayOutcome)> {
    queries
        .par_iter()
        .map(|q| (q.clone(), Core::analyze_day(events, q, policy)))
        .collect()
}

/// Cartesian product machines × dates, one query each.
pub fn build_queries(
    machines: &[String],
    dates: &[NaiveDate],
    threshold: i64,
) -> AppResult<Vec<DayQuery>> {
    let mut out = Vec::with_capacity(machines.len() * dates.len());
    for m in machines {
        for d in dates {
            out.push(DayQuery::new(m, *d, threshold)?);
        }
    }
    Ok(out)
}
