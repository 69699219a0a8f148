use super::Workspace;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::batch::{analyze_many, build_queries};
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::models::day_report::DayOutcome;
use crate::models::event::normalize_machine_id;
use crate::utils::date::resolve_period;
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;
use std::collections::BTreeSet;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Batch {
        period,
        machine,
        threshold,
        skip_empty,
    } = &cli.command
    {
        let ws = Workspace::open(cli, cfg)?;

        let machines: Vec<String> = if machine.is_empty() {
            Core::available_machines(&ws.events)
        } else {
            machine.iter().map(|m| normalize_machine_id(m)).collect()
        };

        let dates: Vec<NaiveDate> = match period {
            Some(p) => resolve_period(p).map_err(AppError::InvalidPeriod)?,
            None => ws
                .events
                .iter()
                .map(|e| e.date())
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect(),
        };

        let queries = build_queries(
            &machines,
            &dates,
            threshold.unwrap_or(cfg.default_threshold),
        )?;
        let results = analyze_many(&ws.events, &queries, &ws.policy);

        let mut table = Table::new(vec![
            Column::left("machine"),
            Column::left("date"),
            Column::right("net"),
            Column::right("lost"),
            Column::right("loss %"),
            Column::right("gaps"),
        ]);

        for (q, outcome) in &results {
            match outcome {
                DayOutcome::NoData if *skip_empty => {}
                DayOutcome::NoData => table.add_row(vec![
                    q.machine.clone(),
                    q.date.to_string(),
                    "-".into(),
                    "-".into(),
                    "no events".into(),
                    "-".into(),
                ]),
                DayOutcome::Computed(r) => {
                    let ind = r.display_indicators();
                    table.add_row(vec![
                        q.machine.clone(),
                        q.date.to_string(),
                        format!("{:.1}", ind.net),
                        format!("{:.1}", ind.unplanned_lost),
                        format!("{:.2}", ind.loss_percentage),
                        r.intervals.len().to_string(),
                    ]);
                }
            }
        }

        if table.rows.is_empty() {
            println!("Nothing to analyze for the selected period.");
        } else {
            print!("{}", table.render());
        }
    }
    Ok(())
}
