use super::{Workspace, build_query};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::calculator::counter::partial_counter_total;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::day_report::DayOutcome;
use crate::ui::report::{print_no_data, print_report};
use crate::ui::strip;

/// Handle the `analyze` command
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Analyze {
        machine,
        date,
        threshold,
        counter,
        strip: show_strip,
        cell,
    } = &cli.command
    {
        let query = build_query(machine, date, *threshold, cfg)?;
        let ws = Workspace::open(cli, cfg)?;

        let report = match Core::analyze_day(&ws.events, &query, &ws.policy) {
            DayOutcome::NoData => {
                print_no_data(&query);
                return Ok(());
            }
            DayOutcome::Computed(r) => r,
        };

        print_report(&report);

        if *show_strip {
            println!("\n{}", strip::render(&report, *cell));
        }

        if *counter {
            match partial_counter_total(&ws.events, &query, &report.shift) {
                Some(total) => println!("\nPartial counter (in shift): {total}"),
                None => println!("\nPartial counter (in shift): n/a"),
            }
        }
    }
    Ok(())
}
