use super::{Workspace, build_query};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::day_report::DayOutcome;
use crate::ui::report::print_no_data;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        machine,
        date,
        format,
        file,
        threshold,
        force,
    } = &cli.command
    {
        let query = build_query(machine, date, *threshold, cfg)?;
        let ws = Workspace::open(cli, cfg)?;

        match Core::analyze_day(&ws.events, &query, &ws.policy) {
            DayOutcome::NoData => print_no_data(&query),
            DayOutcome::Computed(report) => {
                ExportLogic::export(&report, *format, file.as_deref(), *force)?;
            }
        }
    }
    Ok(())
}
