pub mod analyze;
pub mod batch;
pub mod config;
pub mod export;
pub mod init;
pub mod list;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::calculator::shift::ShiftPolicy;
use crate::errors::{AppError, AppResult};
use crate::ingest::{self, IngestOptions};
use crate::models::event::MachineEvent;
use crate::models::query::DayQuery;
use crate::ui::messages::warning;
use crate::utils::date::parse_date;
use crate::utils::path::expand_tilde;

/// Everything a day command needs: the loaded table and the clock policy.
pub struct Workspace {
    pub events: Vec<MachineEvent>,
    pub policy: ShiftPolicy,
}

impl Workspace {
    pub fn open(cli: &Cli, cfg: &Config) -> AppResult<Self> {
        let raw = cli
            .data
            .as_ref()
            .or(cfg.data_file.as_ref())
            .ok_or(AppError::NoDataFile)?;
        let path = expand_tilde(raw);

        let opts = IngestOptions::from_config(cfg)?;
        let loaded = ingest::load_file(&path, &opts)?;

        if loaded.stats.dropped() > 0 {
            warning(format!(
                "{} of {} rows skipped (unreadable date or empty machine id).",
                loaded.stats.dropped(),
                loaded.stats.rows
            ));
        }

        Ok(Self {
            events: loaded.events,
            policy: ShiftPolicy::from_config(cfg)?,
        })
    }
}

pub(crate) fn build_query(
    machine: &str,
    date: &str,
    threshold: Option<i64>,
    cfg: &Config,
) -> AppResult<DayQuery> {
    let d = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
    DayQuery::new(machine, d, threshold.unwrap_or(cfg.default_threshold))
}
