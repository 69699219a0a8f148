//! Event table ingestion.
//!
//! Everything that can go wrong with the raw table (unknown headers,
//! unparseable dates, blank ids) is dealt with here, so the gap engine only
//! ever sees well-typed `MachineEvent`s.

pub mod columns;
pub mod timestamp;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::event::MachineEvent;
use columns::ColumnMap;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use timestamp::{parse_number, parse_timestamp};
use tracing::{debug, warn};

/// Reader options taken from the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestOptions {
    pub delimiter: u8,
    /// Rows to skip before the header row.
    pub header_row: usize,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            header_row: 0,
        }
    }
}

impl IngestOptions {
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        Ok(Self {
            delimiter: cfg.delimiter_byte()?,
            header_row: cfg.header_row,
        })
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IngestStats {
    pub rows: usize,
    pub kept: usize,
    pub bad_timestamp: usize,
    pub blank_machine: usize,
}

impl IngestStats {
    pub fn dropped(&self) -> usize {
        self.bad_timestamp + self.blank_machine
    }
}

#[derive(Debug, Default, Clone)]
pub struct Ingested {
    pub events: Vec<MachineEvent>,
    pub stats: IngestStats,
}

pub fn load_file(path: &Path, opts: &IngestOptions) -> AppResult<Ingested> {
    let file = File::open(path).map_err(|e| {
        AppError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {e}", path.display()),
        ))
    })?;
    let out = read_events(file, opts)?;

    debug!(
        path = %path.display(),
        rows = out.stats.rows,
        kept = out.stats.kept,
        "event file loaded"
    );

    Ok(out)
}

pub fn read_events<R: Read>(reader: R, opts: &IngestOptions) -> AppResult<Ingested> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(opts.delimiter)
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = rdr.records();

    // skip preamble rows, then the header
    for _ in 0..opts.header_row {
        if records.next().transpose()?.is_none() {
            return Err(AppError::MissingColumns("no header row found".into()));
        }
    }
    let header: StringRecord = records
        .next()
        .transpose()?
        .ok_or_else(|| AppError::MissingColumns("no header row found".into()))?;

    let map = ColumnMap::resolve(header.iter())?;

    let mut out = Ingested::default();

    for record in records {
        let record = record?;
        out.stats.rows += 1;

        let Some(ts) = record.get(map.timestamp).and_then(parse_timestamp) else {
            out.stats.bad_timestamp += 1;
            continue;
        };

        let machine = record.get(map.machine).unwrap_or("").trim();
        if machine.is_empty() {
            out.stats.blank_machine += 1;
            continue;
        }

        let partial = map
            .partial
            .and_then(|i| record.get(i))
            .and_then(parse_number);

        out.events.push(MachineEvent::new(machine, ts, partial));
    }

    out.stats.kept = out.events.len();

    if out.stats.dropped() > 0 {
        warn!(
            bad_timestamp = out.stats.bad_timestamp,
            blank_machine = out.stats.blank_machine,
            "dropped unusable rows"
        );
    }

    Ok(out)
}
