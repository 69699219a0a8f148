use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rDowntime
/// CLI application to detect unplanned machine dead time within a shift
#[derive(Parser)]
#[command(
    name = "rdowntime",
    version = env!("CARGO_PKG_VERSION"),
    about = "Detect unplanned machine dead time from activity events, shift by shift",
    long_about = None
)]
pub struct Cli {
    /// Override the event file (CSV) configured in rdowntime.conf
    #[arg(global = true, long = "data", value_name = "FILE")]
    pub data: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default value")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// List machines found in the event file, or the dates of one machine
    List {
        #[arg(long, short, help = "Show the dates with events for this machine")]
        machine: Option<String>,
    },

    /// Compute dead time and day indicators for one machine and date
    Analyze {
        /// Machine (equipment) id
        machine: String,

        /// Date of the shift (YYYY-MM-DD or DD/MM/YYYY)
        date: String,

        #[arg(long, short, help = "Minimum gap in minutes (1-30)")]
        threshold: Option<i64>,

        #[arg(long = "counter", help = "Also sum the partial production counter")]
        counter: bool,

        #[arg(long = "strip", help = "Draw the shift as a one-line strip")]
        strip: bool,

        #[arg(
            long = "cell",
            default_value_t = 10,
            value_parser = clap::value_parser!(i64).range(1..=600),
            help = "Minutes per strip cell, 1-600 (with --strip)"
        )]
        cell: i64,
    },

    /// Export the dead-time intervals of one machine and date
    Export {
        /// Machine (equipment) id
        machine: String,

        /// Date of the shift (YYYY-MM-DD or DD/MM/YYYY)
        date: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(
            long,
            value_name = "FILE",
            help = "Absolute output path (default: dead_time_<machine>_<date>.<ext> in the current directory)"
        )]
        file: Option<String>,

        #[arg(long, short, help = "Minimum gap in minutes (1-30)")]
        threshold: Option<i64>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Analyze every machine/date of a period in parallel
    Batch {
        #[arg(
            long,
            short,
            value_name = "RANGE",
            help = "YYYY, YYYY-MM, YYYY-MM-DD or a range A:B (default: every date in the file)"
        )]
        period: Option<String>,

        #[arg(long, short, help = "Restrict to these machines (repeatable)")]
        machine: Vec<String>,

        #[arg(long, short, help = "Minimum gap in minutes (1-30)")]
        threshold: Option<i64>,

        #[arg(long = "skip-empty", help = "Hide days without events")]
        skip_empty: bool,
    },
}
