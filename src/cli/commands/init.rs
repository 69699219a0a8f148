use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Creates `~/.rdowntime/rdowntime.conf` with default shift settings,
/// recording the event file given with `--data` when present.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = Config::init_all(cli.data.clone(), cli.test)?;

    info(format!("Config file : {}", path.display()));
    match &cli.data {
        Some(d) => info(format!("Event file  : {}", d)),
        None => info("Event file  : not set (use --data or edit data_file)"),
    }

    if cli.test {
        success("Test mode: configuration not written.");
    } else {
        success("rDowntime initialization completed!");
    }
    Ok(())
}
