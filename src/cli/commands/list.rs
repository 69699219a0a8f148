use super::Workspace;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::event::normalize_machine_id;
use crate::utils::date::weekday_name;
use crate::utils::table::{Column, Table};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::List { machine } = &cli.command {
        let ws = Workspace::open(cli, cfg)?;

        match machine {
            None => print_machines(&ws),
            Some(m) => print_dates(&ws, m),
        }
    }
    Ok(())
}

fn print_machines(ws: &Workspace) {
    let machines = Core::available_machines(&ws.events);

    if machines.is_empty() {
        println!("No machines found in the event file.");
        return;
    }

    let mut table = Table::new(vec![
        Column::left("machine"),
        Column::right("days"),
        Column::right("events"),
    ]);

    for m in &machines {
        let days = Core::available_dates(&ws.events, m).len();
        let events = ws.events.iter().filter(|e| &e.machine == m).count();
        table.add_row(vec![m.clone(), days.to_string(), events.to_string()]);
    }

    print!("{}", table.render());
}

fn print_dates(ws: &Workspace, machine: &str) {
    let machine = normalize_machine_id(machine);
    let dates = Core::available_dates(&ws.events, &machine);

    if dates.is_empty() {
        println!("No events for machine {}.", machine);
        return;
    }

    println!("Dates with events for {}:", machine);
    for d in dates {
        let count = ws.events.iter().filter(|e| e.belongs_to(&machine, d)).count();
        println!("- {} {:<9} {:>5} events", d, weekday_name(d), count);
    }
}
