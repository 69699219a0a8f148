//! Human-readable rendering of a day report.

use crate::models::day_report::{DayIndicators, DayReport};
use crate::models::query::DayQuery;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{color_for_loss, paint};
use crate::utils::date::weekday_name;
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_minutes_hms;

pub fn indicator_panel(ind: &DayIndicators) -> String {
    let pct = format!("{:.2}%", ind.loss_percentage);

    format!(
        "• Total available:        {:>7.1} min\n\
         • Scheduled unavailable:  {:>7.1} min\n\
         • Net:                    {:>7.1} min\n\
         • Unplanned lost:         {:>7.1} min  ({})\n\
         • Loss:                   {:>8}\n",
        ind.total_available,
        ind.scheduled_unavailable,
        ind.net,
        ind.unplanned_lost,
        mins2readable(ind.unplanned_lost),
        paint(&pct, color_for_loss(ind.loss_percentage)),
    )
}

pub fn interval_table(report: &DayReport) -> Table {
    let mut table = Table::new(vec![
        Column::right("#"),
        Column::left("start"),
        Column::left("end"),
        Column::right("minutes"),
        Column::right("duration"),
    ]);

    for (i, rec) in report.records().iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            rec.start_time.format("%H:%M:%S").to_string(),
            rec.end_time.format("%H:%M:%S").to_string(),
            format!("{:.1}", rec.duration_minutes),
            format_minutes_hms(rec.duration_minutes),
        ]);
    }

    table
}

pub fn print_report(report: &DayReport) {
    header(format!(
        "Machine {} – {} ({}) – threshold {} min",
        report.machine,
        report.date,
        weekday_name(report.date),
        report.threshold
    ));

    println!(
        "Shift: {} - {}",
        report.shift.start.format("%H:%M"),
        report.shift.end.format("%H:%M")
    );
    let pauses: Vec<String> = report
        .pauses
        .iter()
        .map(|p| {
            format!(
                "{} {}-{}",
                p.name(),
                p.start.format("%H:%M"),
                p.end.format("%H:%M")
            )
        })
        .collect();
    println!("Pauses: {}\n", pauses.join(", "));

    println!("Day indicators:");
    print!("{}", indicator_panel(&report.display_indicators()));
    println!();

    if report.intervals.is_empty() {
        println!("No dead time detected for this day.");
        return;
    }

    println!(
        "Dead time detected (≥ {} min): {} intervals",
        report.threshold,
        report.intervals.len()
    );
    print!("{}", interval_table(report).render());
}

pub fn print_no_data(query: &DayQuery) {
    warning(format!(
        "No events for machine {} on {}.",
        query.machine, query.date
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_uses_given_values() {
        let ind = DayIndicators {
            total_available: 600.0,
            scheduled_unavailable: 80.0,
            net: 520.0,
            unplanned_lost: 52.0,
            loss_percentage: 10.0,
        };
        let panel = indicator_panel(&ind);

        assert!(panel.contains("600.0 min"));
        assert!(panel.contains("520.0 min"));
        assert!(panel.contains("00h 52m"));
        assert!(panel.contains("10.00%"));
    }
}
