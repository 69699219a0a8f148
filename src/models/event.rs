use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// One activity signal emitted by a machine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MachineEvent {
    pub machine: String,          // ⇔ "Id Equipo" column, trimmed + uppercased
    pub timestamp: NaiveDateTime, // ⇔ "Fecha" column
    pub partial: Option<f64>,     // ⇔ optional "Parcial" counter column
}

impl MachineEvent {
    /// Build an event normalizing the equipment identifier.
    pub fn new(machine: &str, timestamp: NaiveDateTime, partial: Option<f64>) -> Self {
        Self {
            machine: normalize_machine_id(machine),
            timestamp,
            partial,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    pub fn time(&self) -> NaiveTime {
        self.timestamp.time()
    }

    pub fn belongs_to(&self, machine: &str, date: NaiveDate) -> bool {
        self.machine == machine && self.date() == date
    }
}

/// Equipment ids are compared case-insensitively and without surrounding blanks.
pub fn normalize_machine_id(raw: &str) -> String {
    raw.trim().to_uppercase()
}
