//! Header discovery: many spreadsheet spellings map onto three canonical fields.

use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Timestamp,
    Machine,
    Partial,
}

/// Normalized header spelling → canonical field.
const ALIASES: &[(&str, Field)] = &[
    ("fecha", Field::Timestamp),
    ("fecha y hora", Field::Timestamp),
    ("fecha/hora", Field::Timestamp),
    ("timestamp", Field::Timestamp),
    ("date", Field::Timestamp),
    ("datetime", Field::Timestamp),
    ("id equipo", Field::Machine),
    ("id_equipo", Field::Machine),
    ("id maquina", Field::Machine),
    ("equipo", Field::Machine),
    ("machineid", Field::Machine),
    ("idequipo", Field::Machine),
    ("parcial", Field::Partial),
    ("contador parcial", Field::Partial),
    ("partial", Field::Partial),
    ("counter", Field::Partial),
];

/// Trim, lowercase and fold Spanish accents.
pub fn normalize_header(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' | 'ü' => 'u',
            other => other,
        })
        .collect()
}

pub fn lookup(raw: &str) -> Option<Field> {
    let key = normalize_header(raw);
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, field)| *field)
}

/// Column positions of the canonical fields inside one header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub timestamp: usize,
    pub machine: usize,
    pub partial: Option<usize>,
}

impl ColumnMap {
    /// First matching column wins for each field.
    pub fn resolve<'a, I>(headers: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut timestamp = None;
        let mut machine = None;
        let mut partial = None;

        for (idx, h) in headers.into_iter().enumerate() {
            match lookup(h) {
                Some(Field::Timestamp) if timestamp.is_none() => timestamp = Some(idx),
                Some(Field::Machine) if machine.is_none() => machine = Some(idx),
                Some(Field::Partial) if partial.is_none() => partial = Some(idx),
                _ => {}
            }
        }

        match (timestamp, machine) {
            (Some(timestamp), Some(machine)) => Ok(Self {
                timestamp,
                machine,
                partial,
            }),
            (t, m) => {
                let mut missing = Vec::new();
                if t.is_none() {
                    missing.push("timestamp (Fecha)");
                }
                if m.is_none() {
                    missing.push("equipment id (Id Equipo)");
                }
                Err(AppError::MissingColumns(missing.join(", ")))
            }
        }
    }
}
