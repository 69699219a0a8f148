//! Config file upgrades: detect keys introduced after the file was written
//! and append them with their default value.

use super::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys documented inline when they are added to an existing file.
fn key_comment(key: &str) -> Option<&'static str> {
    match key {
        "lunch_window" => Some(
            "# lunch_window: HH:MM-HH:MM, subtracted from dead time as scheduled pause\n",
        ),
        "cleanup_minutes" => {
            Some("# cleanup_minutes: last N minutes before shift end reserved for cleanup\n")
        }
        "header_row" => Some("# header_row: number of rows to skip before the header row\n"),
        _ => None,
    }
}

fn default_mapping() -> AppResult<Mapping> {
    match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => Ok(m),
        _ => Err(AppError::Other("default config is not a mapping".into())),
    }
}

fn parse_mapping(content: &str) -> AppResult<Mapping> {
    match serde_yaml::from_str::<Value>(content)? {
        Value::Mapping(m) => Ok(m),
        // empty file
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config("config file is not a YAML mapping".into())),
    }
}

/// Return the names of the known keys absent from `content`.
pub fn missing_keys(content: &str) -> AppResult<Vec<String>> {
    let current = parse_mapping(content)?;

    Ok(default_mapping()?
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Append every missing key, with its default value, to the file at `path`.
/// Idempotent: returns the list of keys added (empty when nothing changed).
pub fn migrate_missing_keys(path: &Path) -> AppResult<Vec<String>> {
    if !path.exists() {
        info(format!("No config file at {}, nothing to migrate.", path.display()));
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    let mut current = parse_mapping(&content)?;
    let defaults = default_mapping()?;
    let mut added = Vec::new();

    for (k, v) in defaults.iter() {
        if !current.contains_key(k) {
            current.insert(k.clone(), v.clone());
            if let Some(name) = k.as_str() {
                added.push(name.to_string());
            }
        }
    }

    if added.is_empty() {
        info("Configuration is up to date.");
        return Ok(added);
    }

    let serialized = serde_yaml::to_string(&Value::Mapping(current))?;

    // Inject documentation comment right before the newly added lines
    let mut new_content = String::new();
    for line in serialized.lines() {
        if let Some((key, _)) = line.split_once(':')
            && added.iter().any(|a| a == key)
            && let Some(comment) = key_comment(key)
        {
            new_content.push_str(comment);
        }
        new_content.push_str(line);
        new_content.push('\n');
    }

    fs::write(path, new_content)?;

    success(format!(
        "Config migration applied: added {}",
        added.join(", ")
    ));

    Ok(added)
}
