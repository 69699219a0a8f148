use crate::errors::{AppError, AppResult};
use crate::models::query::DEFAULT_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data_file: Option<String>,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default = "default_header_row")]
    pub header_row: usize,
    #[serde(default = "default_threshold")]
    pub default_threshold: i64,
    #[serde(default = "default_shift_start")]
    pub shift_start: String,
    #[serde(default = "default_shift_end_long")]
    pub shift_end_long: String,
    #[serde(default = "default_shift_end_short")]
    pub shift_end_short: String,
    #[serde(default = "default_breakfast_window")]
    pub breakfast_window: String,
    #[serde(default = "default_lunch_window")]
    pub lunch_window: String,
    #[serde(default = "default_cleanup_minutes")]
    pub cleanup_minutes: i64,
}

fn default_delimiter() -> String {
    ",".to_string()
}
fn default_header_row() -> usize {
    0
}
fn default_threshold() -> i64 {
    DEFAULT_THRESHOLD
}
fn default_shift_start() -> String {
    "06:00".to_string()
}
fn default_shift_end_long() -> String {
    "16:00".to_string()
}
fn default_shift_end_short() -> String {
    "15:00".to_string()
}
fn default_breakfast_window() -> String {
    "08:00-08:20".to_string()
}
fn default_lunch_window() -> String {
    "12:00-12:40".to_string()
}
fn default_cleanup_minutes() -> i64 {
    20
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            delimiter: default_delimiter(),
            header_row: default_header_row(),
            default_threshold: default_threshold(),
            shift_start: default_shift_start(),
            shift_end_long: default_shift_end_long(),
            shift_end_short: default_shift_end_short(),
            breakfast_window: default_breakfast_window(),
            lunch_window: default_lunch_window(),
            cleanup_minutes: default_cleanup_minutes(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rdowntime")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rdowntime")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rdowntime.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content).map_err(|e| AppError::ConfigLoad(e.to_string()))
    }

    /// Delimiter as a single byte, as the CSV reader wants it.
    pub fn delimiter_byte(&self) -> AppResult<u8> {
        match self.delimiter.as_bytes() {
            [b] => Ok(*b),
            _ if self.delimiter == "\\t" => Ok(b'\t'),
            _ => Err(AppError::Config(format!(
                "delimiter must be a single ASCII character, got {:?}",
                self.delimiter
            ))),
        }
    }

    /// Initialize the configuration directory and file
    pub fn init_all(data_file: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        let path = Self::config_file();

        let config = Config {
            data_file,
            ..Config::default()
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(&path)?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(path)
    }
}
