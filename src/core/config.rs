use crate::config::Config;
use crate::config::migrate::{migrate_missing_keys, missing_keys};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, info, success, warning};
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Effective configuration (file values merged over defaults) as YAML.
    pub fn render(cfg: &Config) -> AppResult<String> {
        Ok(serde_yaml::to_string(cfg)?)
    }

    /// Keys absent from the file on disk.
    pub fn check(path: &Path) -> AppResult<Vec<String>> {
        if !path.exists() {
            return Err(AppError::ConfigLoad(format!(
                "{} not found, run `rdowntime init` first",
                path.display()
            )));
        }
        let content = fs::read_to_string(path)?;
        missing_keys(&content)
    }

    pub fn migrate(path: &Path) -> AppResult<Vec<String>> {
        if !path.exists() {
            return Err(AppError::ConfigLoad(format!(
                "{} not found, run `rdowntime init` first",
                path.display()
            )));
        }
        migrate_missing_keys(path)
    }

    /// Open the file in `editor`, falling back to $EDITOR/$VISUAL or the platform default.
    pub fn edit(path: &Path, editor: Option<&str>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let editor_to_use = editor.map(str::to_string).unwrap_or_else(|| default_editor.clone());

        match Command::new(&editor_to_use).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration edited with '{}'", editor_to_use));
                return Ok(());
            }
            _ => warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                editor_to_use, default_editor
            )),
        }

        match Command::new(&default_editor).arg(path).status() {
            Ok(s) if s.success() => {
                info(format!("Configuration edited with fallback '{}'", default_editor));
                Ok(())
            }
            Ok(_) | Err(_) => {
                error(format!("Could not start '{}'", default_editor));
                Err(AppError::Config(format!(
                    "failed to edit {} with '{}'",
                    path.display(),
                    default_editor
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_contains_every_key() {
        let yaml = ConfigLogic::render(&Config::default()).unwrap();
        for key in ["shift_start", "lunch_window", "cleanup_minutes", "default_threshold"] {
            assert!(yaml.contains(key), "missing {key}");
        }
    }

    #[test]
    fn check_on_missing_file_is_an_error() {
        let p = std::env::temp_dir().join("rdowntime_no_such_config.conf");
        let _ = fs::remove_file(&p);
        assert!(matches!(ConfigLogic::check(&p), Err(AppError::ConfigLoad(_))));
    }
}
