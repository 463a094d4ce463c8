use crate::core::calendar::{DEFAULT_END_HOUR, DEFAULT_START_HOUR, WorkCalendar};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_start_hour")]
    pub work_start_hour: u32,
    #[serde(default = "default_end_hour")]
    pub work_end_hour: u32,
    #[serde(default = "default_output_format")]
    pub output_format: String,
    #[serde(default = "default_show_weekday")]
    pub show_weekday: bool,
}

fn default_start_hour() -> u32 {
    DEFAULT_START_HOUR
}
fn default_end_hour() -> u32 {
    DEFAULT_END_HOUR
}
fn default_output_format() -> String {
    "%Y-%m-%d %H:%M".to_string()
}
fn default_show_weekday() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            work_start_hour: default_start_hour(),
            work_end_hour: default_end_hour(),
            output_format: default_output_format(),
            show_weekday: default_show_weekday(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform:
    /// `%APPDATA%\duedate` on Windows, `~/.duedate` elsewhere. Without a known
    /// home directory `.duedate` in the current directory is used.
    pub fn config_dir() -> PathBuf {
        let base = if cfg!(target_os = "windows") {
            dirs::config_dir().map(|d| d.join("duedate"))
        } else {
            dirs::home_dir().map(|h| h.join(".duedate"))
        };
        base.unwrap_or_else(|| PathBuf::from(".duedate"))
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("duedate.conf")
    }

    /// Load the configuration from `path`; a missing file yields the defaults.
    /// The hours are validated later by [`Config::calendar`], after any
    /// command-line overrides.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    /// Write this configuration to `path`, creating parent directories.
    ///
    /// An existing file is kept unless `force` is set.
    pub fn save_to(&self, path: &Path, force: bool) -> AppResult<bool> {
        if path.exists() && !force {
            return Ok(false);
        }

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(true)
    }

    /// Validated work calendar built from the configured hours.
    pub fn calendar(&self) -> AppResult<WorkCalendar> {
        WorkCalendar::new(self.work_start_hour, self.work_end_hour)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }
}
