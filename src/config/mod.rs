use crate::core::calculator::rules::AbsenceRule;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Target net work per day, in hours.
    #[serde(default = "default_target_hours")]
    pub target_hours: f64,
    #[serde(default)]
    pub absence_rule: AbsenceRule,
    #[serde(default = "default_show_decimal")]
    pub show_decimal: bool,
    /// Used when RUST_LOG is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_target_hours() -> f64 {
    8.0
}
fn default_show_decimal() -> bool {
    true
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_hours: default_target_hours(),
            absence_rule: AbsenceRule::default(),
            show_decimal: default_show_decimal(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rworktime")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rworktime")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rworktime.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(path).map_err(|_| AppError::ConfigLoad(path.display().to_string()))?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if !self.target_hours.is_finite() || self.target_hours < 0.0 {
            return Err(AppError::Config(format!(
                "target_hours must be a non-negative number, got {}",
                self.target_hours
            )));
        }
        Ok(())
    }

    /// Write the default configuration, keeping an existing file untouched.
    /// Returns `true` when a new file was written.
    pub fn init_at(path: &Path) -> AppResult<bool> {
        if path.exists() {
            return Ok(false);
        }
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Self::default())?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(true)
    }
}
