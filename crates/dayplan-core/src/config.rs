//! TOML-based planner configuration.
//!
//! Stores the fixed planning rules the original product hard-coded:
//! - Importance threshold for the "important" half of the matrix
//! - Urgency window in days
//! - Fraction of available time reserved as buffer
//! - Number of Q2 tasks guaranteed early placement
//!
//! Configuration is stored at `~/.config/dayplan/config.toml`. The planner
//! receives the values explicitly; nothing in the core reads this file on
//! its own.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;

/// Planner configuration.
///
/// Serialized to/from TOML at `~/.config/dayplan/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlannerConfig {
    /// Importance rating at or above which a task counts as important.
    #[serde(default = "default_importance_threshold")]
    pub importance_threshold: u8,
    /// Urgency window: a task is urgent when due on or before
    /// `reference_date + (urgent_days - 1)` days. The default of 1 makes
    /// the cutoff the reference date itself; set 2 for "due by tomorrow".
    #[serde(default = "default_urgent_days")]
    pub urgent_days: u32,
    /// Fraction of total available time left unscheduled, clamped to
    /// [0.0, 0.8] at use.
    #[serde(default = "default_buffer_ratio")]
    pub buffer_ratio: f64,
    /// Minimum number of Q2 tasks placed ahead of Q3/Q4.
    #[serde(default = "default_ensure_q2")]
    pub ensure_q2: usize,
}

// Default functions
fn default_importance_threshold() -> u8 {
    4
}
fn default_urgent_days() -> u32 {
    1
}
fn default_buffer_ratio() -> f64 {
    0.20
}
fn default_ensure_q2() -> usize {
    1
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            importance_threshold: default_importance_threshold(),
            urgent_days: default_urgent_days(),
            buffer_ratio: default_buffer_ratio(),
            ensure_q2: default_ensure_q2(),
        }
    }
}

/// Returns `~/.config/dayplan[-dev]/` based on DAYPLAN_ENV.
///
/// Set DAYPLAN_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn config_dir() -> Result<PathBuf, std::io::Error> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("DAYPLAN_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("dayplan-dev")
    } else {
        base_dir.join("dayplan")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

impl PlannerConfig {
    /// Path of the config file on disk.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be created.
    pub fn path() -> Result<PathBuf, std::io::Error> {
        Ok(config_dir()?.join("config.toml"))
    }

    /// Load from disk or write and return the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("~/.config/dayplan"),
            message: e.to_string(),
        })?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path().map_err(|e| ConfigError::SaveFailed {
            path: PathBuf::from("~/.config/dayplan"),
            message: e.to_string(),
        })?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Buffer ratio clamped into [0.0, 0.8] so at least 20% of available
    /// time stays schedulable.
    pub fn clamped_buffer_ratio(&self) -> f64 {
        self.buffer_ratio.clamp(0.0, 0.8)
    }

    /// Get a config value as string by key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "importance_threshold" => Some(self.importance_threshold.to_string()),
            "urgent_days" => Some(self.urgent_days.to_string()),
            "buffer_ratio" => Some(self.buffer_ratio.to_string()),
            "ensure_q2" => Some(self.ensure_q2.to_string()),
            _ => None,
        }
    }

    /// Set a config value by key and persist. Returns error on unknown key
    /// or unparsable/out-of-range value.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        match key {
            "importance_threshold" => {
                let v: u8 = value.parse().map_err(|_| invalid(format!("not an integer: {value}")))?;
                if !(1..=5).contains(&v) {
                    return Err(invalid(format!("must be in 1..=5, got {v}")));
                }
                self.importance_threshold = v;
            }
            "urgent_days" => {
                let v: u32 = value.parse().map_err(|_| invalid(format!("not an integer: {value}")))?;
                if !(1..=365).contains(&v) {
                    return Err(invalid(format!("must be in 1..=365, got {v}")));
                }
                self.urgent_days = v;
            }
            "buffer_ratio" => {
                let v: f64 = value.parse().map_err(|_| invalid(format!("not a number: {value}")))?;
                if !v.is_finite() || v < 0.0 {
                    return Err(invalid(format!("must be a non-negative number, got {value}")));
                }
                self.buffer_ratio = v;
            }
            "ensure_q2" => {
                // Any count is meaningful: placement clamps it to the size
                // of the Q2 bucket. Only the parse can fail.
                self.ensure_q2 = value
                    .parse()
                    .map_err(|_| invalid(format!("not an integer: {value}")))?;
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        self.save()
    }
}
