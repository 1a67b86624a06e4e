use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_success_sound")]
    pub success_sound: String,
    #[serde(default = "default_fail_sound")]
    pub fail_sound: String,
    #[serde(default = "default_sound_enabled")]
    pub sound_enabled: bool,
}

fn default_data_dir() -> String {
    Config::config_dir().to_string_lossy().to_string()
}
fn default_success_sound() -> String {
    "success.mp3".to_string()
}
fn default_fail_sound() -> String {
    "fail.mp3".to_string()
}
fn default_sound_enabled() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            success_sound: default_success_sound(),
            fail_sound: default_fail_sound(),
            sound_enabled: default_sound_enabled(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("studylog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".studylog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("studylog.conf")
    }

    /// CSV study log inside the data directory
    pub fn entries_file(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("study_log.csv")
    }

    /// Plain-text goal file inside the data directory
    pub fn goal_file(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("goal.txt")
    }

    /// Default target for the XLSX export
    pub fn export_file(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("study_log_export.xlsx")
    }

    /// Sound clips are looked up by their configured (relative) filenames.
    pub fn success_sound_file(&self) -> PathBuf {
        PathBuf::from(&self.success_sound)
    }

    pub fn fail_sound_file(&self) -> PathBuf {
        PathBuf::from(&self.fail_sound)
    }

    /// Load configuration from file, or return defaults if not found.
    /// A corrupt config file is never fatal: warn and keep the defaults.
    pub fn load() -> Self {
        let path = Self::config_file();
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    warning(format!(
                        "Failed to parse configuration file, using defaults: {e}"
                    ));
                    Self::default()
                }
            },
            Err(e) => {
                warning(format!(
                    "Failed to read configuration file, using defaults: {e}"
                ));
                Self::default()
            }
        }
    }
}
