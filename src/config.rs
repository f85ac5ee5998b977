use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_FILE: &str = "resources/job_data.csv";
pub const DATA_FILE_ENV: &str = "TECHJOBS_DATA_FILE";

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct UserConfig {
    pub data: DataConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DataConfig {
    pub file: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

impl UserConfig {
    /// Reads `~/.techjobs/config.json`. Any problem with the file, or a
    /// missing home directory, yields the defaults.
    pub fn load() -> Self {
        match config_dir() {
            Some(dir) => Self::load_from(&dir.join("config.json")),
            None => Self::default(),
        }
    }

    pub fn load_from(config_path: &Path) -> Self {
        if !config_path.exists() {
            return Self::default();
        }

        let parsed = std::fs::read_to_string(config_path)
            .map_err(|e| e.to_string())
            .and_then(|content| serde_json::from_str(&content).map_err(|e| e.to_string()));

        parsed.unwrap_or_else(|error| {
            tracing::warn!(
                path = %config_path.display(),
                %error,
                "Ignoring unreadable config file"
            );
            Self::default()
        })
    }

    /// Picks the data file: explicit flag, then environment, then config file.
    pub fn resolve_data_file(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| std::env::var_os(DATA_FILE_ENV).map(PathBuf::from))
            .unwrap_or_else(|| self.data.file.clone())
    }
}

fn config_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(|home| PathBuf::from(home).join(".techjobs"))
}
