use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::filter::FilterMode;
use crate::repository::file::DEFAULT_FILE_NAME;

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const DATA_DIR_ENV: &str = "TASKLIST_DATA_DIR";
const DEFAULT_DIR_NAME: &str = ".tasklist";

/// Settings read from `<data_dir>/config.toml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_filter: FilterMode,
    pub tasks_file: String,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_filter: FilterMode::All,
            tasks_file: DEFAULT_FILE_NAME.to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Missing file means defaults; a malformed one is an error.
    pub fn load(data_dir: &Path) -> Result<Self, ConfigError> {
        let path = data_dir.join(CONFIG_FILE_NAME);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => return Err(ConfigError::Io { path, source }),
        };
        toml::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
    }
}

/// An explicit directory wins, otherwise `~/.tasklist`.
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    match explicit {
        Some(dir) => Ok(dir),
        None => dirs::home_dir()
            .map(|home| home.join(DEFAULT_DIR_NAME))
            .ok_or(ConfigError::NoHomeDir),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.tasks_file, "tasks.json");
        assert_eq!(config.default_filter, FilterMode::All);
    }

    #[test]
    fn overrides_from_toml() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "default_filter = \"pending\"\ntasks_file = \"todo.json\"\n",
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.default_filter, FilterMode::Pending);
        assert_eq!(config.tasks_file, "todo.json");
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn unknown_filter_in_config_means_all() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "default_filter = \"starred\"\n").unwrap();
        assert_eq!(Config::load(dir.path()).unwrap().default_filter, FilterMode::All);
    }

    #[test]
    fn malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "default_filter = [").unwrap();
        assert!(matches!(Config::load(dir.path()), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn explicit_data_dir_wins() {
        let dir = PathBuf::from("/tmp/somewhere");
        assert_eq!(resolve_data_dir(Some(dir.clone())).unwrap(), dir);
    }
}
