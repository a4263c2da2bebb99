use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::model::config::BoardConfig;

/// Config file looked up in the working directory when no path is given
pub const CONFIG_FILE_NAME: &str = "taskboard.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config in {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Parse a config file. Missing sections and keys take their defaults.
pub fn read_config(path: &Path) -> Result<BoardConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load the config for this run.
///
/// An explicit path must exist. Without one, `taskboard.toml` in `dir` is used
/// when present and defaults otherwise.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<BoardConfig, ConfigError> {
    if let Some(path) = explicit {
        return read_config(path);
    }
    let path = dir.join(CONFIG_FILE_NAME);
    match read_config(&path) {
        Err(ConfigError::ReadError { source, .. }) if source.kind() == ErrorKind::NotFound => {
            Ok(BoardConfig::default())
        }
        other => other,
    }
}

/// Where the TUI writes its log: absolute paths as-is, others under the temp dir
pub fn resolve_log_path(file: &Path) -> PathBuf {
    if file.is_absolute() {
        file.to_path_buf()
    } else {
        std::env::temp_dir().join(file)
    }
}
