use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// CLI subcommands: plain stderr
    Stderr,
    /// TUI: the terminal is taken, so log to a file
    File(PathBuf),
}

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("invalid log level '{level}': {message}")]
    InvalidFilter { level: String, message: String },
    #[error("cannot open log file {path}: {message}")]
    File { path: PathBuf, message: String },
    #[error("failed to initialize tracing: {0}")]
    Init(String),
}

pub fn parse_filter(level: &str) -> Result<EnvFilter, LogError> {
    EnvFilter::try_new(level).map_err(|e| LogError::InvalidFilter {
        level: level.to_string(),
        message: e.to_string(),
    })
}

/// Install the global subscriber. Hold the returned guard until exit so the
/// file writer flushes.
pub fn init_tracing(level: &str, target: &LogTarget) -> Result<Option<WorkerGuard>, LogError> {
    let filter = parse_filter(level)?;
    match target {
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| LogError::Init(e.to_string()))?;
            Ok(None)
        }
        LogTarget::File(path) => {
            let appender = file_appender(path)?;
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(writer)
                .try_init()
                .map_err(|e| LogError::Init(e.to_string()))?;
            Ok(Some(guard))
        }
    }
}

fn file_appender(path: &Path) -> Result<RollingFileAppender, LogError> {
    let file_error = |message: String| LogError::File {
        path: path.to_path_buf(),
        message,
    };
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| file_error("path has no file name".into()))?;
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(name)
        .build(dir)
        .map_err(|e| file_error(e.to_string()))
}
