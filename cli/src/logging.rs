use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_FILE_NAME: &str = "tasklist.log";

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over the configured level. The TUI owns the terminal, so
/// interactive runs log to `<data_dir>/tasklist.log`; the returned guard must
/// outlive the session for buffered lines to be flushed.
pub fn init(level: &str, data_dir: &Path, to_file: bool) -> Result<Option<WorkerGuard>> {
    let filter = match env_filter() {
        Some(filter) => filter,
        None => EnvFilter::try_new(level).with_context(|| format!("invalid log_level `{level}`"))?,
    };

    if to_file {
        let appender = file_appender(data_dir)?;
        let (writer, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(writer).with_ansi(false))
            .try_init()?;
        Ok(Some(guard))
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()?;
        Ok(None)
    }
}

fn file_appender(data_dir: &Path) -> Result<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(data_dir)
        .with_context(|| format!("cannot open log file in {}", data_dir.display()))
}

// Ignore empty or oversized filters rather than failing startup.
fn env_filter() -> Option<EnvFilter> {
    let raw = std::env::var("RUST_LOG").ok()?;
    let raw = raw.trim();
    if raw.is_empty() || raw.len() > 4096 {
        return None;
    }
    EnvFilter::try_new(raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appender_creates_log_file_in_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let appender = file_appender(dir.path()).unwrap();
        drop(appender);
        assert!(dir.path().join(LOG_FILE_NAME).exists());
    }

    #[test]
    fn unusable_data_dir_is_an_error_not_a_panic() {
        let dir = tempfile::tempdir().unwrap();
        let not_a_dir = dir.path().join("plain-file");
        std::fs::write(&not_a_dir, "x").unwrap();

        let err = file_appender(&not_a_dir.join("logs")).err().unwrap();
        assert!(err.to_string().contains("cannot open log file"));
    }
}
