//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable controlling the log filter
pub const LOG_ENV_VAR: &str = "CROPYIELD_LOG";

const DEFAULT_FILTER: &str = "crop_yield=info,cropyield=info,warn";
const LOG_FILE_NAME: &str = "cropyield.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/crop-yield/logs/` so they never
/// interleave with the terminal UI. Log level is controlled by the
/// `CROPYIELD_LOG` environment variable.
///
/// # Examples
/// ```bash
/// CROPYIELD_LOG=debug cargo run
/// CROPYIELD_LOG=cropyield_client=trace cargo run
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("Crop yield client starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Build the filter from `CROPYIELD_LOG`, falling back to the default
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("crop-yield").join("logs"))
}

/// Get the log file path for the current day
pub fn get_current_log_file() -> Result<PathBuf> {
    let dir = get_log_directory()?;
    Ok(dir.join(LOG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_log_file_lives_in_app_directory() {
        let path = get_current_log_file().unwrap();
        assert!(path.ends_with("crop-yield/logs/cropyield.log"));
    }

    #[test]
    #[serial]
    fn test_env_filter_defaults_without_variable() {
        std::env::remove_var(LOG_ENV_VAR);
        let filter = env_filter();
        assert!(filter.to_string().contains("cropyield=info"));
    }

    #[test]
    #[serial]
    fn test_env_filter_honours_variable() {
        std::env::set_var(LOG_ENV_VAR, "debug");
        let filter = env_filter();
        std::env::remove_var(LOG_ENV_VAR);
        assert_eq!(filter.to_string(), "debug");
    }
}
