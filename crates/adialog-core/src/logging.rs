//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable holding the log filter directive
pub const LOG_ENV: &str = "ADLG_LOG";

/// Filter used when `ADLG_LOG` is unset: info for our crates, warn elsewhere
pub const DEFAULT_FILTER: &str =
    "async_dialogs=info,adialog_core=info,adialog_host=info,adialog_app=info,adialog_tui=info,warn";

/// Initialize the logging subsystem
///
/// Logs are written to `<data dir>/async-dialogs/logs/` so that nothing is
/// printed over a dialog drawn in the terminal. Log level is controlled by
/// the `ADLG_LOG` environment variable.
///
/// # Examples
/// ```bash
/// ADLG_LOG=debug adialog confirm --title "Delete?"
/// ADLG_LOG=adialog_host=trace adialog alert --title Done
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "adialog.log");

    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .map_err(|e| crate::error::Error::config(format!("logging already initialised: {e}")))?;

    tracing::info!("async-dialogs starting, logging to {}", get_current_log_file()?.display());

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("async-dialogs").join("logs"))
}

/// Get the log file path for the current day
pub fn get_current_log_file() -> Result<PathBuf> {
    let dir = get_log_directory()?;
    Ok(dir.join("adialog.log"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_lives_in_app_directory() {
        let file = get_current_log_file().unwrap();
        assert!(file.ends_with("async-dialogs/logs/adialog.log"));
    }

    #[test]
    fn test_default_filter_keeps_info_for_every_crate() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
        for target in [
            "async_dialogs",
            "adialog_core",
            "adialog_host",
            "adialog_app",
            "adialog_tui",
        ] {
            assert!(
                DEFAULT_FILTER.contains(&format!("{target}=info")),
                "{target} missing from default filter"
            );
        }
    }
}
