//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/depcon/logs/` since the TUI owns
/// stdout. Log level is controlled by the `DEPCON_LOG` environment variable.
///
/// # Examples
/// ```bash
/// DEPCON_LOG=debug depcon
/// DEPCON_LOG=trace depcon
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "depcon.log");

    // Default to info for all workspace crates, allow override via DEPCON_LOG
    let env_filter = EnvFilter::try_from_env("DEPCON_LOG").unwrap_or_else(|_| {
        EnvFilter::new("depcon=info,depcon_core=info,depcon_api=info,depcon_app=info,depcon_tui=info,warn")
    });

    tracing_subscriber::registry()
        .with(env_filter)
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

    tracing::info!("depcon starting, log directory: {}", log_dir.display());

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("depcon").join("logs")
}
