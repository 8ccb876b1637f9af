//! Logging system initialization
//!
//! The TUI owns the terminal while the form is up, so console logging would
//! scribble over the interface. With a configured log file, output goes
//! there through a non-blocking writer; without one it is discarded.

use crate::config::LoggingConfig;

/// Initialize the tracing subscriber from the logging configuration.
///
/// Call once during startup, before the terminal is put into raw mode.
/// The returned guard must be kept alive for the duration of the program so
/// buffered log writes are flushed on exit.
pub fn init_logging(config: &LoggingConfig) -> tracing_appender::non_blocking::WorkerGuard {
    let writer: Box<dyn std::io::Write + Send + Sync> = match &config.file {
        Some(path) if !path.is_empty() => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .expect("Failed to open log file");
            Box::new(file)
        }
        _ => Box::new(std::io::sink()),
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::new(config.level.clone());

    tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(false)
        .init();

    guard
}
