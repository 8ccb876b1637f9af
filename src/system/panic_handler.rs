//! Panic handler module
//!
//! A panic while the terminal is in raw mode leaves the user's shell in a
//! broken state and the panic message invisible. The hook restores the
//! terminal first, then records the panic to crash.log and stderr.

use std::fs::OpenOptions;
use std::io::Write;
use std::panic;

use chrono::Utc;
use ratatui::crossterm::{
    execute,
    terminal::{LeaveAlternateScreen, disable_raw_mode},
};

/// Install the custom panic hook.
pub fn install_panic_hook() {
    let _default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Terminal first: everything after this must be readable.
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stderr(), LeaveAlternateScreen);

        let payload = panic_info.payload();
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()))
            .unwrap_or_else(|| "Unknown location".to_string());

        let backtrace = std::backtrace::Backtrace::force_capture();
        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();

        if let Err(e) = write_crash_log(&timestamp, &message, &location, &backtrace) {
            eprintln!("Failed to write crash log: {}", e);
        }

        eprintln!("shortform crashed: {} (at {})", message, location);
        eprintln!("Details were written to crash.log");
    }));
}

fn write_crash_log(
    timestamp: &str,
    message: &str,
    location: &str,
    backtrace: &std::backtrace::Backtrace,
) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open("crash.log")?;

    writeln!(file, "==== {} ====", timestamp)?;
    writeln!(file, "panic: {}", message)?;
    writeln!(file, "location: {}", location)?;
    writeln!(file, "{}", backtrace)?;
    writeln!(file)?;
    Ok(())
}
