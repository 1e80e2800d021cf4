//! Logger setup for both targets.
//!
//! The browser build logs to the devtools console through `console_log` and
//! installs a panic hook; native builds use `env_logger`, where `RUST_LOG`
//! still overrides the configured level.

use crate::config::LogLevel;

/// Install the logger. Safe to call more than once; later calls only log a
/// debug message.
#[cfg(target_arch = "wasm32")]
pub fn init_logging(level: LogLevel) {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(level.to_level()).is_err() {
        log::debug!("Logger already initialized");
    }
}

/// Install the logger. Safe to call more than once; later calls only log a
/// debug message.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging(level: LogLevel) {
    let result = env_logger::Builder::new()
        .filter_level(level.to_level_filter())
        .parse_default_env()
        .try_init();
    if result.is_err() {
        log::debug!("Logger already initialized");
    }
}
