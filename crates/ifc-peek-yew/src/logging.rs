//! Browser console logger
//!
//! Routes the `log` facade to `console.*`. Errors, warnings and info are
//! always shown; debug and trace only when debug mode is on (`?debug=1` or
//! `"debug": true` in the page config).

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::atomic::{AtomicBool, Ordering};

/// Global debug mode flag
static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Check if debug mode is enabled
pub fn is_debug() -> bool {
    DEBUG_MODE.load(Ordering::Relaxed)
}

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Info || is_debug()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[IFC-Peek] {}", record.args()).into();
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::log_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger
///
/// Call this once at startup. A second call only updates the debug flag.
pub fn init(debug: bool) {
    DEBUG_MODE.store(debug, Ordering::Relaxed);
    if log::set_logger(&LOGGER).is_err() {
        log::debug!("Console logger already installed");
    }
    log::set_max_level(if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });
    if debug {
        // Always log this one
        web_sys::console::log_1(&"[IFC-Peek] Debug mode enabled".into());
    }
}
