//! `log` backend that writes to the browser console.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;
use web_sys::console;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = JsValue::from_str(&format_record(
            record.level(),
            record.target(),
            &record.args().to_string(),
        ));
        match record.level() {
            Level::Error => console::error_1(&message),
            Level::Warn => console::warn_1(&message),
            Level::Info => console::info_1(&message),
            Level::Debug | Level::Trace => console::debug_1(&message),
        }
    }

    fn flush(&self) {}
}

/// Installs the console logger. Calling it twice is harmless.
pub fn init() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(max_level(cfg!(debug_assertions)));
    }
}

fn max_level(debug_build: bool) -> LevelFilter {
    if debug_build {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

fn format_record(level: Level, target: &str, message: &str) -> String {
    format!("[{level}] {target}: {message}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_level() {
        assert_eq!(max_level(true), LevelFilter::Debug);
        assert_eq!(max_level(false), LevelFilter::Info);
    }

    #[test]
    fn test_format_record() {
        assert_eq!(
            format_record(Level::Warn, "termfolio_core::storage", "quota exceeded"),
            "[WARN] termfolio_core::storage: quota exceeded"
        );
    }
}
