//! Browser Logger
//!
//! `log` backend for WASM frontends. Lines go to the browser console and the
//! most recent ones are kept in a bounded ring so the UI can show them.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Number of formatted lines retained by default
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<BrowserLogger> = OnceLock::new();

/// Console logger with a circular buffer of recent lines
pub struct BrowserLogger {
    app_name: String,
    level: LevelFilter,
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
}

impl BrowserLogger {
    pub fn new(app_name: &str, level: LevelFilter) -> Self {
        Self {
            app_name: app_name.to_string(),
            level,
            capacity: DEFAULT_CAPACITY,
            lines: Mutex::new(VecDeque::with_capacity(DEFAULT_CAPACITY)),
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }

    /// `[12:00:00.123] INFO  [App] target: message`
    pub fn format(&self, record: &Record) -> String {
        format!(
            "[{}] {:<5} [{}] {}: {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            self.app_name,
            record.target(),
            record.args()
        )
    }

    /// Snapshot of retained lines, oldest first
    pub fn recent_lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    fn push(&self, line: String) {
        if let Ok(mut lines) = self.lines.lock() {
            while lines.len() >= self.capacity {
                lines.pop_front();
            }
            lines.push_back(line);
        }
    }
}

impl Log for BrowserLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.format(record);
        write_console(record.level(), &line);
        self.push(line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the global logger keeping the last `capacity` lines. Only the first call wins.
pub fn init_logger(app_name: &str, level: LevelFilter, capacity: usize) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| BrowserLogger::new(app_name, level).with_capacity(capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Lines retained by the global logger (empty before `init_logger`)
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(|l| l.recent_lines()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(logger: &BrowserLogger, level: Level, msg: &str) {
        logger.log(
            &Record::builder()
                .args(format_args!("{}", msg))
                .level(level)
                .target("test")
                .build(),
        );
    }

    #[test]
    fn test_format_contains_level_app_and_message() {
        let logger = BrowserLogger::new("Board", LevelFilter::Debug);
        emit(&logger, Level::Info, "loaded 3 projects");

        let lines = logger.recent_lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("INFO"));
        assert!(lines[0].contains("[Board]"));
        assert!(lines[0].ends_with("test: loaded 3 projects"));
    }

    #[test]
    fn test_level_filter_drops_verbose_records() {
        let logger = BrowserLogger::new("Board", LevelFilter::Warn);
        emit(&logger, Level::Debug, "noise");
        emit(&logger, Level::Error, "boom");

        let lines = logger.recent_lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("boom"));
    }

    #[test]
    fn test_global_logger_feeds_recent_lines() {
        init_logger("Board", LevelFilter::Info, 8).unwrap();
        log::info!("mounted");
        log::debug!("filtered");

        let lines = recent_lines();
        assert!(lines.iter().any(|l| l.ends_with("mounted")));
        assert!(!lines.iter().any(|l| l.ends_with("filtered")));
        assert!(init_logger("Other", LevelFilter::Trace, 8).is_err());
    }

    #[test]
    fn test_ring_evicts_oldest() {
        let logger = BrowserLogger::new("Board", LevelFilter::Trace).with_capacity(2);
        emit(&logger, Level::Info, "one");
        emit(&logger, Level::Info, "two");
        emit(&logger, Level::Info, "three");

        let lines = logger.recent_lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("two"));
        assert!(lines[1].ends_with("three"));
    }
}
