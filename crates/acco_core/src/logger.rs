//! Process-wide logger.
//!
//! There is exactly one [`Logger`], built lazily on first access through
//! [`Logger::shared`]. It has no public constructor.

use std::sync::{Mutex, MutexGuard, OnceLock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

static SHARED: OnceLock<Logger> = OnceLock::new();

/// A line written through the shared logger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub text: String,
    pub logged_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct LoggerState {
    prefix: Option<String>,
    entries: Vec<LogEntry>,
}

/// Singleton console logger.
#[derive(Debug)]
pub struct Logger {
    state: Mutex<LoggerState>,
}

impl Logger {
    fn new() -> Self {
        Self {
            state: Mutex::new(LoggerState::default()),
        }
    }

    /// The single shared instance.
    pub fn shared() -> &'static Logger {
        SHARED.get_or_init(Logger::new)
    }

    /// Set or clear the prefix applied to subsequent lines.
    pub fn set_prefix(&self, prefix: Option<String>) {
        self.lock().prefix = prefix;
    }

    /// Print a line to the console and record it. Returns the printed line.
    pub fn log(&self, text: &str) -> String {
        let entry = self.record(text);
        println!("{}", entry.text);
        entry.text
    }

    /// Record a line without printing it to stdout.
    pub fn record(&self, text: &str) -> LogEntry {
        let mut state = self.lock();
        let line = match &state.prefix {
            Some(prefix) => format!("{} {}", prefix, text),
            None => text.to_string(),
        };
        info!(target: "acco::logger", "{}", line);

        let entry = LogEntry {
            text: line,
            logged_at: Utc::now(),
        };
        state.entries.push(entry.clone());
        entry
    }

    /// Everything logged so far, oldest first.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.lock().entries.clone()
    }

    fn lock(&self) -> MutexGuard<'_, LoggerState> {
        // A panic while holding the lock leaves the state consistent.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_is_single_instance() {
        let a = Logger::shared();
        let b = Logger::shared();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_log_records_entry() {
        // Private instance so parallel tests on the shared one don't interfere.
        let logger = Logger::new();
        let line = logger.log("A text from a singleton");

        assert_eq!(line, "A text from a singleton");
        let entries = logger.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text, "A text from a singleton");
    }

    #[test]
    fn test_prefix() {
        let logger = Logger::new();
        logger.set_prefix(Some("[acco]".to_string()));
        assert_eq!(logger.log("hello"), "[acco] hello");

        logger.set_prefix(None);
        assert_eq!(logger.log("again"), "again");
        assert_eq!(logger.entries().len(), 2);
    }

    #[test]
    fn test_record_applies_prefix() {
        let logger = Logger::new();
        logger.set_prefix(Some("[quiet]".to_string()));

        let entry = logger.record("not printed");
        assert_eq!(entry.text, "[quiet] not printed");
        assert_eq!(logger.entries(), vec![entry]);
    }

    #[test]
    fn test_shared_log() {
        let before = Logger::shared().entries().len();
        Logger::shared().log("shared line");
        assert!(Logger::shared().entries().len() > before);
    }
}
