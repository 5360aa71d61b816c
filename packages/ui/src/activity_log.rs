//! In-app record of learning events: words saved or removed, recognition
//! results, review scores and failures the learner should know about.

use dioxus::prelude::*;

/// Oldest entries are dropped beyond this.
const MAX_ENTRIES: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl LogLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            LogLevel::Info => "activity-log-entry info",
            LogLevel::Success => "activity-log-entry success",
            LogLevel::Warning => "activity-log-entry warning",
            LogLevel::Error => "activity-log-entry error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActivityLog {
    pub entries: Vec<LogEntry>,
    pub visible: bool,
}

impl ActivityLog {
    pub fn push(&mut self, level: LogLevel, message: &str) {
        if self.entries.len() == MAX_ENTRIES {
            self.entries.remove(0);
        }
        self.entries.push(LogEntry {
            timestamp: current_time(),
            level,
            message: message.to_string(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|e| e.level == LogLevel::Error)
    }
}

pub fn use_activity_log() -> Signal<ActivityLog> {
    use_context::<Signal<ActivityLog>>()
}

pub fn log_activity(log: &mut Signal<ActivityLog>, level: LogLevel, message: &str) {
    match level {
        LogLevel::Error => tracing::error!("{message}"),
        LogLevel::Warning => tracing::warn!("{message}"),
        _ => tracing::info!("{message}"),
    }
    log.write().push(level, message);
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    let s = date.get_seconds();
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    "00:00:00".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_caps_entries() {
        let mut log = ActivityLog::default();
        for i in 0..MAX_ENTRIES + 5 {
            log.push(LogLevel::Info, &format!("event {i}"));
        }
        assert_eq!(log.entries.len(), MAX_ENTRIES);
        assert_eq!(log.entries[0].message, "event 5");
    }

    #[test]
    fn test_has_errors() {
        let mut log = ActivityLog::default();
        log.push(LogLevel::Success, "Saved \"hund\"");
        assert!(!log.has_errors());
        log.push(LogLevel::Error, "Could not save vocabulary");
        assert!(log.has_errors());
    }
}
