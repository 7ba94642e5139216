//! Observability subsystem for orgdb
//!
//! Structured JSON logging plus typed lifecycle events.
//!
//! # Principles
//!
//! 1. Observability is read-only, no side effects on execution
//! 2. Deterministic output: one line per event, alphabetical field order
//! 3. Everything goes to stderr; stdout is reserved for report output

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event with fields
pub fn log_event(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event_does_not_panic() {
        log_event(Event::DatasetLoadStart, &[("path", "/tmp/company.json")]);
        log_event(Event::ReportComplete, &[("report", "manager_statistics")]);
    }
}
