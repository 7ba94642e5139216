//! Lifecycle events
//!
//! Events are explicit and typed; the string form is what appears in the
//! log line's `event` field.

use super::logger::Severity;

/// Observable events in orgdb
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Starter dataset file written by init
    DatasetWritten,
    /// Dataset file read begins
    DatasetLoadStart,
    /// Dataset validated and loaded into the store
    DatasetLoaded,
    /// Report execution begins
    ReportStart,
    /// Report executed successfully
    ReportComplete,
    /// Report failed
    ReportFailed,
}

impl Event {
    /// Returns the event name used in log output
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::DatasetWritten => "DATASET_WRITTEN",
            Event::DatasetLoadStart => "DATASET_LOAD_START",
            Event::DatasetLoaded => "DATASET_LOADED",
            Event::ReportStart => "REPORT_START",
            Event::ReportComplete => "REPORT_COMPLETE",
            Event::ReportFailed => "REPORT_FAILED",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::ReportFailed => Severity::Error,
            _ => Severity::Info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_screaming_snake() {
        assert_eq!(Event::DatasetLoaded.as_str(), "DATASET_LOADED");
        assert_eq!(Event::ReportFailed.as_str(), "REPORT_FAILED");
    }

    #[test]
    fn test_report_failed_logs_at_error() {
        assert_eq!(Event::ReportFailed.severity(), Severity::Error);
        assert_eq!(Event::ReportStart.severity(), Severity::Info);
    }
}
