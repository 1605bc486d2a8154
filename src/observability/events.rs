//! Observable events
//!
//! Every log line the crate emits is named by one of these variants.

use std::fmt;

use super::logger::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Settings resolved from file and environment
    ConfigLoaded,
    /// HTTP server bound and accepting requests
    ServerStart,

    // Registry
    /// Store file did not exist and was created empty
    StoreCreated,
    /// Store file content could not be parsed and was read as empty
    StoreCorruptionIgnored,
    /// One stored entry could not be decoded and was skipped
    StoreEntrySkipped,
    /// A record was written under its resolved id
    DocumentRegistered,
    /// The store was reset to an empty mapping
    StoreCleared,
    /// A storage I/O operation failed
    StoreIoFailed,

    // Derived views
    /// A query finished scoring
    QueryAnswered,
    /// A query was rejected before execution
    QueryRejected,
    /// Compliance rules were evaluated over the registry
    AlertsEvaluated,

    // HTTP
    /// A request failed with a server-side error
    RequestFailed,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::ServerStart => "SERVER_START",

            Event::StoreCreated => "STORE_CREATED",
            Event::StoreCorruptionIgnored => "STORE_CORRUPTION_IGNORED",
            Event::StoreEntrySkipped => "STORE_ENTRY_SKIPPED",
            Event::DocumentRegistered => "DOCUMENT_REGISTERED",
            Event::StoreCleared => "STORE_CLEARED",
            Event::StoreIoFailed => "STORE_IO_FAILED",

            Event::QueryAnswered => "QUERY_ANSWERED",
            Event::QueryRejected => "QUERY_REJECTED",
            Event::AlertsEvaluated => "ALERTS_EVALUATED",

            Event::RequestFailed => "REQUEST_FAILED",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::StoreCorruptionIgnored | Event::StoreEntrySkipped | Event::QueryRejected => {
                Severity::Warn
            }
            Event::StoreIoFailed | Event::RequestFailed => Severity::Error,
            Event::DocumentRegistered | Event::QueryAnswered | Event::AlertsEvaluated => {
                Severity::Trace
            }
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_screaming_snake_case() {
        let events = [
            Event::ConfigLoaded,
            Event::ServerStart,
            Event::StoreCreated,
            Event::StoreCorruptionIgnored,
            Event::StoreEntrySkipped,
            Event::DocumentRegistered,
            Event::StoreCleared,
            Event::StoreIoFailed,
            Event::QueryAnswered,
            Event::QueryRejected,
            Event::AlertsEvaluated,
            Event::RequestFailed,
        ];
        for event in events {
            assert!(event
                .as_str()
                .chars()
                .all(|c| c.is_ascii_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_corruption_is_a_warning() {
        assert_eq!(Event::StoreCorruptionIgnored.severity(), Severity::Warn);
        assert_eq!(Event::StoreEntrySkipped.severity(), Severity::Warn);
        assert_eq!(Event::StoreIoFailed.severity(), Severity::Error);
    }
}
