//! Observability
//!
//! Structured, synchronous JSON logging for every subsystem.
//!
//! ```ignore
//! use docintel::observability::{Event, Logger};
//!
//! Logger::event(Event::StoreCleared, &[("path", "data/documents.json")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_logging_does_not_panic() {
        Logger::event(Event::ConfigLoaded, &[]);
        Logger::event(Event::StoreCreated, &[("path", "/tmp/x.json")]);
    }
}
