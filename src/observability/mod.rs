//! Structured observability for the query layer.
//!
//! - Structured logs (JSON), one line per event
//! - Deterministic key ordering
//! - Synchronous, no background threads, read-only with respect to
//!   execution

mod events;
mod logger;
mod trace;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use trace::QueryTrace;

/// Logs a query-lifecycle event with fields
pub fn log_event(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
