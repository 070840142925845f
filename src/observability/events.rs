//! Typed query-lifecycle events.

use std::fmt;

use super::logger::Severity;

/// Observable events emitted by the query layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A repository was constructed and its entity path resolved
    RepositoryOpened,
    /// A query operation began
    QueryBegin,
    /// A query operation finished and produced results
    QueryExecuted,
    /// A query operation failed
    QueryFailed,
    /// A paginated lookup produced a page
    PageFetched,
    /// The count query ran to determine a page total
    CountExecuted,
    /// A short first page proved the total; the count query was skipped
    CountSkipped,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::RepositoryOpened => "REPOSITORY_OPENED",
            Event::QueryBegin => "QUERY_BEGIN",
            Event::QueryExecuted => "QUERY_COMPLETE",
            Event::QueryFailed => "QUERY_FAILED",
            Event::PageFetched => "PAGE_FETCHED",
            Event::CountExecuted => "PAGE_COUNT_EXECUTED",
            Event::CountSkipped => "PAGE_COUNT_SKIPPED",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::QueryFailed => Severity::Error,
            Event::RepositoryOpened => Severity::Info,
            _ => Severity::Trace,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
