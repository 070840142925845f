//! Session-level execution failures.

use thiserror::Error;

/// A statement that failed against the store.
///
/// This layer never retries; every session failure propagates unchanged
/// to the caller. Retry policy, if any, belongs to the session's owner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The session is no longer usable
    #[error("session is closed")]
    Closed,

    /// The store rejected the statement
    #[error("statement rejected by the store: {0}")]
    Rejected(String),

    /// The store could not be reached
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
