//! Error taxonomy for query composition and execution.
//!
//! Three kinds of failure reach callers: an invalid argument (rejected
//! before anything executes), a translation failure (the predicate or
//! projection could not become an executable query), or an execution
//! failure (the store rejected or failed the statement). Collaborator
//! failures propagate unchanged with their cause attached; this layer
//! never retries.

use std::fmt;

use thiserror::Error;

use crate::session::SessionError;
use crate::translate::TranslationError;

/// Broad classification of a query failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryErrorKind {
    /// A required argument was absent or malformed; nothing executed
    InvalidArgument,
    /// The predicate or projection could not be translated
    Translation,
    /// The executable query failed against the store
    Execution,
}

impl QueryErrorKind {
    /// Returns the kind name for diagnostics and log fields
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryErrorKind::InvalidArgument => "INVALID_ARGUMENT",
            QueryErrorKind::Translation => "TRANSLATION",
            QueryErrorKind::Execution => "EXECUTION",
        }
    }
}

impl fmt::Display for QueryErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A failed query operation
#[derive(Debug, Error)]
pub enum QueryError {
    /// A predicate was required but contained no condition at all
    #[error("predicate is required and must contain at least one condition")]
    MissingPredicate,

    /// The page request cannot be satisfied as stated
    #[error("invalid page request: {reason}")]
    InvalidPageRequest {
        /// What the request got wrong
        reason: String,
    },

    /// A collaborator could not translate the predicate or projection
    #[error("query translation failed")]
    Translation(#[from] TranslationError),

    /// The store rejected or failed the executable query
    #[error("query execution failed")]
    Execution(#[from] SessionError),

    /// A fetched row did not decode as the expected entity
    #[error("row does not decode as entity `{entity}`")]
    Decode {
        /// Logical entity name the row was expected to decode as
        entity: &'static str,
        /// Underlying decode failure
        #[source]
        source: serde_json::Error,
    },
}

impl QueryError {
    /// Classifies this error into the three-way taxonomy
    pub fn kind(&self) -> QueryErrorKind {
        match self {
            QueryError::MissingPredicate | QueryError::InvalidPageRequest { .. } => {
                QueryErrorKind::InvalidArgument
            }
            QueryError::Translation(_) => QueryErrorKind::Translation,
            QueryError::Execution(_) | QueryError::Decode { .. } => QueryErrorKind::Execution,
        }
    }

    pub(crate) fn invalid_page(reason: impl Into<String>) -> Self {
        QueryError::InvalidPageRequest {
            reason: reason.into(),
        }
    }
}

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;
