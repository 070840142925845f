//! Translation failures raised by the predicate and projection
//! translators.

use thiserror::Error;

/// A predicate or projection that could not become an executable query
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationError {
    /// The entity name has no queryable path
    #[error("no queryable path for entity `{0}`")]
    UnknownEntity(String),

    /// A predicate references a field the target path cannot query
    #[error("field `{field}` is not queryable on `{path}`")]
    UnknownField {
        /// Entity path the field was looked up on
        path: String,
        /// Offending field name
        field: String,
    },

    /// The projection binds a different number of field expressions than
    /// its shape factory expects
    #[error("projection binds {bound} field expressions but the shape expects {expected}")]
    ArityMismatch {
        /// Number of bound field expressions
        bound: usize,
        /// Arity the shape factory declared
        expected: usize,
    },

    /// The shape factory rejected the projected values
    #[error("cannot construct projected shape: {0}")]
    Shape(String),
}

impl TranslationError {
    /// Shape-construction failure with the given reason
    pub fn shape(reason: impl Into<String>) -> Self {
        TranslationError::Shape(reason.into())
    }
}
