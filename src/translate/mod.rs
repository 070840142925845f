//! Collaborator seams that turn caller predicates and projections into
//! storage-native statements.
//!
//! The composer consumes these traits; it never interprets a predicate
//! itself. Translation failures propagate unchanged to the caller.

mod document;
mod errors;

pub use document::DocumentTranslator;
pub use errors::TranslationError;

use crate::predicate::Predicate;
use crate::query::{Criteria, ProjectionSpec, SelectStatement};
use crate::schema::EntityPath;

/// Turns a predicate into storage-native filter criteria
pub trait PredicateTranslator {
    /// Lowers `predicate` into criteria scoped to `path`
    fn criteria(&self, path: &EntityPath, predicate: &Predicate)
        -> Result<Criteria, TranslationError>;
}

/// Turns a projection plus filter criteria into a storage-native
/// select-and-transform statement
pub trait ProjectionTranslator {
    /// Produces the selection for `projection` over `criteria`.
    ///
    /// Validates the projection's runtime descriptor (arity against
    /// bound field count) before building the statement.
    fn select(
        &self,
        path: &EntityPath,
        criteria: Criteria,
        projection: &ProjectionSpec,
    ) -> Result<SelectStatement, TranslationError>;
}

/// Maps a logical entity name to its queryable path.
///
/// Consulted once per repository instance at construction, never per
/// call.
pub trait EntityPathResolver {
    fn resolve(&self, entity: &'static str) -> Result<EntityPath, TranslationError>;
}

/// Resolver that uses the logical entity name as the path unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectPathResolver;

impl EntityPathResolver for DirectPathResolver {
    fn resolve(&self, entity: &'static str) -> Result<EntityPath, TranslationError> {
        if entity.is_empty() {
            return Err(TranslationError::UnknownEntity(entity.to_string()));
        }
        Ok(EntityPath::new(entity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_resolver_passes_name_through() {
        let path = DirectPathResolver.resolve("cases").unwrap();
        assert_eq!(path.as_str(), "cases");
    }

    #[test]
    fn test_direct_resolver_rejects_unnamed_entity() {
        let err = DirectPathResolver.resolve("").unwrap_err();
        assert_eq!(err, TranslationError::UnknownEntity(String::new()));
    }
}
