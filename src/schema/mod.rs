//! Entity metadata: logical names and queryable paths.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A queryable entity type.
///
/// Entities are owned value types that decode from raw store rows. The
/// logical name is what the path resolver maps to a queryable path, once
/// per repository instance.
pub trait Entity: DeserializeOwned + 'static {
    /// Logical entity name
    const NAME: &'static str;
}

/// The queryable address of an entity within the store: a collection
/// name, a table, or whatever the backend uses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityPath(String);

impl EntityPath {
    /// Creates a path from its backend representation
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Returns the backend representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
