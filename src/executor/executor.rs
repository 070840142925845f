//! Adapts composed-query execution to the caller's cardinality.

use crate::query::{ExecutableQuery, QueryResult};

/// Executes composed queries with the caller's expected cardinality
pub struct ResultExecutor;

impl ResultExecutor {
    /// First match only.
    ///
    /// Absence is a valid outcome, not an error. When several rows match,
    /// the first per the query's ordering wins, unordered if none was
    /// requested. This is a first-of-possibly-many operation, never a
    /// uniqueness assertion, so the store is asked for at most one row.
    pub fn fetch_optional<P>(query: ExecutableQuery<'_, P>) -> QueryResult<Option<P>> {
        let rows = query.first_only().execute()?;
        Ok(rows.into_iter().next())
    }

    /// Every matching row, in query order. May be empty, never absent.
    pub fn fetch_all<P>(query: ExecutableQuery<'_, P>) -> QueryResult<Vec<P>> {
        query.execute()
    }
}
