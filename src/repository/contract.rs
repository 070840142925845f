//! Facade contracts.
//!
//! `PredicateSearch` is the store's native predicate-only capability:
//! full-entity results, no projection. `ProjectedSearch` extends it with
//! the operations built on query composition: caller-composed queries,
//! projections, and pagination for both.

use crate::page::{Page, PageRequest};
use crate::predicate::Predicate;
use crate::query::{ExecutableQuery, Projection, QueryResult, SortKey};

/// Predicate-only search and aggregate operations over full entities
pub trait PredicateSearch<E> {
    /// First entity matching the predicate, if any
    fn find_one(&self, predicate: &Predicate) -> QueryResult<Option<E>>;

    /// Every entity matching the predicate, in natural order
    fn find_all(&self, predicate: &Predicate) -> QueryResult<Vec<E>>;

    /// Every entity matching the predicate, in the given order
    fn find_all_ordered(&self, predicate: &Predicate, order: &[SortKey]) -> QueryResult<Vec<E>>;

    /// One page of entities matching the predicate
    fn find_page(&self, predicate: &Predicate, request: &PageRequest) -> QueryResult<Page<E>>;

    /// Number of rows matching the predicate
    fn count(&self, predicate: &Predicate) -> QueryResult<u64>;

    /// Whether any row matches the predicate
    fn exists(&self, predicate: &Predicate) -> QueryResult<bool>;
}

/// Projection and pagination operations layered over predicate search
pub trait ProjectedSearch<E>: PredicateSearch<E> {
    /// First result of a caller-composed query, if any
    fn fetch_one<P>(&self, query: ExecutableQuery<'_, P>) -> QueryResult<Option<P>>;

    /// Every result of a caller-composed query
    fn fetch_all<P>(&self, query: ExecutableQuery<'_, P>) -> QueryResult<Vec<P>>;

    /// One page of a caller-composed query. The total is counted over the
    /// query's own criteria.
    fn fetch_page<P>(
        &self,
        query: ExecutableQuery<'_, P>,
        request: &PageRequest,
    ) -> QueryResult<Page<P>>;

    /// First projected result matching the predicate, if any
    fn project_one<P: 'static>(
        &self,
        projection: &Projection<P>,
        predicate: &Predicate,
    ) -> QueryResult<Option<P>>;

    /// Every projected result matching the predicate
    fn project_all<P: 'static>(
        &self,
        projection: &Projection<P>,
        predicate: &Predicate,
    ) -> QueryResult<Vec<P>>;

    /// One page of projected results. The total is counted over the
    /// predicate alone, never the projection.
    fn project_page<P: 'static>(
        &self,
        projection: &Projection<P>,
        predicate: &Predicate,
        request: &PageRequest,
    ) -> QueryResult<Page<P>>;
}
