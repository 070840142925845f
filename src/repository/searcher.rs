//! Native predicate-only search over full entity rows.

use std::marker::PhantomData;

use crate::executor::ResultExecutor;
use crate::predicate::Predicate;
use crate::query::{CountQuery, ExecutableQuery, QueryComposer, QueryResult, SortKey};
use crate::schema::Entity;

/// Executes the predicate-only operations the facade forwards unchanged.
///
/// Also exposes the raw fetch/count composition a paginated lookup
/// starts from, so the paginator never needs privileged access to the
/// composer.
pub(super) struct PredicateSearcher<'s, E: Entity> {
    composer: QueryComposer<'s>,
    _entity: PhantomData<E>,
}

impl<'s, E: Entity> PredicateSearcher<'s, E> {
    pub(super) fn new(composer: QueryComposer<'s>) -> Self {
        Self {
            composer,
            _entity: PhantomData,
        }
    }

    pub(super) fn find_one(&self, predicate: &Predicate) -> QueryResult<Option<E>> {
        ResultExecutor::fetch_optional(self.create_query(predicate)?)
    }

    pub(super) fn find_all(&self, predicate: &Predicate) -> QueryResult<Vec<E>> {
        ResultExecutor::fetch_all(self.create_query(predicate)?)
    }

    pub(super) fn find_all_ordered(
        &self,
        predicate: &Predicate,
        order: &[SortKey],
    ) -> QueryResult<Vec<E>> {
        ResultExecutor::fetch_all(self.create_query(predicate)?.ordered(order))
    }

    pub(super) fn count(&self, predicate: &Predicate) -> QueryResult<u64> {
        self.create_count_query(predicate)?.execute()
    }

    pub(super) fn exists(&self, predicate: &Predicate) -> QueryResult<bool> {
        self.create_count_query(predicate)?.exists()
    }

    /// Builds the fetch query a paginated lookup starts from
    pub(super) fn create_query(&self, predicate: &Predicate) -> QueryResult<ExecutableQuery<'s, E>> {
        self.composer.compose::<E>(predicate)
    }

    /// Builds the matching count-only query
    pub(super) fn create_count_query(&self, predicate: &Predicate) -> QueryResult<CountQuery<'s>> {
        self.composer.compose_count(predicate)
    }
}
