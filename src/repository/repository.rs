//! The entity repository: one facade over composition, execution, and
//! pagination for a single entity type.

use std::fmt;
use std::marker::PhantomData;

use crate::executor::{PageQuerySource, Paginator, ResultExecutor};
use crate::observability::{log_event, Event, QueryTrace};
use crate::page::{Page, PageLimits, PageRequest};
use crate::predicate::Predicate;
use crate::query::{
    CountQuery, ExecutableQuery, Projection, QueryComposer, QueryResult, SortKey,
};
use crate::schema::Entity;
use crate::session::Session;
use crate::translate::{EntityPathResolver, PredicateTranslator, ProjectionTranslator};

use super::contract::{PredicateSearch, ProjectedSearch};
use super::searcher::PredicateSearcher;

/// Repository over one entity type, bound to a caller-owned session.
///
/// Every operation is a single-shot request/response: the call composes a
/// fresh query (or two, for pagination), executes it, and returns. The
/// repository owns no state beyond the resolved path and the page-size
/// limits; nothing is cached and nothing is retried.
pub struct EntityRepository<'s, E: Entity> {
    composer: QueryComposer<'s>,
    searcher: PredicateSearcher<'s, E>,
    paginator: Paginator,
    _entity: PhantomData<E>,
}

impl<'s, E: Entity> EntityRepository<'s, E> {
    /// Opens a repository: resolves the entity path once and binds the
    /// composer to the session and translators.
    pub fn open(
        session: &'s dyn Session,
        predicates: &'s dyn PredicateTranslator,
        projections: &'s dyn ProjectionTranslator,
        resolver: &dyn EntityPathResolver,
    ) -> QueryResult<Self> {
        let path = resolver.resolve(E::NAME)?;
        log_event(
            Event::RepositoryOpened,
            &[("entity", E::NAME), ("path", path.as_str())],
        );
        let composer = QueryComposer::new(session, predicates, projections, path);
        Ok(Self {
            searcher: PredicateSearcher::new(composer.clone()),
            composer,
            paginator: Paginator::default(),
            _entity: PhantomData,
        })
    }

    /// Replaces the page-size limits
    pub fn with_limits(mut self, limits: PageLimits) -> Self {
        self.paginator = Paginator::new(limits);
        self
    }

    /// The composer, for building queries to pass to `fetch_one`,
    /// `fetch_all`, or `fetch_page`
    pub fn composer(&self) -> &QueryComposer<'s> {
        &self.composer
    }

    fn observed<T>(
        &self,
        operation: &'static str,
        rows: impl FnOnce(&T) -> u64,
        run: impl FnOnce() -> QueryResult<T>,
    ) -> QueryResult<T> {
        let trace = QueryTrace::begin(operation, E::NAME);
        match run() {
            Ok(value) => {
                trace.finished(rows(&value));
                Ok(value)
            }
            Err(error) => {
                trace.failed(&error);
                Err(error)
            }
        }
    }
}

impl<'s, E: Entity> PredicateSearch<E> for EntityRepository<'s, E> {
    fn find_one(&self, predicate: &Predicate) -> QueryResult<Option<E>> {
        self.observed(
            "find_one",
            |found: &Option<E>| u64::from(found.is_some()),
            || self.searcher.find_one(predicate),
        )
    }

    fn find_all(&self, predicate: &Predicate) -> QueryResult<Vec<E>> {
        self.observed(
            "find_all",
            |rows: &Vec<E>| rows.len() as u64,
            || self.searcher.find_all(predicate),
        )
    }

    fn find_all_ordered(&self, predicate: &Predicate, order: &[SortKey]) -> QueryResult<Vec<E>> {
        self.observed(
            "find_all_ordered",
            |rows: &Vec<E>| rows.len() as u64,
            || self.searcher.find_all_ordered(predicate, order),
        )
    }

    fn find_page(&self, predicate: &Predicate, request: &PageRequest) -> QueryResult<Page<E>> {
        self.observed(
            "find_page",
            |page: &Page<E>| page.len() as u64,
            || self.paginator.paginate_from(self, predicate, request),
        )
    }

    fn count(&self, predicate: &Predicate) -> QueryResult<u64> {
        self.observed("count", |total| *total, || self.searcher.count(predicate))
    }

    fn exists(&self, predicate: &Predicate) -> QueryResult<bool> {
        self.observed(
            "exists",
            |found| u64::from(*found),
            || self.searcher.exists(predicate),
        )
    }
}

impl<'s, E: Entity> ProjectedSearch<E> for EntityRepository<'s, E> {
    fn fetch_one<P>(&self, query: ExecutableQuery<'_, P>) -> QueryResult<Option<P>> {
        self.observed(
            "fetch_one",
            |found: &Option<P>| u64::from(found.is_some()),
            || ResultExecutor::fetch_optional(query),
        )
    }

    fn fetch_all<P>(&self, query: ExecutableQuery<'_, P>) -> QueryResult<Vec<P>> {
        self.observed(
            "fetch_all",
            |rows: &Vec<P>| rows.len() as u64,
            || ResultExecutor::fetch_all(query),
        )
    }

    fn fetch_page<P>(
        &self,
        query: ExecutableQuery<'_, P>,
        request: &PageRequest,
    ) -> QueryResult<Page<P>> {
        self.observed(
            "fetch_page",
            |page: &Page<P>| page.len() as u64,
            || {
                // A caller-composed query counts through its own criteria.
                let count = query.to_count_query();
                self.paginator.paginate(query, count, request)
            },
        )
    }

    fn project_one<P: 'static>(
        &self,
        projection: &Projection<P>,
        predicate: &Predicate,
    ) -> QueryResult<Option<P>> {
        self.observed(
            "project_one",
            |found: &Option<P>| u64::from(found.is_some()),
            || {
                let query = self.composer.compose_projected(projection, predicate)?;
                ResultExecutor::fetch_optional(query)
            },
        )
    }

    fn project_all<P: 'static>(
        &self,
        projection: &Projection<P>,
        predicate: &Predicate,
    ) -> QueryResult<Vec<P>> {
        self.observed(
            "project_all",
            |rows: &Vec<P>| rows.len() as u64,
            || {
                let query = self.composer.compose_projected(projection, predicate)?;
                ResultExecutor::fetch_all(query)
            },
        )
    }

    fn project_page<P: 'static>(
        &self,
        projection: &Projection<P>,
        predicate: &Predicate,
        request: &PageRequest,
    ) -> QueryResult<Page<P>> {
        self.observed(
            "project_page",
            |page: &Page<P>| page.len() as u64,
            || {
                let fetch = self.composer.compose_projected(projection, predicate)?;
                // The count side depends on the predicate alone; the shape
                // of the projected output has no bearing on the total.
                let count = self.composer.compose_count(predicate)?;
                self.paginator.paginate(fetch, count, request)
            },
        )
    }
}

impl<'s, E: Entity> PageQuerySource<E> for EntityRepository<'s, E> {
    fn build_fetch_query(&self, predicate: &Predicate) -> QueryResult<ExecutableQuery<'_, E>> {
        self.searcher.create_query(predicate)
    }

    fn build_count_query(&self, predicate: &Predicate) -> QueryResult<CountQuery<'_>> {
        self.searcher.create_count_query(predicate)
    }
}

impl<'s, E: Entity> fmt::Debug for EntityRepository<'s, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityRepository")
            .field("entity", &E::NAME)
            .field("path", self.composer.path())
            .finish_non_exhaustive()
    }
}
