//! Query composition: a predicate (plus an optional projection) becomes a
//! lazy, session-bound executable query.
//!
//! Composition never executes anything. Laziness is what lets the result
//! executor choose a cardinality afterwards and lets the paginator layer a
//! range and an independent count on top. A composed query is built per
//! call, used once, then discarded.

use std::fmt;

use serde_json::Value;

use crate::page::PageRequest;
use crate::predicate::Predicate;
use crate::schema::{Entity, EntityPath};
use crate::session::{Row, Session};
use crate::translate::{PredicateTranslator, ProjectionTranslator};

use super::errors::{QueryError, QueryResult};
use super::ordering::SortKey;
use super::projection::Projection;
use super::statement::{CountStatement, SelectStatement};

type RowMapper<P> = Box<dyn Fn(Row) -> QueryResult<P> + Send + Sync>;

/// Builds executable queries for one entity path.
///
/// The composer borrows the caller's session and translators; it owns no
/// state beyond the resolved path and performs the single local
/// validation this layer does: rejecting an empty predicate before any
/// translation begins.
#[derive(Clone)]
pub struct QueryComposer<'s> {
    session: &'s dyn Session,
    predicates: &'s dyn PredicateTranslator,
    projections: &'s dyn ProjectionTranslator,
    path: EntityPath,
}

impl<'s> QueryComposer<'s> {
    /// Binds a composer to a session, translators, and a resolved path
    pub fn new(
        session: &'s dyn Session,
        predicates: &'s dyn PredicateTranslator,
        projections: &'s dyn ProjectionTranslator,
        path: EntityPath,
    ) -> Self {
        Self {
            session,
            predicates,
            projections,
            path,
        }
    }

    /// The entity path queries compose against
    pub fn path(&self) -> &EntityPath {
        &self.path
    }

    /// Composes a selection-only query; rows decode as full entities
    pub fn compose<E: Entity>(&self, predicate: &Predicate) -> QueryResult<ExecutableQuery<'s, E>> {
        let criteria = self.lowered(predicate)?;
        let statement = SelectStatement::new(self.path.clone(), criteria);
        Ok(ExecutableQuery::new(
            self.session,
            statement,
            Box::new(|row| {
                serde_json::from_value(row).map_err(|source| QueryError::Decode {
                    entity: E::NAME,
                    source,
                })
            }),
        ))
    }

    /// Composes a selection filtered by `predicate` whose rows transform
    /// into shape `P` via `projection`
    pub fn compose_projected<P: 'static>(
        &self,
        projection: &Projection<P>,
        predicate: &Predicate,
    ) -> QueryResult<ExecutableQuery<'s, P>> {
        let criteria = self.lowered(predicate)?;
        let statement = self
            .projections
            .select(&self.path, criteria, projection.spec())?;
        let fields = projection.spec().fields().to_vec();
        let shape = projection.shape();
        Ok(ExecutableQuery::new(
            self.session,
            statement,
            Box::new(move |row| {
                let values: Vec<Value> = fields
                    .iter()
                    .map(|field| row.get(field).cloned().unwrap_or(Value::Null))
                    .collect();
                shape(&values).map_err(QueryError::from)
            }),
        ))
    }

    /// Composes the count form over the same predicate.
    ///
    /// Counts are independent of any projection: how rows would be shaped
    /// has no bearing on how many of them match.
    pub fn compose_count(&self, predicate: &Predicate) -> QueryResult<CountQuery<'s>> {
        let criteria = self.lowered(predicate)?;
        Ok(CountQuery::new(
            self.session,
            CountStatement {
                path: self.path.clone(),
                criteria,
            },
        ))
    }

    fn lowered(&self, predicate: &Predicate) -> QueryResult<super::criteria::Criteria> {
        if predicate.is_empty() {
            return Err(QueryError::MissingPredicate);
        }
        Ok(self.predicates.criteria(&self.path, predicate)?)
    }
}

impl fmt::Debug for QueryComposer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryComposer")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// A lazy, session-bound selection.
///
/// Holds the translated statement and the row mapper for its result
/// shape. Nothing runs until the result executor or the paginator
/// consumes it.
pub struct ExecutableQuery<'s, P> {
    session: &'s dyn Session,
    statement: SelectStatement,
    mapper: RowMapper<P>,
}

impl<'s, P> ExecutableQuery<'s, P> {
    pub(crate) fn new(
        session: &'s dyn Session,
        statement: SelectStatement,
        mapper: RowMapper<P>,
    ) -> Self {
        Self {
            session,
            statement,
            mapper,
        }
    }

    /// The statement this query will execute
    pub fn statement(&self) -> &SelectStatement {
        &self.statement
    }

    /// Replaces the requested ordering
    pub fn ordered(mut self, order: &[SortKey]) -> Self {
        self.statement.order = order.to_vec();
        self
    }

    /// Derives the count query over this selection's own criteria
    pub fn to_count_query(&self) -> CountQuery<'s> {
        CountQuery::new(self.session, self.statement.to_count())
    }

    /// Applies range and ordering from a page request to the fetch side.
    /// Ordering from the request replaces any requested earlier.
    pub(crate) fn bounded(mut self, request: &PageRequest) -> Self {
        self.statement.offset = Some(request.offset());
        self.statement.limit = Some(request.size());
        if !request.order().is_empty() {
            self.statement.order = request.order().to_vec();
        }
        self
    }

    /// Restricts the selection to its first row
    pub(crate) fn first_only(mut self) -> Self {
        self.statement.limit = Some(1);
        self
    }

    pub(crate) fn execute(&self) -> QueryResult<Vec<P>> {
        let rows = self.session.fetch(&self.statement)?;
        rows.into_iter().map(|row| (self.mapper)(row)).collect()
    }
}

impl<P> fmt::Debug for ExecutableQuery<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutableQuery")
            .field("statement", &self.statement)
            .finish_non_exhaustive()
    }
}

/// A count-only query over the same criteria as a selection
pub struct CountQuery<'s> {
    session: &'s dyn Session,
    statement: CountStatement,
}

impl<'s> CountQuery<'s> {
    pub(crate) fn new(session: &'s dyn Session, statement: CountStatement) -> Self {
        Self { session, statement }
    }

    /// The statement this query will execute
    pub fn statement(&self) -> &CountStatement {
        &self.statement
    }

    pub(crate) fn execute(&self) -> QueryResult<u64> {
        Ok(self.session.count(&self.statement)?)
    }

    pub(crate) fn exists(&self) -> QueryResult<bool> {
        Ok(self.session.exists(&self.statement)?)
    }
}

impl fmt::Debug for CountQuery<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountQuery")
            .field("statement", &self.statement)
            .finish_non_exhaustive()
    }
}
