//! prismdb - a predicate, projection, and pagination query layer for
//! document stores.
//!
//! The layer composes caller predicates (and optional projections) into
//! lazy, session-bound queries, executes them with the caller's expected
//! cardinality, and pages them with an accurate total count. The count
//! side of a paginated lookup is derived from the same predicate as the
//! fetch side and never materializes row data; a short first page skips
//! the count entirely.
//!
//! Storage engines, transactions, and predicate construction from user
//! input stay behind the narrow seams in `session` and `translate`. An
//! in-memory reference session ships for tests and embedded use.
//!
//! # Usage
//!
//! ```ignore
//! use prismdb::{
//!     DirectPathResolver, DocumentTranslator, EntityRepository, PageRequest,
//!     Predicate, PredicateSearch,
//! };
//!
//! let repository: EntityRepository<'_, Case> =
//!     EntityRepository::open(&session, &translator, &translator, &DirectPathResolver)?;
//! let page = repository.find_page(
//!     &Predicate::eq("status", "open".into()),
//!     &PageRequest::first(20),
//! )?;
//! ```

pub mod executor;
pub mod observability;
pub mod page;
pub mod predicate;
pub mod query;
pub mod repository;
pub mod schema;
pub mod session;
pub mod translate;

pub use executor::{PageQuerySource, Paginator, ResultExecutor};
pub use page::{Page, PageLimits, PageRequest};
pub use predicate::{CompareOp, Predicate};
pub use query::{
    ColumnSet, CountQuery, CountStatement, Criteria, ExecutableQuery, Projection, ProjectionSpec,
    QueryComposer, QueryError, QueryErrorKind, QueryResult, SelectStatement, SortDirection,
    SortKey,
};
pub use repository::{EntityRepository, PredicateSearch, ProjectedSearch};
pub use schema::{Entity, EntityPath};
pub use session::{MemorySession, Row, Session, SessionError};
pub use translate::{
    DirectPathResolver, DocumentTranslator, EntityPathResolver, PredicateTranslator,
    ProjectionTranslator, TranslationError,
};
