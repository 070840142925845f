//! Query composition subsystem.
//!
//! A caller predicate (and optionally a projection) is lowered into a
//! storage-native statement and wrapped as a lazy executable query bound
//! to the caller's session. Execution and pagination live in `executor`;
//! this module only builds.

mod composer;
mod criteria;
mod errors;
mod ordering;
mod projection;
mod statement;

pub use composer::{CountQuery, ExecutableQuery, QueryComposer};
pub use criteria::Criteria;
pub use errors::{QueryError, QueryErrorKind, QueryResult};
pub use ordering::{SortDirection, SortKey};
pub use projection::{Projection, ProjectionSpec};
pub use statement::{ColumnSet, CountStatement, SelectStatement};
