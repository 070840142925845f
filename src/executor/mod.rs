//! Result execution and pagination over composed queries.

mod executor;
mod paginator;

pub use executor::ResultExecutor;
pub use paginator::{PageQuerySource, Paginator};
