//! The capability facade: predicate search plus projection and
//! pagination.

mod contract;
mod repository;
mod searcher;

pub use contract::{PredicateSearch, ProjectedSearch};
pub use repository::EntityRepository;
