//! Storage-native filter criteria.
//!
//! Criteria are what predicate translation produces: the same boolean
//! structure as a caller predicate, but validated against an entity path
//! and owned by a statement. Sessions evaluate criteria; they never see
//! caller predicates.

use serde_json::Value;

use crate::predicate::CompareOp;

/// Translated filter criteria carried by a statement
#[derive(Debug, Clone, PartialEq)]
pub enum Criteria {
    /// A single field comparison
    Compare {
        /// Resolved field name
        field: String,
        /// Comparison operator
        op: CompareOp,
        /// Value the field is compared against
        value: Value,
    },
    /// Conjunction; an empty list matches every row
    All(Vec<Criteria>),
    /// Disjunction; an empty list matches no row
    Any(Vec<Criteria>),
    /// Negation
    Not(Box<Criteria>),
}
