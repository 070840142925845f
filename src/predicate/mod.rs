//! Composable filter predicates over entity fields.
//!
//! A predicate is an immutable boolean expression tree: comparison leaves
//! combined with `and` / `or` / `not`. Callers build a predicate once and
//! pass it by reference into query composition; nothing in this module
//! executes anything.
//!
//! A predicate with no comparison leaf at all is *empty*. Composition
//! rejects empty predicates instead of letting them match every row.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Comparison operators usable in predicate leaves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompareOp {
    /// field = value
    Eq,
    /// field != value
    Ne,
    /// field > value
    Gt,
    /// field >= value
    Gte,
    /// field < value
    Lt,
    /// field <= value
    Lte,
}

impl CompareOp {
    /// Returns the operator name for diagnostics
    pub fn as_str(&self) -> &'static str {
        match self {
            CompareOp::Eq => "eq",
            CompareOp::Ne => "ne",
            CompareOp::Gt => "gt",
            CompareOp::Gte => "gte",
            CompareOp::Lt => "lt",
            CompareOp::Lte => "lte",
        }
    }
}

/// An immutable boolean filter expression over entity fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Predicate {
    /// A single field comparison
    Compare {
        /// Field name
        field: String,
        /// Comparison operator
        op: CompareOp,
        /// Value the field is compared against
        value: Value,
    },
    /// Every branch must match; empty means no condition at all
    And(Vec<Predicate>),
    /// At least one branch must match; empty means no condition at all
    Or(Vec<Predicate>),
    /// The inner predicate must not match
    Not(Box<Predicate>),
}

impl Predicate {
    /// Builds a comparison leaf
    pub fn compare(field: impl Into<String>, op: CompareOp, value: Value) -> Self {
        Predicate::Compare {
            field: field.into(),
            op,
            value,
        }
    }

    /// field = value
    pub fn eq(field: impl Into<String>, value: Value) -> Self {
        Self::compare(field, CompareOp::Eq, value)
    }

    /// field != value
    pub fn ne(field: impl Into<String>, value: Value) -> Self {
        Self::compare(field, CompareOp::Ne, value)
    }

    /// field > value
    pub fn gt(field: impl Into<String>, value: Value) -> Self {
        Self::compare(field, CompareOp::Gt, value)
    }

    /// field >= value
    pub fn gte(field: impl Into<String>, value: Value) -> Self {
        Self::compare(field, CompareOp::Gte, value)
    }

    /// field < value
    pub fn lt(field: impl Into<String>, value: Value) -> Self {
        Self::compare(field, CompareOp::Lt, value)
    }

    /// field <= value
    pub fn lte(field: impl Into<String>, value: Value) -> Self {
        Self::compare(field, CompareOp::Lte, value)
    }

    /// Combines two predicates with AND, flattening nested conjunctions
    pub fn and(self, other: Predicate) -> Predicate {
        match self {
            Predicate::And(mut branches) => {
                branches.push(other);
                Predicate::And(branches)
            }
            first => Predicate::And(vec![first, other]),
        }
    }

    /// Combines two predicates with OR, flattening nested disjunctions
    pub fn or(self, other: Predicate) -> Predicate {
        match self {
            Predicate::Or(mut branches) => {
                branches.push(other);
                Predicate::Or(branches)
            }
            first => Predicate::Or(vec![first, other]),
        }
    }

    /// Negates this predicate
    pub fn negate(self) -> Predicate {
        Predicate::Not(Box::new(self))
    }

    /// Folds optional branches into a conjunction, dropping absent ones.
    ///
    /// When every branch is absent the result is the empty predicate,
    /// which composition rejects.
    pub fn all_of(branches: impl IntoIterator<Item = Option<Predicate>>) -> Predicate {
        Predicate::And(branches.into_iter().flatten().collect())
    }

    /// Folds optional branches into a disjunction, dropping absent ones.
    pub fn any_of(branches: impl IntoIterator<Item = Option<Predicate>>) -> Predicate {
        Predicate::Or(branches.into_iter().flatten().collect())
    }

    /// Returns true if the tree contains no comparison leaf
    pub fn is_empty(&self) -> bool {
        match self {
            Predicate::Compare { .. } => false,
            Predicate::And(branches) | Predicate::Or(branches) => {
                branches.iter().all(Predicate::is_empty)
            }
            Predicate::Not(inner) => inner.is_empty(),
        }
    }
}
