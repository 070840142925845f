//! Storage-native statements produced by query composition.
//!
//! A select statement carries everything a session needs to return rows:
//! criteria, the columns to materialize, ordering, and an optional range.
//! A count statement carries criteria only: it has no columns and no
//! ordering by construction, so a count can never materialize row data.

use crate::schema::EntityPath;

use super::criteria::Criteria;
use super::ordering::SortKey;

/// Columns a selection materializes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSet {
    /// The full entity row
    All,
    /// Only the named fields, in order
    Fields(Vec<String>),
}

/// A row-fetching statement
#[derive(Debug, Clone, PartialEq)]
pub struct SelectStatement {
    /// Entity path the selection runs against
    pub path: EntityPath,
    /// Filter criteria
    pub criteria: Criteria,
    /// Columns to materialize
    pub columns: ColumnSet,
    /// Ordering keys, applied in sequence
    pub order: Vec<SortKey>,
    /// Rows to skip before the first returned row
    pub offset: Option<u64>,
    /// Maximum number of rows to return
    pub limit: Option<u64>,
}

impl SelectStatement {
    /// Creates an unbounded full-row selection
    pub fn new(path: EntityPath, criteria: Criteria) -> Self {
        Self {
            path,
            criteria,
            columns: ColumnSet::All,
            order: Vec::new(),
            offset: None,
            limit: None,
        }
    }

    /// Sets the columns to materialize
    pub fn with_columns(mut self, columns: ColumnSet) -> Self {
        self.columns = columns;
        self
    }

    /// Sets the ordering keys
    pub fn with_order(mut self, order: Vec<SortKey>) -> Self {
        self.order = order;
        self
    }

    /// Sets the row limit
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Derives the count-only form of this selection
    pub fn to_count(&self) -> CountStatement {
        CountStatement {
            path: self.path.clone(),
            criteria: self.criteria.clone(),
        }
    }
}

/// A count-only statement over the same criteria as a selection
#[derive(Debug, Clone, PartialEq)]
pub struct CountStatement {
    /// Entity path the count runs against
    pub path: EntityPath,
    /// Filter criteria
    pub criteria: Criteria,
}
