//! Caller-supplied description of a result slice.

use serde::{Deserialize, Serialize};

use crate::query::SortKey;

/// Which slice of the logical result set is wanted: offset, size, and
/// optional ordering. Immutable once built.
///
/// Ordering carried by a request applies to the row-fetching side of a
/// paginated lookup only, never to the count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    offset: u64,
    size: u64,
    #[serde(default)]
    order: Vec<SortKey>,
}

impl PageRequest {
    /// A slice of `size` rows starting at `offset`
    pub fn new(offset: u64, size: u64) -> Self {
        Self {
            offset,
            size,
            order: Vec::new(),
        }
    }

    /// The first page of the given size
    pub fn first(size: u64) -> Self {
        Self::new(0, size)
    }

    /// Adds an ordering key; keys apply in the order added
    pub fn ordered_by(mut self, key: SortKey) -> Self {
        self.order.push(key);
        self
    }

    /// Rows skipped before the slice begins
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Maximum number of rows in the slice
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Requested ordering
    pub fn order(&self) -> &[SortKey] {
        &self.order
    }

    /// The request for the slice immediately after this one
    pub fn next(&self) -> PageRequest {
        PageRequest {
            offset: self.offset + self.size,
            size: self.size,
            order: self.order.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_starts_at_zero() {
        let request = PageRequest::first(10);
        assert_eq!(request.offset(), 0);
        assert_eq!(request.size(), 10);
        assert!(request.order().is_empty());
    }

    #[test]
    fn test_ordering_keys_accumulate_in_order() {
        let request = PageRequest::first(10)
            .ordered_by(SortKey::asc("name"))
            .ordered_by(SortKey::desc("age"));
        assert_eq!(request.order().len(), 2);
        assert_eq!(request.order()[0].field, "name");
        assert_eq!(request.order()[1].field, "age");
    }

    #[test]
    fn test_next_advances_by_one_slice() {
        let request = PageRequest::new(4, 2).ordered_by(SortKey::asc("id"));
        let next = request.next();
        assert_eq!(next.offset(), 6);
        assert_eq!(next.size(), 2);
        assert_eq!(next.order(), request.order());
    }
}
