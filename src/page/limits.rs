//! Page-size limits.

use serde::{Deserialize, Serialize};

use crate::query::{QueryError, QueryResult};

use super::request::PageRequest;

/// Bounds on requested page sizes.
///
/// Requests outside the bounds are rejected before anything executes; an
/// unbounded page is never sent to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLimits {
    /// Size used when a caller does not pick one
    pub default_size: u64,
    /// Largest size a single page may request
    pub max_size: u64,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_size: 20,
            max_size: 1000,
        }
    }
}

impl PageLimits {
    /// The first page at the default size
    pub fn first_page(&self) -> PageRequest {
        PageRequest::first(self.default_size)
    }

    /// Rejects a request whose size is zero or above the maximum
    pub fn validate(&self, request: &PageRequest) -> QueryResult<()> {
        if request.size() == 0 {
            return Err(QueryError::invalid_page("page size must be at least 1"));
        }
        if request.size() > self.max_size {
            return Err(QueryError::invalid_page(format!(
                "page size {} exceeds the maximum {}",
                request.size(),
                self.max_size
            )));
        }
        Ok(())
    }
}
