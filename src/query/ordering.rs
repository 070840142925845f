//! Result ordering keys.

use serde::{Deserialize, Serialize};

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// A single ordering key: field plus direction.
///
/// Ordering applies to row-fetching statements only; count statements
/// carry no ordering at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    /// Field to order by
    pub field: String,
    /// Direction
    pub direction: SortDirection,
}

impl SortKey {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_builders() {
        let key = SortKey::asc("created_at");
        assert_eq!(key.field, "created_at");
        assert_eq!(key.direction, SortDirection::Asc);

        let key = SortKey::desc("name");
        assert_eq!(key.direction, SortDirection::Desc);
        assert_eq!(key.direction.as_str(), "desc");
    }
}
