//! Offset pagination parameters for bounded page fetches.

use serde::{Deserialize, Serialize};

/// Pagination parameters for record queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Maximum number of records to return.
    pub limit: u32,
    /// Offset into the store's natural order (0-based).
    pub offset: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: 50,
            offset: 0,
        }
    }
}

impl Pagination {
    pub fn new(limit: Option<u32>, offset: Option<u32>) -> Self {
        Self {
            // Hard cap so a single query can never drag the whole table.
            limit: limit.unwrap_or(50).min(1000),
            offset: offset.unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_caps_oversized_limits() {
        let page = Pagination::new(Some(5000), Some(20));
        assert_eq!(page.limit, 1000);
        assert_eq!(page.offset, 20);
    }

    #[test]
    fn new_falls_back_to_defaults() {
        let page = Pagination::new(None, None);
        assert_eq!(page.limit, 50);
        assert_eq!(page.offset, 0);
    }
}
