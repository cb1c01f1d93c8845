//! Common types used throughout the SDK
//!
//! This module contains the list metadata shared by every paginated
//! resource, plus a few type aliases.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// Generic key-value map with string keys and values
pub type StringMap = HashMap<String, String>;

// ============================================================================
// List Metadata
// ============================================================================

/// Pagination metadata returned with every list response
///
/// Counts are taken as reported by the server. `returned_count <= total_count`
/// is expected but never verified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResultInfo {
    /// Total number of items in the collection
    pub total_count: u32,
    /// Offset of the first item in this page
    pub offset: u32,
    /// Number of items in this page
    pub returned_count: u32,
}

impl ResultInfo {
    /// Create result info from raw counts
    pub fn new(offset: u32, returned_count: u32, total_count: u32) -> Self {
        Self {
            total_count,
            offset,
            returned_count,
        }
    }

    /// Offset of the page following this one
    pub fn next_offset(&self) -> u32 {
        self.offset.saturating_add(self.returned_count)
    }

    /// Whether the server has nothing left past this page
    pub fn is_last_page(&self) -> bool {
        self.next_offset() >= self.total_count
    }
}

/// Echo of the query parameters the server applied to a list request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryInfo {
    /// Filter expression
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    /// Sort key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Reverse sort order
    pub reverse: bool,
    /// Page size limit
    pub limit: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_result_info_deserialize() {
        let info: ResultInfo = serde_json::from_value(json!({
            "totalCount": 5,
            "offset": 2,
            "returnedCount": 2
        }))
        .unwrap();
        assert_eq!(info, ResultInfo::new(2, 2, 5));
    }

    #[test]
    fn test_result_info_missing_fields_default_to_zero() {
        let info: ResultInfo = serde_json::from_value(json!({})).unwrap();
        assert_eq!(info, ResultInfo::default());
        assert!(info.is_last_page());
    }

    #[test]
    fn test_result_info_progress() {
        let first = ResultInfo::new(0, 2, 5);
        assert_eq!(first.next_offset(), 2);
        assert!(!first.is_last_page());

        let last = ResultInfo::new(4, 1, 5);
        assert_eq!(last.next_offset(), 5);
        assert!(last.is_last_page());

        // Servers that overshoot the total still terminate
        assert!(ResultInfo::new(4, 3, 5).is_last_page());
    }

    #[test]
    fn test_query_info_deserialize() {
        let info: QueryInfo = serde_json::from_value(json!({
            "q": "name:foo",
            "sort": "NAME",
            "reverse": true,
            "limit": 100
        }))
        .unwrap();
        assert_eq!(info.q.as_deref(), Some("name:foo"));
        assert_eq!(info.sort.as_deref(), Some("NAME"));
        assert!(info.reverse);
        assert_eq!(info.limit, 100);
    }
}
