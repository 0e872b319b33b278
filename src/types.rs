//! Common types used throughout pocket-sync
//!
//! Shared type aliases and small value types used across modules.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// Sync cursor reported by the service as `since`.
///
/// Opaque and non-decreasing; `0` asks for every item.
pub type Since = i64;

// ============================================================================
// Retrieval Result
// ============================================================================

/// Outcome of one successful retrieval
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Retrieval<T> {
    /// Projected items, pages in arrival order, item ids ascending within a page
    pub items: Vec<T>,
    /// Cursor to pass to the next retrieval
    pub since: Since,
    /// Number of page requests that succeeded
    pub pages: u32,
}

impl<T> Retrieval<T> {
    /// Number of retrieved items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if nothing was retrieved
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Split into items and the next cursor
    pub fn into_parts(self) -> (Vec<T>, Since) {
        (self.items, self.since)
    }
}

impl<T> IntoIterator for Retrieval<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
