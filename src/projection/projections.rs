//! Built-in projections

use super::types::Projection;
use crate::decode::types::{null_as_default, resolve_link};
use crate::decode::Item;
use crate::error::{Error, Result};
use crate::types::JsonValue;
use serde::Deserialize;

// ============================================================================
// Full Item
// ============================================================================

/// Keeps every field as a typed [`Item`]
#[derive(Debug, Clone, Copy, Default)]
pub struct FullItem;

impl Projection for FullItem {
    type Output = Item;

    fn project(&self, item_id: &str, raw: &JsonValue) -> Result<Option<Item>> {
        Item::deserialize(raw)
            .map(Some)
            .map_err(|e| Error::decode(item_id, e.to_string()))
    }
}

// ============================================================================
// Link
// ============================================================================

/// The two URL fields, decoded without the rest of the record
#[derive(Deserialize, Default)]
#[serde(default)]
struct LinkFields {
    #[serde(deserialize_with = "null_as_default")]
    resolved_url: String,
    #[serde(deserialize_with = "null_as_default")]
    given_url: String,
}

/// Reduces an item to its best URL.
///
/// Resolved URL when non-empty, else the given URL; items with neither are
/// dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct Link;

impl Projection for Link {
    type Output = String;

    fn project(&self, item_id: &str, raw: &JsonValue) -> Result<Option<String>> {
        let fields =
            LinkFields::deserialize(raw).map_err(|e| Error::decode(item_id, e.to_string()))?;
        Ok(resolve_link(&fields.resolved_url, &fields.given_url).map(str::to_string))
    }
}
