//! Full item record
//!
//! Mirrors one entry of the `list` object. The service sends most values as
//! strings (timestamps in unix seconds, `"0"`/`"1"` flags, word counts); they
//! are kept as sent and exposed through typed accessors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// One saved item with every field the service reports
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    /// Unique item id
    #[serde(deserialize_with = "null_as_default")]
    pub item_id: String,
    /// Id of the resolved article
    #[serde(deserialize_with = "null_as_default")]
    pub resolved_id: String,
    /// `"1"` when favorited
    #[serde(deserialize_with = "null_as_default")]
    pub favorite: String,
    /// `"0"` unread, `"1"` archived, `"2"` deleted
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub time_added: String,
    #[serde(deserialize_with = "null_as_default")]
    pub time_updated: String,
    #[serde(deserialize_with = "null_as_default")]
    pub time_read: String,
    #[serde(deserialize_with = "null_as_default")]
    pub time_favorited: String,
    /// Position in the user's list
    #[serde(deserialize_with = "null_as_default")]
    pub sort_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: HashMap<String, String>,
    #[serde(deserialize_with = "null_as_default")]
    pub top_image_url: String,
    /// URL as saved by the user
    #[serde(deserialize_with = "null_as_default")]
    pub given_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub given_title: String,
    /// URL after redirects; may be empty
    #[serde(deserialize_with = "null_as_default")]
    pub resolved_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub resolved_title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub excerpt: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_article: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_index: String,
    #[serde(deserialize_with = "null_as_default")]
    pub has_video: String,
    #[serde(deserialize_with = "null_as_default")]
    pub has_image: String,
    #[serde(deserialize_with = "null_as_default")]
    pub word_count: String,
    #[serde(deserialize_with = "null_as_default")]
    pub lang: String,
    /// Estimated reading time in minutes
    #[serde(deserialize_with = "null_as_default")]
    pub time_to_read: i64,
    /// Estimated listening time in seconds
    #[serde(deserialize_with = "null_as_default")]
    pub listen_duration_estimate: i64,
}

impl Item {
    /// Best link for the item: resolved URL if present, else the given URL
    pub fn link(&self) -> Option<&str> {
        resolve_link(&self.resolved_url, &self.given_url)
    }

    /// Best title: resolved title if present, else the given title
    pub fn title(&self) -> &str {
        if self.resolved_title.is_empty() {
            &self.given_title
        } else {
            &self.resolved_title
        }
    }

    pub fn is_favorite(&self) -> bool {
        flag(&self.favorite)
    }

    pub fn is_archived(&self) -> bool {
        self.status == "1"
    }

    pub fn is_deleted(&self) -> bool {
        self.status == "2"
    }

    pub fn is_article(&self) -> bool {
        flag(&self.is_article)
    }

    pub fn is_index(&self) -> bool {
        flag(&self.is_index)
    }

    pub fn has_video(&self) -> bool {
        flag(&self.has_video)
    }

    pub fn has_image(&self) -> bool {
        flag(&self.has_image)
    }

    /// Word count, if the service reported a number
    pub fn word_count_value(&self) -> Option<u64> {
        self.word_count.parse().ok()
    }

    pub fn added_at(&self) -> Option<DateTime<Utc>> {
        timestamp(&self.time_added)
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        timestamp(&self.time_updated)
    }

    pub fn read_at(&self) -> Option<DateTime<Utc>> {
        timestamp(&self.time_read)
    }

    pub fn favorited_at(&self) -> Option<DateTime<Utc>> {
        timestamp(&self.time_favorited)
    }
}

/// Pick the resolved URL over the given one; `None` when both are empty
pub(crate) fn resolve_link<'a>(resolved_url: &'a str, given_url: &'a str) -> Option<&'a str> {
    if !resolved_url.is_empty() {
        Some(resolved_url)
    } else if !given_url.is_empty() {
        Some(given_url)
    } else {
        None
    }
}

/// Treat an explicit `null` like a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn flag(value: &str) -> bool {
    !value.is_empty() && value != "0"
}

// "0" means never
fn timestamp(value: &str) -> Option<DateTime<Utc>> {
    match value.parse::<i64>() {
        Ok(secs) if secs > 0 => DateTime::from_timestamp(secs, 0),
        _ => None,
    }
}
