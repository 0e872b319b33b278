//! Projection trait

use crate::error::Result;
use crate::types::JsonValue;

/// Maps a raw item record into an output value
pub trait Projection: Send + Sync {
    /// Projected item type
    type Output: Send;

    /// Project one record; `item_id` is the key it was listed under
    fn project(&self, item_id: &str, raw: &JsonValue) -> Result<Option<Self::Output>>;
}

impl<F, T> Projection for F
where
    F: Fn(&str, &JsonValue) -> Result<Option<T>> + Send + Sync,
    T: Send,
{
    type Output = T;

    fn project(&self, item_id: &str, raw: &JsonValue) -> Result<Option<T>> {
        self(item_id, raw)
    }
}
