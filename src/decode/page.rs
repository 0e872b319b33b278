//! Retrieve response envelope

use crate::error::{Error, Result};
use crate::types::{JsonValue, Since};
use tracing::warn;

/// `status` value meaning the service has nothing more to return
pub const COMPLETION_STATUS: i64 = 2;

/// What a page carries besides the cursor
#[derive(Debug, Clone, PartialEq)]
pub enum PageOutcome {
    /// Completion signal; any listed items are ignored
    Complete,
    /// Raw item records keyed by item id, ascending
    Entries(Vec<(String, JsonValue)>),
}

impl PageOutcome {
    /// Number of raw entries, zero for a completion signal
    pub fn len(&self) -> usize {
        match self {
            Self::Complete => 0,
            Self::Entries(entries) => entries.len(),
        }
    }

    /// Check if the page ends pagination
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One decoded response page
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Cursor reported by this page, if any
    pub since: Option<Since>,
    /// Completion signal or the page's entries
    pub outcome: PageOutcome,
}

impl Page {
    /// Decode a 200 response body.
    ///
    /// A non-empty `error` field fails with [`Error::SomethingWentWrong`]
    /// before anything else is read.
    pub fn parse(body: &str) -> Result<Self> {
        let value: JsonValue = serde_json::from_str(body)?;
        let JsonValue::Object(mut envelope) = value else {
            return Err(Error::invalid_response("expected a JSON object"));
        };

        if has_service_error(envelope.get("error")) {
            return Err(Error::SomethingWentWrong);
        }

        let since = envelope.get("since").and_then(lenient_int);

        if envelope.get("status").and_then(lenient_int) == Some(COMPLETION_STATUS) {
            return Ok(Self {
                since,
                outcome: PageOutcome::Complete,
            });
        }

        let entries = match envelope.remove("list") {
            Some(JsonValue::Object(list)) => {
                let mut entries: Vec<(String, JsonValue)> = list.into_iter().collect();
                // Numeric ids: shorter is smaller, equal lengths compare lexically
                entries.sort_by(|a, b| a.0.len().cmp(&b.0.len()).then_with(|| a.0.cmp(&b.0)));
                entries
            }
            None | Some(JsonValue::Null) => Vec::new(),
            Some(JsonValue::Array(items)) if items.is_empty() => Vec::new(),
            Some(other) => {
                warn!("Ignoring 'list' that is not an object: {}", type_name(&other));
                Vec::new()
            }
        };

        Ok(Self {
            since,
            outcome: PageOutcome::Entries(entries),
        })
    }
}

fn has_service_error(value: Option<&JsonValue>) -> bool {
    match value {
        None | Some(JsonValue::Null) => false,
        Some(JsonValue::String(message)) => !message.is_empty(),
        Some(_) => true,
    }
}

/// Integer from a JSON number or numeric string
fn lenient_int(value: &JsonValue) -> Option<i64> {
    match value {
        JsonValue::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        JsonValue::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
