//! Retrieve request template

use crate::config::{Credentials, RequestPolicy};
use crate::http::HttpRequest;
use crate::types::{JsonObject, JsonValue, Since};
use reqwest::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use serde::Serialize;
use std::fmt;

/// Wire shape of the fixed part of the body
#[derive(Serialize)]
struct RetrieveBody<'a> {
    consumer_key: &'a str,
    access_token: &'a str,
    state: &'a str,
    #[serde(rename = "detailType")]
    detail_type: &'a str,
    count: u32,
    offset: u32,
    total: u8,
}

/// Precomputed retrieve body.
///
/// Built once from credentials and policy; each page only overlays `since`
/// and `offset`.
#[derive(Clone)]
pub struct RequestTemplate {
    base: JsonObject,
}

impl RequestTemplate {
    /// Build the template
    pub fn new(credentials: &Credentials, policy: &RequestPolicy) -> Self {
        let body = RetrieveBody {
            consumer_key: &credentials.consumer_key,
            access_token: &credentials.access_token,
            state: &policy.state,
            detail_type: &policy.detail_type,
            count: policy.count,
            offset: policy.initial_offset,
            total: policy.total,
        };

        // Plain struct of strings and integers always serializes to an object
        let base = match serde_json::to_value(body) {
            Ok(JsonValue::Object(map)) => map,
            _ => JsonObject::new(),
        };

        Self { base }
    }

    /// Body for one page as a JSON object
    pub fn body_value(&self, since: Since, offset: u32) -> JsonObject {
        let mut body = self.base.clone();
        body.insert("since".to_string(), JsonValue::from(since));
        body.insert("offset".to_string(), JsonValue::from(offset));
        body
    }

    /// Serialized body for one page
    pub fn body(&self, since: Since, offset: u32) -> String {
        JsonValue::Object(self.body_value(since, offset)).to_string()
    }

    /// Full POST request for one page
    pub fn build(&self, endpoint: &str, since: Since, offset: u32) -> HttpRequest {
        HttpRequest::post_json(endpoint, self.body(since, offset))
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .header(
                HeaderName::from_static("x-accept"),
                HeaderValue::from_static("application/json"),
            )
    }
}

impl fmt::Debug for RequestTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut shown = self.base.clone();
        if shown.contains_key("access_token") {
            shown.insert("access_token".to_string(), JsonValue::from("<redacted>"));
        }
        f.debug_struct("RequestTemplate")
            .field("base", &shown)
            .finish()
    }
}
