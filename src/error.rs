//! Error types for pocket-sync
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for pocket-sync
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport failed: {message}")]
    Transport { message: String },

    // ============================================================================
    // Protocol / Service Errors
    // ============================================================================
    #[error("got response {status}; X-Error=[{x_error}]")]
    HttpStatus { status: u16, x_error: String },

    /// The service reported an error in the body. Its text is not exposed.
    #[error("Something Went Wrong")]
    SomethingWentWrong,

    // ============================================================================
    // Data Processing Errors
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Invalid response body: {message}")]
    InvalidResponse { message: String },

    #[error("Failed to decode item '{item_id}': {message}")]
    Decode { item_id: String, message: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    /// Failure raised by a custom sender through `anyhow`
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a transport error for senders that are not backed by reqwest
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, x_error: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            x_error: x_error.into(),
        }
    }

    /// Create an invalid response error
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    /// Create a decode error for one item record
    pub fn decode(item_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            item_id: item_id.into(),
            message: message.into(),
        }
    }

    /// Check if the exchange itself failed (network, DNS, TLS, timeout).
    ///
    /// Errors a custom sender raises through `anyhow` count as transport
    /// failures.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Http(_) | Error::Transport { .. } | Error::Anyhow(_)
        )
    }

    /// Status code of a protocol error, if this is one
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for pocket-sync
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::http_status(403, "Access denied");
        assert_eq!(err.to_string(), "got response 403; X-Error=[Access denied]");

        let err = Error::decode("229279689", "invalid type");
        assert_eq!(
            err.to_string(),
            "Failed to decode item '229279689': invalid type"
        );
    }

    #[test]
    fn test_service_error_is_saturated() {
        assert_eq!(Error::SomethingWentWrong.to_string(), "Something Went Wrong");
    }

    #[test]
    fn test_is_transport() {
        assert!(Error::transport("connection reset").is_transport());
        assert!(Error::from(anyhow::anyhow!("dns lookup failed")).is_transport());

        assert!(!Error::http_status(500, "").is_transport());
        assert!(!Error::SomethingWentWrong.is_transport());
        assert!(!Error::config("test").is_transport());
    }

    #[test]
    fn test_status() {
        assert_eq!(Error::http_status(401, "").status(), Some(401));
        assert_eq!(Error::SomethingWentWrong.status(), None);
    }
}
