//! Client configuration
//!
//! Request policy (filters, page size), endpoint and transport settings.
//! Every field has a default matching the service's documented behaviour,
//! so an empty YAML document is a valid configuration.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Default retrieve endpoint
pub const DEFAULT_ENDPOINT: &str = "https://getpocket.com/v3/get";

/// Default number of items requested per page
pub const DEFAULT_COUNT: u32 = 30;

/// Default state filter
pub const DEFAULT_STATE: &str = "unread";

/// Default detail type filter
pub const DEFAULT_DETAIL_TYPE: &str = "simple";

// ============================================================================
// Top-Level Client Config
// ============================================================================

/// Complete client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// URL of the retrieve endpoint
    pub endpoint: String,

    /// Fixed request filters and page window
    pub policy: RequestPolicy,

    /// Transport settings for the default sender
    pub http: HttpConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            policy: RequestPolicy::default(),
            http: HttpConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Parse a configuration from YAML and validate it
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Set the endpoint
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the page size
    #[must_use]
    pub fn with_count(mut self, count: u32) -> Self {
        self.policy.count = count;
        self
    }

    /// Replace the request policy
    #[must_use]
    pub fn with_policy(mut self, policy: RequestPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the transport timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.http.timeout_ms = duration_ms(timeout);
        self
    }

    /// Check that the configuration can drive a retrieval
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.endpoint)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::invalid_value(
                "endpoint",
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }
        self.policy.validate()?;
        self.http.validate()
    }
}

// ============================================================================
// Request Policy
// ============================================================================

/// Fixed filters and pagination window sent with every page request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestPolicy {
    /// Item state filter
    pub state: String,

    /// Level of detail per item
    pub detail_type: String,

    /// Items per page; also the offset step
    pub count: u32,

    /// Offset of the first page
    pub initial_offset: u32,

    /// Ask the service to report the total count
    pub total: u8,
}

impl Default for RequestPolicy {
    fn default() -> Self {
        Self {
            state: DEFAULT_STATE.to_string(),
            detail_type: DEFAULT_DETAIL_TYPE.to_string(),
            count: DEFAULT_COUNT,
            initial_offset: 0,
            total: 1,
        }
    }
}

impl RequestPolicy {
    /// Validate the policy
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(Error::invalid_value("policy.count", "must be positive"));
        }
        if self.state.is_empty() {
            return Err(Error::invalid_value("policy.state", "must not be empty"));
        }
        if self.detail_type.is_empty() {
            return Err(Error::invalid_value(
                "policy.detail_type",
                "must not be empty",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// HTTP Config
// ============================================================================

/// Settings for the reqwest-backed sender
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,

    /// User agent string
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 30_000,
            user_agent: format!("pocket-sync/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpConfig {
    /// Timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Reject a zero timeout
    pub fn validate(&self) -> Result<()> {
        if self.timeout_ms == 0 {
            return Err(Error::invalid_value("http.timeout_ms", "must be positive"));
        }
        Ok(())
    }
}

/// Whole milliseconds of a duration, saturating
pub(crate) fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

// ============================================================================
// Credentials
// ============================================================================

/// Application key and user token.
///
/// Obtaining these is the caller's business; they are only carried here.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Application consumer key
    pub consumer_key: String,
    /// User access token
    pub access_token: String,
}

impl Credentials {
    /// Create credentials
    pub fn new(consumer_key: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            access_token: access_token.into(),
        }
    }

    /// Reject empty values
    pub fn validate(&self) -> Result<()> {
        if self.consumer_key.is_empty() {
            return Err(Error::invalid_value("consumer_key", "must not be empty"));
        }
        if self.access_token.is_empty() {
            return Err(Error::invalid_value("access_token", "must not be empty"));
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &self.consumer_key)
            .field("access_token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint, "https://getpocket.com/v3/get");
        assert_eq!(config.policy.count, 30);
        assert_eq!(config.policy.initial_offset, 0);
        assert_eq!(config.policy.total, 1);
        assert_eq!(config.policy.state, "unread");
        assert_eq!(config.policy.detail_type, "simple");
        assert_eq!(config.http.timeout(), Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = ClientConfig::from_yaml_str("").unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = r"
endpoint: http://localhost:8080/v3/get
policy:
  count: 5
  state: all
http:
  timeout_ms: 5000
";
        let config = ClientConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.endpoint, "http://localhost:8080/v3/get");
        assert_eq!(config.policy.count, 5);
        assert_eq!(config.policy.state, "all");
        assert_eq!(config.policy.detail_type, "simple");
        assert_eq!(config.http.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_yaml() {
        let result = ClientConfig::from_yaml_str("policy: [1, 2");
        assert!(matches!(result, Err(Error::YamlParse(_))));
    }

    #[test]
    fn test_zero_count_rejected() {
        let result = ClientConfig::from_yaml_str("policy:\n  count: 0\n");
        assert!(matches!(
            result,
            Err(Error::InvalidConfigValue { ref field, .. }) if field == "policy.count"
        ));
    }

    #[test]
    fn test_bad_endpoint_rejected() {
        let config = ClientConfig::default().with_endpoint("not a url");
        assert!(matches!(config.validate(), Err(Error::InvalidUrl(_))));

        let config = ClientConfig::default().with_endpoint("ftp://getpocket.com/v3/get");
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfigValue { .. })
        ));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = ClientConfig::from_yaml_str("http:\n  timeout_ms: 0\n");
        assert!(matches!(
            result,
            Err(Error::InvalidConfigValue { ref field, .. }) if field == "http.timeout_ms"
        ));

        let config = ClientConfig::default().with_timeout(Duration::from_micros(10));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "policy:\n  count: 10").unwrap();

        let config = ClientConfig::from_file(file.path()).unwrap();
        assert_eq!(config.policy.count, 10);

        let missing = ClientConfig::from_file("/nonexistent/pocket.yaml");
        assert!(matches!(missing, Err(Error::Config { .. })));
    }

    #[test]
    fn test_builder_methods() {
        let config = ClientConfig::default()
            .with_endpoint("http://127.0.0.1:9000/get")
            .with_count(2)
            .with_timeout(Duration::from_millis(1500));
        assert_eq!(config.endpoint, "http://127.0.0.1:9000/get");
        assert_eq!(config.policy.count, 2);
        assert_eq!(config.http.timeout_ms, 1500);
        assert_eq!(config.http.timeout(), Duration::from_millis(1500));
    }

    #[test]
    fn test_credentials_debug_redacts_token() {
        let creds = Credentials::new("1234-abcd", "secret-token");
        let debug = format!("{creds:?}");
        assert!(debug.contains("1234-abcd"));
        assert!(!debug.contains("secret-token"));
    }

    #[test]
    fn test_credentials_validate() {
        assert!(Credentials::new("key", "token").validate().is_ok());
        assert!(Credentials::new("", "token").validate().is_err());
        assert!(Credentials::new("key", "").validate().is_err());
    }
}
