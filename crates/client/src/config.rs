use bulk_whois_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Production endpoint of the bulk WHOIS lookup service
pub const DEFAULT_BASE_URL: &str = "https://www.whoisxmlapi.com/BulkWhoisLookup/bulkServices";

/// Per-call timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: f64 = 30.0;

pub const DEFAULT_USER_AGENT: &str = concat!("bulk-whois/", env!("CARGO_PKG_VERSION"));

/// Transport settings for the bulk WHOIS client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API endpoint URL, without a trailing path
    pub base_url: String,
    /// Timeout of a single API call, in seconds; fractions allowed
    pub timeout_secs: f64,
    /// User-Agent header sent with every call
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load configuration from a file
    pub fn from_file<P: AsRef<std::path::Path>>(
        path: P,
    ) -> std::result::Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = timeout.as_secs_f64();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Zero when `timeout_secs` is not a usable duration; `validate` rejects that
    pub fn timeout(&self) -> Duration {
        Duration::try_from_secs_f64(self.timeout_secs).unwrap_or(Duration::ZERO)
    }

    /// Check that the base URL parses and the timeout is positive
    pub fn validate(&self) -> Result<()> {
        validate_base_url(&self.base_url)?;

        validate_timeout(self.timeout())
    }
}

/// Check a URL the client can post to
pub(crate) fn validate_base_url(base_url: &str) -> Result<()> {
    Url::parse(base_url)
        .map(|_| ())
        .map_err(|e| Error::parameter(format!("Invalid base URL '{base_url}': {e}")))
}

pub(crate) fn validate_timeout(timeout: Duration) -> Result<()> {
    if timeout.is_zero() {
        return Err(Error::parameter("Timeout must be greater than 0"));
    }
    Ok(())
}
