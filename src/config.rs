//! Settings for the HTTP notification transport.
//!
//! [`DispatchConfig`] has working defaults for a local notification service
//! and deserializes with per-field defaults, so a host application can embed
//! it in its own configuration file and override only what it needs.
//!
//! # Examples
//!
//! ```
//! use purchase_rail::config::DispatchConfig;
//!
//! let config: DispatchConfig = serde_json::from_str(r#"{"base_url":"http://mailer:8080"}"#).unwrap();
//! assert_eq!(config.path, "/thank-you");
//! assert_eq!(config.endpoint_string(), "http://mailer:8080/thank-you");
//! ```
use core::fmt;
use core::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_PATH: &str = "/thank-you";
pub const DEFAULT_USER_AGENT: &str = concat!("purchase-rail/", env!("CARGO_PKG_VERSION"));

/// Where and how thank-you notifications are posted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    pub base_url: String,
    pub path: String,
    /// Per-request timeout in milliseconds; `None` waits indefinitely.
    pub request_timeout_ms: Option<u64>,
    pub user_agent: String,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            path: DEFAULT_PATH.into(),
            request_timeout_ms: None,
            user_agent: DEFAULT_USER_AGENT.into(),
        }
    }
}

impl DispatchConfig {
    #[inline]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[inline]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    #[inline]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout_ms = Some(timeout.as_millis().try_into().unwrap_or(u64::MAX));
        self
    }

    #[inline]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    #[inline]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }

    /// Base URL and path joined with exactly one `/` between them.
    pub fn endpoint_string(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = self.path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// The parsed endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`] when the joined URL does not parse.
    #[cfg(feature = "http")]
    pub fn endpoint(&self) -> Result<reqwest::Url, ConfigError> {
        let endpoint = self.endpoint_string();
        reqwest::Url::parse(&endpoint)
            .map_err(|e| ConfigError::InvalidEndpoint { endpoint, reason: e.to_string() })
    }
}

/// A transport could not be built from its configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidEndpoint { endpoint: String, reason: String },
    Client(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEndpoint { endpoint, reason } => {
                write!(f, "invalid notification endpoint '{endpoint}': {reason}")
            }
            Self::Client(reason) => write!(f, "could not build HTTP client: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {}
