//! Client configuration.
//!
//! Built in code with the `with_*` setters or read from the environment with
//! [`ClientConfig::from_env`]. The base URL is only parsed when a client is
//! constructed, so a bad value surfaces there and never afterwards.

use std::env;
use std::time::Duration;

use crate::error::{ApiError, ApiResult};

/// Public Qiita API v2 endpoint.
pub const DEFAULT_BASE_URL: &str = "https://qiita.com/api/v2";

pub const DEFAULT_USER_AGENT: &str = concat!("qiita-core/", env!("CARGO_PKG_VERSION"));

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    /// Empty or `None` means requests are sent without `Authorization`.
    pub access_token: Option<String>,
    pub user_agent: String,
    /// Upper bound on a single round-trip, connect included.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            access_token: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Read configuration from environment variables.
    ///
    /// - `QIITA_BASE_URL`: API endpoint (defaults to [`DEFAULT_BASE_URL`])
    /// - `QIITA_ACCESS_TOKEN`: personal access token (optional)
    /// - `QIITA_TIMEOUT_SECS`: request timeout in seconds (defaults to 30)
    pub fn from_env() -> ApiResult<Self> {
        let base_url = env::var("QIITA_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let access_token = env::var("QIITA_ACCESS_TOKEN").ok();
        let timeout = match env::var("QIITA_TIMEOUT_SECS") {
            Ok(raw) => raw.trim().parse().map(Duration::from_secs).map_err(|_| {
                ApiError::Validation(format!("QIITA_TIMEOUT_SECS must be a whole number, got '{raw}'"))
            })?,
            Err(_) => DEFAULT_TIMEOUT,
        };

        let config = Self {
            base_url,
            access_token,
            timeout,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The token to send, if any. Blank tokens count as absent.
    pub fn token(&self) -> Option<&str> {
        self.access_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }

    pub fn validate(&self) -> ApiResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(ApiError::Validation("base url must not be empty".into()));
        }
        if self.user_agent.trim().is_empty() {
            return Err(ApiError::Validation("user agent must not be empty".into()));
        }
        if self.timeout.is_zero() {
            return Err(ApiError::Validation("timeout must be greater than zero".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_public_api() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://qiita.com/api/v2");
        assert!(config.token().is_none());
        assert!(config.user_agent.starts_with("qiita-core/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn blank_token_is_treated_as_absent() {
        let config = ClientConfig::default().with_access_token("   ");
        assert!(config.token().is_none());
        let config = ClientConfig::default().with_access_token("abc");
        assert_eq!(config.token(), Some("abc"));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config = ClientConfig::default().with_timeout(Duration::ZERO);
        assert!(config.validate().unwrap_err().is_validation());
    }
}
