use crate::error::{ClientError, Result};
use reqwest::header::HeaderValue;
use reqwest::Url;
use std::env;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/hackrx/run";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

pub const ENDPOINT_VAR: &str = "HACKRX_ENDPOINT";
pub const API_KEY_VAR: &str = "HACKRX_API_KEY";
pub const TIMEOUT_VAR: &str = "HACKRX_TIMEOUT_SECS";

/// Connection settings for [`crate::QueryClient`].
#[derive(Clone)]
pub struct ClientConfig {
    pub endpoint: Url,
    pub api_key: String,
    pub timeout: Duration,
}

// Never print the bearer token.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint.as_str())
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Values given explicitly on the command line. They win over the environment.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl ClientConfig {
    pub fn new(endpoint: &str, api_key: &str, timeout: Duration) -> Result<Self> {
        let endpoint = Url::parse(endpoint).map_err(|e| {
            ClientError::InvalidConfig(format!("endpoint {endpoint:?} is not a valid URL: {e}"))
        })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(ClientError::InvalidConfig(format!(
                "endpoint must use http or https, got {:?}",
                endpoint.scheme()
            )));
        }

        if api_key.trim().is_empty() {
            return Err(ClientError::InvalidConfig("API key must not be empty".to_string()));
        }
        // Must survive as an Authorization header value. The key itself is not echoed.
        if HeaderValue::from_str(&format!("Bearer {api_key}")).is_err() {
            return Err(ClientError::InvalidConfig(
                "API key contains characters that are not allowed in an HTTP header".to_string(),
            ));
        }

        if timeout.is_zero() {
            return Err(ClientError::InvalidConfig(
                "timeout must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            endpoint,
            api_key: api_key.to_string(),
            timeout,
        })
    }

    /// Resolves overrides against the process environment.
    pub fn from_env(overrides: ConfigOverrides) -> Result<Self> {
        Self::resolve(overrides, |name| env::var(name).ok())
    }

    pub fn resolve<F>(overrides: ConfigOverrides, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = overrides
            .endpoint
            .or_else(|| lookup(ENDPOINT_VAR))
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let api_key = overrides
            .api_key
            .or_else(|| lookup(API_KEY_VAR))
            .ok_or_else(|| {
                ClientError::InvalidConfig(format!(
                    "no API key given; pass --api-key or set {API_KEY_VAR}"
                ))
            })?;

        let timeout_secs = match overrides.timeout_secs {
            Some(secs) => secs,
            None => match lookup(TIMEOUT_VAR) {
                Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                    ClientError::InvalidConfig(format!(
                        "{TIMEOUT_VAR} must be a whole number of seconds, got {raw:?}"
                    ))
                })?,
                None => DEFAULT_TIMEOUT_SECS,
            },
        };

        Self::new(&endpoint, &api_key, Duration::from_secs(timeout_secs))
    }
}
