use std::env;
use std::time::Duration;

use tracing::warn;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct PortalConfig {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl PortalConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            ..Self::default()
        }
    }

    pub fn from_env() -> Self {
        let config = Self {
            api_base_url: env::var("CLINIC_API_BASE_URL")
                .unwrap_or_else(|_| {
                    warn!("CLINIC_API_BASE_URL not set, using default");
                    DEFAULT_API_BASE_URL.to_string()
                }),
            request_timeout_secs: match env::var("CLINIC_REQUEST_TIMEOUT_SECS") {
                Ok(raw) => raw.parse().unwrap_or_else(|_| {
                    warn!("CLINIC_REQUEST_TIMEOUT_SECS is not a number ({}), using default", raw);
                    DEFAULT_REQUEST_TIMEOUT_SECS
                }),
                Err(_) => DEFAULT_REQUEST_TIMEOUT_SECS,
            },
        };

        if !config.is_configured() {
            warn!("Portal not fully configured - API base URL is empty");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.api_base_url.trim().is_empty()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
