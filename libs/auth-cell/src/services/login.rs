use async_trait::async_trait;
use reqwest::Method;
use tracing::debug;

use shared_api::ApiClient;
use shared_config::PortalConfig;
use shared_models::{LoginRequest, LoginResponse, PortalError};

/// Exchanges credentials for an auth token.
#[async_trait]
pub trait Authenticator {
    async fn authenticate(&self, request: &LoginRequest) -> Result<String, PortalError>;
}

/// Posts credentials to `{base}/{admin|doctor|patient}/login`.
pub struct LoginService {
    api: ApiClient,
}

impl LoginService {
    pub fn new(config: &PortalConfig) -> Self {
        Self {
            api: ApiClient::new(config),
        }
    }

    pub fn with_client(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Authenticator for LoginService {
    async fn authenticate(&self, request: &LoginRequest) -> Result<String, PortalError> {
        debug!("Submitting {} login", request.resource());

        let response: LoginResponse = self.api.request(
            Method::POST,
            &[request.resource(), "login"],
            None,
            Some(request.body()),
        ).await?;

        if response.token.trim().is_empty() {
            return Err(PortalError::MalformedResponse("login response carried an empty token".to_string()));
        }

        Ok(response.token)
    }
}
