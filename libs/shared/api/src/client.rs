use reqwest::{
    Client,
    header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE},
    Method, Response, Url,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, warn};

use shared_config::PortalConfig;
use shared_models::PortalError;

/// JSON-over-HTTP client for the clinic backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &PortalConfig) -> Self {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to build HTTP client with timeout, using defaults: {}", e);
                Client::new()
            });

        Self {
            client,
            base_url: config.api_base_url.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get_headers(&self, auth_token: Option<&str>) -> Result<HeaderMap, PortalError> {
        let mut headers = HeaderMap::new();

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json, text/plain"));

        if let Some(token) = auth_token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| PortalError::MissingAuth("auth token contains invalid characters".to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }

    /// Joins percent-encoded path segments onto the base URL.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, PortalError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| PortalError::Config(format!("invalid API base URL {}: {}", self.base_url, e)))?;

        url.path_segments_mut()
            .map_err(|_| PortalError::Config(format!("API base URL cannot take a path: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    async fn send(
        &self,
        method: Method,
        segments: &[&str],
        auth_token: Option<&str>,
        body: Option<Value>,
    ) -> Result<Response, PortalError> {
        let url = self.endpoint(segments)?;
        debug!("Making {} request to {}", method, url.path());

        let headers = self.get_headers(auth_token)?;

        let mut req = self.client.request(method, url)
            .headers(headers);

        if let Some(body_data) = body {
            req = req.json(&body_data);
        }

        let response = req.send().await.map_err(|e| {
            error!("Request failed before a response arrived: {}", e);
            PortalError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("API error ({}): {}", status, error_text);

            return Err(PortalError::Status {
                status: status.as_u16(),
                message: extract_message(&error_text),
            });
        }

        Ok(response)
    }

    /// Sends a request and decodes a JSON body.
    pub async fn request<T>(&self, method: Method, segments: &[&str],
                            auth_token: Option<&str>, body: Option<Value>)
                            -> Result<T, PortalError>
    where T: DeserializeOwned {
        let response = self.send(method, segments, auth_token, body).await?;
        let text = response.text().await?;

        serde_json::from_str(&text).map_err(|e| {
            error!("Could not decode response body: {}", e);
            PortalError::MalformedResponse(e.to_string())
        })
    }

    /// Sends a request whose success body is plain text (backend status messages).
    pub async fn request_text(&self, method: Method, segments: &[&str],
                              auth_token: Option<&str>, body: Option<Value>)
                              -> Result<String, PortalError> {
        let response = self.send(method, segments, auth_token, body).await?;
        let text = response.text().await?;
        Ok(extract_message(&text))
    }
}

/// Pulls a human-readable message out of a backend body, which is either plain
/// text or a JSON object carrying `message` / `error`.
fn extract_message(body: &str) -> String {
    let trimmed = body.trim();
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(trimmed) {
        for key in ["message", "error"] {
            if let Some(Value::String(msg)) = map.get(key) {
                return msg.clone();
            }
        }
    }
    trimmed.to_string()
}
