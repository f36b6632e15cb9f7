use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PortalError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request failed ({status}): {message}")]
    Status { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Missing authentication: {0}")]
    MissingAuth(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl PortalError {
    /// True when the failure means the stored session can no longer be trusted.
    pub fn is_auth_failure(&self) -> bool {
        match self {
            PortalError::MissingAuth(_) => true,
            PortalError::Status { status, .. } => matches!(status, 401 | 403),
            _ => false,
        }
    }

    /// Message suitable for showing to the end user.
    pub fn user_message(&self) -> String {
        match self {
            PortalError::Status { message, .. } if !message.trim().is_empty() => message.clone(),
            PortalError::Status { status, .. } => format!("request failed with status {}", status),
            PortalError::Network(_) => "the server could not be reached".to_string(),
            PortalError::MalformedResponse(_) => "the server sent an unexpected response".to_string(),
            PortalError::MissingAuth(msg)
            | PortalError::Validation(msg)
            | PortalError::Storage(msg)
            | PortalError::Config(msg) => msg.clone(),
        }
    }
}

impl From<reqwest::Error> for PortalError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            PortalError::MalformedResponse(err.to_string())
        } else {
            PortalError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for PortalError {
    fn from(err: serde_json::Error) -> Self {
        PortalError::MalformedResponse(err.to_string())
    }
}
