use super::models::ErrorBody;
use reqwest::StatusCode;
use thiserror::Error;

/// Default messages shown when a failed response carries no `detail`.
pub mod fallback {
    pub const REGISTRATION: &str = "Registration failed.";
    pub const LOGIN: &str = "Login failed.";
    pub const FETCH_EVENTS: &str = "Failed to fetch events.";
    pub const CREATE_EVENT: &str = "Event creation failed.";
    pub const GENERATE_DESCRIPTION: &str = "Failed to generate description.";
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("unauthorized{}", detail_suffix(.detail))]
    Unauthorized { detail: Option<String> },
    #[error("HTTP {status}{}", detail_suffix(.detail))]
    Status {
        status: StatusCode,
        detail: Option<String>,
    },
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("invalid API URL: {0}")]
    Url(String),
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|d| format!(": {}", d))
        .unwrap_or_default()
}

impl ApiError {
    /// Build the error for a non-success response from its status and body.
    pub fn from_response(status: StatusCode, body: &[u8]) -> Self {
        let detail = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.detail)
            .filter(|d| !d.trim().is_empty());
        if status == StatusCode::UNAUTHORIZED {
            ApiError::Unauthorized { detail }
        } else {
            ApiError::Status { status, detail }
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// The message to show the user: the server's `detail` when present,
    /// otherwise the call site's fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Unauthorized { detail: Some(d) } | ApiError::Status { detail: Some(d), .. } => {
                d.clone()
            }
            _ => fallback.to_string(),
        }
    }
}
