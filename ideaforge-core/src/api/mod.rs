//! HTTP client for the platform backend
//!
//! Every endpoint speaks the `{ success, data, message }` envelope;
//! callers branch on `success` and surface `message` on failure. Requests
//! carry a bearer token when one is configured. There are no retries: a
//! failed call is terminal for that one user action.

pub mod error;

pub use error::{ApiError, ApiResult};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::suggestion::ProjectDraft;

/// Standard response envelope for all backend endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Collapse the envelope into a result, surfacing the backend message
    pub fn into_result(self) -> ApiResult<T> {
        if self.success {
            self.data.ok_or_else(|| ApiError::parse("successful response carried no data"))
        } else {
            let message = self.message.unwrap_or_else(|| "request failed".to_string());
            Err(ApiError::backend(message))
        }
    }
}

/// Client for the platform REST API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Build a client from the API section of the configuration
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        }
    }

    /// Build a client against an explicit base URL, no token
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Submit a normalized draft to `POST /projects`
    ///
    /// Returns the created project as the backend shaped it.
    pub async fn create_project(&self, draft: &ProjectDraft) -> ApiResult<Value> {
        let url = format!("{}/projects", self.base_url);
        debug!(%url, title = %draft.title, "creating project");

        let mut request = self.http.post(&url).json(draft);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(ApiError::from)?;
        let status = response.status();
        let body = response.text().await.map_err(ApiError::from)?;

        if !status.is_success() {
            // The backend often wraps failures in the envelope anyway
            if let Ok(envelope) = serde_json::from_str::<ApiResponse<Value>>(&body) {
                if let Some(message) = envelope.message {
                    warn!(status = status.as_u16(), %message, "project creation rejected");
                    return Err(ApiError::backend(message));
                }
            }
            return Err(ApiError::http(status.as_u16(), body));
        }

        let envelope: ApiResponse<Value> = serde_json::from_str(&body)?;
        envelope.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_success_yields_data() {
        let envelope: ApiResponse<Value> =
            serde_json::from_value(json!({"success": true, "data": {"id": "p1"}})).unwrap();
        let data = envelope.into_result().unwrap();
        assert_eq!(data["id"], "p1");
    }

    #[test]
    fn test_envelope_failure_surfaces_message() {
        let envelope: ApiResponse<Value> =
            serde_json::from_value(json!({"success": false, "message": "title taken"})).unwrap();
        let err = envelope.into_result().unwrap_err();
        assert!(matches!(err, ApiError::Backend { .. }));
        assert!(err.to_string().contains("title taken"));
    }

    #[test]
    fn test_envelope_tolerates_missing_fields() {
        let envelope: ApiResponse<Value> =
            serde_json::from_value(json!({"success": false})).unwrap();
        let err = envelope.into_result().unwrap_err();
        assert!(err.to_string().contains("request failed"));
    }

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let client = ApiClient::with_base_url("http://localhost:5000/api/");
        assert_eq!(client.base_url, "http://localhost:5000/api");
    }
}
