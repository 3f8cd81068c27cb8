use auth::AuthError;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use corpus::CorpusError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    ValidationError(String),

    #[error("{0}")]
    NotFound(String),
}

impl ApiError {
    /// Returns the appropriate HTTP status code for this error
    pub fn http_status_code(&self) -> u16 {
        match self {
            ApiError::ValidationError(_) => 400, // Bad Request
            ApiError::NotFound(_) => 404,        // Not Found
        }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.http_status_code()).unwrap_or(StatusCode::BAD_REQUEST)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        log::warn!("Request failed with {}: {}", status, self);
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        ApiError::ValidationError(error.to_string())
    }
}

impl From<CorpusError> for ApiError {
    fn from(error: CorpusError) -> Self {
        match error {
            CorpusError::NotFound(_) => ApiError::NotFound("Not found".to_string()),
            other => ApiError::ValidationError(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::ValidationError(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::ValidationError(rejection.body_text())
    }
}
