use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

/// Error type shared by every handler. Each variant maps to a fixed HTTP
/// status at the boundary; handlers fail fast and never retry.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Missing or malformed input.
    #[error("{0}")]
    Validation(String),

    /// Uniqueness violation (duplicate email, non-empty store on init).
    #[error("{0}")]
    Conflict(String),

    /// Bad credentials.
    #[error("{0}")]
    Auth(String),

    /// No bearer token on a protected route.
    #[error("Access denied. No token provided.")]
    MissingToken,

    /// Token present but failed signature or expiry checks.
    #[error("Invalid or expired token.")]
    InvalidToken,

    /// Referenced entity is gone. A validly signed token whose account has
    /// been deleted lands here, not at 401.
    #[error("{0}")]
    NotFound(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
            ApiError::Auth(_) | ApiError::MissingToken => StatusCode::UNAUTHORIZED,
            ApiError::InvalidToken => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        // Log the cause server-side but never leak it to the client.
        if let ApiError::Internal(ref source) = self {
            error!(error = %source, "internal error");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
