use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use roster_application::{ProvisionError, RevokeError};
use roster_core::{EmailError, IdentityError, PasswordError};

/// Wire shape of every failure: a caller-visible kind plus a message.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

/// The three error kinds a caller can observe.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Unauthenticated(String),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    fn code(&self) -> &'static str {
        match self {
            ApiError::Unauthenticated(_) => "unauthenticated",
            ApiError::InvalidArgument(_) => "invalid-argument",
            ApiError::Internal(_) => "internal",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            ApiError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
        }

        let body = Json(ErrorResponse {
            code: self.code().to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<EmailError> for ApiError {
    fn from(error: EmailError) -> Self {
        ApiError::InvalidArgument(error.to_string())
    }
}

impl From<PasswordError> for ApiError {
    fn from(error: PasswordError) -> Self {
        ApiError::InvalidArgument(error.to_string())
    }
}

impl From<ProvisionError> for ApiError {
    fn from(error: ProvisionError) -> Self {
        match error {
            ProvisionError::Identity(IdentityError::EmailAlreadyInUse) => {
                ApiError::InvalidArgument("email already registered".to_string())
            }
            ProvisionError::Identity(IdentityError::WeakPassword) => {
                ApiError::InvalidArgument("password too weak".to_string())
            }
            ProvisionError::Identity(e) => ApiError::Internal(e.to_string()),
            ProvisionError::Profile(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<RevokeError> for ApiError {
    fn from(error: RevokeError) -> Self {
        match error {
            RevokeError::Identity(e) => ApiError::Internal(e.to_string()),
        }
    }
}
