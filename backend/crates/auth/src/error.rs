//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, conversions::classify_sqlx_error, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// User name already exists
    #[error("User name already exists")]
    UserNameTaken,

    /// User name rejected by validation
    #[error("Invalid user name: {0}")]
    InvalidUserName(String),

    /// Password rejected by policy
    #[error("Password validation failed: {0}")]
    PasswordValidation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Hashing, signing or serialization failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Errors caused by what the user typed, as opposed to a server fault.
    ///
    /// Form handlers answer these with a redirect back to the form.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            AuthError::UserNameTaken
                | AuthError::InvalidUserName(_)
                | AuthError::PasswordValidation(_)
        )
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::UserNameTaken => ErrorKind::Conflict,
            AuthError::InvalidUserName(_) | AuthError::PasswordValidation(_) => {
                ErrorKind::BadRequest
            }
            AuthError::Database(e) => classify_sqlx_error(e).0,
            AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Server-side details stay out of the client-facing message.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::Database(e) => {
                let (kind, message) = classify_sqlx_error(e);
                AppError::new(kind, message).with_action("Please try again later")
            }
            AuthError::Internal(_) => AppError::internal("Internal error"),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    ///
    /// Server faults at error level, user mistakes at debug.
    fn log(&self) {
        if self.kind().is_server_error() {
            tracing::error!(error = %self, "Auth request failed");
        } else {
            tracing::debug!(error = %self, "Auth error");
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<serde_json::Error> for AuthError {
    fn from(err: serde_json::Error) -> Self {
        AuthError::Internal(format!("Session encoding failed: {err}"))
    }
}
