//! Error conversions
//!
//! sqlx error classification and the HTTP rendering of [`AppError`].

#[cfg(feature = "axum")]
use super::app_error::AppError;
#[cfg(feature = "sqlx")]
use super::kind::ErrorKind;

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

/// Classify a sqlx error into an [`ErrorKind`] and a client-safe message
///
/// For crates that keep their own error enums around `sqlx::Error`.
#[cfg(feature = "sqlx")]
pub fn classify_sqlx_error(err: &sqlx::Error) -> (ErrorKind, &'static str) {
    use sqlx::error::ErrorKind as DbErrorKind;

    match err {
        sqlx::Error::RowNotFound => (ErrorKind::NotFound, "Record not found"),
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => (
            ErrorKind::ServiceUnavailable,
            "Database connection pool exhausted",
        ),
        sqlx::Error::Database(db_err) => match db_err.kind() {
            DbErrorKind::UniqueViolation => (ErrorKind::Conflict, "Duplicate key value"),
            DbErrorKind::ForeignKeyViolation => (ErrorKind::Conflict, "Foreign key violation"),
            DbErrorKind::NotNullViolation => (ErrorKind::BadRequest, "Required field is null"),
            DbErrorKind::CheckViolation => (ErrorKind::BadRequest, "Check constraint violation"),
            // SQLite primary result codes: 5 BUSY, 6 LOCKED, 13 FULL, 14 CANTOPEN
            _ => match db_err.code().as_deref() {
                Some("5") | Some("6") => (ErrorKind::ServiceUnavailable, "Database is busy"),
                Some("13") => (ErrorKind::ServiceUnavailable, "Database is full"),
                Some("14") => (ErrorKind::ServiceUnavailable, "Database unavailable"),
                _ => (ErrorKind::InternalServerError, "Database error"),
            },
        },
        sqlx::Error::Io(_) => (ErrorKind::ServiceUnavailable, "Database connection error"),
        _ => (ErrorKind::InternalServerError, "Database error"),
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // RFC 7807 Problem Details
        let body = serde_json::json!({
            "type": format!("https://httpstatuses.io/{}", self.status_code()),
            "title": self.kind().as_str(),
            "status": self.status_code(),
            "detail": self.message(),
            "action": self.action(),
        });

        (status, Json(body)).into_response()
    }
}
