//! Shared Kernel
//!
//! Error vocabulary shared by every crate in the workspace:
//! - [`error::app_error::AppError`] and the [`error::app_error::AppResult`] alias
//! - [`error::kind::ErrorKind`], the HTTP-facing classification
//! - sqlx error classification and the RFC 7807 response (feature-gated)
//!
//! Nothing here knows about users or sessions.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
