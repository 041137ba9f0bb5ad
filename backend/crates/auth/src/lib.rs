//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository and signer traits
//! - `application/` - Use cases and the session cookie service
//! - `infra/` - SQLite repository and HMAC signer
//! - `presentation/` - HTTP handlers, pages, session gate, router
//!
//! ## Features
//! - Registration and login with user name + password
//! - Stateless sessions in a signed `session` cookie
//! - `/dashboard` and `/profile` gated behind a valid session
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optional pepper
//! - Session cookie is AES-256-GCM encrypted, HMAC-SHA256 signed, HttpOnly, SameSite=Lax
//! - Sessions expire after `AuthConfig::session_max_age`

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::session_cookie::SessionCookie;
pub use error::{AuthError, AuthResult};
pub use infra::sqlite::SqliteUserRepository;
pub use presentation::router::auth_router;
