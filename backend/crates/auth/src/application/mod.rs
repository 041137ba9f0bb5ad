//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod session_cookie;
pub mod sign_in;
pub mod sign_up;

// Re-exports
pub use config::AuthConfig;
pub use session_cookie::SessionCookie;
pub use sign_in::{SignInInput, SignInUseCase};
pub use sign_up::{SignUpInput, SignUpOutput, SignUpUseCase};
