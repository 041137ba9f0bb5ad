//! Domain Layer
//!
//! Entities, value objects, and the traits infrastructure implements.

pub mod entity;
pub mod repository;
pub mod signer;
pub mod value_object;

// Re-exports
pub use entity::{session_claims::SessionClaims, user::User};
pub use repository::UserRepository;
pub use signer::SessionSigner;
