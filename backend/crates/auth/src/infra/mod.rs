//! Infrastructure Layer
//!
//! SQLite storage and the HMAC session signer.

pub mod hmac_signer;
pub mod sqlite;

pub use hmac_signer::HmacSessionSigner;
pub use sqlite::SqliteUserRepository;
