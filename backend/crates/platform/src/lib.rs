//! Platform Crate - Technical Infrastructure
//!
//! Domain-free building blocks used by the auth crate:
//! - Cryptographic utilities (random bytes, HMAC-SHA256, AES-256-GCM, URL-safe Base64)
//! - Password hashing (Argon2id, PHC strings, optional pepper)
//! - Cookie header parsing and `Set-Cookie` construction

pub mod cookie;
pub mod crypto;
pub mod password;
