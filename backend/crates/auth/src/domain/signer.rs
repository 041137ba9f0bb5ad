//! Session Signer
//!
//! Produces and checks the tag that makes the session cookie tamper-evident.

/// Message authentication for session tokens
///
/// Implementations must compare tags in constant time.
pub trait SessionSigner: Send + Sync {
    /// Tag for `message`
    fn sign(&self, message: &[u8]) -> Vec<u8>;

    /// Whether `tag` was produced by `sign` for this exact `message`
    fn verify(&self, message: &[u8], tag: &[u8]) -> bool;
}
