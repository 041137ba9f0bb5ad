//! HMAC-SHA256 Session Signer

use platform::crypto::{hmac_sha256, verify_hmac_sha256};

use crate::domain::signer::SessionSigner;

/// Signs session tokens with HMAC-SHA256 under a server secret
#[derive(Clone)]
pub struct HmacSessionSigner {
    key: Vec<u8>,
}

impl HmacSessionSigner {
    pub fn new(key: impl Into<Vec<u8>>) -> Self {
        Self { key: key.into() }
    }
}

impl SessionSigner for HmacSessionSigner {
    fn sign(&self, message: &[u8]) -> Vec<u8> {
        hmac_sha256(&self.key, message).to_vec()
    }

    fn verify(&self, message: &[u8], tag: &[u8]) -> bool {
        verify_hmac_sha256(&self.key, message, tag)
    }
}

impl std::fmt::Debug for HmacSessionSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HmacSessionSigner")
            .field("key", &"[REDACTED]")
            .finish()
    }
}
