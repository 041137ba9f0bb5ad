//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::fmt;
use std::time::Duration;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

use platform::crypto::{AES256_KEY_LEN, hmac_sha256, random_bytes};

/// Domain separation label for deriving the encryption key from the secret
const ENCRYPTION_KEY_LABEL: &[u8] = b"session-cookie-encryption";

/// Minimum accepted length of the session signing secret, in bytes
pub const MIN_SESSION_SECRET_LEN: usize = 32;

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// HMAC key for signing session cookies
    pub session_secret: Vec<u8>,
    /// AES-256-GCM key that keeps the cookie payload unreadable
    pub session_encryption_key: Vec<u8>,
    /// Tokens older than this are rejected even with a valid signature
    pub session_max_age: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "session".to_string(),
            session_secret: vec![0u8; MIN_SESSION_SECRET_LEN],
            session_encryption_key: vec![0u8; AES256_KEY_LEN],
            session_max_age: Duration::from_secs(30 * 24 * 3600), // 30 days
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Create config keyed by `secret`
    ///
    /// The encryption key is derived from the secret, so one value keeps
    /// sessions valid across restarts.
    pub fn from_secret(secret: Vec<u8>) -> Self {
        Self {
            session_encryption_key: hmac_sha256(&secret, ENCRYPTION_KEY_LABEL).to_vec(),
            session_secret: secret,
            ..Default::default()
        }
    }

    /// Create config with a random 64-byte session secret
    ///
    /// Sessions issued under it do not survive a restart.
    pub fn with_random_secret() -> Self {
        Self::from_secret(random_bytes(64))
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    /// Whether the signing secret is long enough to use and the
    /// encryption key fits AES-256
    pub fn has_strong_secret(&self) -> bool {
        self.session_secret.len() >= MIN_SESSION_SECRET_LEN
            && self.session_secret.iter().any(|&b| b != 0)
            && self.session_encryption_key.len() == AES256_KEY_LEN
            && self.session_encryption_key.iter().any(|&b| b != 0)
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("session_cookie_name", &self.session_cookie_name)
            .field("session_secret", &"[REDACTED]")
            .field("session_encryption_key", &"[REDACTED]")
            .field("session_max_age", &self.session_max_age)
            .field("cookie_secure", &self.cookie_secure)
            .field("cookie_same_site", &self.cookie_same_site)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
