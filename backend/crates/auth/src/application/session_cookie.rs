//! Session Cookie
//!
//! Issues, reads and clears the `session` cookie. The token is
//! `base64url(sealed) "." base64url(tag)`: `sealed` is the claims JSON under
//! AES-256-GCM, and the tag covers the cookie name and the encoded payload.

use axum::http::HeaderMap;
use platform::cookie::{CookieConfig, extract_cookie};
use platform::crypto::{decrypt_aes256_gcm, encrypt_aes256_gcm, from_base64_url, to_base64_url};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::session_claims::SessionClaims;
use crate::domain::signer::SessionSigner;
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};

/// Stateless cookie session service
#[derive(Clone)]
pub struct SessionCookie {
    signer: Arc<dyn SessionSigner>,
    config: Arc<AuthConfig>,
}

impl SessionCookie {
    pub fn new(signer: Arc<dyn SessionSigner>, config: Arc<AuthConfig>) -> Self {
        Self { signer, config }
    }

    /// `Set-Cookie` value carrying a fresh session for `user_name`
    pub fn issue(&self, user_name: &UserName) -> AuthResult<String> {
        let token = self.encode(&SessionClaims::new(user_name.clone()))?;
        Ok(self.cookie_config().build_set_cookie(&token))
    }

    /// Encrypt and sign claims into a token
    pub fn encode(&self, claims: &SessionClaims) -> AuthResult<String> {
        let sealed = encrypt_aes256_gcm(
            &self.config.session_encryption_key,
            &serde_json::to_vec(claims)?,
        )
        .map_err(|e| AuthError::Internal(format!("Session encryption failed: {e}")))?;

        let payload = to_base64_url(&sealed);
        let tag = self.signer.sign(self.signed_message(&payload).as_bytes());
        Ok(format!("{}.{}", payload, to_base64_url(&tag)))
    }

    /// Claims of a token with a valid signature that has not expired
    pub fn decode(&self, token: &str) -> Option<SessionClaims> {
        let (payload, tag) = token.split_once('.')?;
        let tag = from_base64_url(tag).ok()?;

        if !self.signer.verify(self.signed_message(payload).as_bytes(), &tag) {
            tracing::debug!("Session cookie signature mismatch");
            return None;
        }

        let sealed = from_base64_url(payload).ok()?;
        let Ok(json) = decrypt_aes256_gcm(&self.config.session_encryption_key, &sealed) else {
            tracing::debug!("Session cookie could not be decrypted");
            return None;
        };
        let claims: SessionClaims = serde_json::from_slice(&json).ok()?;

        if claims.is_expired(self.config.session_max_age) {
            tracing::debug!(user_name = %claims.name, "Session cookie expired");
            return None;
        }

        Some(claims)
    }

    /// User name of the session in the request's `Cookie` header
    ///
    /// Absent, malformed, forged and expired cookies all read as `None`.
    pub fn read(&self, headers: &HeaderMap) -> Option<UserName> {
        let token = extract_cookie(headers, &self.config.session_cookie_name)?;
        self.decode(&token).map(|claims| claims.name)
    }

    /// `Set-Cookie` value that removes the session cookie
    pub fn clear(&self) -> String {
        self.cookie_config().build_delete_cookie()
    }

    fn signed_message(&self, payload: &str) -> String {
        format!("{}|{}", self.config.session_cookie_name, payload)
    }

    fn cookie_config(&self) -> CookieConfig {
        CookieConfig {
            name: self.config.session_cookie_name.clone(),
            secure: self.config.cookie_secure,
            http_only: true,
            same_site: self.config.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: None,
        }
    }
}
