//! Server configuration from environment variables

use anyhow::{Context, bail};
use auth::AuthConfig;
use auth::application::config::MIN_SESSION_SECRET_LEN;
use base64::Engine;
use base64::engine::general_purpose;
use std::env;
use std::time::Duration;

const DEFAULT_DATABASE_URL: &str = "sqlite://users.sqlite3";
const DEFAULT_PORT: u16 = 8000;
const SESSION_ENCRYPTION_KEY_LEN: usize = 32;

/// Everything `main` needs to start serving
#[derive(Debug)]
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through `lookup`; empty values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = var("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let port = match var("PORT") {
            Some(port) => port.trim().parse().context("PORT must be a port number")?,
            None => DEFAULT_PORT,
        };

        let mut auth = match var("SESSION_SECRET") {
            Some(secret_b64) => {
                let secret = general_purpose::STANDARD
                    .decode(secret_b64.trim())
                    .context("SESSION_SECRET must be base64")?;
                if secret.len() < MIN_SESSION_SECRET_LEN {
                    bail!(
                        "SESSION_SECRET must decode to at least {} bytes (got {})",
                        MIN_SESSION_SECRET_LEN,
                        secret.len()
                    );
                }
                AuthConfig::from_secret(secret)
            }
            None => {
                tracing::warn!("SESSION_SECRET not set, sessions will not survive a restart");
                AuthConfig::with_random_secret()
            }
        };

        if let Some(key_b64) = var("SESSION_ENCRYPTION_KEY") {
            let key = general_purpose::STANDARD
                .decode(key_b64.trim())
                .context("SESSION_ENCRYPTION_KEY must be base64")?;
            if key.len() != SESSION_ENCRYPTION_KEY_LEN {
                bail!(
                    "SESSION_ENCRYPTION_KEY must decode to exactly {} bytes (got {})",
                    SESSION_ENCRYPTION_KEY_LEN,
                    key.len()
                );
            }
            auth.session_encryption_key = key;
        }

        auth.cookie_secure = match var("COOKIE_SECURE") {
            Some(flag) => flag
                .trim()
                .parse()
                .context("COOKIE_SECURE must be true or false")?,
            None => false,
        };

        if let Some(secs) = var("SESSION_MAX_AGE_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .context("SESSION_MAX_AGE_SECS must be a number of seconds")?;
            auth.session_max_age = Duration::from_secs(secs);
        }

        auth.password_pepper = var("PASSWORD_PEPPER").map(String::into_bytes);

        Ok(Self {
            database_url,
            port,
            auth,
        })
    }
}
