//! Session Claims
//!
//! The identity assertion carried inside the signed `session` cookie.
//! Nothing is stored server-side; the signature is the only proof.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::value_object::user_name::UserName;

/// Allowed clock skew for tokens issued "in the future"
const MAX_CLOCK_SKEW_SECS: i64 = 60;

/// Claims serialized into the cookie payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// User name of the session holder
    pub name: UserName,
    /// Issued-at, Unix seconds
    pub iat: i64,
}

impl SessionClaims {
    /// Claims for a session starting now
    pub fn new(name: UserName) -> Self {
        Self {
            name,
            iat: Utc::now().timestamp(),
        }
    }

    /// Whether the claims are older than `max_age` at `now` (Unix seconds)
    ///
    /// Claims issued further in the future than the allowed skew count as
    /// expired too.
    pub fn is_expired_at(&self, max_age: Duration, now: i64) -> bool {
        let max_age = i64::try_from(max_age.as_secs()).unwrap_or(i64::MAX);
        let age = now.saturating_sub(self.iat);
        age > max_age || age < -MAX_CLOCK_SKEW_SECS
    }

    pub fn is_expired(&self, max_age: Duration) -> bool {
        self.is_expired_at(max_age, Utc::now().timestamp())
    }
}
