//! Form DTOs

use serde::Deserialize;

/// `application/x-www-form-urlencoded` body of the login and register forms
///
/// Missing fields read as empty, so the handler decides where to redirect
/// instead of the extractor rejecting the request.
#[derive(Clone, Default, Deserialize)]
pub struct CredentialsForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub password: String,
}

impl CredentialsForm {
    /// Both fields were filled in
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.password.is_empty()
    }
}

impl std::fmt::Debug for CredentialsForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsForm")
            .field("name", &self.name)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
