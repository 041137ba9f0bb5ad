//! User Name Value Object
//!
//! The login handle. Stored and compared exactly as typed, apart from
//! surrounding whitespace, which is trimmed.
//!
//! ## Invariants
//! - not empty after trimming
//! - at most [`USER_NAME_MAX_LENGTH`] characters
//! - no control characters

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 64;

/// Error returned when user name validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserNameError {
    /// Empty, or only whitespace
    Empty,

    /// Longer than USER_NAME_MAX_LENGTH
    TooLong { length: usize, max: usize },

    /// Contains a control character
    InvalidCharacter { position: usize },
}

impl fmt::Display for UserNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "User name cannot be empty"),
            Self::TooLong { length, max } => {
                write!(f, "User name is too long ({length} chars, maximum {max})")
            }
            Self::InvalidCharacter { position } => {
                write!(f, "User name contains a control character at position {position}")
            }
        }
    }
}

impl std::error::Error for UserNameError {}

/// Validated, trimmed user name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Trim and validate user input
    ///
    /// ## Examples
    /// ```rust
    /// use auth::domain::value_object::user_name::UserName;
    ///
    /// let name = UserName::new("  alice ").unwrap();
    /// assert_eq!(name.as_str(), "alice");
    /// assert!(UserName::new("   ").is_err());
    /// ```
    pub fn new(raw: impl AsRef<str>) -> Result<Self, UserNameError> {
        let trimmed = raw.as_ref().trim();

        if trimmed.is_empty() {
            return Err(UserNameError::Empty);
        }

        let length = trimmed.chars().count();
        if length > USER_NAME_MAX_LENGTH {
            return Err(UserNameError::TooLong {
                length,
                max: USER_NAME_MAX_LENGTH,
            });
        }

        if let Some(position) = trimmed.chars().position(char::is_control) {
            return Err(UserNameError::InvalidCharacter { position });
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Rebuild from a stored value
    ///
    /// Rows written before validation tightened still load, as long as
    /// they are not blank.
    pub fn from_db(stored: &str) -> Result<Self, UserNameError> {
        if stored.trim().is_empty() {
            return Err(UserNameError::Empty);
        }
        Ok(Self(stored.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserName {
    type Error = UserNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserName> for String {
    fn from(value: UserName) -> Self {
        value.0
    }
}
