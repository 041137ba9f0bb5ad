//! User Entity
//!
//! One row of the `users` table.

use crate::domain::value_object::{user_name::UserName, user_password::UserPassword};

/// Registered user
///
/// Created on registration and never updated or deleted.
#[derive(Debug, Clone)]
pub struct User {
    /// Unique login handle
    pub user_name: UserName,
    /// Argon2id hash of the password
    pub password_hash: UserPassword,
}

impl User {
    pub fn new(user_name: UserName, password_hash: UserPassword) -> Self {
        Self {
            user_name,
            password_hash,
        }
    }
}
