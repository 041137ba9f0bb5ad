//! SQLite Repository Implementation

use sqlx::SqlitePool;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{user_name::UserName, user_password::UserPassword};
use crate::error::{AuthError, AuthResult};

/// SQLite-backed user repository
#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Number of registered users
    pub async fn count(&self) -> AuthResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for SqliteUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        sqlx::query("INSERT INTO users (username, password) VALUES (?, ?)")
            .bind(user.user_name.as_str())
            .bind(user.password_hash.as_phc_string())
            .execute(&self.pool)
            .await
            .map_err(map_insert_error)?;

        Ok(())
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                username,
                password
            FROM users
            WHERE username = ?
            "#,
        )
        .bind(user_name.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE username = ?)",
        )
        .bind(user_name.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}

/// A concurrent registration can pass the existence check and still lose
/// the race at the UNIQUE constraint.
fn map_insert_error(err: sqlx::Error) -> AuthError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return AuthError::UserNameTaken;
        }
    }
    AuthError::Database(err)
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    username: String,
    password: String,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let user_name = UserName::from_db(&self.username)
            .map_err(|e| AuthError::Internal(format!("Invalid username: {}", e)))?;

        let password_hash = UserPassword::from_phc_string(self.password)
            .map_err(|e| AuthError::Internal(format!("{} ({})", e.message(), user_name)))?;

        Ok(User::new(user_name, password_hash))
    }
}
