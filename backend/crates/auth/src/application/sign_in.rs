//! Sign In Use Case
//!
//! Checks a user name and password against the stored hash.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{user_name::UserName, user_password::RawPassword};
use crate::error::AuthResult;

/// Sign in input
pub struct SignInInput {
    pub user_name: String,
    pub password: String,
}

/// Sign in use case
pub struct SignInUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> SignInUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    /// Returns the authenticated user name, or `None` on bad credentials
    ///
    /// Unknown users and malformed input are bad credentials, not errors.
    /// Only storage failures surface as `Err`.
    pub async fn execute(&self, input: SignInInput) -> AuthResult<Option<UserName>> {
        let Ok(user_name) = UserName::new(&input.user_name) else {
            return Ok(None);
        };
        let Ok(raw_password) = RawPassword::new(input.password) else {
            return Ok(None);
        };

        let Some(user) = self.user_repo.find_by_user_name(&user_name).await? else {
            tracing::debug!(user_name = %user_name, "Sign in for unknown user");
            return Ok(None);
        };

        if !user.password_hash.verify(&raw_password, self.config.pepper()) {
            tracing::info!(user_name = %user.user_name, "Sign in failed: wrong password");
            return Ok(None);
        }

        tracing::info!(user_name = %user.user_name, "User signed in");

        Ok(Some(user.user_name))
    }

    /// Boolean form of [`execute`](Self::execute)
    pub async fn verify(&self, user_name: &str, password: &str) -> AuthResult<bool> {
        let input = SignInInput {
            user_name: user_name.to_string(),
            password: password.to_string(),
        };
        Ok(self.execute(input).await?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::sign_up::{SignUpInput, SignUpUseCase};
    use crate::infra::sqlite::SqliteUserRepository;
    use crate::tests::support::{memory_pool, test_config};

    async fn registered(user_name: &str, password: &str) -> SignInUseCase<SqliteUserRepository> {
        let repo = Arc::new(SqliteUserRepository::new(memory_pool().await));
        let config = Arc::new(test_config());

        SignUpUseCase::new(repo.clone(), config.clone())
            .execute(SignUpInput {
                user_name: user_name.to_string(),
                password: password.to_string(),
            })
            .await
            .unwrap();

        SignInUseCase::new(repo, config)
    }

    #[tokio::test]
    async fn test_correct_password_verifies() {
        let use_case = registered("alice", "correct horse").await;

        assert!(use_case.verify("alice", "correct horse").await.unwrap());
        assert!(use_case.verify("  alice ", "correct horse").await.unwrap());
    }

    #[tokio::test]
    async fn test_wrong_password_fails() {
        let use_case = registered("alice", "correct horse").await;

        assert!(!use_case.verify("alice", "battery staple").await.unwrap());
        assert!(!use_case.verify("alice", "").await.unwrap());
    }

    #[tokio::test]
    async fn test_unknown_user_is_false_not_error() {
        let use_case = registered("alice", "pw").await;

        assert!(!use_case.verify("bob", "pw").await.unwrap());
        assert!(!use_case.verify("", "pw").await.unwrap());
    }

    #[tokio::test]
    async fn test_returns_stored_name() {
        let use_case = registered("alice", "pw").await;

        let name = use_case
            .execute(SignInInput {
                user_name: " alice\t".to_string(),
                password: "pw".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(name.unwrap().as_str(), "alice");
    }

    #[tokio::test]
    async fn test_pepper_must_match() {
        let repo = Arc::new(SqliteUserRepository::new(memory_pool().await));
        let peppered = Arc::new(AuthConfig {
            password_pepper: Some(b"pepper".to_vec()),
            ..test_config()
        });

        SignUpUseCase::new(repo.clone(), peppered.clone())
            .execute(SignUpInput {
                user_name: "alice".to_string(),
                password: "pw".to_string(),
            })
            .await
            .unwrap();

        assert!(SignInUseCase::new(repo.clone(), peppered).verify("alice", "pw").await.unwrap());
        assert!(
            !SignInUseCase::new(repo, Arc::new(test_config()))
                .verify("alice", "pw")
                .await
                .unwrap()
        );
    }
}
