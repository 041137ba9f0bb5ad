//! HTTP Handlers

use axum::extract::rejection::FormRejection;
use axum::extract::{Extension, Form, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{SessionCookie, SignInInput, SignInUseCase, SignUpInput, SignUpUseCase};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::CredentialsForm;
use crate::presentation::middleware::CurrentUser;
use crate::presentation::pages;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub sessions: SessionCookie,
}

/// 302 to `location`
fn found(location: &'static str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

/// 302 to `location`, setting or clearing the session cookie on the way
fn found_with_cookie(location: &'static str, set_cookie: String) -> Response {
    (
        StatusCode::FOUND,
        [
            (header::SET_COOKIE, set_cookie),
            (header::LOCATION, location.to_string()),
        ],
    )
        .into_response()
}

/// Submitted credentials, or empty ones when the body is not a urlencoded form
fn credentials(form: Result<Form<CredentialsForm>, FormRejection>) -> CredentialsForm {
    match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::debug!(reason = %rejection, "Unreadable credentials form");
            CredentialsForm::default()
        }
    }
}

/// GET /
pub async fn index() -> Response {
    found("/login")
}

// ============================================================================
// Login
// ============================================================================

/// GET /login
pub async fn login_page() -> Html<String> {
    Html(pages::login_page())
}

/// POST /login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    form: Result<Form<CredentialsForm>, FormRejection>,
) -> AuthResult<Response>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let form = credentials(form);
    if !form.is_complete() {
        return Ok(found("/"));
    }

    let use_case = SignInUseCase::new(state.repo.clone(), state.config.clone());

    let input = SignInInput {
        user_name: form.name,
        password: form.password,
    };

    match use_case.execute(input).await? {
        Some(user_name) => {
            let cookie = state.sessions.issue(&user_name)?;
            Ok(found_with_cookie("/dashboard", cookie))
        }
        None => Ok(found("/")),
    }
}

/// POST /logout
pub async fn logout<R>(State(state): State<AuthAppState<R>>) -> Response
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    found_with_cookie("/", state.sessions.clear())
}

// ============================================================================
// Register
// ============================================================================

/// GET /register
pub async fn register_page() -> Html<String> {
    Html(pages::register_page())
}

/// POST /register
///
/// Rejected input goes back to the form. Storage and hashing failures are
/// error responses.
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    form: Result<Form<CredentialsForm>, FormRejection>,
) -> AuthResult<Response>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let form = credentials(form);
    if !form.is_complete() {
        return Ok(found("/register"));
    }

    let use_case = SignUpUseCase::new(state.repo.clone(), state.config.clone());

    let input = SignUpInput {
        user_name: form.name,
        password: form.password,
    };

    match use_case.execute(input).await {
        Ok(output) => {
            let cookie = state.sessions.issue(&output.user_name)?;
            Ok(found_with_cookie("/dashboard", cookie))
        }
        Err(e) if e.is_rejection() => {
            tracing::info!(reason = %e, "Registration rejected");
            Ok(found("/register"))
        }
        Err(e) => Err(e),
    }
}

// ============================================================================
// Gated pages
// ============================================================================

/// GET /dashboard
pub async fn dashboard(Extension(user): Extension<CurrentUser>) -> Html<String> {
    Html(pages::dashboard_page(user.user_name.as_str()))
}

/// GET /profile
pub async fn profile(Extension(user): Extension<CurrentUser>) -> Html<String> {
    Html(pages::profile_page(user.user_name.as_str()))
}
