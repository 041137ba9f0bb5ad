//! Auth Router

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::SessionCookie;
use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::infra::hmac_signer::HmacSessionSigner;
use crate::infra::sqlite::SqliteUserRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::require_session;

/// Create the Auth router with SQLite repository
pub fn auth_router(repo: SqliteUserRepository, config: AuthConfig) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let config = Arc::new(config);
    let state = AuthAppState {
        repo: Arc::new(repo),
        sessions: session_cookie(config.clone()),
        config,
    };

    let gated: Router<AuthAppState<R>> = Router::new()
        .route("/dashboard", get(handlers::dashboard))
        .route("/profile", get(handlers::profile))
        .route_layer(middleware::from_fn_with_state(
            state.sessions.clone(),
            require_session,
        ));

    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/login",
            get(handlers::login_page).post(handlers::login::<R>),
        )
        .route("/logout", post(handlers::logout::<R>))
        .route(
            "/register",
            get(handlers::register_page).post(handlers::register::<R>),
        )
        .merge(gated)
        .with_state(state)
}

/// HMAC-SHA256 signer keyed with `config.session_secret`
fn session_cookie(config: Arc<AuthConfig>) -> SessionCookie {
    let signer = Arc::new(HmacSessionSigner::new(config.session_secret.clone()));
    SessionCookie::new(signer, config)
}
