//! Auth Middleware
//!
//! Middleware for requiring a session on protected routes.

use axum::extract::{Request, State};
use axum::http::{StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::application::SessionCookie;
use crate::domain::value_object::user_name::UserName;

/// The signed-in user, inserted into request extensions by [`require_session`]
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_name: UserName,
}

/// Middleware that requires a valid session cookie
///
/// Without one the request never reaches the handler and the client is
/// sent to `/`.
pub async fn require_session(
    State(sessions): State<SessionCookie>,
    mut req: Request,
    next: Next,
) -> Response {
    let Some(user_name) = sessions.read(req.headers()) else {
        tracing::debug!(path = %req.uri().path(), "No valid session, redirecting");
        return (StatusCode::FOUND, [(header::LOCATION, "/")]).into_response();
    };

    req.extensions_mut().insert(CurrentUser { user_name });

    next.run(req).await
}
