//! Router-level flow tests and shared test fixtures

pub(crate) mod support {
    use sqlx::SqlitePool;
    use sqlx::sqlite::SqlitePoolOptions;

    use crate::application::config::AuthConfig;

    /// Migrated in-memory database
    ///
    /// One connection, since every `:memory:` connection is its own database.
    pub async fn memory_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory sqlite");

        sqlx::migrate!("../../../database/migrations")
            .run(&pool)
            .await
            .expect("migrations");

        pool
    }

    /// Deterministic secret, plain-HTTP cookie
    pub fn test_config() -> AuthConfig {
        AuthConfig {
            cookie_secure: false,
            ..AuthConfig::from_secret(b"test-secret-test-secret-test-sec".to_vec())
        }
    }
}

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use tower::ServiceExt;

use crate::infra::sqlite::SqliteUserRepository;
use crate::presentation::router::auth_router;
use support::{memory_pool, test_config};

async fn app() -> Router {
    auth_router(SqliteUserRepository::new(memory_pool().await), test_config())
}

fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

/// `name=value` pair of the Set-Cookie header, ready to send back
fn session_cookie(response: &Response) -> Option<String> {
    let set_cookie = response.headers().get(header::SET_COOKIE)?.to_str().ok()?;
    set_cookie.split(';').next().map(str::to_string)
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_index_redirects_to_login() {
    let response = app().await.oneshot(get("/", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_forms_render() {
    let app = app().await;

    let response = app.clone().oneshot(get("/login", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains(r#"action="/login""#));

    let response = app.oneshot(get("/register", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains(r#"action="/register""#));
}

#[tokio::test]
async fn test_gated_routes_redirect_without_session() {
    let app = app().await;

    for path in ["/dashboard", "/profile"] {
        let response = app.clone().oneshot(get(path, None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::FOUND, "{path}");
        assert_eq!(location(&response), "/");
    }
}

#[tokio::test]
async fn test_register_signs_in() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(post_form("/register", "name=alice&password=s3cret"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/dashboard");
    let cookie = session_cookie(&response).expect("session cookie");
    assert!(cookie.starts_with("session="));

    let response = app
        .clone()
        .oneshot(get("/dashboard", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("alice"));

    let response = app.oneshot(get("/profile", Some(&cookie))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("<dd>alice</dd>"));
}

#[tokio::test]
async fn test_login_flow() {
    let app = app().await;
    app.clone()
        .oneshot(post_form("/register", "name=alice&password=s3cret"))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(post_form("/login", "name=alice&password=wrong"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/");
    assert!(session_cookie(&response).is_none());

    let response = app
        .clone()
        .oneshot(post_form("/login", "name=bob&password=s3cret"))
        .await
        .unwrap();
    assert_eq!(location(&response), "/");
    assert!(session_cookie(&response).is_none());

    let response = app
        .clone()
        .oneshot(post_form("/login", "name=+alice+&password=s3cret"))
        .await
        .unwrap();
    assert_eq!(location(&response), "/dashboard");
    let cookie = session_cookie(&response).expect("session cookie");

    let response = app.oneshot(get("/dashboard", Some(&cookie))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_empty_fields_redirect() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(post_form("/login", "name=alice&password="))
        .await
        .unwrap();
    assert_eq!(location(&response), "/");

    let response = app
        .clone()
        .oneshot(post_form("/register", "password=pw"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/register");
    assert!(session_cookie(&response).is_none());

    let response = app
        .oneshot(post_form("/register", "name=++&password=pw"))
        .await
        .unwrap();
    assert_eq!(location(&response), "/register");
}

#[tokio::test]
async fn test_non_form_posts_redirect() {
    let app = app().await;

    let bare = |uri: &str| {
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    };

    let response = app.clone().oneshot(bare("/login")).await.unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/");

    let response = app.clone().oneshot(bare("/register")).await.unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/register");

    let json = Request::builder()
        .method("POST")
        .uri("/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"name":"alice","password":"pw"}"#))
        .unwrap();
    let response = app.oneshot(json).await.unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/");
    assert!(session_cookie(&response).is_none());
}

#[tokio::test]
async fn test_duplicate_registration_redirects_back() {
    let app = app().await;
    app.clone()
        .oneshot(post_form("/register", "name=alice&password=one"))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(post_form("/register", "name=alice&password=two"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/register");
    assert!(session_cookie(&response).is_none());

    // The first password still works
    let response = app
        .oneshot(post_form("/login", "name=alice&password=one"))
        .await
        .unwrap();
    assert_eq!(location(&response), "/dashboard");
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(post_form("/logout", ""))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/");

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert!(set_cookie.contains("Max-Age=0"));

    let cleared = session_cookie(&response).unwrap();
    let response = app.oneshot(get("/dashboard", Some(&cleared))).await.unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn test_tampered_cookie_rejected() {
    let app = app().await;
    let response = app
        .clone()
        .oneshot(post_form("/register", "name=alice&password=pw"))
        .await
        .unwrap();
    let cookie = session_cookie(&response).unwrap();

    let (payload, _) = cookie.split_once('.').unwrap();
    let forged = format!("{}.AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA", payload);

    let response = app.oneshot(get("/dashboard", Some(&forged))).await.unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn test_user_name_is_escaped_in_pages() {
    let app = app().await;
    let response = app
        .clone()
        .oneshot(post_form(
            "/register",
            "name=%3Cb%3Ealice%3C%2Fb%3E&password=pw",
        ))
        .await
        .unwrap();
    let cookie = session_cookie(&response).unwrap();

    let response = app.oneshot(get("/dashboard", Some(&cookie))).await.unwrap();
    let body = body_text(response).await;
    assert!(body.contains("&lt;b&gt;alice&lt;/b&gt;"));
    assert!(!body.contains("<b>alice"));
}

#[tokio::test]
async fn test_storage_failure_is_error_response() {
    let pool = memory_pool().await;
    let app = auth_router(SqliteUserRepository::new(pool.clone()), test_config());
    pool.close().await;

    let response = app
        .oneshot(post_form("/register", "name=alice&password=pw"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert!(session_cookie(&response).is_none());
}
