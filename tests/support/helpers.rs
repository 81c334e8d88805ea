// tests/support/helpers.rs
use super::mocks::{InMemoryBlog, SteppingClock};
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use blog_core::application::ports::time::Clock;
use blog_core::application::services::ApplicationServices;
use blog_core::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use blog_core::domain::category::CategoryRepository;
use blog_core::domain::comment::CommentRepository;
use blog_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

/// Services wired to a fresh in-memory store.
pub struct TestBlog {
    pub services: Arc<ApplicationServices>,
    pub store: Arc<InMemoryBlog>,
}

pub fn build_test_blog() -> TestBlog {
    let store = Arc::new(InMemoryBlog::with_default_categories());
    let article_write: Arc<dyn ArticleWriteRepository> = store.clone();
    let article_read: Arc<dyn ArticleReadRepository> = store.clone();
    let comment_repo: Arc<dyn CommentRepository> = store.clone();
    let category_repo: Arc<dyn CategoryRepository> = store.clone();
    let clock: Arc<dyn Clock> = Arc::new(SteppingClock::default());

    let services = Arc::new(ApplicationServices::new(
        article_write,
        article_read,
        comment_repo,
        category_repo,
        clock,
    ));

    TestBlog { services, store }
}

pub fn build_test_state() -> (HttpState, Arc<InMemoryBlog>) {
    let blog = build_test_blog();
    (
        HttpState {
            services: blog.services,
        },
        blog.store,
    )
}

pub fn make_test_router() -> Router {
    let (state, _) = build_test_state();
    build_router(state, &["http://localhost:3000".to_string()])
}

pub async fn send(app: &Router, req: Request<Body>) -> Response {
    app.clone().oneshot(req).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, req).await
}

pub async fn post_form(app: &Router, uri: &str, pairs: &[(&str, &str)]) -> Response {
    let body = serde_urlencoded::to_string(pairs).unwrap();
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();
    send(app, req).await
}

pub async fn read_json(resp: Response) -> Value {
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024).await.unwrap();
    let ct = parts
        .headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    serde_json::from_slice(&bytes).expect("expected valid json body")
}

/// Assert a 303 and return its `Location`.
pub fn assert_see_other(resp: &Response) -> String {
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .expect("redirect without location")
        .to_string()
}

/// Assert an `ErrorResponse` body with the expected status and error string,
/// returning the parsed body for further checks.
pub async fn assert_error_response(
    resp: Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> Value {
    assert_eq!(resp.status(), expected_status);
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field");
    json
}
