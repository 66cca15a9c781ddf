//! Login/signup against a local mock of the auth endpoints.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use planner_core::model::SessionStatus;
use planner_core::time::fixed_clock;
use serde_json::{Value, json};
use services::{
    AuthConfig, AuthMode, AuthService, AuthServiceError, Credentials, HttpAuthApi, SessionStore,
};
use storage::repository::{InMemoryRepository, SessionRepository};

#[derive(Clone)]
struct MockState {
    hits: Arc<AtomicUsize>,
}

async fn login(State(state): State<MockState>, axum::Json(body): axum::Json<Value>) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    let email = body.get("email").and_then(Value::as_str).unwrap_or_default();
    let password = body.get("password").and_then(Value::as_str).unwrap_or_default();
    match (email, password) {
        ("a@b.com", "x") => axum::Json(json!({
            "user": { "email": "a@b.com" },
            "token": "t1"
        }))
        .into_response(),
        ("html@b.com", _) => (StatusCode::BAD_GATEWAY, "<html>bad gateway</html>").into_response(),
        ("quiet@b.com", _) => (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(json!({}))).into_response(),
        _ => (
            StatusCode::UNAUTHORIZED,
            axum::Json(json!({ "message": "Invalid credentials" })),
        )
            .into_response(),
    }
}

async fn signup(State(state): State<MockState>, axum::Json(body): axum::Json<Value>) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    let email = body.get("email").cloned().unwrap_or(Value::Null);
    axum::Json(json!({ "user": { "email": email }, "token": "fresh" })).into_response()
}

struct Harness {
    service: AuthService,
    repo: InMemoryRepository,
    hits: Arc<AtomicUsize>,
}

async fn spawn_harness() -> Harness {
    let hits = Arc::new(AtomicUsize::new(0));
    let router = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/signup", post(signup))
        .with_state(MockState { hits: hits.clone() });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock auth server");
    let addr = listener.local_addr().expect("mock addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("mock auth server");
    });

    let config = AuthConfig::new(&format!("http://{addr}"), AuthConfig::DEFAULT_TIMEOUT)
        .expect("valid base url");
    let api = HttpAuthApi::new(config).expect("http client");
    let repo = InMemoryRepository::new();
    let sessions = Arc::new(SessionStore::new(fixed_clock(), Arc::new(repo.clone())));
    sessions.restore().await.expect("restore");

    Harness {
        service: AuthService::new(Arc::new(api), sessions),
        repo,
        hits,
    }
}

#[tokio::test]
async fn successful_login_persists_session() {
    let h = spawn_harness().await;

    let session = h
        .service
        .submit(AuthMode::Login, Credentials::new("a@b.com", "x"))
        .await
        .unwrap();

    assert_eq!(session.token().expose(), "t1");
    assert!(h.service.sessions().is_authenticated());
    let stored = h.repo.load_session().await.unwrap().expect("persisted");
    assert_eq!(stored.identity().email(), Some("a@b.com"));
    assert_eq!(stored.token().expose(), "t1");
}

#[tokio::test]
async fn signup_uses_its_own_endpoint() {
    let h = spawn_harness().await;

    let session = h
        .service
        .submit(AuthMode::Signup, Credentials::new("new@b.com", "pw"))
        .await
        .unwrap();

    assert_eq!(session.token().expose(), "fresh");
    assert_eq!(session.identity().email(), Some("new@b.com"));
}

#[tokio::test]
async fn rejection_message_is_surfaced() {
    let h = spawn_harness().await;

    let err = h
        .service
        .submit(AuthMode::Login, Credentials::new("a@b.com", "wrong"))
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "Invalid credentials");
    assert_eq!(h.service.sessions().status(), SessionStatus::Anonymous);
    assert!(h.repo.load_session().await.unwrap().is_none());
}

#[tokio::test]
async fn rejection_without_message_is_generic() {
    let h = spawn_harness().await;

    let err = h
        .service
        .submit(AuthMode::Login, Credentials::new("quiet@b.com", "x"))
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "An error occurred");
}

#[tokio::test]
async fn non_json_error_body_reads_as_network_error() {
    let h = spawn_harness().await;

    let err = h
        .service
        .submit(AuthMode::Login, Credentials::new("html@b.com", "x"))
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "Network error. Please try again.");
    assert!(!h.service.sessions().is_authenticated());
}

#[tokio::test]
async fn blank_credentials_send_nothing() {
    let h = spawn_harness().await;

    let err = h
        .service
        .submit(AuthMode::Login, Credentials::new("", ""))
        .await
        .unwrap_err();

    assert!(matches!(err, AuthServiceError::MissingCredentials));
    assert_eq!(err.user_message(), "Email and password are required.");
    assert_eq!(h.hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unreachable_server_reads_as_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = AuthConfig::new(&format!("http://{addr}"), AuthConfig::DEFAULT_TIMEOUT).unwrap();
    let sessions = Arc::new(SessionStore::new(
        fixed_clock(),
        Arc::new(InMemoryRepository::new()),
    ));
    let service = AuthService::new(Arc::new(HttpAuthApi::new(config).unwrap()), sessions);

    let err = service
        .submit(AuthMode::Login, Credentials::new("a@b.com", "x"))
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), "Network error. Please try again.");
}
