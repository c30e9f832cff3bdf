use super::*;
use crate::web::http::MockHttpClient;
use serde_json::json;
use std::sync::{Arc, Mutex};

// =========================================================
// 辅助类型
// =========================================================

/// 内存中的会话镜像，替代 Leptos 信号
#[derive(Clone, Default)]
struct MemorySession {
    inner: Arc<Mutex<SessionState>>,
}

impl MemorySession {
    fn with_status(status: SessionStatus) -> Self {
        let session = Self::default();
        session.inner.lock().unwrap().status = status;
        session
    }

    fn user(&self) -> Option<UserProfile> {
        self.inner.lock().unwrap().user.clone()
    }
}

impl SessionStore for MemorySession {
    fn status(&self) -> SessionStatus {
        self.inner.lock().unwrap().status
    }

    fn authenticate(&self, user: Option<UserProfile>) {
        let mut state = self.inner.lock().unwrap();
        state.status = SessionStatus::Authenticated;
        state.user = user;
    }

    fn expire(&self) {
        let mut state = self.inner.lock().unwrap();
        state.status = SessionStatus::Unauthenticated;
        state.user = None;
    }
}

const HEALTH: &str = "/api/users/health";
const LOGIN: &str = "/api/users/login";
const LOGOUT: &str = "/api/users/logout";

fn create_gate(store: MemorySession) -> SessionGate<MockHttpClient, MemorySession> {
    let hook_store = store.clone();
    let api = ApiClient::new(MockHttpClient::new(), "").on_unauthorized(move || hook_store.expire());
    SessionGate::new(api, store)
}

fn mock(gate: &SessionGate<MockHttpClient, MemorySession>) -> &MockHttpClient {
    gate.api.client_ref()
}

fn admin_json() -> serde_json::Value {
    json!({
        "id": 1,
        "username": "admin",
        "email": "admin@studiowiseman.co.uk",
        "first_name": "Admin",
        "last_name": "User",
        "full_name": "Admin User",
        "role": "admin"
    })
}

// =========================================================
// check_session 测试
// =========================================================

#[tokio::test]
async fn test_check_session_authenticates_on_json_success() {
    let gate = create_gate(MemorySession::default());
    mock(&gate).mock_json(
        HttpMethod::Get,
        HEALTH,
        200,
        json!({"status": "authenticated", "user": admin_json()}),
    );

    gate.check_session().await;

    assert_eq!(gate.store.status(), SessionStatus::Authenticated);
    assert!(gate.store.status().shows_shell());
    assert_eq!(
        gate.store.user().map(|u| u.display_name().to_string()),
        Some("Admin User".to_string())
    );
}

#[tokio::test]
async fn test_check_session_401_shows_login() {
    let gate = create_gate(MemorySession::with_status(SessionStatus::Authenticated));
    mock(&gate).mock_json(HttpMethod::Get, HEALTH, 401, json!({"error": "Unauthorized"}));

    gate.check_session().await;

    let status = gate.store.status();
    assert!(status.shows_login());
    assert!(!status.shows_shell());
}

#[tokio::test]
async fn test_check_session_non_json_shows_login() {
    let gate = create_gate(MemorySession::default());
    mock(&gate).mock_raw(
        HttpMethod::Get,
        HEALTH,
        200,
        Some("text/html"),
        "<html><body>login</body></html>",
    );

    gate.check_session().await;

    assert_eq!(gate.store.status(), SessionStatus::Unauthenticated);
}

#[tokio::test]
async fn test_check_session_network_error_shows_login() {
    let gate = create_gate(MemorySession::default());
    mock(&gate).mock_network_failure(HttpMethod::Get, HEALTH);

    gate.check_session().await;

    assert_eq!(gate.store.status(), SessionStatus::Unauthenticated);
}

#[tokio::test]
async fn test_check_session_missing_endpoint_never_assumes_authenticated() {
    let gate = create_gate(MemorySession::default());

    gate.check_session().await;

    assert_eq!(gate.store.status(), SessionStatus::Unauthenticated);
}

// =========================================================
// login 测试
// =========================================================

#[tokio::test]
async fn test_login_empty_username_sends_nothing() {
    let gate = create_gate(MemorySession::with_status(SessionStatus::Unauthenticated));

    let err = gate.login("", "secret").await.unwrap_err();

    assert_eq!(err, LoginError::MissingCredentials);
    assert_eq!(err.to_string(), "Please enter both username and password");
    assert_eq!(mock(&gate).request_count(), 0);
}

#[tokio::test]
async fn test_login_blank_password_sends_nothing() {
    let gate = create_gate(MemorySession::with_status(SessionStatus::Unauthenticated));

    let err = gate.login("admin", "   ").await.unwrap_err();

    assert_eq!(err, LoginError::MissingCredentials);
    assert_eq!(mock(&gate).request_count(), 0);
    assert_eq!(gate.store.status(), SessionStatus::Unauthenticated);
}

#[tokio::test]
async fn test_login_success_authenticates() {
    let gate = create_gate(MemorySession::with_status(SessionStatus::Unauthenticated));
    mock(&gate).mock_json(
        HttpMethod::Post,
        LOGIN,
        200,
        json!({"message": "Login successful", "user": admin_json()}),
    );

    gate.login(" admin ", "admin123").await.unwrap();

    assert_eq!(gate.store.status(), SessionStatus::Authenticated);
    let requests = mock(&gate).requests.borrow();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value =
        serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
    assert_eq!(body, json!({"username": "admin", "password": "admin123"}));
}

#[tokio::test]
async fn test_login_rejected_shows_server_error() {
    let gate = create_gate(MemorySession::with_status(SessionStatus::Unauthenticated));
    mock(&gate).mock_json(
        HttpMethod::Post,
        LOGIN,
        401,
        json!({"error": "Invalid username or password"}),
    );

    let err = gate.login("admin", "nope").await.unwrap_err();

    assert_eq!(
        err,
        LoginError::Rejected("Invalid username or password".to_string())
    );
    assert_eq!(gate.store.status(), SessionStatus::Unauthenticated);
}

#[tokio::test]
async fn test_login_unparseable_failure_is_generic() {
    let gate = create_gate(MemorySession::with_status(SessionStatus::Unauthenticated));
    mock(&gate).mock_raw(
        HttpMethod::Post,
        LOGIN,
        500,
        Some("text/html"),
        "<h1>Internal Server Error</h1>",
    );

    let err = gate.login("admin", "admin123").await.unwrap_err();

    assert_eq!(err.to_string(), "Login failed");
}

#[tokio::test]
async fn test_login_network_failure() {
    let gate = create_gate(MemorySession::with_status(SessionStatus::Unauthenticated));
    mock(&gate).mock_network_failure(HttpMethod::Post, LOGIN);

    let err = gate.login("admin", "admin123").await.unwrap_err();

    assert_eq!(err, LoginError::Unreachable);
}

// =========================================================
// logout 测试
// =========================================================

#[tokio::test]
async fn test_logout_post_success() {
    let gate = create_gate(MemorySession::with_status(SessionStatus::Authenticated));
    mock(&gate).mock_json(
        HttpMethod::Post,
        LOGOUT,
        200,
        json!({"message": "Logout successful"}),
    );

    gate.logout().await;

    assert_eq!(gate.store.status(), SessionStatus::Unauthenticated);
    assert_eq!(mock(&gate).request_count(), 1);
}

#[tokio::test]
async fn test_logout_retries_with_get_on_405() {
    let gate = create_gate(MemorySession::with_status(SessionStatus::Authenticated));
    mock(&gate).mock_raw(HttpMethod::Post, LOGOUT, 405, Some("text/html"), "");
    mock(&gate).mock_raw(HttpMethod::Get, LOGOUT, 200, None, "");

    gate.logout().await;

    let requests = mock(&gate).requests.borrow();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, HttpMethod::Post);
    assert_eq!(requests[1].method, HttpMethod::Get);
    assert_eq!(requests[1].body, None);
    assert_eq!(gate.store.status(), SessionStatus::Unauthenticated);
}

#[tokio::test]
async fn test_logout_clears_state_when_both_attempts_fail() {
    let gate = create_gate(MemorySession::with_status(SessionStatus::Authenticated));
    mock(&gate).mock_raw(HttpMethod::Post, LOGOUT, 405, None, "");
    mock(&gate).mock_network_failure(HttpMethod::Get, LOGOUT);

    gate.logout().await;

    assert_eq!(gate.store.status(), SessionStatus::Unauthenticated);
    assert_eq!(gate.store.user(), None);
}

#[tokio::test]
async fn test_logout_network_error_does_not_retry() {
    let gate = create_gate(MemorySession::with_status(SessionStatus::Authenticated));
    mock(&gate).mock_network_failure(HttpMethod::Post, LOGOUT);

    gate.logout().await;

    assert_eq!(mock(&gate).request_count(), 1);
    assert_eq!(gate.store.status(), SessionStatus::Unauthenticated);
}

#[tokio::test]
async fn test_logout_server_error_still_logs_out() {
    let gate = create_gate(MemorySession::with_status(SessionStatus::Authenticated));
    mock(&gate).mock_json(HttpMethod::Post, LOGOUT, 500, json!({"error": "boom"}));

    gate.logout().await;

    assert_eq!(mock(&gate).request_count(), 1);
    assert_eq!(gate.store.status(), SessionStatus::Unauthenticated);
}

#[test]
fn test_status_visibility() {
    assert!(!SessionStatus::Checking.shows_login());
    assert!(!SessionStatus::Checking.shows_shell());
    assert!(SessionStatus::Unauthenticated.shows_login());
    assert!(SessionStatus::Authenticated.shows_shell());
}
