use assert_matches::assert_matches;
use async_trait::async_trait;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use auth_cell::{Authenticator, LoginHandler, LoginService};
use session_cell::{KeyValueStore, MemoryStore, SessionContext, AUTH_TOKEN_KEY, USER_ROLE_KEY};
use shared_models::{routes, LoginRequest, PortalError, Role};
use shared_utils::test_utils::{MockApiResponses, RecordingSurface, TestConfig};

fn handler_for(server: &MockServer) -> LoginHandler<LoginService> {
    LoginHandler::new(LoginService::new(&TestConfig::with_base_url(server.uri()).to_portal_config()))
}

fn admin() -> LoginRequest {
    LoginRequest::Admin { username: "admin".to_string(), password: "admin123".to_string() }
}

fn doctor() -> LoginRequest {
    LoginRequest::Doctor { email: "ada@clinic.test".to_string(), password: "pass123".to_string() }
}

#[tokio::test]
async fn admin_login_persists_token_and_role() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/login"))
        .and(body_json(json!({ "username": "admin", "password": "admin123" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(MockApiResponses::login_success("tok-admin")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut ctx = SessionContext::new(MemoryStore::new());
    let mut surface = RecordingSurface::new();

    let session = handler_for(&mock_server).submit(admin(), &mut ctx, &mut surface).await.unwrap();

    assert_eq!(session.role(), Role::Admin);
    assert_eq!(ctx.store().get(AUTH_TOKEN_KEY).unwrap().as_deref(), Some("tok-admin"));
    assert_eq!(ctx.store().get(USER_ROLE_KEY).unwrap().as_deref(), Some("admin"));
    assert_eq!(surface.navigations(), vec![routes::ADMIN_DASHBOARD]);
}

#[tokio::test]
async fn doctor_login_posts_email_credentials() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/doctor/login"))
        .and(body_json(json!({ "email": "ada@clinic.test", "password": "pass123" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(MockApiResponses::login_success("tok-doc")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut ctx = SessionContext::new(MemoryStore::new());
    let mut surface = RecordingSurface::new();

    handler_for(&mock_server).submit(doctor(), &mut ctx, &mut surface).await.unwrap();

    assert_eq!(ctx.current().unwrap().role(), Role::Doctor);
    assert_eq!(surface.navigations(), vec![routes::DOCTOR_DASHBOARD]);
}

#[tokio::test]
async fn patient_login_becomes_logged_patient() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/patient/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "tok-pat" })))
        .mount(&mock_server)
        .await;

    let mut ctx = SessionContext::new(MemoryStore::new());
    let mut surface = RecordingSurface::new();
    let request = LoginRequest::Patient { email: "pat@example.com".to_string(), password: "secret1".to_string() };

    handler_for(&mock_server).submit(request, &mut ctx, &mut surface).await.unwrap();

    assert_eq!(ctx.current().unwrap().role(), Role::LoggedPatient);
    assert_eq!(surface.navigations(), vec![routes::LOGGED_PATIENT_DASHBOARD]);
}

#[tokio::test]
async fn rejected_credentials_leave_session_untouched() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(MockApiResponses::login_failure("Incorrect password.")))
        .mount(&mock_server)
        .await;

    let mut ctx = SessionContext::new(MemoryStore::new());
    let mut surface = RecordingSurface::new();

    let result = handler_for(&mock_server).submit(admin(), &mut ctx, &mut surface).await;

    assert_matches!(result, Err(PortalError::Status { status: 401, .. }));
    assert!(ctx.store().is_empty());
    assert_eq!(surface.error_messages(), vec!["Invalid admin credentials. Please try again."]);
    assert!(surface.navigations().is_empty());
}

#[tokio::test]
async fn unreachable_backend_reports_generic_error() {
    let handler = LoginHandler::new(LoginService::new(
        &TestConfig::with_base_url("http://127.0.0.1:9").to_portal_config(),
    ));
    let mut ctx = SessionContext::new(MemoryStore::new());
    let mut surface = RecordingSurface::new();

    let result = handler.submit(doctor(), &mut ctx, &mut surface).await;

    assert_matches!(result, Err(PortalError::Network(_)));
    assert_eq!(surface.error_messages(), vec!["Error during doctor login. Please try again later."]);
}

#[tokio::test]
async fn success_without_token_is_malformed() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/doctor/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true, "message": "ok" })))
        .mount(&mock_server)
        .await;

    let mut ctx = SessionContext::new(MemoryStore::new());
    let mut surface = RecordingSurface::new();

    let result = handler_for(&mock_server).submit(doctor(), &mut ctx, &mut surface).await;

    assert_matches!(result, Err(PortalError::MalformedResponse(_)));
    assert!(ctx.store().is_empty());
}

struct FixedToken(&'static str);

#[async_trait]
impl Authenticator for FixedToken {
    async fn authenticate(&self, _request: &LoginRequest) -> Result<String, PortalError> {
        Ok(self.0.to_string())
    }
}

#[tokio::test]
async fn handler_accepts_any_authenticator() {
    let handler = LoginHandler::new(FixedToken("stub-token"));
    let mut ctx = SessionContext::new(MemoryStore::new());
    let mut surface = RecordingSurface::new();

    let session = handler.submit(admin(), &mut ctx, &mut surface).await.unwrap();

    assert_eq!(session.token(), Some("stub-token"));
}
