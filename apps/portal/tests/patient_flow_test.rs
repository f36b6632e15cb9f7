use assert_matches::assert_matches;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use clinic_portal::pages::patient_dashboard::SIGNUP_SUCCESS_MESSAGE;
use clinic_portal::{PageState, Portal};
use header_cell::NavAction;
use session_cell::{FileStore, KeyValueStore, MemoryStore, AUTH_TOKEN_KEY, USER_ROLE_KEY};
use shared_models::{routes, LoginRequest, NewPatient, PortalError, Role};
use shared_utils::test_utils::{MockApiResponses, RecordingSurface, SurfaceEvent, TestConfig};
use shared_utils::Modal;

fn portal(server: &MockServer) -> Portal {
    Portal::new(TestConfig::with_base_url(server.uri()).to_portal_config())
}

async fn mount_doctor_list(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/doctor/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(MockApiResponses::sample_doctors()))
        .mount(server)
        .await;
}

#[tokio::test]
async fn anonymous_visitor_sees_login_prompt_cards() {
    let mock_server = MockServer::start().await;
    mount_doctor_list(&mock_server).await;

    let mut page = portal(&mock_server).patient_dashboard(MemoryStore::new());
    let mut surface = RecordingSurface::new();

    assert_eq!(page.on_ready(&mut surface).await, PageState::Ready);
    page.on_card_action(2, &mut surface).await;

    let html = page.render();
    assert!(html.contains(r#"id="patientLogin""#));
    assert!(html.contains(r#"id="patientSignup""#));
    assert_eq!(html.matches(r#"class="book-btn""#).count(), 3);
    assert_eq!(surface.last_message(), Some("Please log in to book an appointment."));
}

#[tokio::test]
async fn login_then_book_on_a_persisted_session() {
    let mock_server = MockServer::start().await;
    mount_doctor_list(&mock_server).await;
    Mock::given(method("POST"))
        .and(path("/patient/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "tok-p" })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/patient/tok-p"))
        .respond_with(ResponseTemplate::new(200).set_body_json(MockApiResponses::patient(7)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let session_file = dir.path().join("session.json");
    let portal = portal(&mock_server);

    {
        let mut page = portal.patient_dashboard(FileStore::open(&session_file));
        let mut surface = RecordingSurface::new();
        page.on_ready(&mut surface).await;
        page.on_header_action(NavAction::OpenModal(Modal::PatientLogin), &mut surface);

        let session = page.login("pat@example.com", "secret1", &mut surface).await.unwrap();

        assert_eq!(session.role(), Role::LoggedPatient);
        assert!(surface.events.contains(&SurfaceEvent::CloseModal(Modal::PatientLogin)));
        assert_eq!(surface.navigations(), vec![routes::LOGGED_PATIENT_DASHBOARD]);
    }

    // The logged-in dashboard is a fresh page reading the same storage.
    let mut page = portal.patient_dashboard(FileStore::open(&session_file));
    let mut surface = RecordingSurface::new();
    page.on_ready(&mut surface).await;

    let header = page.shell().header().unwrap();
    assert_eq!(header.labels(), vec!["Home", "Appointments", "Logout"]);

    page.on_card_action(1, &mut surface).await;

    let bookings = surface.bookings();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].doctor.id, 1);
    assert_eq!(bookings[0].patient.id, 7);
}

#[tokio::test]
async fn patient_logout_returns_to_anonymous_browsing() {
    let mock_server = MockServer::start().await;
    mount_doctor_list(&mock_server).await;

    let store = MemoryStore::with_entries([(USER_ROLE_KEY, "loggedPatient"), (AUTH_TOKEN_KEY, "tok-p")]);
    let mut page = portal(&mock_server).patient_dashboard(store);
    let mut surface = RecordingSurface::new();
    page.on_ready(&mut surface).await;

    page.on_header_action(NavAction::LogoutPatient, &mut surface);

    let ctx = page.shell().session_context();
    assert_eq!(ctx.store().get(AUTH_TOKEN_KEY).unwrap(), None);
    assert_eq!(ctx.current().unwrap().role(), Role::Patient);
    assert_eq!(surface.navigations(), vec![routes::PATIENT_DASHBOARD]);
}

#[tokio::test]
async fn sign_up_swaps_to_login_modal() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/patient/register"))
        .respond_with(ResponseTemplate::new(201).set_body_string("Patient registered successfully."))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut page = portal(&mock_server).patient_dashboard(MemoryStore::new());
    let mut surface = RecordingSurface::new();
    let form = NewPatient {
        name: "Pat Smith".to_string(),
        email: "pat@example.com".to_string(),
        password: "secret1".to_string(),
        phone: "5559876543".to_string(),
        address: "1 Main St".to_string(),
    };

    page.sign_up(form, &mut surface).await.unwrap();

    assert_eq!(
        surface.events,
        vec![
            SurfaceEvent::Notice(shared_utils::Notice::success(SIGNUP_SUCCESS_MESSAGE)),
            SurfaceEvent::CloseModal(Modal::PatientSignup),
            SurfaceEvent::OpenModal(Modal::PatientLogin),
        ]
    );
}

#[tokio::test]
async fn landing_admin_login_closes_modal_and_routes() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(MockApiResponses::login_success("tok-a")))
        .mount(&mock_server)
        .await;

    let mut page = portal(&mock_server).landing(MemoryStore::new());
    let mut surface = RecordingSurface::new();
    page.open_admin_login(&mut surface);

    let request = LoginRequest::Admin { username: "admin".to_string(), password: "admin123".to_string() };
    page.submit_login(request, &mut surface).await.unwrap();

    assert_eq!(
        surface.events,
        vec![
            SurfaceEvent::OpenModal(Modal::AdminLogin),
            SurfaceEvent::Navigate(routes::ADMIN_DASHBOARD.to_string()),
            SurfaceEvent::CloseModal(Modal::AdminLogin),
        ]
    );
}

#[tokio::test]
async fn landing_failed_doctor_login_keeps_modal_open() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/doctor/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(MockApiResponses::login_failure("Invalid credentials")))
        .mount(&mock_server)
        .await;

    let mut page = portal(&mock_server).landing(MemoryStore::new());
    let mut surface = RecordingSurface::new();
    page.open_doctor_login(&mut surface);

    let request = LoginRequest::Doctor { email: "ada@clinic.test".to_string(), password: "wrong1".to_string() };
    let result = page.submit_login(request, &mut surface).await;

    assert_matches!(result, Err(PortalError::Status { status: 401, .. }));
    assert!(!surface.events.contains(&SurfaceEvent::CloseModal(Modal::DoctorLogin)));
    assert_eq!(surface.error_messages(), vec!["Invalid doctor credentials. Please try again."]);
}

#[tokio::test]
async fn continue_as_patient_routes_to_patient_dashboard() {
    let mock_server = MockServer::start().await;
    let mut page = portal(&mock_server).landing(MemoryStore::new());
    let mut surface = RecordingSurface::new();

    page.continue_as_patient(&mut surface);

    assert_eq!(page.session_context().stored_role().unwrap(), Role::Patient);
    assert_eq!(surface.navigations(), vec![routes::PATIENT_DASHBOARD]);
}
