use session_cell::{FileStore, KeyValueStore, MemoryStore, SessionContext, AUTH_TOKEN_KEY, USER_ROLE_KEY};
use shared_models::{routes, Role};
use shared_utils::test_utils::{RecordingSurface, SurfaceEvent};
use shared_utils::{Notice, NoticeLevel};

#[test]
fn logout_clears_both_keys_and_returns_to_landing() {
    let mut ctx = SessionContext::new(MemoryStore::new());
    let mut surface = RecordingSurface::new();
    ctx.begin(Role::Admin, "tok-a").unwrap();

    ctx.logout(&mut surface).unwrap();

    assert_eq!(ctx.store().get(AUTH_TOKEN_KEY).unwrap(), None);
    assert_eq!(ctx.store().get(USER_ROLE_KEY).unwrap(), None);
    assert_eq!(surface.navigations(), vec![routes::LANDING]);
}

#[test]
fn patient_logout_keeps_patient_role() {
    let mut ctx = SessionContext::new(MemoryStore::new());
    let mut surface = RecordingSurface::new();
    ctx.begin(Role::LoggedPatient, "tok-p").unwrap();

    ctx.logout_patient(&mut surface).unwrap();

    assert_eq!(ctx.store().get(AUTH_TOKEN_KEY).unwrap(), None);
    assert_eq!(ctx.current().unwrap().role(), Role::Patient);
    assert_eq!(surface.navigations(), vec![routes::PATIENT_DASHBOARD]);
}

#[test]
fn select_role_navigates_to_dashboard() {
    let mut ctx = SessionContext::new(MemoryStore::with_entries([(AUTH_TOKEN_KEY, "tok")]));
    let mut surface = RecordingSurface::new();

    ctx.select_role(Role::Doctor, &mut surface).unwrap();

    assert_eq!(ctx.stored_role().unwrap(), Role::Doctor);
    assert_eq!(surface.navigations(), vec![routes::DOCTOR_DASHBOARD]);
}

#[test]
fn force_logout_alerts_then_redirects() {
    let mut ctx = SessionContext::new(MemoryStore::with_entries([(USER_ROLE_KEY, "admin")]));
    let mut surface = RecordingSurface::new();

    ctx.force_logout(&mut surface, "Session expired or invalid login. Please log in again.");

    assert_eq!(ctx.store().get(USER_ROLE_KEY).unwrap(), None);
    assert_eq!(
        surface.events,
        vec![
            SurfaceEvent::Notice(Notice {
                level: NoticeLevel::Error,
                message: "Session expired or invalid login. Please log in again.".to_string(),
            }),
            SurfaceEvent::Navigate(routes::LANDING.to_string()),
        ]
    );
}

#[test]
fn file_backed_session_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("portal-session.json");

    {
        let mut ctx = SessionContext::new(FileStore::open(&path));
        ctx.begin(Role::LoggedPatient, "tok-file").unwrap();
    }

    let ctx = SessionContext::new(FileStore::open(&path));
    let session = ctx.current().unwrap();
    assert_eq!(session.role(), Role::LoggedPatient);
    assert_eq!(session.token(), Some("tok-file"));
}
