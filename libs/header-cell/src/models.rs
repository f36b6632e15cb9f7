use shared_models::{routes, Role};
use shared_utils::Modal;

pub const APP_TITLE: &str = "HealthCare System";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKind {
    Button,
    Link,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    OpenModal(Modal),
    Navigate(&'static str),
    SelectRole(Role),
    Logout,
    LogoutPatient,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub id: Option<&'static str>,
    pub label: &'static str,
    pub kind: NavKind,
    pub action: NavAction,
}

impl NavItem {
    fn button(id: Option<&'static str>, label: &'static str, action: NavAction) -> Self {
        Self { id, label, kind: NavKind::Button, action }
    }

    fn link(label: &'static str, action: NavAction) -> Self {
        Self { id: None, label, kind: NavKind::Link, action }
    }
}

/// Navigation for one role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub role: Role,
    pub items: Vec<NavItem>,
}

impl Header {
    pub fn for_role(role: Role) -> Self {
        let items = match role {
            Role::Admin => vec![
                NavItem::button(Some("addDocBtn"), "Add Doctor", NavAction::OpenModal(Modal::AddDoctor)),
                NavItem::link("Logout", NavAction::Logout),
            ],
            Role::Doctor => vec![
                NavItem::button(None, "Home", NavAction::SelectRole(Role::Doctor)),
                NavItem::link("Logout", NavAction::Logout),
            ],
            Role::Patient => vec![
                NavItem::button(Some("patientLogin"), "Login", NavAction::OpenModal(Modal::PatientLogin)),
                NavItem::button(Some("patientSignup"), "Sign Up", NavAction::OpenModal(Modal::PatientSignup)),
            ],
            Role::LoggedPatient => vec![
                NavItem::button(Some("home"), "Home", NavAction::Navigate(routes::LOGGED_PATIENT_DASHBOARD)),
                NavItem::button(
                    Some("patientAppointments"),
                    "Appointments",
                    NavAction::Navigate(routes::PATIENT_APPOINTMENTS),
                ),
                NavItem::link("Logout", NavAction::LogoutPatient),
            ],
        };

        Self { role, items }
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.items.iter().map(|item| item.label).collect()
    }
}

/// What the header renderer produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderOutcome {
    Rendered(Header),
    /// Session state was inconsistent; the user was sent to the landing page.
    ForcedLogout,
}

impl HeaderOutcome {
    pub fn header(&self) -> Option<&Header> {
        match self {
            HeaderOutcome::Rendered(header) => Some(header),
            HeaderOutcome::ForcedLogout => None,
        }
    }
}
