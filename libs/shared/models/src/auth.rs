use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::routes;

/// Client-perceived identity class. Persisted under `userRole`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Anonymous visitor browsing the patient pages.
    #[serde(rename = "patient")]
    Patient,
    #[serde(rename = "loggedPatient")]
    LoggedPatient,
    #[serde(rename = "doctor")]
    Doctor,
    #[serde(rename = "admin")]
    Admin,
}

/// Actions a role is allowed to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    AddDoctor,
    DeleteDoctor,
    PromptLogin,
    SignUp,
    BookAppointment,
    ViewAppointments,
    DoctorHome,
    PatientHome,
    Logout,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Patient, Role::LoggedPatient, Role::Doctor, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Patient => "patient",
            Role::LoggedPatient => "loggedPatient",
            Role::Doctor => "doctor",
            Role::Admin => "admin",
        }
    }

    pub fn requires_token(&self) -> bool {
        match self {
            Role::Patient => false,
            Role::LoggedPatient | Role::Doctor | Role::Admin => true,
        }
    }

    pub fn capabilities(&self) -> &'static [Capability] {
        match self {
            Role::Admin => &[Capability::AddDoctor, Capability::DeleteDoctor, Capability::Logout],
            Role::Doctor => &[Capability::DoctorHome, Capability::Logout],
            Role::Patient => &[Capability::PromptLogin, Capability::SignUp],
            Role::LoggedPatient => &[
                Capability::PatientHome,
                Capability::ViewAppointments,
                Capability::BookAppointment,
                Capability::Logout,
            ],
        }
    }

    pub fn can(&self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }

    /// Where `select_role` lands after the role is persisted.
    pub fn dashboard_route(&self) -> &'static str {
        match self {
            Role::Admin => routes::ADMIN_DASHBOARD,
            Role::Doctor => routes::DOCTOR_DASHBOARD,
            Role::Patient => routes::PATIENT_DASHBOARD,
            Role::LoggedPatient => routes::LOGGED_PATIENT_DASHBOARD,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role: {}", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "patient" => Ok(Role::Patient),
            "loggedPatient" => Ok(Role::LoggedPatient),
            "doctor" => Ok(Role::Doctor),
            "admin" => Ok(Role::Admin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Credentials for one of the login flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginRequest {
    Admin { username: String, password: String },
    Doctor { email: String, password: String },
    Patient { email: String, password: String },
}

impl LoginRequest {
    /// Role granted when the login succeeds.
    pub fn role(&self) -> Role {
        match self {
            LoginRequest::Admin { .. } => Role::Admin,
            LoginRequest::Doctor { .. } => Role::Doctor,
            LoginRequest::Patient { .. } => Role::LoggedPatient,
        }
    }

    /// Path segment under the API base.
    pub fn resource(&self) -> &'static str {
        match self {
            LoginRequest::Admin { .. } => "admin",
            LoginRequest::Doctor { .. } => "doctor",
            LoginRequest::Patient { .. } => "patient",
        }
    }

    pub fn body(&self) -> serde_json::Value {
        match self {
            LoginRequest::Admin { username, password } => {
                serde_json::json!({ "username": username, "password": password })
            }
            LoginRequest::Doctor { email, password } | LoginRequest::Patient { email, password } => {
                serde_json::json!({ "email": email, "password": password })
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_strings_round_trip_through_storage_names() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>(), Ok(role));
        }
        assert_eq!("loggedPatient".parse::<Role>(), Ok(Role::LoggedPatient));
        assert!("superuser".parse::<Role>().is_err());
    }

    #[test]
    fn only_anonymous_patient_skips_token() {
        assert!(!Role::Patient.requires_token());
        assert!(Role::LoggedPatient.requires_token());
        assert!(Role::Doctor.requires_token());
        assert!(Role::Admin.requires_token());
    }

    #[test]
    fn capabilities_gate_destructive_actions() {
        assert!(Role::Admin.can(Capability::DeleteDoctor));
        assert!(!Role::Doctor.can(Capability::DeleteDoctor));
        assert!(Role::LoggedPatient.can(Capability::BookAppointment));
        assert!(!Role::Patient.can(Capability::BookAppointment));
        assert!(Role::Patient.can(Capability::PromptLogin));
    }

    #[test]
    fn admin_login_posts_username() {
        let request = LoginRequest::Admin {
            username: "root".into(),
            password: "secret".into(),
        };
        assert_eq!(request.role(), Role::Admin);
        assert_eq!(request.resource(), "admin");
        assert_eq!(request.body()["username"], "root");
    }

    #[test]
    fn patient_login_grants_logged_patient() {
        let request = LoginRequest::Patient {
            email: "p@example.com".into(),
            password: "secret".into(),
        };
        assert_eq!(request.role(), Role::LoggedPatient);
        assert_eq!(request.body()["email"], "p@example.com");
    }
}
