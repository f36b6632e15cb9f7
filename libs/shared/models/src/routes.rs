//! Page routes the portal navigates between.

pub const LANDING: &str = "/";
pub const ADMIN_DASHBOARD: &str = "/adminDashboard";
pub const DOCTOR_DASHBOARD: &str = "/doctorDashboard";
pub const PATIENT_DASHBOARD: &str = "/pages/patientDashboard.html";
pub const LOGGED_PATIENT_DASHBOARD: &str = "/pages/loggedPatientDashboard.html";
pub const PATIENT_APPOINTMENTS: &str = "/pages/patientAppointments.html";
