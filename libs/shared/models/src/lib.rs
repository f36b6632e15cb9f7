pub mod auth;
pub mod doctor;
pub mod error;
pub mod patient;
pub mod routes;

pub use auth::{Capability, LoginRequest, LoginResponse, Role};
pub use doctor::{Doctor, DoctorFilter, NewDoctor};
pub use error::PortalError;
pub use patient::{NewPatient, Patient};
