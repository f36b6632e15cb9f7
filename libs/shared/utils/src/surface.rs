//! Browser side effects the views trigger, behind one trait.

use tracing::error;

use shared_models::{Doctor, Patient, PortalError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// Non-blocking message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    AddDoctor,
    AdminLogin,
    DoctorLogin,
    PatientLogin,
    PatientSignup,
}

impl Modal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Modal::AddDoctor => "addDoctor",
            Modal::AdminLogin => "adminLogin",
            Modal::DoctorLogin => "doctorLogin",
            Modal::PatientLogin => "patientLogin",
            Modal::PatientSignup => "patientSignup",
        }
    }
}

/// Data handed to the booking overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingOverlay {
    pub doctor: Doctor,
    pub patient: Patient,
}

pub trait UiSurface {
    fn notify(&mut self, notice: Notice);
    fn navigate(&mut self, route: &str);
    fn open_modal(&mut self, modal: Modal);
    fn close_modal(&mut self, modal: Modal);
    fn open_booking(&mut self, overlay: BookingOverlay);
}

/// Reports a failed action: one error notice plus an error event.
pub fn report_error(surface: &mut dyn UiSurface, context: &str, err: &PortalError) {
    error!("{}: {}", context, err);
    surface.notify(Notice::error(format!("{}: {}", context, err.user_message())));
}
