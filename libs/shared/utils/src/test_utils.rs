use serde_json::{json, Value};

use shared_config::PortalConfig;

use crate::surface::{BookingOverlay, Modal, Notice, NoticeLevel, UiSurface};

pub struct TestConfig {
    pub api_base_url: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080".to_string(),
        }
    }
}

impl TestConfig {
    pub fn with_base_url(api_base_url: impl Into<String>) -> Self {
        Self { api_base_url: api_base_url.into() }
    }

    pub fn to_portal_config(&self) -> PortalConfig {
        PortalConfig {
            api_base_url: self.api_base_url.clone(),
            request_timeout_secs: 5,
        }
    }
}

/// Everything a view asked the surface to do, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    Notice(Notice),
    Navigate(String),
    OpenModal(Modal),
    CloseModal(Modal),
    Booking(BookingOverlay),
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub events: Vec<SurfaceEvent>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<&Notice> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SurfaceEvent::Notice(n) => Some(n),
                _ => None,
            })
            .collect()
    }

    pub fn error_messages(&self) -> Vec<&str> {
        self.notices()
            .into_iter()
            .filter(|n| n.level == NoticeLevel::Error)
            .map(|n| n.message.as_str())
            .collect()
    }

    pub fn last_message(&self) -> Option<&str> {
        self.notices().last().map(|n| n.message.as_str())
    }

    pub fn navigations(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SurfaceEvent::Navigate(route) => Some(route.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn bookings(&self) -> Vec<&BookingOverlay> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SurfaceEvent::Booking(overlay) => Some(overlay),
                _ => None,
            })
            .collect()
    }
}

impl UiSurface for RecordingSurface {
    fn notify(&mut self, notice: Notice) {
        self.events.push(SurfaceEvent::Notice(notice));
    }

    fn navigate(&mut self, route: &str) {
        self.events.push(SurfaceEvent::Navigate(route.to_string()));
    }

    fn open_modal(&mut self, modal: Modal) {
        self.events.push(SurfaceEvent::OpenModal(modal));
    }

    fn close_modal(&mut self, modal: Modal) {
        self.events.push(SurfaceEvent::CloseModal(modal));
    }

    fn open_booking(&mut self, overlay: BookingOverlay) {
        self.events.push(SurfaceEvent::Booking(overlay));
    }
}

pub struct MockApiResponses;

impl MockApiResponses {
    pub fn doctor(id: i64, name: &str, specialty: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "email": format!("doctor{}@clinic.test", id),
            "phone": "5550000000",
            "specialty": specialty,
            "availableTimes": ["09:00-10:00", "14:00-15:00"]
        })
    }

    pub fn doctor_list(doctors: Vec<Value>) -> Value {
        json!({ "doctors": doctors })
    }

    pub fn sample_doctors() -> Value {
        Self::doctor_list(vec![
            Self::doctor(1, "Dr. Ada Byron", "Cardiology"),
            Self::doctor(2, "Dr. Grace Hopper", "Neurology"),
            Self::doctor(3, "Dr. Alan Turing", "Dermatology"),
        ])
    }

    pub fn patient(id: i64) -> Value {
        json!({
            "id": id,
            "name": "Pat Smith",
            "email": "pat@example.com",
            "phone": "5559876543",
            "address": "1 Main St"
        })
    }

    pub fn login_success(token: &str) -> Value {
        json!({
            "success": true,
            "message": "Login successful.",
            "token": token
        })
    }

    pub fn login_failure(message: &str) -> Value {
        json!({
            "success": false,
            "message": message
        })
    }
}
