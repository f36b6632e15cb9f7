use reqwest::Method;
use serde::Deserialize;
use tracing::{debug, info};

use shared_api::ApiClient;
use shared_config::PortalConfig;
use shared_models::{Doctor, DoctorFilter, NewDoctor, PortalError};
use shared_utils::FormValidator;

#[derive(Debug, Deserialize)]
struct DoctorListResponse {
    doctors: Vec<Doctor>,
}

pub struct DoctorService {
    api: ApiClient,
}

impl DoctorService {
    pub fn new(config: &PortalConfig) -> Self {
        Self {
            api: ApiClient::new(config),
        }
    }

    pub fn with_client(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Every doctor the backend knows about.
    pub async fn list_doctors(&self) -> Result<Vec<Doctor>, PortalError> {
        debug!("Fetching all doctors");

        let response: DoctorListResponse = self.api.request(
            Method::GET,
            &["doctor", ""],
            None,
            None,
        ).await?;

        debug!("Fetched {} doctors", response.doctors.len());
        Ok(response.doctors)
    }

    /// Doctors matching the filter. An empty filter is the unfiltered listing.
    pub async fn filter_doctors(&self, filter: &DoctorFilter) -> Result<Vec<Doctor>, PortalError> {
        if filter.is_empty() {
            return self.list_doctors().await;
        }

        debug!("Filtering doctors with: {:?}", filter);
        let [name, time, specialty] = filter.segments();

        let response: DoctorListResponse = self.api.request(
            Method::GET,
            &["doctor", "filter", name, time, specialty],
            None,
            None,
        ).await?;

        Ok(response.doctors)
    }

    pub async fn delete_doctor(&self, doctor_id: i64, auth_token: &str) -> Result<String, PortalError> {
        debug!("Deleting doctor: {}", doctor_id);

        let id = doctor_id.to_string();
        let message = self.api.request_text(
            Method::DELETE,
            &["doctor", "delete", &id, auth_token],
            Some(auth_token),
            None,
        ).await?;

        info!("Doctor {} deleted", doctor_id);
        Ok(message)
    }

    /// Validates and registers a new doctor; returns the backend's message.
    pub async fn save_doctor(&self, doctor: &NewDoctor, auth_token: &str) -> Result<String, PortalError> {
        FormValidator::new()?.validate_doctor(doctor)?;
        debug!("Registering doctor: {}", doctor.email);

        let message = self.api.request_text(
            Method::POST,
            &["doctor", "register", auth_token],
            Some(auth_token),
            Some(serde_json::to_value(doctor)?),
        ).await?;

        info!("Doctor registered: {}", doctor.email);
        Ok(message)
    }
}
