use reqwest::Method;
use tracing::{debug, info};

use shared_api::ApiClient;
use shared_config::PortalConfig;
use shared_models::{NewPatient, Patient, PortalError};
use shared_utils::FormValidator;

pub struct PatientService {
    api: ApiClient,
}

impl PatientService {
    pub fn new(config: &PortalConfig) -> Self {
        Self {
            api: ApiClient::new(config),
        }
    }

    pub fn with_client(api: ApiClient) -> Self {
        Self { api }
    }

    /// Profile of the patient the token belongs to.
    pub async fn get_patient_details(&self, auth_token: &str) -> Result<Patient, PortalError> {
        debug!("Fetching profile for the signed-in patient");

        self.api.request(
            Method::GET,
            &["patient", auth_token],
            Some(auth_token),
            None,
        ).await
    }

    /// Registers a new patient account and returns the backend's message.
    pub async fn register_patient(&self, request: &NewPatient) -> Result<String, PortalError> {
        FormValidator::new()?.validate_patient(request)?;
        debug!("Registering patient: {}", request.email);

        let message = self.api.request_text(
            Method::POST,
            &["patient", "register"],
            None,
            Some(serde_json::to_value(request)?),
        ).await?;

        info!("Patient registered: {}", request.email);
        Ok(message)
    }
}
