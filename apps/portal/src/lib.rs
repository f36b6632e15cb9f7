//! Client-side pages of the clinic portal: the role-gated header, the doctor
//! directory and the login/registration flows, wired against the clinic REST
//! backend.

pub mod pages;
pub mod telemetry;

use dotenv::dotenv;
use tracing::info;

use auth_cell::LoginService;
use session_cell::KeyValueStore;
use shared_config::PortalConfig;

pub use pages::{AdminDashboard, DashboardShell, LandingPage, PageState, PatientDashboard};

/// Entry point that hands out pages bound to one configuration.
#[derive(Debug, Clone)]
pub struct Portal {
    config: PortalConfig,
}

impl Portal {
    pub fn new(config: PortalConfig) -> Self {
        Self { config }
    }

    /// Loads `.env` (if present) and reads the configuration from the environment.
    pub fn from_env() -> Self {
        dotenv().ok();
        let config = PortalConfig::from_env();
        info!("Clinic portal configured against {}", config.api_base_url);
        Self { config }
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    pub fn landing<S: KeyValueStore>(&self, store: S) -> LandingPage<S, LoginService> {
        LandingPage::new(&self.config, store)
    }

    pub fn admin_dashboard<S: KeyValueStore>(&self, store: S) -> AdminDashboard<S> {
        AdminDashboard::new(&self.config, store)
    }

    pub fn patient_dashboard<S: KeyValueStore>(&self, store: S) -> PatientDashboard<S, LoginService> {
        PatientDashboard::new(&self.config, store)
    }
}
