use tracing::{info, warn};

use doctor_cell::DoctorService;
use header_cell::NavAction;
use session_cell::KeyValueStore;
use shared_config::PortalConfig;
use shared_models::{Capability, NewDoctor, PortalError};
use shared_utils::{report_error, Modal, Notice, UiSurface};

use super::{DashboardShell, PageState};

pub const TOKEN_MISSING_MESSAGE: &str = "Authentication token not found. Please log in again.";
pub const DOCTOR_ADDED_MESSAGE: &str = "Doctor added successfully!";

/// Admin view: manage the doctor list.
pub struct AdminDashboard<S: KeyValueStore> {
    shell: DashboardShell<S>,
    doctors: DoctorService,
}

impl<S: KeyValueStore> AdminDashboard<S> {
    pub fn new(config: &PortalConfig, store: S) -> Self {
        Self {
            shell: DashboardShell::new(config, store),
            doctors: DoctorService::new(config),
        }
    }

    pub fn shell(&self) -> &DashboardShell<S> {
        &self.shell
    }

    pub async fn on_ready(&mut self, surface: &mut dyn UiSurface) -> PageState {
        self.shell.on_ready(surface).await
    }

    pub async fn on_filter_change(
        &mut self,
        name: &str,
        time: &str,
        specialty: &str,
        surface: &mut dyn UiSurface,
    ) -> PageState {
        self.shell.on_filter_change(name, time, specialty, surface).await
    }

    pub async fn on_card_action(&mut self, doctor_id: i64, surface: &mut dyn UiSurface) -> PageState {
        self.shell.on_card_action(doctor_id, surface).await
    }

    pub fn on_header_action(&mut self, action: NavAction, surface: &mut dyn UiSurface) {
        self.shell.on_header_action(action, surface);
    }

    pub fn open_add_doctor(&self, surface: &mut dyn UiSurface) {
        surface.open_modal(Modal::AddDoctor);
    }

    /// Submits the add-doctor form. On success the modal closes and the page reloads.
    pub async fn add_doctor(&mut self, form: NewDoctor, surface: &mut dyn UiSurface) -> Result<(), PortalError> {
        let token = match self.shell.session_context().stored_token() {
            Ok(Some(token)) if !token.trim().is_empty() => token,
            Ok(_) => {
                surface.notify(Notice::error(TOKEN_MISSING_MESSAGE));
                return Err(PortalError::MissingAuth(TOKEN_MISSING_MESSAGE.to_string()));
            }
            Err(e) => {
                report_error(surface, "Failed to add doctor", &e);
                return Err(e);
            }
        };

        let role = self.shell.session_context().stored_role()?;
        if !role.can(Capability::AddDoctor) {
            warn!("Role {} tried to add a doctor", role);
            let err = PortalError::Validation(format!("role {} cannot add doctors", role));
            report_error(surface, "Failed to add doctor", &err);
            return Err(err);
        }

        match self.doctors.save_doctor(&form, &token).await {
            Ok(_) => {
                info!("Added doctor {}", form.email);
                surface.notify(Notice::success(DOCTOR_ADDED_MESSAGE));
                surface.close_modal(Modal::AddDoctor);
                self.shell.on_ready(surface).await;
                Ok(())
            }
            Err(e) if e.is_auth_failure() => {
                self.shell.recover(e.clone(), surface);
                Err(e)
            }
            Err(e) => {
                report_error(surface, "Failed to add doctor", &e);
                Err(e)
            }
        }
    }

    pub fn render(&self) -> String {
        self.shell.render()
    }
}
