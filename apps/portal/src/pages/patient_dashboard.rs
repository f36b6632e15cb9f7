use tracing::info;

use auth_cell::{Authenticator, LoginHandler, LoginService};
use header_cell::NavAction;
use patient_cell::PatientService;
use session_cell::{KeyValueStore, Session};
use shared_config::PortalConfig;
use shared_models::{LoginRequest, NewPatient, PortalError};
use shared_utils::{report_error, Modal, Notice, UiSurface};

use super::{DashboardShell, PageState};

pub const SIGNUP_SUCCESS_MESSAGE: &str = "Signup successful! Please log in.";

/// Patient-facing directory with login and signup.
pub struct PatientDashboard<S: KeyValueStore, A: Authenticator = LoginService> {
    shell: DashboardShell<S>,
    patients: PatientService,
    login: LoginHandler<A>,
}

impl<S: KeyValueStore> PatientDashboard<S, LoginService> {
    pub fn new(config: &PortalConfig, store: S) -> Self {
        Self::with_authenticator(config, store, LoginService::new(config))
    }
}

impl<S: KeyValueStore, A: Authenticator> PatientDashboard<S, A> {
    pub fn with_authenticator(config: &PortalConfig, store: S, authenticator: A) -> Self {
        Self {
            shell: DashboardShell::new(config, store),
            patients: PatientService::new(config),
            login: LoginHandler::new(authenticator),
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

    /// Patient login from the header modal.
    pub async fn login(
        &mut self,
        email: &str,
        password: &str,
        surface: &mut dyn UiSurface,
    ) -> Result<Session, PortalError> {
        let request = LoginRequest::Patient {
            email: email.to_string(),
            password: password.to_string(),
        };
        let session = self
            .login
            .submit(request, self.shell.session_context_mut(), surface)
            .await?;
        surface.close_modal(Modal::PatientLogin);
        Ok(session)
    }

    /// Registers the patient, then swaps the signup modal for the login one.
    pub async fn sign_up(&mut self, form: NewPatient, surface: &mut dyn UiSurface) -> Result<(), PortalError> {
        match self.patients.register_patient(&form).await {
            Ok(_) => {
                info!("Patient {} signed up", form.email);
                surface.notify(Notice::success(SIGNUP_SUCCESS_MESSAGE));
                surface.close_modal(Modal::PatientSignup);
                surface.open_modal(Modal::PatientLogin);
                Ok(())
            }
            Err(e) => {
                report_error(surface, "Signup failed", &e);
                Err(e)
            }
        }
    }

    pub fn render(&self) -> String {
        self.shell.render()
    }
}
