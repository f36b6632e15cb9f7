use auth_cell::{Authenticator, LoginHandler, LoginService};
use session_cell::{KeyValueStore, Session, SessionContext};
use shared_config::PortalConfig;
use shared_models::{LoginRequest, PortalError, Role};
use shared_utils::{report_error, Modal, UiSurface};

/// Role picker with the admin and doctor login modals.
pub struct LandingPage<S: KeyValueStore, A: Authenticator = LoginService> {
    ctx: SessionContext<S>,
    login: LoginHandler<A>,
}

impl<S: KeyValueStore> LandingPage<S, LoginService> {
    pub fn new(config: &PortalConfig, store: S) -> Self {
        Self::with_authenticator(store, LoginService::new(config))
    }
}

impl<S: KeyValueStore, A: Authenticator> LandingPage<S, A> {
    pub fn with_authenticator(store: S, authenticator: A) -> Self {
        Self {
            ctx: SessionContext::new(store),
            login: LoginHandler::new(authenticator),
        }
    }

    pub fn session_context(&self) -> &SessionContext<S> {
        &self.ctx
    }

    pub fn open_admin_login(&self, surface: &mut dyn UiSurface) {
        surface.open_modal(Modal::AdminLogin);
    }

    pub fn open_doctor_login(&self, surface: &mut dyn UiSurface) {
        surface.open_modal(Modal::DoctorLogin);
    }

    /// Browses as an anonymous patient.
    pub fn continue_as_patient(&mut self, surface: &mut dyn UiSurface) {
        if let Err(e) = self.ctx.select_role(Role::Patient, surface) {
            report_error(surface, "Could not update session", &e);
        }
    }

    /// Submits a login form and closes its modal on success.
    pub async fn submit_login(
        &mut self,
        request: LoginRequest,
        surface: &mut dyn UiSurface,
    ) -> Result<Session, PortalError> {
        let modal = match request {
            LoginRequest::Admin { .. } => Modal::AdminLogin,
            LoginRequest::Doctor { .. } => Modal::DoctorLogin,
            LoginRequest::Patient { .. } => Modal::PatientLogin,
        };

        let session = self.login.submit(request, &mut self.ctx, surface).await?;
        surface.close_modal(modal);
        Ok(session)
    }
}
