use tracing::{debug, error};

use session_cell::{KeyValueStore, SessionContext};
use shared_models::PortalError;
use shared_utils::{report_error, UiSurface};

use crate::models::{Header, HeaderOutcome, NavAction};

pub const SESSION_INVALID_MESSAGE: &str = "Session expired or invalid login. Please log in again.";

pub struct HeaderRenderer;

impl HeaderRenderer {
    /// Builds the navigation for the persisted role, or forces a logout when
    /// the role needs a token that is not stored.
    pub fn render<S: KeyValueStore>(
        ctx: &mut SessionContext<S>,
        surface: &mut dyn UiSurface,
    ) -> HeaderOutcome {
        match ctx.current() {
            Ok(session) => {
                debug!("Rendering header for role {}", session.role());
                HeaderOutcome::Rendered(Header::for_role(session.role()))
            }
            Err(PortalError::MissingAuth(reason)) => {
                debug!("Header found inconsistent session: {}", reason);
                ctx.force_logout(surface, SESSION_INVALID_MESSAGE);
                HeaderOutcome::ForcedLogout
            }
            Err(e) => {
                // Storage itself failed; there is nothing trustworthy to render.
                error!("Could not read session for header: {}", e);
                ctx.force_logout(surface, SESSION_INVALID_MESSAGE);
                HeaderOutcome::ForcedLogout
            }
        }
    }

    /// Runs the action behind a navigation item.
    pub fn dispatch<S: KeyValueStore>(
        action: NavAction,
        ctx: &mut SessionContext<S>,
        surface: &mut dyn UiSurface,
    ) {
        let result = match action {
            NavAction::OpenModal(modal) => {
                surface.open_modal(modal);
                Ok(())
            }
            NavAction::Navigate(route) => {
                surface.navigate(route);
                Ok(())
            }
            NavAction::SelectRole(role) => ctx.select_role(role, surface),
            NavAction::Logout => ctx.logout(surface),
            NavAction::LogoutPatient => ctx.logout_patient(surface),
        };

        if let Err(e) = result {
            report_error(surface, "Could not update session", &e);
        }
    }
}
