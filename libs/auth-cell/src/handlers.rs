use tracing::{error, info, warn};

use session_cell::{KeyValueStore, Session, SessionContext};
use shared_models::{LoginRequest, PortalError};
use shared_utils::{Notice, UiSurface};

use crate::services::Authenticator;

/// Shared flow behind the admin, doctor and patient login forms.
pub struct LoginHandler<A: Authenticator> {
    authenticator: A,
}

impl<A: Authenticator> LoginHandler<A> {
    pub fn new(authenticator: A) -> Self {
        Self { authenticator }
    }

    /// On success the token and role are persisted and the user lands on the
    /// role's dashboard. Failures are shown to the user and returned.
    pub async fn submit<S: KeyValueStore>(
        &self,
        request: LoginRequest,
        ctx: &mut SessionContext<S>,
        surface: &mut dyn UiSurface,
    ) -> Result<Session, PortalError> {
        let who = request.resource();
        let role = request.role();

        let token = match self.authenticator.authenticate(&request).await {
            Ok(token) => token,
            Err(e @ PortalError::Status { .. }) => {
                warn!("{} login rejected: {}", who, e);
                surface.notify(Notice::error(format!("Invalid {} credentials. Please try again.", who)));
                return Err(e);
            }
            Err(e) => {
                error!("Error during {} login: {}", who, e);
                surface.notify(Notice::error(format!("Error during {} login. Please try again later.", who)));
                return Err(e);
            }
        };

        let session = ctx.begin(role, &token).map_err(|e| {
            error!("Could not persist {} session: {}", who, e);
            surface.notify(Notice::error(format!("Error during {} login. Please try again later.", who)));
            e
        })?;

        info!("{} login succeeded", who);
        surface.navigate(role.dashboard_route());
        Ok(session)
    }
}
