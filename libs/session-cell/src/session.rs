use tracing::{info, warn};

use shared_models::{routes, PortalError, Role};
use shared_utils::{Notice, UiSurface};

use crate::storage::KeyValueStore;

pub const AUTH_TOKEN_KEY: &str = "authToken";
pub const USER_ROLE_KEY: &str = "userRole";

/// Resolved `(role, token)` pair. A role that implies an authenticated user
/// always carries a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    role: Role,
    token: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self { role: Role::Patient, token: None }
    }

    pub fn resolve(role: Role, token: Option<String>) -> Result<Self, PortalError> {
        let token = token.filter(|t| !t.trim().is_empty());
        if role.requires_token() && token.is_none() {
            return Err(PortalError::MissingAuth(format!("role {} has no auth token", role)));
        }
        Ok(Self { role, token })
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn require_token(&self) -> Result<&str, PortalError> {
        self.token()
            .ok_or_else(|| PortalError::MissingAuth("Authentication token not found".to_string()))
    }
}

/// Owns the persisted session keys and every transition between them.
pub struct SessionContext<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionContext<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Persisted role; absent means the anonymous patient.
    pub fn stored_role(&self) -> Result<Role, PortalError> {
        match self.store.get(USER_ROLE_KEY)? {
            None => Ok(Role::Patient),
            Some(raw) => Ok(raw.parse().unwrap_or_else(|e| {
                warn!("Ignoring stored role ({}), treating visitor as patient", e);
                Role::Patient
            })),
        }
    }

    pub fn stored_token(&self) -> Result<Option<String>, PortalError> {
        self.store.get(AUTH_TOKEN_KEY)
    }

    /// Current session, or `MissingAuth` when the stored role needs a token that is absent.
    pub fn current(&self) -> Result<Session, PortalError> {
        let role = self.stored_role()?;
        let token = self.stored_token()?;
        Session::resolve(role, token)
    }

    pub fn store_token(&mut self, token: &str) -> Result<(), PortalError> {
        self.store.set(AUTH_TOKEN_KEY, token)
    }

    pub fn set_role(&mut self, role: Role) -> Result<(), PortalError> {
        self.store.set(USER_ROLE_KEY, role.as_str())
    }

    /// Persists the login result and returns the new session.
    pub fn begin(&mut self, role: Role, token: &str) -> Result<Session, PortalError> {
        let session = Session::resolve(role, Some(token.to_string()))?;
        self.store_token(token)?;
        self.set_role(role)?;
        info!("Session started for role {}", role);
        Ok(session)
    }

    /// Persists the role and sends the user to that role's dashboard.
    pub fn select_role(&mut self, role: Role, surface: &mut dyn UiSurface) -> Result<(), PortalError> {
        self.set_role(role)?;
        surface.navigate(role.dashboard_route());
        Ok(())
    }

    pub fn logout(&mut self, surface: &mut dyn UiSurface) -> Result<(), PortalError> {
        self.store.remove(AUTH_TOKEN_KEY)?;
        self.store.remove(USER_ROLE_KEY)?;
        info!("Logged out");
        surface.navigate(routes::LANDING);
        Ok(())
    }

    /// Drops the token but keeps the visitor on the patient pages.
    pub fn logout_patient(&mut self, surface: &mut dyn UiSurface) -> Result<(), PortalError> {
        self.store.remove(AUTH_TOKEN_KEY)?;
        self.set_role(Role::Patient)?;
        info!("Patient logged out");
        surface.navigate(routes::PATIENT_DASHBOARD);
        Ok(())
    }

    /// Recovery path for an untrustworthy session: clear the role, tell the
    /// user, go back to the landing page.
    pub fn force_logout(&mut self, surface: &mut dyn UiSurface, message: &str) {
        warn!("Forcing logout: {}", message);
        if let Err(e) = self.store.remove(USER_ROLE_KEY) {
            warn!("Could not clear stored role during forced logout: {}", e);
        }
        surface.notify(Notice::error(message));
        surface.navigate(routes::LANDING);
    }
}
