use leptos::*;
use tracing::debug;

use doctor_cell::{DirectoryView, DoctorDirectory};
use header_cell::{Header, HeaderOutcome, HeaderRenderer, HeaderView, NavAction, SESSION_INVALID_MESSAGE};
use session_cell::{KeyValueStore, SessionContext};
use shared_config::PortalConfig;
use shared_models::{DoctorFilter, PortalError};
use shared_utils::{render_html, UiSurface};

use super::PageState;

/// Header plus doctor directory, the part every dashboard shares.
pub struct DashboardShell<S: KeyValueStore> {
    config: PortalConfig,
    ctx: SessionContext<S>,
    header: Option<Header>,
    directory: Option<DoctorDirectory>,
}

impl<S: KeyValueStore> DashboardShell<S> {
    pub fn new(config: &PortalConfig, store: S) -> Self {
        Self {
            config: config.clone(),
            ctx: SessionContext::new(store),
            header: None,
            directory: None,
        }
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    pub fn session_context(&self) -> &SessionContext<S> {
        &self.ctx
    }

    pub fn session_context_mut(&mut self) -> &mut SessionContext<S> {
        &mut self.ctx
    }

    pub fn header(&self) -> Option<&Header> {
        self.header.as_ref()
    }

    pub fn directory(&self) -> Option<&DoctorDirectory> {
        self.directory.as_ref()
    }

    /// Page load: header first, then every doctor.
    pub async fn on_ready(&mut self, surface: &mut dyn UiSurface) -> PageState {
        match HeaderRenderer::render(&mut self.ctx, surface) {
            HeaderOutcome::Rendered(header) => self.header = Some(header),
            HeaderOutcome::ForcedLogout => {
                self.clear();
                return PageState::Redirected;
            }
        }

        let session = match self.ctx.current() {
            Ok(session) => session,
            Err(e) => {
                self.recover(e, surface);
                return PageState::Redirected;
            }
        };

        // A failed reload keeps the cards already on the page.
        let mut directory = DoctorDirectory::new(&self.config, session);
        let result = directory.load_all(surface).await;
        if result.is_ok() || self.directory.is_none() {
            self.directory = Some(directory);
        }

        self.settle(result, surface)
    }

    pub async fn on_filter_change(
        &mut self,
        name: &str,
        time: &str,
        specialty: &str,
        surface: &mut dyn UiSurface,
    ) -> PageState {
        let filter = DoctorFilter::from_inputs(name, time, specialty);
        let result = match self.directory.as_mut() {
            Some(directory) => directory.filter(filter, surface).await,
            None => {
                debug!("Filter changed before the directory was ready");
                return PageState::Ready;
            }
        };

        self.settle(result, surface)
    }

    pub async fn on_card_action(&mut self, doctor_id: i64, surface: &mut dyn UiSurface) -> PageState {
        let result = match self.directory.as_mut() {
            Some(directory) => directory.activate(doctor_id, surface).await,
            None => return PageState::Ready,
        };

        self.settle(result, surface)
    }

    pub fn on_header_action(&mut self, action: NavAction, surface: &mut dyn UiSurface) {
        HeaderRenderer::dispatch(action, &mut self.ctx, surface);
    }

    /// Maps an action result to the page state; auth failures log the user out.
    pub(crate) fn settle(&mut self, result: Result<(), PortalError>, surface: &mut dyn UiSurface) -> PageState {
        match result {
            Err(e) if e.is_auth_failure() => {
                self.recover(e, surface);
                PageState::Redirected
            }
            // Other failures were already reported by the directory.
            _ => PageState::Ready,
        }
    }

    pub(crate) fn recover(&mut self, err: PortalError, surface: &mut dyn UiSurface) {
        debug!("Session rejected: {}", err);
        self.ctx.force_logout(surface, SESSION_INVALID_MESSAGE);
        self.clear();
    }

    fn clear(&mut self) {
        self.header = None;
        self.directory = None;
    }

    pub fn render(&self) -> String {
        let header = self.header.clone();
        let content = self.directory.as_ref().map(|directory| directory.content().clone());

        render_html(move || {
            let content = match content {
                Some(content) => view! { <DirectoryView content=content/> }.into_view(),
                None => view! { <div id="content"></div> }.into_view(),
            };

            view! {
                <div class="page">
                    {header.map(|header| view! { <HeaderView header=header/> })}
                    {content}
                </div>
            }
        })
    }
}
