use leptos::*;
use tracing::{debug, info, warn};

use patient_cell::PatientService;
use session_cell::Session;
use shared_config::PortalConfig;
use shared_models::{Doctor, DoctorFilter, PortalError};
use shared_utils::{render_html, report_error, BookingOverlay, Notice, UiSurface};

use crate::components::{CardAction, DoctorCard, DoctorCardView};
use crate::services::DoctorService;

pub const NO_RESULTS_MESSAGE: &str = "No doctors found with the given filters.";
pub const LOGIN_TO_BOOK_MESSAGE: &str = "Please log in to book an appointment.";
pub const DOCTOR_DELETED_MESSAGE: &str = "Doctor deleted successfully.";
pub const UNKNOWN_DOCTOR_CONTEXT: &str = "Doctor not found";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryContent {
    Cards(Vec<DoctorCard>),
    /// A filter matched nothing.
    NoResults,
}

/// The doctor list: one card per doctor, rendered for the session's role.
pub struct DoctorDirectory {
    doctors: DoctorService,
    patients: PatientService,
    session: Session,
    content: DirectoryContent,
}

impl DoctorDirectory {
    pub fn new(config: &PortalConfig, session: Session) -> Self {
        Self::with_services(DoctorService::new(config), PatientService::new(config), session)
    }

    pub fn with_services(doctors: DoctorService, patients: PatientService, session: Session) -> Self {
        Self {
            doctors,
            patients,
            session,
            content: DirectoryContent::Cards(Vec::new()),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn content(&self) -> &DirectoryContent {
        &self.content
    }

    pub fn cards(&self) -> &[DoctorCard] {
        match &self.content {
            DirectoryContent::Cards(cards) => cards,
            DirectoryContent::NoResults => &[],
        }
    }

    pub fn doctor_service(&self) -> &DoctorService {
        &self.doctors
    }

    /// Fetches every doctor and replaces the cards. On failure the current
    /// cards stay in place.
    pub async fn load_all(&mut self, surface: &mut dyn UiSurface) -> Result<(), PortalError> {
        match self.doctors.list_doctors().await {
            Ok(doctors) => {
                self.show(doctors);
                Ok(())
            }
            Err(e) => Err(self.fail(surface, "Error fetching doctors", e)),
        }
    }

    /// Applies the filter; an empty result shows the no-results placeholder.
    pub async fn filter(&mut self, filter: DoctorFilter, surface: &mut dyn UiSurface) -> Result<(), PortalError> {
        match self.doctors.filter_doctors(&filter).await {
            Ok(doctors) if doctors.is_empty() => {
                debug!("Filter {:?} matched no doctors", filter);
                self.content = DirectoryContent::NoResults;
                Ok(())
            }
            Ok(doctors) => {
                self.show(doctors);
                Ok(())
            }
            Err(e) => Err(self.fail(surface, "Error filtering doctors", e)),
        }
    }

    /// Runs the action on the card for `doctor_id`.
    pub async fn activate(&mut self, doctor_id: i64, surface: &mut dyn UiSurface) -> Result<(), PortalError> {
        let Some(card) = self.cards().iter().find(|card| card.doctor_id() == doctor_id).cloned() else {
            let err = PortalError::Validation(format!("no card for doctor {}", doctor_id));
            return Err(self.fail(surface, UNKNOWN_DOCTOR_CONTEXT, err));
        };

        match card.action() {
            Some(CardAction::Delete) => self.delete(card.doctor(), surface).await,
            Some(CardAction::PromptLogin) => {
                surface.notify(Notice::info(LOGIN_TO_BOOK_MESSAGE));
                Ok(())
            }
            Some(CardAction::Book) => self.book(card.doctor(), surface).await,
            None => {
                warn!("Card for doctor {} has no action for role {}", doctor_id, self.session.role());
                Ok(())
            }
        }
    }

    async fn delete(&mut self, doctor: &Doctor, surface: &mut dyn UiSurface) -> Result<(), PortalError> {
        let token = self.session.require_token()?;

        match self.doctors.delete_doctor(doctor.id, token).await {
            Ok(_) => {
                if let DirectoryContent::Cards(cards) = &mut self.content {
                    cards.retain(|card| card.doctor_id() != doctor.id);
                }
                info!("Removed card for doctor {}", doctor.id);
                surface.notify(Notice::success(DOCTOR_DELETED_MESSAGE));
                Ok(())
            }
            Err(e) => Err(self.fail(surface, "Error deleting doctor", e)),
        }
    }

    /// Fetches the caller's profile, then opens the overlay. The profile is
    /// fetched on every booking.
    async fn book(&self, doctor: &Doctor, surface: &mut dyn UiSurface) -> Result<(), PortalError> {
        let token = self.session.require_token()?;

        match self.patients.get_patient_details(token).await {
            Ok(patient) => {
                debug!("Opening booking overlay for doctor {} and patient {}", doctor.id, patient.id);
                surface.open_booking(BookingOverlay {
                    doctor: doctor.clone(),
                    patient,
                });
                Ok(())
            }
            Err(e) => Err(self.fail(surface, "Error fetching patient details", e)),
        }
    }

    fn show(&mut self, doctors: Vec<Doctor>) {
        let role = self.session.role();
        self.content = DirectoryContent::Cards(
            doctors
                .into_iter()
                .map(|doctor| DoctorCard::new(doctor, role))
                .collect(),
        );
    }

    /// Reports a failure unless it is an auth failure, which the page turns
    /// into a forced logout instead.
    fn fail(&self, surface: &mut dyn UiSurface, context: &str, err: PortalError) -> PortalError {
        if !err.is_auth_failure() {
            report_error(surface, context, &err);
        }
        err
    }

    pub fn render(&self) -> String {
        let content = self.content.clone();
        render_html(move || view! { <DirectoryView content=content/> })
    }
}

/// The `#content` region: the cards, or the placeholder for an empty filter.
#[component]
pub fn DirectoryView(content: DirectoryContent) -> impl IntoView {
    let body = match content {
        DirectoryContent::Cards(cards) => cards
            .into_iter()
            .map(|card| view! { <DoctorCardView card=card/> })
            .collect_view(),
        DirectoryContent::NoResults => view! { <p>{NO_RESULTS_MESSAGE}</p> }.into_view(),
    };

    view! { <div id="content">{body}</div> }
}
