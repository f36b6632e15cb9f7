use leptos::*;

use shared_models::{Doctor, Role};
use shared_utils::render_html;

/// The single action a card offers, decided by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    /// Admin: remove the doctor.
    Delete,
    /// Anonymous patient: ask them to log in first.
    PromptLogin,
    /// Logged-in patient: open the booking overlay.
    Book,
}

impl CardAction {
    pub fn for_role(role: Role) -> Option<Self> {
        match role {
            Role::Admin => Some(CardAction::Delete),
            Role::Patient => Some(CardAction::PromptLogin),
            Role::LoggedPatient => Some(CardAction::Book),
            Role::Doctor => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorCard {
    doctor: Doctor,
    action: Option<CardAction>,
}

impl DoctorCard {
    pub fn new(doctor: Doctor, role: Role) -> Self {
        Self {
            action: CardAction::for_role(role),
            doctor,
        }
    }

    pub fn doctor(&self) -> &Doctor {
        &self.doctor
    }

    pub fn doctor_id(&self) -> i64 {
        self.doctor.id
    }

    pub fn action(&self) -> Option<CardAction> {
        self.action
    }

    pub fn to_html(&self) -> String {
        let card = self.clone();
        render_html(move || view! { <DoctorCardView card=card/> })
    }
}

/// One doctor: profile details plus the role's action button, if any.
#[component]
pub fn DoctorCardView(card: DoctorCard) -> impl IntoView {
    let action = card.action().map(|action| match action {
        CardAction::Delete => view! { <button class="delete-btn">"Delete"</button> },
        CardAction::PromptLogin | CardAction::Book => view! { <button class="book-btn">"Book Now"</button> },
    });

    let Doctor { id, name, email, specialty, available_times, .. } = card.doctor;
    let specialization = format!("Specialization: {}", specialty);
    let email = format!("Email: {}", email);
    let times = format!("Available Times: {}", available_times.join(", "));

    view! {
        <div class="doctor-card" data-doctor-id=id.to_string()>
            <div class="doctor-info">
                <h3>{name}</h3>
                <p>{specialization}</p>
                <p>{email}</p>
                <p>{times}</p>
            </div>
            <div class="card-actions">{action}</div>
        </div>
    }
}
