pub mod card;

pub use card::{CardAction, DoctorCard, DoctorCardView};
