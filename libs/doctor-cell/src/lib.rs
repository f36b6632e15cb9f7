pub mod components;
pub mod services;
pub mod views;

pub use components::{CardAction, DoctorCard, DoctorCardView};
pub use services::DoctorService;
pub use views::{DirectoryContent, DirectoryView, DoctorDirectory};
