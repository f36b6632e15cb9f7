pub mod directory;

pub use directory::{DirectoryContent, DirectoryView, DoctorDirectory, NO_RESULTS_MESSAGE};
