pub mod admin_dashboard;
pub mod landing;
pub mod patient_dashboard;
pub mod shell;

pub use admin_dashboard::AdminDashboard;
pub use landing::LandingPage;
pub use patient_dashboard::PatientDashboard;
pub use shell::DashboardShell;

/// Where a page ended up after a lifecycle event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    Ready,
    /// The session was invalid and the user was sent to the landing page.
    Redirected,
}
