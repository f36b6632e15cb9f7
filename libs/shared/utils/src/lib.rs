pub mod render;
pub mod surface;
pub mod test_utils;
pub mod validation;

pub use render::render_html;
pub use surface::{report_error, BookingOverlay, Modal, Notice, NoticeLevel, UiSurface};
pub use validation::FormValidator;
