pub mod models;
pub mod renderer;
pub mod view;

pub use models::{Header, HeaderOutcome, NavAction, NavItem, NavKind};
pub use renderer::{HeaderRenderer, SESSION_INVALID_MESSAGE};
pub use view::HeaderView;
