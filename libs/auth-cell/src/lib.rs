pub mod handlers;
pub mod services;

pub use handlers::LoginHandler;
pub use services::{Authenticator, LoginService};
