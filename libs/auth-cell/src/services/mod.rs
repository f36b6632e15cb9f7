pub mod login;

pub use login::{Authenticator, LoginService};
