pub mod session;
pub mod storage;

pub use session::{Session, SessionContext, AUTH_TOKEN_KEY, USER_ROLE_KEY};
pub use storage::{FileStore, KeyValueStore, MemoryStore};

#[cfg(feature = "browser")]
pub use storage::BrowserStore;
