use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use shared_models::PortalError;

/// String key-value storage with `localStorage` semantics.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, PortalError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PortalError>;
    fn remove(&mut self, key: &str) -> Result<(), PortalError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, PortalError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PortalError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), PortalError> {
        (**self).remove(key)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PortalError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PortalError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PortalError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// JSON file holding one flat object; every write goes straight to disk.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store. A missing file starts empty; an unreadable or corrupted
    /// one also starts empty, with a warning.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
                warn!("Failed to parse session file {} (starting empty): {}", path.display(), e);
                BTreeMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                warn!("Could not read session file {} (starting empty): {}", path.display(), e);
                BTreeMap::new()
            }
        };

        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), PortalError> {
        let json = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| PortalError::Storage(format!("could not serialize session: {}", e)))?;
        fs::write(&self.path, json)
            .map_err(|e| PortalError::Storage(format!("could not write {}: {}", self.path.display(), e)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, PortalError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PortalError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), PortalError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

/// The browser's `localStorage`.
#[cfg(feature = "browser")]
pub struct BrowserStore {
    storage: web_sys::Storage,
}

#[cfg(feature = "browser")]
impl BrowserStore {
    /// Returns `None` outside a browser, or when storage is disabled
    /// (private browsing, blocked third-party frames).
    pub fn local() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        Some(Self { storage })
    }
}

#[cfg(feature = "browser")]
impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, PortalError> {
        self.storage
            .get_item(key)
            .map_err(|_| PortalError::Storage(format!("could not read {} from localStorage", key)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PortalError> {
        self.storage
            .set_item(key, value)
            .map_err(|_| PortalError::Storage(format!("could not save {} to localStorage (quota or private mode)", key)))
    }

    fn remove(&mut self, key: &str) -> Result<(), PortalError> {
        self.storage
            .remove_item(key)
            .map_err(|_| PortalError::Storage(format!("could not remove {} from localStorage", key)))
    }
}
