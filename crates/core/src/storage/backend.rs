use std::collections::HashMap;
#[cfg(not(target_arch = "wasm32"))]
use std::collections::BTreeMap;

use crate::errors::LedgerError;

/// A client-local string key-value store, shaped like browser local storage.
///
/// The ledger only ever touches storage through this trait, so tests can
/// swap in `MemoryStore` (or a failing fake) for the real file.
pub trait KeyValueStore {
    /// Read the value under `key`. `Ok(None)` when the key is absent.
    fn get_item(&self, key: &str) -> Result<Option<String>, LedgerError>;

    /// Write `value` under `key`, replacing any previous value.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), LedgerError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get_item(&self, key: &str) -> Result<Option<String>, LedgerError> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), LedgerError> {
        (**self).set_item(key, value)
    }
}

/// In-memory store. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a single key (handy for simulating a previous session).
    pub fn with_item(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut items = HashMap::new();
        items.insert(key.into(), value.into());
        Self { items }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, LedgerError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), LedgerError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store: one JSON object mapping keys to string values.
///
/// A missing file reads as an empty store. Parent directories are created
/// on the first write.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStore {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>, LedgerError> {
        let data = match std::fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };
        if data.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&data).map_err(|e| {
            LedgerError::StorageUnavailable(format!(
                "{} is not a valid store file: {e}",
                self.path.display()
            ))
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, LedgerError> {
        Ok(self.read_map()?.remove(key))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), LedgerError> {
        // A corrupt store file is replaced rather than blocking every write;
        // I/O failures leave the file alone.
        let mut map = match self.read_map() {
            Ok(map) => map,
            Err(e @ LedgerError::StorageUnavailable(_)) => {
                tracing::warn!(error = %e, "discarding unparsable store file");
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        map.insert(key.to_string(), value.to_string());

        let json = serde_json::to_string_pretty(&map)
            .map_err(|e| LedgerError::Serialization(format!("Failed to serialize store: {e}")))?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}
