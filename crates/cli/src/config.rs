use std::path::PathBuf;

use directories::ProjectDirs;
use gold_ledger_core::storage::backend::{FileStore, KeyValueStore, MemoryStore};
use tracing::{info, warn};

/// Environment variable overriding the storage file location.
pub const STORE_ENV: &str = "GOLD_LEDGER_STORE";

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "GoldLedger";
const APP_NAME: &str = "gold-ledger";
const STORE_FILE: &str = "storage.json";

/// Platform data directory location, if the platform has one.
pub fn default_store_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.data_dir().join(STORE_FILE))
}

/// Explicit path (flag or env) wins over the platform default.
pub fn resolve_store_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(default_store_path)
}

/// Open the durable store, or an in-memory one when no location exists.
pub fn open_store(explicit: Option<PathBuf>) -> Box<dyn KeyValueStore> {
    match resolve_store_path(explicit) {
        Some(path) => {
            info!(path = %path.display(), "using file store");
            Box::new(FileStore::new(path))
        }
        None => {
            warn!("no data directory available, packages will not be saved");
            Box::new(MemoryStore::new())
        }
    }
}
