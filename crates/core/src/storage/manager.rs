use crate::errors::LedgerError;
use crate::models::purchase_option::PurchaseOption;

use super::backend::KeyValueStore;
use super::codec;

/// High-level storage operations: load/save the option list under a key.
pub struct StorageManager;

impl StorageManager {
    /// Read and decode the list stored under `key`.
    ///
    /// Flow: store.get_item → JSON → validate → Vec<PurchaseOption>
    ///
    /// Returns `Ok(None)` when nothing is stored yet.
    pub fn load<S: KeyValueStore + ?Sized>(
        store: &S,
        key: &str,
    ) -> Result<Option<Vec<PurchaseOption>>, LedgerError> {
        let Some(raw) = store.get_item(key)? else {
            return Ok(None);
        };
        codec::decode(&raw).map(Some)
    }

    /// Encode the list and write it under `key`.
    pub fn save<S: KeyValueStore + ?Sized>(
        store: &mut S,
        key: &str,
        options: &[PurchaseOption],
    ) -> Result<(), LedgerError> {
        let json = codec::encode(options)?;
        store.set_item(key, &json)
    }
}
