pub mod errors;
pub mod models;
pub mod services;
pub mod storage;

use models::{purchase_option::PurchaseOption, ranked::RankedOption};
use services::{
    ledger_service::{IdGenerator, LedgerService},
    ranking_service::{RankingService, SortedView},
};
use storage::{backend::KeyValueStore, manager::StorageManager};
use tracing::{debug, warn};

use errors::LedgerError;

/// Key under which the option list is stored.
pub const STORAGE_KEY: &str = "goldPackages";

/// Main entry point for the gold-ledger core library.
///
/// Owns the in-memory option list and mirrors it into a `KeyValueStore`
/// after every mutation. The store is a passive copy: whatever is in
/// memory is what gets written out.
///
/// A ledger only exists after `restore`, so there is no "uninitialized"
/// state to guard against.
#[must_use]
pub struct PackageLedger<S: KeyValueStore> {
    options: Vec<PurchaseOption>,
    store: S,
    key: String,
    ids: IdGenerator,
    ledger_service: LedgerService,
    ranking_service: RankingService,
}

impl<S: KeyValueStore> std::fmt::Debug for PackageLedger<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PackageLedger")
            .field("options", &self.options.len())
            .field("key", &self.key)
            .field("last_id", &self.ids.last_id())
            .finish()
    }
}

impl<S: KeyValueStore> PackageLedger<S> {
    /// Load the option list from `store` under the default key.
    /// Absent or unreadable content yields an empty ledger.
    pub fn restore(store: S) -> Self {
        Self::restore_with_key(store, STORAGE_KEY)
    }

    /// Like `restore`, with a custom storage key.
    pub fn restore_with_key(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let options = match StorageManager::load(&store, &key) {
            Ok(Some(options)) => {
                debug!(key = %key, count = options.len(), "restored options");
                options
            }
            Ok(None) => {
                debug!(key = %key, "nothing stored, starting empty");
                Vec::new()
            }
            Err(e) => {
                warn!(key = %key, error = %e, "stored options unreadable, starting empty");
                Vec::new()
            }
        };

        let mut ledger = Self::build(options, store, key);
        // Write back once so the store reflects the in-memory state.
        ledger.persist();
        ledger
    }

    // ── Mutations ───────────────────────────────────────────────────

    /// Add a purchase option. Returns the new option's id.
    ///
    /// Both amounts must be finite and greater than zero; otherwise
    /// `LedgerError::InvalidInput` is returned and nothing changes.
    pub fn add(&mut self, gold: f64, price: f64) -> Result<u64, LedgerError> {
        let option = PurchaseOption::new(self.ids.next_id(), gold, price)?;
        let id = option.id;
        self.ledger_service.add_option(&mut self.options, option)?;
        self.persist();
        Ok(id)
    }

    /// Remove the option with `id`. Returns `false` if there was none.
    /// The list is persisted either way.
    pub fn remove(&mut self, id: u64) -> bool {
        let removed = self
            .ledger_service
            .remove_option(&mut self.options, id)
            .is_some();
        self.persist();
        removed
    }

    /// Write the full list to the store. Failures are logged and ignored;
    /// the session carries on with the in-memory list.
    pub fn persist(&mut self) {
        match StorageManager::save(&mut self.store, &self.key, &self.options) {
            Ok(()) => debug!(key = %self.key, count = self.options.len(), "persisted options"),
            Err(e) => warn!(key = %self.key, error = %e, "failed to persist options"),
        }
    }

    // ── Views ───────────────────────────────────────────────────────

    /// All options ascending by unit cost, ties in insertion order.
    pub fn sorted_view(&self) -> SortedView<'_> {
        self.ranking_service.sorted_view(&self.options)
    }

    /// The sorted view annotated for display (rank, best-value flag).
    #[must_use]
    pub fn ranked(&self) -> Vec<RankedOption<'_>> {
        self.ranking_service.rank(&self.options)
    }

    /// The option with the lowest unit cost.
    #[must_use]
    pub fn best(&self) -> Option<&PurchaseOption> {
        self.ranking_service.best(&self.options)
    }

    /// All options in insertion order.
    #[must_use]
    pub fn options(&self) -> &[PurchaseOption] {
        &self.options
    }

    #[must_use]
    pub fn get(&self, id: u64) -> Option<&PurchaseOption> {
        self.options.iter().find(|o| o.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    // ── Storage Access ──────────────────────────────────────────────

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give the store back, e.g. to restore a fresh ledger from it.
    pub fn into_store(self) -> S {
        self.store
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(options: Vec<PurchaseOption>, store: S, key: String) -> Self {
        let ids = IdGenerator::seeded(&options);
        Self {
            options,
            store,
            key,
            ids,
            ledger_service: LedgerService::new(),
            ranking_service: RankingService::new(),
        }
    }
}
