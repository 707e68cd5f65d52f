use tracing::debug;

use crate::errors::LedgerError;
use crate::models::purchase_option::{validate_amount, PurchaseOption};

/// Hands out time-derived ids that never repeat within a process.
///
/// Ids are milliseconds since the Unix epoch, bumped past the last issued
/// id when two options are created within the same millisecond (or the
/// clock steps backwards).
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start after the largest id already present, so restored options
    /// never collide with new ones.
    pub fn seeded(options: &[PurchaseOption]) -> Self {
        let last = options.iter().map(|o| o.id).max().unwrap_or(0);
        Self { last }
    }

    /// Next id based on the current wall clock.
    pub fn next_id(&mut self) -> u64 {
        let now_ms = u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0);
        self.next_id_at(now_ms)
    }

    /// Next id given an explicit clock reading.
    pub fn next_id_at(&mut self, now_ms: u64) -> u64 {
        let id = now_ms.max(self.last.saturating_add(1));
        self.last = id;
        id
    }

    /// The most recently issued (or seeded) id.
    #[must_use]
    pub fn last_id(&self) -> u64 {
        self.last
    }
}

/// Mutations on the option list.
///
/// Pure business logic: no storage, no clock. The ledger facade pairs each
/// call with a persist.
#[derive(Debug, Default)]
pub struct LedgerService;

impl LedgerService {
    pub fn new() -> Self {
        Self
    }

    /// Append an option after checking its invariants.
    /// Rejects non-positive amounts and ids already in the list.
    pub fn add_option(
        &self,
        options: &mut Vec<PurchaseOption>,
        option: PurchaseOption,
    ) -> Result<(), LedgerError> {
        validate_amount("gold", option.gold)?;
        validate_amount("price", option.price)?;
        if options.iter().any(|o| o.id == option.id) {
            return Err(LedgerError::InvalidInput(format!(
                "duplicate option id {}",
                option.id
            )));
        }
        debug!(id = option.id, gold = option.gold, price = option.price, "option added");
        options.push(option);
        Ok(())
    }

    /// Remove the option with `id`. Returns it, or `None` if no such id.
    pub fn remove_option(
        &self,
        options: &mut Vec<PurchaseOption>,
        id: u64,
    ) -> Option<PurchaseOption> {
        let idx = options.iter().position(|o| o.id == id)?;
        debug!(id, "option removed");
        Some(options.remove(idx))
    }
}
