use gold_ledger_core::storage::backend::KeyValueStore;
use gold_ledger_core::PackageLedger;
use tracing::debug;

/// Which input currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Gold,
    Price,
}

/// The two-field entry form: gold amount and price, as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryForm {
    pub gold: String,
    pub price: String,
    pub focus: Field,
}

impl EntryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values(gold: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            gold: gold.into(),
            price: price.into(),
            focus: Field::Gold,
        }
    }

    /// Submit the form to the ledger.
    ///
    /// On success the fields are cleared, focus returns to the gold field
    /// and the new id is returned. Anything unparsable or rejected by the
    /// ledger leaves the fields as they were and returns `None`.
    pub fn submit<S: KeyValueStore>(&mut self, ledger: &mut PackageLedger<S>) -> Option<u64> {
        let (Some(gold), Some(price)) = (parse_field(&self.gold), parse_field(&self.price)) else {
            debug!(gold = %self.gold, price = %self.price, "submission not numeric");
            return None;
        };

        match ledger.add(gold, price) {
            Ok(id) => {
                self.gold.clear();
                self.price.clear();
                self.focus = Field::Gold;
                Some(id)
            }
            Err(e) => {
                debug!(error = %e, "submission rejected");
                None
            }
        }
    }
}

fn parse_field(raw: &str) -> Option<f64> {
    raw.trim().parse().ok()
}
