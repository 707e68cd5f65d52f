use std::collections::HashSet;

use serde::Deserialize;

use crate::errors::LedgerError;
use crate::models::purchase_option::PurchaseOption;

/// Shape of one stored record before validation.
/// The stored `unitCost` is ignored and recomputed from gold and price.
#[derive(Debug, Deserialize)]
struct StoredOption {
    id: u64,
    gold: f64,
    price: f64,
}

/// Encode the full option list as a JSON array of
/// `{id, gold, price, unitCost}` objects.
pub fn encode(options: &[PurchaseOption]) -> Result<String, LedgerError> {
    serde_json::to_string(options)
        .map_err(|e| LedgerError::Serialization(format!("Failed to serialize options: {e}")))
}

/// Decode and validate a stored option list.
///
/// The whole payload is rejected if any record is malformed, has a
/// non-positive amount, or repeats an id.
pub fn decode(data: &str) -> Result<Vec<PurchaseOption>, LedgerError> {
    let records: Vec<StoredOption> = serde_json::from_str(data)?;

    let mut seen = HashSet::with_capacity(records.len());
    let mut options = Vec::with_capacity(records.len());
    for (idx, record) in records.into_iter().enumerate() {
        if !seen.insert(record.id) {
            return Err(LedgerError::Deserialization(format!(
                "record {idx}: duplicate id {}",
                record.id
            )));
        }
        let option = PurchaseOption::new(record.id, record.gold, record.price)
            .map_err(|e| LedgerError::Deserialization(format!("record {idx}: {e}")))?;
        options.push(option);
    }

    Ok(options)
}
