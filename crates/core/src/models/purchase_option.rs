use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

/// One purchasable gold package: how much gold, for how much money.
///
/// `unit_cost` is derived (`price / gold`) and only ever set by the
/// constructor, so the three numbers can't drift apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOption {
    /// Time-derived unique identifier (milliseconds since the Unix epoch)
    pub id: u64,

    /// Amount of in-game gold in the package (always positive)
    pub gold: f64,

    /// Real-money price of the package (always positive)
    pub price: f64,

    /// Price per unit of gold. Lower is better value.
    #[serde(rename = "unitCost")]
    pub unit_cost: f64,
}

impl PurchaseOption {
    /// Build a validated option. Both numbers must be finite and > 0.
    pub fn new(id: u64, gold: f64, price: f64) -> Result<Self, LedgerError> {
        validate_amount("gold", gold)?;
        validate_amount("price", price)?;
        Ok(Self {
            id,
            gold,
            price,
            unit_cost: price / gold,
        })
    }

    /// Price formatted for display, two decimals (e.g. `"5.00"`).
    #[must_use]
    pub fn price_display(&self) -> String {
        format!("{:.2}", self.price)
    }

    /// Unit cost formatted for display, four decimals (e.g. `"0.0500"`).
    #[must_use]
    pub fn unit_cost_display(&self) -> String {
        format!("{:.4}", self.unit_cost)
    }
}

pub(crate) fn validate_amount(field: &str, value: f64) -> Result<(), LedgerError> {
    if !value.is_finite() {
        return Err(LedgerError::InvalidInput(format!(
            "{field} must be a finite number, got {value}"
        )));
    }
    if value <= 0.0 {
        return Err(LedgerError::InvalidInput(format!(
            "{field} must be greater than zero, got {value}"
        )));
    }
    Ok(())
}
