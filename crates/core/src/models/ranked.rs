use super::purchase_option::PurchaseOption;

/// A row of the ranked table: an option plus its position in the
/// unit-cost ordering.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedOption<'a> {
    /// 1-based position in the sorted view
    pub rank: usize,

    pub option: &'a PurchaseOption,

    /// True when this row's unit cost equals the cheapest unit cost.
    /// Several rows can share the flag on an exact tie.
    pub is_best: bool,
}
