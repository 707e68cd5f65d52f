use std::iter::FusedIterator;

use crate::models::purchase_option::PurchaseOption;
use crate::models::ranked::RankedOption;

/// Options in ascending unit-cost order.
///
/// Lazy: the ordering is computed on the first call to `next()`.
/// Restartable: clone the view (or ask the ledger for a new one).
/// Stable: equal unit costs keep their insertion order.
#[derive(Debug, Clone)]
pub struct SortedView<'a> {
    options: &'a [PurchaseOption],
    order: Option<Vec<usize>>,
    pos: usize,
}

impl<'a> SortedView<'a> {
    pub fn new(options: &'a [PurchaseOption]) -> Self {
        Self {
            options,
            order: None,
            pos: 0,
        }
    }
}

impl<'a> Iterator for SortedView<'a> {
    type Item = &'a PurchaseOption;

    fn next(&mut self) -> Option<Self::Item> {
        let options = self.options;
        let order = self.order.get_or_insert_with(|| sorted_indices(options));
        let idx = *order.get(self.pos)?;
        self.pos += 1;
        Some(&options[idx])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.options.len().saturating_sub(self.pos);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SortedView<'_> {}

impl FusedIterator for SortedView<'_> {}

// `sort_by` is stable, which gives the insertion-order tie break.
fn sorted_indices(options: &[PurchaseOption]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..options.len()).collect();
    order.sort_by(|&a, &b| options[a].unit_cost.total_cmp(&options[b].unit_cost));
    order
}

/// Builds the ranked view used for display.
#[derive(Debug, Default)]
pub struct RankingService;

impl RankingService {
    pub fn new() -> Self {
        Self
    }

    pub fn sorted_view<'a>(&self, options: &'a [PurchaseOption]) -> SortedView<'a> {
        SortedView::new(options)
    }

    /// The cheapest option by unit cost (first of the sorted view).
    pub fn best<'a>(&self, options: &'a [PurchaseOption]) -> Option<&'a PurchaseOption> {
        self.sorted_view(options).next()
    }

    /// Sorted view annotated with rank and best-value flag.
    /// Every row tied with the cheapest unit cost is flagged.
    pub fn rank<'a>(&self, options: &'a [PurchaseOption]) -> Vec<RankedOption<'a>> {
        let mut best_cost: Option<f64> = None;
        self.sorted_view(options)
            .enumerate()
            .map(|(i, option)| {
                let best = *best_cost.get_or_insert(option.unit_cost);
                RankedOption {
                    rank: i + 1,
                    option,
                    is_best: option.unit_cost == best,
                }
            })
            .collect()
    }
}
