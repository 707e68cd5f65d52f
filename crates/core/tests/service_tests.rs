// ═══════════════════════════════════════════════════════════════════
// Service Tests — IdGenerator, LedgerService, RankingService
// ═══════════════════════════════════════════════════════════════════

use gold_ledger_core::errors::LedgerError;
use gold_ledger_core::models::purchase_option::PurchaseOption;
use gold_ledger_core::services::ledger_service::{IdGenerator, LedgerService};
use gold_ledger_core::services::ranking_service::{RankingService, SortedView};

fn option(id: u64, gold: f64, price: f64) -> PurchaseOption {
    PurchaseOption::new(id, gold, price).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
// IdGenerator
// ═══════════════════════════════════════════════════════════════════

mod id_generator {
    use super::*;

    #[test]
    fn uses_clock_when_ahead() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_id_at(1_000), 1_000);
        assert_eq!(ids.next_id_at(2_000), 2_000);
    }

    #[test]
    fn same_millisecond_bumps() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_id_at(1_000), 1_000);
        assert_eq!(ids.next_id_at(1_000), 1_001);
        assert_eq!(ids.next_id_at(1_000), 1_002);
    }

    #[test]
    fn clock_going_backwards_stays_monotonic() {
        let mut ids = IdGenerator::new();
        ids.next_id_at(5_000);
        assert_eq!(ids.next_id_at(10), 5_001);
    }

    #[test]
    fn seeded_from_largest_existing_id() {
        let existing = vec![option(7, 1.0, 1.0), option(42, 1.0, 1.0), option(9, 1.0, 1.0)];
        let mut ids = IdGenerator::seeded(&existing);
        assert_eq!(ids.last_id(), 42);
        assert_eq!(ids.next_id_at(0), 43);
    }

    #[test]
    fn wall_clock_ids_are_unique() {
        let mut ids = IdGenerator::new();
        let generated: Vec<u64> = (0..1_000).map(|_| ids.next_id()).collect();
        assert!(generated.windows(2).all(|w| w[0] < w[1]));
    }
}

// ═══════════════════════════════════════════════════════════════════
// LedgerService
// ═══════════════════════════════════════════════════════════════════

mod ledger_service {
    use super::*;

    #[test]
    fn add_appends_in_order() {
        let svc = LedgerService::new();
        let mut options = Vec::new();
        svc.add_option(&mut options, option(1, 100.0, 5.0)).unwrap();
        svc.add_option(&mut options, option(2, 500.0, 20.0)).unwrap();
        let ids: Vec<u64> = options.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn duplicate_id_rejected() {
        let svc = LedgerService::new();
        let mut options = vec![option(1, 100.0, 5.0)];
        let err = svc.add_option(&mut options, option(1, 200.0, 5.0)).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidInput(_)));
        assert_eq!(options.len(), 1);
    }

    #[test]
    fn invalid_amounts_rejected_even_if_constructed_directly() {
        let svc = LedgerService::new();
        let mut options = Vec::new();
        let bogus = PurchaseOption {
            id: 1,
            gold: -1.0,
            price: 5.0,
            unit_cost: -5.0,
        };
        assert!(svc.add_option(&mut options, bogus).is_err());
        assert!(options.is_empty());
    }

    #[test]
    fn remove_returns_removed_option() {
        let svc = LedgerService::new();
        let mut options = vec![option(1, 100.0, 5.0), option(2, 500.0, 20.0)];
        let removed = svc.remove_option(&mut options, 1).unwrap();
        assert_eq!(removed.id, 1);
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].id, 2);
    }

    #[test]
    fn remove_missing_is_none_and_unchanged() {
        let svc = LedgerService::new();
        let mut options = vec![option(1, 100.0, 5.0)];
        let before = options.clone();
        assert!(svc.remove_option(&mut options, 99).is_none());
        assert_eq!(options, before);
    }
}

// ═══════════════════════════════════════════════════════════════════
// RankingService / SortedView
// ═══════════════════════════════════════════════════════════════════

mod ranking {
    use super::*;

    fn sample() -> Vec<PurchaseOption> {
        vec![
            option(1, 100.0, 5.0),    // 0.05
            option(2, 500.0, 20.0),   // 0.04
            option(3, 1000.0, 60.0),  // 0.06
            option(4, 250.0, 10.0),   // 0.04 (tie with 2, inserted later)
        ]
    }

    #[test]
    fn ascending_by_unit_cost() {
        let options = sample();
        let view: Vec<u64> = SortedView::new(&options).map(|o| o.id).collect();
        assert_eq!(view, vec![2, 4, 1, 3]);
    }

    #[test]
    fn non_decreasing_across_neighbours() {
        let options = vec![
            option(1, 3.0, 7.0),
            option(2, 11.0, 2.0),
            option(3, 0.5, 0.5),
            option(4, 1.0, 1.0),
            option(5, 9.0, 0.1),
        ];
        let costs: Vec<f64> = SortedView::new(&options).map(|o| o.unit_cost).collect();
        assert!(costs.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn ties_keep_insertion_order() {
        let options = vec![
            option(10, 100.0, 5.0),
            option(11, 200.0, 10.0),
            option(12, 20.0, 1.0),
        ];
        let view: Vec<u64> = SortedView::new(&options).map(|o| o.id).collect();
        assert_eq!(view, vec![10, 11, 12]);
    }

    #[test]
    fn view_is_restartable() {
        let options = sample();
        let view = SortedView::new(&options);
        let first: Vec<u64> = view.clone().map(|o| o.id).collect();
        let second: Vec<u64> = view.map(|o| o.id).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn view_reports_exact_length() {
        let options = sample();
        let mut view = SortedView::new(&options);
        assert_eq!(view.len(), 4);
        view.next();
        assert_eq!(view.len(), 3);
    }

    #[test]
    fn empty_view() {
        let mut view = SortedView::new(&[]);
        assert_eq!(view.len(), 0);
        assert!(view.next().is_none());
        assert!(view.next().is_none());
    }

    #[test]
    fn best_is_first_of_view() {
        let options = sample();
        let svc = RankingService::new();
        assert_eq!(svc.best(&options).unwrap().id, 2);
        assert!(svc.best(&[]).is_none());
    }

    #[test]
    fn rank_numbers_rows_from_one() {
        let options = sample();
        let rows = RankingService::new().rank(&options);
        let ranks: Vec<usize> = rows.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
    }

    #[test]
    fn rank_flags_every_row_tied_for_cheapest() {
        let options = sample();
        let rows = RankingService::new().rank(&options);
        let best: Vec<u64> = rows.iter().filter(|r| r.is_best).map(|r| r.option.id).collect();
        assert_eq!(best, vec![2, 4]);
    }

    #[test]
    fn rank_single_best_without_tie() {
        let options = vec![option(1, 100.0, 5.0), option(2, 500.0, 20.0)];
        let rows = RankingService::new().rank(&options);
        assert!(rows[0].is_best);
        assert!(!rows[1].is_best);
    }
}
