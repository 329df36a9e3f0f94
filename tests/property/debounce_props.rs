//! Debouncer properties: exactly the last scheduled query can ever run.

use loupe::Debouncer;
use proptest::prelude::*;

proptest! {
    #[test]
    fn only_the_last_ticket_redeems(queries in prop::collection::vec("[a-z]{1,8}", 1..20)) {
        let mut debouncer = Debouncer::new();
        let tickets: Vec<_> = queries
            .iter()
            .map(|q| debouncer.schedule(q.clone()))
            .collect();

        let mut redeemed = Vec::new();
        for ticket in tickets {
            if let Some(query) = debouncer.take_due(ticket) {
                redeemed.push(query);
            }
        }
        prop_assert_eq!(redeemed, vec![queries.last().unwrap().clone()]);
    }

    #[test]
    fn redeem_order_does_not_matter(
        queries in prop::collection::vec("[a-z]{1,8}", 2..12),
        seed in 0usize..100,
    ) {
        let mut debouncer = Debouncer::new();
        let mut tickets: Vec<_> = queries
            .iter()
            .map(|q| debouncer.schedule(q.clone()))
            .collect();
        // Deterministic shuffle: rotate by seed
        let rot = seed % tickets.len();
        tickets.rotate_left(rot);

        let redeemed: Vec<_> = tickets
            .into_iter()
            .filter_map(|t| debouncer.take_due(t))
            .collect();
        prop_assert_eq!(redeemed, vec![queries.last().unwrap().clone()]);
    }

    #[test]
    fn cancel_leaves_nothing_to_redeem(queries in prop::collection::vec("[a-z]{1,8}", 1..10)) {
        let mut debouncer = Debouncer::new();
        let tickets: Vec<_> = queries
            .iter()
            .map(|q| debouncer.schedule(q.clone()))
            .collect();
        debouncer.cancel();
        for ticket in tickets {
            prop_assert_eq!(debouncer.take_due(ticket), None);
        }
    }
}
