//! Cursor state machine properties: the selection can never escape the list.

use loupe::{Cursor, NavDirection};
use proptest::prelude::*;

fn arb_direction() -> impl Strategy<Value = NavDirection> {
    prop::sample::select(vec![
        NavDirection::Down,
        NavDirection::Up,
        NavDirection::First,
        NavDirection::Last,
    ])
}

proptest! {
    #[test]
    fn selection_stays_in_bounds(
        len in 0usize..15,
        moves in prop::collection::vec(arb_direction(), 0..50),
    ) {
        let mut cursor = Cursor::new();
        for direction in moves {
            cursor.navigate(direction, len);
            match cursor.selected() {
                None => {}
                Some(i) => prop_assert!(i < len),
            }
        }
    }

    #[test]
    fn n_downs_from_fresh_land_on_min(len in 1usize..12, presses in 1usize..30) {
        let mut cursor = Cursor::new();
        for _ in 0..presses {
            cursor.navigate(NavDirection::Down, len);
        }
        prop_assert_eq!(cursor.selected(), Some(presses.min(len) - 1));
    }

    #[test]
    fn up_is_inverse_of_down_above_the_floor(len in 2usize..12, start in 1usize..10) {
        let start = start.min(len - 1);
        let mut cursor = Cursor::new();
        for _ in 0..=start {
            cursor.navigate(NavDirection::Down, len);
        }
        let before = cursor.selected();
        cursor.navigate(NavDirection::Down, len);
        cursor.navigate(NavDirection::Up, len);
        // Down then Up returns to the start unless Down was clamped
        if before != Some(len - 1) {
            prop_assert_eq!(cursor.selected(), before);
        }
    }

    #[test]
    fn navigate_reports_change_truthfully(
        len in 0usize..10,
        moves in prop::collection::vec(arb_direction(), 1..40),
    ) {
        let mut cursor = Cursor::new();
        for direction in moves {
            let before = cursor.selected();
            let changed = cursor.navigate(direction, len);
            prop_assert_eq!(changed, before != cursor.selected());
        }
    }

    #[test]
    fn reset_always_lands_on_none(
        len in 0usize..10,
        moves in prop::collection::vec(arb_direction(), 0..20),
    ) {
        let mut cursor = Cursor::new();
        for direction in moves {
            cursor.navigate(direction, len);
        }
        cursor.reset();
        prop_assert_eq!(cursor.selected(), None);
    }
}
