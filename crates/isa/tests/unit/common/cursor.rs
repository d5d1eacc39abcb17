//! Register Cursor Tests.
//!
//! The cursor hands out registers 1 through 27, wraps to 0, and repeats with
//! period 28. A reset restarts the sequence.

use nyuzi_mc_core::common::RegisterCursor;
use nyuzi_mc_core::common::constants::{MAX_ALLOCATED_REG, REG_CURSOR_PERIOD};
use proptest::prelude::*;

#[test]
fn test_first_allocations() {
    let mut cursor = RegisterCursor::new();
    assert_eq!(cursor.current(), 0);
    assert_eq!(cursor.allocate_n::<4>(), [1, 2, 3, 4]);
    assert_eq!(cursor.current(), 4);
}

#[test]
fn test_wraps_after_27() {
    let mut cursor = RegisterCursor::new();
    let values: Vec<u32> = (0..29).map(|_| cursor.allocate()).collect();
    assert_eq!(values[26], 27);
    assert_eq!(values[27], 0);
    assert_eq!(values[28], 1);
}

#[test]
fn test_reset_restarts_sequence() {
    let mut cursor = RegisterCursor::new();
    let first = cursor.allocate_n::<10>();
    cursor.reset();
    assert_eq!(cursor.current(), 0);
    assert_eq!(cursor.allocate_n::<10>(), first);
}

#[test]
fn test_one_period_visits_every_register() {
    let mut cursor = RegisterCursor::new();
    let mut seen: Vec<u32> = (0..REG_CURSOR_PERIOD).map(|_| cursor.allocate()).collect();
    seen.sort_unstable();
    assert_eq!(seen, (0..=MAX_ALLOCATED_REG).collect::<Vec<_>>());
}

proptest! {
    #[test]
    fn prop_allocations_stay_in_window(count in 0usize..500) {
        let mut cursor = RegisterCursor::new();
        for _ in 0..count {
            prop_assert!(cursor.allocate() <= MAX_ALLOCATED_REG);
        }
    }

    #[test]
    fn prop_period_is_28(count in 1usize..300) {
        let mut cursor = RegisterCursor::new();
        let values: Vec<u32> = (0..count + REG_CURSOR_PERIOD).map(|_| cursor.allocate()).collect();
        for k in 0..count {
            prop_assert_eq!(values[k], values[k + REG_CURSOR_PERIOD]);
        }
    }
}
