//! Property tests for the LIFO stack.

use proptest::prelude::*;

use acco_core::Stack;

proptest! {
    /// Popping everything yields the pushes in reverse order.
    #[test]
    fn test_pop_reverses_pushes(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let mut stack = Stack::new();
        for v in &values {
            stack.push(*v);
        }

        let mut popped = Vec::new();
        while let Some(v) = stack.pop() {
            popped.push(v);
        }

        let mut expected = values.clone();
        expected.reverse();
        prop_assert_eq!(popped, expected);
        prop_assert_eq!(stack.count(), 0);
    }

    /// After n pushes the count is n.
    #[test]
    fn test_count_after_pushes(values in prop::collection::vec(any::<u8>(), 0..64)) {
        let mut stack = Stack::new();
        for (i, v) in values.iter().enumerate() {
            prop_assert_eq!(stack.count(), i);
            stack.push(*v);
        }
        prop_assert_eq!(stack.count(), values.len());
    }

    /// After n pushes and k pops, count is n - k and the next pop is push n - k.
    #[test]
    fn test_partial_pops(
        values in prop::collection::vec(any::<i64>(), 1..64),
        k in 0usize..64,
    ) {
        let n = values.len();
        let k = k % n;
        let mut stack: Stack<i64> = values.iter().copied().collect();

        for _ in 0..k {
            prop_assert!(stack.pop().is_some());
        }

        prop_assert_eq!(stack.count(), n - k);
        prop_assert_eq!(stack.pop(), Some(values[n - k - 1]));
    }

    /// Peeking is idempotent and does not disturb count or later pops.
    #[test]
    fn test_peek_is_pure(values in prop::collection::vec(any::<i32>(), 0..32)) {
        let mut stack: Stack<i32> = values.iter().copied().collect();
        let count = stack.count();

        let first = stack.peek().copied();
        let second = stack.peek().copied();
        prop_assert_eq!(first, second);
        prop_assert_eq!(stack.count(), count);
        prop_assert_eq!(stack.pop(), first);
    }
}

/// Pop and peek on a fresh stack report absence instead of failing.
#[test]
fn test_empty_stack_signals_absence() {
    let mut stack: Stack<String> = Stack::new();
    assert!(stack.pop().is_none());
    assert!(stack.peek().is_none());
    assert_eq!(stack.count(), 0);
}
