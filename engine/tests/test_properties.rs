//! Property-based tests for the evaluators.

use proptest::prelude::*;

use endpick_engine::Strategy as Evaluator;
use endpick_engine::{solve_iterative, solve_memoized, solve_naive, solve_outcome, Sequence};

/// Strategy: a non-empty sequence short enough for the naive evaluator.
fn small_sequence() -> impl Strategy<Value = Sequence> {
    prop::collection::vec(-50..=50i32, 1..=15)
        .prop_map(|values| Sequence::new(values).unwrap())
}

/// Strategy: longer sequences, memoized and iterative only.
fn large_sequence() -> impl Strategy<Value = Sequence> {
    prop::collection::vec(any::<i32>(), 1..=120)
        .prop_map(|values| Sequence::new(values).unwrap())
}

proptest! {
    // 1. Single element: the only move takes it
    #[test]
    fn single_element_is_its_value(v in any::<i32>()) {
        let seq = Sequence::new(vec![v]).unwrap();
        prop_assert_eq!(solve_naive(&seq), v as i64);
        prop_assert_eq!(solve_memoized(&seq), v as i64);
        prop_assert_eq!(solve_iterative(&seq), v as i64);
    }

    // 2. Two elements: take the larger one
    #[test]
    fn two_elements_take_max(a in any::<i32>(), b in any::<i32>()) {
        let seq = Sequence::new(vec![a, b]).unwrap();
        let expected = a.max(b) as i64;
        prop_assert_eq!(solve_naive(&seq), expected);
        prop_assert_eq!(solve_memoized(&seq), expected);
        prop_assert_eq!(solve_iterative(&seq), expected);
    }

    // 3. Naive and memoized agree wherever naive is feasible
    #[test]
    fn naive_matches_memoized(seq in small_sequence()) {
        prop_assert_eq!(solve_naive(&seq), solve_memoized(&seq));
    }

    // 4. Iterative agrees with memoized
    #[test]
    fn iterative_matches_memoized(seq in large_sequence()) {
        prop_assert_eq!(solve_iterative(&seq), solve_memoized(&seq));
    }

    // 5. Both players' scores add up to the total
    #[test]
    fn zero_sum_complementarity(seq in large_sequence()) {
        let outcome = solve_outcome(Evaluator::Memoized, &seq);
        let total: i64 = seq.values().iter().map(|&v| v as i64).sum();
        prop_assert_eq!(outcome.total, total);
        prop_assert_eq!(outcome.first + outcome.second, total);
    }

    // 6. Repeated solves give the same answer and leave the input untouched
    #[test]
    fn solving_is_idempotent(seq in small_sequence()) {
        let before = seq.clone();
        for strategy in Evaluator::ALL {
            let first = strategy.solve(&seq);
            let second = strategy.solve(&seq);
            prop_assert_eq!(first, second);
        }
        prop_assert_eq!(seq, before);
    }

    // 7. The first player takes ceil(n/2) elements, each between min and max
    #[test]
    fn value_bounded_by_extremes(seq in small_sequence()) {
        let first = solve_memoized(&seq);
        let max_elem = *seq.values().iter().max().unwrap() as i64;
        let min_elem = *seq.values().iter().min().unwrap() as i64;
        let moves = seq.len().div_ceil(2) as i64;
        prop_assert!(first <= moves * max_elem);
        prop_assert!(first >= moves * min_elem);
    }
}

#[test]
fn scenario_with_negative_element() {
    let seq = Sequence::new(vec![3, -5, 2]).unwrap();
    for strategy in Evaluator::ALL {
        assert_eq!(strategy.solve(&seq), -2, "{}", strategy);
    }
}

#[test]
fn scenario_table() {
    let cases: Vec<(Vec<i32>, i64)> = vec![
        (vec![4, 5, 1, 3], 8),
        (vec![7], 7),
        (vec![1, 100], 100),
        (vec![1, 5, 2, 4], 9),
    ];
    for (values, expected) in cases {
        let seq = Sequence::new(values.clone()).unwrap();
        assert_eq!(solve_naive(&seq), expected, "naive on {:?}", values);
        assert_eq!(solve_memoized(&seq), expected, "memoized on {:?}", values);
    }
}
