//! Validates capacity ordering, addition laws, and barrier dominance

use num_traits::Zero;
use spellcut::graph::Capacity;

#[test]
fn test_barrier_exceeds_every_finite_value() {
    for value in [-1.0e9, -1.0, 0.0, 1.0, 1.0e12, f64::MAX] {
        assert!(Capacity::Barrier(1) > Capacity::Finite(value), "{value}");
    }
}

#[test]
fn test_barriers_compare_by_multiplier() {
    assert!(Capacity::Barrier(2) > Capacity::Barrier(1));
    assert_eq!(Capacity::Barrier(3), Capacity::Barrier(3));
}

#[test]
fn test_finite_addition_sums_values() {
    let sum = Capacity::Finite(1.5) + Capacity::Finite(2.25);
    assert_eq!(sum, Capacity::Finite(3.75));
}

#[test]
fn test_barrier_addition_keeps_multiplier_count_only() {
    assert_eq!(
        Capacity::Barrier(2) + Capacity::Barrier(3),
        Capacity::Barrier(5)
    );
    assert_eq!(
        Capacity::Finite(999.0) + Capacity::Barrier(1),
        Capacity::Barrier(1)
    );
    assert_eq!(
        Capacity::Barrier(1) + Capacity::Finite(-999.0),
        Capacity::Barrier(1)
    );
}

#[test]
fn test_addition_is_commutative_across_tags() {
    let pairs = [
        (Capacity::Finite(2.0), Capacity::Finite(-0.5)),
        (Capacity::Finite(4.0), Capacity::Barrier(2)),
        (Capacity::Barrier(1), Capacity::Barrier(4)),
    ];
    for (a, b) in pairs {
        assert_eq!(a + b, b + a);
    }
}

#[test]
fn test_zero_is_additive_identity_for_finite() {
    let value = Capacity::Finite(7.5);
    assert_eq!(value + Capacity::zero(), value);
    assert!(Capacity::zero().is_zero());
    assert!(!Capacity::Barrier(1).is_zero());
}

#[test]
fn test_negative_finite_costs_are_ordered() {
    assert!(Capacity::Finite(-2.0) < Capacity::Finite(-1.0));
    assert!(Capacity::Finite(-1.0) < Capacity::Finite(0.0));
}

#[test]
fn test_reduce_subtracts_from_finite_and_passes_barrier() {
    assert_eq!(Capacity::Finite(3.0).reduce(1.0), Capacity::Finite(2.0));
    assert_eq!(Capacity::Barrier(1).reduce(1.0e6), Capacity::Barrier(1));
}
