//! Edge capacity arithmetic with barrier dominance
//!
//! A capacity is either a finite real-valued cost or a barrier: an
//! effectively-infinite hard-constraint cost. Dominance is structural, not a
//! tuned constant: any barrier compares greater than any finite value, so no
//! sum of finite costs can ever reach the barrier scale. This sidesteps
//! floating-point infinity arithmetic entirely (no NaN from inf - inf, no
//! ambiguous inf + inf).

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign};

use num_traits::Zero;

/// Edge capacity: a finite cost or an uncuttable barrier
///
/// Finite values may be negative (a preference bonus). Two barriers compare
/// by multiplier; addition keeps only the barrier multiplier sum whenever a
/// barrier is involved, since finite residue under a barrier can never
/// influence a comparison.
#[derive(Clone, Copy, Debug)]
pub enum Capacity {
    /// Finite real-valued cost
    Finite(f64),
    /// Hard-constraint cost with an integer multiplier
    Barrier(u32),
}

impl Capacity {
    /// Test whether this capacity is a barrier
    pub const fn is_barrier(&self) -> bool {
        matches!(self, Self::Barrier(_))
    }

    /// Extract the finite value, if any
    pub const fn as_finite(&self) -> Option<f64> {
        match self {
            Self::Finite(value) => Some(*value),
            Self::Barrier(_) => None,
        }
    }

    /// Subtract a finite flow amount from this capacity
    ///
    /// A barrier absorbs any finite amount unchanged: pushing finite flow
    /// through an effectively-infinite edge leaves it effectively infinite.
    #[must_use]
    pub const fn reduce(&self, flow: f64) -> Self {
        match self {
            Self::Finite(value) => Self::Finite(*value - flow),
            Self::Barrier(multiplier) => Self::Barrier(*multiplier),
        }
    }

    /// Test whether this capacity admits more flow than a finite threshold
    pub const fn exceeds(&self, threshold: f64) -> bool {
        match self {
            Self::Finite(value) => *value > threshold,
            Self::Barrier(_) => true,
        }
    }
}

impl PartialEq for Capacity {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Capacity {}

impl PartialOrd for Capacity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Capacity {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Finite(a), Self::Finite(b)) => a.total_cmp(b),
            (Self::Finite(_), Self::Barrier(_)) => Ordering::Less,
            (Self::Barrier(_), Self::Finite(_)) => Ordering::Greater,
            (Self::Barrier(a), Self::Barrier(b)) => a.cmp(b),
        }
    }
}

impl Add for Capacity {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        match (self, other) {
            (Self::Finite(a), Self::Finite(b)) => Self::Finite(a + b),
            (Self::Barrier(a), Self::Barrier(b)) => Self::Barrier(a + b),
            (Self::Barrier(multiplier), Self::Finite(_))
            | (Self::Finite(_), Self::Barrier(multiplier)) => Self::Barrier(multiplier),
        }
    }
}

impl AddAssign for Capacity {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Zero for Capacity {
    fn zero() -> Self {
        Self::Finite(0.0)
    }

    fn is_zero(&self) -> bool {
        matches!(self, Self::Finite(value) if value.total_cmp(&0.0) == Ordering::Equal)
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(value) => write!(f, "{value}"),
            Self::Barrier(multiplier) => write!(f, "barrier({multiplier})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Capacity;

    #[test]
    fn test_barrier_dominates_any_finite() {
        assert!(Capacity::Barrier(1) > Capacity::Finite(f64::MAX));
        assert!(Capacity::Barrier(1) > Capacity::Finite(0.0));
        assert!(Capacity::Finite(-1.0) < Capacity::Barrier(1));
    }

    #[test]
    fn test_barrier_absorbs_finite_on_addition() {
        let sum = Capacity::Barrier(2) + Capacity::Finite(1_000.0);
        assert_eq!(sum, Capacity::Barrier(2));
    }
}
