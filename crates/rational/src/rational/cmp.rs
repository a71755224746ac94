use std::cmp::Ordering;

use crate::{Rational, RationalInt};

/// `a.numer * b.denom - b.numer * a.denom`.
///
/// The sign orders two finite values. For NaN or infinite operands the
/// raw value is returned as is and carries no ordering guarantee.
pub fn compare<T: RationalInt>(a: &Rational<T>, b: &Rational<T>) -> T {
    a.numer().clone() * b.denom().clone() - b.numer().clone() * a.denom().clone()
}

// NaN is unordered against everything, itself included. Two infinities
// compare by sign; every other pair goes through `compare`, which already
// puts -Inf below and +Inf above any finite value.
fn cmp_rational<T: RationalInt>(a: &Rational<T>, b: &Rational<T>) -> Option<Ordering> {
    if a.is_nan() || b.is_nan() {
        return None;
    }

    if a.is_infinite() && b.is_infinite() {
        return Some(a.numer().cmp(b.numer()));
    }

    Some(compare(a, b).cmp(&T::zero()))
}

impl<T: RationalInt> PartialEq for Rational<T> {
    fn eq(&self, other: &Self) -> bool {
        cmp_rational(self, other) == Some(Ordering::Equal)
    }
}

impl<T: RationalInt> PartialOrd for Rational<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        cmp_rational(self, other)
    }
}
