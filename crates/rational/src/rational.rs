use num_bigint::BigInt;

use crate::normalize::normalize;
use crate::RationalInt;

pub mod cmp;
mod op;
mod round;

/// An exact fraction over an arbitrary-precision (or primitive) integer.
///
/// Every value is kept in canonical form: `denom >= 0`, the sign lives in
/// `numer`, and the pair is reduced. Two encodings are reserved:
/// `0/0` is NaN and `±1/0` is a signed infinity. Any pair that is not
/// already canonical goes through [`normalize`] before it is stored.
#[derive(Clone, Debug)]
pub struct Rational<T = BigInt> {
    numer: T,
    denom: T,
}

impl<T: RationalInt> Rational<T> {
    pub fn new(numer: T, denom: T) -> Self {
        let (numer, denom) = normalize(numer, denom);
        Rational { numer, denom }
    }

    pub fn from_integer(n: T) -> Self {
        Rational {
            numer: n,
            denom: T::one(),
        }
    }

    pub fn nan() -> Self {
        Rational {
            numer: T::zero(),
            denom: T::zero(),
        }
    }

    pub fn infinity() -> Self {
        Rational {
            numer: T::one(),
            denom: T::zero(),
        }
    }

    pub fn neg_infinity() -> Self {
        Rational {
            numer: -T::one(),
            denom: T::zero(),
        }
    }

    pub fn numer(&self) -> &T {
        &self.numer
    }

    pub fn denom(&self) -> &T {
        &self.denom
    }

    pub fn into_parts(self) -> (T, T) {
        (self.numer, self.denom)
    }

    // Recomputes the pair in place. Only the compound-assignment operators use it.
    pub(crate) fn renormalize(&mut self, numer: T, denom: T) {
        let (numer, denom) = normalize(numer, denom);
        self.numer = numer;
        self.denom = denom;
    }

    pub fn is_nan(&self) -> bool {
        self.denom.is_zero() && self.numer.is_zero()
    }

    pub fn is_infinite(&self) -> bool {
        self.denom.is_zero() && !self.numer.is_zero()
    }

    pub fn is_finite(&self) -> bool {
        !self.denom.is_zero()
    }

    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    pub fn is_zero(&self) -> bool {
        self.numer.is_zero() && !self.denom.is_zero()
    }

    /// `false` for NaN.
    pub fn is_positive(&self) -> bool {
        self.numer.is_positive()
    }

    /// `false` for NaN.
    pub fn is_negative(&self) -> bool {
        self.numer.is_negative()
    }
}

impl<T: RationalInt> Default for Rational<T> {
    fn default() -> Self {
        Rational::from_integer(T::zero())
    }
}
