use crate::{Rational, RationalError, RationalInt};

impl<T: RationalInt> Rational<T> {
    /// Largest integer `<= self`.
    ///
    /// Sentinels do not round to anything meaningful: an infinity of either
    /// sign yields [`RationalInt::max_sentinel`] and NaN yields `0`. Use
    /// [`Rational::try_floor`] to reject them instead.
    pub fn floor(&self) -> T {
        if self.is_infinite() {
            T::max_sentinel()
        } else if self.is_nan() {
            T::zero()
        } else if self.is_integer() {
            self.numer().clone()
        } else if self.is_positive() {
            self.trunc_quotient()
        } else {
            self.trunc_quotient() - T::one()
        }
    }

    /// Smallest integer `>= self`. Same sentinel convention as [`Rational::floor`].
    pub fn ceil(&self) -> T {
        if self.is_infinite() {
            T::max_sentinel()
        } else if self.is_nan() {
            T::zero()
        } else if self.is_integer() {
            self.numer().clone()
        } else if self.is_positive() {
            self.trunc_quotient() + T::one()
        } else {
            self.trunc_quotient()
        }
    }

    /// Rounds toward zero.
    pub fn fix(&self) -> T {
        if self.is_positive() {
            self.floor()
        } else {
            self.ceil()
        }
    }

    pub fn try_floor(&self) -> Result<T, RationalError> {
        self.check_finite()?;
        Ok(self.floor())
    }

    pub fn try_ceil(&self) -> Result<T, RationalError> {
        self.check_finite()?;
        Ok(self.ceil())
    }

    pub fn try_fix(&self) -> Result<T, RationalError> {
        self.check_finite()?;
        Ok(self.fix())
    }

    /// Floor-division remainder: `self - other * floor(self / other)`.
    /// The result takes the sign of `other`.
    ///
    /// Sentinels run through the same formula. A zero divisor returns `self`,
    /// an infinite `self` stays infinite over any finite divisor, and a
    /// finite `self` over an infinite divisor is NaN (`Inf * 0`). Any NaN
    /// operand, or two infinities, give NaN.
    pub fn modulo(&self, other: &Self) -> Self {
        let q = Rational::from_integer((self / other).floor());
        self - &(other * &q)
    }

    /// Truncating remainder: `self - other * fix(self / other)`.
    /// The result takes the sign of `self`. Also available as `%`.
    /// Sentinels behave as in [`Rational::modulo`].
    pub fn rem(&self, other: &Self) -> Self {
        trunc_rem(self, other)
    }

    pub fn abs(&self) -> Self {
        Rational::new(self.numer().abs(), self.denom().clone())
    }

    fn trunc_quotient(&self) -> T {
        self.numer().clone() / self.denom().clone()
    }

    pub(crate) fn check_finite(&self) -> Result<(), RationalError> {
        if self.is_nan() {
            Err(RationalError::NaN)
        } else if self.is_infinite() {
            Err(RationalError::Infinite)
        } else {
            Ok(())
        }
    }
}

pub(crate) fn trunc_rem<T: RationalInt>(a: &Rational<T>, b: &Rational<T>) -> Rational<T> {
    let q = Rational::from_integer((a / b).fix());
    a - &(b * &q)
}
