use num_rational::Ratio;

use crate::{Rational, RationalError, RationalInt};

impl<T: RationalInt> From<T> for Rational<T> {
    fn from(n: T) -> Self {
        Rational::from_integer(n)
    }
}

impl<T: RationalInt> From<(T, T)> for Rational<T> {
    fn from((numer, denom): (T, T)) -> Self {
        Rational::new(numer, denom)
    }
}

impl<T: RationalInt> Rational<T> {
    /// The exact integer value, if there is one.
    pub fn to_integer(&self) -> Result<T, RationalError> {
        self.check_finite()?;

        if self.is_integer() {
            Ok(self.numer().clone())
        } else {
            Err(RationalError::NotInteger)
        }
    }
}

// `num_rational` has no room for NaN or infinities.
impl<T: RationalInt> TryFrom<Rational<T>> for Ratio<T> {
    type Error = RationalError;

    fn try_from(value: Rational<T>) -> Result<Self, Self::Error> {
        value.check_finite()?;
        let (numer, denom) = value.into_parts();
        Ok(Ratio::new_raw(numer, denom))
    }
}

impl<T: RationalInt> From<Ratio<T>> for Rational<T> {
    fn from(value: Ratio<T>) -> Self {
        Rational::new(value.numer().clone(), value.denom().clone())
    }
}
