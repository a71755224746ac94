use std::fmt;

use num_bigint::BigInt;
use num_traits::Signed;

/// The integer capability a [`Rational`](crate::Rational) is built on.
///
/// `Signed` brings zero/one, truncating `/` and `%`, negation and `abs`.
/// `Ord` drives every sign test and `Display` is the decimal rendering used
/// by the formatter.
pub trait RationalInt: Clone + Ord + Signed + fmt::Display {
    /// What `floor`/`ceil` of an infinite value return.
    fn max_sentinel() -> Self;
}

// `BigInt` is unbounded, so there is no true maximum to hand out.
impl RationalInt for BigInt {
    fn max_sentinel() -> Self {
        BigInt::from(i64::MAX)
    }
}

macro_rules! impl_primitive {
    ($($ty:ty),*) => {
        $(
            impl RationalInt for $ty {
                fn max_sentinel() -> Self {
                    <$ty>::MAX
                }
            }
        )*
    };
}

impl_primitive!(i8, i16, i32, i64, i128, isize);
