//! Exact rational arithmetic over an arbitrary-precision integer.
//!
//! Values are always kept reduced with a non-negative denominator.
//! Undefined results never panic: `0/0` becomes NaN and `n/0` a signed
//! infinity, and both flow through the rest of the arithmetic.

mod convert;
mod error;
mod fmt;
mod int;
mod normalize;
mod rational;

pub use error::RationalError;
pub use int::RationalInt;
pub use normalize::{gcd, normalize};
pub use rational::cmp::compare;
pub use rational::Rational;
