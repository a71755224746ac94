use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

use num_traits::{One, Zero};

use super::round::trunc_rem;
use crate::{Rational, RationalInt};

// Raw (unreduced) pairs. Callers always hand them to the normalizer.

fn add_parts<T: RationalInt>(a: &Rational<T>, b: &Rational<T>) -> (T, T) {
    (
        a.numer().clone() * b.denom().clone() + b.numer().clone() * a.denom().clone(),
        a.denom().clone() * b.denom().clone(),
    )
}

fn sub_parts<T: RationalInt>(a: &Rational<T>, b: &Rational<T>) -> (T, T) {
    (
        a.numer().clone() * b.denom().clone() - b.numer().clone() * a.denom().clone(),
        a.denom().clone() * b.denom().clone(),
    )
}

fn mul_parts<T: RationalInt>(a: &Rational<T>, b: &Rational<T>) -> (T, T) {
    (
        a.numer().clone() * b.numer().clone(),
        a.denom().clone() * b.denom().clone(),
    )
}

fn div_parts<T: RationalInt>(a: &Rational<T>, b: &Rational<T>) -> (T, T) {
    (
        a.numer().clone() * b.denom().clone(),
        a.denom().clone() * b.numer().clone(),
    )
}

fn rem_parts<T: RationalInt>(a: &Rational<T>, b: &Rational<T>) -> (T, T) {
    trunc_rem(a, b).into_parts()
}

impl<T: RationalInt> Rational<T> {
    /// `denom / numer`. `recip(0)` is infinity, `recip(±Inf)` is zero.
    pub fn recip(&self) -> Self {
        Rational::new(self.denom().clone(), self.numer().clone())
    }
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident, $parts:ident) => {
        impl<'a, 'b, T: RationalInt> $imp<&'b Rational<T>> for &'a Rational<T> {
            type Output = Rational<T>;

            fn $method(self, other: &'b Rational<T>) -> Rational<T> {
                let (numer, denom) = $parts(self, other);
                Rational::new(numer, denom)
            }
        }

        impl<'a, T: RationalInt> $imp<Rational<T>> for &'a Rational<T> {
            type Output = Rational<T>;

            fn $method(self, other: Rational<T>) -> Rational<T> {
                self.$method(&other)
            }
        }

        impl<'b, T: RationalInt> $imp<&'b Rational<T>> for Rational<T> {
            type Output = Rational<T>;

            fn $method(self, other: &'b Rational<T>) -> Rational<T> {
                (&self).$method(other)
            }
        }

        impl<T: RationalInt> $imp for Rational<T> {
            type Output = Rational<T>;

            fn $method(self, other: Rational<T>) -> Rational<T> {
                (&self).$method(&other)
            }
        }
    };
}

macro_rules! forward_assign {
    ($imp:ident, $method:ident, $parts:ident) => {
        impl<'b, T: RationalInt> $imp<&'b Rational<T>> for Rational<T> {
            fn $method(&mut self, other: &'b Rational<T>) {
                let (numer, denom) = $parts(&*self, other);
                self.renormalize(numer, denom);
            }
        }

        impl<T: RationalInt> $imp for Rational<T> {
            fn $method(&mut self, other: Rational<T>) {
                self.$method(&other);
            }
        }
    };
}

forward_binop!(Add, add, add_parts);
forward_binop!(Sub, sub, sub_parts);
forward_binop!(Mul, mul, mul_parts);
forward_binop!(Div, div, div_parts);
forward_binop!(Rem, rem, rem_parts);

forward_assign!(AddAssign, add_assign, add_parts);
forward_assign!(SubAssign, sub_assign, sub_parts);
forward_assign!(MulAssign, mul_assign, mul_parts);
forward_assign!(DivAssign, div_assign, div_parts);
forward_assign!(RemAssign, rem_assign, rem_parts);

impl<'a, T: RationalInt> Neg for &'a Rational<T> {
    type Output = Rational<T>;

    fn neg(self) -> Rational<T> {
        Rational::new(-self.numer().clone(), self.denom().clone())
    }
}

impl<T: RationalInt> Neg for Rational<T> {
    type Output = Rational<T>;

    fn neg(self) -> Rational<T> {
        -&self
    }
}

impl<T: RationalInt> Zero for Rational<T> {
    fn zero() -> Self {
        Rational::default()
    }

    fn is_zero(&self) -> bool {
        Rational::is_zero(self)
    }
}

impl<T: RationalInt> One for Rational<T> {
    fn one() -> Self {
        Rational::from_integer(T::one())
    }
}

impl<T: RationalInt> Sum for Rational<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Rational::default(), |acc, x| acc + x)
    }
}

impl<'a, T: RationalInt> Sum<&'a Rational<T>> for Rational<T> {
    fn sum<I: Iterator<Item = &'a Rational<T>>>(iter: I) -> Self {
        iter.fold(Rational::default(), |acc, x| acc + x)
    }
}

impl<T: RationalInt> Product for Rational<T> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Rational::from_integer(T::one()), |acc, x| acc * x)
    }
}

impl<'a, T: RationalInt> Product<&'a Rational<T>> for Rational<T> {
    fn product<I: Iterator<Item = &'a Rational<T>>>(iter: I) -> Self {
        iter.fold(Rational::from_integer(T::one()), |acc, x| acc * x)
    }
}
