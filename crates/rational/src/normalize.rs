use crate::RationalInt;

// Euclid over signed remainders. The result may be negative; taking `abs` of
// the inputs up front would overflow on a primitive `MIN`.
fn signed_gcd<T: RationalInt>(a: &T, b: &T) -> T {
    let minus_one = -T::one();
    let mut a = a.clone();
    let mut b = b.clone();

    while !b.is_zero() {
        // `MIN % -1` overflows on primitives; the remainder is always zero.
        let r = if b == minus_one {
            T::zero()
        } else {
            a % b.clone()
        };
        a = b;
        b = r;
    }

    a
}

/// Euclidean gcd of the magnitudes. `gcd(x, 0) == |x|`.
///
/// For primitives the result must fit in `T`, so `gcd(MIN, 0)` and
/// `gcd(MIN, MIN)` overflow.
pub fn gcd<T: RationalInt>(a: &T, b: &T) -> T {
    signed_gcd(a, b).abs()
}

/// Reduces `num / den` to canonical form.
///
/// The result always has `den >= 0` and the sign lives in `num`.
/// `(0, 0)` stays `(0, 0)` (NaN) and `(n, 0)` with `n != 0` becomes
/// `(signum(n), 0)` (signed infinity).
pub fn normalize<T: RationalInt>(num: T, den: T) -> (T, T) {
    if den.is_zero() {
        if num.is_zero() {
            log::trace!("normalize: 0/0 collapses to NaN");
            return (num, den);
        }
        log::trace!("normalize: {num}/0 collapses to infinity");
        return (num.signum(), den);
    }

    if num.is_zero() {
        return (num, T::one());
    }

    // A common divisor of -1 is the same as 1, and dividing `MIN` by it
    // would overflow.
    let mut g = signed_gcd(&num, &den);
    if g == -T::one() {
        g = T::one();
    }

    let mut num = num / g.clone();
    let mut den = den / g;

    if den.is_negative() {
        num = -num;
        den = -den;
    }

    (num, den)
}
