use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use rational::{compare, gcd, Rational};

const ROUNDS: usize = 2000;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x7261_7469_6f6e_616c)
}

// Mostly small values, with the occasional huge one so `BigInt` actually
// spills past a machine word.
fn random_int(rng: &mut StdRng) -> BigInt {
    let n = BigInt::from(rng.gen_range(-60i64..=60));
    if rng.gen_ratio(1, 8) {
        n * BigInt::from(10u8).pow(rng.gen_range(18..40))
    } else {
        n
    }
}

fn random_finite(rng: &mut StdRng) -> Rational {
    loop {
        let denom = random_int(rng);
        if !denom.is_zero() {
            return Rational::new(random_int(rng), denom);
        }
    }
}

fn random_any(rng: &mut StdRng) -> Rational {
    Rational::new(random_int(rng), random_int(rng))
}

fn oracle(value: &Rational) -> BigRational {
    BigRational::new(value.numer().clone(), value.denom().clone())
}

fn assert_canonical(value: &Rational) {
    assert!(!value.denom().is_negative(), "negative denominator in {value:?}");

    if value.is_nan() {
        assert!(value.numer().is_zero());
    } else if value.is_infinite() {
        assert!(value.numer().abs().is_one(), "unreduced infinity {value:?}");
    } else {
        assert!(value.denom().is_positive());
        assert!(gcd(value.numer(), value.denom()).is_one(), "unreduced {value:?}");
    }
}

#[test]
fn every_operator_yields_canonical_values() {
    let mut rng = rng();

    for _ in 0..ROUNDS {
        let a = random_any(&mut rng);
        let b = random_any(&mut rng);

        assert_canonical(&a);
        assert_canonical(&(&a + &b));
        assert_canonical(&(&a - &b));
        assert_canonical(&(&a * &b));
        assert_canonical(&(&a / &b));
        assert_canonical(&(&a % &b));
        assert_canonical(&a.modulo(&b));
        assert_canonical(&-&a);
        assert_canonical(&a.recip());
        assert_canonical(&a.abs());

        let mut c = a.clone();
        c *= &b;
        c -= &a;
        assert_canonical(&c);
    }
}

#[test]
fn arithmetic_matches_num_rational() {
    let mut rng = rng();

    for _ in 0..ROUNDS {
        let a = random_finite(&mut rng);
        let b = random_finite(&mut rng);
        let (x, y) = (oracle(&a), oracle(&b));

        assert_eq!(oracle(&(&a + &b)), &x + &y);
        assert_eq!(oracle(&(&a - &b)), &x - &y);
        assert_eq!(oracle(&(&a * &b)), &x * &y);

        if !b.is_zero() {
            assert_eq!(oracle(&(&a / &b)), &x / &y);
        }

        assert_eq!(a.floor(), x.floor().to_integer());
        assert_eq!(a.ceil(), x.ceil().to_integer());
        assert_eq!(a.fix(), x.trunc().to_integer());
    }
}

#[test]
fn additive_and_multiplicative_inverses() {
    let mut rng = rng();

    for _ in 0..ROUNDS {
        let a = random_finite(&mut rng);
        assert!((&a + &(-&a)).is_zero(), "{a} + -{a} != 0");

        if !a.is_zero() {
            assert!((&a * &a.recip()).is_integer());
            assert_eq!(&a * &a.recip(), Rational::one());
        }
    }
}

#[test]
fn equality_agrees_with_compare() {
    let mut rng = rng();

    for _ in 0..ROUNDS {
        let a = random_finite(&mut rng);
        let b = if rng.gen_bool(0.25) {
            a.clone()
        } else {
            random_finite(&mut rng)
        };

        assert_eq!(compare(&a, &b).is_zero(), a == b);
        assert_eq!(compare(&a, &b).is_negative(), a < b);
        assert_eq!(a.partial_cmp(&b), oracle(&a).partial_cmp(&oracle(&b)));
    }
}

#[test]
fn normalization_is_idempotent() {
    let mut rng = rng();

    for _ in 0..ROUNDS {
        let a = random_any(&mut rng);
        let again = Rational::new(a.numer().clone(), a.denom().clone());
        assert_eq!(again.numer(), a.numer());
        assert_eq!(again.denom(), a.denom());
    }
}

#[test]
fn remainders_follow_their_sign_rules() {
    let mut rng = rng();

    for _ in 0..ROUNDS {
        let a = random_finite(&mut rng);
        let b = random_finite(&mut rng);
        if b.is_zero() {
            continue;
        }

        let m = a.modulo(&b);
        let r = &a % &b;

        assert!(m.abs() < b.abs());
        assert!(r.abs() < b.abs());
        assert!(m.is_zero() || m.is_negative() == b.is_negative());
        assert!(r.is_zero() || r.is_negative() == a.is_negative());

        // a == b * q + remainder for an integer q in both cases.
        assert!(((&a - &m) / &b).is_integer());
        assert!(((&a - &r) / &b).is_integer());
    }
}

#[test]
fn formatting_round_trips_through_num_rational() {
    let mut rng = rng();

    for _ in 0..ROUNDS {
        let a = random_finite(&mut rng);
        assert_eq!(a.to_string(), oracle(&a).to_string());
    }
}
