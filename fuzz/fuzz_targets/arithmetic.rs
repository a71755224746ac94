#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use rational::{gcd, Rational};

fn assert_canonical(value: &Rational) {
    assert!(!value.denom().is_negative());
    if value.denom().is_zero() {
        assert!(value.numer().is_zero() || value.numer().abs().is_one());
    } else {
        assert!(gcd(value.numer(), value.denom()).is_one());
    }
}

fuzz_target!(|data: &[u8]| {
    // Four signed little-endian integers of up to 32 bytes each.
    if data.len() > 128 {
        return;
    }
    let mut chunks = data.chunks(data.len() / 4 + 1);
    let mut next = || BigInt::from_signed_bytes_le(chunks.next().unwrap_or(&[]));

    let a = Rational::new(next(), next());
    let b = Rational::new(next(), next());

    for value in [
        &a + &b,
        &a - &b,
        &a * &b,
        &a / &b,
        &a % &b,
        a.modulo(&b),
        a.recip(),
        -&b,
    ] {
        assert_canonical(&value);
        let _ = value.to_string();
    }

    let _ = a.floor();
    let _ = a.ceil();
    let _ = a.fix();
});
