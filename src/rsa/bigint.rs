// RSA Big Integer Operations
// Modular arithmetic toolkit built on num-bigint storage

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

/// RSA Big Integer type alias
pub type RsaBigInt = BigUint;

/// Create a big integer from u64
pub fn from_u64(n: u64) -> RsaBigInt {
    RsaBigInt::from(n)
}

/// Create a big integer from bytes (big-endian)
pub fn from_bytes(bytes: &[u8]) -> RsaBigInt {
    RsaBigInt::from_bytes_be(bytes)
}

/// Convert big integer to bytes (big-endian)
pub fn to_bytes(n: &RsaBigInt) -> Vec<u8> {
    n.to_bytes_be()
}

/// Modular exponentiation: base^exponent mod modulus
/// Uses square-and-multiply, one squaring per exponent bit
///
/// # Panics
///
/// Panics if `modulus` is zero.
pub fn mod_pow(base: &RsaBigInt, exponent: &RsaBigInt, modulus: &RsaBigInt) -> RsaBigInt {
    assert!(!modulus.is_zero(), "modulus must be positive");
    if modulus.is_one() {
        return RsaBigInt::zero();
    }

    let mut result = RsaBigInt::one();
    let mut base = base % modulus;
    let mut exponent = exponent.clone();

    while !exponent.is_zero() {
        if exponent.is_odd() {
            result = (&result * &base) % modulus;
        }
        exponent >>= 1;
        base = (&base * &base) % modulus;
    }

    result
}

/// Compute modular inverse: a^(-1) mod m, normalized into [0, m)
/// Returns None if gcd(a, m) != 1
pub fn mod_inverse(a: &RsaBigInt, modulus: &RsaBigInt) -> Option<RsaBigInt> {
    if modulus.is_zero() {
        return None;
    }

    // Iterative extended Euclid; only the coefficient of `a` is tracked
    let m = BigInt::from(modulus.clone());
    let mut old_r = BigInt::from(a % modulus);
    let mut r = m.clone();
    let mut old_s = BigInt::one();
    let mut s = BigInt::zero();

    while !r.is_zero() {
        let q = &old_r / &r;
        let next_r = &old_r - &q * &r;
        old_r = std::mem::replace(&mut r, next_r);
        let next_s = &old_s - &q * &s;
        old_s = std::mem::replace(&mut s, next_s);
    }

    if !old_r.is_one() {
        // Inverse doesn't exist
        return None;
    }

    old_s.mod_floor(&m).to_biguint()
}

/// Greatest common divisor (Euclid); gcd(a, 0) = a
pub fn gcd(a: &RsaBigInt, b: &RsaBigInt) -> RsaBigInt {
    let mut a = a.clone();
    let mut b = b.clone();
    while !b.is_zero() {
        let r = &a % &b;
        a = std::mem::replace(&mut b, r);
    }
    a
}
