// Primality Oracle
// Miller-Rabin probabilistic test and random prime generation

use num_bigint::RandBigInt;
use num_integer::Integer;
use num_traits::One;
use rand::Rng;
use tracing::trace;

use super::bigint::{from_u64, mod_pow, RsaBigInt};
use crate::error::{CipherError, CipherResult};

/// Smallest bit length that can hold a prime
pub const MIN_PRIME_BITS: u64 = 2;

/// Write n-1 as 2^s * d with d odd
///
/// # Panics
///
/// Panics if `n <= 1`.
pub fn decompose(n: &RsaBigInt) -> (u64, RsaBigInt) {
    assert!(*n > RsaBigInt::one(), "decompose requires n > 1");

    let mut d = n - 1u8;
    let mut s = 0u64;
    while d.is_even() {
        d >>= 1;
        s += 1;
    }
    (s, d)
}

/// Whether `a` proves `n` composite
///
/// `false` means `a` is a strong liar or `n` is prime.
pub fn is_witness(n: &RsaBigInt, a: &RsaBigInt) -> bool {
    let (s, d) = decompose(n);
    witness_with(n, a, s, &d)
}

fn witness_with(n: &RsaBigInt, a: &RsaBigInt, s: u64, d: &RsaBigInt) -> bool {
    let n_minus_one = n - 1u8;
    let two = from_u64(2);

    let mut x = mod_pow(a, d, n);
    if x.is_one() || x == n_minus_one {
        return false;
    }

    for _ in 1..s {
        x = mod_pow(&x, &two, n);
        if x == n_minus_one {
            return false;
        }
    }

    true
}

/// Miller-Rabin test with `rounds` random bases in [2, n-1)
/// Returns true if n is probably prime
pub fn miller_rabin<R: Rng + ?Sized>(n: &RsaBigInt, rounds: u32, rng: &mut R) -> bool {
    // No base exists below 4
    if *n <= from_u64(3) {
        return *n >= from_u64(2);
    }

    let (s, d) = decompose(n);
    let two = from_u64(2);
    let n_minus_one = n - 1u8;

    for _ in 0..rounds {
        let a = rng.gen_biguint_range(&two, &n_minus_one);
        if witness_with(n, &a, s, &d) {
            return false;
        }
    }

    // Probably prime
    true
}

/// Primality check with fast paths for small and even numbers
pub fn is_prime<R: Rng + ?Sized>(n: &RsaBigInt, rounds: u32, rng: &mut R) -> bool {
    if *n <= RsaBigInt::one() || *n == from_u64(4) {
        return false;
    }
    if *n <= from_u64(3) {
        return true;
    }
    if n.is_even() {
        return false;
    }

    miller_rabin(n, rounds, rng)
}

/// Generate a random prime of at most `bit_length` bits
///
/// Candidates are uniform in [0, 2^bit_length); the top bit is not forced,
/// so the result may be shorter than requested.
pub fn generate_prime<R: Rng + ?Sized>(
    bit_length: u64,
    rounds: u32,
    rng: &mut R,
) -> CipherResult<RsaBigInt> {
    if bit_length < MIN_PRIME_BITS {
        return Err(CipherError::InvalidBitLength {
            min: MIN_PRIME_BITS,
            got: bit_length,
        });
    }

    let mut attempts = 0u64;
    loop {
        let candidate = rng.gen_biguint(bit_length);
        attempts += 1;

        if is_prime(&candidate, rounds, rng) {
            trace!(bit_length, attempts, bits = candidate.bits(), "found probable prime");
            return Ok(candidate);
        }
    }
}
