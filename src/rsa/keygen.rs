// RSA Key Generation
// Derives (e, n) / (d, n) key pairs from two generated primes

use std::fmt;

use num_bigint::RandBigInt;
use num_traits::One;
use rand::Rng;
use tracing::{debug, trace};

use super::bigint::{from_u64, gcd, mod_inverse, RsaBigInt};
use super::prime::generate_prime;
use super::seed::{entropy_streams, Seed};
use crate::config::KeyConfig;
use crate::error::{CipherError, CipherResult};

/// Smallest prime bit length for which a valid exponent always exists
pub const MIN_KEY_LENGTH: u64 = 3;

/// RSA Public Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    pub e: RsaBigInt, // Public exponent
    pub n: RsaBigInt, // Modulus
}

/// RSA Private Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPrivateKey {
    pub d: RsaBigInt, // Private exponent
    pub n: RsaBigInt, // Modulus (same as public)
}

/// RSA Key Pair (both public and private keys)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaKeyPair {
    pub public_key: RsaPublicKey,
    pub private_key: RsaPrivateKey,
    /// Requested bit length of each prime
    pub bit_length: u64,
}

/// Which halves of a key pair the caller wants back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeySelection {
    PublicOnly,
    PrivateOnly,
    #[default]
    Both,
}

/// Output of [`generate_keys`], shaped by the requested [`KeySelection`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedKeys {
    Public(RsaPublicKey),
    Private(RsaPrivateKey),
    Both(RsaKeyPair),
}

impl RsaPublicKey {
    /// Get the bit length of the modulus
    pub fn bit_length(&self) -> u64 {
        self.n.bits()
    }

    /// Encrypt a message one character per block
    pub fn encrypt(&self, message: &str) -> Vec<RsaBigInt> {
        super::encrypt::encrypt_string(message, self)
    }

    /// The `(e, n)` pair as persisted by the application
    pub fn to_pair(&self) -> (RsaBigInt, RsaBigInt) {
        (self.e.clone(), self.n.clone())
    }
}

impl RsaPrivateKey {
    /// Get the bit length of the modulus
    pub fn bit_length(&self) -> u64 {
        self.n.bits()
    }

    /// Decrypt per-character cipher blocks back into text
    pub fn decrypt(&self, blocks: &[RsaBigInt]) -> CipherResult<String> {
        super::decrypt::decrypt_to_string(blocks, self)
    }

    pub fn to_pair(&self) -> (RsaBigInt, RsaBigInt) {
        (self.d.clone(), self.n.clone())
    }
}

impl From<(RsaBigInt, RsaBigInt)> for RsaPublicKey {
    fn from((e, n): (RsaBigInt, RsaBigInt)) -> Self {
        Self { e, n }
    }
}

impl From<(RsaBigInt, RsaBigInt)> for RsaPrivateKey {
    fn from((d, n): (RsaBigInt, RsaBigInt)) -> Self {
        Self { d, n }
    }
}

impl fmt::Display for RsaPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.e, self.n)
    }
}

impl fmt::Display for RsaPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.d, self.n)
    }
}

impl RsaKeyPair {
    /// Get the bit length of the modulus
    pub fn modulus_bits(&self) -> u64 {
        self.public_key.bit_length()
    }
}

/// Generate an RSA key pair with `key_length`-bit primes and default rounds
///
/// With a seed, the same `(key_length, seed)` always yields the same keys.
pub fn generate_keypair(key_length: u64, seed: Option<&Seed>) -> CipherResult<RsaKeyPair> {
    generate_keypair_with(&KeyConfig::default().with_key_length(key_length), seed)
}

/// Generate an RSA key pair from an explicit configuration
pub fn generate_keypair_with(config: &KeyConfig, seed: Option<&Seed>) -> CipherResult<RsaKeyPair> {
    if config.key_length < MIN_KEY_LENGTH {
        return Err(CipherError::InvalidBitLength {
            min: MIN_KEY_LENGTH,
            got: config.key_length,
        });
    }

    debug!(
        key_length = config.key_length,
        rounds = config.rounds,
        seeded = seed.is_some(),
        "generating RSA key pair"
    );

    // Step 1: One private stream per prime
    let (mut rng_p, mut rng_q) = match seed {
        Some(seed) => seed.prime_streams(),
        None => entropy_streams(),
    };

    let keypair = derive_keypair(config, &mut rng_p, &mut rng_q)?;

    debug!(modulus_bits = keypair.modulus_bits(), "RSA key pair ready");
    Ok(keypair)
}

fn derive_keypair<P: Rng + ?Sized, Q: Rng + ?Sized>(
    config: &KeyConfig,
    rng_p: &mut P,
    rng_q: &mut Q,
) -> CipherResult<RsaKeyPair> {
    let three = from_u64(3);

    // Step 2: Generate the two primes
    let p = generate_prime(config.key_length, config.rounds, rng_p)?;
    let mut q = generate_prime(config.key_length, config.rounds, rng_q)?;

    // Step 3: Compute n = p * q and phi = (p-1)(q-1)
    // q is redrawn from its own stream while it equals p or leaves no room for e
    let phi = loop {
        if q != p {
            let phi = (&p - 1u8) * (&q - 1u8);
            if phi >= three {
                break phi;
            }
        }
        trace!("redrawing second prime");
        q = generate_prime(config.key_length, config.rounds, rng_q)?;
    };
    let n = &p * &q;

    // Step 4: Pick e in [2, phi) coprime with phi
    let two = from_u64(2);
    let e = loop {
        let e = rng_q.gen_biguint_range(&two, &phi);
        if gcd(&e, &phi).is_one() {
            break e;
        }
    };

    // Step 5: Compute d = e^(-1) mod phi
    let d = mod_inverse(&e, &phi).ok_or(CipherError::NotInvertible)?;

    Ok(RsaKeyPair {
        public_key: RsaPublicKey { e, n: n.clone() },
        private_key: RsaPrivateKey { d, n },
        bit_length: config.key_length,
    })
}

/// Generate keys and return only the halves named by `selection`
pub fn generate_keys(
    config: &KeyConfig,
    seed: Option<&Seed>,
    selection: KeySelection,
) -> CipherResult<GeneratedKeys> {
    let keypair = generate_keypair_with(config, seed)?;
    Ok(match selection {
        KeySelection::PublicOnly => GeneratedKeys::Public(keypair.public_key),
        KeySelection::PrivateOnly => GeneratedKeys::Private(keypair.private_key),
        KeySelection::Both => GeneratedKeys::Both(keypair),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::bigint::mod_pow;

    fn config(bits: u64) -> KeyConfig {
        KeyConfig::default().with_key_length(bits)
    }

    #[test]
    fn test_key_generation() {
        let keypair = generate_keypair(64, None).unwrap();
        assert_eq!(keypair.bit_length, 64);
        assert!(keypair.modulus_bits() <= 128);
        assert_eq!(keypair.public_key.n, keypair.private_key.n);
        assert!(keypair.private_key.d > from_u64(0));
    }

    #[test]
    fn test_key_properties() {
        let seed = Seed::from("properties");
        let keypair = generate_keypair(48, Some(&seed)).unwrap();
        let RsaKeyPair { public_key, private_key, .. } = keypair;

        // (m^e)^d = m for a spread of messages below n
        for m in [0u64, 1, 2, 65, 0x20AC, 123_456_789] {
            let m = from_u64(m);
            let c = mod_pow(&m, &public_key.e, &public_key.n);
            assert_eq!(mod_pow(&c, &private_key.d, &private_key.n), m);
        }
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let seed = Seed::from_credentials("alice", "correct horse");
        let a = generate_keypair(64, Some(&seed)).unwrap();
        let b = generate_keypair(64, Some(&seed)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = generate_keypair(64, Some(&Seed::from("alice"))).unwrap();
        let b = generate_keypair(64, Some(&Seed::from("bob"))).unwrap();
        assert_ne!(a.public_key, b.public_key);
    }

    #[test]
    fn test_tiny_key_length() {
        // Only a handful of primes fit; generation must still terminate
        for seed in ["a", "b", "c", "d"] {
            let keypair = generate_keypair(3, Some(&Seed::from(seed))).unwrap();
            let n = &keypair.public_key.n;
            let c = mod_pow(&from_u64(2), &keypair.public_key.e, n);
            assert_eq!(mod_pow(&c, &keypair.private_key.d, n), from_u64(2) % n);
        }
    }

    #[test]
    fn test_rejects_short_key_length() {
        for bits in [0u64, 1, 2] {
            let result = generate_keypair(bits, None);
            assert!(matches!(result, Err(CipherError::InvalidBitLength { min: 3, .. })));
        }
    }

    #[test]
    fn test_selection() {
        let seed = Seed::from("selection");
        let cfg = config(40);
        let both = match generate_keys(&cfg, Some(&seed), KeySelection::Both).unwrap() {
            GeneratedKeys::Both(keypair) => keypair,
            other => panic!("unexpected {:?}", other),
        };
        assert_eq!(
            generate_keys(&cfg, Some(&seed), KeySelection::PublicOnly).unwrap(),
            GeneratedKeys::Public(both.public_key.clone())
        );
        assert_eq!(
            generate_keys(&cfg, Some(&seed), KeySelection::PrivateOnly).unwrap(),
            GeneratedKeys::Private(both.private_key.clone())
        );
    }

    #[test]
    fn test_pair_conversion_and_display() {
        let public_key = RsaPublicKey::from((from_u64(17), from_u64(3233)));
        assert_eq!(public_key.to_pair(), (from_u64(17), from_u64(3233)));
        assert_eq!(public_key.to_string(), "(17, 3233)");

        let private_key = RsaPrivateKey::from((from_u64(2753), from_u64(3233)));
        assert_eq!(private_key.to_string(), "(2753, 3233)");
        assert_eq!(private_key.bit_length(), 12);
    }
}
