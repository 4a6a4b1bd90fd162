// Key Seeds
// Reproducible random streams for regenerating keys on demand

use std::fmt;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::digest::Sha256;

/// Suffix distinguishing the second prime's stream from the first
const SECOND_PRIME_SUFFIX: &[u8] = b"1";

/// Seed material for deterministic key generation
///
/// The same seed always yields the same key pair, which lets the messaging
/// application rebuild a private key from the user's credentials instead of
/// storing it. Each prime gets its own stream:
///
/// - `p`: `ChaCha20Rng::from_seed(SHA-256(material))`
/// - `q` and `e`: `ChaCha20Rng::from_seed(SHA-256(material || "1"))`
#[derive(Clone, PartialEq, Eq)]
pub struct Seed(Vec<u8>);

impl Seed {
    /// Seed from raw material
    pub fn new(material: impl AsRef<[u8]>) -> Self {
        Self(material.as_ref().to_vec())
    }

    /// Seed from a user identity and credential
    ///
    /// Material is `u64_be(len(identity)) || identity || credential`, so
    /// ("ab", "c") and ("a", "bc") produce different seeds. The prefix is
    /// 64 bits wide so it cannot wrap for any slice length.
    pub fn from_credentials(identity: &str, credential: &str) -> Self {
        let identity = identity.as_bytes();
        let mut material = Vec::with_capacity(8 + identity.len() + credential.len());
        material.extend_from_slice(&(identity.len() as u64).to_be_bytes());
        material.extend_from_slice(identity);
        material.extend_from_slice(credential.as_bytes());
        Self(material)
    }

    /// Independent streams for the two primes
    pub fn prime_streams(&self) -> (ChaCha20Rng, ChaCha20Rng) {
        (self.stream(&[]), self.stream(SECOND_PRIME_SUFFIX))
    }

    fn stream(&self, suffix: &[u8]) -> ChaCha20Rng {
        let mut hasher = Sha256::new();
        hasher.update(&self.0);
        hasher.update(suffix);
        ChaCha20Rng::from_seed(hasher.finalize())
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed(..)")
    }
}

impl From<&str> for Seed {
    fn from(material: &str) -> Self {
        Self::new(material)
    }
}

/// Entropy-seeded streams for unseeded generation
pub fn entropy_streams() -> (ChaCha20Rng, ChaCha20Rng) {
    (ChaCha20Rng::from_entropy(), ChaCha20Rng::from_entropy())
}
