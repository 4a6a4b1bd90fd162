// Key Generation Configuration
// Bit length and Miller-Rabin round count used by the key engine

/// Bit length of each prime when the caller does not pick one
pub const DEFAULT_KEY_LENGTH: u64 = 1024;

/// Miller-Rabin rounds per candidate; false positives are bounded by 4^-rounds
pub const DEFAULT_PRIMALITY_ROUNDS: u32 = 5;

/// Configuration for key pair generation
///
/// `key_length` is the bit length requested for each of the two primes, so
/// the modulus is up to twice as long.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyConfig {
    pub key_length: u64,
    pub rounds: u32,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            key_length: DEFAULT_KEY_LENGTH,
            rounds: DEFAULT_PRIMALITY_ROUNDS,
        }
    }
}

impl KeyConfig {
    pub fn with_key_length(mut self, key_length: u64) -> Self {
        self.key_length = key_length;
        self
    }

    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }
}
