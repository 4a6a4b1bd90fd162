// Error types shared by the key engine and cipher functions

use num_bigint::BigUint;

/// Errors surfaced by key generation, encryption and decryption
///
/// None of these are retryable for the same inputs: they signal either a
/// pathological parameter or a key/ciphertext mismatch.
#[derive(Debug, thiserror::Error)]
pub enum CipherError {
    #[error("bit length must be at least {min}, got {got}")]
    InvalidBitLength { min: u64, got: u64 },
    #[error("cipher block {index} is not below the key modulus")]
    BlockOutOfRange { index: usize },
    #[error("cipher block {index} decrypts to {value}, which is not a valid character")]
    InvalidCharacter { index: usize, value: BigUint },
    #[error("no modular inverse exists")]
    NotInvertible,
}

/// Result type for cipher operations
pub type CipherResult<T> = Result<T, CipherError>;
