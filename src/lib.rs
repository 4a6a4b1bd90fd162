//! First-principles cryptographic primitives for a console messaging tool.
//!
//! * [`rsa`] -- modular arithmetic, Miller-Rabin primality, seeded RSA key
//!   generation and textbook per-character encryption.
//! * [`digest`] -- an independent SHA-256 implementation.
//! * [`config`] -- key generation settings.
//! * [`error`] -- the crate error type.
//!
//! The RSA scheme here encrypts one character per block with no padding.
//! Identical characters produce identical blocks under the same key, so it
//! must not be exposed beyond the messaging application it was built for.

pub mod config;
pub mod digest;
pub mod error;
pub mod rsa;

pub use config::KeyConfig;
pub use digest::{sha256, Sha256};
pub use error::{CipherError, CipherResult};
