// Digest Module
// SHA-256 implemented directly on 32-bit words

pub mod sha256;

pub use sha256::{sha256, verify, Sha256, BLOCK_SIZE, DIGEST_SIZE};
