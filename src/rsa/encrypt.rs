// RSA Encryption Implementation
// Textbook RSA, one cipher block per character, no padding

use super::bigint::{from_u64, mod_pow, RsaBigInt};
use super::keygen::RsaPublicKey;

/// One encrypted character
pub type CipherBlock = RsaBigInt;

/// Encrypt a single character: code_point^e mod n
///
/// Code points at or above `n` wrap modulo `n` and cannot be recovered by
/// decryption; keys shorter than 21 bits cannot carry every character.
pub fn encrypt_char(ch: char, public_key: &RsaPublicKey) -> CipherBlock {
    let m = from_u64(u64::from(u32::from(ch)));
    mod_pow(&m, &public_key.e, &public_key.n)
}

/// Encrypt a string using RSA public key
///
/// Identical characters produce identical blocks under the same key.
pub fn encrypt_string(message: &str, public_key: &RsaPublicKey) -> Vec<CipherBlock> {
    message
        .chars()
        .map(|ch| encrypt_char(ch, public_key))
        .collect()
}
