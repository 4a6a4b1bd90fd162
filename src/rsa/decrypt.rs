// RSA Decryption Implementation
// Recovers one character per block; any mismatch is fatal for the message

use num_traits::ToPrimitive;

use super::bigint::mod_pow;
use super::encrypt::CipherBlock;
use super::keygen::RsaPrivateKey;
use crate::error::{CipherError, CipherResult};

/// Decrypt a single block: block^d mod n, read back as a character
pub fn decrypt_block(
    index: usize,
    block: &CipherBlock,
    private_key: &RsaPrivateKey,
) -> CipherResult<char> {
    if *block >= private_key.n {
        return Err(CipherError::BlockOutOfRange { index });
    }

    let m = mod_pow(block, &private_key.d, &private_key.n);
    m.to_u32()
        .and_then(char::from_u32)
        .ok_or(CipherError::InvalidCharacter { index, value: m })
}

/// Decrypt cipher blocks to a string
///
/// Stops at the first block that does not decode; no partial text is returned.
pub fn decrypt_to_string(blocks: &[CipherBlock], private_key: &RsaPrivateKey) -> CipherResult<String> {
    blocks
        .iter()
        .enumerate()
        .map(|(index, block)| decrypt_block(index, block, private_key))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::bigint::from_u64;
    use crate::rsa::keygen::{generate_keypair, RsaPublicKey};
    use crate::rsa::seed::Seed;

    fn textbook_keys() -> (RsaPublicKey, RsaPrivateKey) {
        (
            RsaPublicKey::from((from_u64(17), from_u64(3233))),
            RsaPrivateKey::from((from_u64(2753), from_u64(3233))),
        )
    }

    #[test]
    fn test_decrypt_block() {
        let (_, private_key) = textbook_keys();
        assert_eq!(decrypt_block(0, &from_u64(2790), &private_key).unwrap(), 'A');
    }

    #[test]
    fn test_roundtrip_textbook_key() {
        let (public_key, private_key) = textbook_keys();
        let message = "Hello, RSA!";
        let blocks = public_key.encrypt(message);
        assert_eq!(private_key.decrypt(&blocks).unwrap(), message);
    }

    #[test]
    fn test_roundtrip_generated_key() {
        let keypair = generate_keypair(64, Some(&Seed::from("roundtrip"))).unwrap();
        let message = "Unicode too: é, €, 日本, 🦀";
        let blocks = keypair.public_key.encrypt(message);
        assert_eq!(blocks.len(), message.chars().count());
        assert_eq!(keypair.private_key.decrypt(&blocks).unwrap(), message);
    }

    #[test]
    fn test_decrypt_block_out_of_range() {
        let (_, private_key) = textbook_keys();
        let blocks = vec![from_u64(2790), from_u64(3233)];
        let result = decrypt_to_string(&blocks, &private_key);
        assert!(matches!(result, Err(CipherError::BlockOutOfRange { index: 1 })));
    }

    #[test]
    fn test_decrypt_invalid_character() {
        // Surrogate code points are not chars: 0xD800 = 55296
        let private_key = RsaPrivateKey::from((from_u64(1), from_u64(1 << 40)));
        let result = decrypt_to_string(&[from_u64(0xD800)], &private_key);
        assert!(matches!(result, Err(CipherError::InvalidCharacter { index: 0, .. })));

        let result = decrypt_to_string(&[from_u64(1 << 33)], &private_key);
        assert!(matches!(result, Err(CipherError::InvalidCharacter { index: 0, .. })));
    }

    #[test]
    fn test_decrypt_wrong_key() {
        let keypair1 = generate_keypair(64, Some(&Seed::from("first"))).unwrap();
        let keypair2 = generate_keypair(64, Some(&Seed::from("second"))).unwrap();

        let message = "Test message";
        let blocks = keypair1.public_key.encrypt(message);

        // Either a decoding error or garbage, never the original text
        if let Ok(text) = keypair2.private_key.decrypt(&blocks) {
            assert_ne!(text, message);
        }
    }
}
