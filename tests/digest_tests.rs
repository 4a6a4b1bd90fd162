//! Cross-checks the hand-written SHA-256 against the `sha2` crate.

use cipher_core::digest::{sha256, Sha256};
use proptest::prelude::*;
use sha2::Digest;

proptest! {
    #[test]
    fn matches_reference(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        let expected = hex::encode(sha2::Sha256::digest(&data));
        prop_assert_eq!(sha256(&data), expected);
    }

    #[test]
    fn chunking_does_not_matter(
        data in proptest::collection::vec(any::<u8>(), 0..300),
        chunk in 1usize..80,
    ) {
        let mut hasher = Sha256::new();
        for piece in data.chunks(chunk) {
            hasher.update(piece);
        }
        prop_assert_eq!(hasher.finalize(), Sha256::digest(&data));
    }
}

#[test]
fn boundary_lengths_match_reference() {
    for len in [55usize, 56, 57, 63, 64, 65, 119, 120, 127, 128] {
        let data = vec![0x5a; len];
        assert_eq!(
            sha256(&data),
            hex::encode(sha2::Sha256::digest(&data)),
            "length {}",
            len
        );
    }
}
