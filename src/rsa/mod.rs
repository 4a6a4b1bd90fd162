// RSA Module - Main module file
// Modular arithmetic, primality, key generation and per-character cipher

pub mod bigint;
pub mod conversation;
pub mod decrypt;
pub mod encrypt;
pub mod keygen;
pub mod prime;
pub mod seed;

pub use bigint::{gcd, mod_inverse, mod_pow, RsaBigInt};
pub use conversation::{Party, SealedMessage};
pub use decrypt::{decrypt_block, decrypt_to_string};
pub use encrypt::{encrypt_char, encrypt_string, CipherBlock};
pub use keygen::{
    generate_keypair, generate_keypair_with, generate_keys, GeneratedKeys, KeySelection,
    RsaKeyPair, RsaPrivateKey, RsaPublicKey, MIN_KEY_LENGTH,
};
pub use prime::{decompose, generate_prime, is_prime, is_witness, miller_rabin};
pub use seed::Seed;
