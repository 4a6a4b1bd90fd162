// Conversation Messages
// Each message is encrypted twice so both parties can read their history

use super::decrypt::decrypt_to_string;
use super::encrypt::{encrypt_string, CipherBlock};
use super::keygen::{RsaPrivateKey, RsaPublicKey};
use crate::error::CipherResult;

/// Side of a conversation a stored copy belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Party {
    Sender,
    Recipient,
}

/// A message encrypted independently under the sender's and recipient's keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedMessage {
    pub for_sender: Vec<CipherBlock>,
    pub for_recipient: Vec<CipherBlock>,
}

impl SealedMessage {
    pub fn seal(
        message: &str,
        sender_key: &RsaPublicKey,
        recipient_key: &RsaPublicKey,
    ) -> Self {
        Self {
            for_sender: encrypt_string(message, sender_key),
            for_recipient: encrypt_string(message, recipient_key),
        }
    }

    /// Cipher blocks stored for `party`
    pub fn blocks(&self, party: Party) -> &[CipherBlock] {
        match party {
            Party::Sender => &self.for_sender,
            Party::Recipient => &self.for_recipient,
        }
    }

    /// Decrypt the copy stored for `party` with that party's private key
    pub fn open(&self, party: Party, private_key: &RsaPrivateKey) -> CipherResult<String> {
        decrypt_to_string(self.blocks(party), private_key)
    }
}
