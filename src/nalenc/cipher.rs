use crate::nalenc::core;
use crate::nalenc::error::{Error, Result};
use crate::nalenc::framing;
use crate::nalenc::framing::FRAME_ALIGN;
use crate::nalenc::key::{Input, Key};
use crate::nalenc::schedule::RoundKeyTable;

/// NALEnc cipher instance. Holds the round-key table derived once from a
/// 512-byte [`Key`] and exposes [`encrypt`](Cipher::encrypt) /
/// [`decrypt`](Cipher::decrypt) as read-only operations on it.
pub struct Cipher {
    table: RoundKeyTable,
    key: Key,
}

impl Cipher {
    /// Derives the round-key table from `key` and stores it in the
    /// returned instance.
    pub fn new(key: &Key) -> Self {
        Self {
            table: RoundKeyTable::derive(key),
            key: key.clone(),
        }
    }

    /// Encrypts `plaintext` of any length, returning a ciphertext whose
    /// length is a multiple of 2048 bytes (with one documented exception
    /// for empty plaintext, see `padding_len`).
    ///
    /// Control flow: pad/frame → split into 4 quarters → 256-round
    /// forward transform → concatenate.
    pub fn encrypt(&self, plaintext: &[u8]) -> Vec<u8> {
        let padded = framing::pad(plaintext, &self.key);
        core::encrypt(&padded, &self.table)
    }

    /// Coerces `input` (text, a byte buffer, or an integer sequence) into a
    /// flat byte buffer via [`Input::coerce`], then encrypts it.
    ///
    /// Fails with [InvalidInput](Error::InvalidInput) if `input` is an
    /// integer sequence containing a value outside 0..=255.
    pub fn encrypt_input(&self, input: impl Into<Input>) -> Result<Vec<u8>> {
        let plaintext = input.into().coerce()?;
        Ok(self.encrypt(&plaintext))
    }

    /// Decrypts `ciphertext`, returning the original plaintext.
    ///
    /// Control flow: split into 4 quarters → 256-round inverse transform
    /// → concatenate → strip header/padding.
    ///
    /// Returns [InvalidCiphertextLength](Error::InvalidCiphertextLength)
    /// if `ciphertext` is empty or not a multiple of 2048 bytes, and
    /// [InvalidPaddingLength](Error::InvalidPaddingLength) if the
    /// recovered padding length does not fit the decrypted frame. Neither
    /// error implies tamper detection: NALEnc provides no authentication,
    /// so decrypting under the wrong key ordinarily produces garbage
    /// plaintext without raising anything at all.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        if ciphertext.is_empty() || ciphertext.len() % FRAME_ALIGN != 0 {
            return Err(Error::InvalidCiphertextLength {
                len: ciphertext.len(),
            });
        }
        let padded = core::decrypt(ciphertext, &self.table);
        framing::unpad(&padded)
    }
}
