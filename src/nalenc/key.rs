//! Defines the [`Key`] struct, a 512-byte NALEnc key, and the [`Input`]
//! coercion type used to normalise text, byte buffers, and integer
//! sequences into the flat byte buffers the cipher operates on.

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::nalenc::error::{Error, Result};

/// Number of bytes a valid NALEnc key must contain.
pub const KEY_LEN: usize = 512;

/// Contains a valid NALEnc key: exactly 512 bytes.
///
/// A `Key` is required to instantiate a [Cipher](crate::Cipher).
///
/// ## Examples
/// ```
/// # fn main() -> nalenc::Result<()> {
/// use nalenc::Key;
///
/// let key = Key::generate()?;
/// assert_eq!(key.as_bytes().len(), 512);
///
/// let zero_key = Key::try_from_slice(&[0u8; 512])?;
/// assert_eq!(zero_key.as_bytes(), &[0u8; 512][..]);
///
/// // Any length other than 512 is rejected.
/// assert!(Key::try_from_slice(&[0u8; 16]).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Key {
    bytes: [u8; KEY_LEN],
}

impl Key {
    /// Generate a random 512-byte key. Returns Error if OsRng fails.
    pub fn generate() -> Result<Self> {
        let mut k = [0u8; KEY_LEN];
        OsRng.try_fill_bytes(&mut k)?;
        Ok(Self { bytes: k })
    }

    /// Attempts to build a key from a slice of bytes. Returns
    /// [InvalidKeyLength](Error::InvalidKeyLength) unless the slice is
    /// exactly 512 bytes long.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; KEY_LEN] = bytes
            .try_into()
            .map_err(|_| Error::InvalidKeyLength { len: bytes.len() })?;
        Ok(Self { bytes })
    }

    /// Returns a reference to the internal key as a slice of bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Polymorphic source for cipher input: a text string, a flat byte buffer,
/// or a sequence of integers each required to fall in 0..=255.
///
/// Mirrors the source's acceptance of strings, byte sequences, and integer
/// iterables at the encrypt/decrypt boundary: everything downstream
/// of [`Input::coerce`] is a plain `Vec<u8>`.
#[derive(Clone, Debug)]
pub enum Input {
    Text(String),
    Bytes(Vec<u8>),
    Ints(Vec<i64>),
}

impl Input {
    /// Normalises this input into a flat byte buffer.
    ///
    /// Fails with [InvalidInput](Error::InvalidInput) if an `Ints` source
    /// contains a value outside 0..=255.
    pub fn coerce(self) -> Result<Vec<u8>> {
        match self {
            Input::Text(s) => Ok(s.into_bytes()),
            Input::Bytes(b) => Ok(b),
            Input::Ints(ints) => {
                let mut out = Vec::with_capacity(ints.len());
                for v in ints {
                    if !(0..=255).contains(&v) {
                        return Err(Error::InvalidInput {
                            reason: "integer sequence element outside 0..=255",
                        });
                    }
                    out.push(v as u8);
                }
                Ok(out)
            }
        }
    }
}

impl From<&str> for Input {
    fn from(s: &str) -> Self {
        Input::Text(s.to_owned())
    }
}

impl From<String> for Input {
    fn from(s: String) -> Self {
        Input::Text(s)
    }
}

impl From<&[u8]> for Input {
    fn from(b: &[u8]) -> Self {
        Input::Bytes(b.to_vec())
    }
}

impl From<Vec<u8>> for Input {
    fn from(b: Vec<u8>) -> Self {
        Input::Bytes(b)
    }
}

impl From<Vec<i64>> for Input {
    fn from(ints: Vec<i64>) -> Self {
        Input::Ints(ints)
    }
}
