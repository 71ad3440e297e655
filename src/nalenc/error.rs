use thiserror::Error;
use rand::rand_core;

/// NALEnc Result type.
pub type Result<T> = std::result::Result<T, Error>;

/// NALEnc Error type.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Attempted to instantiate a key with a length other than 512 bytes.
    #[error("invalid key length: {len} bytes (expected 512)")]
    InvalidKeyLength { len: usize },

    /// Input coercion failed: a text/byte/integer source could not be
    /// turned into a flat buffer of bytes in 0..=255.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: &'static str },

    /// Ciphertext length was zero or not a multiple of 2048.
    #[error("invalid ciphertext length: {len} bytes (expected a positive multiple of 2048)")]
    InvalidCiphertextLength { len: usize },

    /// Recovered padding length P exceeded the space available in the frame.
    #[error("invalid padding length: {padding} exceeds available buffer of {available} bytes")]
    InvalidPaddingLength { padding: usize, available: usize },

    /// OS RNG failed during random key generation.
    #[error("OS RNG failed in random key generation")]
    Rng(#[from] rand_core::OsError),
}
