//! Padding / framing: pads a plaintext to a multiple of 2048 bytes
//! with a pseudo-random tail seeded by the key, under a 2-byte big-endian
//! padding-length header.

use crate::nalenc::error::{Error, Result};
use crate::nalenc::key::{Key, KEY_LEN};

/// All padded messages (and therefore all ciphertexts) are a multiple of
/// this many bytes.
pub const FRAME_ALIGN: usize = 2048;

/// Bytes consumed by the padding-length header.
const HEADER_LEN: usize = 2;

/// Computes the padding length P for a plaintext of length `m`.
///
/// `m == 0` is handled as its own branch: it always gets a full
/// 2048-byte frame. For every `m > 0`, `base == FRAME_ALIGN - HEADER_LEN`
/// (2046) if and only if `m % FRAME_ALIGN == 0`, so the two conditions
/// of the spec's special case always agree for nonzero `m` and the short-
/// frame override is never reachable there; only the `m == 0` carve-out
/// applies.
fn padding_len(m: usize) -> usize {
    if m == 0 {
        return FRAME_ALIGN - HEADER_LEN;
    }
    (FRAME_ALIGN - (m + HEADER_LEN) % FRAME_ALIGN) % FRAME_ALIGN
}

/// `k mod c`, defined as 0 when `c == 0` (only reachable when padding an
/// empty plaintext, where the counter C starts at 0).
fn wrapping_mod(k: usize, c: usize) -> usize {
    if c == 0 { 0 } else { k % c }
}

/// Pads `plaintext` into a frame whose length is a multiple of 2048 (with
/// one documented exception for a plaintext length that is itself a
/// multiple of 2048, reproduced literally rather than "fixed").
pub fn pad(plaintext: &[u8], key: &Key) -> Vec<u8> {
    let m = plaintext.len();
    let p = padding_len(m);
    let k = key.as_bytes();

    let mut buf = vec![0u8; HEADER_LEN + m + p];
    buf[0..HEADER_LEN].copy_from_slice(&(p as u16).to_be_bytes());
    buf[HEADER_LEN..HEADER_LEN + m].copy_from_slice(plaintext);

    let mut c = m;
    for i in 0..p {
        let byte = k[i % KEY_LEN] as usize;
        let a = wrapping_mod(byte, c);
        let b = wrapping_mod(byte + 1, c);
        buf[HEADER_LEN + m + i] = buf[HEADER_LEN + a] ^ buf[HEADER_LEN + b];
        c += 1;
    }

    buf
}

/// Strips the header and padding tail from a decrypted frame, recovering
/// the original plaintext.
pub fn unpad(frame: &[u8]) -> Result<Vec<u8>> {
    let p = u16::from_be_bytes([frame[0], frame[1]]) as usize;
    if p > frame.len().saturating_sub(HEADER_LEN) {
        return Err(Error::InvalidPaddingLength {
            padding: p,
            available: frame.len() - HEADER_LEN,
        });
    }
    Ok(frame[HEADER_LEN..frame.len() - p].to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_of(byte: u8) -> Key {
        Key::try_from_slice(&vec![byte; KEY_LEN]).unwrap()
    }

    #[test]
    fn empty_plaintext_yields_2048_byte_frame() {
        let key = key_of(0);
        let frame = pad(&[], &key);
        assert_eq!(frame.len(), FRAME_ALIGN);
        assert_eq!(u16::from_be_bytes([frame[0], frame[1]]) as usize, 2046);
    }

    #[test]
    fn exact_2046_byte_plaintext_has_zero_padding() {
        let key = key_of(1);
        let plaintext = vec![0x01u8; 2046];
        let frame = pad(&plaintext, &key);
        assert_eq!(frame.len(), FRAME_ALIGN);
        assert_eq!(&frame[0..2], &[0, 0]);
        assert_eq!(&frame[2..], &plaintext[..]);
    }

    #[test]
    fn roundtrip_header_recovers_plaintext() {
        let key = key_of(0xAA);
        for len in [
            0usize, 1, 511, 512, 2045, 2046, 2047, 2048, 2049, 4096, 65535, 65536,
        ] {
            let plaintext: Vec<u8> = (0..len).map(|i| (i % 251) as u8).collect();
            let frame = pad(&plaintext, &key);
            assert_eq!(frame.len() % FRAME_ALIGN, 0);
            let recovered = unpad(&frame).unwrap();
            assert_eq!(recovered, plaintext, "len {len}");
        }
    }

    #[test]
    fn unpad_rejects_oversized_padding_length() {
        let mut frame = vec![0u8; FRAME_ALIGN];
        frame[0..2].copy_from_slice(&(u16::MAX).to_be_bytes());
        assert!(unpad(&frame).is_err());
    }

    #[test]
    fn empty_plaintext_padding_is_all_zero() {
        // Consequence of the wrapping_mod(_, 0) = 0 resolution: every
        // padding byte collapses to the XOR of two already-zero bytes.
        let key = key_of(0x42);
        let frame = pad(&[], &key);
        assert!(frame[2..].iter().all(|&b| b == 0));
    }
}
