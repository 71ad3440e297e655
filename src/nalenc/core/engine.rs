//! Round Engine: the 256-round forward and inverse transform over
//! a 4-row split of the padded message.

use rayon::prelude::*;

use crate::nalenc::core::util::{non_neg_mod, xor_into};
use crate::nalenc::key::KEY_LEN;
use crate::nalenc::schedule::{RoundKeyTable, ROUNDS};

/// Below this per-row length, block-level work runs on the calling thread
/// instead of being handed to the rayon pool.
pub const PARALLEL_THRESHOLD: usize = 4 * 1024;

/// Splits a padded message into 4 equal-length row buffers.
fn split_quarters(padded: &[u8]) -> Vec<Vec<u8>> {
    debug_assert_eq!(padded.len() % 4, 0, "padded message must split evenly into 4 rows");
    let l = padded.len() / 4;
    (0..4).map(|r| padded[r * l..(r + 1) * l].to_vec()).collect()
}

/// `for r in 0..3: Q[r] ^= Q[r+1]`, read-before-write order preserving
/// the simultaneous-update semantics of the mix step.
fn mix_forward(rows: &mut [Vec<u8>]) {
    for r in 0..3 {
        let (left, right) = rows.split_at_mut(r + 1);
        xor_into(&mut left[r], &right[0]);
    }
}

/// `Q[2]^=Q[3]; Q[1]^=Q[2]; Q[0]^=Q[1]`, each step reading the row just
/// updated by the previous one — the exact inverse of [`mix_forward`].
fn mix_inverse(rows: &mut [Vec<u8>]) {
    for r in (0..3).rev() {
        let (left, right) = rows.split_at_mut(r + 1);
        xor_into(&mut left[r], &right[0]);
    }
}

/// CryptParts: XORs every 512-byte block of every row against the round
/// key, rotated by `shift = block_index + row_index` positions.
fn crypt_parts(rows: &[Vec<u8>], key: &[u8; KEY_LEN]) -> Vec<Vec<u8>> {
    rows.par_iter()
        .enumerate()
        .map(|(r, row)| crypt_row(row, key, r))
        .collect()
}

fn crypt_row(row: &[u8], key: &[u8; KEY_LEN], r: usize) -> Vec<u8> {
    let mut out = vec![0u8; row.len()];
    if row.len() > PARALLEL_THRESHOLD {
        out.par_chunks_mut(KEY_LEN)
            .zip(row.par_chunks(KEY_LEN))
            .enumerate()
            .for_each(|(b, (out_chunk, in_chunk))| crypt_block(out_chunk, in_chunk, key, b, r));
    } else {
        out.chunks_mut(KEY_LEN)
            .zip(row.chunks(KEY_LEN))
            .enumerate()
            .for_each(|(b, (out_chunk, in_chunk))| crypt_block(out_chunk, in_chunk, key, b, r));
    }
    out
}

#[inline(always)]
fn crypt_block(out_chunk: &mut [u8], in_chunk: &[u8], key: &[u8; KEY_LEN], b: usize, r: usize) {
    let shift = (b + r) as isize;
    for j in 0..in_chunk.len() {
        let idx = non_neg_mod(j as isize - shift, KEY_LEN as isize);
        out_chunk[j] = in_chunk[j] ^ key[idx];
    }
}

/// Forward (encrypt) transform: 256 rounds of mix → CryptParts →
/// rotate-down, using round-key `T[i]` on round `i`.
pub fn encrypt(padded: &[u8], table: &RoundKeyTable) -> Vec<u8> {
    let mut rows = split_quarters(padded);
    for i in 0..ROUNDS {
        mix_forward(&mut rows);
        let key = table.row(i);
        let mut next = crypt_parts(&rows, key);
        next.rotate_right(1);
        rows = next;
    }
    rows.concat()
}

/// Inverse (decrypt) transform: 256 rounds of rotate-up → CryptParts →
/// mix, using round-key `T[255-i]` on round `i`.
pub fn decrypt(padded: &[u8], table: &RoundKeyTable) -> Vec<u8> {
    let mut rows = split_quarters(padded);
    for i in 0..ROUNDS {
        rows.rotate_left(1);
        let key = table.row(ROUNDS - 1 - i);
        rows = crypt_parts(&rows, key);
        mix_inverse(&mut rows);
    }
    rows.concat()
}
