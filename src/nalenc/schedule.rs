//! Round-key schedule: expands a 512-byte [`Key`](crate::Key) into 256
//! derived 512-byte round-keys.

use crate::nalenc::key::{Key, KEY_LEN};

/// Number of rows in the round-key table, and the number of rounds the
/// Round Engine performs.
pub const ROUNDS: usize = 256;

/// T[0..256), each row 512 bytes, derived from the user key.
///
/// Row 0 is the key itself; every later row is derived from the row two
/// before it, XORed with a single byte drawn from the intervening row,
/// with one index preserved.
pub struct RoundKeyTable {
    rows: Vec<[u8; KEY_LEN]>,
}

impl RoundKeyTable {
    /// Derives the full 256-row table from `key`.
    pub fn derive(key: &Key) -> Self {
        let k = key.as_bytes();
        let mut rows: Vec<[u8; KEY_LEN]> = Vec::with_capacity(ROUNDS);

        let mut row0 = [0u8; KEY_LEN];
        row0.copy_from_slice(k);
        rows.push(row0);

        let mut row1 = row0;
        for j in 1..KEY_LEN {
            row1[j] = row0[j] ^ row0[0];
        }
        row1[0] = row0[0];
        rows.push(row1);

        // T[i+1] is derived from T[i-1], for i = 1..=254, producing rows
        // T[2]..T[255] and completing the 256-row table.
        for i in 1..=254usize {
            let prev2 = rows[i - 1];
            let x = prev2[i];
            let mut next = prev2;
            for j in 0..KEY_LEN {
                if j != i {
                    next[j] = prev2[j] ^ x;
                }
            }
            next[i] = prev2[i];
            rows.push(next);
        }

        debug_assert_eq!(rows.len(), ROUNDS);
        Self { rows }
    }

    /// Returns round-key row `i`.
    pub fn row(&self, i: usize) -> &[u8; KEY_LEN] {
        &self.rows[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_key() -> Key {
        let bytes: Vec<u8> = (0..KEY_LEN as u32).map(|i| (i * 7 + 3) as u8).collect();
        Key::try_from_slice(&bytes).unwrap()
    }

    #[test]
    fn row_zero_is_key() {
        let key = sample_key();
        let table = RoundKeyTable::derive(&key);
        assert_eq!(table.row(0), &key.as_bytes()[..]);
    }

    #[test]
    fn row_one_rule() {
        let key = sample_key();
        let table = RoundKeyTable::derive(&key);
        let k = key.as_bytes();
        assert_eq!(table.row(1)[0], k[0]);
        for j in 1..KEY_LEN {
            assert_eq!(table.row(1)[j], k[j] ^ k[0]);
        }
    }

    #[test]
    fn schedule_fixed_point() {
        // T[m][m-1] == T[m-2][m-1] for m in 2..=255, the index preserved
        // by the recurrence at each step.
        let key = sample_key();
        let table = RoundKeyTable::derive(&key);
        for m in 2..ROUNDS {
            assert_eq!(
                table.row(m)[m - 1],
                table.row(m - 2)[m - 1],
                "mismatch at row {m}"
            );
        }
    }

    #[test]
    fn table_has_256_rows() {
        let key = sample_key();
        let table = RoundKeyTable::derive(&key);
        // row(255) must not panic; row(256) would be out of bounds.
        let _ = table.row(255);
    }

    #[test]
    fn schedule_is_deterministic() {
        let key = sample_key();
        let t1 = RoundKeyTable::derive(&key);
        let t2 = RoundKeyTable::derive(&key);
        for i in 0..ROUNDS {
            assert_eq!(t1.row(i), t2.row(i));
        }
    }
}
