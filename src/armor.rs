//! ASCII-armoured key file format: base64 of the raw 512-byte [`Key`],
//! wrapped at 64 columns and framed between fixed header/footer lines.
//!
//! This is boundary tooling consumed by the CLI, not the cipher core: the
//! core only ever sees a raw `Key`. Kept in its own module, separate from
//! CLI-only concerns.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::nalenc::{Error, Key, Result};

const HEADER: &str = "----BEGIN NAL KEY----";
const FOOTER: &str = "----END NAL KEY----";
const WRAP_COLUMNS: usize = 64;

/// Encodes `key` as ASCII-armoured text: base64 payload wrapped at 64
/// columns, framed by `HEADER`/`FOOTER` lines, LF line endings.
pub fn encode(key: &Key) -> String {
    let payload = STANDARD.encode(key.as_bytes());

    let mut out = String::with_capacity(payload.len() + payload.len() / WRAP_COLUMNS + 64);
    out.push_str(HEADER);
    out.push('\n');
    for line in payload.as_bytes().chunks(WRAP_COLUMNS) {
        out.push_str(std::str::from_utf8(line).expect("base64 output is ASCII"));
        out.push('\n');
    }
    out.push_str(FOOTER);
    out.push('\n');
    out
}

/// Decodes an ASCII-armoured key, stripping the header/footer lines and
/// any line wrapping, and validating the decoded payload is exactly 512
/// bytes.
pub fn decode(armored: &str) -> Result<Key> {
    let body: String = armored
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && *line != HEADER && *line != FOOTER)
        .collect();

    let bytes = STANDARD
        .decode(body.as_bytes())
        .map_err(|_| Error::InvalidInput {
            reason: "ASCII-armoured key is not valid base64",
        })?;

    Key::try_from_slice(&bytes)
}
