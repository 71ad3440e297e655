//! This crate provides an intuitive interface for the NALEnc symmetric
//! cipher: a fixed-key, 256-round block transform over a four-way split of
//! a padded message. There is one mode of operation and one key size.
//!
//! NALEnc is **not** an authenticated cipher: it produces no integrity tag,
//! and decrypting under the wrong key silently returns garbage plaintext
//! instead of raising an error. Callers that need tamper detection must
//! layer their own MAC on top.
//!
//! ## Examples
//! Below is an example of a string being encrypted under a random key, then
//! decrypted back to plaintext.
//! ```
//! use nalenc::{Key, Cipher};
//!
//! // generate a random 512-byte key.
//! let key = Key::generate().expect("Random key generation failed");
//!
//! // instantiate a cipher object using that key.
//! let cipher = Cipher::new(&key);
//!
//! // instantiate sample plaintext (cipher encrypts raw bytes).
//! let plaintext = ("Hello, World!").as_bytes();
//!
//! // encrypt the plaintext bytes.
//! let ciphertext = cipher.encrypt(&plaintext);
//!
//! // decrypt the resultant ciphertext.
//! let decrypted_pt = cipher.decrypt(&ciphertext).expect("Malformed ciphertext");
//!
//! // round trip results in the same plaintext as the original message.
//! assert_eq!(plaintext, decrypted_pt);
//! ```
//!

mod armor;
mod nalenc;

pub use armor::{decode as decode_armored_key, encode as encode_armored_key};
pub use nalenc::{Cipher, Error, Input, Key, Result};
