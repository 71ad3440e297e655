mod cipher;
mod core;
mod error;
mod framing;
mod key;
mod schedule;

pub use cipher::Cipher;
pub use error::{Error, Result};
pub use key::{Input, Key};
