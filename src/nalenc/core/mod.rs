//! Round Engine internals: the 256-round transform over a 4-row split of
//! the padded message. Exports `encrypt`/`decrypt`.

mod engine;
mod util;

pub use engine::{decrypt, encrypt};
