//! # b56
//!
//! Fixed-width base-56 encoding for short, human-typable integer IDs.
//!
//! ## Design Principles
//!
//! - Every `u64` has exactly one padded encoding of 12 symbols
//! - The alphabet leaves out look-alike letters so IDs can be read aloud and retyped
//! - Decoding is strict: foreign symbols and out-of-range values are errors, never wrapped
//! - Tables are compile-time constants; all calls are pure and thread-safe
//!
//! ## Format
//!
//! Plain encodings are padded (`000000000100`) or trimmed (`100`). Prefixed
//! encodings are always padded: `{prefix}-{encoding}`.
//!
//! Examples:
//! - `0` => `0`
//! - `55` => `Z`
//! - `3136` => `100`
//! - `18446744073709551615` => `14PSsSsyWstf`
//!
//! Encodings do not sort in the same order as the integers they encode; the
//! mixed-case alphabet only guarantees a bijective round-trip.

mod alphabet;
mod codec;
mod error;
mod macros;
mod prefix;

pub use alphabet::{RADIX, SYMBOLS};
pub use codec::{
    decode, decode_with_prefix, decode_with_prefix_parts, encode, encode_with_prefix, DELIMITER,
    WIDTH,
};
pub use error::B56Error;
pub use prefix::{is_valid_prefix, Prefix};

#[doc(hidden)]
pub use serde as __serde;
