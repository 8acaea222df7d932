//! Fixed-width Base58 encoding for UUIDs.
//!
//! A UUID is a 128-bit value. Rendered as hex it needs 32 characters (36 with hyphens), which is
//! long and awkward in URLs, logs and anything a person has to read back. This crate renders the
//! same 128 bits as **exactly 22 Base58 characters**.
//!
//! ## Alphabet
//! The Bitcoin alphabet is used: `123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz`.
//! It omits `0`, `O`, `I` and `l`, which are easily confused with one another.
//!
//! ## Fixed width
//! Because `58^21 < 2^128 < 58^22`, every 128-bit value fits in 22 digits. Shorter expansions are
//! left-padded with the zero digit `1`, so:
//! - `00000000-0000-0000-0000-000000000000` encodes to `1111111111111111111111`
//! - `ffffffff-ffff-ffff-ffff-ffffffffffff` encodes to [`MAX_UUID58`]
//!
//! Not every 22-character Base58 string is a valid UUID58: anything that sorts above
//! [`MAX_UUID58`] would need more than 128 bits. [`is_uuid58`] checks this without decoding.
//!
//! ## Operations
//! - [`encode`] converts UUID text (hyphens optional, any case) to Base58.
//! - [`decode`] converts Base58 back to lowercase hyphenated UUID text.
//! - [`is_uuid58`] accepts exactly the strings [`decode`] accepts.
//! - [`generate`] produces a fresh random (version 4) UUID directly in Base58 form.
//!
//! The [`Uuid58`] wrapper type carries a value that is known to be valid once constructed.
//!
//! All operations are pure and may be called from any thread.

mod alphabet;
mod check;
mod decode;
mod encode;
mod generate;
mod service;

// Re-export public types
pub use alphabet::{
    digit_value, is_alphabet_char, ALPHABET, ALPHABET_BYTES, ALPHABET_LEN, ENCODED_LEN, HEX_LEN,
    MAX_UUID58, UUID58_PATTERN,
};
pub use check::{is_uuid58, is_well_formed};
pub use decode::{decode, decode_u128, decode_uuid};
pub use encode::{encode, encode_u128, encode_uuid};
pub use generate::{generate, generate_from_bytes, generate_uuid};
pub use service::{Uuid, Uuid58};

/// Error returned when UUID text cannot be encoded.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// The input does not contain exactly 32 hex digits once hyphens are removed.
    #[error("Invalid UUID format: '{input}' has {length} digits, expected 32")]
    InvalidLength { input: String, length: usize },

    /// The input contains a character that is neither a hex digit nor a hyphen.
    #[error("Invalid UUID format: '{input}' has non-hex character {character:?} at position {position}")]
    InvalidCharacter {
        input: String,
        character: char,
        position: usize,
    },
}

/// Error returned when a Base58 string cannot be decoded.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The input is not exactly 22 characters long.
    #[error("Invalid Base58 string: '{input}' has {length} characters, expected 22")]
    InvalidLength { input: String, length: usize },

    /// The input contains a character outside the Base58 alphabet.
    #[error("Invalid Base58 string: '{input}' has character {character:?} at position {position} outside the alphabet")]
    InvalidCharacter {
        input: String,
        character: char,
        position: usize,
    },

    /// The input decodes to a value larger than 128 bits.
    #[error("Invalid Base58 string: '{input}' exceeds 128 bits")]
    Overflow { input: String },
}
