//! The Base58 alphabet and the constants derived from it.
//!
//! Every table here is built at compile time and never mutated, so it can be read from any
//! thread without synchronisation.

/// The Base58 (Bitcoin) alphabet, ordered by digit value.
///
/// `1` is digit zero and therefore also the padding character.
pub const ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// [`ALPHABET`] as bytes, indexed by digit value.
pub const ALPHABET_BYTES: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Number of symbols in the alphabet (the numeric base).
pub const ALPHABET_LEN: usize = ALPHABET_BYTES.len();

/// Length of every encoded UUID58 string.
pub const ENCODED_LEN: usize = 22;

/// Number of hex digits in a UUID.
pub const HEX_LEN: usize = 32;

/// The Base58 expansion of `2^128 - 1`, the largest valid UUID58 string.
pub const MAX_UUID58: &str = "YcVfxkQb6JRzqk5kF2tNLv";

/// Regular expression for a well-formed UUID58 string: 22 characters drawn from the alphabet.
///
/// Matching this pattern does **not** guarantee the value fits in 128 bits. Use
/// [`crate::is_uuid58`] for the complete check.
pub const UUID58_PATTERN: &str = "^[1-9A-HJ-NP-Za-km-z]{22}$";

const INVALID: u8 = u8::MAX;

/// Inverse of [`ALPHABET_BYTES`]: byte value to digit value, [`INVALID`] elsewhere.
const DIGIT_VALUES: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET_BYTES.len() {
        table[ALPHABET_BYTES[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Returns the digit value (`0..58`) of `byte`, or `None` if it is not an alphabet symbol.
#[inline]
pub fn digit_value(byte: u8) -> Option<u8> {
    match DIGIT_VALUES[byte as usize] {
        INVALID => None,
        value => Some(value),
    }
}

/// Returns true if `byte` is an alphabet symbol.
///
/// This checks the symbol ranges directly rather than going through the lookup table, so the
/// excluded characters (`0`, `I`, `O`, `l`) are spelled out.
#[inline]
pub fn is_alphabet_char(byte: u8) -> bool {
    matches!(
        byte,
        b'1'..=b'9' | b'A'..=b'H' | b'J'..=b'N' | b'P'..=b'Z' | b'a'..=b'k' | b'm'..=b'z'
    )
}
