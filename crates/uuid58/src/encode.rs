//! UUID text to Base58.

use crate::alphabet::{ALPHABET_BYTES, ALPHABET_LEN, ENCODED_LEN, HEX_LEN};
use crate::EncodeError;
use uuid::Uuid;

pub(crate) const BASE: u128 = ALPHABET_LEN as u128;

/// Encodes a UUID string as a 22-character Base58 string.
///
/// The input must contain exactly 32 hex digits. Hyphens are ignored wherever they appear and
/// hex digits may be upper or lower case, so all of these encode to the same value:
/// - `f4b247fd-1f87-45d4-aa06-1c6fc0a8dfaf`
/// - `f4b247fd1f8745d4aa061c6fc0a8dfaf`
/// - `F4B247FD-1F87-45D4-AA06-1C6FC0A8DFAF`
///
/// # Errors
///
/// Returns [`EncodeError::InvalidLength`] if the input does not hold exactly 32 digits once
/// hyphens are removed, and [`EncodeError::InvalidCharacter`] if any other character is not a
/// hex digit.
///
/// # Example
///
/// ```
/// let encoded = uuid58::encode("f4b247fd-1f87-45d4-aa06-1c6fc0a8dfaf").unwrap();
/// assert_eq!(encoded, "XDY9dmBbcMBXqcRvYw8xJ2");
/// ```
pub fn encode(uuid: &str) -> Result<String, EncodeError> {
    parse_uuid_text(uuid).map(encode_u128)
}

/// Encodes a `uuid::Uuid` as a 22-character Base58 string.
pub fn encode_uuid(uuid: &Uuid) -> String {
    encode_u128(uuid.as_u128())
}

/// Encodes a 128-bit value as a 22-character Base58 string.
///
/// Digits are produced least-significant first into a buffer pre-filled with the zero digit,
/// so the result is always left-padded to [`ENCODED_LEN`].
pub fn encode_u128(value: u128) -> String {
    let mut digits = [ALPHABET_BYTES[0]; ENCODED_LEN];
    let mut remaining = value;

    for slot in digits.iter_mut().rev() {
        if remaining == 0 {
            break;
        }
        *slot = ALPHABET_BYTES[(remaining % BASE) as usize];
        remaining /= BASE;
    }

    digits.iter().map(|&b| char::from(b)).collect()
}

/// Parses UUID text into its 128-bit value.
///
/// Shared by [`encode`] and [`crate::Uuid58::from_uuid_str`].
pub(crate) fn parse_uuid_text(input: &str) -> Result<u128, EncodeError> {
    let length = input.chars().filter(|&c| c != '-').count();
    if length != HEX_LEN {
        tracing::trace!(input, length, "rejected UUID text with wrong digit count");
        return Err(EncodeError::InvalidLength {
            input: input.to_owned(),
            length,
        });
    }

    let mut value: u128 = 0;
    for (position, character) in input.chars().enumerate().filter(|&(_, c)| c != '-') {
        let Some(nibble) = character.to_digit(16) else {
            tracing::trace!(input, position, "rejected UUID text with non-hex character");
            return Err(EncodeError::InvalidCharacter {
                input: input.to_owned(),
                character,
                position,
            });
        };
        value = (value << 4) | u128::from(nibble);
    }

    Ok(value)
}
