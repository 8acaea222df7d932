//! Base58 to UUID text.

use crate::alphabet::{digit_value, ENCODED_LEN};
use crate::encode::BASE;
use crate::DecodeError;
use uuid::Uuid;

/// Decodes a 22-character Base58 string to lowercase, hyphenated UUID text.
///
/// # Errors
///
/// Returns:
/// - [`DecodeError::InvalidLength`] if the input is not exactly 22 characters
/// - [`DecodeError::InvalidCharacter`] if a character is outside the alphabet
/// - [`DecodeError::Overflow`] if the value does not fit in 128 bits
///
/// # Example
///
/// ```
/// let uuid = uuid58::decode("XDY9dmBbcMBXqcRvYw8xJ2").unwrap();
/// assert_eq!(uuid, "f4b247fd-1f87-45d4-aa06-1c6fc0a8dfaf");
/// ```
pub fn decode(base58: &str) -> Result<String, DecodeError> {
    decode_uuid(base58).map(|uuid| uuid.hyphenated().to_string())
}

/// Decodes a 22-character Base58 string to a `uuid::Uuid`.
///
/// # Errors
///
/// Fails exactly when [`decode`] fails.
pub fn decode_uuid(base58: &str) -> Result<Uuid, DecodeError> {
    decode_u128(base58).map(Uuid::from_u128)
}

/// Decodes a 22-character Base58 string to its 128-bit value.
///
/// Digits are accumulated most-significant first with checked arithmetic. `58^22` exceeds
/// `2^128`, so an out-of-range input overflows on one of the last few digits and is rejected
/// there rather than being silently truncated.
///
/// # Errors
///
/// Fails exactly when [`decode`] fails.
pub fn decode_u128(base58: &str) -> Result<u128, DecodeError> {
    let length = base58.chars().count();
    if length != ENCODED_LEN {
        tracing::trace!(input = base58, length, "rejected Base58 text with wrong length");
        return Err(DecodeError::InvalidLength {
            input: base58.to_owned(),
            length,
        });
    }

    let mut value: u128 = 0;
    for (position, character) in base58.chars().enumerate() {
        let digit = u8::try_from(character)
            .ok()
            .and_then(digit_value)
            .ok_or_else(|| {
                tracing::trace!(
                    input = base58,
                    position,
                    "rejected Base58 text with invalid character"
                );
                DecodeError::InvalidCharacter {
                    input: base58.to_owned(),
                    character,
                    position,
                }
            })?;

        value = value
            .checked_mul(BASE)
            .and_then(|v| v.checked_add(u128::from(digit)))
            .ok_or_else(|| {
                tracing::trace!(input = base58, "rejected Base58 text exceeding 128 bits");
                DecodeError::Overflow {
                    input: base58.to_owned(),
                }
            })?;
    }

    Ok(value)
}
