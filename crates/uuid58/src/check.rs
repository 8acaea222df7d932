//! Validation of UUID58 strings without decoding them.

use crate::alphabet::{is_alphabet_char, ENCODED_LEN, MAX_UUID58};

/// Returns true if `candidate` is a valid UUID58 string.
///
/// A valid UUID58 string:
/// - is exactly 22 characters long
/// - uses only characters from the Base58 alphabet
/// - decodes to a value that fits in 128 bits
///
/// This accepts exactly the strings [`crate::decode`] accepts, but never builds the 128-bit
/// value. Fixed-width Base58 strings compare in numeric order when compared digit by digit, and
/// for this alphabet digit order equals ASCII order, so the range check is a byte-wise comparison
/// against [`MAX_UUID58`].
///
/// That shortcut depends on the alphabet being in ascending ASCII order. Any alternative
/// alphabet must re-establish this or fall back to decoding.
///
/// # Example
///
/// ```
/// assert!(uuid58::is_uuid58("XDY9dmBbcMBXqcRvYw8xJ2"));
/// assert!(!uuid58::is_uuid58("YcVfxkQb6JRzqk5kF2tNLw")); // 2^128
/// assert!(!uuid58::is_uuid58("O0lI"));
/// ```
pub fn is_uuid58(candidate: &str) -> bool {
    is_well_formed(candidate) && candidate.as_bytes() <= MAX_UUID58.as_bytes()
}

/// Returns true if `candidate` is 22 characters drawn from the Base58 alphabet.
///
/// Equivalent to matching [`crate::UUID58_PATTERN`]. This does **not** check that the value fits
/// in 128 bits; use [`is_uuid58`] for that.
pub fn is_well_formed(candidate: &str) -> bool {
    candidate.len() == ENCODED_LEN && candidate.bytes().all(is_alphabet_char)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{decode, encode};

    const VALID_UUIDS: [&str; 5] = [
        "00000000-0000-0000-0000-000000000000",
        "ffffffff-ffff-ffff-ffff-ffffffffffff",
        "f4b247fd-1f87-45d4-aa06-1c6fc0a8dfaf",
        "123e4567-e89b-12d3-a456-426614174000",
        "00112233-4455-6677-8899-aabbccddeeff",
    ];

    #[test]
    fn test_minimum_value_is_valid() {
        assert!(is_uuid58("1111111111111111111111"));
    }

    #[test]
    fn test_maximum_value_is_valid() {
        assert!(is_uuid58(MAX_UUID58));
    }

    #[test]
    fn test_maximum_plus_one_is_invalid() {
        assert!(!is_uuid58("YcVfxkQb6JRzqk5kF2tNLw"));
    }

    #[test]
    fn test_encoded_uuids_are_valid() {
        for uuid in VALID_UUIDS {
            let encoded = encode(uuid).unwrap();
            assert!(is_uuid58(&encoded), "{uuid} encoded to invalid {encoded}");
        }
    }

    #[test]
    fn test_mixed_symbols_within_range_are_valid() {
        assert!(is_uuid58("123456789ABCDEFGHJKLMN"));
        assert!(is_uuid58("PQRSTUVWXYZabcdefghijk"));
    }

    #[test]
    fn test_wrong_length_is_invalid() {
        for candidate in [
            "",
            "short",
            "UoWww8DGaVGLtea7zU7p",
            "123456789012345678901",
            "123456789ABCDEFGHJKLM",
            "11111111111111111111111",
            "1111UoWww8DGaVGLtea7zU7p",
            "123456789ABCDEFGHJKLMNP",
        ] {
            assert!(!is_uuid58(candidate), "{candidate} should be invalid");
        }
    }

    #[test]
    fn test_excluded_characters_are_invalid() {
        for candidate in [
            "O0lI111111111111111111",
            "$$$111111111111111111",
            "invalid11111111111111",
            "11111111111111111111O0",
            "11111111111111111111l1",
            "11111111111111111111I1",
            "11111111111111111111O1",
            "1111111111111111111101",
        ] {
            assert!(!is_uuid58(candidate), "{candidate} should be invalid");
        }
    }

    #[test]
    fn test_values_above_128_bits_are_invalid() {
        assert!(!is_uuid58("zzzzzzzzzzzzzzzzzzzzzz"));
        assert!(!is_uuid58("zzzzzzzzzzzzzzzzzzzzz1"));
        assert!(!is_uuid58("Z111111111111111111111"));
    }

    #[test]
    fn test_agrees_with_decode_on_samples() {
        for candidate in [
            "O0lI111111111111111111",
            "short",
            "11111111111111111111111",
            "zzzzzzzzzzzzzzzzzzzzzz",
            "YcVfxkQb6JRzqk5kF2tNLv",
            "YcVfxkQb6JRzqk5kF2tNLw",
            "YcVfxkQb6JRzqk5kF2tNMv",
            "YcVfxkQb6JRzqk5kF2tNKz",
            "XDY9dmBbcMBXqcRvYw8xJ2",
            "XDY9dmBbcMBXqcRvYw8xJé",
        ] {
            assert_eq!(
                is_uuid58(candidate),
                decode(candidate).is_ok(),
                "disagreement on {candidate}"
            );
        }
    }

    #[test]
    fn test_well_formed_ignores_range() {
        assert!(is_well_formed("zzzzzzzzzzzzzzzzzzzzzz"));
        assert!(!is_uuid58("zzzzzzzzzzzzzzzzzzzzzz"));
    }

    #[test]
    fn test_well_formed_matches_pattern_cases() {
        for candidate in [
            "XDY9dmBbcMBXqcRvYw8xJ2",
            "1111111111111111111111",
            "zzzzzzzzzzzzzzzzzzzzzz",
            "123456789ABCDEFGHJKLMN",
            "abcdefghijkmnopqrstuvw",
            "ABCDEFGHJKLMNPQRSTUVWX",
        ] {
            assert!(is_well_formed(candidate), "{candidate} should be well formed");
        }

        for candidate in [
            "",
            "XDY9dmBbcMBXqcRvYw8xJ",
            "XDY9dmBbcMBXqcRvYw8xJ22",
            "0OIl0OIl0OIl0OIl0OIl0O",
            "XDY9dmBbcMBXqcRvYw8xJ-",
            "XDY9dmBbcMBXqcRvYw8xJ_",
            "XDY9dmBbcMBXqcRvYw8xJ ",
            "XDY9dmBbcMBXqcRvYw8xJ.",
        ] {
            assert!(!is_well_formed(candidate), "{candidate} should not be well formed");
        }
    }
}
