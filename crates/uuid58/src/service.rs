//! The [`Uuid58`] value type.
//!
//! Free functions in this crate work on strings. This module provides a typed identifier for
//! code that wants to hold a validated value rather than re-checking strings at every boundary.

use crate::decode::decode_u128;
use crate::encode::{encode_u128, parse_uuid_text};
use crate::{DecodeError, EncodeError};
use std::{fmt, str::FromStr};

/// Re-exported for convenience.
pub use ::uuid::Uuid;

/// A UUID whose text form is the 22-character Base58 encoding.
///
/// Once constructed the value is always a valid 128-bit UUID, so it can be displayed, stored or
/// converted without further checks.
///
/// # Construction
/// - [`Uuid58::new`] generates a new random (version 4) identifier.
/// - [`Uuid58::parse`] validates an externally supplied Base58 string.
/// - [`Uuid58::from_uuid_str`] accepts standard UUID text (hyphens optional, any case).
/// - `From<Uuid>` and `From<u128>` wrap an existing value.
///
/// # Display format
/// `Display` always produces the 22-character Base58 form. Use [`Uuid58::to_uuid_string`] for
/// the standard hyphenated form.
///
/// # Ordering
/// Ordering follows the numeric value, which is also the byte-wise order of the Base58 text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Uuid58(u128);

impl Default for Uuid58 {
    fn default() -> Self {
        Self::new()
    }
}

impl Uuid58 {
    /// Generates a new random identifier.
    ///
    /// The underlying UUID is cryptographically random and follows RFC 4122 version 4.
    pub fn new() -> Self {
        Self::from(crate::generate_uuid())
    }

    /// Parses a 22-character Base58 string.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] under the same conditions as [`crate::decode`].
    pub fn parse(input: &str) -> Result<Self, DecodeError> {
        decode_u128(input).map(Self)
    }

    /// Parses standard UUID text (32 hex digits, hyphens optional, any case).
    ///
    /// # Errors
    ///
    /// Returns an [`EncodeError`] under the same conditions as [`crate::encode`].
    pub fn from_uuid_str(input: &str) -> Result<Self, EncodeError> {
        parse_uuid_text(input).map(Self)
    }

    /// Returns the value as a `uuid::Uuid`.
    pub fn uuid(&self) -> Uuid {
        Uuid::from_u128(self.0)
    }

    /// Returns the raw 128-bit value.
    pub fn as_u128(&self) -> u128 {
        self.0
    }

    /// Returns the lowercase, hyphenated UUID text (`xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`).
    pub fn to_uuid_string(&self) -> String {
        self.uuid().hyphenated().to_string()
    }
}

impl From<Uuid> for Uuid58 {
    fn from(uuid: Uuid) -> Self {
        Self(uuid.as_u128())
    }
}

impl From<u128> for Uuid58 {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl From<Uuid58> for Uuid {
    fn from(id: Uuid58) -> Self {
        id.uuid()
    }
}

impl fmt::Display for Uuid58 {
    /// Formats the identifier as 22 Base58 characters.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_u128(self.0))
    }
}

impl FromStr for Uuid58 {
    type Err = DecodeError;

    /// Parses a Base58 string; equivalent to [`Uuid58::parse`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid58::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Uuid58 {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&encode_u128(self.0))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Uuid58 {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        Uuid58::parse(&text).map_err(serde::de::Error::custom)
    }
}
