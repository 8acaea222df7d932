//! Random UUID generation in Base58 form.

use crate::encode::encode_uuid;
use uuid::{Builder, Uuid};

/// Generates a new random (version 4) UUID as a 22-character Base58 string.
///
/// Randomness comes from the operating system's secure random source. If that source fails
/// the call panics; there is no recoverable error.
///
/// # Example
///
/// ```
/// let id = uuid58::generate();
/// assert_eq!(id.len(), 22);
/// assert!(uuid58::is_uuid58(&id));
/// ```
pub fn generate() -> String {
    encode_uuid(&generate_uuid())
}

/// Generates a new random (version 4, RFC 4122 variant) `uuid::Uuid`.
pub fn generate_uuid() -> Uuid {
    Uuid::new_v4()
}

/// Shapes caller-supplied random bytes into a version 4 UUID and encodes it.
///
/// The version nibble (high half of byte 6) is set to `0100` and the variant bits (top two
/// bits of byte 8) to `10`, exactly as [`generate`] does with OS randomness.
pub fn generate_from_bytes(random_bytes: [u8; 16]) -> String {
    encode_uuid(&Builder::from_random_bytes(random_bytes).into_uuid())
}
