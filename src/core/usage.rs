//! Well-known derivation constants.
//!
//! Simplified-profile encryption types derive three keys per key usage number
//! (RFC 3961 §5.3): the checksum key `Kc`, the encryption key `Ke` and the
//! integrity key `Ki`. Each is `DK(base-key, usage | tag)` where `usage` is the
//! 32-bit big-endian usage number and `tag` is one octet.

/// Constant folded into the string-to-key derivation.
pub const KERBEROS_CONSTANT: &[u8] = b"kerberos";

/// Constant used to derive the PRF key.
pub const PRF_CONSTANT: &[u8] = b"prf";

/// Tag octet for checksum keys (`Kc`).
pub const CHECKSUM_TAG: u8 = 0x99;

/// Tag octet for encryption keys (`Ke`).
pub const ENCRYPTION_TAG: u8 = 0xAA;

/// Tag octet for integrity keys (`Ki`).
pub const INTEGRITY_TAG: u8 = 0x55;

/// Builds the 5-octet constant `usage || tag`.
#[must_use]
pub const fn usage_constant(usage: u32, tag: u8) -> [u8; 5] {
    let u = usage.to_be_bytes();
    [u[0], u[1], u[2], u[3], tag]
}

/// Constant for the checksum key `Kc` of `usage`.
#[must_use]
pub const fn checksum(usage: u32) -> [u8; 5] {
    usage_constant(usage, CHECKSUM_TAG)
}

/// Constant for the encryption key `Ke` of `usage`.
#[must_use]
pub const fn encryption(usage: u32) -> [u8; 5] {
    usage_constant(usage, ENCRYPTION_TAG)
}

/// Constant for the integrity key `Ki` of `usage`.
#[must_use]
pub const fn integrity(usage: u32) -> [u8; 5] {
    usage_constant(usage, INTEGRITY_TAG)
}
