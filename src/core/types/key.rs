//! `Key` - Derived Kerberos key material.
//!
//! Every derivation in this crate that produces usable key material
//! (derive-key, string-to-key) returns a [`Key`]. Its length is whatever the
//! encryption type dictates; no internal structure is imposed.

use core::fmt::{self, Debug};

use zeroize::{Zeroize, Zeroizing};

/// Protocol key material.
///
/// # Security
///
/// - Key material is zeroized on drop
/// - Debug output redacts the key
/// - Equality comparison uses constant-time comparison
///
/// # Example
///
/// ```rust
/// use rfc3961::Key;
///
/// let key = Key::new(vec![0x42u8; 16]);
/// assert_eq!(key.len(), 16);
/// assert_eq!(format!("{key:?}"), "Key { len: 16, key: \"[REDACTED]\" }");
/// ```
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct Key {
    bytes: Vec<u8>,
}

impl Key {
    /// Creates a new `Key` from raw bytes.
    #[must_use]
    pub const fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Returns a reference to the raw key bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Key length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the key holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Consumes the `Key` and returns the raw bytes wrapped so they are still
    /// zeroized when dropped.
    #[must_use]
    pub fn into_bytes(mut self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(core::mem::take(&mut self.bytes))
    }
}

impl From<Vec<u8>> for Key {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<&[u8]> for Key {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes.to_vec())
    }
}

impl From<Zeroizing<Vec<u8>>> for Key {
    fn from(mut bytes: Zeroizing<Vec<u8>>) -> Self {
        Self::new(core::mem::take(&mut *bytes))
    }
}

impl AsRef<[u8]> for Key {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

// =============================================================================
// Debug (security: don't expose key material)
// =============================================================================

impl Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key")
            .field("len", &self.bytes.len())
            .field("key", &"[REDACTED]")
            .finish()
    }
}

// =============================================================================
// PartialEq (constant-time comparison)
// =============================================================================

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        use subtle::ConstantTimeEq;
        self.bytes.ct_eq(&other.bytes).into()
    }
}

impl Eq for Key {}
