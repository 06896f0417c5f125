//! Encryption type capability trait.
//!
//! RFC 3961 describes key derivation in terms of an abstract encryption
//! type: a block cipher with a fixed block size, a key-generation seed length,
//! a hash function and an encrypt operation with a zero initial cipher state.
//! [`EncryptionType`] captures that capability set so the derivation functions
//! in [`crate::core::operations`] stay agnostic to which concrete cipher is
//! plugged in.
//!
//! This crate does not ship any concrete encryption type. Implementors
//! provide one zero-sized marker per etype (for example
//! `aes128-cts-hmac-sha1-96`) and call the derivation functions with it:
//!
//! ```rust,ignore
//! let key = rfc3961::string_to_key::<Aes128CtsHmacSha196>(b"password", salt, "00001000")?;
//! ```

use hmac::digest::core_api::BlockSizeUser;
use hmac::digest::Digest;

use crate::core::error::Rfc3961Result;
use crate::core::s2k_params::DEFAULT_S2K_PARAMS;
use crate::core::types::Key;

/// Output of an encrypt operation.
#[derive(Clone, PartialEq, Eq)]
pub struct Encrypted {
    /// Cipher state after encryption (the "ivOut" of RFC 3961).
    pub cipher_state: Vec<u8>,
    /// The ciphertext.
    pub ciphertext: Vec<u8>,
}

impl core::fmt::Debug for Encrypted {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Encrypted")
            .field("cipher_state_len", &self.cipher_state.len())
            .field("ciphertext_len", &self.ciphertext.len())
            .finish()
    }
}

/// Capability set of one Kerberos encryption type.
///
/// All lengths named `*_BIT_LENGTH` are in bits, all `*_BYTE_SIZE` in bytes.
pub trait EncryptionType {
    /// IANA encryption type number (e.g. 17 for `aes128-cts-hmac-sha1-96`).
    const ETYPE_ID: i32;

    /// Human-readable etype name, used in diagnostics.
    const NAME: &'static str;

    /// Cipher block length `n` in bits.
    const CIPHER_BLOCK_BIT_LENGTH: usize;

    /// Key-generation seed length `k` in bits.
    const KEY_SEED_BIT_LENGTH: usize;

    /// Protocol key length in bytes.
    const KEY_BYTE_SIZE: usize;

    /// Message block length in bytes, used to truncate the PRF hash.
    const MESSAGE_BLOCK_BYTE_SIZE: usize;

    /// Default s2kparams when the peer supplies none.
    const DEFAULT_S2K_PARAMS: &'static str = DEFAULT_S2K_PARAMS;

    /// Hash function backing PBKDF2 and the PRF.
    type Hash: Digest + BlockSizeUser + Clone + Sync;

    /// Encrypts `plaintext` under `key` starting from the initial cipher state.
    ///
    /// # Errors
    ///
    /// Returns an error if the key has the wrong size or the cipher rejects
    /// the input.
    fn encrypt_data(key: &[u8], plaintext: &[u8]) -> Rfc3961Result<Encrypted>;

    /// Turns `k` bits of random material into a protocol key.
    ///
    /// The default is the identity, which is correct for the AES and
    /// Camellia families. Etypes that need parity adjustment override it.
    #[must_use]
    fn random_to_key(random: zeroize::Zeroizing<Vec<u8>>) -> Key {
        Key::from(random)
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{Toy168, Toy256};
    use super::*;
    use crate::core::error::Rfc3961Error;

    #[test]
    fn test_default_s2k_params() {
        assert_eq!(Toy256::DEFAULT_S2K_PARAMS, "00001000");
    }

    #[test]
    fn test_default_random_to_key_is_identity() {
        let random = zeroize::Zeroizing::new(vec![0x5au8; 32]);
        let key = Toy256::random_to_key(random);
        assert_eq!(key.as_bytes(), &[0x5au8; 32][..]);
    }

    #[test]
    fn test_toy_encrypt_is_deterministic() -> Rfc3961Result<()> {
        let a = Toy256::encrypt_data(&[1u8; 32], &[2u8; 16])?;
        let b = Toy256::encrypt_data(&[1u8; 32], &[2u8; 16])?;
        assert_eq!(a, b);
        assert_eq!(a.ciphertext.len(), 16);
        Ok(())
    }

    #[test]
    fn test_toy_rejects_wrong_key_size() {
        let result = Toy256::encrypt_data(&[1u8; 3], &[2u8; 16]);
        assert!(matches!(
            result,
            Err(Rfc3961Error::InvalidKeyLength {
                expected: 32,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_encrypted_debug_hides_bytes() -> Rfc3961Result<()> {
        let out = Toy168::encrypt_data(&[0xabu8; 24], &[0xcdu8; 8])?;
        let debug_str = format!("{out:?}");
        assert!(debug_str.contains("ciphertext_len: 8"));
        assert!(!debug_str.contains("ab"));
        Ok(())
    }
}
