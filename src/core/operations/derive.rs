//! Derive-random (DR) and derive-key (DK).
//!
//! ```text
//! K1 = E(Key, n-fold(Constant), initial-cipher-state)
//! K2 = E(Key, K1, initial-cipher-state)
//! K3 = E(Key, K2, initial-cipher-state)
//! ...
//! DR(Key, Constant) = k-truncate(K1 | K2 | K3 | ...)
//! DK(Key, Constant) = random-to-key(DR(Key, Constant))
//! ```
//!
//! `n` is the cipher block length and `k` the key-generation seed length of the
//! encryption type, both in bits.

use zeroize::{Zeroize, Zeroizing};

use crate::core::error::{Rfc3961Error, Rfc3961Result};
use crate::core::etype::{Encrypted, EncryptionType};
use crate::core::nfold::nfold;
use crate::core::types::Key;

/// Computes `DR(key, usage)` for the encryption type `E`.
///
/// The output is exactly `E::KEY_SEED_BIT_LENGTH / 8` bytes.
///
/// # Errors
///
/// Returns `Rfc3961Error::EmptyUsage` for an empty constant,
/// `Rfc3961Error::InvalidKeyLength` for an empty key, and any error from
/// `E::encrypt_data`. No partial output is returned on failure.
pub fn derive_random<E: EncryptionType>(
    key: &[u8],
    usage: &[u8],
) -> Rfc3961Result<Zeroizing<Vec<u8>>> {
    if usage.is_empty() {
        return Err(Rfc3961Error::EmptyUsage);
    }
    if key.is_empty() {
        return Err(Rfc3961Error::InvalidKeyLength {
            expected: E::KEY_BYTE_SIZE,
            actual: 0,
        });
    }

    let out_len = E::KEY_SEED_BIT_LENGTH / 8;
    tracing::trace!(
        etype = E::NAME,
        usage_len = usage.len(),
        out_len,
        "derive-random"
    );

    let mut out = Zeroizing::new(Vec::with_capacity(out_len));
    let mut block = Zeroizing::new(nfold(usage, E::CIPHER_BLOCK_BIT_LENGTH));

    while out.len() < out_len {
        let Encrypted {
            mut cipher_state,
            ciphertext,
        } = E::encrypt_data(key, &block)?;
        cipher_state.zeroize();

        if ciphertext.is_empty() {
            return Err(Rfc3961Error::EncryptionFailed);
        }

        let take = (out_len - out.len()).min(ciphertext.len());
        out.extend_from_slice(&ciphertext[..take]);
        block = Zeroizing::new(ciphertext);
    }

    Ok(out)
}

/// Computes `DK(protocol_key, usage)` for the encryption type `E`.
///
/// # Errors
///
/// Propagates any error from [`derive_random`].
pub fn derive_key<E: EncryptionType>(protocol_key: &[u8], usage: &[u8]) -> Rfc3961Result<Key> {
    let random = derive_random::<E>(protocol_key, usage)?;
    Ok(E::random_to_key(random))
}
