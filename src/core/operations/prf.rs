//! The RFC 3961 pseudo-random function for simplified-profile etypes.
//!
//! ```text
//! tmp = truncate(H(input), m)
//! PRF = E(DK(key, "prf"), tmp, initial-cipher-state)
//! ```
//!
//! `H` is the encryption type's hash and `m` its message block size.

use hmac::digest::Digest;
use zeroize::{Zeroize, Zeroizing};

use crate::core::error::{Rfc3961Error, Rfc3961Result};
use crate::core::etype::{Encrypted, EncryptionType};
use crate::core::operations::derive::derive_key;
use crate::core::usage::PRF_CONSTANT;

/// Computes `PRF(key, input)` for the encryption type `E`.
///
/// # Errors
///
/// Returns `Rfc3961Error::HashOutputTooShort` if the digest cannot fill one
/// message block, and propagates any derive-key or encrypt error.
pub fn pseudo_random<E: EncryptionType>(
    key: &[u8],
    input: &[u8],
) -> Rfc3961Result<Zeroizing<Vec<u8>>> {
    let digest = Zeroizing::new(E::Hash::digest(input).to_vec());
    let tmp = digest
        .get(..E::MESSAGE_BLOCK_BYTE_SIZE)
        .ok_or(Rfc3961Error::HashOutputTooShort)?;

    tracing::trace!(etype = E::NAME, input_len = input.len(), "prf");

    let prf_key = derive_key::<E>(key, PRF_CONSTANT)?;
    let Encrypted {
        mut cipher_state,
        ciphertext,
    } = E::encrypt_data(prf_key.as_bytes(), tmp)?;
    cipher_state.zeroize();

    Ok(Zeroizing::new(ciphertext))
}
