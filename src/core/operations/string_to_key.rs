//! PBKDF2-based string-to-key.
//!
//! ```text
//! tkey = random-to-key(PBKDF2(passphrase, salt, iter_count, keylength))
//! key  = DK(tkey, "kerberos")
//! ```
//!
//! The PBKDF2 pseudo-random function is HMAC over the encryption type's hash,
//! and `keylength` is the encryption type's key size.
//!
//! # Cost
//!
//! The iteration count is taken as given. A count decoded from a peer's
//! s2kparams can be as large as 2^32; bound it with
//! [`S2kParams::ensure_at_most`] before calling in here.

use hmac::digest::Digest;
use hmac::{Mac, SimpleHmac};
use zeroize::Zeroizing;

use crate::core::error::{Rfc3961Error, Rfc3961Result};
use crate::core::etype::EncryptionType;
use crate::core::operations::derive::derive_key;
use crate::core::s2k_params::{S2kParams, S2K_PARAMS_ZERO_ITERATIONS};
use crate::core::types::Key;
use crate::core::usage::KERBEROS_CONSTANT;

/// Derives a key from `secret` and `salt` using hex-encoded `s2k_params`.
///
/// # Errors
///
/// Returns a format error for malformed `s2k_params` before any derivation
/// work starts, and otherwise any error from [`string_to_key_iterations`].
pub fn string_to_key<E: EncryptionType>(
    secret: &[u8],
    salt: &[u8],
    s2k_params: &str,
) -> Rfc3961Result<Key> {
    let params = S2kParams::try_from(s2k_params)?;
    string_to_key_iterations::<E>(secret, salt, params.iterations())
}

/// Like [`string_to_key`], falling back to `E::DEFAULT_S2K_PARAMS` when the
/// peer sent no s2kparams.
///
/// # Errors
///
/// Same as [`string_to_key`].
pub fn string_to_key_or_default<E: EncryptionType>(
    secret: &[u8],
    salt: &[u8],
    s2k_params: Option<&str>,
) -> Rfc3961Result<Key> {
    string_to_key::<E>(secret, salt, s2k_params.unwrap_or(E::DEFAULT_S2K_PARAMS))
}

/// Derives a key from `secret` and `salt` with an explicit iteration count.
///
/// # Errors
///
/// Returns `Rfc3961Error::ZeroIterations` for 0,
/// `Rfc3961Error::IterationsOutOfRange` above 2^32, and any error from
/// [`derive_key`].
pub fn string_to_key_iterations<E: EncryptionType>(
    secret: &[u8],
    salt: &[u8],
    iterations: u64,
) -> Rfc3961Result<Key> {
    tracing::debug!(
        etype = E::NAME,
        etype_id = E::ETYPE_ID,
        iterations,
        "string-to-key"
    );

    let tkey = E::random_to_key(string_to_pbkdf2::<E>(secret, salt, iterations)?);
    derive_key::<E>(tkey.as_bytes(), KERBEROS_CONSTANT)
}

/// Runs PBKDF2-HMAC-`E::Hash` and returns `E::KEY_BYTE_SIZE` bytes.
///
/// # Errors
///
/// Returns `Rfc3961Error::ZeroIterations` for 0 and
/// `Rfc3961Error::IterationsOutOfRange` above 2^32.
pub fn string_to_pbkdf2<E: EncryptionType>(
    secret: &[u8],
    salt: &[u8],
    iterations: u64,
) -> Rfc3961Result<Zeroizing<Vec<u8>>> {
    if iterations == 0 {
        return Err(Rfc3961Error::ZeroIterations);
    }
    if iterations > S2K_PARAMS_ZERO_ITERATIONS {
        return Err(Rfc3961Error::IterationsOutOfRange(iterations));
    }

    let mut tkey = Zeroizing::new(vec![0u8; E::KEY_BYTE_SIZE]);
    match u32::try_from(iterations) {
        Ok(rounds) => pbkdf2::pbkdf2::<SimpleHmac<E::Hash>>(secret, salt, rounds, &mut tkey)
            .map_err(|_| Rfc3961Error::KeyDerivationFailed)?,
        // 2^32, the count `00000000` stands for
        Err(_) => pbkdf2_wide::<E>(secret, salt, iterations, &mut tkey)?,
    }

    Ok(tkey)
}

/// PBKDF2 (RFC 8018 section 5.2) with a 64-bit round counter.
///
/// `T_i = U_1 ^ U_2 ^ ... ^ U_c`, `U_1 = PRF(P, S || INT(i))`,
/// `U_j = PRF(P, U_{j-1})`.
fn pbkdf2_wide<E: EncryptionType>(
    secret: &[u8],
    salt: &[u8],
    rounds: u64,
    out: &mut [u8],
) -> Rfc3961Result<()> {
    let prf = <SimpleHmac<E::Hash> as Mac>::new_from_slice(secret)
        .map_err(|_| Rfc3961Error::KeyDerivationFailed)?;
    let hash_len = <E::Hash as Digest>::output_size();

    for (i, chunk) in out.chunks_mut(hash_len).enumerate() {
        let index = u32::try_from(i + 1).map_err(|_| Rfc3961Error::KeyDerivationFailed)?;

        let mut mac = prf.clone();
        mac.update(salt);
        mac.update(&index.to_be_bytes());
        let mut u = Zeroizing::new(mac.finalize().into_bytes().to_vec());
        let mut t = u.clone();

        for _ in 1..rounds {
            let mut mac = prf.clone();
            mac.update(&u);
            u = Zeroizing::new(mac.finalize().into_bytes().to_vec());
            for (acc, b) in t.iter_mut().zip(u.iter()) {
                *acc ^= b;
            }
        }

        chunk.copy_from_slice(&t[..chunk.len()]);
    }

    Ok(())
}
