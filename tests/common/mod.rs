//! AES-CTS-HMAC-SHA1-96 encryption types (RFC 3962) for the integration tests.
//!
//! The library ships no concrete cipher, so the tests plug in the two AES
//! simplified-profile etypes here. Encryption is AES in CBC mode with
//! ciphertext stealing, a zero initial vector, and the last two blocks
//! swapped even when the input is a whole number of blocks.

// Not every test binary uses every item.
#![allow(dead_code)]

use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockEncrypt, KeyInit};
use aes::{Aes128, Aes256};
use rfc3961::{Encrypted, EncryptionType, Rfc3961Error, Rfc3961Result};
use sha1::Sha1;

/// AES block size in bytes.
pub const AES_BLOCK_SIZE: usize = 16;

/// `aes128-cts-hmac-sha1-96` (etype 17).
#[derive(Debug, Clone, Copy)]
pub struct Aes128CtsHmacSha196;

/// `aes256-cts-hmac-sha1-96` (etype 18).
#[derive(Debug, Clone, Copy)]
pub struct Aes256CtsHmacSha196;

impl EncryptionType for Aes128CtsHmacSha196 {
    const ETYPE_ID: i32 = 17;
    const NAME: &'static str = "aes128-cts-hmac-sha1-96";
    const CIPHER_BLOCK_BIT_LENGTH: usize = 128;
    const KEY_SEED_BIT_LENGTH: usize = 128;
    const KEY_BYTE_SIZE: usize = 16;
    const MESSAGE_BLOCK_BYTE_SIZE: usize = 16;
    type Hash = Sha1;

    fn encrypt_data(key: &[u8], plaintext: &[u8]) -> Rfc3961Result<Encrypted> {
        let cipher = Aes128::new_from_slice(key).map_err(|_| Rfc3961Error::InvalidKeyLength {
            expected: Self::KEY_BYTE_SIZE,
            actual: key.len(),
        })?;
        cts_encrypt(&cipher, plaintext)
    }
}

impl EncryptionType for Aes256CtsHmacSha196 {
    const ETYPE_ID: i32 = 18;
    const NAME: &'static str = "aes256-cts-hmac-sha1-96";
    const CIPHER_BLOCK_BIT_LENGTH: usize = 128;
    const KEY_SEED_BIT_LENGTH: usize = 256;
    const KEY_BYTE_SIZE: usize = 32;
    const MESSAGE_BLOCK_BYTE_SIZE: usize = 16;
    type Hash = Sha1;

    fn encrypt_data(key: &[u8], plaintext: &[u8]) -> Rfc3961Result<Encrypted> {
        let cipher = Aes256::new_from_slice(key).map_err(|_| Rfc3961Error::InvalidKeyLength {
            expected: Self::KEY_BYTE_SIZE,
            actual: key.len(),
        })?;
        cts_encrypt(&cipher, plaintext)
    }
}

/// CBC-CTS encryption with a zero IV. Returns the last full ciphertext block
/// as the cipher state.
pub fn cts_encrypt<C: BlockEncrypt>(cipher: &C, plaintext: &[u8]) -> Rfc3961Result<Encrypted> {
    if plaintext.len() < AES_BLOCK_SIZE {
        return Err(Rfc3961Error::EncryptionFailed);
    }

    let blocks = plaintext.len().div_ceil(AES_BLOCK_SIZE);
    let mut buf = plaintext.to_vec();
    buf.resize(blocks * AES_BLOCK_SIZE, 0);

    let mut prev = [0u8; AES_BLOCK_SIZE];
    for chunk in buf.chunks_exact_mut(AES_BLOCK_SIZE) {
        for (b, p) in chunk.iter_mut().zip(prev.iter()) {
            *b ^= p;
        }
        cipher.encrypt_block(GenericArray::from_mut_slice(chunk));
        prev.copy_from_slice(chunk);
    }

    if blocks == 1 {
        return Ok(Encrypted {
            cipher_state: prev.to_vec(),
            ciphertext: buf,
        });
    }

    // C1 .. Cn-2 | Cn | truncated Cn-1
    let tail = plaintext.len() - (blocks - 1) * AES_BLOCK_SIZE;
    let last = (blocks - 1) * AES_BLOCK_SIZE;
    let penultimate = (blocks - 2) * AES_BLOCK_SIZE;

    let mut ciphertext = Vec::with_capacity(plaintext.len());
    ciphertext.extend_from_slice(&buf[..penultimate]);
    ciphertext.extend_from_slice(&buf[last..]);
    ciphertext.extend_from_slice(&buf[penultimate..penultimate + tail]);

    Ok(Encrypted {
        cipher_state: prev.to_vec(),
        ciphertext,
    })
}
