//! Test vector types for RFC 3961 / RFC 3962 tests.
//!
//! The vectors live next to this module as JSON files. Binary values are hex
//! encoded; passwords, salts and plaintexts are plain strings.

// Many fields are required for deserialization but not directly used in tests
#![allow(dead_code)]

use serde::Deserialize;

/// A test vector suite (top-level JSON structure).
#[derive(Debug, Deserialize)]
pub struct TestVectorSuite<T> {
    pub name: String,
    pub tests: Vec<T>,
}

/// Test vector for the n-fold transform.
#[derive(Debug, Deserialize)]
pub struct NfoldTestVector {
    pub name: String,
    /// Input string, used as raw bytes
    pub input: String,
    /// Output length in bits
    pub bits: usize,
    /// Hex-encoded expected output
    pub output: String,
}

/// Test vector for string-to-key.
#[derive(Debug, Deserialize)]
pub struct StringToKeyTestVector {
    pub name: String,
    /// IANA encryption type number
    pub etype: i32,
    pub password: String,
    pub salt: String,
    pub iterations: u64,
    /// Hex-encoded s2kparams for `iterations`
    pub s2kparams: String,
    /// Hex-encoded intermediate PBKDF2 output
    pub pbkdf2: String,
    /// Hex-encoded final key
    pub key: String,
}

/// Test vector for AES CBC-CTS encryption.
#[derive(Debug, Deserialize)]
pub struct CtsTestVector {
    pub name: String,
    /// Hex-encoded AES key
    pub key: String,
    pub plaintext: String,
    /// Hex-encoded ciphertext
    pub ciphertext: String,
    /// Hex-encoded cipher state after encryption
    #[serde(rename = "next-iv")]
    pub next_iv: String,
}

/// Recorded pseudo-random function output (regression value).
#[derive(Debug, Deserialize)]
pub struct PrfTestVector {
    pub name: String,
    pub etype: i32,
    /// Hex-encoded protocol key
    pub key: String,
    pub input: String,
    /// Hex-encoded PRF output
    pub output: String,
}

// =============================================================================
// Helper functions
// =============================================================================

/// Decode a hex string to bytes.
/// Returns `None` if the string is not valid hex.
pub fn hex_decode(s: &str) -> Option<Vec<u8>> {
    hex::decode(s).ok()
}

/// Load a test vector suite from a JSON file.
pub fn load_vectors<T: serde::de::DeserializeOwned>(path: &str) -> TestVectorSuite<T> {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read test vector file {path}: {e}"));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse test vector file {path}: {e}"))
}
