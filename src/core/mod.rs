//! Core RFC 3961 types and operations.
//!
//! This module provides the building blocks for Kerberos key derivation:
//!
//! - [`etype`] - The [`EncryptionType`](etype::EncryptionType) capability trait
//! - [`error`] - Error types for derivation operations
//! - [`nfold`] - The n-fold transform
//! - [`s2k_params`] - s2kparams encoding of the iteration count
//! - [`types`] - Derived key material
//! - [`usage`] - Well-known derivation constants
//! - [`operations`] - DR, DK, string-to-key and PRF

pub mod error;
pub mod etype;
pub mod nfold;
pub mod operations;
pub mod s2k_params;
pub mod types;
pub mod usage;

// Re-export commonly used items
pub use error::{Rfc3961Error, Rfc3961Result};
pub use etype::{Encrypted, EncryptionType};
