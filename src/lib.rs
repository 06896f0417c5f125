//! RFC 3961 key derivation for Kerberos 5.
//!
//! This crate implements the encryption-type independent key derivation
//! primitives of RFC 3961:
//!
//! | Operation | Function | Description |
//! |-----------|----------|-------------|
//! | DR | [`derive_random`] | Feedback-cipher pseudo-random bytes from a key and constant |
//! | DK | [`derive_key`] | DR followed by random-to-key |
//! | string-to-key | [`string_to_key`] | PBKDF2 + DK(tkey, "kerberos") from s2kparams |
//! | string-to-key | [`string_to_key_iterations`] | Same, with an explicit iteration count |
//! | string-to-key | [`string_to_key_or_default`] | Same, falling back to the etype default s2kparams |
//! | PRF | [`pseudo_random`] | `E(DK(key, "prf"), truncate(H(input)))` |
//!
//! plus the s2kparams codec ([`S2kParams`]) and the n-fold transform
//! ([`crate::core::nfold`]).
//!
//! # Encryption types
//!
//! Every operation is generic over an [`EncryptionType`], which supplies block
//! and key sizes, the hash function and a single-shot encrypt operation. This
//! crate ships no concrete cipher; plug in one implementation per etype.
//!
//! # Quick Start
//!
//! ```rust
//! use rfc3961::{S2kParams, Rfc3961Error};
//!
//! // s2kparams as received in ETYPE-INFO2
//! let params = S2kParams::try_from("00001000")?;
//! assert_eq!(params.iterations(), 4096);
//!
//! // Bound the cost before running string-to-key
//! let params = params.ensure_at_most(100_000)?;
//! assert_eq!(params.to_string(), "00001000");
//! # Ok::<(), Rfc3961Error>(())
//! ```
//!
//! # Security
//!
//! - Derived keys are zeroized on drop
//! - Debug output redacts key material
//! - Constant-time comparison for keys
//! - No unsafe code
//! - Nothing caps string-to-key iteration counts implicitly
//!
//! # Modules
//!
//! - [`mod@core`] - Core types and operations
//! - [`prelude`] - Ergonomic imports

pub mod core;
pub mod prelude;

// Re-export commonly used items at crate root
pub use crate::core::error::{Rfc3961Error, Rfc3961Result};
pub use crate::core::etype::{Encrypted, EncryptionType};
pub use crate::core::operations::derive::{derive_key, derive_random};
pub use crate::core::operations::prf::pseudo_random;
pub use crate::core::operations::string_to_key::{
    string_to_key, string_to_key_iterations, string_to_key_or_default, string_to_pbkdf2,
};
pub use crate::core::s2k_params::{iterations_to_s2k_params, s2k_params_to_iterations, S2kParams};
pub use crate::core::types::Key;
