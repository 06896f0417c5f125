//! Ergonomic imports for RFC 3961 operations.
//!
//! # Usage
//!
//! ```rust
//! use rfc3961::prelude::*;
//! ```

pub use crate::core::error::{Rfc3961Error, Rfc3961Result};
pub use crate::core::etype::{Encrypted, EncryptionType};
pub use crate::core::operations::derive::{derive_key, derive_random};
pub use crate::core::operations::prf::pseudo_random;
pub use crate::core::operations::string_to_key::{
    string_to_key, string_to_key_iterations, string_to_key_or_default,
};
pub use crate::core::s2k_params::S2kParams;
pub use crate::core::types::Key;
pub use crate::core::usage;
