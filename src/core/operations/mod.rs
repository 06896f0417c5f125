//! Key derivation operations.
//!
//! - [`derive`] - Derive-random (DR) and derive-key (DK)
//! - [`string_to_key`] - PBKDF2-based string-to-key
//! - [`prf`] - Pseudo-random function

pub mod derive;
pub mod prf;
pub mod string_to_key;
