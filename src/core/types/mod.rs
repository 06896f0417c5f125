//! Key material types.
//!
//! - [`Key`] - Derived protocol key, zeroized on drop

mod key;

pub use key::Key;
