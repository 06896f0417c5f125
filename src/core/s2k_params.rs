//! String-to-key parameter (s2kparams) encoding.
//!
//! For the AES and Camellia encryption types the s2kparams exchanged in
//! `ETYPE-INFO2` are four octets holding the PBKDF2 iteration count as an
//! unsigned big-endian integer, carried here as 8 hexadecimal characters.
//!
//! The all-zero pattern `00000000` does not mean "no iterations": it stands for
//! 2^32 iterations. Encoding 2^32 therefore wraps to `00000000`, and the value
//! 0 itself has no wire form.
//!
//! # Example
//!
//! ```rust
//! use rfc3961::core::s2k_params::{iterations_to_s2k_params, s2k_params_to_iterations, S2kParams};
//!
//! assert_eq!(s2k_params_to_iterations("00001000").unwrap(), 4096);
//! assert_eq!(s2k_params_to_iterations("00000000").unwrap(), 4_294_967_296);
//! assert_eq!(iterations_to_s2k_params(1200), "000004b0");
//!
//! let params: S2kParams = "000004b0".parse().unwrap();
//! assert_eq!(params.iterations(), 1200);
//! assert_eq!(params.to_string(), "000004b0");
//! ```

use core::fmt::{self, Display};
use core::str::FromStr;

use crate::core::error::{Rfc3961Error, Rfc3961Result};

/// Length of the hex-encoded s2kparams string.
pub const S2K_PARAMS_HEX_LEN: usize = 8;

/// Iteration count represented by `00000000` (2^32).
pub const S2K_PARAMS_ZERO_ITERATIONS: u64 = 1 << 32;

/// RFC 3962 default iteration count.
pub const DEFAULT_ITERATIONS: u64 = 4096;

/// RFC 3962 default s2kparams string.
pub const DEFAULT_S2K_PARAMS: &str = "00001000";

/// Decodes an s2kparams hex string into an iteration count.
///
/// # Errors
///
/// Returns `Rfc3961Error::InvalidS2kParamsLength` if the string is not
/// 8 characters long and `Rfc3961Error::InvalidS2kParamsHex` if it contains
/// non-hexadecimal characters.
pub fn s2k_params_to_iterations(s2k_params: &str) -> Rfc3961Result<u64> {
    if s2k_params.len() != S2K_PARAMS_HEX_LEN {
        return Err(Rfc3961Error::InvalidS2kParamsLength(s2k_params.len()));
    }

    let mut bytes = [0u8; 4];
    hex::decode_to_slice(s2k_params, &mut bytes)?;

    Ok(S2kParams::from_bytes(bytes).iterations())
}

/// Encodes the low 32 bits of `iterations` as an s2kparams hex string.
///
/// 2^32 wraps to `00000000`, which decodes back to 2^32.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn iterations_to_s2k_params(iterations: u64) -> String {
    hex::encode((iterations as u32).to_be_bytes())
}

/// A validated PBKDF2 iteration count in `[1, 2^32]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct S2kParams {
    iterations: u64,
}

impl Default for S2kParams {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

impl S2kParams {
    /// Creates parameters for the given iteration count.
    ///
    /// # Errors
    ///
    /// Returns `Rfc3961Error::ZeroIterations` for 0 and
    /// `Rfc3961Error::IterationsOutOfRange` above 2^32.
    pub fn new(iterations: u64) -> Rfc3961Result<Self> {
        if iterations == 0 {
            return Err(Rfc3961Error::ZeroIterations);
        }
        if iterations > S2K_PARAMS_ZERO_ITERATIONS {
            return Err(Rfc3961Error::IterationsOutOfRange(iterations));
        }
        Ok(Self { iterations })
    }

    /// Decodes the 4-octet wire form.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        let iterations = match u32::from_be_bytes(bytes) {
            0 => S2K_PARAMS_ZERO_ITERATIONS,
            i => i as u64,
        };
        Self { iterations }
    }

    /// Encodes the 4-octet wire form.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn to_bytes(&self) -> [u8; 4] {
        (self.iterations as u32).to_be_bytes()
    }

    /// The iteration count.
    #[must_use]
    pub const fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Rejects iteration counts above `limit`.
    ///
    /// Nothing in this crate caps string-to-key cost on its own; callers that
    /// accept s2kparams from a peer should bound them here first.
    ///
    /// # Errors
    ///
    /// Returns `Rfc3961Error::IterationLimitExceeded` when the count is above
    /// `limit`.
    pub fn ensure_at_most(self, limit: u64) -> Rfc3961Result<Self> {
        if self.iterations > limit {
            return Err(Rfc3961Error::IterationLimitExceeded {
                iterations: self.iterations,
                limit,
            });
        }
        Ok(self)
    }
}

impl Display for S2kParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.to_bytes()))
    }
}

impl TryFrom<&str> for S2kParams {
    type Error = Rfc3961Error;

    fn try_from(s2k_params: &str) -> Result<Self, Self::Error> {
        s2k_params_to_iterations(s2k_params).map(|iterations| Self { iterations })
    }
}

impl FromStr for S2kParams {
    type Err = Rfc3961Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}
