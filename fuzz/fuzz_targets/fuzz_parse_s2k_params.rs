#![no_main]

use libfuzzer_sys::fuzz_target;
use rfc3961::{iterations_to_s2k_params, S2kParams};

fuzz_target!(|data: &str| {
    // Parsing should never panic, and anything accepted re-encodes to itself.
    if let Ok(params) = S2kParams::try_from(data) {
        assert_eq!(params.to_string(), data.to_ascii_lowercase());
        assert_eq!(iterations_to_s2k_params(params.iterations()), params.to_string());
    }
});
