#![no_main]

use libfuzzer_sys::fuzz_target;
use rfc3961::core::nfold::nfold;

fuzz_target!(|input: (Vec<u8>, u8)| {
    let (data, n_bytes) = input;
    let out = nfold(&data, usize::from(n_bytes) * 8);
    assert_eq!(out.len(), usize::from(n_bytes));
});
