//! The n-fold transform (RFC 3961 §5.1).
//!
//! n-fold stretches or compresses an arbitrary byte string to exactly `n` bits.
//! The input is replicated, each copy rotated right by a further 13 bits, until
//! the total length is the least common multiple of the input length and `n`;
//! the `n`-bit chunks of that string are then added with one's-complement
//! (end-around carry) addition.
//!
//! Derive-random uses it to turn a usage constant into a full cipher block.
//!
//! # Example
//!
//! ```rust
//! use rfc3961::core::nfold::nfold;
//!
//! assert_eq!(nfold(b"kerberos", 64), b"kerberos".to_vec());
//! assert_eq!(nfold(b"012345", 64), [0xbe, 0x07, 0x26, 0x31, 0x27, 0x6b, 0x19, 0x55]);
//! ```

/// Folds `input` to `n_bits` bits.
///
/// `n_bits` must be a multiple of 8; any remainder is ignored. An empty input
/// folds to all zeros.
#[must_use]
pub fn nfold(input: &[u8], n_bits: usize) -> Vec<u8> {
    let in_len = input.len();
    let out_len = n_bits / 8;
    let mut out = vec![0u8; out_len];

    if in_len == 0 || out_len == 0 {
        return out;
    }

    let lcm = out_len / gcd(out_len, in_len) * in_len;
    let in_bits = in_len << 3;

    // Walk the replicated string from its least significant byte, adding each
    // byte into its output position and carrying into the next one.
    let mut carry: u32 = 0;
    for i in (0..lcm).rev() {
        let msbit = ((in_bits - 1) + ((in_bits + 13) * (i / in_len)) + ((in_len - (i % in_len)) << 3))
            % in_bits;

        let hi = u32::from(input[((in_len - 1) - (msbit >> 3)) % in_len]);
        let lo = u32::from(input[(in_len - (msbit >> 3)) % in_len]);

        carry += (((hi << 8) | lo) >> ((msbit & 7) + 1)) & 0xff;
        carry += u32::from(out[i % out_len]);
        out[i % out_len] = (carry & 0xff) as u8;
        carry >>= 8;
    }

    // End-around carry.
    if carry != 0 {
        for byte in out.iter_mut().rev() {
            carry += u32::from(*byte);
            *byte = (carry & 0xff) as u8;
            carry >>= 8;
        }
    }

    out
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let c = b;
        b = a % b;
        a = c;
    }
    a
}
