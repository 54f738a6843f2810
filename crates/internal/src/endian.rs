//! Endianness utility functions

/// Convert a u64 from big-endian byte order to native byte order
pub fn u64_from_be_bytes(bytes: &[u8]) -> u64 {
    u64::from_be_bytes([
        bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
    ])
}

/// Convert a u64 from native byte order to big-endian bytes
pub fn u64_to_be_bytes(value: u64) -> [u8; 8] {
    value.to_be_bytes()
}

/// Read a big-endian byte string into little-endian ordered u64 limbs
///
/// `bytes` must be exactly `8 * N` bytes long.
pub fn limbs_from_be_bytes<const N: usize>(bytes: &[u8]) -> [u64; N] {
    debug_assert_eq!(bytes.len(), 8 * N);
    let mut limbs = [0u64; N];
    for (i, limb) in limbs.iter_mut().enumerate() {
        let start = 8 * (N - 1 - i);
        *limb = u64_from_be_bytes(&bytes[start..start + 8]);
    }
    limbs
}

/// Write little-endian ordered u64 limbs as a big-endian byte string
///
/// `out` must be exactly `8 * N` bytes long.
pub fn limbs_to_be_bytes<const N: usize>(limbs: &[u64; N], out: &mut [u8]) {
    debug_assert_eq!(out.len(), 8 * N);
    for (i, limb) in limbs.iter().enumerate() {
        let start = 8 * (N - 1 - i);
        out[start..start + 8].copy_from_slice(&u64_to_be_bytes(*limb));
    }
}
