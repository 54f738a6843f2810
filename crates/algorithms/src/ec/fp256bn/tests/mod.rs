//! FP256BN field tower test suite
//!
//! Tests are organized by layer: the base tower, the Fp12 arithmetic,
//! exponentiation, and the byte encoding.

use super::{Cyclotomic, Fp, Fp12, Fp2, Fp4};
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha20Rng;






// ============================================================================
// Shared Helpers
// ============================================================================

/// Deterministic RNG so failures are reproducible
pub(super) fn test_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Element whose twelve coefficients, in encoding order, are small integers
pub(super) fn fp12_from_ints(v: [u64; 12]) -> Fp12 {
    let fp2 = |i: usize| Fp2::new(Fp::from_u64(v[i]), Fp::from_u64(v[i + 1]));
    Fp12::new(
        Fp4::new(fp2(0), fp2(2)),
        Fp4::new(fp2(4), fp2(6)),
        Fp4::new(fp2(8), fp2(10)),
    )
}

/// The `X` input of the known-answer vectors
pub(super) fn vector_x() -> Fp12 {
    fp12_from_ints([1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12])
}

/// The `Y` input of the known-answer vectors
pub(super) fn vector_y() -> Fp12 {
    fp12_from_ints([13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24])
}

/// Decode a hex vector
pub(super) fn fp12_from_hex(s: &str) -> Fp12 {
    let bytes = hex::decode(s).expect("valid hex");
    Fp12::from_bytes(&bytes).expect("canonical encoding")
}

/// Random element of the cyclotomic subgroup
pub(super) fn random_cyclotomic(rng: &mut ChaCha20Rng) -> Cyclotomic {
    Fp12::random(rng).into_cyclotomic().expect("random element is non-zero")
}
