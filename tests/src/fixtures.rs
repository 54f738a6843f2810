//! Deterministic inputs shared by the integration test binaries

use pairfield_algorithms::{BigUint, Cyclotomic, Fp12};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Seeded RNG so every run sees the same elements
pub fn rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Uniform Fp12 element
pub fn random_fp12(rng: &mut ChaCha20Rng) -> Fp12 {
    Fp12::random(rng)
}

/// Element of the cyclotomic subgroup, obtained by mapping a random
/// Fp12 element through the easy part of the final exponentiation
pub fn random_cyclotomic(rng: &mut ChaCha20Rng) -> Cyclotomic {
    loop {
        if let Ok(c) = Cyclotomic::from_easy_part(&random_fp12(rng)) {
            return c;
        }
    }
}

/// Exponent of `bytes` random bytes
pub fn random_exponent(rng: &mut ChaCha20Rng, bytes: usize) -> BigUint {
    let mut buf = vec![0u8; bytes];
    rng.fill_bytes(&mut buf);
    BigUint::from_bytes_be(&buf)
}

/// Product of individual powers, the reference for four-base exponentiation
pub fn product_of_powers(bases: &[Cyclotomic; 4], exponents: &[BigUint; 4]) -> Cyclotomic {
    bases
        .iter()
        .zip(exponents.iter())
        .fold(Cyclotomic::one(), |acc, (b, e)| acc * b.pow(e))
}

/// Integer value of a little-endian limb array
pub fn limbs_to_biguint(limbs: &[u64]) -> BigUint {
    limbs
        .iter()
        .rev()
        .fold(BigUint::from(0u32), |acc, &l| (acc << 64u32) + BigUint::from(l))
}
