//! FP256BN extension-field tower.
//!
//! **Warning:** Unaudited implementation. Use at your own risk.

// Module declarations
mod field;

#[cfg(test)]
mod tests;

// Public API exports
pub use field::cyclotomic::Cyclotomic;
pub use field::fp::Fp;
pub use field::fp12::Fp12;
pub use field::fp2::Fp2;
pub use field::fp4::Fp4;
pub use field::sparse::SparseFp12;

// BN curve parameters
pub use pairfield_params::pairing::fp256bn::{
    FP256BN_BNX as BN_X, FP256BN_BNX_IS_NEGATIVE as BN_X_IS_NEGATIVE,
    FP256BN_FP12_SIZE as FP12_BYTES,
};
