//! # pairfield
//!
//! The degree-12 extension-field tower behind FP256BN pairings, with
//! cyclotomic-subgroup exponentiation for pairing-product verification.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! pairfield = "0.3"
//! ```
//!
//! ## Features
//!
//! - `std` (default): Standard library support
//! - `serde`: `Serialize`/`Deserialize` for [`algorithms::Fp12`]
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`pairfield-api`]: Error type and the byte serialization trait
//! - [`pairfield-params`]: Curve constants
//! - [`pairfield-algorithms`]: The Fp, Fp2, Fp4 and Fp12 arithmetic

#![cfg_attr(not(feature = "std"), no_std)]

pub use pairfield_algorithms as algorithms;
pub use pairfield_api as api;
pub use pairfield_internal as internal;
pub use pairfield_params as params;

/// Common imports for pairfield users
pub mod prelude {
    // Error types
    pub use crate::api::{Error, Result, Serialize};

    // Tower types
    pub use crate::algorithms::{BigUint, Cyclotomic, Fp, Fp12, Fp2, Fp4, SparseFp12};

    // Constant-time traits the field types implement
    pub use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
}
