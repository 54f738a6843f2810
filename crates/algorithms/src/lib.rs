//! Extension-field tower arithmetic for pairing-based cryptography
//!
//! This crate implements the FP256BN field tower
//! `Fp -> Fp2 -> Fp4 -> Fp12` together with the operations a pairing
//! implementation needs on elements of the degree-12 target field:
//! multiplication (general and line-function sparse), general and unitary
//! squaring, inversion, the Frobenius endomorphism, fixed-width byte
//! encoding, and single and four-base exponentiation.
//!
//! The library is usable in `no_std` environments with an allocator.
//!
//! # Security Features
//!
//! - Constant-time equality, zero tests and selection via `subtle`
//! - Field elements implement `zeroize::DefaultIsZeroes`
//! - Timing-branch-free fixed-width and four-base exponentiation
//!
//! Routines with a `_vartime` suffix, and [`Cyclotomic::pow`], leak the
//! exponent through timing and must only be used with public exponents.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Exponents are arbitrary-precision integers, which need an allocator
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Pairing-friendly curve fields
pub mod ec;
pub use ec::fp256bn::{Cyclotomic, Fp, Fp12, Fp2, Fp4, SparseFp12};

// Exponent type accepted by the exponentiation routines
pub use num_bigint::BigUint;
