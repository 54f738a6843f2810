//! Pairing-friendly curve primitives
//!
//! Currently provides the extension-field tower of the FP256BN
//! Barreto-Naehrig curve, the substrate on which pairing evaluation and
//! pairing-product checks are computed.

pub mod fp256bn;

pub use fp256bn::{Cyclotomic as Fp256BnGt, Fp12 as Fp256BnFp12};
