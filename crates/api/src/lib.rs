//! Public API traits and types for the pairfield library
//!
//! This crate provides the public API surface shared by the pairfield crates:
//! the error type returned across crate boundaries and the byte serialization
//! trait implemented by encodable field elements.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use traits::Serialize;
