//! Internal utilities shared by the pairfield crates
//!
//! Nothing in this crate is part of the stable public API.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;
pub mod endian;
