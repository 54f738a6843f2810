//! Constant values for the pairfield library
//!
//! Limb arrays are little-endian `u64` words. Values are canonical (not in
//! Montgomery form) unless the name says otherwise.

#![no_std]

pub mod pairing;
