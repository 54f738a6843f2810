//! Constants for pairing-friendly curves

pub mod fp256bn;
