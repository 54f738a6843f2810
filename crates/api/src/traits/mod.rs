//! Core traits of the pairfield API

pub mod serialize;

pub use serialize::Serialize;
