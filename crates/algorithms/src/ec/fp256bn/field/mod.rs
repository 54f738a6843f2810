#[macro_use]
mod macros;

pub mod fp; // Base field
pub mod fp2; // Quadratic extension
pub mod fp4; // Quartic extension
pub mod fp12; // Degree-12 extension (target field)

pub mod cyclotomic; // Cyclotomic subgroup of Fp12
pub mod sparse; // Line-function operands

pub(crate) mod exponent;
