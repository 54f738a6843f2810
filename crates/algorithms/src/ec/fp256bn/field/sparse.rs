//! Sparse Fp12 operands produced by pairing line functions.

use super::fp12::Fp12;
use super::fp2::Fp2;
use super::fp4::Fp4;

/// The element `a + b·w` with `b` in Fp2 and no `w²` term.
///
/// This is the shape of a line-function evaluation in the ate Miller loop
/// and the operand type of [`Fp12::special_mul`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SparseFp12 {
    /// Full Fp4 constant term
    pub a: Fp4,
    /// Real Fp2 coefficient of w
    pub b: Fp2,
}

impl SparseFp12 {
    /// Build a sparse operand
    #[inline]
    pub const fn new(a: Fp4, b: Fp2) -> SparseFp12 {
        SparseFp12 { a, b }
    }
}

impl From<SparseFp12> for Fp12 {
    fn from(s: SparseFp12) -> Fp12 {
        Fp12::new(s.a, Fp4::from_fp2(s.b), Fp4::zero())
    }
}
