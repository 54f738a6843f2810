//! The p-power Frobenius endomorphism on Fp12.

use super::Fp12;
use crate::ec::fp256bn::field::fp2::Fp2;

impl Fp12 {
    /// Raise to the p-th power given the tower's Frobenius constant `f`.
    ///
    /// `f` must be `(1 + i)^((p - 1) / 6)`, as returned by
    /// [`Fp2::frobenius_constant`].
    pub fn frobenius(&self, f: &Fp2) -> Fp12 {
        let f2 = f.square();
        let f3 = f2 * f;

        Fp12 {
            a: self.a.frobenius(&f3),
            b: self.b.frobenius(&f3).mul_fp2(f),
            c: self.c.frobenius(&f3).mul_fp2(&f2),
        }
    }

    /// Raise to the power p^`power`
    pub fn frobenius_map(&self, power: usize) -> Fp12 {
        let f = Fp2::frobenius_constant();

        // The map has order 12
        (0..power % 12).fold(*self, |acc, _| acc.frobenius(&f))
    }
}
