//! Multiplication, squaring and inversion in Fp12.

use super::Fp12;
use crate::ec::fp256bn::field::fp4::Fp4;
use crate::ec::fp256bn::field::sparse::SparseFp12;
use crate::error::{validate, Result};
use core::ops::{Mul, MulAssign};

impl<'a, 'b> Mul<&'b Fp12> for &'a Fp12 {
    type Output = Fp12;
    #[inline]
    fn mul(self, rhs: &'b Fp12) -> Fp12 {
        Fp12::mul(self, rhs)
    }
}

impl_binops_multiplicative!(Fp12, Fp12);

impl Fp12 {
    /// Multiply two elements.
    ///
    /// Karatsuba over the cubic extension: six Fp4 products instead of nine.
    pub fn mul(&self, y: &Fp12) -> Fp12 {
        let z0 = self.a * y.a;
        let z2 = self.b * y.b;
        let z4 = self.c * y.c;

        let ab = (self.a + self.b) * (y.a + y.b);
        let bc = (self.b + self.c) * (y.b + y.c);
        let ac = (self.a + self.c) * (y.a + y.c);

        // w^3 = j folds the w^3 and w^4 terms back down
        let z1 = ab - z0 - z2;
        let z3 = bc - z2 - z4;

        Fp12 {
            a: z0 + z3.mul_by_j(),
            b: z1 + z4.mul_by_j(),
            c: ac - z0 - z4 + z2,
        }
    }

    /// Multiply by a line-function value.
    ///
    /// The sparse operand has `b` restricted to Fp2 and `c` equal to zero,
    /// which saves four Fp4 products over [`Fp12::mul`].
    pub fn special_mul(&self, y: &SparseFp12) -> Fp12 {
        let z0 = self.a * y.a;
        let z2 = self.b.mul_fp2(&y.b);
        let z3 = (self.b + self.c).mul_fp2(&y.b) - z2;

        let mut t = y.a;
        t.c0 += y.b;
        let z1 = (self.a + self.b) * t - z0 - z2;

        Fp12 {
            a: z0 + z3.mul_by_j(),
            b: z1,
            c: z2 + self.c * y.a,
        }
    }

    /// Square this element.
    ///
    /// Chung-Hasan SQR2; correct for every element.
    pub fn square(&self) -> Fp12 {
        let a2 = self.a.square();
        let bc2 = (self.b * self.c).double();
        let c2 = self.c.square();
        let ab2 = (self.a * self.b).double();
        let s = (self.a + self.b + self.c).square();

        Fp12 {
            a: a2 + bc2.mul_by_j(),
            b: c2.mul_by_j() + ab2,
            c: s - a2 - bc2 - c2 - ab2,
        }
    }

    /// Granger-Scott squaring for elements of the cyclotomic subgroup.
    ///
    /// The result is only the square when `self^(p^4 - p^2 + 1) == 1`.
    /// Other inputs give a well-defined but meaningless value; use
    /// [`Cyclotomic::square`](crate::Cyclotomic::square) for a checked type.
    pub fn unitary_square(&self) -> Fp12 {
        let a2 = self.a.square();
        let b2 = self.b.square();
        let c2j = self.c.square().mul_by_j();

        // 3a^2 - 2conj(a)
        let a = a2.double() + a2 + self.a.neg_conjugate().double();
        // 3j c^2 + 2conj(b)
        let b = c2j.double() + c2j + self.b.conjugate().double();
        // 3b^2 - 2conj(c)
        let c = b2.double() + b2 + self.c.neg_conjugate().double();

        Fp12 { a, b, c }
    }

    /// Multiplicative inverse.
    ///
    /// Fails with [`Error::InvalidOperand`](crate::Error::InvalidOperand)
    /// when `self` is zero.
    pub fn invert(&self) -> Result<Fp12> {
        let f0 = self.a.square() - (self.b * self.c).mul_by_j();
        let f1 = self.c.square().mul_by_j() - self.a * self.b;
        let f2 = self.b.square() - self.a * self.c;

        // Norm down to Fp4
        let n = (self.b * f2).mul_by_j() + self.a * f0 + (self.c * f1).mul_by_j();

        let n_inv = n.invert();
        validate::operand(
            bool::from(n_inv.is_some()),
            "Fp12::invert",
            "zero has no multiplicative inverse",
        )?;
        let n_inv = n_inv.unwrap_or(Fp4::zero());

        Ok(Fp12 {
            a: f0 * n_inv,
            b: f1 * n_inv,
            c: f2 * n_inv,
        })
    }

    /// Trace down to Fp4, `3a`
    pub fn trace(&self) -> Fp4 {
        self.a.mul_small(3)
    }
}
