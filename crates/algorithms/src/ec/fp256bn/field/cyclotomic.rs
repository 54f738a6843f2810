//! The cyclotomic subgroup of Fp12.
//!
//! Pairing values land here after the easy part of the final
//! exponentiation, `f^((p^6 - 1)(p^2 + 1))`. Inside the subgroup inversion
//! is conjugation and squaring can use the cheaper Granger-Scott formula,
//! which the [`Cyclotomic`] type makes available without exposing them on
//! arbitrary elements.

use super::fp12::Fp12;
use super::fp2::Fp2;
use crate::error::{validate, Result, ResultExt};
use alloc::vec::Vec;
use core::fmt;
use core::ops::{Mul, MulAssign};
use num_bigint::BigUint;
use pairfield_api::{Result as ApiResult, Serialize};
use pairfield_params::pairing::fp256bn::FP256BN_FP12_SIZE;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// An Fp12 element of order dividing `p^4 - p^2 + 1`
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Cyclotomic(Fp12);

impl fmt::Debug for Cyclotomic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cyclotomic({:?})", self.0)
    }
}

impl Default for Cyclotomic {
    fn default() -> Self {
        Cyclotomic::one()
    }
}

impl ConstantTimeEq for Cyclotomic {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl ConditionallySelectable for Cyclotomic {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Cyclotomic(Fp12::conditional_select(&a.0, &b.0, choice))
    }
}

impl From<Cyclotomic> for Fp12 {
    fn from(c: Cyclotomic) -> Fp12 {
        c.0
    }
}

impl<'a, 'b> Mul<&'b Cyclotomic> for &'a Cyclotomic {
    type Output = Cyclotomic;
    #[inline]
    fn mul(self, rhs: &'b Cyclotomic) -> Cyclotomic {
        Cyclotomic(self.0 * rhs.0)
    }
}

impl_binops_multiplicative!(Cyclotomic, Cyclotomic);

impl Fp12 {
    /// Map into the cyclotomic subgroup with the easy part of the final
    /// exponentiation.
    ///
    /// Fails for zero, which has no inverse.
    pub fn into_cyclotomic(&self) -> Result<Cyclotomic> {
        Cyclotomic::from_easy_part(self)
    }
}

impl Cyclotomic {
    /// Wrap `f` after checking subgroup membership.
    ///
    /// Accepts iff `f` is non-zero and `f^(p^4) · f == f^(p^2)`.
    pub fn new(f: Fp12) -> Result<Cyclotomic> {
        let f2 = f.frobenius_map(2);
        let f4 = f2.frobenius_map(2);
        let is_member = !f.is_zero() & (f4 * f).ct_eq(&f2);

        validate::operand(
            bool::from(is_member),
            "Cyclotomic::new",
            "element is not in the cyclotomic subgroup",
        )?;
        Ok(Cyclotomic(f))
    }

    /// Wrap `f` without checking membership.
    ///
    /// Squaring and exponentiation give meaningless results if `f` is not in
    /// the subgroup.
    #[inline]
    pub const fn new_unchecked(f: Fp12) -> Cyclotomic {
        Cyclotomic(f)
    }

    /// `f^((p^6 - 1)(p^2 + 1))`
    pub fn from_easy_part(f: &Fp12) -> Result<Cyclotomic> {
        // f^(p^6 - 1) = conj(f) / f
        let r = f.conjugate() * f.invert()?;
        Ok(Cyclotomic(r.frobenius_map(2) * r))
    }

    /// Decode and check membership
    pub fn from_bytes(bytes: &[u8]) -> Result<Cyclotomic> {
        Cyclotomic::new(Fp12::from_bytes(bytes)?)
    }

    /// Identity element
    #[inline]
    pub const fn one() -> Cyclotomic {
        Cyclotomic(Fp12::one())
    }

    /// Check for the identity
    pub fn is_one(&self) -> Choice {
        self.0.is_one()
    }

    /// Borrow the underlying field element
    #[inline]
    pub fn as_fp12(&self) -> &Fp12 {
        &self.0
    }

    /// Unwrap into the underlying field element
    #[inline]
    pub fn into_fp12(self) -> Fp12 {
        self.0
    }

    /// Granger-Scott squaring
    #[inline]
    pub fn square(&self) -> Cyclotomic {
        Cyclotomic(self.0.unitary_square())
    }

    /// Conjugate, equal to the inverse in this subgroup
    #[inline]
    pub fn conjugate(&self) -> Cyclotomic {
        Cyclotomic(self.0.conjugate())
    }

    /// Inverse by conjugation; never fails
    #[inline]
    pub fn invert(&self) -> Cyclotomic {
        self.conjugate()
    }

    /// p-power Frobenius with an explicit constant
    pub fn frobenius(&self, f: &Fp2) -> Cyclotomic {
        Cyclotomic(self.0.frobenius(f))
    }

    /// Raise to the power p^`power`
    pub fn frobenius_map(&self, power: usize) -> Cyclotomic {
        Cyclotomic(self.0.frobenius_map(power))
    }

    /// Variable-time exponentiation.
    ///
    /// Timing depends on the exponent, so only use it with public exponents.
    pub fn pow(&self, e: &BigUint) -> Cyclotomic {
        Cyclotomic(self.0.unitary_pow_vartime(e))
    }

    /// Exponentiation by the low `bits` bits of `e` with a fixed sequence of
    /// operations.
    ///
    /// `bits` above 64 is rejected with a parameter error.
    pub fn pow_fixed(&self, e: u64, bits: u32) -> Result<Cyclotomic> {
        validate::parameter(bits <= 64, "bits", "exponent width exceeds 64 bits")?;
        Ok(Cyclotomic(self.0.unitary_pow_fixed(e, bits)))
    }

    /// Product of four powers `∏ bases[i]^exponents[i]`
    pub fn multi_pow4(bases: &[Cyclotomic; 4], exponents: &[BigUint; 4]) -> Cyclotomic {
        let q = [bases[0].0, bases[1].0, bases[2].0, bases[3].0];
        Cyclotomic(Fp12::unitary_multi_pow4(&q, exponents))
    }

    /// Encode the underlying element
    pub fn to_bytes(&self) -> [u8; FP256BN_FP12_SIZE] {
        self.0.to_bytes()
    }
}

impl Serialize for Cyclotomic {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Cyclotomic::from_bytes(bytes).with_context("Cyclotomic::from_bytes")
    }

    fn to_bytes(&self) -> Vec<u8> {
        Cyclotomic::to_bytes(self).to_vec()
    }
}
