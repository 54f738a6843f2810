//! Degree-12 extension Fp12 = Fp4[w]/(w^3 - j), the pairing target field.
//!
//! An element is the triple (a, b, c) standing for a + b·w + c·w². Every
//! arithmetic routine returns a fresh reduced value and reads its operands
//! through shared references, so `x.mul(&x)` and friends are always valid.

use super::fp4::Fp4;
use core::fmt;
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

mod arith;
mod codec;
mod frobenius;
mod pow;

/// Element a + b·w + c·w² of the degree-12 extension
#[derive(Copy, Clone)]
pub struct Fp12 {
    pub(crate) a: Fp4,
    pub(crate) b: Fp4,
    pub(crate) c: Fp4,
}

impl fmt::Debug for Fp12 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?},{:?},{:?}]", self.a, self.b, self.c)
    }
}

impl fmt::Display for Fp12 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl Default for Fp12 {
    fn default() -> Self {
        Fp12::zero()
    }
}

impl zeroize::DefaultIsZeroes for Fp12 {}

impl From<Fp4> for Fp12 {
    fn from(f: Fp4) -> Fp12 {
        Fp12::from_fp4(f)
    }
}

impl ConstantTimeEq for Fp12 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.a.ct_eq(&other.a) & self.b.ct_eq(&other.b) & self.c.ct_eq(&other.c)
    }
}

impl Eq for Fp12 {}
impl PartialEq for Fp12 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fp12 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp12 {
            a: Fp4::conditional_select(&a.a, &b.a, choice),
            b: Fp4::conditional_select(&a.b, &b.b, choice),
            c: Fp4::conditional_select(&a.c, &b.c, choice),
        }
    }
}

impl Fp12 {
    /// Build from the three Fp4 components
    #[inline]
    pub const fn new(a: Fp4, b: Fp4, c: Fp4) -> Fp12 {
        Fp12 { a, b, c }
    }

    /// Embed an Fp4 value as the `a` component
    #[inline]
    pub const fn from_fp4(a: Fp4) -> Fp12 {
        Fp12 {
            a,
            b: Fp4::zero(),
            c: Fp4::zero(),
        }
    }

    /// Element for a small integer
    pub fn from_u64(v: u64) -> Fp12 {
        Fp12::from_fp4(Fp4::one().mul_small(v))
    }

    /// Additive identity
    #[inline]
    pub const fn zero() -> Fp12 {
        Fp12 {
            a: Fp4::zero(),
            b: Fp4::zero(),
            c: Fp4::zero(),
        }
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Fp12 {
        Fp12 {
            a: Fp4::one(),
            b: Fp4::zero(),
            c: Fp4::zero(),
        }
    }

    /// Random element
    pub fn random(mut rng: impl RngCore) -> Fp12 {
        Fp12 {
            a: Fp4::random(&mut rng),
            b: Fp4::random(&mut rng),
            c: Fp4::random(&mut rng),
        }
    }

    /// The `a` component
    #[inline]
    pub fn a(&self) -> Fp4 {
        self.a
    }

    /// The `b` component (coefficient of w)
    #[inline]
    pub fn b(&self) -> Fp4 {
        self.b
    }

    /// The `c` component (coefficient of w²)
    #[inline]
    pub fn c(&self) -> Fp4 {
        self.c
    }

    /// Reduce all components modulo p
    pub fn reduce(&mut self) {
        self.a.reduce();
        self.b.reduce();
        self.c.reduce();
    }

    /// Normalise all components
    pub fn norm(&mut self) {
        self.a.norm();
        self.b.norm();
        self.c.norm();
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> Choice {
        self.a.is_zero() & self.b.is_zero() & self.c.is_zero()
    }

    /// Check if element is the multiplicative identity
    pub fn is_one(&self) -> Choice {
        self.a.ct_eq(&Fp4::one()) & self.b.is_zero() & self.c.is_zero()
    }

    /// Overwrite with the multiplicative identity
    #[inline]
    pub fn set_one(&mut self) {
        *self = Fp12::one();
    }

    /// Conjugate over Fp6, the inverse of a cyclotomic element
    #[inline]
    pub fn conjugate(&self) -> Fp12 {
        Fp12 {
            a: self.a.conjugate(),
            b: self.b.neg_conjugate(),
            c: self.c.conjugate(),
        }
    }
}
