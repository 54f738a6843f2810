//! Quadratic extension Fp2 = Fp[i]/(i^2 + 1)

use super::fp::Fp;
use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use pairfield_params::pairing::fp256bn::{
    FP256BN_FIELD_SIZE, FP256BN_FP2_SIZE, FP256BN_FROBENIUS_FRA, FP256BN_FROBENIUS_FRB,
};

/// Element c0 + c1·i
#[derive(Copy, Clone)]
pub struct Fp2 {
    /// Real part
    pub c0: Fp,
    /// Imaginary part
    pub c1: Fp,
}

impl fmt::Debug for Fp2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?},{:?}]", self.c0, self.c1)
    }
}

impl fmt::Display for Fp2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl Default for Fp2 {
    fn default() -> Self {
        Fp2::zero()
    }
}

impl zeroize::DefaultIsZeroes for Fp2 {}

impl From<Fp> for Fp2 {
    fn from(f: Fp) -> Fp2 {
        Fp2 {
            c0: f,
            c1: Fp::zero(),
        }
    }
}

impl ConstantTimeEq for Fp2 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl Eq for Fp2 {}
impl PartialEq for Fp2 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fp2 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp2 {
            c0: Fp::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp::conditional_select(&a.c1, &b.c1, choice),
        }
    }
}

impl<'a> Neg for &'a Fp2 {
    type Output = Fp2;
    #[inline]
    fn neg(self) -> Fp2 {
        Fp2::neg(self)
    }
}

impl Neg for Fp2 {
    type Output = Fp2;
    #[inline]
    fn neg(self) -> Fp2 {
        -&self
    }
}

impl<'a, 'b> Sub<&'b Fp2> for &'a Fp2 {
    type Output = Fp2;
    #[inline]
    fn sub(self, rhs: &'b Fp2) -> Fp2 {
        Fp2::sub(self, rhs)
    }
}

impl<'a, 'b> Add<&'b Fp2> for &'a Fp2 {
    type Output = Fp2;
    #[inline]
    fn add(self, rhs: &'b Fp2) -> Fp2 {
        Fp2::add(self, rhs)
    }
}

impl<'a, 'b> Mul<&'b Fp2> for &'a Fp2 {
    type Output = Fp2;
    #[inline]
    fn mul(self, rhs: &'b Fp2) -> Fp2 {
        Fp2::mul(self, rhs)
    }
}

impl_binops_additive!(Fp2, Fp2);
impl_binops_multiplicative!(Fp2, Fp2);

impl Fp2 {
    /// Build from real and imaginary parts
    #[inline]
    pub const fn new(c0: Fp, c1: Fp) -> Fp2 {
        Fp2 { c0, c1 }
    }

    /// Additive identity
    #[inline]
    pub const fn zero() -> Fp2 {
        Fp2 {
            c0: Fp::zero(),
            c1: Fp::zero(),
        }
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Fp2 {
        Fp2 {
            c0: Fp::one(),
            c1: Fp::zero(),
        }
    }

    /// Frobenius constant `(1 + i)^((p - 1) / 6)` of the FP256BN tower
    pub const fn frobenius_constant() -> Fp2 {
        Fp2 {
            c0: Fp::from_canonical_limbs(FP256BN_FROBENIUS_FRA),
            c1: Fp::from_canonical_limbs(FP256BN_FROBENIUS_FRB),
        }
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    /// Random element
    pub fn random(mut rng: impl RngCore) -> Fp2 {
        Fp2 {
            c0: Fp::random(&mut rng),
            c1: Fp::random(&mut rng),
        }
    }

    /// Reduce both coefficients modulo p
    #[inline]
    pub fn reduce(&mut self) {
        self.c0.reduce();
        self.c1.reduce();
    }

    /// Complex conjugate, which is also the p-power Frobenius on Fp2
    #[inline]
    pub fn conjugate(&self) -> Self {
        Fp2 {
            c0: self.c0,
            c1: -self.c1,
        }
    }

    /// Multiply by i
    #[inline]
    pub fn mul_by_i(&self) -> Fp2 {
        // (c0 + c1 i) * i = -c1 + c0 i
        Fp2 {
            c0: -self.c1,
            c1: self.c0,
        }
    }

    /// Multiply by the non-residue (1 + i)
    #[inline]
    pub fn mul_by_nonresidue(&self) -> Fp2 {
        // (c0 + c1 i)(1 + i) = (c0 - c1) + (c0 + c1) i
        Fp2 {
            c0: self.c0 - self.c1,
            c1: self.c0 + self.c1,
        }
    }

    /// Multiply both coefficients by a base field element
    #[inline]
    pub fn mul_fp(&self, s: &Fp) -> Fp2 {
        Fp2 {
            c0: self.c0 * s,
            c1: self.c1 * s,
        }
    }

    /// Multiply by a small integer
    #[inline]
    pub fn mul_small(&self, k: u64) -> Fp2 {
        self.mul_fp(&Fp::from_u64(k))
    }

    /// Square this element
    pub fn square(&self) -> Fp2 {
        // (c0 + c1 i)^2 = (c0 + c1)(c0 - c1) + 2 c0 c1 i
        let a = self.c0 + self.c1;
        let b = self.c0 - self.c1;
        let c = self.c0.double();

        Fp2 {
            c0: a * b,
            c1: c * self.c1,
        }
    }

    /// Multiply two elements
    pub fn mul(&self, rhs: &Fp2) -> Fp2 {
        // Karatsuba: three base field multiplications
        let t0 = self.c0 * rhs.c0;
        let t1 = self.c1 * rhs.c1;
        let t2 = (self.c0 + self.c1) * (rhs.c0 + rhs.c1);

        Fp2 {
            c0: t0 - t1,
            c1: t2 - t0 - t1,
        }
    }

    /// Add two elements
    #[inline]
    pub fn add(&self, rhs: &Fp2) -> Fp2 {
        Fp2 {
            c0: self.c0 + rhs.c0,
            c1: self.c1 + rhs.c1,
        }
    }

    /// Subtract two elements
    #[inline]
    pub fn sub(&self, rhs: &Fp2) -> Fp2 {
        Fp2 {
            c0: self.c0 - rhs.c0,
            c1: self.c1 - rhs.c1,
        }
    }

    /// Negate this element
    #[inline]
    pub fn neg(&self) -> Fp2 {
        Fp2 {
            c0: -self.c0,
            c1: -self.c1,
        }
    }

    /// Double this element
    #[inline]
    pub fn double(&self) -> Fp2 {
        self.add(self)
    }

    /// Multiplicative inverse
    pub fn invert(&self) -> CtOption<Self> {
        // 1/(a + bi) = (a - bi)/(a^2 + b^2)
        (self.c0.square() + self.c1.square()).invert().map(|t| Fp2 {
            c0: self.c0 * t,
            c1: self.c1 * -t,
        })
    }

    /// Decode from big-endian bytes, real part first
    pub fn from_bytes(bytes: &[u8; FP256BN_FP2_SIZE]) -> CtOption<Fp2> {
        let mut c0 = [0u8; FP256BN_FIELD_SIZE];
        let mut c1 = [0u8; FP256BN_FIELD_SIZE];
        c0.copy_from_slice(&bytes[..FP256BN_FIELD_SIZE]);
        c1.copy_from_slice(&bytes[FP256BN_FIELD_SIZE..]);

        Fp::from_bytes(&c0).and_then(|c0| Fp::from_bytes(&c1).map(|c1| Fp2 { c0, c1 }))
    }

    /// Encode to big-endian bytes, real part first
    pub fn to_bytes(&self) -> [u8; FP256BN_FP2_SIZE] {
        let mut res = [0u8; FP256BN_FP2_SIZE];
        res[..FP256BN_FIELD_SIZE].copy_from_slice(&self.c0.to_bytes());
        res[FP256BN_FIELD_SIZE..].copy_from_slice(&self.c1.to_bytes());
        res
    }
}
