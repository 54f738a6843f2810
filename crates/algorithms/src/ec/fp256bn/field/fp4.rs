//! Quartic extension Fp4 = Fp2[j]/(j^2 - (1 + i))

use super::fp2::Fp2;
use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use pairfield_params::pairing::fp256bn::{FP256BN_FP2_SIZE, FP256BN_FP4_SIZE};

/// Element c0 + c1·j, with j^2 = 1 + i
#[derive(Copy, Clone)]
pub struct Fp4 {
    /// Real part
    pub c0: Fp2,
    /// Imaginary part
    pub c1: Fp2,
}

impl fmt::Debug for Fp4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?},{:?}]", self.c0, self.c1)
    }
}

impl fmt::Display for Fp4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl Default for Fp4 {
    fn default() -> Self {
        Fp4::zero()
    }
}

impl zeroize::DefaultIsZeroes for Fp4 {}

impl From<Fp2> for Fp4 {
    fn from(f: Fp2) -> Fp4 {
        Fp4::from_fp2(f)
    }
}

impl ConstantTimeEq for Fp4 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl Eq for Fp4 {}
impl PartialEq for Fp4 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fp4 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp4 {
            c0: Fp2::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp2::conditional_select(&a.c1, &b.c1, choice),
        }
    }
}

impl<'a> Neg for &'a Fp4 {
    type Output = Fp4;
    #[inline]
    fn neg(self) -> Fp4 {
        Fp4::neg(self)
    }
}

impl Neg for Fp4 {
    type Output = Fp4;
    #[inline]
    fn neg(self) -> Fp4 {
        -&self
    }
}

impl<'a, 'b> Sub<&'b Fp4> for &'a Fp4 {
    type Output = Fp4;
    #[inline]
    fn sub(self, rhs: &'b Fp4) -> Fp4 {
        Fp4::sub(self, rhs)
    }
}

impl<'a, 'b> Add<&'b Fp4> for &'a Fp4 {
    type Output = Fp4;
    #[inline]
    fn add(self, rhs: &'b Fp4) -> Fp4 {
        Fp4::add(self, rhs)
    }
}

impl<'a, 'b> Mul<&'b Fp4> for &'a Fp4 {
    type Output = Fp4;
    #[inline]
    fn mul(self, rhs: &'b Fp4) -> Fp4 {
        Fp4::mul(self, rhs)
    }
}

impl_binops_additive!(Fp4, Fp4);
impl_binops_multiplicative!(Fp4, Fp4);

impl Fp4 {
    /// Build from real and imaginary parts
    #[inline]
    pub const fn new(c0: Fp2, c1: Fp2) -> Fp4 {
        Fp4 { c0, c1 }
    }

    /// Embed an Fp2 value as the real part
    #[inline]
    pub const fn from_fp2(c0: Fp2) -> Fp4 {
        Fp4 {
            c0,
            c1: Fp2::zero(),
        }
    }

    /// Additive identity
    #[inline]
    pub const fn zero() -> Fp4 {
        Fp4 {
            c0: Fp2::zero(),
            c1: Fp2::zero(),
        }
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Fp4 {
        Fp4 {
            c0: Fp2::one(),
            c1: Fp2::zero(),
        }
    }

    /// Real part
    #[inline]
    pub fn real(&self) -> Fp2 {
        self.c0
    }

    /// Imaginary part
    #[inline]
    pub fn imaginary(&self) -> Fp2 {
        self.c1
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    /// Random element
    pub fn random(mut rng: impl RngCore) -> Fp4 {
        Fp4 {
            c0: Fp2::random(&mut rng),
            c1: Fp2::random(&mut rng),
        }
    }

    /// Reduce all coefficients modulo p
    #[inline]
    pub fn reduce(&mut self) {
        self.c0.reduce();
        self.c1.reduce();
    }

    /// Normalise all coefficients.
    ///
    /// Limbs never carry excess bits in this representation, so this is the
    /// same conditional subtraction as [`Fp4::reduce`].
    #[inline]
    pub fn norm(&mut self) {
        self.reduce();
    }

    /// Conjugate over Fp2: c0 - c1·j
    #[inline]
    pub fn conjugate(&self) -> Fp4 {
        Fp4 {
            c0: self.c0,
            c1: -self.c1,
        }
    }

    /// Negated conjugate: -c0 + c1·j
    #[inline]
    pub fn neg_conjugate(&self) -> Fp4 {
        Fp4 {
            c0: -self.c0,
            c1: self.c1,
        }
    }

    /// Multiply by j
    #[inline]
    pub fn mul_by_j(&self) -> Fp4 {
        // (c0 + c1 j) * j = c1 (1 + i) + c0 j
        Fp4 {
            c0: self.c1.mul_by_nonresidue(),
            c1: self.c0,
        }
    }

    /// Multiply both halves by an Fp2 value
    #[inline]
    pub fn mul_fp2(&self, s: &Fp2) -> Fp4 {
        Fp4 {
            c0: self.c0 * s,
            c1: self.c1 * s,
        }
    }

    /// Multiply by a small integer
    #[inline]
    pub fn mul_small(&self, k: u64) -> Fp4 {
        Fp4 {
            c0: self.c0.mul_small(k),
            c1: self.c1.mul_small(k),
        }
    }

    /// Frobenius twist used by the degree-12 map.
    ///
    /// `f3` is the cube of the tower's Frobenius constant.
    pub fn frobenius(&self, f3: &Fp2) -> Fp4 {
        Fp4 {
            c0: self.c0.conjugate(),
            c1: self.c1.conjugate() * f3,
        }
    }

    /// Square this element
    pub fn square(&self) -> Fp4 {
        // (c0 + c1 j)^2 = c0^2 + (1 + i) c1^2 + 2 c0 c1 j
        let t0 = self.c0.square();
        let t1 = self.c1.square();
        let t2 = (self.c0 + self.c1).square();

        Fp4 {
            c0: t0 + t1.mul_by_nonresidue(),
            c1: t2 - t0 - t1,
        }
    }

    /// Multiply two elements
    pub fn mul(&self, rhs: &Fp4) -> Fp4 {
        let t0 = self.c0 * rhs.c0;
        let t1 = self.c1 * rhs.c1;
        let t2 = (self.c0 + self.c1) * (rhs.c0 + rhs.c1);

        Fp4 {
            c0: t0 + t1.mul_by_nonresidue(),
            c1: t2 - t0 - t1,
        }
    }

    /// Add two elements
    #[inline]
    pub fn add(&self, rhs: &Fp4) -> Fp4 {
        Fp4 {
            c0: self.c0 + rhs.c0,
            c1: self.c1 + rhs.c1,
        }
    }

    /// Subtract two elements
    #[inline]
    pub fn sub(&self, rhs: &Fp4) -> Fp4 {
        Fp4 {
            c0: self.c0 - rhs.c0,
            c1: self.c1 - rhs.c1,
        }
    }

    /// Negate this element
    #[inline]
    pub fn neg(&self) -> Fp4 {
        Fp4 {
            c0: -self.c0,
            c1: -self.c1,
        }
    }

    /// Double this element
    #[inline]
    pub fn double(&self) -> Fp4 {
        self.add(self)
    }

    /// Multiplicative inverse
    pub fn invert(&self) -> CtOption<Self> {
        // 1/(a + bj) = (a - bj)/(a^2 - (1 + i) b^2)
        let n = self.c0.square() - self.c1.square().mul_by_nonresidue();
        n.invert().map(|t| Fp4 {
            c0: self.c0 * t,
            c1: -(self.c1 * t),
        })
    }

    /// Decode from big-endian bytes, real part first
    pub fn from_bytes(bytes: &[u8; FP256BN_FP4_SIZE]) -> CtOption<Fp4> {
        let mut c0 = [0u8; FP256BN_FP2_SIZE];
        let mut c1 = [0u8; FP256BN_FP2_SIZE];
        c0.copy_from_slice(&bytes[..FP256BN_FP2_SIZE]);
        c1.copy_from_slice(&bytes[FP256BN_FP2_SIZE..]);

        Fp2::from_bytes(&c0).and_then(|c0| Fp2::from_bytes(&c1).map(|c1| Fp4 { c0, c1 }))
    }

    /// Encode to big-endian bytes, real part first
    pub fn to_bytes(&self) -> [u8; FP256BN_FP4_SIZE] {
        let mut res = [0u8; FP256BN_FP4_SIZE];
        res[..FP256BN_FP2_SIZE].copy_from_slice(&self.c0.to_bytes());
        res[FP256BN_FP2_SIZE..].copy_from_slice(&self.c1.to_bytes());
        res
    }
}
