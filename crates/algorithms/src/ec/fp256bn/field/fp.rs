//! FP256BN base field `GF(p)` where p = 0xfffffffffffcf0cd46e5f25eee71a49f0cdc65fb12980a82d3292ddbaed33013
//!
//! The modulus uses the full 256 bits of the four limbs, so additions and
//! Montgomery reductions keep the carry out of the top limb and fold it into
//! the final conditional subtraction.

// Standard library imports
use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

// External crate imports
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use pairfield_internal::endian::{limbs_from_be_bytes, limbs_to_be_bytes};
use pairfield_params::pairing::fp256bn::{
    FP256BN_FIELD_SIZE, FP256BN_MODULUS, FP256BN_MODULUS_MINUS_TWO, FP256BN_MONTGOMERY_INV,
    FP256BN_MONTGOMERY_R, FP256BN_MONTGOMERY_R2, FP256BN_MONTGOMERY_R3,
};

// ============================================================================
// Arithmetic Helper Functions
// ============================================================================

/// Compute a + b + carry, returning (result, carry)
#[inline(always)]
const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + (b as u128) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Compute a - (b + borrow), returning (result, borrow)
#[inline(always)]
const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let ret = (a as u128).wrapping_sub((b as u128) + ((borrow >> 63) as u128));
    (ret as u64, (ret >> 64) as u64)
}

/// Compute a + (b * c) + carry, returning (result, carry)
#[inline(always)]
const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + ((b as u128) * (c as u128)) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

// ============================================================================
// Field Constants
// ============================================================================

/// Field modulus p
const MODULUS: [u64; 4] = FP256BN_MODULUS;

/// Montgomery parameter INV = -(p^{-1} mod 2^64) mod 2^64
const INV: u64 = FP256BN_MONTGOMERY_INV;

/// Montgomery R = 2^256 mod p
const R: Fp = Fp(FP256BN_MONTGOMERY_R);

/// Montgomery R^2 = 2^512 mod p
const R2: Fp = Fp(FP256BN_MONTGOMERY_R2);

/// Montgomery R^3 = 2^768 mod p
const R3: Fp = Fp(FP256BN_MONTGOMERY_R3);

// ============================================================================
// Field Element Type
// ============================================================================

/// Element in Montgomery form: Fp(a) = aR mod p, with R = 2^256
#[derive(Copy, Clone)]
pub struct Fp(pub(crate) [u64; 4]);

// ============================================================================
// Field Operations (Extracted Functions)
// ============================================================================

impl Fp {
    /// Conditionally subtract p from the 257-bit value `carry:limbs`.
    ///
    /// The input must be below 2p.
    #[inline]
    const fn subtract_p(limbs: [u64; 4], carry: u64) -> Fp {
        let (r0, borrow) = sbb(limbs[0], MODULUS[0], 0);
        let (r1, borrow) = sbb(limbs[1], MODULUS[1], borrow);
        let (r2, borrow) = sbb(limbs[2], MODULUS[2], borrow);
        let (r3, borrow) = sbb(limbs[3], MODULUS[3], borrow);
        let (_, borrow) = sbb(carry, 0, borrow);

        // borrow is all ones when the input was already below p
        let r0 = (limbs[0] & borrow) | (r0 & !borrow);
        let r1 = (limbs[1] & borrow) | (r1 & !borrow);
        let r2 = (limbs[2] & borrow) | (r2 & !borrow);
        let r3 = (limbs[3] & borrow) | (r3 & !borrow);

        Fp([r0, r1, r2, r3])
    }

    /// Montgomery reduction of an eight-limb product
    #[inline(always)]
    #[allow(clippy::too_many_arguments)]
    pub(crate) const fn montgomery_reduce(
        t0: u64, t1: u64, t2: u64, t3: u64,
        t4: u64, t5: u64, t6: u64, t7: u64,
    ) -> Self {
        // Round 1
        let k = t0.wrapping_mul(INV);
        let (_, carry) = mac(t0, k, MODULUS[0], 0);
        let (r1, carry) = mac(t1, k, MODULUS[1], carry);
        let (r2, carry) = mac(t2, k, MODULUS[2], carry);
        let (r3, carry) = mac(t3, k, MODULUS[3], carry);
        let (r4, r5) = adc(t4, 0, carry);

        // Round 2
        let k = r1.wrapping_mul(INV);
        let (_, carry) = mac(r1, k, MODULUS[0], 0);
        let (r2, carry) = mac(r2, k, MODULUS[1], carry);
        let (r3, carry) = mac(r3, k, MODULUS[2], carry);
        let (r4, carry) = mac(r4, k, MODULUS[3], carry);
        let (r5, r6) = adc(t5, r5, carry);

        // Round 3
        let k = r2.wrapping_mul(INV);
        let (_, carry) = mac(r2, k, MODULUS[0], 0);
        let (r3, carry) = mac(r3, k, MODULUS[1], carry);
        let (r4, carry) = mac(r4, k, MODULUS[2], carry);
        let (r5, carry) = mac(r5, k, MODULUS[3], carry);
        let (r6, r7) = adc(t6, r6, carry);

        // Round 4
        let k = r3.wrapping_mul(INV);
        let (_, carry) = mac(r3, k, MODULUS[0], 0);
        let (r4, carry) = mac(r4, k, MODULUS[1], carry);
        let (r5, carry) = mac(r5, k, MODULUS[2], carry);
        let (r6, carry) = mac(r6, k, MODULUS[3], carry);
        let (r7, r8) = adc(t7, r7, carry);

        Self::subtract_p([r4, r5, r6, r7], r8)
    }
}

// ============================================================================
// Core Field Operations
// ============================================================================

impl Fp {
    /// Additive identity
    #[inline]
    pub const fn zero() -> Fp {
        Fp([0, 0, 0, 0])
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Fp {
        R
    }

    /// Field element for a small integer
    pub const fn from_u64(v: u64) -> Fp {
        Fp::mul(&Fp([v, 0, 0, 0]), &R2)
    }

    /// Field element from canonical (non-Montgomery) limbs, little-endian
    ///
    /// The limbs must encode a value below p.
    pub(crate) const fn from_canonical_limbs(limbs: [u64; 4]) -> Fp {
        Fp::mul(&Fp(limbs), &R2)
    }

    /// Create from raw Montgomery limbs without reducing them
    #[cfg(test)]
    pub(crate) const fn from_raw_unchecked(v: [u64; 4]) -> Fp {
        Fp(v)
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Fp::zero())
    }

    /// Bring the limbs into the range `[0, p)`.
    ///
    /// Arithmetic always produces reduced output, so this only has an effect
    /// on raw limb vectors.
    #[inline]
    pub fn reduce(&mut self) {
        *self = self.reduced();
    }

    #[inline]
    const fn reduced(&self) -> Fp {
        Self::subtract_p(self.0, 0)
    }

    /// Add two field elements
    #[inline]
    pub const fn add(&self, rhs: &Fp) -> Fp {
        let (d0, carry) = adc(self.0[0], rhs.0[0], 0);
        let (d1, carry) = adc(self.0[1], rhs.0[1], carry);
        let (d2, carry) = adc(self.0[2], rhs.0[2], carry);
        let (d3, carry) = adc(self.0[3], rhs.0[3], carry);

        Self::subtract_p([d0, d1, d2, d3], carry)
    }

    /// Double this element
    #[inline]
    pub const fn double(&self) -> Fp {
        self.add(self)
    }

    /// Subtract two field elements
    #[inline]
    pub const fn sub(&self, rhs: &Fp) -> Fp {
        let (d0, borrow) = sbb(self.0[0], rhs.0[0], 0);
        let (d1, borrow) = sbb(self.0[1], rhs.0[1], borrow);
        let (d2, borrow) = sbb(self.0[2], rhs.0[2], borrow);
        let (d3, borrow) = sbb(self.0[3], rhs.0[3], borrow);

        // Add p back if the subtraction underflowed
        let (d0, carry) = adc(d0, MODULUS[0] & borrow, 0);
        let (d1, carry) = adc(d1, MODULUS[1] & borrow, carry);
        let (d2, carry) = adc(d2, MODULUS[2] & borrow, carry);
        let (d3, _) = adc(d3, MODULUS[3] & borrow, carry);

        Fp([d0, d1, d2, d3])
    }

    /// Negate a field element
    #[inline]
    pub const fn neg(&self) -> Fp {
        let (d0, borrow) = sbb(MODULUS[0], self.0[0], 0);
        let (d1, borrow) = sbb(MODULUS[1], self.0[1], borrow);
        let (d2, borrow) = sbb(MODULUS[2], self.0[2], borrow);
        let (d3, _) = sbb(MODULUS[3], self.0[3], borrow);

        // Mask if zero
        let mask = (((self.0[0] | self.0[1] | self.0[2] | self.0[3]) == 0) as u64).wrapping_sub(1);

        Fp([d0 & mask, d1 & mask, d2 & mask, d3 & mask])
    }

    /// Multiply two field elements
    #[inline]
    pub const fn mul(&self, rhs: &Fp) -> Fp {
        let (t0, carry) = mac(0, self.0[0], rhs.0[0], 0);
        let (t1, carry) = mac(0, self.0[0], rhs.0[1], carry);
        let (t2, carry) = mac(0, self.0[0], rhs.0[2], carry);
        let (t3, t4) = mac(0, self.0[0], rhs.0[3], carry);

        let (t1, carry) = mac(t1, self.0[1], rhs.0[0], 0);
        let (t2, carry) = mac(t2, self.0[1], rhs.0[1], carry);
        let (t3, carry) = mac(t3, self.0[1], rhs.0[2], carry);
        let (t4, t5) = mac(t4, self.0[1], rhs.0[3], carry);

        let (t2, carry) = mac(t2, self.0[2], rhs.0[0], 0);
        let (t3, carry) = mac(t3, self.0[2], rhs.0[1], carry);
        let (t4, carry) = mac(t4, self.0[2], rhs.0[2], carry);
        let (t5, t6) = mac(t5, self.0[2], rhs.0[3], carry);

        let (t3, carry) = mac(t3, self.0[3], rhs.0[0], 0);
        let (t4, carry) = mac(t4, self.0[3], rhs.0[1], carry);
        let (t5, carry) = mac(t5, self.0[3], rhs.0[2], carry);
        let (t6, t7) = mac(t6, self.0[3], rhs.0[3], carry);

        Self::montgomery_reduce(t0, t1, t2, t3, t4, t5, t6, t7)
    }

    /// Square this element
    #[inline]
    pub const fn square(&self) -> Self {
        self.mul(self)
    }
}

// ============================================================================
// Advanced Field Operations
// ============================================================================

impl Fp {
    /// Variable-time exponentiation
    pub fn pow_vartime(&self, by: &[u64; 4]) -> Self {
        let mut res = Self::one();
        for e in by.iter().rev() {
            for i in (0..64).rev() {
                res = res.square();
                if ((*e >> i) & 1) == 1 {
                    res *= self;
                }
            }
        }
        res
    }

    /// Multiplicative inverse
    #[inline]
    pub fn invert(&self) -> CtOption<Self> {
        // Fermat's little theorem: a^(p-2)
        let t = self.pow_vartime(&FP256BN_MODULUS_MINUS_TWO);

        CtOption::new(t, !self.is_zero())
    }
}

// ============================================================================
// Serialization
// ============================================================================

impl Fp {
    /// Decode from big-endian bytes; fails for values not below p
    pub fn from_bytes(bytes: &[u8; FP256BN_FIELD_SIZE]) -> CtOption<Fp> {
        let tmp = Fp(limbs_from_be_bytes::<4>(bytes));

        // Check if < modulus
        let (_, borrow) = sbb(tmp.0[0], MODULUS[0], 0);
        let (_, borrow) = sbb(tmp.0[1], MODULUS[1], borrow);
        let (_, borrow) = sbb(tmp.0[2], MODULUS[2], borrow);
        let (_, borrow) = sbb(tmp.0[3], MODULUS[3], borrow);

        let is_some = (borrow as u8) & 1;

        // Convert to Montgomery form
        CtOption::new(tmp * R2, Choice::from(is_some))
    }

    /// Encode to big-endian bytes
    pub fn to_bytes(self) -> [u8; FP256BN_FIELD_SIZE] {
        // Convert from Montgomery form
        let tmp = Fp::montgomery_reduce(self.0[0], self.0[1], self.0[2], self.0[3], 0, 0, 0, 0);

        let mut res = [0; FP256BN_FIELD_SIZE];
        limbs_to_be_bytes(&tmp.0, &mut res);
        res
    }

    /// Create random field element
    pub fn random(mut rng: impl RngCore) -> Fp {
        let mut bytes = [0u8; 64];
        rng.fill_bytes(&mut bytes);

        // Reduce the 512-bit big-endian integer d1 * 2^256 + d0
        let d1 = Fp(limbs_from_be_bytes::<4>(&bytes[..32]));
        let d0 = Fp(limbs_from_be_bytes::<4>(&bytes[32..]));
        d0 * R2 + d1 * R3
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl fmt::Debug for Fp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let tmp = self.to_bytes();
        write!(f, "0x")?;
        for &b in tmp.iter() {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl fmt::Display for Fp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl Default for Fp {
    fn default() -> Self {
        Fp::zero()
    }
}

impl zeroize::DefaultIsZeroes for Fp {}

impl ConstantTimeEq for Fp {
    fn ct_eq(&self, other: &Self) -> Choice {
        let a = self.reduced();
        let b = other.reduced();
        a.0[0].ct_eq(&b.0[0])
            & a.0[1].ct_eq(&b.0[1])
            & a.0[2].ct_eq(&b.0[2])
            & a.0[3].ct_eq(&b.0[3])
    }
}

impl Eq for Fp {}
impl PartialEq for Fp {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fp {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp([
            u64::conditional_select(&a.0[0], &b.0[0], choice),
            u64::conditional_select(&a.0[1], &b.0[1], choice),
            u64::conditional_select(&a.0[2], &b.0[2], choice),
            u64::conditional_select(&a.0[3], &b.0[3], choice),
        ])
    }
}

// Binary operation trait implementations
impl<'a> Neg for &'a Fp {
    type Output = Fp;
    #[inline]
    fn neg(self) -> Fp {
        Fp::neg(self)
    }
}

impl Neg for Fp {
    type Output = Fp;
    #[inline]
    fn neg(self) -> Fp {
        -&self
    }
}

impl<'a, 'b> Sub<&'b Fp> for &'a Fp {
    type Output = Fp;
    #[inline]
    fn sub(self, rhs: &'b Fp) -> Fp {
        Fp::sub(self, rhs)
    }
}

impl<'a, 'b> Add<&'b Fp> for &'a Fp {
    type Output = Fp;
    #[inline]
    fn add(self, rhs: &'b Fp) -> Fp {
        Fp::add(self, rhs)
    }
}

impl<'a, 'b> Mul<&'b Fp> for &'a Fp {
    type Output = Fp;
    #[inline]
    fn mul(self, rhs: &'b Fp) -> Fp {
        Fp::mul(self, rhs)
    }
}

// Additional binop implementations for convenience
impl_binops_additive!(Fp, Fp);
impl_binops_multiplicative!(Fp, Fp);
