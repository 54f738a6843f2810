//! Bit access on arbitrary-precision exponents.

use num_bigint::BigUint;
use num_traits::Zero;

/// The exponent operations used by the power ladders and the signed-digit
/// recoding of the four-base exponentiation.
pub(crate) trait ExponentBits {
    /// Lowest bit as 0 or 1
    fn parity(&self) -> u8;

    /// The `k` least significant bits, `k < 8`
    fn last_bits(&self, k: u32) -> u8;

    /// In-place right shift by one bit
    fn shr1(&mut self);

    /// Add a small value
    fn inc(&mut self, v: u32);

    /// Strip the next signed digit `(t mod 4) - 2` from an odd value and
    /// return it, leaving `(t - digit) / 2`, which is odd again
    fn signed_digit(&mut self) -> i8;

    /// Number of significant bits
    fn nbits(&self) -> usize;

    /// Test for zero
    fn is_zilch(&self) -> bool;
}

impl ExponentBits for BigUint {
    #[inline]
    fn parity(&self) -> u8 {
        self.bit(0) as u8
    }

    #[inline]
    fn last_bits(&self, k: u32) -> u8 {
        let low = self.iter_u64_digits().next().unwrap_or(0);
        (low & ((1u64 << k) - 1)) as u8
    }

    #[inline]
    fn shr1(&mut self) {
        *self >>= 1u32;
    }

    #[inline]
    fn inc(&mut self, v: u32) {
        *self += v;
    }

    #[inline]
    fn signed_digit(&mut self) -> i8 {
        // t - ((t mod 4) - 2) = t + 2 - (t mod 4), with no branch on the sign
        let lb = self.last_bits(2);
        *self += 2u32;
        *self -= lb as u32;
        self.shr1();
        lb as i8 - 2
    }

    #[inline]
    fn nbits(&self) -> usize {
        self.bits() as usize
    }

    #[inline]
    fn is_zilch(&self) -> bool {
        self.is_zero()
    }
}

/// `2^bits - 1`, the largest exponent of the given width
#[cfg(test)]
pub(crate) fn all_ones(bits: u32) -> BigUint {
    use num_traits::One;
    (BigUint::one() << bits) - BigUint::one()
}
