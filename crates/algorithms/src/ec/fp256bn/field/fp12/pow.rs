//! Exponentiation in Fp12.
//!
//! The unitary routines rely on [`Fp12::unitary_square`] and on conjugation
//! as inversion, so they are only exposed through
//! [`Cyclotomic`](crate::Cyclotomic).

use super::Fp12;
use crate::ec::fp256bn::field::exponent::ExponentBits;
use alloc::vec::Vec;
use num_bigint::BigUint;
use num_traits::Zero;
use pairfield_internal::constant_time::ct_select;

impl Fp12 {
    /// Variable-time exponentiation with general squaring.
    ///
    /// Correct for every element. Timing depends on the exponent, so only
    /// use it with public exponents.
    pub fn pow_vartime(&self, e: &BigUint) -> Fp12 {
        self.ladder_vartime(e, Fp12::square)
    }

    /// Right-to-left square-and-multiply, stopping after the top set bit
    fn ladder_vartime(&self, e: &BigUint, square: fn(&Fp12) -> Fp12) -> Fp12 {
        let mut z = e.clone();
        let mut w = *self;
        let mut r = Fp12::one();

        loop {
            let bit = z.parity();
            z.shr1();
            if bit == 1 {
                r *= w;
            }
            if z.is_zilch() {
                break;
            }
            w = square(&w);
        }
        r
    }

    /// Variable-time power of a cyclotomic element
    pub(crate) fn unitary_pow_vartime(&self, e: &BigUint) -> Fp12 {
        self.ladder_vartime(e, Fp12::unitary_square)
    }

    /// Power by the low `bits` bits of `e` of a cyclotomic element.
    ///
    /// Runs the same multiply/square pair for every bit, picking the slots
    /// by index arithmetic. `bits` must be at most 64.
    pub(crate) fn unitary_pow_fixed(&self, e: u64, bits: u32) -> Fp12 {
        debug_assert!(bits <= 64);
        let mut r = [Fp12::one(), *self];

        for i in (0..bits).rev() {
            let b = ((e >> i) & 1) as usize;
            r[1 - b] = r[1 - b] * r[b];
            r[b] = r[b].unitary_square();
        }
        r[0]
    }

    /// `q[0]^u[0] · q[1]^u[1] · q[2]^u[2] · q[3]^u[3]` for cyclotomic bases.
    ///
    /// Signed one-bit window over the four exponents at once. Every step
    /// performs one squaring and one table multiplication, so there are no
    /// exponent-dependent branches, but table lookups are not cache safe.
    pub(crate) fn unitary_multi_pow4(q: &[Fp12; 4], u: &[BigUint; 4]) -> Fp12 {
        // g[k] = q0 · q1^±1 · q2^±1 · q3^±1, bits 2/1/0 of k select the + signs
        let mut g = [Fp12::one(); 8];
        let lo = q[0] * q[1].conjugate();
        let hi = q[0] * q[1];
        g[..4].fill(lo);
        g[4..].fill(hi);

        let s1 = q[2] * q[3].conjugate();
        let s0 = s1.conjugate();
        g[1] *= s0;
        g[2] *= s1;
        g[5] *= s0;
        g[6] *= s1;

        let s1 = q[2] * q[3];
        let s0 = s1.conjugate();
        g[0] *= s0;
        g[3] *= s1;
        g[4] *= s0;
        g[7] *= s1;

        // Odd exponents only: bump even ones and divide the base back out
        let mut t = u.clone();
        let mut c = Fp12::one();
        let mut total = BigUint::zero();
        for (ti, qi) in t.iter_mut().zip(q.iter()) {
            let even = ti.parity() == 0;
            ti.inc(even as u32);
            c = ct_select(c, c * qi, even);
            total += &*ti;
        }
        let c = c.conjugate();
        let nb = 1 + total.nbits();

        // Signed digits in {-15, ..., -1, 1, ..., 15}, least significant first
        let mut w: Vec<i8> = Vec::with_capacity(nb);
        for _ in 0..nb {
            let mut a = [0i8; 4];
            for (ai, ti) in a.iter_mut().zip(t.iter_mut()) {
                *ai = ti.signed_digit();
            }
            w.push(8 * a[0] + 4 * a[1] + 2 * a[2] + a[3]);
        }
        let top = 8 * t[0].last_bits(2) + 4 * t[1].last_bits(2) + 2 * t[2].last_bits(2)
            + t[3].last_bits(2);
        log::trace!("multi_pow4: {} signed digits", nb);

        let mut p = g[((top - 1) / 2) as usize];
        for &wi in w.iter().rev() {
            let m = wi >> 7;
            let j = (((wi ^ m) - m - 1) / 2) as usize;
            let s = [g[j], g[j].conjugate()];
            p = p.unitary_square();
            p *= s[(m & 1) as usize];
        }

        p * c
    }
}
