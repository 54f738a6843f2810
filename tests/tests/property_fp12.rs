//! Property-based tests for the Fp12 tower

use pairfield_algorithms::{BigUint, Cyclotomic, Error, Fp12, Fp2, Fp4, SparseFp12};
use pairfield_params::pairing::fp256bn::FP256BN_FP12_SIZE;
use pairfield_tests::fixtures;
use proptest::prelude::*;

/// Random field element drawn from a proptest-chosen seed
fn fp12() -> impl Strategy<Value = Fp12> {
    any::<u64>().prop_map(|seed| fixtures::random_fp12(&mut fixtures::rng(seed)))
}

fn cyclotomic() -> impl Strategy<Value = Cyclotomic> {
    any::<u64>().prop_map(|seed| fixtures::random_cyclotomic(&mut fixtures::rng(seed)))
}

/// 384 bytes whose 32-byte coefficients are all below p
fn canonical_encoding() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<[u8; 32]>(), 12).prop_map(|chunks| {
        chunks
            .into_iter()
            .flat_map(|mut c| {
                // p starts with 0xff..fc, so a top byte below 0xff is in range
                c[0] &= 0x7f;
                c
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn mul_is_commutative(a in fp12(), b in fp12()) {
        prop_assert_eq!(a * b, b * a);
    }

    #[test]
    fn mul_is_associative(a in fp12(), b in fp12(), c in fp12()) {
        prop_assert_eq!((a * b) * c, a * (b * c));
    }

    #[test]
    fn square_matches_mul(a in fp12()) {
        prop_assert_eq!(a.square(), a * a);
    }

    #[test]
    fn invert_is_two_sided(a in fp12()) {
        let inv = a.invert().unwrap();
        prop_assert_eq!(a * inv, Fp12::one());
        prop_assert_eq!(inv * a, Fp12::one());
    }

    #[test]
    fn frobenius_is_multiplicative(a in fp12(), b in fp12()) {
        let f = Fp2::frobenius_constant();
        prop_assert_eq!((a * b).frobenius(&f), a.frobenius(&f) * b.frobenius(&f));
    }

    #[test]
    fn special_mul_matches_dense(a in fp12(), seed in any::<u64>()) {
        let mut rng = fixtures::rng(seed);
        let s = SparseFp12::new(Fp4::random(&mut rng), Fp2::random(&mut rng));
        prop_assert_eq!(a.special_mul(&s), a * Fp12::from(s));
    }

    #[test]
    fn canonical_bytes_round_trip(bytes in canonical_encoding()) {
        let x = Fp12::from_bytes(&bytes).unwrap();
        prop_assert_eq!(x.to_bytes().to_vec(), bytes);
    }

    #[test]
    fn arbitrary_bytes_decode_or_reject(bytes in prop::collection::vec(any::<u8>(), 0..=400)) {
        match Fp12::from_bytes(&bytes) {
            Ok(x) => prop_assert_eq!(&x.to_bytes()[..], &bytes[..FP256BN_FP12_SIZE]),
            Err(Error::BufferTooShort { .. }) => prop_assert!(bytes.len() < FP256BN_FP12_SIZE),
            Err(Error::NonCanonical { .. }) => prop_assert!(bytes.len() >= FP256BN_FP12_SIZE),
            Err(e) => prop_assert!(false, "unexpected error {:?}", e),
        }
    }

    #[test]
    fn unitary_square_on_subgroup(c in cyclotomic()) {
        let f = c.into_fp12();
        prop_assert_eq!(f.unitary_square(), f.square());
        prop_assert_eq!(f * f.conjugate(), Fp12::one());
    }

    #[test]
    fn pow_fixed_matches_pow(c in cyclotomic(), e in any::<u64>(), bits in 0u32..=64) {
        let masked = if bits == 64 { e } else { e & ((1u64 << bits) - 1) };
        prop_assert_eq!(c.pow_fixed(e, bits).unwrap(), c.pow(&BigUint::from(masked)));
    }

    #[test]
    fn pow_is_multiplicative_in_exponent(c in cyclotomic(), a in any::<u32>(), b in any::<u32>()) {
        let (a, b) = (BigUint::from(a), BigUint::from(b));
        prop_assert_eq!(c.pow(&a).pow(&b), c.pow(&(&a * &b)));
    }

    #[test]
    fn multi_pow4_matches_product(
        seed in any::<u64>(),
        e in any::<[u64; 4]>()
    ) {
        let mut rng = fixtures::rng(seed);
        let bases = [
            fixtures::random_cyclotomic(&mut rng),
            fixtures::random_cyclotomic(&mut rng),
            fixtures::random_cyclotomic(&mut rng),
            fixtures::random_cyclotomic(&mut rng),
        ];
        let exponents = e.map(BigUint::from);
        prop_assert_eq!(
            Cyclotomic::multi_pow4(&bases, &exponents),
            fixtures::product_of_powers(&bases, &exponents)
        );
    }
}
