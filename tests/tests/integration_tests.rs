//! End-to-end checks of the Fp12 tower through the public API

use pairfield_algorithms::{BigUint, Cyclotomic, Error, Fp12, Fp2};
use pairfield_params::pairing::fp256bn::{FP256BN_FP12_SIZE, FP256BN_GROUP_ORDER, FP256BN_MODULUS};
use pairfield_tests::fixtures;

fn modulus() -> BigUint {
    fixtures::limbs_to_biguint(&FP256BN_MODULUS)
}

#[test]
fn test_easy_part_lands_in_order_phi12_subgroup() {
    // The easy part leaves an element of order dividing p^4 - p^2 + 1
    let p = modulus();
    let p2 = &p * &p;
    let phi12 = &p2 * &p2 - &p2 + BigUint::from(1u32);

    let mut rng = fixtures::rng(1);
    for _ in 0..3 {
        let c = fixtures::random_cyclotomic(&mut rng);
        assert!(bool::from(c.pow(&phi12).is_one()));
    }
}

#[test]
fn test_easy_part_matches_explicit_exponent() {
    // f^((p^6 - 1)(p^2 + 1)) computed the slow way
    let p = modulus();
    let p2 = &p * &p;
    let p6 = &p2 * &p2 * &p2;
    let e = (p6 - BigUint::from(1u32)) * (&p2 + BigUint::from(1u32));

    let mut rng = fixtures::rng(2);
    let f = fixtures::random_fp12(&mut rng);
    let c = Cyclotomic::from_easy_part(&f).unwrap();
    assert_eq!(c.into_fp12(), f.pow_vartime(&e));
}

#[test]
fn test_pairing_product_style_check() {
    // e(P, Q)^a · e(P, Q)^-a · e(R, S)^b · e(R, S)^-b == 1, with the
    // pairing values stood in for by random cyclotomic elements
    let mut rng = fixtures::rng(3);
    let g = fixtures::random_cyclotomic(&mut rng);
    let h = fixtures::random_cyclotomic(&mut rng);
    let a = fixtures::random_exponent(&mut rng, 32);
    let b = fixtures::random_exponent(&mut rng, 32);

    let bases = [g, g.conjugate(), h, h.conjugate()];
    let exponents = [a.clone(), a, b.clone(), b];
    assert!(bool::from(Cyclotomic::multi_pow4(&bases, &exponents).is_one()));

    // A tampered exponent breaks the product
    let tampered = [
        exponents[0].clone() + BigUint::from(1u32),
        exponents[1].clone(),
        exponents[2].clone(),
        exponents[3].clone(),
    ];
    assert!(!bool::from(Cyclotomic::multi_pow4(&bases, &tampered).is_one()));
}

#[test]
fn test_multi_pow4_full_width_exponents() {
    let r = fixtures::limbs_to_biguint(&FP256BN_GROUP_ORDER);
    let mut rng = fixtures::rng(4);
    let bases = [
        fixtures::random_cyclotomic(&mut rng),
        fixtures::random_cyclotomic(&mut rng),
        fixtures::random_cyclotomic(&mut rng),
        fixtures::random_cyclotomic(&mut rng),
    ];
    let exponents = [
        fixtures::random_exponent(&mut rng, 32) % &r,
        fixtures::random_exponent(&mut rng, 32) % &r,
        fixtures::random_exponent(&mut rng, 32) % &r,
        fixtures::random_exponent(&mut rng, 32) % &r,
    ];
    assert_eq!(
        Cyclotomic::multi_pow4(&bases, &exponents),
        fixtures::product_of_powers(&bases, &exponents)
    );
}

#[test]
fn test_frobenius_agrees_with_pow_p() {
    let p = modulus();
    let mut rng = fixtures::rng(5);
    let x = fixtures::random_fp12(&mut rng);
    let f = Fp2::frobenius_constant();

    assert_eq!(x.frobenius(&f), x.pow_vartime(&p));
    assert_eq!(x.frobenius_map(3), x.pow_vartime(&(&p * &p * &p)));
}

#[test]
fn test_serialized_element_survives_transport() {
    let mut rng = fixtures::rng(6);
    let c = fixtures::random_cyclotomic(&mut rng);

    let hex = hex::encode(c.to_bytes());
    assert_eq!(hex.len(), 2 * FP256BN_FP12_SIZE);

    let bytes = hex::decode(&hex).unwrap();
    let back = Cyclotomic::from_bytes(&bytes).unwrap();
    assert_eq!(back, c);
    assert_eq!(Fp12::from_bytes(&bytes).unwrap(), c.into_fp12());
}

#[test]
fn test_errors_convert_to_api_errors() {
    let err: Error = Fp12::zero().invert().unwrap_err();
    let api: pairfield_api::Error = err.into();
    assert!(matches!(api, pairfield_api::Error::InvalidOperand { .. }));

    let err = Fp12::from_bytes(&[0u8; 10]).unwrap_err();
    let api: pairfield_api::Error = err.into();
    assert!(matches!(api, pairfield_api::Error::BufferTooShort { .. }));
}
