// tests/constant_time/field_tests.rs
// Timing comparisons for Fp12 comparison and selection

use pairfield_algorithms::Fp12;
use pairfield_tests::constant_time::{summarize, TestConfig, TimingTester};
use pairfield_tests::fixtures;
use std::hint::black_box;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

#[test]
fn test_fp12_ct_eq_constant_time() {
    let config = TestConfig::for_field_op();
    let mut rng = fixtures::rng(100);
    let x = fixtures::random_fp12(&mut rng);
    let same = x;
    // Differs only in the last coefficient
    let mut bytes = x.to_bytes();
    bytes[383] ^= 1;
    let near = Fp12::from_bytes(&bytes).unwrap_or(x);

    for _ in 0..config.num_warmup {
        black_box(x.ct_eq(&same));
        black_box(x.ct_eq(&near));
    }

    let tester = TimingTester::new(config.num_samples, config.num_iterations);
    let t1 = tester.measure(|| {
        black_box(black_box(&x).ct_eq(black_box(&same)));
    });
    let t2 = tester.measure(|| {
        black_box(black_box(&x).ct_eq(black_box(&near)));
    });

    let analysis = tester
        .analyze_constant_time(
            &t1,
            &t2,
            config.mean_ratio_max,
            config.combined_score_threshold,
        )
        .unwrap_or_else(|e| panic!("Analysis error: {}", e));

    println!("{}", summarize(&analysis, "Fp12::ct_eq"));
    assert!(analysis.is_constant_time, "Fp12::ct_eq shows timing variation");
}

#[test]
fn test_fp12_conditional_select_constant_time() {
    let config = TestConfig::for_field_op();
    let mut rng = fixtures::rng(101);
    let a = fixtures::random_fp12(&mut rng);
    let b = fixtures::random_fp12(&mut rng);

    for _ in 0..config.num_warmup {
        black_box(Fp12::conditional_select(&a, &b, Choice::from(0)));
        black_box(Fp12::conditional_select(&a, &b, Choice::from(1)));
    }

    let tester = TimingTester::new(config.num_samples, config.num_iterations);
    let t1 = tester.measure(|| {
        black_box(Fp12::conditional_select(
            black_box(&a),
            black_box(&b),
            black_box(Choice::from(0)),
        ));
    });
    let t2 = tester.measure(|| {
        black_box(Fp12::conditional_select(
            black_box(&a),
            black_box(&b),
            black_box(Choice::from(1)),
        ));
    });

    let analysis = tester
        .analyze_constant_time(
            &t1,
            &t2,
            config.mean_ratio_max,
            config.combined_score_threshold,
        )
        .unwrap_or_else(|e| panic!("Analysis error: {}", e));

    println!("{}", summarize(&analysis, "Fp12::conditional_select"));
    assert!(
        analysis.is_constant_time,
        "Fp12::conditional_select shows timing variation"
    );
}

#[test]
fn test_fp12_mul_operand_independence() {
    let config = TestConfig::for_field_op().with_samples_and_iterations(20, 100);
    let mut rng = fixtures::rng(102);
    let a = fixtures::random_fp12(&mut rng);
    let b = fixtures::random_fp12(&mut rng);
    let one = Fp12::one();

    for _ in 0..config.num_warmup {
        black_box(a * b);
        black_box(a * one);
    }

    let tester = TimingTester::new(config.num_samples, config.num_iterations);
    let t1 = tester.measure(|| {
        black_box(black_box(&a).mul(black_box(&b)));
    });
    let t2 = tester.measure(|| {
        black_box(black_box(&a).mul(black_box(&one)));
    });

    let analysis = tester
        .analyze_constant_time(
            &t1,
            &t2,
            config.mean_ratio_max,
            config.combined_score_threshold,
        )
        .unwrap_or_else(|e| panic!("Analysis error: {}", e));

    println!("{}", summarize(&analysis, "Fp12::mul"));
    assert!(analysis.is_constant_time, "Fp12::mul depends on its operand");
}
