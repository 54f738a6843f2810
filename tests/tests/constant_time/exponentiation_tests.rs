// tests/constant_time/exponentiation_tests.rs
// Timing comparisons for the fixed-width and four-base exponentiations

use pairfield_algorithms::{BigUint, Cyclotomic};
use pairfield_tests::constant_time::{summarize, TestConfig, TimingTester};
use pairfield_tests::fixtures;
use std::hint::black_box;

#[test]
fn test_pow_fixed_constant_time() {
    let config = TestConfig::for_exponentiation();
    let mut rng = fixtures::rng(110);
    let g = fixtures::random_cyclotomic(&mut rng);

    // Sparse and dense exponents of the same declared width
    let sparse = 1u64 << 63;
    let dense = u64::MAX;

    for _ in 0..config.num_warmup {
        black_box(g.pow_fixed(sparse, 64).ok());
        black_box(g.pow_fixed(dense, 64).ok());
    }

    let tester = TimingTester::new(config.num_samples, config.num_iterations);
    let t1 = tester.measure(|| {
        black_box(black_box(&g).pow_fixed(black_box(sparse), 64).ok());
    });
    let t2 = tester.measure(|| {
        black_box(black_box(&g).pow_fixed(black_box(dense), 64).ok());
    });

    let analysis = tester
        .analyze_constant_time(
            &t1,
            &t2,
            config.mean_ratio_max,
            config.combined_score_threshold,
        )
        .unwrap_or_else(|e| panic!("Analysis error: {}", e));

    println!("{}", summarize(&analysis, "Cyclotomic::pow_fixed"));
    assert!(
        analysis.is_constant_time,
        "pow_fixed timing depends on the exponent bits"
    );
}

#[test]
fn test_multi_pow4_constant_time() {
    let config = TestConfig::for_exponentiation();
    let mut rng = fixtures::rng(111);
    let bases: [Cyclotomic; 4] = [
        fixtures::random_cyclotomic(&mut rng),
        fixtures::random_cyclotomic(&mut rng),
        fixtures::random_cyclotomic(&mut rng),
        fixtures::random_cyclotomic(&mut rng),
    ];

    // Equal bit lengths, different bit patterns
    let top = BigUint::from(1u32) << 127u32;
    let low: [BigUint; 4] = [
        top.clone(),
        top.clone(),
        top.clone(),
        top.clone(),
    ];
    let high: [BigUint; 4] = [
        fixtures::random_exponent(&mut rng, 16) | &top,
        fixtures::random_exponent(&mut rng, 16) | &top,
        fixtures::random_exponent(&mut rng, 16) | &top,
        fixtures::random_exponent(&mut rng, 16) | &top,
    ];

    for _ in 0..config.num_warmup {
        black_box(Cyclotomic::multi_pow4(&bases, &low));
        black_box(Cyclotomic::multi_pow4(&bases, &high));
    }

    let tester = TimingTester::new(config.num_samples, config.num_iterations);
    let t1 = tester.measure(|| {
        black_box(Cyclotomic::multi_pow4(black_box(&bases), black_box(&low)));
    });
    let t2 = tester.measure(|| {
        black_box(Cyclotomic::multi_pow4(black_box(&bases), black_box(&high)));
    });

    let analysis = tester
        .analyze_constant_time(
            &t1,
            &t2,
            config.mean_ratio_max,
            config.combined_score_threshold,
        )
        .unwrap_or_else(|e| panic!("Analysis error: {}", e));

    println!("{}", summarize(&analysis, "Cyclotomic::multi_pow4"));
    assert!(
        analysis.is_constant_time,
        "multi_pow4 timing depends on the exponent bits"
    );
}
