//! Constants for the FP256BN Barreto-Naehrig curve
//!
//! p = 36u^4 + 36u^3 + 24u^2 + 6u + 1 and r = 36u^4 + 36u^3 + 18u^2 + 6u + 1
//! with u = -0x6882_f5c0_30b0_a801.

/// Size of a base field element in bytes (big-endian encoding)
pub const FP256BN_FIELD_SIZE: usize = 32;

/// Size of an Fp2 element in bytes
pub const FP256BN_FP2_SIZE: usize = 2 * FP256BN_FIELD_SIZE;

/// Size of an Fp4 element in bytes
pub const FP256BN_FP4_SIZE: usize = 4 * FP256BN_FIELD_SIZE;

/// Size of an Fp12 element in bytes
pub const FP256BN_FP12_SIZE: usize = 12 * FP256BN_FIELD_SIZE;

/// Field modulus p
pub const FP256BN_MODULUS: [u64; 4] = [
    0xd329_2ddb_aed3_3013,
    0x0cdc_65fb_1298_0a82,
    0x46e5_f25e_ee71_a49f,
    0xffff_ffff_fffc_f0cd,
];

/// p - 2, the Fermat inversion exponent
pub const FP256BN_MODULUS_MINUS_TWO: [u64; 4] = [
    0xd329_2ddb_aed3_3011,
    0x0cdc_65fb_1298_0a82,
    0x46e5_f25e_ee71_a49f,
    0xffff_ffff_fffc_f0cd,
];

/// Montgomery parameter INV = -(p^{-1} mod 2^64) mod 2^64
pub const FP256BN_MONTGOMERY_INV: u64 = 0xad6c_964e_0537_e5e5;

/// Montgomery R = 2^256 mod p
pub const FP256BN_MONTGOMERY_R: [u64; 4] = [
    0x2cd6_d224_512c_cfed,
    0xf323_9a04_ed67_f57d,
    0xb91a_0da1_118e_5b60,
    0x0000_0000_0003_0f32,
];

/// Montgomery R^2 = 2^512 mod p
pub const FP256BN_MONTGOMERY_R2: [u64; 4] = [
    0xfac8_c610_1092_b98f,
    0xdb90_d49c_d7f9_1154,
    0x4f32_5fc7_32bf_3141,
    0x4de5_78ea_0e56_a005,
];

/// Montgomery R^3 = 2^768 mod p
pub const FP256BN_MONTGOMERY_R3: [u64; 4] = [
    0x83c6_6e0a_9a16_d9d8,
    0x1c36_f059_6611_aefb,
    0x97f1_b5fa_dfa7_1510,
    0x3a7e_67c1_2053_b221,
];

/// Real part of the Frobenius constant (1 + i)^((p - 1) / 6)
pub const FP256BN_FROBENIUS_FRA: [u64; 4] = [
    0x7476_0328_af94_3106,
    0x39a1_7151_1e3a_b28f,
    0x2d1a_6e8d_db08_67cf,
    0x3d61_7662_ca78_6f35,
];

/// Imaginary part of the Frobenius constant (1 + i)^((p - 1) / 6)
pub const FP256BN_FROBENIUS_FRB: [u64; 4] = [
    0x5eb3_2ab2_ff3e_ff0d,
    0xd33a_f4a9_f45d_57f3,
    0x19cb_83d1_1369_3ccf,
    0xc29e_899d_3584_8198,
];

/// Absolute value of the BN parameter u
pub const FP256BN_BNX: u64 = 0x6882_f5c0_30b0_a801;

/// Sign of the BN parameter u
pub const FP256BN_BNX_IS_NEGATIVE: bool = true;

/// Prime order r of the pairing groups
pub const FP256BN_GROUP_ORDER: [u64; 4] = [
    0xf62d_536c_d10b_500d,
    0x0cdc_65fb_1299_921a,
    0x46e5_f25e_ee71_a49e,
    0xffff_ffff_fffc_f0cd,
];
