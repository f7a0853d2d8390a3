//! Numeric constants shared across the complex and real function families.

use std::f64::consts::PI;

// =========================================================================
// Tolerances
// =========================================================================

/// Threshold below which `pow` treats a base or exponent as zero.
pub const ACCURACY: f64 = 1e-10;

/// Largest `|Im|` for which `sin`/`cosh` of the imaginary part stay finite.
pub const MAX_EXP_ARG: f64 = 709.0;

/// Upper bound on the number of terms of the Weierstrass series in `ln_gamma`.
pub const LN_GAMMA_MAX_TERMS: usize = 10_000;

// =========================================================================
// Mathematical constants
// =========================================================================

/// sqrt(1/2)
pub const SQRT_1_OVER_2: f64 = 0.707_106_781_186_547_524_400_844_362_104_849_039_284_835_937_688_45;
/// 2π
pub const PI2: f64 = 6.283_185_307_179_586_476_925_286_766_559_005_768_394_338_798_750_2;
/// ln(10)
pub const LN_10: f64 = 2.302_585_092_994_045_684_017_991_454_684_364_207_601_101_488_628_8;
/// ln(2)
pub const LN_2: f64 = 0.693_147_180_559_945_309_417_232_121_458_176_568_075_500_134_360_255_25;
/// Euler-Mascheroni constant γ
pub const EULER_GAMMA: f64 = 0.577_215_664_901_532_860_605;
/// sqrt(5)
pub const SQRT_5: f64 = 2.236_067_977_499_789_696_409_173_668_731_276_235_440_618_359_611_5;

// =========================================================================
// Angle conversions
// =========================================================================

/// Degrees per radian
pub const RAD_TO_DEG: f64 = 180.0 / PI;
/// Radians per degree
pub const DEG_TO_RAD: f64 = PI / 180.0;
/// Grads per radian
pub const RAD_TO_GRAD: f64 = 200.0 / PI;

// =========================================================================
// Atanh safe band
// =========================================================================

/// Below this `alpha` the real part of atanh uses the log1p difference.
pub const ATANH_CROSSOVER: f64 = 0.3;

/// sqrt(1.79769e308) / 2
pub fn atanh_safe_upper() -> f64 {
    1.79769e308_f64.sqrt() / 2.0
}

/// sqrt(2.2250738585072014e-308) * 2
pub fn atanh_safe_lower() -> f64 {
    2.2250738585072014e-308_f64.sqrt() * 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consts() {
        assert!((SQRT_1_OVER_2 * SQRT_1_OVER_2 - 0.5).abs() < 1e-15);
        assert_eq!(PI2, 2.0 * PI);
        assert_eq!(LN_10, std::f64::consts::LN_10);
        assert_eq!(LN_2, std::f64::consts::LN_2);
        assert!((SQRT_5 - 5f64.sqrt()).abs() < 1e-15);
        assert!((RAD_TO_DEG * DEG_TO_RAD - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_atanh_band() {
        assert!(atanh_safe_upper() > 6.7e153);
        assert!(atanh_safe_upper() < 6.8e153);
        assert!(atanh_safe_lower() > 2.98e-154);
        assert!(atanh_safe_lower() < 2.99e-154);
    }
}
