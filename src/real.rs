//! Real-axis helpers.
//!
//! Each helper answers on the real line where the result is real and hands
//! the argument to the complex function otherwise. Delegation only goes
//! real → complex; the complex functions call back here only for arguments
//! already known to be inside the real domain.

use crate::complex::ComplexNumber;
use crate::consts::{EULER_GAMMA, LN_10};
use ibig::UBig;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

/// The result of a real function that may leave the real line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RealOrComplex {
    Real(f64),
    Complex(ComplexNumber),
}

impl RealOrComplex {
    pub fn into_complex(self) -> ComplexNumber {
        match self {
            RealOrComplex::Real(x) => ComplexNumber::from_real(x),
            RealOrComplex::Complex(z) => z,
        }
    }

    /// `Some` only for the `Real` variant
    pub fn as_real(&self) -> Option<f64> {
        match self {
            RealOrComplex::Real(x) => Some(*x),
            RealOrComplex::Complex(_) => None,
        }
    }

    pub fn is_real(&self) -> bool {
        matches!(self, RealOrComplex::Real(_))
    }
}

impl From<RealOrComplex> for ComplexNumber {
    fn from(value: RealOrComplex) -> Self {
        value.into_complex()
    }
}

/// `floor(x) == x`. Infinities count as integers.
pub fn is_integer(x: f64) -> bool {
    x.floor() == x
}

/// -1, 0 or 1; NaN for NaN
pub fn sign(x: f64) -> f64 {
    if x.is_nan() {
        f64::NAN
    } else if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

// --------------------------
// logarithms and roots
// --------------------------

/// Natural logarithm. Negative arguments go to the complex logarithm.
pub fn ln(x: f64) -> RealOrComplex {
    if x.is_nan() {
        RealOrComplex::Real(f64::NAN)
    } else if x == f64::INFINITY {
        RealOrComplex::Real(f64::INFINITY)
    } else if x == f64::NEG_INFINITY {
        RealOrComplex::Complex(ComplexNumber::new(f64::INFINITY, PI))
    } else if x == 0.0 {
        RealOrComplex::Real(f64::NEG_INFINITY)
    } else if x < 0.0 {
        RealOrComplex::Complex(ComplexNumber::from_real(x).ln())
    } else {
        RealOrComplex::Real(x.ln())
    }
}

/// Base-10 logarithm. Negative arguments go to the complex logarithm.
pub fn log10(x: f64) -> RealOrComplex {
    if x.is_nan() {
        RealOrComplex::Real(f64::NAN)
    } else if x == f64::INFINITY {
        RealOrComplex::Real(f64::INFINITY)
    } else if x == f64::NEG_INFINITY {
        RealOrComplex::Complex(ComplexNumber::new(f64::INFINITY, PI / LN_10))
    } else if x == 0.0 {
        RealOrComplex::Real(f64::NEG_INFINITY)
    } else if x < 0.0 {
        RealOrComplex::Complex(ComplexNumber::from_real(x).log10())
    } else {
        RealOrComplex::Real(x.log10())
    }
}

pub fn sqrt(x: f64) -> RealOrComplex {
    if x.is_nan() || x >= 0.0 {
        RealOrComplex::Real(x.sqrt())
    } else {
        RealOrComplex::Complex(ComplexNumber::from_real(x).sqrt())
    }
}

// --------------------------
// inverse circular
// --------------------------

pub fn asin(x: f64) -> RealOrComplex {
    if x.is_nan() {
        return RealOrComplex::Real(f64::NAN);
    }
    if x == 1.0 {
        RealOrComplex::Real(FRAC_PI_2)
    } else if x == -1.0 {
        RealOrComplex::Real(-FRAC_PI_2)
    } else if x == 0.0 {
        RealOrComplex::Real(0.0)
    } else if x.abs() < 1.0 {
        RealOrComplex::Real(x.asin())
    } else {
        RealOrComplex::Complex(ComplexNumber::from_real(x).asin())
    }
}

pub fn acos(x: f64) -> RealOrComplex {
    if x.is_nan() {
        return RealOrComplex::Real(f64::NAN);
    }
    if x == -1.0 {
        RealOrComplex::Real(PI)
    } else if x == 0.0 {
        RealOrComplex::Real(FRAC_PI_2)
    } else if x == 1.0 {
        RealOrComplex::Real(0.0)
    } else if x.abs() < 1.0 {
        RealOrComplex::Real(x.acos())
    } else {
        RealOrComplex::Complex(ComplexNumber::from_real(x).acos())
    }
}

pub fn atan(x: f64) -> f64 {
    if x == 1.0 {
        FRAC_PI_4
    } else if x == -1.0 {
        -FRAC_PI_4
    } else if x == 0.0 {
        0.0
    } else if x == f64::INFINITY {
        FRAC_PI_2
    } else if x == f64::NEG_INFINITY {
        -FRAC_PI_2
    } else {
        x.atan()
    }
}

pub fn acot(x: f64) -> f64 {
    if x.is_infinite() {
        0.0
    } else if x == 0.0 {
        FRAC_PI_2
    } else if x == 1.0 {
        FRAC_PI_4
    } else if x == -1.0 {
        -FRAC_PI_4
    } else {
        (1.0 / x).atan()
    }
}

/// Real inverse secant on `|x| ≥ 1`; `asec(0) = +∞`
pub fn asec(x: f64) -> RealOrComplex {
    if x.is_nan() {
        return RealOrComplex::Real(f64::NAN);
    }
    if x.is_infinite() {
        RealOrComplex::Real(FRAC_PI_2)
    } else if x == -1.0 {
        RealOrComplex::Real(PI)
    } else if x == 1.0 {
        RealOrComplex::Real(0.0)
    } else if x == 0.0 {
        RealOrComplex::Real(f64::INFINITY)
    } else if x.abs() > 1.0 {
        RealOrComplex::Real((1.0 / x).acos())
    } else {
        RealOrComplex::Complex(ComplexNumber::from_real(x).asec())
    }
}

/// Real inverse cosecant on `|x| ≥ 1`; `acosec(0) = +∞`
pub fn acosec(x: f64) -> RealOrComplex {
    if x.is_nan() {
        return RealOrComplex::Real(f64::NAN);
    }
    if x.is_infinite() {
        RealOrComplex::Real(0.0)
    } else if x == -1.0 {
        RealOrComplex::Real(-FRAC_PI_2)
    } else if x == 1.0 {
        RealOrComplex::Real(FRAC_PI_2)
    } else if x == 0.0 {
        RealOrComplex::Real(f64::INFINITY)
    } else if x.abs() > 1.0 {
        RealOrComplex::Real((1.0 / x).asin())
    } else {
        RealOrComplex::Complex(ComplexNumber::from_real(x).acosec())
    }
}

// --------------------------
// inverse hyperbolic
// --------------------------

/// Real inverse hyperbolic secant on `(0, 1]`
pub fn asech(x: f64) -> RealOrComplex {
    if x.is_nan() {
        return RealOrComplex::Real(f64::NAN);
    }
    if x == 0.0 {
        RealOrComplex::Real(f64::INFINITY)
    } else if x == 1.0 {
        RealOrComplex::Real(0.0)
    } else if x > 0.0 && x < 1.0 {
        let r = 1.0 / x;
        RealOrComplex::Real((r + (r + 1.0).sqrt() * (r - 1.0).sqrt()).ln())
    } else {
        RealOrComplex::Complex(ComplexNumber::from_real(x).asech())
    }
}

pub fn acosech(x: f64) -> f64 {
    if x.is_infinite() {
        0.0
    } else if x == 0.0 {
        f64::INFINITY
    } else {
        let r = 1.0 / x;
        (r + (r * r + 1.0).sqrt()).ln()
    }
}

// --------------------------
// factorial and gamma
// --------------------------

/// `x!` on the real line.
///
/// Non-negative integers are multiplied out exactly; other finite values go
/// through [`gamma`]. Negative integers are poles (`+∞`).
pub fn fact(x: f64) -> f64 {
    if x.is_nan() || x == f64::NEG_INFINITY {
        return f64::NAN;
    }
    if x == f64::INFINITY {
        return f64::INFINITY;
    }
    if is_integer(x) {
        if x >= 0.0 {
            return fact_exact(x);
        }
        return f64::INFINITY;
    }
    gamma(1.0 + x)
}

/// `n!` accumulated in a big integer and rounded once. Beyond 170! the result
/// overflows.
fn fact_exact(n: f64) -> f64 {
    if n > 170.0 {
        return f64::INFINITY;
    }
    let n = n as u64;
    let product = (2..=n).fold(UBig::from(1u8), |acc, k| acc * UBig::from(k));
    product.to_f64()
}

/// Gamma function on the real line (Cephes).
///
/// Recurrence onto [2, 3] and a rational approximation there, Stirling's
/// series for `|x| > 33` with the reflection formula for large negative `x`.
/// Relative error is around 1e-15 on (-170, 171.6).
pub fn gamma(x: f64) -> f64 {
    let q = x.abs();
    if q > 33.0 {
        if x >= 0.0 {
            return gamma_stirling(x);
        }
        let mut p = q.floor();
        let sgngam = if (p as i64) % 2 == 0 { -1.0 } else { 1.0 };
        let mut z = q - p;
        if z > 0.5 {
            p += 1.0;
            z = q - p;
        }
        let z = (q * (PI * z).sin()).abs();
        return sgngam * PI / (z * gamma_stirling(q));
    }

    let mut x = x;
    let mut z = 1.0;
    while x >= 3.0 {
        x -= 1.0;
        z *= x;
    }
    while x < 0.0 {
        if x > -1e-9 {
            return z / ((1.0 + EULER_GAMMA * x) * x);
        }
        z /= x;
        x += 1.0;
    }
    while x < 2.0 {
        if x < 1e-9 {
            return z / ((1.0 + EULER_GAMMA * x) * x);
        }
        z /= x;
        x += 1.0;
    }
    if x == 2.0 {
        return z;
    }

    const P: [f64; 7] = [
        1.601_195_224_767_518_614_07e-4,
        1.191_351_470_065_863_849_13e-3,
        1.042_137_975_617_615_699_35e-2,
        4.763_678_004_571_372_314_64e-2,
        2.074_482_276_484_359_751_50e-1,
        4.942_148_268_014_971_007_53e-1,
        9.999_999_999_999_999_967_96e-1,
    ];
    const Q: [f64; 8] = [
        -2.315_818_733_241_201_298_19e-5,
        5.396_055_804_933_033_978_42e-4,
        -4.456_419_138_517_972_404_94e-3,
        1.181_397_852_220_604_355_52e-2,
        3.582_363_986_054_986_533_73e-2,
        -2.345_917_957_182_433_485_68e-1,
        7.143_049_170_302_730_740_85e-2,
        1.000_000_000_000_000_003_20,
    ];
    let x = x - 2.0;
    let pp = P.iter().fold(0.0, |acc, c| c + x * acc);
    let qq = Q.iter().fold(0.0, |acc, c| c + x * acc);
    z * pp / qq
}

/// Stirling's series, valid for `x > 33`
fn gamma_stirling(x: f64) -> f64 {
    const STIR: [f64; 5] = [
        7.873_113_957_930_936_283_97e-4,
        -2.295_499_616_133_781_263_80e-4,
        -2.681_326_178_057_811_328_25e-3,
        3.472_222_216_054_586_673_10e-3,
        8.333_333_333_334_822_571_26e-2,
    ];
    let w = 1.0 / x;
    let stir = STIR.iter().fold(0.0, |acc, c| c + w * acc);
    let w = 1.0 + w * stir;
    let y = x.exp();
    let y = if x > 143.01608 {
        // split the power so x^(x - 0.5) does not overflow before the division
        let v = x.powf(0.5 * x - 0.25);
        v * (v / y)
    } else {
        x.powf(x - 0.5) / y
    };
    2.506_628_274_631_000_502_42 * y * w
}
