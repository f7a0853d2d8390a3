//! Approximate comparison of floats and complex numbers.

use crate::complex::ComplexNumber;
use float_cmp::{approx_eq, F64Margin};

/// Tolerances for approximate comparison.
///
/// Two values compare equal when any one of the absolute (`epsilon`),
/// relative or ulps tests passes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumMargin<T> {
    pub epsilon: T,
    pub relative: T,
    pub ulps: i64,
}

impl Default for NumMargin<f64> {
    fn default() -> Self {
        NumMargin {
            epsilon: 1e-9,
            relative: 1e-9,
            ulps: 4,
        }
    }
}

impl From<NumMargin<f64>> for F64Margin {
    fn from(margin: NumMargin<f64>) -> Self {
        F64Margin {
            epsilon: margin.epsilon,
            ulps: margin.ulps,
        }
    }
}

pub trait ApproxEq {
    type Compare;

    fn approx_eq(&self, other: &Self, margin: NumMargin<Self::Compare>) -> bool;

    /// Panic with a labelled report unless `self` is close to `exemplar`
    fn assert_approx_eq(
        &self,
        exemplar: &Self,
        margin: NumMargin<Self::Compare>,
        test: &str,
        label: &str,
    ) where
        Self: std::fmt::Debug,
    {
        assert!(
            self.approx_eq(exemplar, margin),
            " Failed test {} at {}\n  exemplar: {:?}\n      calc: {:?}",
            test,
            label,
            exemplar,
            self
        );
    }
}

impl ApproxEq for f64 {
    type Compare = f64;

    fn approx_eq(&self, other: &Self, margin: NumMargin<f64>) -> bool {
        if self == other || (self.is_nan() && other.is_nan()) {
            return true;
        }
        if self.is_infinite() || other.is_infinite() {
            return false;
        }
        let precision: F64Margin = margin.into();
        approx_eq!(f64, *self, *other, precision)
            || (self - other).abs() <= margin.relative * self.abs().max(other.abs())
    }
}

impl ApproxEq for ComplexNumber {
    type Compare = f64;

    fn approx_eq(&self, other: &Self, margin: NumMargin<f64>) -> bool {
        self.re().approx_eq(&other.re(), margin) && self.im().approx_eq(&other.im(), margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f64() {
        let margin = NumMargin::default();
        assert!(1.0f64.approx_eq(&(1.0 + 1e-12), margin));
        assert!(1e20f64.approx_eq(&(1e20 * (1.0 + 1e-12)), margin));
        assert!(!1.0f64.approx_eq(&1.1, margin));
        assert!(f64::NAN.approx_eq(&f64::NAN, margin));
        assert!(f64::INFINITY.approx_eq(&f64::INFINITY, margin));
        assert!(!f64::INFINITY.approx_eq(&f64::NEG_INFINITY, margin));
        assert!(!f64::INFINITY.approx_eq(&1e308, margin));
    }

    #[test]
    fn test_complex() {
        let margin = NumMargin::default();
        let z = ComplexNumber::new(1.0, -2.0);
        assert!(z.approx_eq(&ComplexNumber::new(1.0 + 1e-13, -2.0), margin));
        assert!(!z.approx_eq(&ComplexNumber::new(1.0, 2.0), margin));
    }

    #[test]
    #[should_panic]
    fn test_assert_approx_eq() {
        ComplexNumber::ONE.assert_approx_eq(&ComplexNumber::ZERO, NumMargin::default(), "util", "z");
    }
}
