//! Numerically careful building blocks used by every other family.

use super::ComplexNumber;
use crate::consts::{PI2, SQRT_1_OVER_2};

/// `sqrt(a² + b²)` without intermediate overflow or underflow.
///
/// The larger operand is factored out: `|a|·sqrt(1 + (b/a)²)`. A zero `b`
/// paired with a non-larger `a` means both are zero.
pub fn stable_hypot(a: f64, b: f64) -> f64 {
    if a.is_infinite() || b.is_infinite() {
        return f64::INFINITY;
    }
    if a.abs() > b.abs() {
        let r = b / a;
        return a.abs() * (1.0 + r * r).sqrt();
    }
    if b != 0.0 {
        let r = a / b;
        return b.abs() * (1.0 + r * r).sqrt();
    }
    0.0
}

impl ComplexNumber {
    /// `z²` as `((x - y)(x + y), 2xy)`.
    pub fn square(&self) -> ComplexNumber {
        ComplexNumber::new((self.re - self.im) * (self.re + self.im), 2.0 * self.re * self.im)
    }

    /// Principal square root.
    ///
    /// The scale factor is taken from the larger of `|re|` and `|im|`, so
    /// neither squaring nor the inner square root can overflow.
    pub fn sqrt(&self) -> ComplexNumber {
        if self.is_real_non_negative() {
            return ComplexNumber::new(self.re.sqrt(), 0.0);
        }
        let abs_re = self.re.abs();
        let abs_im = self.im.abs();
        let w = if abs_re >= abs_im {
            let ratio = self.im / self.re;
            abs_re.sqrt() * (0.5 * (1.0 + (1.0 + ratio * ratio).sqrt())).sqrt()
        } else {
            let ratio = self.re / self.im;
            abs_im.sqrt() * (0.5 * (ratio.abs() + (1.0 + ratio * ratio).sqrt())).sqrt()
        };
        if self.re >= 0.0 {
            ComplexNumber::new(w, self.im / (2.0 * w))
        } else if self.im >= 0.0 {
            ComplexNumber::new(abs_im / (2.0 * w), w)
        } else {
            ComplexNumber::new(abs_im / (2.0 * w), -w)
        }
    }

    /// The principal square root and its negation
    pub fn square_roots(&self) -> (ComplexNumber, ComplexNumber) {
        let principal = self.sqrt();
        (principal, -principal)
    }

    /// The three cube roots, principal first, the others at ±2π/3 from it
    pub fn cubic_roots(&self) -> (ComplexNumber, ComplexNumber, ComplexNumber) {
        let r = self.magnitude.powf(1.0 / 3.0);
        let theta = self.phase / 3.0;
        let shift = PI2 / 3.0;
        (
            ComplexNumber::from_polar(r, theta),
            ComplexNumber::from_polar(r, theta + shift),
            ComplexNumber::from_polar(r, theta - shift),
        )
    }

    /// Projection onto the unit circle, `exp(i·arg z)`.
    ///
    /// Doubly infinite inputs land on the matching diagonal.
    pub fn sign(&self) -> ComplexNumber {
        if self.re.is_infinite() && self.im.is_infinite() {
            // each component keeps its own sign, in every quadrant
            return ComplexNumber::new(
                SQRT_1_OVER_2.copysign(self.re),
                SQRT_1_OVER_2.copysign(self.im),
            );
        }
        let modulus = stable_hypot(self.re, self.im);
        if modulus == 0.0 {
            return ComplexNumber::ZERO;
        }
        ComplexNumber::new(self.re / modulus, self.im / modulus)
    }

    /// `re² + im²`
    pub fn magnitude_squared(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Squared magnitude, the field norm
    pub fn norm(&self) -> f64 {
        self.magnitude_squared()
    }

    /// Squared magnitude of `self - other`
    pub fn norm_of_difference(&self, other: &ComplexNumber) -> f64 {
        (*self - *other).magnitude_squared()
    }

    // --------------------------
    // predicates
    // --------------------------

    pub fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }

    pub fn is_one(&self) -> bool {
        self.re == 1.0 && self.im == 0.0
    }

    pub fn is_imaginary_one(&self) -> bool {
        self.re == 0.0 && self.im == 1.0
    }

    /// Either part is NaN
    pub fn is_nan(&self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    /// Either part is infinite
    pub fn is_infinite(&self) -> bool {
        self.re.is_infinite() || self.im.is_infinite()
    }

    /// Zero imaginary part
    pub fn is_real(&self) -> bool {
        self.im == 0.0
    }

    /// Same as [`ComplexNumber::is_real`]
    pub fn is_true_real(&self) -> bool {
        self.is_real()
    }

    pub fn is_real_non_negative(&self) -> bool {
        self.im == 0.0 && self.re >= 0.0
    }
}

#[cfg(test)]
mod kernel_tests {
    use super::*;
    use crate::util::{ApproxEq, NumMargin};

    const MARGIN: NumMargin<f64> = NumMargin {
        epsilon: 1e-12,
        relative: 1e-12,
        ulps: 10,
    };

    #[test]
    fn test_stable_hypot() {
        assert_eq!(stable_hypot(3.0, 4.0), 5.0);
        assert_eq!(stable_hypot(-4.0, 3.0), 5.0);
        assert_eq!(stable_hypot(0.0, 0.0), 0.0);
        assert_eq!(stable_hypot(0.0, -2.0), 2.0);

        let h = stable_hypot(1e300, 1e300);
        assert!(h.is_finite());
        h.assert_approx_eq(&(2f64.sqrt() * 1e300), MARGIN, "stable_hypot()", "large");

        let h = stable_hypot(1e-300, 1e-300);
        h.assert_approx_eq(&(2f64.sqrt() * 1e-300), MARGIN, "stable_hypot()", "small");

        assert_eq!(stable_hypot(f64::INFINITY, 1.0), f64::INFINITY);
        assert_eq!(stable_hypot(f64::NEG_INFINITY, f64::INFINITY), f64::INFINITY);
        assert!(stable_hypot(f64::NAN, 1.0).is_nan());
    }

    #[test]
    fn test_square() {
        let z = ComplexNumber::new(3.0, -2.0);
        assert_eq!(z.square(), ComplexNumber::new(5.0, -12.0));
        z.square().assert_approx_eq(&(z * z), MARGIN, "square()", "z");
    }

    #[test]
    fn test_sqrt() {
        assert_eq!(ComplexNumber::new(4.0, 0.0).sqrt(), ComplexNumber::new(2.0, 0.0));
        assert_eq!(ComplexNumber::new(-1.0, 0.0).sqrt(), ComplexNumber::new(0.0, 1.0));
        assert_eq!(ComplexNumber::new(-4.0, 0.0).sqrt(), ComplexNumber::new(0.0, 2.0));
        ComplexNumber::new(0.0, 2.0).sqrt().assert_approx_eq(
            &ComplexNumber::new(1.0, 1.0),
            MARGIN,
            "sqrt()",
            "2i",
        );
        ComplexNumber::new(0.0, -2.0).sqrt().assert_approx_eq(
            &ComplexNumber::new(1.0, -1.0),
            MARGIN,
            "sqrt()",
            "-2i",
        );

        for (re, im) in [
            (1.2, -4.1),
            (3.4, 2.3),
            (-5.0, 0.5),
            (-0.25, -7.0),
            (1e200, 1e200),
            (-1e-200, 3e-200),
        ] {
            let z = ComplexNumber::new(re, im);
            let w = z.sqrt();
            assert!(w.re() >= 0.0, "principal branch for {:?}", z);
            w.square().assert_approx_eq(&z, MARGIN, "sqrt()", "square");
        }
    }

    #[test]
    fn test_square_roots() {
        let z = ComplexNumber::new(-3.0, 4.0);
        let (a, b) = z.square_roots();
        a.assert_approx_eq(&ComplexNumber::new(1.0, 2.0), MARGIN, "square_roots()", "0");
        b.assert_approx_eq(&ComplexNumber::new(-1.0, -2.0), MARGIN, "square_roots()", "1");
    }

    #[test]
    fn test_cubic_roots() {
        let z = ComplexNumber::new(-8.0, 0.0);
        let (r0, r1, r2) = z.cubic_roots();
        r0.assert_approx_eq(&ComplexNumber::new(1.0, 3f64.sqrt()), MARGIN, "cubic_roots()", "0");
        r1.assert_approx_eq(&ComplexNumber::new(-2.0, 0.0), MARGIN, "cubic_roots()", "1");
        r2.assert_approx_eq(&ComplexNumber::new(1.0, -(3f64.sqrt())), MARGIN, "cubic_roots()", "2");
        for r in [r0, r1, r2] {
            (r * r * r).assert_approx_eq(&z, MARGIN, "cubic_roots()", "cube");
        }
    }

    #[test]
    fn test_sign() {
        let inf = f64::INFINITY;
        let s = SQRT_1_OVER_2;
        assert_eq!(ComplexNumber::new(inf, inf).sign(), ComplexNumber::new(s, s));
        assert_eq!(ComplexNumber::new(inf, -inf).sign(), ComplexNumber::new(s, -s));
        assert_eq!(ComplexNumber::new(-inf, inf).sign(), ComplexNumber::new(-s, s));
        assert_eq!(ComplexNumber::new(-inf, -inf).sign(), ComplexNumber::new(-s, -s));
        assert_eq!(ComplexNumber::ZERO.sign(), ComplexNumber::ZERO);
        assert_eq!(ComplexNumber::new(3.0, -4.0).sign(), ComplexNumber::new(0.6, -0.8));
    }

    #[test]
    fn test_norms() {
        let z = ComplexNumber::new(3.0, 4.0);
        assert_eq!(z.magnitude_squared(), 25.0);
        assert_eq!(z.norm(), 25.0);
        assert_eq!(z.norm_of_difference(&ComplexNumber::new(0.0, 1.0)), 18.0);
    }

    #[test]
    fn test_predicates() {
        assert!(ComplexNumber::ZERO.is_zero());
        assert!(ComplexNumber::ONE.is_one());
        assert!(ComplexNumber::IMAGINARY_ONE.is_imaginary_one());
        assert!(ComplexNumber::new(f64::NAN, 1.0).is_nan());
        assert!(ComplexNumber::new(1.0, f64::NEG_INFINITY).is_infinite());
        assert!(ComplexNumber::new(-2.0, 0.0).is_real());
        assert!(!ComplexNumber::new(-2.0, 0.0).is_real_non_negative());
        assert!(ComplexNumber::new(2.0, -0.0).is_real_non_negative());
        assert!(!ComplexNumber::new(2.0, 1e-300).is_true_real());
    }
}
