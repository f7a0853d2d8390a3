use super::ComplexNumber;
use crate::consts::{ACCURACY, LN_10, LN_2};
use crate::error::ComplexError;
use crate::real;
use log::debug;

impl ComplexNumber {
    /// `e^z`
    pub fn exp(&self) -> ComplexNumber {
        let m = self.re.exp();
        ComplexNumber::new(m * self.im.cos(), m * self.im.sin())
    }

    /// Principal natural logarithm, imaginary part in (-π, π].
    ///
    /// The non-negative real axis (and both infinities) is answered by the
    /// real logarithm. Elsewhere the real part is `ln(|z|²) / 2`, so a finite
    /// argument whose squared modulus overflows yields `+∞`.
    pub fn ln(&self) -> ComplexNumber {
        if self.im == 0.0 && (self.re >= 0.0 || self.re.is_infinite()) {
            return real::ln(self.re).into_complex();
        }
        ComplexNumber::new(0.5 * self.magnitude_squared().ln(), self.phase)
    }

    /// Base-10 logarithm
    pub fn log10(&self) -> ComplexNumber {
        if self.im == 0.0 && (self.re >= 0.0 || self.re.is_infinite()) {
            return real::log10(self.re).into_complex();
        }
        self.ln() / LN_10
    }

    /// Base-2 logarithm
    pub fn log2(&self) -> ComplexNumber {
        self.ln() / LN_2
    }

    /// Logarithm to a real base
    pub fn log(&self, base: f64) -> ComplexNumber {
        self.ln() / base.ln()
    }

    /// Logarithm to a complex base, `ln(z) / ln(base)`
    pub fn log_base(&self, base: &ComplexNumber) -> ComplexNumber {
        self.ln() / base.ln()
    }

    /// `z^p` for a real exponent, through polar form
    pub fn pow_real(&self, p: f64) -> ComplexNumber {
        let m = self.magnitude.powf(p);
        let t = self.phase * p;
        ComplexNumber::new(m * t.cos(), m * t.sin())
    }

    /// `x^p` for a non-negative real base.
    ///
    /// A negative base has no principal value on this path and is rejected.
    pub fn pow_from_real(x: f64, p: &ComplexNumber) -> Result<ComplexNumber, ComplexError> {
        if x < 0.0 {
            debug!("pow_from_real: rejected negative base {}", x);
            return Err(ComplexError::Domain(format!(
                "real base must be non-negative, got {}",
                x
            )));
        }
        Ok(ComplexNumber::pow_positive_base(x, p))
    }

    /// `x^p` for a base already known to be non-negative
    pub(crate) fn pow_positive_base(x: f64, p: &ComplexNumber) -> ComplexNumber {
        if p.is_zero() {
            return ComplexNumber::ONE;
        }
        if x == 0.0 {
            return ComplexNumber::ZERO;
        }
        let m = x.powf(p.re);
        let t = x.ln() * p.im;
        ComplexNumber::new(m * t.cos(), m * t.sin())
    }

    /// `z^p`. An exponent below [`ACCURACY`] in magnitude gives one, a base below
    /// it gives zero.
    pub fn pow(&self, p: &ComplexNumber) -> ComplexNumber {
        let r = self.magnitude;
        if p.magnitude < ACCURACY {
            return ComplexNumber::ONE;
        }
        if r < ACCURACY {
            return ComplexNumber::ZERO;
        }
        let phi = self.phase;
        let phase = p.re * phi + p.im * r.ln();
        let m = r.powf(p.re) * (-p.im * phi).exp();
        ComplexNumber::new(m * phase.cos(), m * phase.sin())
    }

    /// `z^p` with the limits at a zero base spelled out:
    /// `0^0 = 1`, `0^p = 0` for `Re p > 0`, infinite for `Re p < 0`,
    /// NaN on the imaginary axis.
    pub fn power(&self, p: &ComplexNumber) -> ComplexNumber {
        if self.is_zero() {
            if p.is_zero() {
                return ComplexNumber::ONE;
            }
            if p.re > 0.0 {
                return ComplexNumber::ZERO;
            }
            if p.re < 0.0 {
                return if p.im == 0.0 {
                    ComplexNumber::new(f64::INFINITY, 0.0)
                } else {
                    ComplexNumber::new(f64::INFINITY, f64::INFINITY)
                };
            }
            return ComplexNumber::new(f64::NAN, f64::NAN);
        }
        self.pow(p)
    }

    /// `z^(1/r)`
    pub fn root(&self, r: &ComplexNumber) -> ComplexNumber {
        self.pow(&(1.0 / *r))
    }
}
