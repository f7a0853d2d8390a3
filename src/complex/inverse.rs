use super::ComplexNumber;
use crate::consts::{atanh_safe_lower, atanh_safe_upper, ATANH_CROSSOVER};
use crate::real;
use std::f64::consts::{FRAC_PI_2, PI};

/// Inverse circular and hyperbolic functions.
///
/// Each function first checks whether the argument lies where the result is
/// real and answers from [`crate::real`] there; everything else goes through
/// a logarithmic identity.
impl ComplexNumber {
    pub fn asin(&self) -> ComplexNumber {
        if self.im == 0.0 {
            if self.re == f64::INFINITY {
                return ComplexNumber::new(0.0, f64::NEG_INFINITY);
            }
            if self.re == f64::NEG_INFINITY {
                return ComplexNumber::new(0.0, f64::INFINITY);
            }
            if self.re.abs() <= 1.0 {
                return real::asin(self.re).into_complex();
            }
        }
        let i = ComplexNumber::IMAGINARY_ONE;
        -i * (i * *self + (1.0 - self.square()).sqrt()).ln()
    }

    pub fn acos(&self) -> ComplexNumber {
        if self.im == 0.0 {
            if self.re == f64::INFINITY {
                return ComplexNumber::new(0.0, f64::INFINITY);
            }
            if self.re == f64::NEG_INFINITY {
                return ComplexNumber::new(0.0, f64::NEG_INFINITY);
            }
            if self.re.abs() <= 1.0 {
                return real::acos(self.re).into_complex();
            }
        }
        let i = ComplexNumber::IMAGINARY_ONE;
        -i * (*self + i * (1.0 - self.square()).sqrt()).ln()
    }

    pub fn atan(&self) -> ComplexNumber {
        if self.im == 0.0 {
            return ComplexNumber::from_real(real::atan(self.re));
        }
        let i = ComplexNumber::IMAGINARY_ONE;
        let iz = i * *self;
        (i / 2.0) * ((1.0 - iz).ln() - (1.0 + iz).ln())
    }

    pub fn acot(&self) -> ComplexNumber {
        if self.im == 0.0 {
            return ComplexNumber::from_real(real::acot(self.re));
        }
        (1.0 / *self).atan()
    }

    pub fn asec(&self) -> ComplexNumber {
        if self.im == 0.0 && (self.re.abs() >= 1.0 || self.re == 0.0) {
            return real::asec(self.re).into_complex();
        }
        (1.0 / *self).acos()
    }

    pub fn acosec(&self) -> ComplexNumber {
        if self.im == 0.0 && (self.re.abs() >= 1.0 || self.re == 0.0) {
            return real::acosec(self.re).into_complex();
        }
        (1.0 / *self).asin()
    }

    pub fn asinh(&self) -> ComplexNumber {
        if self.im == 0.0 {
            return ComplexNumber::from_real(self.re.asinh());
        }
        (*self + (self.square() + 1.0).sqrt()).ln()
    }

    /// `±i·acos(z)`, the sign chosen so the result lands in the principal strip.
    pub fn acosh(&self) -> ComplexNumber {
        let w = self.acos();
        let i = ComplexNumber::IMAGINARY_ONE;
        let rotate_back = if self.im == 0.0 {
            if self.re >= -1.0 {
                self.re > 1.0 || w.im.is_nan() || w.im.is_sign_negative()
            } else {
                false
            }
        } else {
            self.im < 0.0
        };
        if rotate_back {
            -i * w
        } else {
            i * w
        }
    }

    /// Inverse hyperbolic tangent.
    ///
    /// Inside the safe band the textbook `¼·ln((1+z)/(1-z))` is evaluated in a
    /// cancellation-free form (log1p difference for small `alpha`); outside it
    /// the terms are divided through by the dominant component so nothing
    /// overflows or underflows.
    pub fn atanh(&self) -> ComplexNumber {
        let x = self.re.abs();
        let y = self.im.abs();

        if x.is_nan() {
            if y.is_infinite() {
                return ComplexNumber::new(0.0, FRAC_PI_2.copysign(self.im));
            }
            return ComplexNumber::new(f64::NAN, f64::NAN);
        }
        if y.is_nan() {
            if x == 0.0 {
                return ComplexNumber::new(x, y);
            }
            if x.is_infinite() {
                return ComplexNumber::new(0.0, y);
            }
            return ComplexNumber::new(f64::NAN, f64::NAN);
        }

        let upper = atanh_safe_upper();
        let lower = atanh_safe_lower();
        let xx = x * x;
        let yy = y * y;

        let (mut real, mut imag);
        // real arguments inside the bounds stay on the direct formula
        if x > lower && x < upper && (y > lower || y == 0.0) && y < upper {
            let alpha = 2.0 * x / (1.0 + xx + yy);
            real = if alpha < ATANH_CROSSOVER {
                alpha.ln_1p() - (-alpha).ln_1p()
            } else {
                let xm1 = x - 1.0;
                (2.0 * x + xx + yy).ln_1p() - (xm1 * xm1 + yy).ln()
            };
            imag = (2.0 * y).atan2(1.0 - xx - yy);
            imag /= 2.0;
            if self.im < 0.0 {
                imag = -imag;
            }
        } else {
            let alpha = if x >= upper {
                if x.is_infinite() || y.is_infinite() {
                    0.0
                } else if y >= upper {
                    (2.0 / y) / (x / y + y / x)
                } else if y > 1.0 {
                    2.0 / (x + y * y / x)
                } else {
                    2.0 / x
                }
            } else if y >= upper {
                if x > 1.0 {
                    (2.0 * x / y) / (y + x * x / y)
                } else {
                    0.0
                }
            } else {
                let mut div = 1.0;
                if x > lower {
                    div += xx;
                }
                if y > lower {
                    div += yy;
                }
                2.0 * x / div
            };
            real = if alpha < ATANH_CROSSOVER {
                alpha.ln_1p() - (-alpha).ln_1p()
            } else {
                let xm1 = x - 1.0;
                (2.0 * x + xx).ln_1p() - (xm1 * xm1).ln()
            };
            imag = if x >= upper || y >= upper {
                PI
            } else if x <= lower {
                if y <= lower {
                    (2.0 * y).atan2(1.0)
                } else {
                    (2.0 * y).atan2(1.0 - yy)
                }
            } else if y == 0.0 && x == 1.0 {
                0.0
            } else {
                (2.0 * y).atan2(1.0 - xx)
            };
            imag /= 2.0;
            if self.im.is_sign_negative() || (self.im == 0.0 && self.re > 1.0) {
                imag = -imag;
            }
        }

        real /= 4.0;
        if self.re.is_sign_negative() {
            real = -real;
        }
        ComplexNumber::new(real, imag)
    }

    pub fn acoth(&self) -> ComplexNumber {
        if self.im == 0.0 {
            if self.re == 0.0 {
                return ComplexNumber::new(0.0, FRAC_PI_2);
            }
            if self.re.is_infinite() {
                return ComplexNumber::ZERO;
            }
            if self.re == 1.0 {
                return ComplexNumber::new(f64::INFINITY, 0.0);
            }
            if self.re == -1.0 {
                return ComplexNumber::new(f64::NEG_INFINITY, 0.0);
            }
        }
        (1.0 / *self).atanh()
    }

    pub fn asech(&self) -> ComplexNumber {
        if self.im == 0.0 {
            if self.re == -1.0 {
                return ComplexNumber::new(0.0, PI);
            }
            if self.re == 0.0 || self.re == 1.0 || (self.re > 0.0 && self.re < 1.0) {
                return real::asech(self.re).into_complex();
            }
        }
        (1.0 / *self).acosh()
    }

    pub fn acosech(&self) -> ComplexNumber {
        if self.im == 0.0 {
            return ComplexNumber::from_real(real::acosech(self.re));
        }
        let r = 1.0 / *self;
        ((1.0 + 1.0 / self.square()).sqrt() + r).ln()
    }
}
