use super::ComplexNumber;
use crate::consts::{ACCURACY, EULER_GAMMA, LN_2, LN_GAMMA_MAX_TERMS, MAX_EXP_ARG, SQRT_5};
use crate::real;
use log::trace;
use std::f64::consts::PI;

/// Lanczos series coefficients for g = 5.5
const LANCZOS_COEFFS: [f64; 6] = [
    76.180_091_73,
    -86.505_320_33,
    24.014_098_22,
    -1.231_739_516,
    0.001_208_580_03,
    -5.363_82e-6,
];

/// sqrt(2π), to the precision of the series
const LANCZOS_SCALE: f64 = 2.506_628_275;

/// Shared setup of the Lanczos evaluation at `z`.
///
/// For `Re z ≥ 1` the series is taken at `x = z - 1`; otherwise at the
/// reflected point `x = 1 - z`.
struct Lanczos {
    reflect: bool,
    x: ComplexNumber,
    /// x + 1/2
    xh: ComplexNumber,
    /// x + g
    xgh: ComplexNumber,
    /// scaled partial-fraction sum
    s: ComplexNumber,
}

impl Lanczos {
    fn at(z: &ComplexNumber) -> Self {
        let reflect = z.re < 1.0;
        let x = if reflect {
            ComplexNumber::new(1.0 - z.re, -z.im)
        } else {
            ComplexNumber::new(z.re - 1.0, z.im)
        };
        let mut s = ComplexNumber::ONE;
        let mut anum = x;
        for c in LANCZOS_COEFFS {
            anum += 1.0;
            s += c / anum;
        }
        Lanczos {
            reflect,
            x,
            xh: x + 0.5,
            xgh: x + 5.5,
            s: s * LANCZOS_SCALE,
        }
    }
}

impl ComplexNumber {
    /// Gamma function.
    ///
    /// Integers and infinities on the real axis go through the exact real
    /// factorial; everything else through the Lanczos series, with the
    /// reflection formula for `Re z < 1`.
    pub fn gamma(&self) -> ComplexNumber {
        if self.im == 0.0 && (self.re.is_infinite() || real::is_integer(self.re)) {
            return ComplexNumber::from_real(real::fact(self.re - 1.0));
        }
        self.gamma_lanczos()
    }

    fn gamma_lanczos(&self) -> ComplexNumber {
        if self.im.is_infinite() {
            return ComplexNumber::ZERO;
        }
        if self.re == f64::INFINITY {
            return ComplexNumber::new(f64::INFINITY, 0.0);
        }
        if self.re == f64::NEG_INFINITY {
            return ComplexNumber::new(f64::NAN, f64::NAN);
        }

        let l = Lanczos::at(self);
        let g = l.xgh.pow(&l.xh) * l.s / l.xgh.exp();
        if !l.reflect {
            return g;
        }
        // sin(πx) overflows past this; the result is taken as zero
        if l.x.im.abs() > MAX_EXP_ARG {
            return ComplexNumber::ZERO;
        }
        let pix = PI * l.x;
        pix / (g * pix.sin())
    }

    /// `ln(sin z)`, asymptotic once `|Im z|` is too large for `sin` itself
    pub fn ln_sin(&self) -> ComplexNumber {
        if self.im.abs() <= MAX_EXP_ARG {
            return self.sin().ln();
        }
        let re = self.im.abs() - LN_2;
        let im = if self.im < 0.0 {
            (-1.0 / self.re.tan()).atan()
        } else {
            (1.0 / self.re.tan()).atan()
        };
        ComplexNumber::new(re, im)
    }

    /// Natural logarithm of the Gamma function.
    ///
    /// For `Re z < 0` the real part comes from the reflection formula and the
    /// imaginary part from the Weierstrass product, truncated after at most
    /// 10 000 terms.
    pub fn ln_gamma(&self) -> ComplexNumber {
        if self.re < 0.0 {
            if self.im == 0.0 && real::is_integer(self.re) {
                return ComplexNumber::new(f64::INFINITY, 0.0);
            }
            let mut t = *self * (PI * *self).sin();
            if t.re < 0.0 {
                t = -t;
            }
            let reflected = PI.ln() - (-*self).ln_gamma() - t.ln();

            let n_max = ((self.re.abs() / ACCURACY) as usize).min(LN_GAMMA_MAX_TERMS);
            let mut w = -(self.ln() + EULER_GAMMA * *self);
            for n in 1..=n_max {
                let zn = *self / n as f64;
                w += zn - (1.0 + zn).ln();
            }
            trace!("ln_gamma: {} series terms at {:?}", n_max, self);
            return ComplexNumber::new(reflected.re, w.im);
        }

        let l = Lanczos::at(self);
        let g = l.xh * l.xgh.ln() + l.s.ln() - l.xgh;
        if !l.reflect {
            return g;
        }
        let pix = PI * l.x;
        pix.ln() - g - pix.ln_sin()
    }

    /// `z!`, with `Γ(z + 1)` off the non-negative integers
    pub fn fact(&self) -> ComplexNumber {
        if self.im == 0.0 && real::is_integer(self.re) {
            return ComplexNumber::from_real(real::fact(self.re));
        }
        let arg = if self.re.is_nan() || self.re.is_infinite() {
            *self
        } else {
            *self + 1.0
        };
        arg.gamma()
    }

    /// Lucas numbers continued to the complex plane
    pub fn lucas(&self) -> ComplexNumber {
        let a = ComplexNumber::pow_positive_base(SQRT_5 - 1.0, self);
        let b = ComplexNumber::pow_positive_base(1.0 + SQRT_5, self);
        let c = ComplexNumber::pow_positive_base(2.0, self);
        ((PI * *self).cos() * a + b) / c
    }

    /// Fibonacci numbers continued to the complex plane, `(L(z-1) + L(z+1)) / 5`
    pub fn fib(&self) -> ComplexNumber {
        0.2 * ((*self - 1.0).lucas() + (*self + 1.0).lucas())
    }
}
