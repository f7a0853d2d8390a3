use crate::consts::{DEG_TO_RAD, PI2};
use crate::error::ComplexError;
use log::debug;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::cmp::Ordering;
use std::f64::consts::{FRAC_PI_2, PI};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

pub mod exp_log;
pub mod gamma;
pub mod inverse;
pub mod kernel;
pub mod trig;

pub use kernel::stable_hypot;

/// A double-precision complex number.
///
/// The real and imaginary parts are authoritative. Magnitude and phase are
/// derived once, in the constructor, so a value never carries stale polar
/// coordinates. "Changing" a part means building a new value with
/// [`ComplexNumber::with_re`] or [`ComplexNumber::with_im`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(from = "Cartesian", into = "Cartesian")]
pub struct ComplexNumber {
    re: f64,
    im: f64,
    magnitude: f64,
    phase: f64,
}

/// Serialized form: only the authoritative parts travel.
#[derive(Serialize, Deserialize)]
struct Cartesian {
    re: f64,
    im: f64,
}

impl From<Cartesian> for ComplexNumber {
    fn from(c: Cartesian) -> Self {
        ComplexNumber::new(c.re, c.im)
    }
}

impl From<ComplexNumber> for Cartesian {
    fn from(z: ComplexNumber) -> Self {
        Cartesian { re: z.re, im: z.im }
    }
}

impl ComplexNumber {
    /// 0 + 0i
    pub const ZERO: ComplexNumber = ComplexNumber {
        re: 0.0,
        im: 0.0,
        magnitude: 0.0,
        phase: 0.0,
    };
    /// 1 + 0i
    pub const ONE: ComplexNumber = ComplexNumber {
        re: 1.0,
        im: 0.0,
        magnitude: 1.0,
        phase: 0.0,
    };
    /// 0 + 1i
    pub const IMAGINARY_ONE: ComplexNumber = ComplexNumber {
        re: 0.0,
        im: 1.0,
        magnitude: 1.0,
        phase: FRAC_PI_2,
    };

    /// Create a new complex number from real and imaginary parts
    pub fn new(re: f64, im: f64) -> Self {
        ComplexNumber {
            re,
            im,
            magnitude: stable_hypot(re, im),
            phase: im.atan2(re),
        }
    }

    /// Create a new complex number from a real number (imaginary part = 0)
    pub fn from_real(re: f64) -> Self {
        ComplexNumber::new(re, 0.0)
    }

    /// Create a new complex number from an imaginary number (real part = 0)
    pub fn from_imag(im: f64) -> Self {
        ComplexNumber::new(0.0, im)
    }

    /// Create a complex number from a magnitude and a phase in radians.
    ///
    /// A phase beyond ±2π is first reduced with `fmod`, then shifted into
    /// [-π, π].
    pub fn from_polar(magnitude: f64, phase: f64) -> Self {
        let mut phase = if phase.abs() > PI2 { phase % PI2 } else { phase };
        if phase > PI {
            phase -= PI2;
        } else if phase < -PI {
            phase += PI2;
        }
        ComplexNumber::new(magnitude * phase.cos(), magnitude * phase.sin())
    }

    /// Create a complex number from a magnitude and a phase in degrees
    pub fn from_polar_degrees(magnitude: f64, degrees: f64) -> Self {
        ComplexNumber::from_polar(magnitude, degrees * DEG_TO_RAD)
    }

    /// Get the real part
    pub fn re(&self) -> f64 {
        self.re
    }

    /// Get the imaginary part
    pub fn im(&self) -> f64 {
        self.im
    }

    /// Get the magnitude, `stable_hypot(re, im)`
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Get the phase in radians, `atan2(im, re)`
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Same as [`ComplexNumber::magnitude`]
    pub fn abs(&self) -> f64 {
        self.magnitude
    }

    /// Same as [`ComplexNumber::phase`]
    pub fn arg(&self) -> f64 {
        self.phase
    }

    /// A copy with the real part replaced
    pub fn with_re(&self, re: f64) -> Self {
        ComplexNumber::new(re, self.im)
    }

    /// A copy with the imaginary part replaced
    pub fn with_im(&self, im: f64) -> Self {
        ComplexNumber::new(self.re, im)
    }

    /// Get the complex conjugate
    pub fn conjugate(&self) -> Self {
        ComplexNumber::new(self.re, -self.im)
    }

    /// `1/z`, with zero mapped to zero
    pub fn reciprocal(&self) -> Self {
        if self.is_zero() {
            return ComplexNumber::ZERO;
        }
        1.0 / *self
    }

    /// Round both parts to the nearest integer, ties to even
    pub fn round(&self) -> Self {
        ComplexNumber::new(self.re.round_ties_even(), self.im.round_ties_even())
    }

    /// Round both parts to `decimals` fractional digits, ties to even
    pub fn round_to(&self, decimals: u32) -> Self {
        ComplexNumber::new(
            round_half_even(self.re, decimals),
            round_half_even(self.im, decimals),
        )
    }

    /// Ceiling of the real part; the imaginary part is kept
    pub fn ceiling(&self) -> Self {
        ComplexNumber::new(self.re.ceil(), self.im)
    }

    /// Floor of the real part; the imaginary part is kept
    pub fn floor(&self) -> Self {
        ComplexNumber::new(self.re.floor(), self.im)
    }

    // --------------------------
    // magnitude ordering
    // --------------------------

    /// Compare by magnitude. `None` when either magnitude is NaN.
    pub fn cmp_magnitude(&self, other: &ComplexNumber) -> Option<Ordering> {
        self.magnitude.partial_cmp(&other.magnitude)
    }

    pub fn magnitude_lt(&self, other: &ComplexNumber) -> bool {
        self.magnitude < other.magnitude
    }

    pub fn magnitude_gt(&self, other: &ComplexNumber) -> bool {
        self.magnitude > other.magnitude
    }

    /// Smaller magnitude, or exactly equal
    pub fn magnitude_le(&self, other: &ComplexNumber) -> bool {
        self.magnitude < other.magnitude || self == other
    }

    /// Larger magnitude, or exactly equal
    pub fn magnitude_ge(&self, other: &ComplexNumber) -> bool {
        self.magnitude > other.magnitude || self == other
    }

    /// Convert a dynamically typed numeric value.
    ///
    /// Accepts a `ComplexNumber` or any primitive integer or float. An absent
    /// value is a null-argument error, anything else a cast error.
    pub fn cast(value: Option<&dyn Any>) -> Result<ComplexNumber, ComplexError> {
        let value = value.ok_or_else(|| ComplexError::NullArgument("value".to_string()))?;
        if let Some(z) = value.downcast_ref::<ComplexNumber>() {
            return Ok(*z);
        }
        macro_rules! cast_primitive {
            ($($t:ty),*) => {
                $(
                    if let Some(x) = value.downcast_ref::<$t>() {
                        return Ok(ComplexNumber::new(*x as f64, 0.0));
                    }
                )*
            };
        }
        cast_primitive!(f64, f32, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
        debug!("cast: unsupported value of type {:?}", (*value).type_id());
        Err(ComplexError::Cast(
            "value is neither a complex number nor a primitive number".to_string(),
        ))
    }
}

pub(crate) fn round_half_even(x: f64, decimals: u32) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let scale = 10f64.powi(decimals as i32);
    let scaled = x * scale;
    if !scaled.is_finite() {
        return x;
    }
    scaled.round_ties_even() / scale
}

impl PartialEq for ComplexNumber {
    fn eq(&self, other: &Self) -> bool {
        self.re == other.re && self.im == other.im
    }
}

impl Default for ComplexNumber {
    fn default() -> Self {
        ComplexNumber::ZERO
    }
}

impl Zero for ComplexNumber {
    fn zero() -> Self {
        ComplexNumber::ZERO
    }

    fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }
}

impl One for ComplexNumber {
    fn one() -> Self {
        ComplexNumber::ONE
    }
}

macro_rules! impl_from_primitive {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ComplexNumber {
                fn from(x: $t) -> Self {
                    ComplexNumber::new(x as f64, 0.0)
                }
            }
        )*
    };
}

impl_from_primitive!(f64, f32, i8, i16, i32, i64, u8, u16, u32, u64);

impl From<(f64, f64)> for ComplexNumber {
    fn from((re, im): (f64, f64)) -> Self {
        ComplexNumber::new(re, im)
    }
}

// --------------------------
// arithmetic
// --------------------------

impl Neg for ComplexNumber {
    type Output = ComplexNumber;

    fn neg(self) -> ComplexNumber {
        ComplexNumber::new(-self.re, -self.im)
    }
}

impl Add for ComplexNumber {
    type Output = ComplexNumber;

    fn add(self, rhs: ComplexNumber) -> ComplexNumber {
        ComplexNumber::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Add<f64> for ComplexNumber {
    type Output = ComplexNumber;

    fn add(self, rhs: f64) -> ComplexNumber {
        ComplexNumber::new(self.re + rhs, self.im)
    }
}

impl Add<ComplexNumber> for f64 {
    type Output = ComplexNumber;

    fn add(self, rhs: ComplexNumber) -> ComplexNumber {
        ComplexNumber::new(self + rhs.re, rhs.im)
    }
}

impl Sub for ComplexNumber {
    type Output = ComplexNumber;

    fn sub(self, rhs: ComplexNumber) -> ComplexNumber {
        ComplexNumber::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Sub<f64> for ComplexNumber {
    type Output = ComplexNumber;

    fn sub(self, rhs: f64) -> ComplexNumber {
        ComplexNumber::new(self.re - rhs, self.im)
    }
}

impl Sub<ComplexNumber> for f64 {
    type Output = ComplexNumber;

    fn sub(self, rhs: ComplexNumber) -> ComplexNumber {
        ComplexNumber::new(self - rhs.re, -rhs.im)
    }
}

impl Mul for ComplexNumber {
    type Output = ComplexNumber;

    /// `(ac - bd, ad + bc)`. A NaN part is taken as 0 when any operand
    /// component is exactly zero, so `0 * ∞` does not poison an axis.
    fn mul(self, rhs: ComplexNumber) -> ComplexNumber {
        let mut re = self.re * rhs.re - self.im * rhs.im;
        let mut im = self.re * rhs.im + self.im * rhs.re;
        let any_zero = self.re == 0.0 || rhs.re == 0.0 || self.im == 0.0 || rhs.im == 0.0;
        if re.is_nan() && any_zero {
            re = 0.0;
        }
        if im.is_nan() && any_zero {
            im = 0.0;
        }
        ComplexNumber::new(re, im)
    }
}

impl Mul<ComplexNumber> for f64 {
    type Output = ComplexNumber;

    fn mul(self, rhs: ComplexNumber) -> ComplexNumber {
        let mut re = self * rhs.re;
        let mut im = self * rhs.im;
        if re.is_nan() && (self == 0.0 || rhs.re == 0.0) {
            re = 0.0;
        }
        if im.is_nan() && (self == 0.0 || rhs.im == 0.0) {
            im = 0.0;
        }
        ComplexNumber::new(re, im)
    }
}

impl Mul<f64> for ComplexNumber {
    type Output = ComplexNumber;

    fn mul(self, rhs: f64) -> ComplexNumber {
        rhs * self
    }
}

impl Div for ComplexNumber {
    type Output = ComplexNumber;

    fn div(self, rhs: ComplexNumber) -> ComplexNumber {
        let den = rhs.re * rhs.re + rhs.im * rhs.im;
        ComplexNumber::new(
            (self.re * rhs.re + self.im * rhs.im) / den,
            (self.im * rhs.re - self.re * rhs.im) / den,
        )
    }
}

impl Div<f64> for ComplexNumber {
    type Output = ComplexNumber;

    fn div(self, rhs: f64) -> ComplexNumber {
        ComplexNumber::new(self.re / rhs, self.im / rhs)
    }
}

impl Div<ComplexNumber> for f64 {
    type Output = ComplexNumber;

    fn div(self, rhs: ComplexNumber) -> ComplexNumber {
        let conj = rhs.conjugate();
        (self * conj) / (rhs * conj)
    }
}

macro_rules! impl_assign_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for ComplexNumber {
            fn $method(&mut self, rhs: ComplexNumber) {
                *self = *self $op rhs;
            }
        }

        impl $trait<f64> for ComplexNumber {
            fn $method(&mut self, rhs: f64) {
                *self = *self $op rhs;
            }
        }
    };
}

impl_assign_op!(AddAssign, add_assign, +);
impl_assign_op!(SubAssign, sub_assign, -);
impl_assign_op!(MulAssign, mul_assign, *);
impl_assign_op!(DivAssign, div_assign, /);
