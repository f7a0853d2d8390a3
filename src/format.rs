//! Complex number to text.
//!
//! [`ComplexNumber::to_string_with`] understands the complex codes `I`, `J`
//! (Cartesian `a+bi` / `a+bj`), `AR`, `AD`, `AG` (polar with the angle in
//! radians, degrees or grads), each optionally followed by `|digits`. Any
//! other format is applied to both parts inside `(re, im)`.

use crate::complex::{round_half_even, ComplexNumber};
use crate::consts::{RAD_TO_DEG, RAD_TO_GRAD};
use crate::error::ComplexError;
use crate::parse::NumberSymbols;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

fn complex_code() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(?<code>I|J|AR|AD|AG)(?:\|(?<digits>.*))?$").expect("Invalid regex!")
    })
}

fn numeric_code() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(?<code>[FEGR])(?<precision>\d*)$").expect("Invalid regex!")
    })
}

/// Glyphs used by the formatter.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatOptions {
    imaginary_unit: char,
    polar_angle: char,
    symbols: NumberSymbols,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            imaginary_unit: 'i',
            polar_angle: 'A',
            symbols: NumberSymbols::default(),
        }
    }
}

impl FormatOptions {
    /// Marker written by the `I` code
    pub fn imaginary_unit(&self) -> char {
        self.imaginary_unit
    }

    /// Separator between magnitude and angle in the polar codes
    pub fn polar_angle(&self) -> char {
        self.polar_angle
    }

    pub fn symbols(&self) -> &NumberSymbols {
        &self.symbols
    }
}

#[derive(Debug, Default)]
pub struct FormatOptionsBuilder {
    imaginary_unit: Option<char>,
    polar_angle: Option<char>,
    symbols: Option<NumberSymbols>,
}

impl FormatOptionsBuilder {
    pub fn new() -> Self {
        FormatOptionsBuilder::default()
    }

    pub fn imaginary_unit(mut self, val: char) -> Self {
        self.imaginary_unit = Some(val);
        self
    }

    pub fn polar_angle(mut self, val: char) -> Self {
        self.polar_angle = Some(val);
        self
    }

    pub fn symbols(mut self, val: NumberSymbols) -> Self {
        self.symbols = Some(val);
        self
    }

    /// Check the glyphs and build.
    ///
    /// The imaginary unit must be one of the markers the parser reads. The
    /// polar angle glyph must not be one a number can contain. The two
    /// separators must be distinct and non-empty.
    pub fn build(self) -> Result<FormatOptions, ComplexError> {
        let defaults = FormatOptions::default();
        let imaginary_unit = self.imaginary_unit.unwrap_or(defaults.imaginary_unit);
        let polar_angle = self.polar_angle.unwrap_or(defaults.polar_angle);
        let symbols = self.symbols.unwrap_or(defaults.symbols);

        if !matches!(imaginary_unit, 'i' | 'I' | 'j' | 'J') {
            return Err(ComplexError::Config(format!(
                "imaginary unit '{}' is not one of i, I, j, J",
                imaginary_unit
            )));
        }
        if polar_angle.is_ascii_digit()
            || polar_angle.is_whitespace()
            || matches!(polar_angle, '+' | '-' | 'e' | 'E')
            || symbols.decimal_separator.contains(polar_angle)
        {
            return Err(ComplexError::Config(format!(
                "polar angle glyph '{}' collides with number text",
                polar_angle
            )));
        }
        if symbols.decimal_separator.is_empty() || symbols.list_separator.is_empty() {
            return Err(ComplexError::Config("empty separator".to_string()));
        }
        if symbols.decimal_separator == symbols.list_separator {
            return Err(ComplexError::Config(format!(
                "decimal and list separator are both '{}'",
                symbols.list_separator
            )));
        }

        Ok(FormatOptions {
            imaginary_unit,
            polar_angle,
            symbols,
        })
    }
}

/// Shortest round-trip text of `x`.
///
/// Exponent form (`1E+300`, `1.5E-07`) is used outside `[1e-5, 1e15)`.
pub(crate) fn format_number(x: f64, symbols: &NumberSymbols) -> String {
    if let Some(special) = special_symbol(x, symbols) {
        return special;
    }
    let abs = x.abs();
    let text = if abs != 0.0 && !(1e-5..1e15).contains(&abs) {
        exponent_form(&format!("{:e}", x), 2)
    } else {
        format!("{}", x)
    };
    localize(text, symbols)
}

fn special_symbol(x: f64, symbols: &NumberSymbols) -> Option<String> {
    if x.is_nan() {
        Some(symbols.nan.clone())
    } else if x == f64::INFINITY {
        Some(symbols.positive_infinity.clone())
    } else if x == f64::NEG_INFINITY {
        Some(symbols.negative_infinity.clone())
    } else {
        None
    }
}

/// `1.5e-7` → `1.5E-07` with at least `width` exponent digits
fn exponent_form(text: &str, width: usize) -> String {
    match text.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(e) => format!(
                "{}E{}{:0width$}",
                mantissa,
                if e < 0 { '-' } else { '+' },
                e.abs(),
                width = width
            ),
            Err(_) => text.to_string(),
        },
        None => text.to_string(),
    }
}

fn localize(text: String, symbols: &NumberSymbols) -> String {
    if symbols.decimal_separator == "." {
        text
    } else {
        text.replace('.', &symbols.decimal_separator)
    }
}

/// A part formatted with a standard numeric code: `F<n>`, `E<n>`, `G`, `R`
fn format_standard(x: f64, format: &str, symbols: &NumberSymbols) -> String {
    let Some(caps) = numeric_code().captures(format) else {
        return format_number(x, symbols);
    };
    if let Some(special) = special_symbol(x, symbols) {
        return special;
    }
    let precision = caps["precision"].parse::<usize>().ok();
    match caps["code"].to_ascii_uppercase().as_str() {
        "F" => localize(format!("{:.*}", precision.unwrap_or(2), x), symbols),
        "E" => localize(
            exponent_form(&format!("{:.*e}", precision.unwrap_or(6), x), 3),
            symbols,
        ),
        _ => format_number(x, symbols),
    }
}

fn rounded(x: f64, digits: Option<u32>) -> f64 {
    match digits {
        Some(d) => round_half_even(x, d),
        None => x,
    }
}

impl ComplexNumber {
    /// Format with a complex code or a standard numeric format.
    ///
    /// An empty format gives the default `(re, im)` text.
    pub fn to_string_with(&self, format: &str, options: &FormatOptions) -> String {
        let symbols = &options.symbols;
        if let Some(caps) = complex_code().captures(format.trim()) {
            let digits = caps
                .name("digits")
                .and_then(|d| d.as_str().trim().parse::<u32>().ok());
            return match caps["code"].to_ascii_uppercase().as_str() {
                "I" => self.cartesian_string(options.imaginary_unit, digits, symbols),
                "J" => self.cartesian_string('j', digits, symbols),
                "AR" => self.polar_string(1.0, digits, options),
                "AD" => self.polar_string(RAD_TO_DEG, digits, options),
                _ => self.polar_string(RAD_TO_GRAD, digits, options),
            };
        }
        format!(
            "({}{} {})",
            format_standard(self.re(), format, symbols),
            symbols.list_separator,
            format_standard(self.im(), format, symbols)
        )
    }

    fn cartesian_string(&self, unit: char, digits: Option<u32>, symbols: &NumberSymbols) -> String {
        let re = rounded(self.re(), digits);
        let im = rounded(self.im(), digits);

        let im_text = if im == 1.0 {
            unit.to_string()
        } else if im == -1.0 {
            format!("-{}", unit)
        } else {
            format!("{}{}", format_number(im, symbols), unit)
        };

        if re != 0.0 {
            let re_text = format_number(re, symbols);
            if im == 0.0 {
                re_text
            } else if im < 0.0 {
                format!("{}{}", re_text, im_text)
            } else {
                format!("{}+{}", re_text, im_text)
            }
        } else if im == 0.0 {
            "0".to_string()
        } else {
            im_text
        }
    }

    fn polar_string(&self, angle_scale: f64, digits: Option<u32>, options: &FormatOptions) -> String {
        format!(
            "{}{}{}",
            format_number(rounded(self.magnitude(), digits), &options.symbols),
            options.polar_angle,
            format_number(rounded(self.phase() * angle_scale, digits), &options.symbols)
        )
    }
}

impl fmt::Display for ComplexNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string_with("", &FormatOptions::default()))
    }
}

#[cfg(test)]
mod format_tests {
    use super::*;

    fn fmt(z: ComplexNumber, format: &str) -> String {
        z.to_string_with(format, &FormatOptions::default())
    }

    #[test]
    fn test_format_number() {
        let symbols = NumberSymbols::default();
        assert_eq!(format_number(1.5, &symbols), "1.5");
        assert_eq!(format_number(-4.1, &symbols), "-4.1");
        assert_eq!(format_number(100.0, &symbols), "100");
        assert_eq!(format_number(0.0, &symbols), "0");
        assert_eq!(format_number(1e-5, &symbols), "0.00001");
        assert_eq!(format_number(1e-7, &symbols), "1E-07");
        assert_eq!(format_number(-2.5e-12, &symbols), "-2.5E-12");
        assert_eq!(format_number(1e15, &symbols), "1E+15");
        assert_eq!(format_number(1e300, &symbols), "1E+300");
        assert_eq!(format_number(f64::NAN, &symbols), "NaN");
        assert_eq!(format_number(f64::INFINITY, &symbols), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY, &symbols), "-Infinity");
    }

    #[test]
    fn test_default() {
        let z = ComplexNumber::new(1.2, -4.1);
        assert_eq!(z.to_string(), "(1.2, -4.1)");
        assert_eq!(fmt(z, ""), "(1.2, -4.1)");
        assert_eq!(fmt(z, "R"), "(1.2, -4.1)");
        assert_eq!(fmt(z, "nonsense"), "(1.2, -4.1)");
    }

    #[test]
    fn test_standard_codes() {
        let z = ComplexNumber::new(1.2, -4.1);
        assert_eq!(fmt(z, "F"), "(1.20, -4.10)");
        assert_eq!(fmt(z, "f3"), "(1.200, -4.100)");
        assert_eq!(fmt(z, "E"), "(1.200000E+000, -4.100000E+000)");
        assert_eq!(fmt(ComplexNumber::new(12345.0, 0.0), "E2"), "(1.23E+004, 0.00E+000)");
        assert_eq!(
            fmt(ComplexNumber::new(f64::NAN, f64::INFINITY), "F2"),
            "(NaN, Infinity)"
        );
    }

    #[test]
    fn test_cartesian() {
        assert_eq!(fmt(ComplexNumber::new(1.2, -4.1), "I"), "1.2-4.1i");
        assert_eq!(fmt(ComplexNumber::new(3.4, 2.3), "i"), "3.4+2.3i");
        assert_eq!(fmt(ComplexNumber::new(3.4, 2.3), "J"), "3.4+2.3j");
        assert_eq!(fmt(ComplexNumber::new(2.0, 1.0), "I"), "2+i");
        assert_eq!(fmt(ComplexNumber::new(2.0, -1.0), "I"), "2-i");
        assert_eq!(fmt(ComplexNumber::new(0.0, -1.0), "I"), "-i");
        assert_eq!(fmt(ComplexNumber::new(0.0, 2.5), "I"), "2.5i");
        assert_eq!(fmt(ComplexNumber::new(-7.0, 0.0), "I"), "-7");
        assert_eq!(fmt(ComplexNumber::ZERO, "I"), "0");
        assert_eq!(fmt(ComplexNumber::new(1.23456, -0.5), "I|2"), "1.23-0.5i");
        assert_eq!(fmt(ComplexNumber::new(0.125, 0.375), "j|2"), "0.12+0.38j");
        assert_eq!(fmt(ComplexNumber::new(1.23456, 1.0), "I|x"), "1.23456+i");
    }

    #[test]
    fn test_polar() {
        let z = ComplexNumber::new(0.0, 2.0);
        assert_eq!(fmt(z, "AR|4"), "2A1.5708");
        assert_eq!(fmt(z, "AD"), "2A90");
        assert_eq!(fmt(z, "ag"), "2A100");
        assert_eq!(fmt(ComplexNumber::new(-3.0, 0.0), "AD|1"), "3A180");
    }

    #[test]
    fn test_options() {
        let options = FormatOptionsBuilder::new()
            .imaginary_unit('j')
            .polar_angle('@')
            .symbols(NumberSymbols {
                list_separator: ";".to_string(),
                decimal_separator: ",".to_string(),
                ..NumberSymbols::default()
            })
            .build()
            .unwrap();
        let z = ComplexNumber::new(1.5, -2.25);
        assert_eq!(z.to_string_with("I", &options), "1,5-2,25j");
        assert_eq!(z.to_string_with("", &options), "(1,5; -2,25)");
        assert_eq!(ComplexNumber::new(0.0, 1.5).to_string_with("AD", &options), "1,5@90");

        assert!(matches!(
            FormatOptionsBuilder::new().imaginary_unit('k').build(),
            Err(ComplexError::Config(_))
        ));
        assert!(matches!(
            FormatOptionsBuilder::new().polar_angle('5').build(),
            Err(ComplexError::Config(_))
        ));
        let clash = NumberSymbols {
            list_separator: ".".to_string(),
            ..NumberSymbols::default()
        };
        assert!(FormatOptionsBuilder::new().symbols(clash).build().is_err());
        assert_eq!(FormatOptionsBuilder::new().build(), Ok(FormatOptions::default()));
    }
}
