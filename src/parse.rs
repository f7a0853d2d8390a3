//! Text to complex number.
//!
//! Two grammars are accepted. [`to_complex`] (and [`FromStr`]) reads the
//! algebraic forms `n`, `ni`, `n ± ni`, `ni ± n`, `n, n` and `n, ni`, each
//! optionally wrapped in one pair of parentheses, with `i`, `I`, `j` or `J`
//! as the imaginary marker. [`ComplexNumber::parse_delimited`] reads the
//! semicolon-delimited `(re; im)` form.

use crate::complex::ComplexNumber;
use crate::error::ComplexError;
use log::debug;
use simple_error::{bail, SimpleResult};
use std::str::FromStr;

/// Culture-dependent glyphs used when reading and writing numbers.
///
/// The default reproduces the invariant culture.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberSymbols {
    pub list_separator: String,
    pub decimal_separator: String,
    pub nan: String,
    pub positive_infinity: String,
    pub negative_infinity: String,
}

impl Default for NumberSymbols {
    fn default() -> Self {
        NumberSymbols {
            list_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
            nan: "NaN".to_string(),
            positive_infinity: "Infinity".to_string(),
            negative_infinity: "-Infinity".to_string(),
        }
    }
}

const MARKERS: [&str; 4] = ["i", "I", "j", "J"];

fn is_marker(token: &str) -> bool {
    MARKERS.contains(&token)
}

/// Split `text` on each keyword in turn.
///
/// Keywords are kept as tokens of their own; the text between them is split
/// further on the remaining keywords only. Tokens are trimmed and empty ones
/// dropped.
fn tokenize(text: &str, keywords: &[&str], out: &mut Vec<String>) {
    let text = text.trim();
    if text.is_empty() {
        return;
    }
    let Some((keyword, rest)) = keywords.split_first() else {
        out.push(text.to_string());
        return;
    };
    if keyword.is_empty() {
        tokenize(text, rest, out);
        return;
    }
    let mut remaining = text;
    while let Some(idx) = remaining.find(keyword) {
        tokenize(&remaining[..idx], rest, out);
        out.push(keyword.to_string());
        remaining = &remaining[idx + keyword.len()..];
    }
    tokenize(remaining, rest, out);
}

struct Cursor<'a> {
    tokens: &'a [String],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<&'a str> {
        self.tokens.get(self.pos).map(|t| t.as_str())
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn next_required(&mut self, what: &str) -> SimpleResult<&'a str> {
        self.advance();
        match self.peek() {
            Some(token) => Ok(token),
            None => bail!("expected {} at end of input", what),
        }
    }
}

/// One number token, or a mantissa ending in `e` rejoined with the sign and
/// digits the tokenizer split off.
fn parse_double(cursor: &mut Cursor, symbols: &NumberSymbols) -> SimpleResult<f64> {
    let Some(token) = cursor.peek() else {
        bail!("expected a number at end of input")
    };
    if token == symbols.nan {
        cursor.advance();
        return Ok(f64::NAN);
    }
    if token == symbols.positive_infinity {
        cursor.advance();
        return Ok(f64::INFINITY);
    }
    if token == symbols.negative_infinity {
        cursor.advance();
        return Ok(f64::NEG_INFINITY);
    }

    let mut number = token.to_string();
    if token.ends_with('e') || token.ends_with('E') {
        let sign = cursor.next_required("an exponent sign")?;
        let digits = cursor.next_required("exponent digits")?;
        number.push_str(sign);
        number.push_str(digits);
    }
    let normalized = if symbols.decimal_separator == "." {
        number.clone()
    } else {
        number.replace(symbols.decimal_separator.as_str(), ".")
    };
    match normalized.parse::<f64>() {
        Ok(value) => {
            cursor.advance();
            Ok(value)
        }
        Err(_) => bail!("'{}' is not a number", number),
    }
}

/// `[+][-][marker] number [marker]`, or a bare marker meaning one.
/// Returns the value and whether it carried the imaginary marker.
fn parse_part(cursor: &mut Cursor, symbols: &NumberSymbols) -> SimpleResult<(f64, bool)> {
    let Some(mut token) = cursor.peek() else {
        bail!("expected a number at end of input")
    };
    if token == "+" {
        token = cursor.next_required("a number after '+'")?;
    }
    let mut negative = false;
    if token == "-" {
        negative = true;
        token = cursor.next_required("a number after '-'")?;
    }
    let sign = if negative { -1.0 } else { 1.0 };

    let mut imaginary = false;
    if is_marker(token) {
        imaginary = true;
        cursor.advance();
        match cursor.peek() {
            None => return Ok((sign, true)),
            Some(next) if next == "+" || next == "-" || next == symbols.list_separator => {
                return Ok((sign, true))
            }
            Some(_) => {}
        }
    }

    let value = parse_double(cursor, symbols)?;

    if let Some(token) = cursor.peek() {
        if is_marker(token) {
            if imaginary {
                bail!("imaginary marker on both sides of a number");
            }
            imaginary = true;
            cursor.advance();
        }
    }
    Ok((sign * value, imaginary))
}

fn parse_complex(value: &str, symbols: &NumberSymbols) -> SimpleResult<ComplexNumber> {
    let mut value = value.trim();
    if value.is_empty() {
        bail!("empty input");
    }
    if let Some(inner) = value.strip_prefix('(') {
        match inner.strip_suffix(')') {
            Some(inner) => value = inner.trim(),
            None => bail!("unbalanced parenthesis"),
        }
    }

    let keywords = [
        symbols.list_separator.as_str(),
        symbols.nan.as_str(),
        symbols.negative_infinity.as_str(),
        symbols.positive_infinity.as_str(),
        "+",
        "-",
        "i",
        "I",
        "j",
        "J",
    ];
    let mut tokens = Vec::new();
    tokenize(value, &keywords, &mut tokens);
    let mut cursor = Cursor {
        tokens: &tokens,
        pos: 0,
    };

    let (left, left_imaginary) = parse_part(&mut cursor, symbols)?;
    let Some(token) = cursor.peek() else {
        return Ok(if left_imaginary {
            ComplexNumber::new(0.0, left)
        } else {
            ComplexNumber::new(left, 0.0)
        });
    };

    let z = if token == symbols.list_separator {
        // real, imag
        if left_imaginary {
            bail!("real part before the list separator carries an imaginary marker");
        }
        cursor.advance();
        let (right, _) = parse_part(&mut cursor, symbols)?;
        ComplexNumber::new(left, right)
    } else {
        // real ± imag, imag ± real
        let (right, right_imaginary) = parse_part(&mut cursor, symbols)?;
        if left_imaginary == right_imaginary {
            bail!("exactly one part must carry the imaginary marker");
        }
        if left_imaginary {
            ComplexNumber::new(right, left)
        } else {
            ComplexNumber::new(left, right)
        }
    };

    if let Some(extra) = cursor.peek() {
        bail!("unexpected '{}' after the number", extra);
    }
    Ok(z)
}

/// Read a complex number in the algebraic forms, with the given symbols.
///
/// `None` is a null-argument error; text that does not match the grammar is a
/// format error.
pub fn to_complex(value: Option<&str>, symbols: &NumberSymbols) -> Result<ComplexNumber, ComplexError> {
    let value = value.ok_or_else(|| ComplexError::NullArgument("value".to_string()))?;
    parse_complex(value, symbols).map_err(|err| {
        debug!("to_complex: rejected {:?}: {}", value, err);
        ComplexError::from(err)
    })
}

impl FromStr for ComplexNumber {
    type Err = ComplexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        to_complex(Some(s), &NumberSymbols::default())
    }
}

impl ComplexNumber {
    /// Read `(re; im)` or `(re)`. Parentheses are optional.
    pub fn parse_delimited(s: &str) -> Result<ComplexNumber, ComplexError> {
        let parts: Vec<&str> = s
            .split(['(', ';', ')'])
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();
        let number = |p: &str| {
            p.parse::<f64>().map_err(|_| {
                debug!("parse_delimited: rejected {:?}", s);
                ComplexError::Format(format!("'{}' is not a number", p))
            })
        };
        match parts.as_slice() {
            &[re] => Ok(ComplexNumber::new(number(re)?, 0.0)),
            &[re, im] => Ok(ComplexNumber::new(number(re)?, number(im)?)),
            _ => {
                debug!("parse_delimited: rejected {:?}", s);
                Err(ComplexError::Format(format!(
                    "expected one or two parts, got {} in '{}'",
                    parts.len(),
                    s
                )))
            }
        }
    }
}

#[cfg(test)]
mod parse_tests {
    use super::*;

    fn parse(s: &str) -> ComplexNumber {
        s.parse::<ComplexNumber>().unwrap()
    }

    #[test]
    fn test_tokenize() {
        let symbols = NumberSymbols::default();
        let keywords = [
            symbols.list_separator.as_str(),
            symbols.nan.as_str(),
            symbols.negative_infinity.as_str(),
            symbols.positive_infinity.as_str(),
            "+",
            "-",
            "i",
        ];
        let mut tokens = Vec::new();
        tokenize(" 1.5e-3 + -Infinity i ", &keywords, &mut tokens);
        assert_eq!(tokens, vec!["1.5e", "-", "3", "+", "-Infinity", "i"]);
    }

    #[test]
    fn test_single_part() {
        assert_eq!(parse("3.5"), ComplexNumber::new(3.5, 0.0));
        assert_eq!(parse("  -2 "), ComplexNumber::new(-2.0, 0.0));
        assert_eq!(parse("4i"), ComplexNumber::new(0.0, 4.0));
        assert_eq!(parse("-i"), ComplexNumber::new(0.0, -1.0));
        assert_eq!(parse("j"), ComplexNumber::new(0.0, 1.0));
        assert_eq!(parse("I2"), ComplexNumber::new(0.0, 2.0));
        assert_eq!(parse("(7)"), ComplexNumber::new(7.0, 0.0));
    }

    #[test]
    fn test_sum_forms() {
        assert_eq!(parse("1.2-4.1i"), ComplexNumber::new(1.2, -4.1));
        assert_eq!(parse("(3.4 + 2.3j)"), ComplexNumber::new(3.4, 2.3));
        assert_eq!(parse("2.3i+3.4"), ComplexNumber::new(3.4, 2.3));
        assert_eq!(parse("-i - 5"), ComplexNumber::new(-5.0, -1.0));
        assert_eq!(parse("5+i"), ComplexNumber::new(5.0, 1.0));
        assert_eq!(parse("1e-7+2.5E+3i"), ComplexNumber::new(1e-7, 2500.0));
    }

    #[test]
    fn test_list_forms() {
        assert_eq!(parse("1, 2"), ComplexNumber::new(1.0, 2.0));
        assert_eq!(parse("(1, -2i)"), ComplexNumber::new(1.0, -2.0));
        let z = parse("NaN, -Infinity");
        assert!(z.re().is_nan());
        assert_eq!(z.im(), f64::NEG_INFINITY);
        assert_eq!(parse("Infinity").re(), f64::INFINITY);
    }

    #[test]
    fn test_custom_symbols() {
        let symbols = NumberSymbols {
            list_separator: ";".to_string(),
            decimal_separator: ",".to_string(),
            ..NumberSymbols::default()
        };
        assert_eq!(
            to_complex(Some("1,5; -2,25"), &symbols),
            Ok(ComplexNumber::new(1.5, -2.25))
        );
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            to_complex(None, &NumberSymbols::default()),
            Err(ComplexError::NullArgument(_))
        ));
        for bad in [
            "", "   ", "(1+2i", "1+", "i2i", "1+2", "2i+3i", "2i, 3", "1 2", "1+2i 3", "abc",
            "1e",
        ] {
            assert!(
                matches!(bad.parse::<ComplexNumber>(), Err(ComplexError::Format(_))),
                "{:?} should not parse",
                bad
            );
        }
    }

    #[test]
    fn test_parse_delimited() {
        assert_eq!(
            ComplexNumber::parse_delimited("(-3.45; -5.23)"),
            Ok(ComplexNumber::new(-3.45, -5.23))
        );
        assert_eq!(
            ComplexNumber::parse_delimited("(8)"),
            Ok(ComplexNumber::new(8.0, 0.0))
        );
        assert_eq!(
            ComplexNumber::parse_delimited("1;2"),
            Ok(ComplexNumber::new(1.0, 2.0))
        );
        assert!(ComplexNumber::parse_delimited("()").is_err());
        assert!(ComplexNumber::parse_delimited("(1; 2; 3)").is_err());
        assert!(ComplexNumber::parse_delimited("(x; 2)").is_err());
    }
}
