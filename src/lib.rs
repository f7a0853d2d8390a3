//! Double-precision complex numbers with elementary and special functions.
//!
//! ```
//! use complexn::prelude::*;
//!
//! let z = ComplexNumber::new(3.0, 4.0);
//! assert_eq!(z.magnitude(), 5.0);
//! assert_eq!(z.to_string_with("I", &FormatOptions::default()), "3+4i");
//! ```
pub mod complex;
pub mod consts;
pub mod error;
pub mod format;
pub mod parse;
pub mod prelude;
pub mod real;
pub mod util;
