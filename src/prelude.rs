//! complexn prelude.
//!
//! This module contains the most used types, traits and functions that you
//! can import easily as a group.
//!
//! ```
//! use complexn::prelude::*;
//!
//! let z: ComplexNumber = "1.2-4.1i".parse().unwrap();
//! assert_eq!(z, ComplexNumber::new(1.2, -4.1));
//! ```

#[doc(no_inline)]
pub use crate::complex::{stable_hypot, ComplexNumber};

#[doc(no_inline)]
pub use crate::error::ComplexError;

#[doc(no_inline)]
pub use crate::format::{FormatOptions, FormatOptionsBuilder};
#[doc(no_inline)]
pub use crate::parse::{to_complex, NumberSymbols};

#[doc(no_inline)]
pub use crate::real::RealOrComplex;

#[doc(no_inline)]
pub use crate::consts::ACCURACY;
