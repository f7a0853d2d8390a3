use simple_error::SimpleError;
use std::fmt;

/// Errors raised at the text, cast, domain and configuration boundaries.
///
/// The numeric core never returns these: overflow, poles and invalid
/// operations propagate as IEEE infinities and NaN.
#[derive(Debug, Clone, PartialEq)]
pub enum ComplexError {
    Format(String),
    NullArgument(String),
    Cast(String),
    Domain(String),
    Config(String),
}

impl fmt::Display for ComplexError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ComplexError::Format(msg) => write!(f, "Invalid complex number format: {}", msg),
            ComplexError::NullArgument(name) => write!(f, "Argument is absent: {}", name),
            ComplexError::Cast(msg) => write!(f, "Invalid cast to complex number: {}", msg),
            ComplexError::Domain(msg) => write!(f, "Argument out of domain: {}", msg),
            ComplexError::Config(msg) => write!(f, "Invalid format options: {}", msg),
        }
    }
}

impl std::error::Error for ComplexError {}

impl From<SimpleError> for ComplexError {
    fn from(err: SimpleError) -> Self {
        ComplexError::Format(err.as_str().to_string())
    }
}
