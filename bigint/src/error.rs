use thiserror::Error;

/// Why a textual literal was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("no digits")]
    Empty,
    #[error("invalid digit")]
    InvalidDigit,
}

/// Errors from BigInt operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BigIntError {
    #[error("BigInt division by zero")]
    DivisionByZero,
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A narrowing conversion whose target cannot hold the value.
    #[error("value does not fit in {target}")]
    Overflow { target: &'static str },
    #[error("cannot parse BigInt: {0}")]
    Format(ParseErrorKind),
    /// A required input was absent.
    #[error("missing required argument `{0}`")]
    NullArgument(&'static str),
}

impl From<ParseErrorKind> for BigIntError {
    fn from(kind: ParseErrorKind) -> Self {
        BigIntError::Format(kind)
    }
}
