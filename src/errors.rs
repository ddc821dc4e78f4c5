use thiserror::Error;

use crate::mode::CmpMode;
use crate::value::Kind;

// Reasons a comparison cannot produce a meaningful answer
#[derive(Debug, Clone, PartialEq, Eq, Error)] // `Error` gives us `Display` from the attributes below
pub enum CompareError {
    // The operand kind has no ordering at all (containers, plain records, null)
    #[error("values of kind `{kind}` cannot be compared")]
    Unsupported { kind: Kind },

    // The kind is comparable, but not under this mode (bool only supports equality)
    #[error("mode `{mode}` is not defined for kind `{kind}`")]
    UnsupportedMode { kind: Kind, mode: CmpMode },

    // Dynamic operands disagree in kind, e.g. an int against a float
    #[error("cannot compare `{left}` with `{right}`")]
    KindMismatch { left: Kind, right: Kind },

    // A mode name, symbol or numeric code that names no mode
    #[error("unknown comparison mode: {0}")]
    UnknownMode(String),
}

// Failure to read a complex literal such as `1.5-2i`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid complex literal: {0:?}")]
pub struct ParseComplexError(pub String);

// Type alias for results that use `CompareError` as the error type
pub type Result<T> = std::result::Result<T, CompareError>;
