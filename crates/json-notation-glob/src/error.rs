//! Error types for glob parsing and normalization.

use thiserror::Error;

/// Why a glob string was rejected by the tokenizer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidReason {
    #[error("empty glob")]
    Empty,
    #[error("negation marker without a path")]
    BareNegation,
    #[error("unexpected character '{0}' at offset {1}")]
    UnexpectedChar(char, usize),
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("a dot cannot precede a bracket (offset {0})")]
    DotBeforeBracket(usize),
    #[error("empty brackets at offset {0}")]
    EmptyBrackets(usize),
    #[error("unclosed bracket at offset {0}")]
    UnclosedBracket(usize),
    #[error("unclosed quote at offset {0}")]
    UnclosedQuote(usize),
    #[error("array index out of range at offset {0}")]
    IndexOverflow(usize),
}

/// Errors produced while parsing or normalizing globs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GlobError {
    #[error("invalid glob notation '{pattern}': {reason}")]
    InvalidPattern {
        pattern: String,
        reason: InvalidReason,
    },
    /// The source cannot be both an object and an array at its root.
    #[error("integrity failed: cannot mix object ('{object}') and array ('{array}') notations at the root level")]
    RootShapeConflict { object: String, array: String },
    #[error("glob normalization did not converge after {rounds} rounds")]
    Diverged { rounds: usize },
}

impl GlobError {
    pub(crate) fn invalid(pattern: &str, reason: InvalidReason) -> Self {
        GlobError::InvalidPattern {
            pattern: pattern.to_string(),
            reason,
        }
    }
}
