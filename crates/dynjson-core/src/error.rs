//! Error types for parsing and accessing JSON values.

use crate::value::Kind;
use thiserror::Error;

/// Errors raised by the parser and the accessor layer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum JsonError {
    /// The input text was not valid JSON.
    /// `offset` is a byte offset; `line` and `column` are 1-based.
    #[error("JSON parse error at line {line}, column {column}: {kind}")]
    Parse {
        kind: ParseErrorKind,
        offset: usize,
        line: usize,
        column: usize,
    },

    /// An access or coercion needed a kind the value does not have.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: &'static str, found: Kind },

    /// Read access to an object key that is not present.
    #[error("key not found: {0:?}")]
    KeyNotFound(String),

    /// Read access past the end of an array.
    #[error("index {index} out of range for array of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Why the parser rejected its input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("unexpected end of input")]
    UnexpectedEnd,

    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),

    #[error("invalid literal, expected `{0}`")]
    InvalidLiteral(&'static str),

    #[error("invalid number")]
    InvalidNumber,

    #[error("number out of range")]
    NumberOutOfRange,

    #[error("invalid escape sequence `\\{0}`")]
    InvalidEscape(char),

    #[error("invalid \\u escape")]
    InvalidUnicodeEscape,

    #[error("unpaired surrogate in \\u escape")]
    LoneSurrogate,

    #[error("control character U+{0:04X} in string")]
    ControlCharacter(u32),

    #[error("expected `:` after object key")]
    ExpectedColon,

    #[error("expected `,` or `{0}`")]
    ExpectedCommaOrEnd(char),

    #[error("expected string key")]
    ExpectedKey,

    #[error("trailing characters after value")]
    TrailingCharacters,

    #[error("nesting deeper than {0} levels")]
    NestingTooDeep(usize),
}

/// Coarse classification of a [`JsonError`], for callers that only need to
/// branch on the error family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Parse,
    TypeMismatch,
    KeyNotFound,
    IndexOutOfRange,
}

impl JsonError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            JsonError::Parse { .. } => ErrorCategory::Parse,
            JsonError::TypeMismatch { .. } => ErrorCategory::TypeMismatch,
            JsonError::KeyNotFound(_) => ErrorCategory::KeyNotFound,
            JsonError::IndexOutOfRange { .. } => ErrorCategory::IndexOutOfRange,
        }
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, JsonError::Parse { .. })
    }

    /// Byte offset of a parse failure, `None` for access errors.
    pub fn offset(&self) -> Option<usize> {
        match self {
            JsonError::Parse { offset, .. } => Some(*offset),
            _ => None,
        }
    }

    pub(crate) fn mismatch(expected: &'static str, found: Kind) -> Self {
        JsonError::TypeMismatch { expected, found }
    }
}

/// Convenience alias used throughout dynjson-core.
pub type Result<T> = std::result::Result<T, JsonError>;
