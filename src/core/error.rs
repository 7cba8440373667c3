use std::fmt;

use serde::{Serialize, Deserialize};

/// Failure categories for query lexing and parsing.
///
/// Every malformed query maps to exactly one kind; callers at the API/UI
/// boundary switch on this to decide how to present the problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// A `"` opened a phrase that was never closed.
    UnterminatedString,
    /// A `key:` with no value after the colon.
    EmptyFieldValue,
    /// An `AND`, `OR` or `NOT` with no operand after it.
    DanglingOperator,
    /// A term, phrase, field or group was expected but not found.
    MissingOperand,
    /// An unclosed `(` or a stray `)`.
    UnmatchedParen,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    pub kind: ErrorKind,
    pub context: String,
    /// Byte offset into the original query where the problem was detected,
    /// suitable for underlining the offending token in a UI.
    pub offset: usize,
}

impl Error {
    pub fn new(kind: ErrorKind, context: String, offset: usize) -> Self {
        Error { kind, context, offset }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} at offset {}: {}", self.kind, self.offset, self.context)
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
