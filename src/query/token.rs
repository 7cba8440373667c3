use serde::{Serialize, Deserialize};

/// Token representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte offset in the original query where the token starts.
    pub offset: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    /// Bare unquoted term.
    Word(String),
    /// Contents of a double-quoted string, escapes already resolved.
    Phrase(String),
    /// A `key:value` filter; value quotes stripped, escapes resolved.
    Field { key: String, value: String },
    And,
    Or,
    Not,
    LParen,
    RParen,
    /// Sentinel marking input exhaustion.
    End,
}

impl Token {
    pub fn new(kind: TokenKind, offset: usize) -> Self {
        Token { kind, offset }
    }
}
