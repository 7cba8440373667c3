use crate::core::error::{Error, ErrorKind, Result};
use crate::query::ast::Query;
use crate::query::lexer::tokenize;
use crate::query::token::{Token, TokenKind};

/// Query parser for converting search strings to a `Query` AST.
///
/// Recursive descent over the grammar, lowest to highest precedence:
///
/// ```text
/// expr     := or_expr
/// or_expr  := and_expr (OR and_expr)*
/// and_expr := not_expr (AND? not_expr)*    // juxtaposition = implicit AND
/// not_expr := NOT? primary
/// primary  := field | phrase | word | '(' expr ')'
/// ```
///
/// Examples:
/// - `tag:abcd` -> field filter
/// - `"Birthday"` -> phrase
/// - `tag:abcd "Birthday"` -> implicit AND
/// - `a OR b AND c` -> OR(a, AND(b, c))
///
/// Parsing is a pure function of the input: no state outlives a call and
/// concurrent callers need no coordination.
#[derive(Debug, Default)]
pub struct QueryParser;

impl QueryParser {
    pub fn new() -> Self {
        QueryParser
    }

    /// Parse a query string into a `Query` AST.
    ///
    /// Whitespace-only input (including the empty string) yields
    /// `Query::MatchAll`, which callers treat as "no filter". Malformed
    /// input yields a typed error with the offending byte offset; no
    /// partial AST is ever returned.
    pub fn parse(&self, input: &str) -> Result<Query> {
        let tokens = tokenize(input)?;
        let mut cursor = Cursor { tokens: &tokens, pos: 0 };

        if cursor.peek().kind == TokenKind::End {
            return Ok(Query::MatchAll);
        }

        let query = cursor.parse_or()?;
        match cursor.peek().kind {
            TokenKind::End => Ok(query),
            TokenKind::RParen => Err(Error::new(
                ErrorKind::UnmatchedParen,
                "')' without a matching '('".to_string(),
                cursor.peek().offset,
            )),
            _ => Err(Error::new(
                ErrorKind::MissingOperand,
                "unexpected token after the end of the query".to_string(),
                cursor.peek().offset,
            )),
        }
    }
}

/// Convenience wrapper for one-off parses.
pub fn parse_search_query(input: &str) -> Result<Query> {
    QueryParser::new().parse(input)
}

struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

/// Tokens that can start a `not_expr` (and therefore an operand).
fn starts_operand(kind: &TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Word(_)
            | TokenKind::Phrase(_)
            | TokenKind::Field { .. }
            | TokenKind::LParen
            | TokenKind::Not
    )
}

impl<'a> Cursor<'a> {
    /// The lexer always terminates the stream with `End`, which is never
    /// consumed, so the current position stays in bounds.
    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn parse_or(&mut self) -> Result<Query> {
        let mut left = self.parse_and()?;
        while self.peek().kind == TokenKind::Or {
            let op_offset = self.peek().offset;
            self.advance();
            if !starts_operand(&self.peek().kind) {
                return Err(Error::new(
                    ErrorKind::DanglingOperator,
                    "'OR' is missing its right operand".to_string(),
                    op_offset,
                ));
            }
            let right = self.parse_and()?;
            left = Query::or(left, right);
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Query> {
        let mut left = self.parse_not()?;
        loop {
            if self.peek().kind == TokenKind::And {
                let op_offset = self.peek().offset;
                self.advance();
                if !starts_operand(&self.peek().kind) {
                    return Err(Error::new(
                        ErrorKind::DanglingOperator,
                        "'AND' is missing its right operand".to_string(),
                        op_offset,
                    ));
                }
                let right = self.parse_not()?;
                left = Query::and(left, right);
            } else if starts_operand(&self.peek().kind) {
                // Two adjacent operands with no operator: implicit AND.
                let right = self.parse_not()?;
                left = Query::and(left, right);
            } else {
                break;
            }
        }
        Ok(left)
    }

    fn parse_not(&mut self) -> Result<Query> {
        if self.peek().kind == TokenKind::Not {
            let op_offset = self.peek().offset;
            self.advance();
            match self.peek().kind {
                TokenKind::Word(_)
                | TokenKind::Phrase(_)
                | TokenKind::Field { .. }
                | TokenKind::LParen => Ok(Query::not(self.parse_primary()?)),
                _ => Err(Error::new(
                    ErrorKind::DanglingOperator,
                    "'NOT' is missing its operand".to_string(),
                    op_offset,
                )),
            }
        } else {
            self.parse_primary()
        }
    }

    fn parse_primary(&mut self) -> Result<Query> {
        let token = self.peek().clone();
        match token.kind {
            TokenKind::Word(text) => {
                self.advance();
                Ok(Query::term(text))
            }
            TokenKind::Phrase(text) => {
                self.advance();
                Ok(Query::phrase(text))
            }
            TokenKind::Field { key, value } => {
                self.advance();
                Ok(Query::field(key, value))
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_or()?;
                if self.peek().kind == TokenKind::RParen {
                    self.advance();
                    Ok(inner)
                } else {
                    Err(Error::new(
                        ErrorKind::UnmatchedParen,
                        "'(' is never closed".to_string(),
                        token.offset,
                    ))
                }
            }
            _ => Err(Error::new(
                ErrorKind::MissingOperand,
                "expected a term, phrase, field or group here".to_string(),
                token.offset,
            )),
        }
    }
}
