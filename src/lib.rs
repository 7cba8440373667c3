//! Search query language for journal entries and map pins.
//!
//! Turns a free-form search string into an evaluable filter AST:
//!
//! ```text
//! raw string -> lexer -> tokens -> parser -> Query AST -> matcher
//! ```
//!
//! Query surface syntax:
//!
//! | Syntax                            | Meaning                                      |
//! |-----------------------------------|----------------------------------------------|
//! | `word`                            | free-text term match                         |
//! | `"quoted text"`                   | exact phrase; `\"` and `\\` are the escapes  |
//! | `field:value` / `field:"a b"`     | structured field filter                      |
//! | `a b`                             | implicit AND                                 |
//! | `a AND b`, `a OR b`, `NOT a`      | boolean combinators (case-insensitive)       |
//! | `( ... )`                         | grouping                                     |
//!
//! Precedence, tightest first: `NOT`, then `AND` (explicit or implicit),
//! then `OR`. A blank query parses to [`crate::query::ast::Query::MatchAll`].
//!
//! ```
//! use pinquery::query::parser::parse_search_query;
//! use pinquery::query::ast::Query;
//!
//! let ast = parse_search_query("tag:abcd \"Birthday\"").unwrap();
//! assert_eq!(
//!     ast,
//!     Query::and(Query::field("tag", "abcd"), Query::phrase("Birthday"))
//! );
//! ```
//!
//! Lexing and parsing are pure and synchronous; nothing outlives a call,
//! so any number of threads may parse concurrently. Malformed input is
//! reported as a typed [`crate::core::error::Error`] carrying the byte offset of
//! the offending token, never as a panic and never as a partial AST.

pub mod core;
pub mod query;
