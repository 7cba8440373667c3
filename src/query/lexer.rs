use crate::core::error::{Error, ErrorKind, Result};
use crate::query::token::{Token, TokenKind};

/// Split a raw search query into tokens.
///
/// Single forward pass, left to right; whitespace separates tokens and is
/// never itself a token. The returned sequence always ends with
/// `TokenKind::End` at the input's length.
///
/// - `"..."` is a phrase; `\"` and `\\` are the only escapes, any other
///   `\x` passes through unchanged.
/// - `key:value` (identifier immediately followed by `:`) is a field
///   filter; the value is a bare word or a quoted phrase.
/// - `(` and `)` are single-character tokens even when glued to others.
/// - A bare word equal to `and`, `or` or `not` (any case) becomes the
///   corresponding operator token. Field values and phrase contents are
///   opaque, so `tag:and` keeps `and` as a literal value.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    let chars: Vec<(usize, char)> = input.char_indices().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let (offset, c) = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        match c {
            '(' => {
                tokens.push(Token::new(TokenKind::LParen, offset));
                i += 1;
            }
            ')' => {
                tokens.push(Token::new(TokenKind::RParen, offset));
                i += 1;
            }
            '"' => {
                let (text, next) = scan_phrase(&chars, i)?;
                tokens.push(Token::new(TokenKind::Phrase(text), offset));
                i = next;
            }
            _ => {
                i = scan_word_or_field(&chars, i, &mut tokens)?;
            }
        }
    }

    tokens.push(Token::new(TokenKind::End, input.len()));
    Ok(tokens)
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Characters that end a bare word (and a bare field value).
fn ends_word(c: char) -> bool {
    c.is_whitespace() || matches!(c, '(' | ')' | '"')
}

/// Scan a token starting at a non-special character: either a
/// `key:value` field filter or a bare word (possibly reclassified as a
/// boolean operator). Returns the index of the first unconsumed char.
fn scan_word_or_field(
    chars: &[(usize, char)],
    start: usize,
    tokens: &mut Vec<Token>,
) -> Result<usize> {
    let offset = chars[start].0;

    // Field filter: identifier run immediately followed by ':'.
    let mut j = start;
    while j < chars.len() && is_ident_char(chars[j].1) {
        j += 1;
    }
    if j > start && j < chars.len() && chars[j].1 == ':' {
        let key: String = chars[start..j].iter().map(|&(_, ch)| ch).collect();
        let colon_offset = chars[j].0;
        let mut k = j + 1;

        if k >= chars.len() || chars[k].1.is_whitespace() || matches!(chars[k].1, '(' | ')') {
            return Err(Error::new(
                ErrorKind::EmptyFieldValue,
                format!("field '{}' has no value", key),
                colon_offset,
            ));
        }

        let value = if chars[k].1 == '"' {
            let (text, next) = scan_phrase(chars, k)?;
            k = next;
            text
        } else {
            let value_start = k;
            while k < chars.len() && !ends_word(chars[k].1) {
                k += 1;
            }
            chars[value_start..k].iter().map(|&(_, ch)| ch).collect()
        };

        tokens.push(Token::new(TokenKind::Field { key, value }, offset));
        return Ok(k);
    }

    // Bare word: maximal run of non-whitespace, non-paren, non-quote chars.
    let mut k = start;
    while k < chars.len() && !ends_word(chars[k].1) {
        k += 1;
    }
    let text: String = chars[start..k].iter().map(|&(_, ch)| ch).collect();

    let kind = if text.eq_ignore_ascii_case("and") {
        TokenKind::And
    } else if text.eq_ignore_ascii_case("or") {
        TokenKind::Or
    } else if text.eq_ignore_ascii_case("not") {
        TokenKind::Not
    } else {
        TokenKind::Word(text)
    };

    tokens.push(Token::new(kind, offset));
    Ok(k)
}

/// Scan a double-quoted phrase starting at the opening quote.
/// Returns the unescaped contents and the index just past the closing
/// quote. A missing closing quote reports the opening quote's offset.
fn scan_phrase(chars: &[(usize, char)], start: usize) -> Result<(String, usize)> {
    let quote_offset = chars[start].0;
    let mut text = String::new();
    let mut i = start + 1;

    while i < chars.len() {
        match chars[i].1 {
            '"' => return Ok((text, i + 1)),
            '\\' => {
                let Some(&(_, next)) = chars.get(i + 1) else {
                    // Trailing backslash, the quote can never close.
                    break;
                };
                match next {
                    '"' | '\\' => text.push(next),
                    other => {
                        text.push('\\');
                        text.push(other);
                    }
                }
                i += 2;
            }
            other => {
                text.push(other);
                i += 1;
            }
        }
    }

    Err(Error::new(
        ErrorKind::UnterminatedString,
        "quote opened but never closed".to_string(),
        quote_offset,
    ))
}
