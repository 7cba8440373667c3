use crate::query::ast::Query;

/// Binding strength, used to decide where parentheses are required when
/// printing. Mirrors the parser: NOT > AND > OR; primaries never need
/// grouping.
fn precedence(query: &Query) -> u8 {
    match query {
        Query::Or(_, _) => 1,
        Query::And(_, _) => 2,
        Query::Not(_) => 3,
        Query::Term(_) | Query::Phrase(_) | Query::Field(_) | Query::MatchAll => 4,
    }
}

impl Query {
    /// Render the AST back to query surface syntax.
    ///
    /// Re-parsing the result yields a structurally identical AST. Explicit
    /// `AND` is always emitted; binary operators are printed
    /// left-associative, so only right children of equal precedence need
    /// grouping. `MatchAll` renders as the empty string.
    pub fn to_query_string(&self) -> String {
        let mut out = String::new();
        render(self, &mut out);
        out
    }
}

fn render(query: &Query, out: &mut String) {
    match query {
        Query::MatchAll => {}
        Query::Term(term) => out.push_str(&term.value),
        Query::Phrase(phrase) => render_quoted(&phrase.phrase, out),
        Query::Field(field) => {
            out.push_str(&field.key);
            out.push(':');
            if needs_quoting(&field.value) {
                render_quoted(&field.value, out);
            } else {
                out.push_str(&field.value);
            }
        }
        Query::Not(child) => {
            out.push_str("NOT ");
            render_child(child, 4, out);
        }
        Query::And(left, right) => {
            render_child(left, 2, out);
            out.push_str(" AND ");
            render_child(right, 3, out);
        }
        Query::Or(left, right) => {
            render_child(left, 1, out);
            out.push_str(" OR ");
            render_child(right, 2, out);
        }
    }
}

fn render_child(child: &Query, min_precedence: u8, out: &mut String) {
    if precedence(child) < min_precedence {
        out.push('(');
        render(child, out);
        out.push(')');
    } else {
        render(child, out);
    }
}

/// A bare field value must re-lex as a single word; anything that would
/// end or open a token forces quoting.
fn needs_quoting(value: &str) -> bool {
    value.is_empty()
        || value
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '(' | ')' | '"'))
}

fn render_quoted(text: &str, out: &mut String) {
    out.push('"');
    for c in text.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::parser::parse_search_query;

    fn roundtrip(input: &str) {
        let parsed = parse_search_query(input).unwrap();
        let printed = parsed.to_query_string();
        assert_eq!(
            parse_search_query(&printed).unwrap(),
            parsed,
            "printed form {:?} did not re-parse to the same tree",
            printed
        );
    }

    #[test]
    fn prints_expected_surface_syntax() {
        let cases = [
            ("tag:abcd", "tag:abcd"),
            ("\"Birthday\"", "\"Birthday\""),
            ("tag:abcd \"Birthday\"", "tag:abcd AND \"Birthday\""),
            ("NOT tag:abcd", "NOT tag:abcd"),
            ("a OR b AND c", "a OR b AND c"),
            ("(a OR b) AND c", "(a OR b) AND c"),
            ("tag:\"multi word\"", "tag:\"multi word\""),
            ("NOT (a OR b)", "NOT (a OR b)"),
        ];
        for (input, expected) in cases {
            assert_eq!(
                parse_search_query(input).unwrap().to_query_string(),
                expected
            );
        }
    }

    #[test]
    fn match_all_prints_empty() {
        assert_eq!(Query::MatchAll.to_query_string(), "");
    }

    #[test]
    fn escapes_survive_the_round_trip() {
        roundtrip(r#""say \"hi\" \\ there""#);
        roundtrip(r#"place:"Cafe \"Luna\"""#);
    }

    #[test]
    fn parsed_queries_round_trip() {
        for input in [
            "a b c",
            "a OR b OR c",
            "NOT a AND NOT b",
            "tag:food (city:hanoi OR city:hue) NOT \"rainy day\"",
            "a AND (b OR NOT c)",
        ] {
            roundtrip(input);
        }
    }

    #[test]
    fn constructed_right_nested_and_keeps_structure() {
        // Right child of an AND at the same precedence must be grouped or
        // the reparse would rebuild it left-associative.
        let query = Query::and(
            Query::term("a"),
            Query::and(Query::term("b"), Query::term("c")),
        );
        let printed = query.to_query_string();
        assert_eq!(printed, "a AND (b AND c)");
        assert_eq!(parse_search_query(&printed).unwrap(), query);
    }
}
