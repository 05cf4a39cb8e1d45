//! Property-based fuzzing tests for the scanner and parser
//!
//! These tests use proptest to generate random inputs and verify that:
//! 1. Neither the scanner nor the parser panics on arbitrary input
//! 2. Number and symbol text survives scanning verbatim
//! 3. Generated trees read back to the same structure

use proptest::prelude::*;
use sexpr_reader::{parse, Expression, Lexer, Parser, TokenKind};

// =============================================================================
// STRATEGY GENERATORS
// =============================================================================

/// Generate random strings that might break parsers
fn arbitrary_source_string() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[\x00-\x7F]{0,300}").unwrap()
}

/// Generate S-expression-like token soup, balanced or not
fn sexp_like_string() -> impl Strategy<Value = String> {
    prop::collection::vec(sexp_token(), 0..50).prop_map(|tokens| tokens.join(" "))
}

fn sexp_token() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("(".to_string()),
        Just(")".to_string()),
        Just(",".to_string()),
        Just("nil".to_string()),
        Just("true".to_string()),
        Just("false".to_string()),
        Just("+".to_string()),
        Just("-".to_string()),
        Just(".".to_string()),
        (-1000i64..1000i64).prop_map(|n| n.to_string()),
        (0.0f64..100.0f64).prop_map(|f| format!("{:.2}", f)),
        r#""[a-zA-Z0-9 ]{0,20}""#,
        "[a-z][a-z0-9_]{0,10}",
        ";[^\n]{0,20}\n",
    ]
}

/// Symbols that never collide with numbers or reserved words
fn symbol_text() -> impl Strategy<Value = String> {
    "[a-z_?!*<>=/$%&][a-z0-9_?!*<>=/$%&#-]{0,12}"
        .prop_filter("reserved word", |s| !matches!(s.as_str(), "nil" | "true" | "false"))
}

/// Trees of atoms whose printed form is unambiguous, paired with that form
fn expression_with_source() -> impl Strategy<Value = (Expression, String)> {
    let leaf = prop_oneof![
        any::<i64>().prop_map(|n| (Expression::integer(n), n.to_string())),
        symbol_text().prop_map(|s| (Expression::symbol(s.clone()), s)),
        "[a-zA-Z0-9 ,;()]{0,12}".prop_map(|s| (Expression::string(s.clone()), format!("\"{}\"", s))),
        any::<bool>().prop_map(|b| (Expression::boolean(b), b.to_string())),
        Just((Expression::nil(), "nil".to_string())),
    ];

    leaf.prop_recursive(4, 64, 8, |inner| {
        (prop::collection::vec(inner, 0..8), prop::bool::ANY).prop_map(|(items, commas)| {
            let separator = if commas { ", " } else { "\n  " };
            let source = format!(
                "({})",
                items
                    .iter()
                    .map(|(_, s)| s.as_str())
                    .collect::<Vec<_>>()
                    .join(separator)
            );
            let tree = Expression::list(items.into_iter().map(|(e, _)| e));
            (tree, source)
        })
    })
}

// =============================================================================
// SCANNER PROPERTIES
// =============================================================================

proptest! {
    /// The scanner never panics and always ends with exactly one terminal token
    #[test]
    fn lexer_never_panics(source in arbitrary_source_string()) {
        let tokens = Lexer::new(&source).tokenize();
        prop_assert!(!tokens.is_empty());
        let terminal_count = tokens.iter().filter(|t| t.kind.is_terminal()).count();
        prop_assert_eq!(terminal_count, 1);
        prop_assert!(tokens.last().unwrap().kind.is_terminal());
    }

    /// Integer text is kept verbatim, including sign and leading zeros
    #[test]
    fn integers_are_verbatim(text in "[+-]?[0-9]{1,25}") {
        let tokens = Lexer::new(&text).tokenize();
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(&tokens[0].kind, &TokenKind::Integer);
        prop_assert_eq!(&tokens[0].text, &text);
    }

    /// A decimal point or an exponent marker always makes a float
    #[test]
    fn floats_are_classified(text in "[+-]?[0-9]{1,6}(\\.[0-9]{1,6})?([eE][+-]?[0-9]{0,3})?") {
        let tokens = Lexer::new(&text).tokenize();
        let expected = if text.contains(|c: char| matches!(c, '.' | 'e' | 'E')) {
            TokenKind::Float
        } else {
            TokenKind::Integer
        };
        prop_assert_eq!(&tokens[0].kind, &expected);
        prop_assert_eq!(&tokens[0].text, &text);
    }

    /// Separators never leak into token text
    #[test]
    fn separators_never_appear_in_text(source in sexp_like_string()) {
        for token in Lexer::new(&source).tokenize() {
            if matches!(token.kind, TokenKind::Symbol | TokenKind::Integer | TokenKind::Float) {
                prop_assert!(!token.text.contains(|c: char| matches!(c, ' ' | '\t' | '\n' | ',' | ';')));
            }
        }
    }
}

// =============================================================================
// PARSER PROPERTIES
// =============================================================================

proptest! {
    /// The parser never panics, whatever the input
    #[test]
    fn parser_never_panics(source in arbitrary_source_string()) {
        let _ = Parser::new(&source).read_all();
    }

    #[test]
    fn parser_handles_sexp_like(source in sexp_like_string()) {
        let _ = Parser::new(&source).read_all();
    }

    /// Unbalanced parentheses are reported, never panicked on
    #[test]
    fn parser_handles_unbalanced_parens(opens in 0usize..50, closes in 0usize..50) {
        let source = format!("{}1{}", "(".repeat(opens), ")".repeat(closes));
        let result = Parser::new(&source).read_all();
        prop_assert_eq!(result.is_ok(), opens == closes);
    }

    /// Printed trees read back to the same structure
    #[test]
    fn generated_trees_read_back((tree, source) in expression_with_source()) {
        prop_assert_eq!(parse(&source).unwrap(), Some(tree));
    }

    /// Comma and whitespace separate list items the same way
    #[test]
    fn commas_equal_spaces(numbers in prop::collection::vec(any::<i64>(), 0..20)) {
        let texts: Vec<String> = numbers.iter().map(|n| n.to_string()).collect();
        let with_commas = parse(&format!("({})", texts.join(","))).unwrap();
        let with_spaces = parse(&format!("({})", texts.join(" "))).unwrap();
        prop_assert_eq!(&with_commas, &with_spaces);
        prop_assert_eq!(
            with_commas,
            Some(Expression::list(numbers.into_iter().map(Expression::integer)))
        );
    }

    /// Every top-level form is read once, in order, then the parser is done
    #[test]
    fn sequential_reads_preserve_order(numbers in prop::collection::vec(any::<i64>(), 0..20)) {
        let source = numbers
            .iter()
            .map(|n| format!("{} ; c\n", n))
            .collect::<String>();
        let mut parser = Parser::new(&source);
        for n in &numbers {
            prop_assert_eq!(parser.read().unwrap(), Some(Expression::integer(*n)));
        }
        prop_assert_eq!(parser.read().unwrap(), None);
    }
}

// =============================================================================
// SPECIFIC REGRESSION TESTS
// =============================================================================

#[test]
fn regression_null_bytes() {
    let err = parse("(\0 + 1 2)").unwrap_err();
    assert_eq!(err.message(), "unexpected character '\0'");
}

#[test]
fn regression_very_long_number() {
    let source = format!("(+ 1 {})", "9".repeat(1000));
    // Lexically an integer, but it does not fit in 64 bits
    assert!(parse(&source).is_err());

    let source = format!("{}.5", "9".repeat(400));
    assert_eq!(parse(&source).unwrap(), Some(Expression::float(f64::INFINITY)));
}

#[test]
fn regression_very_long_string() {
    let long_str = "a".repeat(100_000);
    let source = format!(r#""{}""#, long_str);
    assert_eq!(parse(&source).unwrap(), Some(Expression::string(long_str)));
}

#[test]
fn regression_nesting_beyond_limit() {
    let source = format!("{}{}", "(".repeat(10_000), ")".repeat(10_000));
    assert!(parse(&source).is_err());
}
