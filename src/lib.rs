//! # sexpr-reader - S-expression Reader
//!
//! Turns S-expression source text into an owned, typed expression tree for
//! interpreters, configuration readers and data interchange. The output is
//! plain data: there is no quoting, macro expansion or evaluation.
//!
//! ## Quick Start
//!
//! ```rust
//! use sexpr_reader::{parse, Expression};
//!
//! # fn main() -> sexpr_reader::Result<()> {
//! let expr = parse("(define answer 42)")?;
//!
//! assert_eq!(
//!     expr,
//!     Some(Expression::list(vec![
//!         Expression::symbol("define"),
//!         Expression::symbol("answer"),
//!         Expression::integer(42),
//!     ]))
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ### Several top-level expressions
//!
//! A [`Parser`] reads one expression per call and returns `None` once only
//! whitespace and comments remain:
//!
//! ```rust
//! use sexpr_reader::{Expression, Parser};
//!
//! # fn main() -> sexpr_reader::Result<()> {
//! let mut parser = Parser::new("1 ; one\n(2, 3)");
//!
//! assert_eq!(parser.read()?, Some(Expression::integer(1)));
//! assert_eq!(
//!     parser.read()?,
//!     Some(Expression::list(vec![Expression::integer(2), Expression::integer(3)]))
//! );
//! assert_eq!(parser.read()?, None);
//! # Ok(())
//! # }
//! ```
//!
//! ### Raw tokens
//!
//! Consumers that only need classification and positions (highlighters, for
//! instance) can drive the [`Lexer`] directly. It never fails; problems come
//! back as [`TokenKind::LexError`] tokens.
//!
//! ```rust
//! use sexpr_reader::{Lexer, TokenKind};
//!
//! let tokens = Lexer::new("(+ 1 2.5)").tokenize();
//! let kinds: Vec<TokenKind> = tokens.into_iter().map(|t| t.kind).collect();
//!
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::BlockStart,
//!         TokenKind::Symbol,
//!         TokenKind::Integer,
//!         TokenKind::Float,
//!         TokenKind::BlockEnd,
//!         TokenKind::Empty,
//!     ]
//! );
//! ```
//!
//! ## Grammar
//!
//! - Whitespace: space, tab, newline and comma
//! - Comment: `;` to end of line
//! - Symbol: a letter or one of `.*+!-_?$%&=<>/`, followed by any of those,
//!   digits, `/` or `#`
//! - Integer: optional sign and digits
//! - Float: a number with a fraction (`.` and digits) and/or an exponent
//!   marker (`e`/`E`, optional sign, digits)
//! - String: `"..."`, may span lines; a backslash is kept verbatim and stops
//!   the next character from closing the string
//! - List: `(` expressions `)`
//! - `nil`, `true` and `false` read as [`Atom::Nil`] and [`Atom::Bool`]
//!
//! ## Error Handling
//!
//! ```rust
//! use sexpr_reader::{parse, ErrorKind};
//!
//! let err = parse("(1 2").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Structural);
//! assert_eq!(err.to_string(), "Structural error at line 1, column 5: unfinished list");
//! ```

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;
pub mod parser;

// Re-export main types
pub use error::{Error, ErrorKind, Result};
pub use lexer::{SExprScanner, TextPosition, Token, TokenKind};
pub use parser::{Atom, Expression, ParserConfig, ParserState, SExprParser};

/// Type alias for the S-expression scanner (lexer).
pub type Lexer = SExprScanner;

/// Type alias for the S-expression parser.
pub type Parser = SExprParser;

/// Reads the first expression of `source`
///
/// Returns `Ok(None)` when the source is empty or holds only whitespace and
/// comments. Whatever follows the first expression is not validated.
pub fn parse(source: &str) -> Result<Option<Expression>> {
    SExprParser::new(source).read()
}

/// Reads every top-level expression of `source`
pub fn parse_all(source: &str) -> Result<Vec<Expression>> {
    SExprParser::new(source).read_all()
}
