//! Lexical analysis
//!
//! Converts source text into a stream of tokens, one token per request.

mod position;
mod sexpr_scanner;
mod token;

pub use position::TextPosition;
pub use sexpr_scanner::SExprScanner;
pub use token::{Token, TokenKind};
