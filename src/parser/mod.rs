//! Parser Module
//!
//! Builds expression trees from the scanner's token stream.

mod ast;
mod sexpr_parser;

pub use ast::{Atom, Expression};
pub use sexpr_parser::{ParserConfig, ParserState, SExprParser};
