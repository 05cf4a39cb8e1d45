//! Error types for the S-expression reader

use thiserror::Error;

/// Reader errors
///
/// The scanner itself never fails; it reports lexical problems as
/// [`TokenKind::LexError`](crate::TokenKind::LexError) tokens. The parser
/// turns whatever stops it into one of these variants.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Malformed token at the character level
    ///
    /// **Triggered by:** an unterminated string, a bad number continuation or
    /// a character that cannot start any token
    /// **Example:** `"abc` (missing closing quote), `1.2.3`, `#foo`
    #[error("Lexical error at line {line}, column {col}: {message}")]
    LexicalError {
        /// Line number where the offending token starts
        line: usize,
        /// Column number where the offending token starts
        col: usize,
        /// Diagnostic reported by the scanner
        message: String,
    },

    /// Token that cannot begin a valid construct
    ///
    /// **Triggered by:** a stray `)` at top level, or a literal the parser
    /// cannot represent
    /// **Example:** `)`, `99999999999999999999`
    #[error("Syntax error at line {line}, column {col}: {message}")]
    SyntaxError {
        /// Line number where the offending token starts
        line: usize,
        /// Column number where the offending token starts
        col: usize,
        /// Text of the offending token
        token: String,
        /// Error description
        message: String,
    },

    /// Well-formed tokens arranged into an incomplete structure
    ///
    /// **Triggered by:** input ending inside a list, or lists nested deeper
    /// than [`ParserConfig::max_depth`](crate::ParserConfig)
    /// **Example:** `(1 2`
    #[error("Structural error at line {line}, column {col}: {message}")]
    StructuralError {
        /// Line number where the structure broke off
        line: usize,
        /// Column number where the structure broke off
        col: usize,
        /// Error description
        message: String,
    },
}

/// Error category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Character-level failure surfaced from the scanner
    Lexical,
    /// Unexpected token
    Syntax,
    /// Incomplete or over-deep structure
    Structural,
}

impl Error {
    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::LexicalError { .. } => ErrorKind::Lexical,
            Error::SyntaxError { .. } => ErrorKind::Syntax,
            Error::StructuralError { .. } => ErrorKind::Structural,
        }
    }

    /// Line (1-indexed) the error points at
    pub fn line(&self) -> usize {
        match self {
            Error::LexicalError { line, .. }
            | Error::SyntaxError { line, .. }
            | Error::StructuralError { line, .. } => *line,
        }
    }

    /// Column (1-indexed) the error points at
    pub fn column(&self) -> usize {
        match self {
            Error::LexicalError { col, .. }
            | Error::SyntaxError { col, .. }
            | Error::StructuralError { col, .. } => *col,
        }
    }

    /// Bare diagnostic message, without the location prefix
    pub fn message(&self) -> &str {
        match self {
            Error::LexicalError { message, .. }
            | Error::SyntaxError { message, .. }
            | Error::StructuralError { message, .. } => message,
        }
    }
}

/// Result type for reader operations
pub type Result<T> = std::result::Result<T, Error>;
