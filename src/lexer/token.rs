use super::position::TextPosition;
use serde::{Deserialize, Serialize};

/// A single token from the source code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Accepted source characters, without quotes or brackets
    pub text: String,
    /// Where the token starts
    pub position: TextPosition,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(kind: TokenKind, text: impl Into<String>, position: TextPosition) -> Self {
        Token {
            kind,
            text: text.into(),
            position,
        }
    }

    /// Line number where the token starts (1-indexed)
    pub fn line(&self) -> usize {
        self.position.line
    }

    /// Column number where the token starts (1-indexed)
    pub fn column(&self) -> usize {
        self.position.column
    }
}

/// All possible token types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    /// No more input
    Empty,
    /// Lexical failure; carries the diagnostic
    LexError(String),
    /// String literal (quotes excluded from the text)
    String,
    /// Symbol, including the reserved words `nil`, `true` and `false`
    Symbol,
    /// Integer literal
    Integer,
    /// Floating-point literal
    Float,
    /// Opening parenthesis `(`
    BlockStart,
    /// Closing parenthesis `)`
    BlockEnd,
}

impl TokenKind {
    /// `Empty` and `LexError` end a token stream
    pub fn is_terminal(&self) -> bool {
        matches!(self, TokenKind::Empty | TokenKind::LexError(_))
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TokenKind::Empty => write!(f, "end of input"),
            TokenKind::LexError(message) => write!(f, "error: {}", message),
            TokenKind::String => write!(f, "string"),
            TokenKind::Symbol => write!(f, "symbol"),
            TokenKind::Integer => write!(f, "integer"),
            TokenKind::Float => write!(f, "float"),
            TokenKind::BlockStart => write!(f, "'('"),
            TokenKind::BlockEnd => write!(f, "')'"),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.kind {
            TokenKind::String => write!(f, "{} \"{}\" at {}", self.kind, self.text, self.position),
            TokenKind::Symbol | TokenKind::Integer | TokenKind::Float => {
                write!(f, "{} {} at {}", self.kind, self.text, self.position)
            }
            _ => write!(f, "{} at {}", self.kind, self.position),
        }
    }
}
