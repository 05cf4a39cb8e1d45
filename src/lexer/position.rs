use serde::{Deserialize, Serialize};
use std::fmt;

/// Line/column location in source text, both 1-indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextPosition {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

impl TextPosition {
    /// Position of the first character of a source
    pub fn new() -> Self {
        TextPosition { line: 1, column: 1 }
    }

    /// Moves past `consumed`; `None` (end of input) leaves the position as is
    pub fn advance(&mut self, consumed: Option<char>) {
        match consumed {
            Some('\n') => {
                self.line += 1;
                self.column = 1;
            }
            Some(_) => self.column += 1,
            None => {}
        }
    }
}

impl Default for TextPosition {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TextPosition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
