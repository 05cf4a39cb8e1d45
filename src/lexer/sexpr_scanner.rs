use super::position::TextPosition;
use super::token::{Token, TokenKind};

/// Scanner for S-expression source text
///
/// Produces one token per request and never fails: lexical problems come
/// back as [`TokenKind::LexError`]. Once a terminal token (`Empty` or
/// `LexError`) has been produced the scanner keeps returning it.
#[derive(Debug, Clone)]
pub struct SExprScanner {
    /// Source code as character vector
    source: Vec<char>,
    /// Index of the next unconsumed character
    current: usize,
    /// Position of the next unconsumed character
    position: TextPosition,
    /// Position where the last token started
    start: TextPosition,
    /// Accepted characters of the last token
    text: String,
    /// Terminal token kind, once reached
    terminal: Option<TokenKind>,
    /// Whether the iterator has already yielded the terminal token
    drained: bool,
}

impl SExprScanner {
    /// Creates a new S-expression scanner from source code
    pub fn new(source: &str) -> Self {
        SExprScanner {
            source: source.chars().collect(),
            current: 0,
            position: TextPosition::new(),
            start: TextPosition::new(),
            text: String::new(),
            terminal: None,
            drained: false,
        }
    }

    /// Consumes and classifies the next token
    ///
    /// The accepted characters stay in an internal buffer, see [`Self::text`].
    pub fn read_token(&mut self) -> TokenKind {
        if let Some(kind) = &self.terminal {
            return kind.clone();
        }

        let kind = self.scan_token();
        if kind.is_terminal() {
            self.terminal = Some(kind.clone());
        }
        kind
    }

    /// Reads the next token together with its text and start position
    pub fn next_token(&mut self) -> Token {
        let kind = self.read_token();
        let token = Token::new(kind, self.text.as_str(), self.start);

        tracing::trace!(
            kind = ?token.kind,
            text = %token.text,
            line = token.line(),
            column = token.column(),
            "scanned token"
        );

        token
    }

    /// Scans every remaining token, up to and including the terminal one
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.kind.is_terminal();
            tokens.push(token);
            if done {
                self.drained = true;
                return tokens;
            }
        }
    }

    /// Text accepted for the most recent token
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Position of the next unconsumed character
    pub fn position(&self) -> TextPosition {
        self.position
    }

    fn scan_token(&mut self) -> TokenKind {
        self.skip_blanks();

        self.start = self.position;
        self.text.clear();

        let Some(c) = self.peek() else {
            return TokenKind::Empty;
        };

        match c {
            '"' => {
                self.skip();
                self.scan_string()
            }

            // A sign directly in front of a digit starts a number
            '+' | '-' => {
                if is_digit(self.peek_next()) {
                    self.accept();
                    self.scan_number(false)
                } else {
                    self.scan_symbol()
                }
            }

            '.' => {
                if is_digit(self.peek_next()) {
                    self.accept();
                    self.scan_number(true)
                } else {
                    self.scan_symbol()
                }
            }

            c if is_symbol_start(c) => self.scan_symbol(),

            c if c.is_ascii_digit() => self.scan_number(false),

            '(' => {
                self.skip();
                TokenKind::BlockStart
            }
            ')' => {
                self.skip();
                TokenKind::BlockEnd
            }

            c => {
                self.skip();
                TokenKind::LexError(format!("unexpected character '{}'", c))
            }
        }
    }

    /// Skips whitespace (space, tab, newline, comma) and `;` line comments
    fn skip_blanks(&mut self) {
        loop {
            match self.peek() {
                Some(' ' | '\t' | '\n' | ',') => {
                    self.skip();
                }
                Some(';') => {
                    while !matches!(self.peek(), None | Some('\n')) {
                        self.skip();
                    }
                }
                _ => return,
            }
        }
    }

    /// Scans a string body; the opening quote is already consumed
    ///
    /// A backslash is kept verbatim and shields the next character, so `\"`
    /// does not close the string.
    fn scan_string(&mut self) -> TokenKind {
        loop {
            match self.peek() {
                None => return unexpected_end_in_string(),
                Some('"') => {
                    self.skip();
                    return TokenKind::String;
                }
                Some('\\') => {
                    self.accept();
                    if self.peek().is_none() {
                        return unexpected_end_in_string();
                    }
                    self.accept();
                }
                Some(_) => self.accept(),
            }
        }
    }

    fn scan_number(&mut self, mut is_float: bool) -> TokenKind {
        loop {
            self.accept_digits();

            if self.peek() != Some('.') {
                break;
            }
            self.accept();
            if is_float {
                return TokenKind::LexError("unexpected '.' in number".to_string());
            }
            if !is_digit(self.peek()) {
                return TokenKind::LexError("digits expected".to_string());
            }
            is_float = true;
        }

        // An exponent marker makes a float even without exponent digits
        if matches!(self.peek(), Some('e' | 'E')) {
            self.accept();
            if matches!(self.peek(), Some('+' | '-')) {
                self.accept();
            }
            self.accept_digits();
            is_float = true;
        }

        if is_float {
            TokenKind::Float
        } else {
            TokenKind::Integer
        }
    }

    fn scan_symbol(&mut self) -> TokenKind {
        while self.peek().is_some_and(is_symbol_char) {
            self.accept();
        }
        TokenKind::Symbol
    }

    fn accept_digits(&mut self) {
        while is_digit(self.peek()) {
            self.accept();
        }
    }

    fn peek(&self) -> Option<char> {
        self.source.get(self.current).copied()
    }

    fn peek_next(&self) -> Option<char> {
        self.source.get(self.current + 1).copied()
    }

    /// Consumes one character without adding it to the token text
    fn skip(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.current += 1;
        }
        self.position.advance(c);
        c
    }

    /// Consumes one character into the token text
    fn accept(&mut self) {
        if let Some(c) = self.skip() {
            self.text.push(c);
        }
    }
}

impl Iterator for SExprScanner {
    type Item = Token;

    /// Yields tokens up to and including the terminal one, then `None`
    fn next(&mut self) -> Option<Token> {
        if self.drained {
            return None;
        }
        let token = self.next_token();
        if token.kind.is_terminal() {
            self.drained = true;
        }
        Some(token)
    }
}

fn unexpected_end_in_string() -> TokenKind {
    TokenKind::LexError("unexpected end in string".to_string())
}

fn is_digit(c: Option<char>) -> bool {
    c.is_some_and(|c| c.is_ascii_digit())
}

fn is_symbol_start(c: char) -> bool {
    c.is_alphabetic()
        || matches!(
            c,
            '.' | '*' | '+' | '!' | '-' | '_' | '?' | '$' | '%' | '&' | '=' | '<' | '>' | '/'
        )
}

fn is_symbol_char(c: char) -> bool {
    is_symbol_start(c) || c.is_ascii_digit() || c == '#'
}
