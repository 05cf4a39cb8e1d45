use super::ast::{Atom, Expression};
use crate::error::{Error, Result};
use crate::lexer::{SExprScanner, Token, TokenKind};

/// Configuration for the parser
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Maximum list nesting depth (default: 256)
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self { max_depth: 256 }
    }
}

/// Where a parser is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    /// More expressions may follow
    Ready,
    /// A read failed; the same error is returned from now on
    Failed,
    /// Input is exhausted; `read` keeps returning `None`
    Done,
}

#[derive(Debug, Clone)]
enum State {
    Ready,
    Failed(Error),
    Done,
}

/// Recursive-descent S-expression parser with one token of lookahead
#[derive(Debug, Clone)]
pub struct SExprParser {
    scanner: SExprScanner,
    lookahead: Token,
    config: ParserConfig,
    state: State,
    /// Lists currently open
    depth: usize,
}

impl SExprParser {
    /// Creates a parser over `source` with the default configuration
    pub fn new(source: &str) -> Self {
        Self::with_config(source, ParserConfig::default())
    }

    /// Creates a parser over `source` and pulls the first lookahead token
    pub fn with_config(source: &str, config: ParserConfig) -> Self {
        let mut scanner = SExprScanner::new(source);
        let lookahead = scanner.next_token();
        SExprParser {
            scanner,
            lookahead,
            config,
            state: State::Ready,
            depth: 0,
        }
    }

    /// Reads the next top-level expression
    ///
    /// Returns `Ok(None)` once the input holds nothing but whitespace and
    /// comments. A failed read never yields a partial tree and leaves the
    /// parser failed: later calls return the same error.
    pub fn read(&mut self) -> Result<Option<Expression>> {
        match &self.state {
            State::Ready => {}
            State::Failed(error) => return Err(error.clone()),
            State::Done => return Ok(None),
        }

        let result = self.read_expression();
        match &result {
            Ok(Some(_)) => {}
            Ok(None) => {
                tracing::debug!(position = %self.lookahead.position, "end of input");
                self.state = State::Done;
            }
            Err(error) => {
                tracing::debug!(%error, "parse failed");
                self.state = State::Failed(error.clone());
            }
        }
        result
    }

    /// Reads every remaining top-level expression, in source order
    pub fn read_all(&mut self) -> Result<Vec<Expression>> {
        let mut expressions = Vec::new();
        while let Some(expr) = self.read()? {
            expressions.push(expr);
        }
        Ok(expressions)
    }

    pub fn state(&self) -> ParserState {
        match self.state {
            State::Ready => ParserState::Ready,
            State::Failed(_) => ParserState::Failed,
            State::Done => ParserState::Done,
        }
    }

    /// The token the parser will look at next
    pub fn lookahead(&self) -> &Token {
        &self.lookahead
    }

    fn read_expression(&mut self) -> Result<Option<Expression>> {
        if let Some(expr) = self.accept_expression()? {
            return Ok(Some(expr));
        }

        match self.lookahead.kind {
            TokenKind::Empty => Ok(None),
            _ => Err(self.unexpected_token()),
        }
    }

    /// Atom, else list, else `None` without consuming anything
    fn accept_expression(&mut self) -> Result<Option<Expression>> {
        if let Some(atom) = self.accept_atom()? {
            return Ok(Some(Expression::Atom(atom)));
        }
        if let Some(items) = self.accept_list()? {
            return Ok(Some(Expression::List(items)));
        }
        Ok(None)
    }

    fn accept_atom(&mut self) -> Result<Option<Atom>> {
        if !matches!(
            self.lookahead.kind,
            TokenKind::String | TokenKind::Symbol | TokenKind::Integer | TokenKind::Float
        ) {
            return Ok(None);
        }

        let token = self.advance();
        let atom = match token.kind {
            TokenKind::String => Atom::String(token.text),
            TokenKind::Symbol => {
                Atom::reserved(&token.text).unwrap_or_else(|| Atom::Symbol(token.text))
            }
            TokenKind::Integer => Atom::Integer(parse_integer(&token)?),
            _ => Atom::Float(parse_float(&token)?),
        };
        Ok(Some(atom))
    }

    fn accept_list(&mut self) -> Result<Option<Vec<Expression>>> {
        if self.lookahead.kind != TokenKind::BlockStart {
            return Ok(None);
        }
        if self.depth >= self.config.max_depth {
            return Err(structural_error(&self.lookahead, "nesting too deep"));
        }

        self.advance();
        self.depth += 1;

        let mut items = Vec::new();
        loop {
            if let Some(expr) = self.accept_expression()? {
                items.push(expr);
                continue;
            }

            // No resynchronization: anything but `)` ends the parse
            match self.lookahead.kind {
                TokenKind::BlockEnd => {
                    self.advance();
                    break;
                }
                TokenKind::Empty => {
                    return Err(structural_error(&self.lookahead, "unfinished list"));
                }
                _ => return Err(self.unexpected_token()),
            }
        }

        self.depth -= 1;
        Ok(Some(items))
    }

    /// Replaces the lookahead with the next token and returns the old one
    fn advance(&mut self) -> Token {
        let next = self.scanner.next_token();
        std::mem::replace(&mut self.lookahead, next)
    }

    fn unexpected_token(&self) -> Error {
        let token = &self.lookahead;
        match &token.kind {
            TokenKind::LexError(message) => Error::LexicalError {
                line: token.line(),
                col: token.column(),
                message: message.clone(),
            },
            kind => syntax_error(token, format!("unexpected token {}", kind)),
        }
    }
}

impl Iterator for SExprParser {
    type Item = Result<Expression>;

    /// Yields each top-level expression, stopping after the first error
    fn next(&mut self) -> Option<Self::Item> {
        if self.state() != ParserState::Ready {
            return None;
        }
        self.read().transpose()
    }
}

fn parse_integer(token: &Token) -> Result<i64> {
    token.text.parse().map_err(|_| {
        syntax_error(token, format!("integer literal out of range: {}", token.text))
    })
}

fn parse_float(token: &Token) -> Result<f64> {
    // "1e" and "1e+" carry no exponent digits; they read as exponent zero
    let text = &token.text;
    let bare_exponent = text.ends_with(|c: char| matches!(c, 'e' | 'E' | '+' | '-'));
    let parsed: std::result::Result<f64, _> = if bare_exponent {
        format!("{}0", text).parse()
    } else {
        text.parse()
    };
    parsed.map_err(|_| syntax_error(token, format!("invalid float literal: {}", text)))
}

fn syntax_error(token: &Token, message: String) -> Error {
    Error::SyntaxError {
        line: token.line(),
        col: token.column(),
        token: token.text.clone(),
        message,
    }
}

fn structural_error(token: &Token, message: &str) -> Error {
    Error::StructuralError {
        line: token.line(),
        col: token.column(),
        message: message.to_string(),
    }
}
