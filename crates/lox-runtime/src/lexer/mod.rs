//! Lexical analysis (tokenization)
//!
//! The lexer converts Lox source code into a stream of tokens. Scanning is
//! error-tolerant: a bad character or an unterminated string is recorded as
//! a diagnostic and the pass continues, so one run can surface every lexical
//! problem.

use crate::diagnostic::Diagnostic;
use crate::token::{Token, TokenKind, TokenLiteral};

mod literals;

/// Lexer state for tokenizing source code
pub struct Lexer {
    /// Characters of source code
    pub(super) chars: Vec<char>,
    /// Current position in chars
    pub(super) current: usize,
    /// Start position of current token
    pub(super) start: usize,
    /// Current line number (1-indexed)
    pub(super) line: usize,
    /// Collected diagnostics
    pub(super) diagnostics: Vec<Diagnostic>,
}

impl Lexer {
    /// Create a new lexer for the given source code
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            current: 0,
            start: 0,
            line: 1,
            diagnostics: Vec::new(),
        }
    }

    /// Tokenize the source code, returning tokens and any diagnostics
    ///
    /// The token stream always ends with a single `Eof` token.
    #[tracing::instrument(level = "debug", skip_all, fields(chars = self.chars.len()))]
    pub fn tokenize(&mut self) -> (Vec<Token>, Vec<Diagnostic>) {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace_and_comments();
            self.start = self.current;

            if self.is_at_end() {
                break;
            }

            if let Some(token) = self.scan_token() {
                tokens.push(token);
            }
        }

        tokens.push(Token::new(TokenKind::Eof, "", self.line));

        tracing::debug!(
            tokens = tokens.len(),
            errors = self.diagnostics.len(),
            "tokenized source"
        );
        (tokens, std::mem::take(&mut self.diagnostics))
    }

    /// Scan one token starting at `self.start`
    ///
    /// Returns `None` when the lexeme was rejected and only a diagnostic
    /// was recorded.
    fn scan_token(&mut self) -> Option<Token> {
        let c = self.advance();

        let token = match c {
            // Single-character tokens
            '(' => self.make_token(TokenKind::LeftParen),
            ')' => self.make_token(TokenKind::RightParen),
            '{' => self.make_token(TokenKind::LeftBrace),
            '}' => self.make_token(TokenKind::RightBrace),
            ',' => self.make_token(TokenKind::Comma),
            '.' => self.make_token(TokenKind::Dot),
            '-' => self.make_token(TokenKind::Minus),
            '+' => self.make_token(TokenKind::Plus),
            ';' => self.make_token(TokenKind::Semicolon),
            '*' => self.make_token(TokenKind::Star),
            '/' => self.make_token(TokenKind::Slash),

            // One or two character tokens
            '!' => {
                let kind = if self.match_char('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.make_token(kind)
            }
            '=' => {
                let kind = if self.match_char('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                self.make_token(kind)
            }
            '<' => {
                let kind = if self.match_char('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.make_token(kind)
            }
            '>' => {
                let kind = if self.match_char('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.make_token(kind)
            }

            '"' => return self.string(),
            c if c.is_ascii_digit() => self.number(),
            c if c.is_alphabetic() || c == '_' => self.identifier(),

            _ => {
                self.error("Unexpected character.");
                return None;
            }
        };

        Some(token)
    }

    /// Skip whitespace and `//` line comments
    fn skip_whitespace_and_comments(&mut self) {
        while !self.is_at_end() {
            match self.peek() {
                ' ' | '\r' | '\t' => {
                    self.advance();
                }
                '\n' => {
                    self.advance();
                    self.line += 1;
                }
                '/' if self.peek_next() == Some('/') => {
                    while !self.is_at_end() && self.peek() != '\n' {
                        self.advance();
                    }
                }
                _ => return,
            }
        }
    }

    // === Character navigation ===

    /// Advance to next character and return it
    pub(super) fn advance(&mut self) -> char {
        let c = self.chars[self.current];
        self.current += 1;
        c
    }

    /// Peek at current character without advancing
    pub(super) fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.current]
        }
    }

    /// Peek at next character (current + 1)
    pub(super) fn peek_next(&self) -> Option<char> {
        self.chars.get(self.current + 1).copied()
    }

    /// Check if current character matches expected, and advance if so
    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.chars[self.current] != expected {
            false
        } else {
            self.current += 1;
            true
        }
    }

    /// Check if we've reached the end of source
    pub(super) fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }

    // === Token creation ===

    /// Source text of the lexeme being scanned
    pub(super) fn lexeme(&self) -> String {
        self.chars[self.start..self.current].iter().collect()
    }

    /// Create a token of the given kind from the current lexeme
    pub(super) fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.lexeme(), self.line)
    }

    /// Create a literal-bearing token from the current lexeme
    pub(super) fn make_literal(&self, kind: TokenKind, literal: TokenLiteral) -> Token {
        Token::with_literal(kind, self.lexeme(), literal, self.line)
    }

    /// Record a lexical error on the current line
    pub(super) fn error(&mut self, message: &str) {
        tracing::trace!(line = self.line, message, "lex error");
        self.diagnostics.push(Diagnostic::lex(self.line, message));
    }
}
