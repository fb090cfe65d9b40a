//! Literal scanning for the lexer

use crate::lexer::Lexer;
use crate::token::{Token, TokenKind, TokenLiteral};

impl Lexer {
    /// Scan a string literal
    ///
    /// Strings may span lines. An unterminated string is reported and no
    /// token is produced for it.
    pub(super) fn string(&mut self) -> Option<Token> {
        while !self.is_at_end() && self.peek() != '"' {
            if self.peek() == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            self.error("Unterminated string.");
            return None;
        }

        self.advance(); // Closing "

        let value: String = self.chars[self.start + 1..self.current - 1]
            .iter()
            .collect();
        Some(self.make_literal(TokenKind::String, TokenLiteral::String(value)))
    }

    /// Scan a number literal (digits, optionally `.` and more digits)
    pub(super) fn number(&mut self) -> Token {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        // A trailing dot without digits is not part of the number
        if self.peek() == '.' && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance(); // consume .
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        // Digits and at most one interior dot always parse
        let value = self.lexeme().parse::<f64>().unwrap_or(f64::NAN);
        self.make_literal(TokenKind::Number, TokenLiteral::Number(value))
    }

    /// Scan an identifier or keyword
    pub(super) fn identifier(&mut self) -> Token {
        while self.peek().is_alphanumeric() || self.peek() == '_' {
            self.advance();
        }

        let kind = TokenKind::is_keyword(&self.lexeme()).unwrap_or(TokenKind::Identifier);
        self.make_token(kind)
    }
}
