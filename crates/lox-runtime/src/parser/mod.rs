//! Parsing (tokens to AST)
//!
//! Recursive descent over the Lox grammar. Errors are recorded as
//! diagnostics; the parser then synchronizes to the next statement boundary
//! and keeps going, so a single pass reports every syntax error.

mod expr;
mod stmt;

pub use stmt::MAX_ARITY;

use crate::ast::Stmt;
use crate::diagnostic::Diagnostic;
use crate::token::{Token, TokenKind};

/// Parser state for building AST from tokens
pub struct Parser {
    pub(super) tokens: Vec<Token>,
    pub(super) current: usize,
    pub(super) diagnostics: Vec<Diagnostic>,
    /// Number of loops enclosing the current statement (reset per function)
    pub(super) loop_depth: usize,
    /// Number of function bodies enclosing the current statement
    pub(super) function_depth: usize,
}

impl Parser {
    /// Create a new parser for the given tokens
    ///
    /// The token stream is expected to end with `Eof`, as produced by the
    /// lexer; one is appended if missing.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|t| t.kind) != Some(TokenKind::Eof) {
            let line = tokens.last().map_or(1, |t| t.line);
            tokens.push(Token::new(TokenKind::Eof, "", line));
        }
        Self {
            tokens,
            current: 0,
            diagnostics: Vec::new(),
            loop_depth: 0,
            function_depth: 0,
        }
    }

    /// Parse tokens into a list of statements
    ///
    /// Declarations that fail to parse are skipped; their diagnostics are
    /// returned alongside the statements that did parse.
    #[tracing::instrument(level = "debug", skip_all, fields(tokens = self.tokens.len()))]
    pub fn parse(&mut self) -> (Vec<Stmt>, Vec<Diagnostic>) {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            if let Some(stmt) = self.declaration() {
                statements.push(stmt);
            }
        }

        tracing::debug!(
            statements = statements.len(),
            errors = self.diagnostics.len(),
            "parsed program"
        );
        (statements, std::mem::take(&mut self.diagnostics))
    }

    // === Helper methods ===

    /// Advance to next token and return reference to previous
    pub(super) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    /// Most recently consumed token
    pub(super) fn previous(&self) -> &Token {
        &self.tokens[self.current.saturating_sub(1)]
    }

    /// Peek at current token
    pub(super) fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    /// Check if current token matches kind
    pub(super) fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek().kind == kind
    }

    /// Match and consume token if it matches
    pub(super) fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Match and consume token if it is any of `kinds`
    pub(super) fn match_any(&mut self, kinds: &[TokenKind]) -> bool {
        kinds.iter().any(|&kind| self.match_token(kind))
    }

    /// Consume token of given kind or error
    pub(super) fn consume(&mut self, kind: TokenKind, message: &str) -> Result<Token, ()> {
        if self.check(kind) {
            Ok(self.advance().clone())
        } else {
            self.error(message);
            Err(())
        }
    }

    /// Check if at end of token stream
    pub(super) fn is_at_end(&self) -> bool {
        self.tokens[self.current].kind == TokenKind::Eof
    }

    /// Record an error at the current token
    pub(super) fn error(&mut self, message: &str) {
        let token = self.peek().clone();
        self.error_at(&token, message);
    }

    /// Record an error at a specific token
    pub(super) fn error_at(&mut self, token: &Token, message: &str) {
        tracing::trace!(line = token.line, lexeme = %token.lexeme, message, "parse error");
        self.diagnostics.push(Diagnostic::parse(token, message));
    }

    /// Synchronize after error
    ///
    /// Discards tokens until just past a semicolon or just before a keyword
    /// that starts a declaration or statement.
    #[tracing::instrument(level = "trace", skip_all, fields(line = self.peek().line))]
    pub(super) fn synchronize(&mut self) {
        self.advance();

        while !self.is_at_end() {
            if self.previous().kind == TokenKind::Semicolon {
                return;
            }

            match self.peek().kind {
                TokenKind::Class
                | TokenKind::Fun
                | TokenKind::Var
                | TokenKind::For
                | TokenKind::If
                | TokenKind::While
                | TokenKind::Print
                | TokenKind::Break
                | TokenKind::Return => return,
                _ => {
                    self.advance();
                }
            }
        }
    }
}
