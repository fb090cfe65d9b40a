//! Statement and declaration parsing

use crate::ast::*;
use crate::parser::Parser;
use crate::token::TokenKind;
use std::rc::Rc;

/// Upper bound on parameters and call arguments
pub const MAX_ARITY: usize = 255;

impl Parser {
    /// Parse a declaration, synchronizing on error
    ///
    /// Returns `None` when the declaration could not be parsed; the error has
    /// already been recorded.
    pub(super) fn declaration(&mut self) -> Option<Stmt> {
        let result = if self.match_token(TokenKind::Var) {
            self.var_declaration()
        } else {
            self.statement()
        };

        match result {
            Ok(stmt) => Some(stmt),
            Err(()) => {
                self.synchronize();
                None
            }
        }
    }

    /// Parse `var name (= initializer)? ;` after the `var` keyword
    fn var_declaration(&mut self) -> Result<Stmt, ()> {
        let name = self.consume(TokenKind::Identifier, "Expect variable name.")?;

        let initializer = if self.match_token(TokenKind::Equal) {
            Some(self.expression()?)
        } else {
            None
        };

        self.consume(
            TokenKind::Semicolon,
            "Expect ';' after variable declaration.",
        )?;
        Ok(Stmt::Var(VarDecl { name, initializer }))
    }

    /// Parse a statement
    pub(super) fn statement(&mut self) -> Result<Stmt, ()> {
        match self.peek().kind {
            TokenKind::For => {
                self.advance();
                self.for_statement()
            }
            TokenKind::If => {
                self.advance();
                self.if_statement()
            }
            TokenKind::Print => {
                self.advance();
                self.print_statement()
            }
            TokenKind::Return => {
                self.advance();
                self.return_statement()
            }
            TokenKind::While => {
                self.advance();
                self.while_statement()
            }
            TokenKind::Break => {
                self.advance();
                self.break_statement()
            }
            TokenKind::Fun => {
                self.advance();
                self.function()
            }
            TokenKind::LeftBrace => {
                self.advance();
                Ok(Stmt::Block(self.block()?))
            }
            _ => self.expression_statement(),
        }
    }

    /// Parse `for (init; cond; incr) body` and desugar it into a while loop
    ///
    /// `{ init; while (cond) { body; incr; } }`, with the outer block only
    /// present when there is an initializer and the inner block only when
    /// there is an increment.
    fn for_statement(&mut self) -> Result<Stmt, ()> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'for'.")?;

        let initializer = if self.match_token(TokenKind::Semicolon) {
            None
        } else if self.match_token(TokenKind::Var) {
            Some(self.var_declaration()?)
        } else {
            Some(self.expression_statement()?)
        };

        let cond = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.consume(TokenKind::Semicolon, "Expect ';' after loop condition.")?;

        let increment = if self.check(TokenKind::RightParen) {
            None
        } else {
            Some(self.expression()?)
        };
        self.consume(TokenKind::RightParen, "Expect ')' after for clauses.")?;

        let mut body = self.loop_body()?;

        if let Some(increment) = increment {
            body = Stmt::Block(vec![body, Stmt::Expression(increment)]);
        }

        let mut desugared = Stmt::While(WhileStmt {
            cond: cond.unwrap_or(Expr::Literal(Literal::Bool(true))),
            body: Box::new(body),
        });

        if let Some(initializer) = initializer {
            desugared = Stmt::Block(vec![initializer, desugared]);
        }

        Ok(desugared)
    }

    /// Parse a loop body with the loop context active
    fn loop_body(&mut self) -> Result<Stmt, ()> {
        self.loop_depth += 1;
        let body = self.statement();
        self.loop_depth -= 1;
        body
    }

    /// Parse `if (cond) then (else other)?`
    fn if_statement(&mut self) -> Result<Stmt, ()> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'if'.")?;
        let cond = self.expression()?;
        self.consume(TokenKind::RightParen, "Expect ')' after if condition.")?;

        let then_branch = Box::new(self.statement()?);
        // Dangling else binds to the nearest if
        let else_branch = if self.match_token(TokenKind::Else) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Ok(Stmt::If(IfStmt {
            cond,
            then_branch,
            else_branch,
        }))
    }

    fn print_statement(&mut self) -> Result<Stmt, ()> {
        let keyword = self.previous().clone();
        let expr = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expect ';' after value.")?;
        Ok(Stmt::Print(PrintStmt { keyword, expr }))
    }

    fn return_statement(&mut self) -> Result<Stmt, ()> {
        let keyword = self.previous().clone();
        if self.function_depth == 0 {
            self.error_at(&keyword, "Can't return from top-level code.");
        }

        let value = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };

        self.consume(TokenKind::Semicolon, "Expect ';' after return value.")?;
        Ok(Stmt::Return(ReturnStmt { keyword, value }))
    }

    fn while_statement(&mut self) -> Result<Stmt, ()> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'while'.")?;
        let cond = self.expression()?;
        self.consume(TokenKind::RightParen, "Expect ')' after condition.")?;
        let body = Box::new(self.loop_body()?);

        Ok(Stmt::While(WhileStmt { cond, body }))
    }

    fn break_statement(&mut self) -> Result<Stmt, ()> {
        let keyword = self.previous().clone();
        if self.loop_depth == 0 {
            self.error_at(&keyword, "Can't use 'break' outside of a loop.");
        }

        self.consume(TokenKind::Semicolon, "Expect ';' after 'break'.")?;
        Ok(Stmt::Break(keyword))
    }

    /// Parse `fun name(params) { body }` after the `fun` keyword
    fn function(&mut self) -> Result<Stmt, ()> {
        let name = self.consume(TokenKind::Identifier, "Expect function name.")?;
        self.consume(TokenKind::LeftParen, "Expect '(' after function name.")?;

        let mut params = Vec::new();
        if !self.check(TokenKind::RightParen) {
            loop {
                if params.len() >= MAX_ARITY {
                    self.error("Can't have more than 255 parameters.");
                }
                params.push(self.consume(TokenKind::Identifier, "Expect parameter name.")?);

                if !self.match_token(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.consume(TokenKind::RightParen, "Expect ')' after parameters.")?;
        self.consume(TokenKind::LeftBrace, "Expect '{' before function body.")?;

        // A function body starts a fresh loop context
        let enclosing_loops = std::mem::replace(&mut self.loop_depth, 0);
        self.function_depth += 1;
        let body = self.block();
        self.function_depth -= 1;
        self.loop_depth = enclosing_loops;

        Ok(Stmt::Function(Rc::new(FunctionDecl {
            name,
            params,
            body: body?,
        })))
    }

    /// Parse declarations up to the closing `}` (the `{` is already consumed)
    pub(super) fn block(&mut self) -> Result<Vec<Stmt>, ()> {
        let mut statements = Vec::new();

        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            if let Some(stmt) = self.declaration() {
                statements.push(stmt);
            }
        }

        self.consume(TokenKind::RightBrace, "Expect '}' after block.")?;
        Ok(statements)
    }

    fn expression_statement(&mut self) -> Result<Stmt, ()> {
        let expr = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expect ';' after expression.")?;
        Ok(Stmt::Expression(expr))
    }
}
