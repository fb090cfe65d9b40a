//! Expression parsing
//!
//! One method per precedence level, lowest first:
//! assignment, or, and, equality, comparison, term, factor, unary, call,
//! primary.

use crate::ast::*;
use crate::parser::stmt::MAX_ARITY;
use crate::parser::Parser;
use crate::token::{TokenKind, TokenLiteral};

impl Parser {
    /// Parse an expression
    pub(super) fn expression(&mut self) -> Result<Expr, ()> {
        self.assignment()
    }

    /// Assignment is right-associative and only targets variables
    fn assignment(&mut self) -> Result<Expr, ()> {
        let expr = self.or()?;

        if self.match_token(TokenKind::Equal) {
            let equals = self.previous().clone();
            let value = self.assignment()?;

            if let Expr::Variable(var) = expr {
                return Ok(Expr::Assign(AssignExpr {
                    name: var.name,
                    value: Box::new(value),
                }));
            }

            // Report without unwinding; the left side stands in for the result
            self.error_at(&equals, "Invalid assignment target.");
        }

        Ok(expr)
    }

    fn or(&mut self) -> Result<Expr, ()> {
        let mut expr = self.and()?;

        while self.match_token(TokenKind::Or) {
            let op = self.previous().clone();
            let right = self.and()?;
            expr = Expr::Logical(LogicalExpr {
                left: Box::new(expr),
                op,
                right: Box::new(right),
            });
        }

        Ok(expr)
    }

    fn and(&mut self) -> Result<Expr, ()> {
        let mut expr = self.equality()?;

        while self.match_token(TokenKind::And) {
            let op = self.previous().clone();
            let right = self.equality()?;
            expr = Expr::Logical(LogicalExpr {
                left: Box::new(expr),
                op,
                right: Box::new(right),
            });
        }

        Ok(expr)
    }

    /// Parse a left-associative chain of binary operators
    fn binary_chain(
        &mut self,
        operators: &[TokenKind],
        operand: fn(&mut Self) -> Result<Expr, ()>,
    ) -> Result<Expr, ()> {
        let mut expr = operand(self)?;

        while self.match_any(operators) {
            let op = self.previous().clone();
            let right = operand(self)?;
            expr = Expr::Binary(BinaryExpr {
                left: Box::new(expr),
                op,
                right: Box::new(right),
            });
        }

        Ok(expr)
    }

    fn equality(&mut self) -> Result<Expr, ()> {
        self.binary_chain(
            &[TokenKind::BangEqual, TokenKind::EqualEqual],
            Self::comparison,
        )
    }

    fn comparison(&mut self) -> Result<Expr, ()> {
        self.binary_chain(
            &[
                TokenKind::Greater,
                TokenKind::GreaterEqual,
                TokenKind::Less,
                TokenKind::LessEqual,
            ],
            Self::term,
        )
    }

    fn term(&mut self) -> Result<Expr, ()> {
        self.binary_chain(&[TokenKind::Minus, TokenKind::Plus], Self::factor)
    }

    fn factor(&mut self) -> Result<Expr, ()> {
        self.binary_chain(&[TokenKind::Slash, TokenKind::Star], Self::unary)
    }

    fn unary(&mut self) -> Result<Expr, ()> {
        if self.match_any(&[TokenKind::Bang, TokenKind::Minus]) {
            let op = self.previous().clone();
            let expr = self.unary()?;
            return Ok(Expr::Unary(UnaryExpr {
                op,
                expr: Box::new(expr),
            }));
        }

        self.call()
    }

    fn call(&mut self) -> Result<Expr, ()> {
        let mut expr = self.primary()?;

        while self.match_token(TokenKind::LeftParen) {
            expr = self.finish_call(expr)?;
        }

        Ok(expr)
    }

    /// Parse call arguments after `(`
    fn finish_call(&mut self, callee: Expr) -> Result<Expr, ()> {
        let mut args = Vec::new();

        if !self.check(TokenKind::RightParen) {
            loop {
                if args.len() >= MAX_ARITY {
                    self.error("Can't have more than 255 arguments.");
                }
                args.push(self.expression()?);

                if !self.match_token(TokenKind::Comma) {
                    break;
                }
            }
        }

        let paren = self.consume(TokenKind::RightParen, "Expect ')' after arguments.")?;

        Ok(Expr::Call(CallExpr {
            callee: Box::new(callee),
            paren,
            args,
        }))
    }

    fn primary(&mut self) -> Result<Expr, ()> {
        let token = self.peek().clone();

        let expr = match token.kind {
            TokenKind::False => Expr::Literal(Literal::Bool(false)),
            TokenKind::True => Expr::Literal(Literal::Bool(true)),
            TokenKind::Nil => Expr::Literal(Literal::Nil),
            TokenKind::Number | TokenKind::String => match token.literal {
                Some(TokenLiteral::Number(n)) => Expr::Literal(Literal::Number(n)),
                Some(TokenLiteral::String(ref s)) => Expr::Literal(Literal::String(s.clone())),
                None => {
                    self.error("Expect expression.");
                    return Err(());
                }
            },
            TokenKind::Identifier => Expr::Variable(VariableExpr { name: token }),
            TokenKind::LeftParen => {
                self.advance();
                let inner = self.expression()?;
                self.consume(TokenKind::RightParen, "Expect ')' after expression.")?;
                return Ok(Expr::Grouping(GroupExpr {
                    expr: Box::new(inner),
                }));
            }
            _ => {
                self.error("Expect expression.");
                return Err(());
            }
        };

        self.advance();
        Ok(expr)
    }
}
