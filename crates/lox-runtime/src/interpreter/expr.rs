//! Expression evaluation

use crate::ast::*;
use crate::interpreter::Interpreter;
use crate::token::{Token, TokenKind};
use crate::value::{RuntimeError, Value};

impl Interpreter {
    /// Evaluate an expression in the current scope
    pub fn evaluate(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
        match expr {
            Expr::Literal(lit) => Ok(Self::eval_literal(lit)),
            Expr::Grouping(group) => self.evaluate(&group.expr),
            Expr::Unary(unary) => self.eval_unary(unary),
            Expr::Binary(binary) => self.eval_binary(binary),
            Expr::Logical(logical) => self.eval_logical(logical),
            Expr::Variable(var) => self.environment.borrow().get(&var.name),
            Expr::Assign(assign) => {
                let value = self.evaluate(&assign.value)?;
                self.environment
                    .borrow_mut()
                    .assign(&assign.name, value.clone())?;
                Ok(value)
            }
            Expr::Call(call) => self.eval_call(call),
        }
    }

    fn eval_literal(lit: &Literal) -> Value {
        match lit {
            Literal::Nil => Value::Nil,
            Literal::Bool(b) => Value::Bool(*b),
            Literal::Number(n) => Value::Number(*n),
            Literal::String(s) => Value::string(s),
        }
    }

    fn eval_unary(&mut self, unary: &UnaryExpr) -> Result<Value, RuntimeError> {
        let operand = self.evaluate(&unary.expr)?;

        match unary.op.kind {
            TokenKind::Minus => match operand {
                Value::Number(n) => Ok(Value::Number(-n)),
                _ => Err(RuntimeError::number_operand(&unary.op)),
            },
            TokenKind::Bang => Ok(Value::Bool(!operand.is_truthy())),
            _ => Err(Self::unknown_operator(&unary.op)),
        }
    }

    fn eval_binary(&mut self, binary: &BinaryExpr) -> Result<Value, RuntimeError> {
        let left = self.evaluate(&binary.left)?;
        let right = self.evaluate(&binary.right)?;
        let op = &binary.op;

        match op.kind {
            TokenKind::Plus => Self::add(op, left, right),
            TokenKind::Minus => Self::numeric(op, left, right, |a, b| Value::Number(a - b)),
            TokenKind::Star => Self::numeric(op, left, right, |a, b| Value::Number(a * b)),
            // IEEE division: x/0 is infinite or NaN, not an error
            TokenKind::Slash => Self::numeric(op, left, right, |a, b| Value::Number(a / b)),
            TokenKind::Greater => Self::numeric(op, left, right, |a, b| Value::Bool(a > b)),
            TokenKind::GreaterEqual => Self::numeric(op, left, right, |a, b| Value::Bool(a >= b)),
            TokenKind::Less => Self::numeric(op, left, right, |a, b| Value::Bool(a < b)),
            TokenKind::LessEqual => Self::numeric(op, left, right, |a, b| Value::Bool(a <= b)),
            TokenKind::EqualEqual => Ok(Value::Bool(left == right)),
            TokenKind::BangEqual => Ok(Value::Bool(left != right)),
            _ => Err(Self::unknown_operator(op)),
        }
    }

    /// `+`: numeric addition, or concatenation when either side is a string
    fn add(op: &Token, left: Value, right: Value) -> Result<Value, RuntimeError> {
        match (left, right) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
            (Value::String(a), Value::String(b)) => {
                let mut joined = String::with_capacity(a.len() + b.len());
                joined.push_str(&a);
                joined.push_str(&b);
                Ok(Value::from(joined))
            }
            (Value::String(a), other) => Ok(Value::from(format!("{}{}", a, other))),
            (other, Value::String(b)) => Ok(Value::from(format!("{}{}", other, b))),
            _ => Err(RuntimeError::add_operands(op)),
        }
    }

    /// Apply an operator that requires two numbers
    fn numeric<F>(op: &Token, left: Value, right: Value, f: F) -> Result<Value, RuntimeError>
    where
        F: FnOnce(f64, f64) -> Value,
    {
        match (left, right) {
            (Value::Number(a), Value::Number(b)) => Ok(f(a, b)),
            _ => Err(RuntimeError::number_operands(op)),
        }
    }

    fn unknown_operator(op: &Token) -> RuntimeError {
        RuntimeError::TypeMismatch {
            op: op.clone(),
            message: format!("Unsupported operator '{}'.", op.lexeme),
        }
    }

    /// `and`/`or` return an operand, not a coerced boolean
    fn eval_logical(&mut self, logical: &LogicalExpr) -> Result<Value, RuntimeError> {
        let left = self.evaluate(&logical.left)?;

        let short_circuit = match logical.op.kind {
            TokenKind::Or => left.is_truthy(),
            _ => !left.is_truthy(),
        };

        if short_circuit {
            Ok(left)
        } else {
            self.evaluate(&logical.right)
        }
    }

    /// Callee first, then arguments left to right, then the call itself
    fn eval_call(&mut self, call: &CallExpr) -> Result<Value, RuntimeError> {
        let callee = self.evaluate(&call.callee)?;

        let mut args = Vec::with_capacity(call.args.len());
        for arg in &call.args {
            args.push(self.evaluate(arg)?);
        }

        match callee {
            Value::Callable(callable) => callable.call(self, args, &call.paren),
            _ => Err(RuntimeError::NotCallable {
                paren: call.paren.clone(),
            }),
        }
    }
}
