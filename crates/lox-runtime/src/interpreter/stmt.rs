//! Statement execution

use crate::ast::*;
use crate::callable::{Callable, UserFunction};
use crate::environment::Environment;
use crate::interpreter::{ControlFlow, Interpreter};
use crate::value::{RuntimeError, Value};
use std::io::Write;
use std::rc::Rc;

impl Interpreter {
    /// Execute a single statement
    pub(crate) fn execute(&mut self, stmt: &Stmt) -> Result<ControlFlow, RuntimeError> {
        match stmt {
            Stmt::Expression(expr) => {
                self.evaluate(expr)?;
                Ok(ControlFlow::Normal)
            }
            Stmt::Print(print) => self.execute_print(print),
            Stmt::Var(decl) => self.execute_var(decl),
            Stmt::Block(statements) => {
                let env = Environment::enclosed(self.environment.clone());
                self.execute_block(statements, env)
            }
            Stmt::If(if_stmt) => self.execute_if(if_stmt),
            Stmt::While(while_stmt) => self.execute_while(while_stmt),
            Stmt::Break(_) => Ok(ControlFlow::Break),
            Stmt::Function(decl) => {
                let function = UserFunction::new(decl.clone(), self.environment.clone());
                self.environment.borrow_mut().define(
                    decl.name.lexeme.clone(),
                    Value::Callable(Callable::User(Rc::new(function))),
                );
                Ok(ControlFlow::Normal)
            }
            Stmt::Return(ret) => {
                let value = match &ret.value {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };
                Ok(ControlFlow::Return(value))
            }
        }
    }

    fn execute_print(&mut self, print: &PrintStmt) -> Result<ControlFlow, RuntimeError> {
        let value = self.evaluate(&print.expr)?;
        writeln!(self.output, "{}", value)
            .and_then(|_| self.output.flush())
            .map_err(|source| RuntimeError::Output {
                keyword: print.keyword.clone(),
                source,
            })?;
        Ok(ControlFlow::Normal)
    }

    fn execute_var(&mut self, decl: &VarDecl) -> Result<ControlFlow, RuntimeError> {
        match &decl.initializer {
            Some(init) => {
                let value = self.evaluate(init)?;
                self.environment
                    .borrow_mut()
                    .define(decl.name.lexeme.clone(), value);
            }
            None => self
                .environment
                .borrow_mut()
                .declare(decl.name.lexeme.clone()),
        }
        Ok(ControlFlow::Normal)
    }

    fn execute_if(&mut self, if_stmt: &IfStmt) -> Result<ControlFlow, RuntimeError> {
        if self.evaluate(&if_stmt.cond)?.is_truthy() {
            self.execute(&if_stmt.then_branch)
        } else if let Some(else_branch) = &if_stmt.else_branch {
            self.execute(else_branch)
        } else {
            Ok(ControlFlow::Normal)
        }
    }

    /// Run a loop; `break` ends this loop only, `return` keeps propagating
    fn execute_while(&mut self, while_stmt: &WhileStmt) -> Result<ControlFlow, RuntimeError> {
        while self.evaluate(&while_stmt.cond)?.is_truthy() {
            match self.execute(&while_stmt.body)? {
                ControlFlow::Normal => {}
                ControlFlow::Break => break,
                ret @ ControlFlow::Return(_) => return Ok(ret),
            }
        }
        Ok(ControlFlow::Normal)
    }
}
