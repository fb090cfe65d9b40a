//! AST interpreter (tree-walking)
//!
//! Direct AST evaluation against a chain of lexical scopes.
//! Supports:
//! - Expression evaluation (literals, unary/binary/logical ops, calls)
//! - Statement execution (declarations, blocks, control flow, print)
//! - User functions with closures and host-provided natives
//!
//! `break` and `return` travel up the call stack as [`ControlFlow`] values
//! returned from `execute`, never as errors.

mod expr;
mod stmt;

use crate::ast::Stmt;
use crate::callable::{Callable, NativeFunction};
use crate::environment::{EnvRef, Environment};
use crate::stdlib;
use crate::token::Token;
use crate::value::{RuntimeError, Value};
use std::io::{self, Write};

/// Deepest nesting of user-function calls before `Stack overflow.`
pub const MAX_CALL_DEPTH: usize = 2048;

/// If less than this much native stack remains, grow it before a call.
const RED_ZONE: usize = 128 * 1024;

/// Stack segment allocated per growth.
const STACK_GROWTH: usize = 2 * 1024 * 1024;

/// Outcome of executing a statement
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ControlFlow {
    /// Continue with the next statement
    Normal,
    /// Leave the nearest enclosing loop
    Break,
    /// Leave the current function with a value
    Return(Value),
}

/// Interpreter state
pub struct Interpreter {
    /// Outermost scope; natives and top-level declarations live here
    pub(super) globals: EnvRef,
    /// Scope of the statement currently executing
    pub(super) environment: EnvRef,
    /// Destination of `print`
    pub(super) output: Box<dyn Write>,
    /// User-function calls currently on the stack
    call_depth: usize,
}

impl Interpreter {
    /// Create a new interpreter printing to stdout, with the standard natives
    pub fn new() -> Self {
        Self::with_output(Box::new(io::stdout()))
    }

    /// Create a new interpreter printing to `output`
    pub fn with_output(output: Box<dyn Write>) -> Self {
        let globals = Environment::global();
        let mut interpreter = Self {
            environment: globals.clone(),
            globals,
            output,
            call_depth: 0,
        };
        stdlib::register_all(&mut interpreter);
        interpreter
    }

    /// Replace the `print` destination, returning the previous one
    pub fn set_output(&mut self, output: Box<dyn Write>) -> Box<dyn Write> {
        std::mem::replace(&mut self.output, output)
    }

    /// Bind a native function in the global scope
    pub fn define_native(&mut self, native: NativeFunction) {
        tracing::debug!(name = %native.name, arity = native.arity, "registering native");
        let name = native.name.clone();
        self.globals
            .borrow_mut()
            .define(name, Value::Callable(Callable::from(native)));
    }

    /// Bind any value in the global scope
    pub fn define_global(&mut self, name: impl Into<String>, value: Value) {
        self.globals.borrow_mut().define(name, value);
    }

    /// The global scope
    pub fn globals(&self) -> &EnvRef {
        &self.globals
    }

    /// Execute top-level statements in order
    ///
    /// The first runtime error aborts the remaining statements. Global state
    /// stays usable for a later call.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = statements.len()))]
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), RuntimeError> {
        self.eval(statements).map(|_| ())
    }

    /// Execute top-level statements and return the value of the last one
    /// when it is an expression statement, `nil` otherwise
    pub fn eval(&mut self, statements: &[Stmt]) -> Result<Value, RuntimeError> {
        let mut last = Value::Nil;

        for stmt in statements {
            let result = match stmt {
                Stmt::Expression(expr) => self.evaluate(expr).map(|value| {
                    last = value;
                    ControlFlow::Normal
                }),
                other => {
                    last = Value::Nil;
                    self.execute(other)
                }
            };

            match result {
                Ok(ControlFlow::Normal) => {}
                // The parser rejects these at top level; a hand-built tree
                // just stops here
                Ok(ControlFlow::Break) | Ok(ControlFlow::Return(_)) => break,
                Err(err) => {
                    tracing::debug!(line = err.line(), error = %err, "runtime error");
                    return Err(err);
                }
            }
        }

        Ok(last)
    }

    /// Run `statements` in `env`, restoring the current scope afterwards
    ///
    /// The previous scope is restored whether the block completes, signals
    /// `break`/`return`, or fails.
    pub(crate) fn execute_block(
        &mut self,
        statements: &[Stmt],
        env: EnvRef,
    ) -> Result<ControlFlow, RuntimeError> {
        let previous = std::mem::replace(&mut self.environment, env);
        let result = self.execute_all(statements);
        self.environment = previous;
        result
    }

    /// Run a function body as a new call frame
    ///
    /// Fails with `StackOverflow` at `paren` once [`MAX_CALL_DEPTH`] frames
    /// are active. The native stack grows on demand below that limit.
    pub(crate) fn execute_call(
        &mut self,
        body: &[Stmt],
        env: EnvRef,
        paren: &Token,
    ) -> Result<ControlFlow, RuntimeError> {
        if self.call_depth >= MAX_CALL_DEPTH {
            tracing::debug!(depth = self.call_depth, "call depth limit reached");
            return Err(RuntimeError::StackOverflow {
                paren: paren.clone(),
            });
        }

        self.call_depth += 1;
        let result = stacker::maybe_grow(RED_ZONE, STACK_GROWTH, || {
            self.execute_block(body, env)
        });
        self.call_depth -= 1;
        result
    }

    fn execute_all(&mut self, statements: &[Stmt]) -> Result<ControlFlow, RuntimeError> {
        for stmt in statements {
            match self.execute(stmt)? {
                ControlFlow::Normal => {}
                signal => return Ok(signal),
            }
        }
        Ok(ControlFlow::Normal)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
