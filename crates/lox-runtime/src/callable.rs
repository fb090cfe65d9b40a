//! Callable values: user-defined functions and host natives

use crate::ast::FunctionDecl;
use crate::environment::{EnvRef, Environment};
use crate::interpreter::{ControlFlow, Interpreter};
use crate::token::Token;
use crate::value::{NativeError, RuntimeError, Value};
use std::fmt;
use std::rc::Rc;

/// Host function signature
///
/// Natives receive the evaluated arguments; arity has already been checked.
pub type NativeFn = Rc<dyn Fn(&[Value]) -> Result<Value, NativeError>>;

/// A function declared in Lox source, paired with its defining scope
pub struct UserFunction {
    pub declaration: Rc<FunctionDecl>,
    pub closure: EnvRef,
}

impl UserFunction {
    pub fn new(declaration: Rc<FunctionDecl>, closure: EnvRef) -> Self {
        Self {
            declaration,
            closure,
        }
    }

    pub fn name(&self) -> &str {
        &self.declaration.name.lexeme
    }
}

// Closures can reach themselves through their scope, so the scope is not
// printed.
impl fmt::Debug for UserFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserFunction")
            .field("name", &self.name())
            .field("arity", &self.declaration.params.len())
            .finish_non_exhaustive()
    }
}

/// A function implemented by the host
pub struct NativeFunction {
    pub name: String,
    pub arity: usize,
    pub func: NativeFn,
}

impl NativeFunction {
    pub fn new(
        name: impl Into<String>,
        arity: usize,
        func: impl Fn(&[Value]) -> Result<Value, NativeError> + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            arity,
            func: Rc::new(func),
        }
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFunction")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// Anything that can appear before `(` at runtime
#[derive(Debug, Clone)]
pub enum Callable {
    User(Rc<UserFunction>),
    Native(Rc<NativeFunction>),
}

impl Callable {
    /// Number of arguments the callable expects
    pub fn arity(&self) -> usize {
        match self {
            Callable::User(f) => f.declaration.params.len(),
            Callable::Native(f) => f.arity,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Callable::User(f) => f.name(),
            Callable::Native(f) => &f.name,
        }
    }

    /// Identity comparison
    pub fn ptr_eq(&self, other: &Callable) -> bool {
        match (self, other) {
            (Callable::User(a), Callable::User(b)) => Rc::ptr_eq(a, b),
            (Callable::Native(a), Callable::Native(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Invoke with already-evaluated arguments
    ///
    /// `paren` is the call site's closing parenthesis, used to locate arity
    /// and native errors.
    #[tracing::instrument(level = "trace", skip_all, fields(name = self.name(), args = args.len()))]
    pub fn call(
        &self,
        interpreter: &mut Interpreter,
        args: Vec<Value>,
        paren: &Token,
    ) -> Result<Value, RuntimeError> {
        if args.len() != self.arity() {
            return Err(RuntimeError::ArityMismatch {
                paren: paren.clone(),
                expected: self.arity(),
                got: args.len(),
            });
        }

        match self {
            Callable::User(function) => {
                let env = Environment::enclosed(function.closure.clone());
                {
                    let mut scope = env.borrow_mut();
                    for (param, arg) in function.declaration.params.iter().zip(args) {
                        scope.define(param.lexeme.clone(), arg);
                    }
                }

                match interpreter.execute_call(&function.declaration.body, env, paren)? {
                    ControlFlow::Return(value) => Ok(value),
                    ControlFlow::Normal | ControlFlow::Break => Ok(Value::Nil),
                }
            }
            Callable::Native(native) => {
                (native.func)(args.as_slice()).map_err(|source| RuntimeError::Native {
                    paren: paren.clone(),
                    source,
                })
            }
        }
    }
}

impl fmt::Display for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Callable::User(func) => write!(f, "<fn {}>", func.name()),
            Callable::Native(func) => write!(f, "<native fn {}>", func.name),
        }
    }
}

impl From<NativeFunction> for Callable {
    fn from(native: NativeFunction) -> Self {
        Callable::Native(Rc::new(native))
    }
}
