//! Runtime value representation and runtime errors

use crate::callable::Callable;
use crate::token::Token;
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

/// Runtime value type
#[derive(Debug, Clone)]
pub enum Value {
    /// Absence of a value
    Nil,
    /// Boolean value
    Bool(bool),
    /// Numeric value (IEEE 754 double-precision)
    Number(f64),
    /// String value (reference-counted, immutable)
    String(Rc<str>),
    /// User function or native function
    Callable(Callable),
}

impl Value {
    /// Create a string value
    pub fn string(s: impl AsRef<str>) -> Self {
        Value::String(Rc::from(s.as_ref()))
    }

    /// `nil` and `false` are falsey, everything else is truthy
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }

    /// Get the type name for error messages and REPL listings
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Callable(_) => "function",
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            // IEEE equality: NaN != NaN
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Callable(a), Value::Callable(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

/// Canonical textual form of a number
///
/// Integral values drop the fractional part; non-finite values use the
/// `Infinity`/`NaN` spellings.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n.fract() == 0.0 {
        format!("{:.0}", n)
    } else {
        format!("{}", n)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::String(s) => f.write_str(s),
            Value::Callable(c) => write!(f, "{}", c),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(Rc::from(s))
    }
}

impl From<Callable> for Value {
    fn from(c: Callable) -> Self {
        Value::Callable(c)
    }
}

/// Failure reported by a host-provided native function
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{0}")]
pub struct NativeError(pub String);

impl NativeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Runtime error
///
/// Every variant carries the token that locates it in the source.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Read or assignment of a name not bound on the scope chain
    #[error("Undefined variable '{}'.", name.lexeme)]
    UndefinedVariable { name: Token },
    /// Read of a variable declared without an initializer
    #[error("{} is not initialized.", name.lexeme)]
    UninitializedVariable { name: Token },
    /// Operand types not accepted by an operator
    #[error("{message}")]
    TypeMismatch { op: Token, message: String },
    /// Call of a value that is not a function
    #[error("Can only call functions and classes.")]
    NotCallable { paren: Token },
    /// Argument count differs from the callee's arity
    #[error("Expected {expected} arguments but got {got}.")]
    ArityMismatch {
        paren: Token,
        expected: usize,
        got: usize,
    },
    /// Nested calls went past the interpreter's depth limit
    #[error("Stack overflow.")]
    StackOverflow { paren: Token },
    /// A native function failed
    #[error("{source}")]
    Native {
        paren: Token,
        #[source]
        source: NativeError,
    },
    /// Writing `print` output failed
    #[error("Failed to write output: {source}")]
    Output {
        keyword: Token,
        #[source]
        source: std::io::Error,
    },
}

impl RuntimeError {
    /// Token implicated by this error
    pub fn token(&self) -> &Token {
        match self {
            RuntimeError::UndefinedVariable { name } => name,
            RuntimeError::UninitializedVariable { name } => name,
            RuntimeError::TypeMismatch { op, .. } => op,
            RuntimeError::NotCallable { paren } => paren,
            RuntimeError::ArityMismatch { paren, .. } => paren,
            RuntimeError::StackOverflow { paren } => paren,
            RuntimeError::Native { paren, .. } => paren,
            RuntimeError::Output { keyword, .. } => keyword,
        }
    }

    /// Source line of this error
    pub fn line(&self) -> usize {
        self.token().line
    }

    /// Operand of a unary operator was not a number
    pub(crate) fn number_operand(op: &Token) -> Self {
        RuntimeError::TypeMismatch {
            op: op.clone(),
            message: "Operand must be a number.".to_string(),
        }
    }

    /// Operands of a binary numeric operator were not both numbers
    pub(crate) fn number_operands(op: &Token) -> Self {
        RuntimeError::TypeMismatch {
            op: op.clone(),
            message: "Operands must be numbers.".to_string(),
        }
    }

    /// Operands of `+` were neither numbers nor involved a string
    pub(crate) fn add_operands(op: &Token) -> Self {
        RuntimeError::TypeMismatch {
            op: op.clone(),
            message: "Operands must be two numbers or two strings.".to_string(),
        }
    }
}
