//! Lox runtime API for embedding

use crate::ast::Stmt;
use crate::callable::NativeFunction;
use crate::diagnostic::{Diagnostic, Reporter};
use crate::interpreter::Interpreter;
use crate::lexer::Lexer;
use crate::parser::Parser;
use crate::value::Value;
use std::io::Write;

/// Result type for runtime operations
pub type RuntimeResult<T> = Result<T, Vec<Diagnostic>>;

/// Lex and parse `source`, collecting every syntax diagnostic
///
/// Parsing runs even when lexing reported errors, so one pass surfaces
/// all of them.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn parse_source(source: &str) -> (Vec<Stmt>, Vec<Diagnostic>) {
    let (tokens, mut diagnostics) = Lexer::new(source).tokenize();
    let (statements, parse_diagnostics) = Parser::new(tokens).parse();
    diagnostics.extend(parse_diagnostics);
    (statements, diagnostics)
}

/// Lox runtime instance
///
/// Global definitions persist across calls on the same instance.
///
/// # Examples
///
/// ```
/// use lox_runtime::{Lox, Value};
///
/// let mut lox = Lox::new();
/// lox.eval("var a = 2;").unwrap();
/// assert_eq!(lox.eval("a * 21;").unwrap(), Value::Number(42.0));
/// ```
pub struct Lox {
    interpreter: Interpreter,
}

impl Lox {
    /// Create a runtime whose `print` writes to stdout
    pub fn new() -> Self {
        Self {
            interpreter: Interpreter::new(),
        }
    }

    /// Create a runtime whose `print` writes to `output`
    pub fn with_output(output: Box<dyn Write>) -> Self {
        Self {
            interpreter: Interpreter::with_output(output),
        }
    }

    /// Bind a host function as a global
    pub fn register_native(&mut self, native: NativeFunction) {
        self.interpreter.define_native(native);
    }

    /// Bind a host value as a global
    pub fn set_global(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.interpreter.define_global(name, value.into());
    }

    /// Current value of a global, if it is bound and initialized
    pub fn get_global(&self, name: &str) -> Option<Value> {
        self.interpreter.globals().borrow().get_value(name)
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    pub fn interpreter_mut(&mut self) -> &mut Interpreter {
        &mut self.interpreter
    }

    /// Run a whole program, sending every diagnostic to `reporter`
    ///
    /// Interpretation is skipped when the source has lex or parse errors.
    /// A runtime error stops execution at the failing statement.
    pub fn run(&mut self, source: &str, reporter: &mut dyn Reporter) {
        let (statements, diagnostics) = parse_source(source);

        if !diagnostics.is_empty() {
            tracing::debug!(count = diagnostics.len(), "syntax errors; not interpreting");
            for diagnostic in diagnostics {
                reporter.error(diagnostic);
            }
            return;
        }

        if let Err(err) = self.interpreter.interpret(&statements) {
            reporter.runtime_error(&err);
        }
    }

    /// Evaluate source code
    ///
    /// Returns the value of the final top-level statement when it is an
    /// expression statement, `nil` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use lox_runtime::Lox;
    ///
    /// let mut lox = Lox::new();
    /// let diagnostics = lox.eval("1 +;").unwrap_err();
    /// assert_eq!(
    ///     diagnostics[0].to_string(),
    ///     "[line 1] Error at ';': Expect expression."
    /// );
    /// ```
    pub fn eval(&mut self, source: &str) -> RuntimeResult<Value> {
        let (statements, diagnostics) = parse_source(source);

        if !diagnostics.is_empty() {
            return Err(diagnostics);
        }

        self.interpreter
            .eval(&statements)
            .map_err(|err| vec![Diagnostic::runtime(&err)])
    }
}

impl Default for Lox {
    fn default() -> Self {
        Self::new()
    }
}
