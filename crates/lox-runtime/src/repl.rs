//! REPL core logic (UI-agnostic)

use crate::ast::Stmt;
use crate::diagnostic::{CollectingReporter, Diagnostic, Reporter};
use crate::interpreter::Interpreter;
use crate::output::OutputBuffer;
use crate::runtime::parse_source;
use crate::value::Value;
use std::io::{self, Write};

/// REPL result type
#[derive(Debug)]
pub struct ReplResult {
    /// Value of the line when it ends in an expression statement
    pub value: Option<Value>,
    /// Diagnostics from all phases
    pub diagnostics: Vec<Diagnostic>,
    /// Text written by `print` while the line ran
    ///
    /// Always empty for a core built with [`ReplCore::with_output`].
    pub stdout: String,
}

impl ReplResult {
    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// REPL core state
///
/// Maintains persistent state across multiple eval calls:
/// - Variable and function declarations persist
/// - Errors are reported per line and do not poison later lines
pub struct ReplCore {
    interpreter: Interpreter,
    /// Set when `print` output is captured into `ReplResult::stdout`
    capture: Option<OutputBuffer>,
    reporter: CollectingReporter,
}

impl ReplCore {
    /// Create a new REPL core that captures `print` output per line
    pub fn new() -> Self {
        let capture = OutputBuffer::new();
        Self {
            interpreter: Interpreter::with_output(Box::new(capture.clone())),
            capture: Some(capture),
            reporter: CollectingReporter::new(),
        }
    }

    /// Create a REPL core whose `print` writes straight to `output`
    ///
    /// Output appears while a line runs, so a line that never finishes
    /// still shows what it prints.
    pub fn with_output(output: Box<dyn Write>) -> Self {
        Self {
            interpreter: Interpreter::with_output(output),
            capture: None,
            reporter: CollectingReporter::new(),
        }
    }

    /// Evaluate a line of input
    ///
    /// Runs the full pipeline: lex -> parse -> eval. A line with syntax
    /// errors runs nothing.
    pub fn eval_line(&mut self, input: &str) -> ReplResult {
        self.reporter.reset();

        let (statements, diagnostics) = parse_source(input);
        for diagnostic in diagnostics {
            self.reporter.error(diagnostic);
        }

        if self.reporter.had_error() {
            return self.finish(None);
        }

        let echo = matches!(statements.last(), Some(Stmt::Expression(_)));
        match self.interpreter.eval(&statements) {
            Ok(value) => self.finish(echo.then_some(value)),
            Err(err) => {
                self.reporter.runtime_error(&err);
                self.finish(None)
            }
        }
    }

    fn finish(&mut self, value: Option<Value>) -> ReplResult {
        ReplResult {
            value,
            diagnostics: self.reporter.take_diagnostics(),
            stdout: self
                .capture
                .as_ref()
                .map(OutputBuffer::take)
                .unwrap_or_default(),
        }
    }

    /// Global bindings, sorted by name
    ///
    /// Natives are left out. A declared but uninitialized variable has
    /// no value.
    pub fn variables(&self) -> Vec<(String, Option<Value>)> {
        self.interpreter
            .globals()
            .borrow()
            .bindings()
            .into_iter()
            .filter(|(name, _)| !crate::stdlib::is_builtin(name))
            .collect()
    }

    /// Reset REPL state
    ///
    /// Clears all variables and functions. The output destination is kept.
    pub fn reset(&mut self) {
        let output = self.interpreter.set_output(Box::new(io::sink()));
        self.interpreter = Interpreter::with_output(output);
        self.reporter = CollectingReporter::new();
    }
}

impl Default for ReplCore {
    fn default() -> Self {
        Self::new()
    }
}
