//! Diagnostic system for lex, parse and runtime errors
//!
//! Every error the pipeline surfaces flows through the [`Diagnostic`] type,
//! and every consumer receives them through the [`Reporter`] trait. The
//! `Display` form is the stable wire format:
//!
//! ```text
//! [line <n>] Error<where>: <message>
//! ```

use crate::token::{Token, TokenKind};
use crate::value::RuntimeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Exit code for a clean run
pub const EXIT_OK: i32 = 0;
/// Exit code when any lex or parse error was reported
pub const EXIT_SYNTAX_ERROR: i32 = 65;
/// Exit code when an uncaught runtime error was reported
pub const EXIT_RUNTIME_ERROR: i32 = 70;

/// Pipeline stage that produced a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticKind {
    /// Scanning error (unexpected character, unterminated string)
    Lex,
    /// Syntax error
    Parse,
    /// Uncaught runtime error
    Runtime,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::Lex => write!(f, "lex"),
            DiagnosticKind::Parse => write!(f, "parse"),
            DiagnosticKind::Runtime => write!(f, "runtime"),
        }
    }
}

/// Where on the line the problem was found
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "lexeme", rename_all = "lowercase")]
pub enum Location {
    /// Only the line is known
    Line,
    /// The offending token is end of input
    End,
    /// A specific token is implicated
    Token(String),
}

impl Location {
    /// Location for an implicated token (EOF maps to `End`)
    pub fn of(token: &Token) -> Self {
        if token.kind == TokenKind::Eof {
            Location::End
        } else {
            Location::Token(token.lexeme.clone())
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Line => Ok(()),
            Location::End => write!(f, " at end"),
            Location::Token(lexeme) => write!(f, " at '{}'", lexeme),
        }
    }
}

/// A single reported error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Stage that reported it
    pub kind: DiagnosticKind,
    /// Source line (1-based)
    pub line: usize,
    /// Position within the line
    pub location: Location,
    /// Human-readable message
    pub message: String,
}

impl Diagnostic {
    /// Lexer error, known only by line
    pub fn lex(line: usize, message: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::Lex,
            line,
            location: Location::Line,
            message: message.into(),
        }
    }

    /// Parser error at a token
    pub fn parse(token: &Token, message: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::Parse,
            line: token.line,
            location: Location::of(token),
            message: message.into(),
        }
    }

    /// Diagnostic for an uncaught runtime error
    pub fn runtime(error: &RuntimeError) -> Self {
        Self {
            kind: DiagnosticKind::Runtime,
            line: error.line(),
            location: Location::of(error.token()),
            message: error.to_string(),
        }
    }

    /// Whether this diagnostic came from lexing or parsing
    pub fn is_syntax(&self) -> bool {
        matches!(self.kind, DiagnosticKind::Lex | DiagnosticKind::Parse)
    }

    /// Format as pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Format as single-line JSON
    pub fn to_json_compact(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[line {}] Error{}: {}",
            self.line, self.location, self.message
        )
    }
}

/// Sink for diagnostics produced while running a program
///
/// The pipeline never prints errors itself; the host decides what to do
/// with them (collect, print, serialize).
pub trait Reporter {
    /// Record a lex or parse error
    fn error(&mut self, diagnostic: Diagnostic);

    /// Record an uncaught runtime error
    fn runtime_error(&mut self, error: &RuntimeError);

    /// Whether any lex or parse error was recorded since the last reset
    fn had_error(&self) -> bool;

    /// Whether a runtime error was recorded since the last reset
    fn had_runtime_error(&self) -> bool;

    /// Clear the error flags (used between REPL lines)
    fn reset(&mut self);
}

/// Reporter that keeps every diagnostic in memory
#[derive(Debug, Default, Clone)]
pub struct CollectingReporter {
    diagnostics: Vec<Diagnostic>,
    had_error: bool,
    had_runtime_error: bool,
}

impl CollectingReporter {
    /// Create an empty reporter
    pub fn new() -> Self {
        Self::default()
    }

    /// All diagnostics recorded so far
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Take ownership of the recorded diagnostics
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Wire-format lines for every recorded diagnostic
    pub fn lines(&self) -> Vec<String> {
        self.diagnostics.iter().map(|d| d.to_string()).collect()
    }
}

impl Reporter for CollectingReporter {
    fn error(&mut self, diagnostic: Diagnostic) {
        self.had_error = true;
        self.diagnostics.push(diagnostic);
    }

    fn runtime_error(&mut self, error: &RuntimeError) {
        self.had_runtime_error = true;
        self.diagnostics.push(Diagnostic::runtime(error));
    }

    fn had_error(&self) -> bool {
        self.had_error
    }

    fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }

    fn reset(&mut self) {
        self.diagnostics.clear();
        self.had_error = false;
        self.had_runtime_error = false;
    }
}

/// Process exit code for the state of a reporter
///
/// Syntax errors take precedence over runtime errors.
pub fn exit_code(reporter: &dyn Reporter) -> i32 {
    if reporter.had_error() {
        EXIT_SYNTAX_ERROR
    } else if reporter.had_runtime_error() {
        EXIT_RUNTIME_ERROR
    } else {
        EXIT_OK
    }
}
