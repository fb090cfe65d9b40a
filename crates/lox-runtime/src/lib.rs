//! Lox Runtime - Core language implementation
//!
//! This library provides the complete Lox pipeline:
//! - Lexical analysis and parsing
//! - Tree-walking interpretation with closures
//! - Diagnostics and error reporting
//! - An embedding API and a UI-agnostic REPL core

/// Lox runtime version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Public API modules
pub mod api;
pub mod ast;
pub mod callable;
pub mod diagnostic;
pub mod environment;
pub mod interpreter;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod repl;
pub mod runtime;
pub mod stdlib;
pub mod token;
pub mod value;

// Re-export commonly used types
pub use callable::{Callable, NativeFunction, UserFunction};
pub use diagnostic::{
    exit_code, CollectingReporter, Diagnostic, DiagnosticKind, Location, Reporter, EXIT_OK,
    EXIT_RUNTIME_ERROR, EXIT_SYNTAX_ERROR,
};
pub use environment::{EnvRef, Environment};
pub use interpreter::{Interpreter, MAX_CALL_DEPTH};
pub use lexer::Lexer;
pub use output::OutputBuffer;
pub use parser::Parser;
pub use repl::{ReplCore, ReplResult};
pub use runtime::{parse_source, Lox, RuntimeResult};
pub use token::{Token, TokenKind, TokenLiteral};
pub use value::{NativeError, RuntimeError, Value};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smoke() {
        assert_eq!(VERSION, "0.1.0");
    }
}
