//! Shared test utilities
//!
//! Helpers that run Lox source through the public API and check printed
//! output, values or diagnostics.

#![allow(dead_code, unused_imports)]

use lox_runtime::diagnostic::{exit_code, CollectingReporter, Diagnostic};
use lox_runtime::output::OutputBuffer;
use lox_runtime::{parse_source, Lox, Value};

// Re-export testing utilities
pub use pretty_assertions::{assert_eq, assert_ne};

/// Outcome of running a whole program
pub struct RunOutcome {
    pub stdout: String,
    pub diagnostics: Vec<String>,
    pub exit_code: i32,
}

/// Run a program the way `lox run` does, capturing output and diagnostics
pub fn run(source: &str) -> RunOutcome {
    let out = OutputBuffer::new();
    let mut lox = Lox::with_output(Box::new(out.clone()));
    let mut reporter = CollectingReporter::new();
    lox.run(source, &mut reporter);
    RunOutcome {
        stdout: out.contents(),
        diagnostics: reporter.lines(),
        exit_code: exit_code(&reporter),
    }
}

/// Assert that a program runs cleanly and prints exactly `expected`
pub fn assert_output(source: &str, expected: &str) {
    let outcome = run(source);
    assert!(
        outcome.diagnostics.is_empty(),
        "Expected success, got errors: {:?}",
        outcome.diagnostics
    );
    assert_eq!(outcome.stdout, expected);
}

/// Assert that a program stops with exactly one runtime diagnostic
pub fn assert_runtime_error(source: &str, expected: &str) {
    let outcome = run(source);
    assert_eq!(outcome.diagnostics, vec![expected.to_string()]);
    assert_eq!(outcome.exit_code, lox_runtime::EXIT_RUNTIME_ERROR);
}

/// Evaluate source and return its value
pub fn eval(source: &str) -> Value {
    let mut lox = Lox::with_output(Box::new(OutputBuffer::new()));
    match lox.eval(source) {
        Ok(value) => value,
        Err(diags) => panic!("Expected success, got errors: {:?}", diags),
    }
}

/// Assert that source code evaluates to a number
pub fn assert_eval_number(source: &str, expected: f64) {
    match eval(source) {
        Value::Number(n) => assert_eq!(n, expected, "Expected {}, got {}", expected, n),
        other => panic!("Expected Number({}), got {:?}", expected, other),
    }
}

/// Syntax diagnostics for source, in wire format
pub fn syntax_errors(source: &str) -> Vec<String> {
    let (_, diagnostics) = parse_source(source);
    diagnostics.iter().map(Diagnostic::to_string).collect()
}
