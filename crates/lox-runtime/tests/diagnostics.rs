//! Diagnostic wire format, JSON form and exit codes

mod common;

use common::{assert_eq, run, syntax_errors};
use lox_runtime::diagnostic::{exit_code, CollectingReporter, DiagnosticKind, Location, Reporter};
use lox_runtime::{Diagnostic, Lox, OutputBuffer, EXIT_RUNTIME_ERROR, EXIT_SYNTAX_ERROR};
use serde_json::json;

#[test]
fn test_three_location_forms() {
    let errors = syntax_errors("@\nprint 1 2;\nx = 1 = 2;");
    assert_eq!(
        errors,
        vec![
            "[line 1] Error: Unexpected character.",
            "[line 2] Error at '2': Expect ';' after value.",
            "[line 3] Error at '=': Invalid assignment target.",
        ]
    );
    assert_eq!(
        syntax_errors("print"),
        vec!["[line 1] Error at end: Expect expression."]
    );
}

#[test]
fn test_all_syntax_errors_reported_in_one_pass() {
    let outcome = run("var a = \"unterminated;\n");
    assert_eq!(outcome.exit_code, EXIT_SYNTAX_ERROR);
    assert_eq!(
        outcome.diagnostics,
        vec![
            "[line 2] Error: Unterminated string.",
            "[line 2] Error at end: Expect expression.",
        ]
    );
}

#[test]
fn test_syntax_errors_win_over_runtime_errors() {
    let mut reporter = CollectingReporter::new();
    let mut lox = Lox::with_output(Box::new(OutputBuffer::new()));
    lox.run("nope;", &mut reporter);
    assert_eq!(exit_code(&reporter), EXIT_RUNTIME_ERROR);
    lox.run("print ;", &mut reporter);
    assert_eq!(exit_code(&reporter), EXIT_SYNTAX_ERROR);

    reporter.reset();
    assert_eq!(exit_code(&reporter), 0);
    assert!(reporter.diagnostics().is_empty());
}

#[test]
fn test_runtime_diagnostic_fields() {
    let outcome = run("var a = 1;\na();");
    assert_eq!(
        outcome.diagnostics,
        vec!["[line 2] Error at ')': Can only call functions and classes."]
    );

    let mut lox = Lox::with_output(Box::new(OutputBuffer::new()));
    let diagnostic = lox.eval("-nil;").unwrap_err().remove(0);
    assert_eq!(diagnostic.kind, DiagnosticKind::Runtime);
    assert_eq!(diagnostic.location, Location::Token("-".to_string()));
    assert!(!diagnostic.is_syntax());
}

#[test]
fn test_json_shape() {
    let (_, diagnostics) = lox_runtime::parse_source("print");
    let value: serde_json::Value =
        serde_json::from_str(&diagnostics[0].to_json_compact().unwrap()).unwrap();
    assert_eq!(
        value,
        json!({
            "kind": "parse",
            "line": 1,
            "location": { "type": "end" },
            "message": "Expect expression."
        })
    );

    let (_, diagnostics) = lox_runtime::parse_source("1 = 2;");
    let value: serde_json::Value =
        serde_json::from_str(&diagnostics[0].to_json_string().unwrap()).unwrap();
    assert_eq!(value["location"], json!({ "type": "token", "lexeme": "=" }));
}

#[test]
fn test_json_roundtrip_preserves_display() {
    let (_, diagnostics) = lox_runtime::parse_source("@");
    let json = diagnostics[0].to_json_string().unwrap();
    let back: Diagnostic = serde_json::from_str(&json).unwrap();
    assert_eq!(back.to_string(), "[line 1] Error: Unexpected character.");
    insta::assert_snapshot!(json, @r#"
    {
      "kind": "lex",
      "line": 1,
      "location": {
        "type": "line"
      },
      "message": "Unexpected character."
    }
    "#);
}
