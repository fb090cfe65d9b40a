pub mod ast;
pub mod repl;
pub mod run;
pub mod tokens;

use anyhow::{Context, Result};
use lox_runtime::diagnostic::{Diagnostic, Reporter};
use lox_runtime::RuntimeError;
use std::fs;

/// Read a source file, naming it in the error
pub(crate) fn read_source(file_path: &str) -> Result<String> {
    fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read source file: {}", file_path))
}

/// Render one diagnostic as a human line or a single-line JSON object
pub(crate) fn format_diagnostic(diagnostic: &Diagnostic, json: bool) -> String {
    if json {
        match diagnostic.to_json_compact() {
            Ok(line) => return line,
            Err(err) => tracing::warn!(error = %err, "could not serialize diagnostic"),
        }
    }
    diagnostic.to_string()
}

/// Reporter that writes each diagnostic to stderr as it arrives
pub struct StderrReporter {
    json: bool,
    had_error: bool,
    had_runtime_error: bool,
}

impl StderrReporter {
    pub fn new(json: bool) -> Self {
        Self {
            json,
            had_error: false,
            had_runtime_error: false,
        }
    }
}

impl Reporter for StderrReporter {
    fn error(&mut self, diagnostic: Diagnostic) {
        self.had_error = true;
        eprintln!("{}", format_diagnostic(&diagnostic, self.json));
    }

    fn runtime_error(&mut self, error: &RuntimeError) {
        self.had_runtime_error = true;
        eprintln!("{}", format_diagnostic(&Diagnostic::runtime(error), self.json));
    }

    fn had_error(&self) -> bool {
        self.had_error
    }

    fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }

    fn reset(&mut self) {
        self.had_error = false;
        self.had_runtime_error = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lox_runtime::{exit_code, parse_source, EXIT_OK, EXIT_SYNTAX_ERROR};

    #[test]
    fn test_format_diagnostic() {
        let (_, diagnostics) = parse_source("print");
        assert_eq!(
            format_diagnostic(&diagnostics[0], false),
            "[line 1] Error at end: Expect expression."
        );
        assert_eq!(
            format_diagnostic(&diagnostics[0], true),
            r#"{"kind":"parse","line":1,"location":{"type":"end"},"message":"Expect expression."}"#
        );
    }

    #[test]
    fn test_stderr_reporter_flags() {
        let mut reporter = StderrReporter::new(false);
        let (_, diagnostics) = parse_source("1 +;");
        for diagnostic in diagnostics {
            reporter.error(diagnostic);
        }
        assert_eq!(exit_code(&reporter), EXIT_SYNTAX_ERROR);
        reporter.reset();
        assert_eq!(exit_code(&reporter), EXIT_OK);
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source("definitely/not/here.lox").unwrap_err();
        assert!(err.to_string().contains("definitely/not/here.lox"));
    }
}
