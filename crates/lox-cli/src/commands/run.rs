//! Run command - execute Lox source files

use super::{read_source, StderrReporter};
use anyhow::Result;
use lox_runtime::{exit_code, Lox};

/// Run a Lox source file
///
/// Program output goes to stdout and diagnostics to stderr. Returns the
/// process exit code.
pub fn run(file_path: &str, json: bool) -> Result<i32> {
    let source = read_source(file_path)?;
    tracing::debug!(file = file_path, bytes = source.len(), "running file");

    let mut lox = Lox::new();
    let mut reporter = StderrReporter::new(json);
    lox.run(&source, &mut reporter);

    Ok(exit_code(&reporter))
}
