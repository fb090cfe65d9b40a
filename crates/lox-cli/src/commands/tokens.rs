//! Tokens command - print the token stream of a file

use super::{format_diagnostic, read_source};
use anyhow::Result;
use lox_runtime::{Diagnostic, Lexer, EXIT_OK, EXIT_SYNTAX_ERROR};

/// One `KIND lexeme [literal]` line per token, ending with EOF
pub fn dump(source: &str) -> (String, Vec<Diagnostic>) {
    let (tokens, diagnostics) = Lexer::new(source).tokenize();
    let mut out = String::new();
    for token in &tokens {
        out.push_str(token.to_string().trim_end());
        out.push('\n');
    }
    (out, diagnostics)
}

/// Print the token stream; lex errors go to stderr
pub fn run(file_path: &str, json: bool) -> Result<i32> {
    let source = read_source(file_path)?;
    let (out, diagnostics) = dump(&source);

    print!("{}", out);
    for diagnostic in &diagnostics {
        eprintln!("{}", format_diagnostic(diagnostic, json));
    }

    Ok(if diagnostics.is_empty() {
        EXIT_OK
    } else {
        EXIT_SYNTAX_ERROR
    })
}
