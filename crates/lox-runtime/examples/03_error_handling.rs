//! Error handling example
//!
//! Demonstrates the diagnostics produced by each pipeline stage.
//!
//! Run with: cargo run --example 03_error_handling -p lox-runtime

use lox_runtime::{exit_code, CollectingReporter, Lox};

fn main() {
    let mut lox = Lox::new();

    println!("Demonstrating error handling:\n");

    for (title, source) in [
        ("Lex error", "var x = @;"),
        ("Parse error", "var x = ;"),
        ("Runtime error", "print -\"not a number\";"),
        ("Division by zero", "print 10 / 0;"),
    ] {
        println!("{}:", title);
        match lox.eval(source) {
            Ok(value) => println!("   Result: {}", value),
            Err(diagnostics) => {
                for diagnostic in diagnostics {
                    println!("   {} error: {}", diagnostic.kind, diagnostic);
                }
            }
        }
    }

    // A reporter sees every diagnostic of a run and decides the exit code
    let mut reporter = CollectingReporter::new();
    lox.run("print 1;\nprint undefined;", &mut reporter);
    println!("\nExit code: {}", exit_code(&reporter));
    // Output: Exit code: 70
}
