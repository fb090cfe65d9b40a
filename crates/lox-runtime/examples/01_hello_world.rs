//! Minimal embedding example
//!
//! Run with: cargo run --example 01_hello_world -p lox-runtime

use lox_runtime::Lox;

fn main() {
    let mut lox = Lox::new();

    let result = lox.eval("1 + 2;").expect("Failed to evaluate");
    println!("Result: {}", result);
    // Output: Result: 3

    let result = lox
        .eval(r#""Hello, " + "World!";"#)
        .expect("Failed to evaluate");
    println!("Result: {}", result);
    // Output: Result: Hello, World!

    // Definitions persist between calls
    lox.eval(r#"fun greet(name) { return "Hello, " + name + "!"; }"#)
        .expect("Failed to define function");

    let result = lox.eval(r#"greet("Lox");"#).expect("Failed to call function");
    println!("Result: {}", result);
    // Output: Result: Hello, Lox!

    // `print` goes straight to stdout
    lox.eval("for (var i = 0; i < 3; i = i + 1) print i;")
        .expect("Failed to run loop");
}
