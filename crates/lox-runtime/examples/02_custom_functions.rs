//! Custom native functions example
//!
//! Demonstrates registering Rust functions callable from Lox code.
//!
//! Run with: cargo run --example 02_custom_functions -p lox-runtime

use lox_runtime::api::{FromValue, NativeFunctionBuilder, ToValue};
use lox_runtime::Lox;

fn main() {
    let mut lox = Lox::new();

    let double = NativeFunctionBuilder::new("double")
        .with_arity(1)
        .with_implementation(|args| {
            let n = f64::from_value(&args[0])?;
            Ok((n * 2.0).to_value())
        })
        .build()
        .expect("Failed to build double");
    lox.register_native(double);

    let result = lox.eval("double(21);").expect("Failed");
    println!("double(21) = {}", result);
    // Output: double(21) = 42

    let repeat = NativeFunctionBuilder::new("repeat")
        .with_arity(2)
        .with_implementation(|args| {
            let text = String::from_value(&args[0])?;
            let times = f64::from_value(&args[1])?;
            Ok(text.repeat(times.max(0.0) as usize).to_value())
        })
        .build()
        .expect("Failed to build repeat");
    lox.register_native(repeat);

    let result = lox.eval(r#"repeat("ab", 3);"#).expect("Failed");
    println!("repeat(\"ab\", 3) = {}", result);
    // Output: repeat("ab", 3) = ababab

    // Natives compose with Lox functions
    lox.eval("fun square(x) { return double(x) * x / 2; }")
        .expect("Failed");
    let result = lox.eval("square(5);").expect("Failed");
    println!("square(5) = {}", result);
    // Output: square(5) = 25

    // Wrong argument types surface as runtime errors
    let diagnostics = lox.eval("double(\"x\");").unwrap_err();
    println!("{}", diagnostics[0]);
    // Output: [line 1] Error at ')': Expected number but got string.
}
