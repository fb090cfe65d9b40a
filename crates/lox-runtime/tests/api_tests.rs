//! Embedding API: natives, conversions, globals, custom reporters

mod common;

use common::assert_eq;
use lox_runtime::api::{BuildError, ConversionError, FromValue, NativeFunctionBuilder, ToValue};
use lox_runtime::diagnostic::{Diagnostic, Reporter};
use lox_runtime::{Lox, NativeError, NativeFunction, OutputBuffer, RuntimeError, Value};
use std::cell::Cell;
use std::rc::Rc;

fn lox() -> (Lox, OutputBuffer) {
    let out = OutputBuffer::new();
    (Lox::with_output(Box::new(out.clone())), out)
}

#[test]
fn test_native_with_conversions() {
    let (mut lox, out) = lox();
    lox.register_native(
        NativeFunctionBuilder::new("repeat")
            .with_arity(2)
            .with_implementation(|args| {
                let text = String::from_value(&args[0])?;
                let times = f64::from_value(&args[1])?;
                if times < 0.0 || times.fract() != 0.0 {
                    return Err(NativeError::new("repeat count must be a whole number."));
                }
                Ok(text.repeat(times as usize).to_value())
            })
            .build()
            .unwrap(),
    );

    lox.eval("print repeat(\"ab\", 3);").unwrap();
    assert_eq!(out.contents(), "ababab\n");

    let diagnostics = lox.eval("repeat(\"ab\", 1.5);").unwrap_err();
    assert_eq!(
        diagnostics[0].to_string(),
        "[line 1] Error at ')': repeat count must be a whole number."
    );
}

#[test]
fn test_native_state_is_shared_with_host() {
    let calls = Rc::new(Cell::new(0));
    let seen = calls.clone();

    let (mut lox, _) = lox();
    lox.register_native(NativeFunction::new("tick", 0, move |_| {
        seen.set(seen.get() + 1);
        Ok(Value::Nil)
    }));
    lox.eval("for (var i = 0; i < 5; i = i + 1) tick();").unwrap();
    assert_eq!(calls.get(), 5);
}

#[test]
fn test_native_can_be_passed_around() {
    let (mut lox, out) = lox();
    lox.register_native(NativeFunction::new("double", 1, |args| {
        Ok((f64::from_value(&args[0])? * 2.0).to_value())
    }));
    lox.eval("fun twice(f, x) { return f(f(x)); } print twice(double, 3);")
        .unwrap();
    assert_eq!(out.contents(), "12\n");
}

#[test]
fn test_build_errors() {
    assert_eq!(
        NativeFunctionBuilder::new("f").build().unwrap_err(),
        BuildError::MissingImplementation("f".to_string())
    );
}

#[test]
fn test_conversion_error_message() {
    assert_eq!(
        String::from_value(&Value::Nil),
        Err(ConversionError::TypeMismatch {
            expected: "string",
            found: "nil"
        })
    );
}

#[test]
fn test_globals_roundtrip() {
    let (mut lox, _) = lox();
    lox.set_global("greeting", "hello");
    lox.eval("var reply = greeting + \", world\";").unwrap();
    let reply = lox.get_global("reply").unwrap();
    assert_eq!(String::from_value(&reply).unwrap(), "hello, world");
}

#[test]
fn test_user_function_value_from_host() {
    let (mut lox, _) = lox();
    let value = lox.eval("fun named(a, b) {} named;").unwrap();
    let Value::Callable(callable) = value else {
        panic!("expected a callable, got {:?}", value);
    };
    assert_eq!(callable.name(), "named");
    assert_eq!(callable.arity(), 2);
    assert_eq!(callable.to_string(), "<fn named>");
}

/// Reporter that only counts
#[derive(Default)]
struct CountingReporter {
    errors: usize,
    runtime_errors: usize,
}

impl Reporter for CountingReporter {
    fn error(&mut self, _diagnostic: Diagnostic) {
        self.errors += 1;
    }

    fn runtime_error(&mut self, _error: &RuntimeError) {
        self.runtime_errors += 1;
    }

    fn had_error(&self) -> bool {
        self.errors > 0
    }

    fn had_runtime_error(&self) -> bool {
        self.runtime_errors > 0
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

#[test]
fn test_custom_reporter() {
    let (mut lox, _) = lox();
    let mut reporter = CountingReporter::default();
    lox.run("print (; print );", &mut reporter);
    assert_eq!(reporter.errors, 2);
    lox.run("nil();", &mut reporter);
    assert_eq!(reporter.runtime_errors, 1);
    assert_eq!(lox_runtime::exit_code(&reporter), lox_runtime::EXIT_SYNTAX_ERROR);
}
