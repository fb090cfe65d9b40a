//! Standard library natives
//!
//! Every interpreter starts with these bound in its global scope.

use crate::callable::NativeFunction;
use crate::interpreter::Interpreter;
use crate::value::{NativeError, Value};
use std::time::{SystemTime, UNIX_EPOCH};

/// Names of the natives installed by [`register_all`]
pub const BUILTINS: &[&str] = &["clock"];

/// Check if a name refers to a standard native
pub fn is_builtin(name: &str) -> bool {
    BUILTINS.contains(&name)
}

/// Bind every standard native in the interpreter's globals
pub fn register_all(interpreter: &mut Interpreter) {
    interpreter.define_native(NativeFunction::new("clock", 0, |_| clock()));
}

/// Seconds since the UNIX epoch, with sub-second precision
pub fn clock() -> Result<Value, NativeError> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| NativeError::new(format!("System clock is before the epoch: {}", e)))?;
    Ok(Value::Number(elapsed.as_secs_f64()))
}
