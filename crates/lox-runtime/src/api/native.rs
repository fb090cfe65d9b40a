//! Native function builder
//!
//! Host closures become Lox-callable functions through
//! [`NativeFunctionBuilder`]. The interpreter checks the argument count
//! against the declared arity before the closure runs, so the closure can
//! index `args` directly.
//!
//! # Examples
//!
//! ```
//! use lox_runtime::api::native::NativeFunctionBuilder;
//! use lox_runtime::api::FromValue;
//! use lox_runtime::Value;
//!
//! let hypot = NativeFunctionBuilder::new("hypot")
//!     .with_arity(2)
//!     .with_implementation(|args| {
//!         let a = f64::from_value(&args[0])?;
//!         let b = f64::from_value(&args[1])?;
//!         Ok(Value::Number(a.hypot(b)))
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(hypot.arity, 2);
//! ```

use crate::callable::NativeFunction;
use crate::value::{NativeError, Value};
use thiserror::Error;

type NativeFnImpl = Box<dyn Fn(&[Value]) -> Result<Value, NativeError>>;

/// Builder for [`NativeFunction`]
pub struct NativeFunctionBuilder {
    name: String,
    arity: usize,
    implementation: Option<NativeFnImpl>,
}

impl NativeFunctionBuilder {
    /// Start a builder for a native bound under `name`
    ///
    /// Arity defaults to zero.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arity: 0,
            implementation: None,
        }
    }

    /// Set the exact number of arguments the function accepts
    pub fn with_arity(mut self, arity: usize) -> Self {
        self.arity = arity;
        self
    }

    /// Set the function body
    ///
    /// Conversion failures from [`FromValue`](super::FromValue) propagate
    /// with `?` since `ConversionError` converts into `NativeError`.
    pub fn with_implementation<F>(mut self, implementation: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, NativeError> + 'static,
    {
        self.implementation = Some(Box::new(implementation));
        self
    }

    /// Finish the function
    pub fn build(self) -> Result<NativeFunction, BuildError> {
        if self.name.is_empty() {
            return Err(BuildError::EmptyName);
        }
        if self.arity > crate::parser::MAX_ARITY {
            return Err(BuildError::TooManyParameters {
                name: self.name,
                arity: self.arity,
            });
        }
        let implementation = self
            .implementation
            .ok_or_else(|| BuildError::MissingImplementation(self.name.clone()))?;

        Ok(NativeFunction::new(self.name, self.arity, implementation))
    }
}

/// Errors that can occur when building a native function
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// No implementation was provided
    #[error("Native function '{0}' missing implementation")]
    MissingImplementation(String),
    /// The name cannot be bound as a global
    #[error("Native function name cannot be empty")]
    EmptyName,
    /// Source code could never call it
    #[error("Native function '{name}' declares {arity} parameters; the limit is 255")]
    TooManyParameters { name: String, arity: usize },
}
