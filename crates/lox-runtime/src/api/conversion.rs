//! Conversion between Rust and Lox values
//!
//! - `ToValue` turns a Rust value into a Lox [`Value`]
//! - `FromValue` unpacks a Lox [`Value`], failing with [`ConversionError`]
//!
//! # Examples
//!
//! ```
//! use lox_runtime::api::{FromValue, ToValue};
//! use lox_runtime::Value;
//!
//! let number: Value = 42.0.to_value();
//! let text: Value = "hello".to_value();
//!
//! assert_eq!(f64::from_value(&number).unwrap(), 42.0);
//! assert_eq!(String::from_value(&text).unwrap(), "hello");
//! assert!(bool::from_value(&number).is_err());
//! ```

use crate::value::{NativeError, Value};
use thiserror::Error;

/// Error type for value conversion failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The value has a different type than requested
    #[error("Expected {expected} but got {found}.")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

impl ConversionError {
    fn mismatch(expected: &'static str, value: &Value) -> Self {
        ConversionError::TypeMismatch {
            expected,
            found: value.type_name(),
        }
    }
}

impl From<ConversionError> for NativeError {
    fn from(err: ConversionError) -> Self {
        NativeError::new(err.to_string())
    }
}

/// Trait for converting Lox `Value` to Rust types
pub trait FromValue: Sized {
    /// # Errors
    ///
    /// Returns `ConversionError` if the value has the wrong type.
    fn from_value(value: &Value) -> Result<Self, ConversionError>;
}

/// Trait for converting Rust types to Lox `Value`
pub trait ToValue {
    fn to_value(self) -> Value;
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        match value {
            Value::Number(n) => Ok(*n),
            _ => Err(ConversionError::mismatch("number", value)),
        }
    }
}

impl ToValue for f64 {
    fn to_value(self) -> Value {
        Value::Number(self)
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        match value {
            Value::Bool(b) => Ok(*b),
            _ => Err(ConversionError::mismatch("bool", value)),
        }
    }
}

impl ToValue for bool {
    fn to_value(self) -> Value {
        Value::Bool(self)
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        match value {
            Value::String(s) => Ok(s.to_string()),
            _ => Err(ConversionError::mismatch("string", value)),
        }
    }
}

impl ToValue for String {
    fn to_value(self) -> Value {
        Value::from(self)
    }
}

impl ToValue for &str {
    fn to_value(self) -> Value {
        Value::string(self)
    }
}

// () is nil

impl FromValue for () {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        match value {
            Value::Nil => Ok(()),
            _ => Err(ConversionError::mismatch("nil", value)),
        }
    }
}

impl ToValue for () {
    fn to_value(self) -> Value {
        Value::Nil
    }
}

// Option<T>: nil is None

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        match value {
            Value::Nil => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(self) -> Value {
        match self {
            Some(inner) => inner.to_value(),
            None => Value::Nil,
        }
    }
}

impl FromValue for Value {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        Ok(value.clone())
    }
}

impl ToValue for Value {
    fn to_value(self) -> Value {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_to_value() {
        assert_eq!(1.5.to_value(), Value::Number(1.5));
        assert_eq!(true.to_value(), Value::Bool(true));
        assert_eq!("s".to_value(), Value::string("s"));
        assert_eq!(String::from("t").to_value(), Value::string("t"));
        assert_eq!(().to_value(), Value::Nil);
        assert_eq!(None::<f64>.to_value(), Value::Nil);
        assert_eq!(Some(2.0).to_value(), Value::Number(2.0));
    }

    #[test]
    fn test_from_value() {
        assert_eq!(f64::from_value(&Value::Number(3.0)), Ok(3.0));
        assert_eq!(bool::from_value(&Value::Bool(false)), Ok(false));
        assert_eq!(String::from_value(&Value::string("x")), Ok("x".to_string()));
        assert_eq!(<()>::from_value(&Value::Nil), Ok(()));
        assert_eq!(Option::<f64>::from_value(&Value::Nil), Ok(None));
        assert_eq!(Option::<f64>::from_value(&Value::Number(1.0)), Ok(Some(1.0)));
    }

    #[rstest]
    #[case(Value::Nil, "number", "nil")]
    #[case(Value::Bool(true), "number", "bool")]
    #[case(Value::string("1"), "number", "string")]
    fn test_number_mismatch(
        #[case] value: Value,
        #[case] expected: &'static str,
        #[case] found: &'static str,
    ) {
        assert_eq!(
            f64::from_value(&value),
            Err(ConversionError::TypeMismatch { expected, found })
        );
    }

    #[test]
    fn test_mismatch_becomes_native_error() {
        let err: NativeError = bool::from_value(&Value::Number(1.0)).unwrap_err().into();
        assert_eq!(err.to_string(), "Expected bool but got number.");
    }
}
