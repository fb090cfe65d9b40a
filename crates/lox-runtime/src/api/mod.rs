//! Public embedding API for the Lox runtime
//!
//! - Native functions built from Rust closures ([`native::NativeFunctionBuilder`])
//! - Value conversion between Rust and Lox types ([`ToValue`], [`FromValue`])
//!
//! # Examples
//!
//! ```
//! use lox_runtime::api::{FromValue, NativeFunctionBuilder, ToValue};
//! use lox_runtime::output::OutputBuffer;
//! use lox_runtime::Lox;
//!
//! let out = OutputBuffer::new();
//! let mut lox = Lox::with_output(Box::new(out.clone()));
//!
//! lox.register_native(
//!     NativeFunctionBuilder::new("half")
//!         .with_arity(1)
//!         .with_implementation(|args| Ok((f64::from_value(&args[0])? / 2.0).to_value()))
//!         .build()
//!         .unwrap(),
//! );
//!
//! lox.eval("print half(9);").unwrap();
//! assert_eq!(out.contents(), "4.5\n");
//! ```

pub mod conversion;
pub mod native;

// Re-export main types for convenience
pub use conversion::{ConversionError, FromValue, ToValue};
pub use native::{BuildError, NativeFunctionBuilder};
