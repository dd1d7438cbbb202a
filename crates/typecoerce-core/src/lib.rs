//! Typecoerce Core
//!
//! Best-effort conversion of dynamic values to a target type descriptor.
//!
//! This crate provides:
//! - [`inspect`]: descriptor decomposition into an origin and type arguments
//! - [`primitives`]: one coercer per origin kind
//! - [`engine`]: the recursive algorithm and the configurable [`Coercer`]
//! - [`union`]: ordered union resolution
//! - [`typed`]: extraction straight into Rust types
//!
//! # Modes
//!
//! [`type_match`] is strict. The value must already have the target's shape,
//! all the way down, or a [`TypeMismatch`] is returned.
//!
//! [`convert`] is lenient. Mismatches are repaired with deterministic
//! heuristics (`"[1, 2]"` becomes a list, a list becomes its length when an
//! integer is wanted, and so on). Only internal faults fail, as a
//! [`ConversionError`].
//!
//! ```
//! use typecoerce_core::{convert, Value};
//! use typecoerce_types::TypeDescriptor;
//!
//! let target = TypeDescriptor::list(TypeDescriptor::int());
//! let out = convert(&Value::from("[1, \"2\", 3.5]"), &target).unwrap();
//! assert_eq!(out, Value::from(vec![1, 2, 3]));
//! ```

mod compose;
pub mod config;
pub mod engine;
pub mod error;
pub mod inspect;
pub mod primitives;
pub mod typed;
pub mod union;

pub use config::{CoerceConfig, ENV_TEXT_STYLE, ENV_UNWRAP_BOXED};
pub use engine::{Coercer, Mode};
pub use error::{CoercionError, ConversionError, TypeMismatch};
pub use inspect::{inspect, Origin};
pub use typed::Coercible;
pub use typecoerce_types::{TypeDescriptor, Value};

/// Strict conversion with the default configuration.
pub fn type_match(value: &Value, target: &TypeDescriptor) -> Result<Value, CoercionError> {
    Coercer::default().type_match(value, target)
}

/// Lenient conversion with the default configuration.
pub fn convert(value: &Value, target: &TypeDescriptor) -> Result<Value, ConversionError> {
    Coercer::default().convert(value, target)
}

/// Strict conversion into `T` with the default configuration.
pub fn type_match_into<T: Coercible>(value: &Value) -> Result<T, CoercionError> {
    Coercer::default().type_match_into(value)
}

/// Lenient conversion into `T` with the default configuration.
pub fn convert_into<T: Coercible>(value: &Value) -> Result<T, ConversionError> {
    Coercer::default().convert_into(value)
}
