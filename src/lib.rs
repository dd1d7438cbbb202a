//! Typecoerce
//!
//! Best-effort coercion of dynamic values to static type descriptors:
//!
//! - **Strict matching**: [`type_match`] checks a value already has the
//!   target's shape, recursively
//! - **Lenient conversion**: [`convert`] repairs whatever does not match
//! - **Typed extraction**: [`convert_into`] lands the result in a Rust type
//! - **Descriptor parsing**: [`parse_type_descriptor`] reads annotation
//!   strings such as `Dict[str, Optional[List[int]]]`
//!
//! See [`typecoerce_core`] for the conversion rules and [`typecoerce_types`]
//! for the value model.

pub use typecoerce_core::{
    convert, convert_into, inspect, type_match, type_match_into, CoerceConfig, Coercer, Coercible,
    CoercionError, ConversionError, Mode, Origin, TypeMismatch,
};
pub use typecoerce_types::{
    parse_text, parse_type_descriptor, to_text, TextStyle, TypeDescriptor, TypeName, Value,
    ValueKind,
};
