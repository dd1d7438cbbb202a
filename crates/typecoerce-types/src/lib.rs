//! Shared types for the typecoerce workspace.
//!
//! This crate holds the data the coercion engine operates on, kept apart
//! from the engine so callers can build values and descriptors without
//! pulling in conversion logic:
//!
//! - [`Value`](value::Value) - the dynamic value universe
//! - [`TypeDescriptor`](descriptor::TypeDescriptor) - target type descriptors
//! - [`json`] - the JSON parse/serialize bridge
//! - [`type_parsing`] - annotation-string parsing for descriptors

pub mod descriptor;
pub mod env_utils;
pub mod json;
pub mod type_parsing;
pub mod value;

pub use descriptor::{TypeDescriptor, TypeName};
pub use json::{parse_text, to_text, TextStyle};
pub use type_parsing::{parse_type_descriptor, split_type_params};
pub use value::{Value, ValueKind};
