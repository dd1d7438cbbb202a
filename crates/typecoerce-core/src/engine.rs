//! The recursive conversion algorithm.
//!
//! ## How It Works
//!
//! 1. Unwrap a boxed value (lenient mode, when configured)
//! 2. [`inspect`] the target into an origin and type arguments
//! 3. Unions go to the resolver, opaque targets pass the value through
//! 4. A value that already has the origin's kind is kept; otherwise strict
//!    mode reports a mismatch and lenient mode runs the primitive coercer
//! 5. Containers with type arguments are rebuilt element by element

use tracing::{trace, warn};
use typecoerce_types::{TypeDescriptor, Value};

use crate::compose::compose;
use crate::config::CoerceConfig;
use crate::error::{CoercionError, ConversionError};
use crate::inspect::{inspect, Origin};
use crate::primitives;
use crate::typed::Coercible;
use crate::union::resolve_union;

/// How mismatches are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Report mismatches.
    Strict,
    /// Repair mismatches.
    Lenient,
}

/// Converts values to target descriptors.
///
/// Stateless apart from its configuration; one instance can serve any
/// number of threads.
#[derive(Debug, Clone, Default)]
pub struct Coercer {
    config: CoerceConfig,
}

impl Coercer {
    pub fn new(config: CoerceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CoerceConfig {
        &self.config
    }

    /// Strict conversion: `value` must already match `target`, recursively.
    pub fn type_match(
        &self,
        value: &Value,
        target: &TypeDescriptor,
    ) -> Result<Value, CoercionError> {
        self.convert_with_mode(value.clone(), target, Mode::Strict)
    }

    /// Lenient conversion: repair whatever does not match.
    ///
    /// Any failure that escapes the repair heuristics is reported once, as a
    /// [`ConversionError`] carrying `value` and `target`.
    pub fn convert(
        &self,
        value: &Value,
        target: &TypeDescriptor,
    ) -> Result<Value, ConversionError> {
        self.convert_with_mode(value.clone(), target, Mode::Lenient)
            .map_err(|source| {
                warn!(target_type = %target, error = %source, "lenient conversion failed");
                ConversionError::new(value.clone(), target.clone(), source)
            })
    }

    /// Strict conversion into a Rust type.
    pub fn type_match_into<T: Coercible>(&self, value: &Value) -> Result<T, CoercionError> {
        let target = T::descriptor();
        let converted = self.type_match(value, &target)?;
        T::from_value(converted.clone())
            .ok_or_else(|| CoercionError::mismatch(converted, &target))
    }

    /// Lenient conversion into a Rust type.
    ///
    /// Fails when the converted value still does not fit `T`, which can
    /// happen when a union gives up and hands back the original value.
    pub fn convert_into<T: Coercible>(&self, value: &Value) -> Result<T, ConversionError> {
        let target = T::descriptor();
        let converted = self.convert(value, &target)?;
        T::from_value(converted.clone()).ok_or_else(|| {
            let cause = CoercionError::mismatch(converted, &target);
            ConversionError::new(value.clone(), target.clone(), cause)
        })
    }

    /// One step of the algorithm, re-entered for every nested element.
    pub fn convert_with_mode(
        &self,
        value: Value,
        target: &TypeDescriptor,
        mode: Mode,
    ) -> Result<Value, CoercionError> {
        let value = match value {
            Value::Boxed(inner) if mode == Mode::Lenient && self.config.unwrap_boxed => *inner,
            other => other,
        };

        let (origin, args) = inspect(target);
        trace!(
            origin = %origin,
            target_type = %target,
            value_kind = %value.kind(),
            ?mode,
            "dispatch"
        );

        match origin {
            Origin::Union => resolve_union(self, value, target, args, mode),
            Origin::Opaque => Ok(value),
            _ => {
                let shaped = if origin.accepts(&value) {
                    value
                } else if mode == Mode::Strict {
                    return Err(CoercionError::mismatch(value, target));
                } else {
                    self.coerce_primitive(origin, value)?
                };
                if args.is_empty() || !origin.is_container() {
                    Ok(shaped)
                } else {
                    compose(self, origin, shaped, target, mode)
                }
            }
        }
    }

    fn coerce_primitive(&self, origin: Origin, value: Value) -> Result<Value, CoercionError> {
        Ok(match origin {
            Origin::Sequence => Value::List(primitives::to_sequence(value)),
            Origin::Mapping => Value::Map(primitives::to_mapping(value)),
            Origin::FixedSequence => Value::Tuple(primitives::to_fixed_sequence(value)),
            Origin::Set => Value::Set(primitives::to_set(value)),
            Origin::Text => Value::Str(primitives::to_text(value, self.config.text_style)),
            Origin::Integer => Value::Int(primitives::to_integer(value)?),
            Origin::Real => Value::Float(primitives::to_real(value)),
            Origin::Boolean => Value::Bool(primitives::to_boolean(value)),
            Origin::Union | Origin::Opaque => value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use typecoerce_types::TextStyle;

    fn v(json: serde_json::Value) -> Value {
        Value::from_json(json)
    }

    #[test]
    fn test_strict_accepts_matching_scalar() {
        let c = Coercer::default();
        assert_eq!(c.type_match(&Value::Int(5), &TypeDescriptor::int()).unwrap(), Value::Int(5));
        assert!(c
            .type_match(&Value::from("5"), &TypeDescriptor::int())
            .unwrap_err()
            .is_mismatch());
    }

    #[test]
    fn test_strict_recurses_into_elements() {
        let c = Coercer::default();
        let target = TypeDescriptor::list(TypeDescriptor::int());
        assert!(c.type_match(&v(json!([1, 2])), &target).is_ok());
        let err = c.type_match(&v(json!([1, "2"])), &target).unwrap_err();
        match err {
            CoercionError::Mismatch(m) => {
                assert_eq!(m.value, Value::from("2"));
                assert_eq!(m.expected, TypeDescriptor::int());
            }
            other => panic!("expected mismatch, got {other}"),
        }
    }

    #[test]
    fn test_lenient_unwraps_boxed() {
        let c = Coercer::default();
        let boxed = Value::Boxed(Box::new(v(json!([1, 2]))));
        assert_eq!(c.convert(&boxed, &TypeDescriptor::int()).unwrap(), Value::Int(2));

        let keep = Coercer::new(CoerceConfig::default().with_unwrap_boxed(false));
        assert_eq!(keep.convert(&boxed, &TypeDescriptor::int()).unwrap(), Value::Int(0));
        assert_eq!(
            keep.convert(&boxed, &TypeDescriptor::list_any()).unwrap(),
            Value::List(vec![boxed.clone()])
        );
    }

    #[test]
    fn test_strict_never_unwraps() {
        let c = Coercer::default();
        let boxed = Value::Boxed(Box::new(Value::Int(1)));
        assert!(c.type_match(&boxed, &TypeDescriptor::int()).is_err());
    }

    #[test]
    fn test_text_style_config() {
        let compact = Coercer::new(CoerceConfig::default().with_text_style(TextStyle::Compact));
        assert_eq!(
            compact.convert(&v(json!([1, 2])), &TypeDescriptor::str()).unwrap(),
            Value::from("[1,2]")
        );
        assert_eq!(
            Coercer::default()
                .convert(&v(json!([1, 2])), &TypeDescriptor::str())
                .unwrap(),
            Value::from("[1, 2]")
        );
    }

    #[test]
    fn test_opaque_passthrough_in_both_modes() {
        let c = Coercer::default();
        let target = TypeDescriptor::named("Decimal");
        let value = v(json!({"x": [1]}));
        assert_eq!(c.convert(&value, &target).unwrap(), value);
        assert_eq!(c.type_match(&value, &target).unwrap(), value);
    }

    #[test]
    fn test_scalar_ignores_type_args() {
        let c = Coercer::default();
        let target = TypeDescriptor::new(
            typecoerce_types::TypeName::Int,
            vec![TypeDescriptor::str()],
        );
        assert_eq!(c.convert(&Value::from("7"), &target).unwrap(), Value::Int(7));
    }

    #[test]
    fn test_overflow_is_wrapped() {
        let c = Coercer::default();
        let err = c
            .convert(&Value::from("1e300"), &TypeDescriptor::int())
            .unwrap_err();
        assert_eq!(err.value, Value::from("1e300"));
        assert_eq!(err.target, TypeDescriptor::int());
        assert!(matches!(err.cause(), CoercionError::IntegerOverflow { .. }));
    }
}
