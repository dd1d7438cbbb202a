//! Typed extraction.
//!
//! [`Coercible`] ties a Rust type to the descriptor it converts through, so
//! callers can write `convert_into::<Vec<i64>>(&value)` instead of building
//! the descriptor and unpacking the result by hand.

use std::collections::{BTreeMap, BTreeSet};

use typecoerce_types::{TypeDescriptor, Value};

/// A Rust type with a matching [`TypeDescriptor`].
pub trait Coercible: Sized {
    /// The target a value is converted to before extraction.
    fn descriptor() -> TypeDescriptor;

    /// Extract from a value that has already been converted to
    /// [`Self::descriptor`]. `None` when its shape does not fit.
    fn from_value(value: Value) -> Option<Self>;
}

impl Coercible for bool {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::bool()
    }

    fn from_value(value: Value) -> Option<Self> {
        value.as_bool()
    }
}

impl Coercible for i64 {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::int()
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Int(n) => Some(n),
            _ => None,
        }
    }
}

impl Coercible for f64 {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::float()
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Float(f) => Some(f),
            _ => None,
        }
    }
}

impl Coercible for String {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::str()
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

/// Anything goes.
impl Coercible for Value {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::named("Any")
    }

    fn from_value(value: Value) -> Option<Self> {
        Some(value)
    }
}

impl<T: Coercible> Coercible for Option<T> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::optional(T::descriptor())
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Null => Some(None),
            other => T::from_value(other).map(Some),
        }
    }
}

impl<T: Coercible> Coercible for Vec<T> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::list(T::descriptor())
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::List(items) => items.into_iter().map(T::from_value).collect(),
            _ => None,
        }
    }
}

impl<T: Coercible + Ord> Coercible for BTreeSet<T> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::set(T::descriptor())
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Set(items) => items.into_iter().map(T::from_value).collect(),
            _ => None,
        }
    }
}

impl<K: Coercible + Ord, V: Coercible> Coercible for BTreeMap<K, V> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::dict(K::descriptor(), V::descriptor())
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Map(entries) => entries
                .into_iter()
                .map(|(k, v)| Some((K::from_value(k)?, V::from_value(v)?)))
                .collect(),
            _ => None,
        }
    }
}

impl<A: Coercible, B: Coercible> Coercible for (A, B) {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::tuple([A::descriptor(), B::descriptor()])
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Tuple(items) => {
                let [a, b] = <[Value; 2]>::try_from(items).ok()?;
                Some((A::from_value(a)?, B::from_value(b)?))
            }
            _ => None,
        }
    }
}

impl<A: Coercible, B: Coercible, C: Coercible> Coercible for (A, B, C) {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::tuple([A::descriptor(), B::descriptor(), C::descriptor()])
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Tuple(items) => {
                let [a, b, c] = <[Value; 3]>::try_from(items).ok()?;
                Some((A::from_value(a)?, B::from_value(b)?, C::from_value(c)?))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Coercer;
    use serde_json::json;

    fn v(json: serde_json::Value) -> Value {
        Value::from_json(json)
    }

    #[test]
    fn test_descriptors() {
        assert_eq!(
            <BTreeMap<String, Vec<Option<i64>>>>::descriptor().to_string(),
            "dict[str, list[int | None]]"
        );
        assert_eq!(<(bool, f64)>::descriptor().to_string(), "tuple[bool, float]");
    }

    #[test]
    fn test_convert_into_nested() {
        let c = Coercer::default();
        let out: BTreeMap<String, Vec<i64>> =
            c.convert_into(&v(json!({"a": "[1, 2]", "b": 3.5}))).unwrap();
        assert_eq!(out["a"], vec![1, 2]);
        assert_eq!(out["b"], vec![3]);
    }

    #[test]
    fn test_convert_into_tuple() {
        let c = Coercer::default();
        let out: (i64, String) = c.convert_into(&v(json!(["7", 8]))).unwrap();
        assert_eq!(out, (7, "8".to_string()));
        // Too short to fill the pair.
        assert!(c.convert_into::<(i64, String)>(&v(json!([1]))).is_err());
    }

    #[test]
    fn test_type_match_into() {
        let c = Coercer::default();
        let out: Vec<Option<bool>> = c.type_match_into(&v(json!([true, null]))).unwrap();
        assert_eq!(out, vec![Some(true), None]);
        assert!(c.type_match_into::<Vec<bool>>(&v(json!([1]))).is_err());
    }

    #[test]
    fn test_optional_extraction() {
        let c = Coercer::default();
        assert_eq!(c.convert_into::<Option<i64>>(&Value::Null).unwrap(), None);
        assert_eq!(c.convert_into::<Option<i64>>(&Value::from("4")).unwrap(), Some(4));
    }

    #[test]
    fn test_union_fallthrough_is_reported() {
        let c = Coercer::default();
        // The int member overflows, so the union hands back the text.
        let huge = Value::from("1e300");
        let target = <Option<i64>>::descriptor();
        assert_eq!(c.convert(&huge, &target).unwrap(), huge);

        let err = c.convert_into::<Option<i64>>(&huge).unwrap_err();
        assert_eq!(err.value, huge);
        assert_eq!(err.target, target);
        assert!(err.cause().is_mismatch());
    }
}
