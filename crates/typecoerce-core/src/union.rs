//! Union resolution.
//!
//! Members are tried in declared order, in the caller's mode. The first
//! member that converts wins. A member failure of any kind counts as a
//! rejection and moves on to the next member.

use tracing::debug;
use typecoerce_types::{TypeDescriptor, Value};

use crate::engine::{Coercer, Mode};
use crate::error::CoercionError;

/// Run `strategies` in order and return the first success, or every
/// failure in order when none succeeds.
pub fn first_success<T, E, I, F>(strategies: I) -> Result<T, Vec<E>>
where
    I: IntoIterator<Item = F>,
    F: FnOnce() -> Result<T, E>,
{
    let mut failures = Vec::new();
    for strategy in strategies {
        match strategy() {
            Ok(value) => return Ok(value),
            Err(e) => failures.push(e),
        }
    }
    Err(failures)
}

pub(crate) fn resolve_union(
    coercer: &Coercer,
    value: Value,
    target: &TypeDescriptor,
    members: &[TypeDescriptor],
    mode: Mode,
) -> Result<Value, CoercionError> {
    if value.is_null() {
        return if members.iter().any(TypeDescriptor::is_none) || mode == Mode::Lenient {
            Ok(value)
        } else {
            Err(CoercionError::mismatch(value, target))
        };
    }

    let strategies = members
        .iter()
        .filter(|member| !member.is_none())
        .map(|member| {
            let value = &value;
            move || {
                coercer
                    .convert_with_mode(value.clone(), member, mode)
                    .map_err(|err| {
                        debug!(member = %member, error = %err, "union member rejected");
                        err
                    })
            }
        });

    match first_success(strategies) {
        Ok(converted) => Ok(converted),
        Err(_) if mode == Mode::Lenient => Ok(value),
        Err(_) => Err(CoercionError::mismatch(value, target)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use typecoerce_types::TypeName;

    fn int_or_str() -> TypeDescriptor {
        TypeDescriptor::union([TypeDescriptor::int(), TypeDescriptor::str()])
    }

    fn str_or_int() -> TypeDescriptor {
        TypeDescriptor::union([TypeDescriptor::str(), TypeDescriptor::int()])
    }

    #[test]
    fn test_first_success_stops_early() {
        let mut calls = 0;
        let strategies: Vec<Box<dyn FnOnce() -> Result<i32, &'static str> + '_>> = vec![
            Box::new(|| Err("a")),
            Box::new(|| Ok(2)),
            Box::new(|| {
                calls += 1;
                Ok(3)
            }),
        ];
        let result = first_success(strategies);
        assert_eq!(result, Ok(2));
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_first_success_collects_failures() {
        let result: Result<(), Vec<u8>> =
            first_success((1..=3u8).map(|n| move || Err::<(), u8>(n)));
        assert_eq!(result, Err(vec![1, 2, 3]));
    }

    #[test]
    fn test_member_order_matters_in_lenient_mode() {
        let c = Coercer::default();
        let abc = Value::from("abc");
        assert_eq!(c.convert(&abc, &int_or_str()).unwrap(), Value::Int(0));
        assert_eq!(c.convert(&abc, &str_or_int()).unwrap(), abc);
    }

    #[test]
    fn test_strict_picks_matching_member() {
        let c = Coercer::default();
        let abc = Value::from("abc");
        assert_eq!(c.type_match(&abc, &int_or_str()).unwrap(), abc);
        assert_eq!(c.type_match(&abc, &str_or_int()).unwrap(), abc);
        assert_eq!(c.type_match(&Value::Int(4), &str_or_int()).unwrap(), Value::Int(4));
    }

    #[test]
    fn test_strict_all_members_fail() {
        let c = Coercer::default();
        let target = TypeDescriptor::union([TypeDescriptor::int(), TypeDescriptor::bool()]);
        let err = c.type_match(&Value::Float(1.5), &target).unwrap_err();
        match err {
            CoercionError::Mismatch(m) => assert_eq!(m.expected, target),
            other => panic!("expected mismatch, got {other}"),
        }
    }

    #[test]
    fn test_lenient_union_falls_back_to_original() {
        let c = Coercer::default();
        let broken = TypeDescriptor::new(TypeName::Dict, vec![TypeDescriptor::int()]);
        let target = TypeDescriptor::union([broken, TypeDescriptor::named("Other")]);
        // The opaque member accepts anything.
        assert_eq!(c.convert(&Value::Int(1), &target).unwrap(), Value::Int(1));

        let only_broken = TypeDescriptor::new(
            TypeName::Union,
            vec![TypeDescriptor::new(TypeName::Dict, vec![TypeDescriptor::int()])],
        );
        let value = Value::from("{\"a\": 1}");
        assert_eq!(c.convert(&value, &only_broken).unwrap(), value);
    }

    #[test]
    fn test_null_handling() {
        let c = Coercer::default();
        let optional = TypeDescriptor::optional(TypeDescriptor::int());
        assert_eq!(c.type_match(&Value::Null, &optional).unwrap(), Value::Null);
        assert_eq!(c.convert(&Value::Null, &optional).unwrap(), Value::Null);

        assert!(c.type_match(&Value::Null, &int_or_str()).unwrap_err().is_mismatch());
        assert_eq!(c.convert(&Value::Null, &int_or_str()).unwrap(), Value::Null);
    }

    #[test]
    fn test_optional_converts_inner() {
        let c = Coercer::default();
        let optional = TypeDescriptor::optional(TypeDescriptor::list(TypeDescriptor::int()));
        assert_eq!(
            c.convert(&Value::from("[\"1\"]"), &optional).unwrap(),
            Value::List(vec![Value::Int(1)])
        );
    }
}
