//! Recursive conversion of container elements.
//!
//! Runs after the value already has the container's kind. Element, key and
//! value types are applied through [`Coercer::convert_with_mode`] in the same
//! mode as the container itself.

use std::collections::{BTreeMap, BTreeSet};

use typecoerce_types::{TypeDescriptor, Value};

use crate::engine::{Coercer, Mode};
use crate::error::CoercionError;
use crate::inspect::Origin;

pub(crate) fn compose(
    coercer: &Coercer,
    origin: Origin,
    value: Value,
    target: &TypeDescriptor,
    mode: Mode,
) -> Result<Value, CoercionError> {
    let args = target.args();
    match (origin, value) {
        (Origin::Sequence, Value::List(items)) => {
            let item_type = &args[0];
            let items = items
                .into_iter()
                .map(|item| coercer.convert_with_mode(item, item_type, mode))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Value::List(items))
        }
        (Origin::Set, Value::Set(items)) => {
            let item_type = &args[0];
            let items = items
                .into_iter()
                .map(|item| coercer.convert_with_mode(item, item_type, mode))
                .collect::<Result<BTreeSet<_>, _>>()?;
            Ok(Value::Set(items))
        }
        (Origin::FixedSequence, Value::Tuple(items)) => {
            compose_tuple(coercer, items, args, mode).map(Value::Tuple)
        }
        (Origin::Mapping, Value::Map(entries)) => {
            let [key_type, value_type] = args else {
                return Err(CoercionError::MalformedDescriptor {
                    descriptor: target.clone(),
                    reason: format!("expected 2 type arguments, got {}", args.len()),
                });
            };
            let entries = entries
                .into_iter()
                .map(|(k, v)| {
                    Ok((
                        coercer.convert_with_mode(k, key_type, mode)?,
                        coercer.convert_with_mode(v, value_type, mode)?,
                    ))
                })
                .collect::<Result<BTreeMap<_, _>, CoercionError>>()?;
            Ok(Value::Map(entries))
        }
        (_, other) => Ok(other),
    }
}

/// One argument applies to every position. Several arguments pair with
/// positions in order; positions past the last argument are kept as is.
fn compose_tuple(
    coercer: &Coercer,
    items: Vec<Value>,
    args: &[TypeDescriptor],
    mode: Mode,
) -> Result<Vec<Value>, CoercionError> {
    if let [item_type] = args {
        return items
            .into_iter()
            .map(|item| coercer.convert_with_mode(item, item_type, mode))
            .collect();
    }
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match args.get(i) {
            Some(item_type) => coercer.convert_with_mode(item, item_type, mode),
            None => Ok(item),
        })
        .collect()
}
