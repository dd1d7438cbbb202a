//! Type descriptor inspection.
//!
//! [`inspect`] is the only place a descriptor is mapped to an [`Origin`],
//! and [`Origin::accepts`] the only place a value's runtime kind is checked
//! against one. Everything downstream dispatches on the origin tag.

use std::fmt;

use typecoerce_types::{TypeDescriptor, TypeName, Value, ValueKind};

/// Base kind a conversion dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    Sequence,
    Mapping,
    FixedSequence,
    Text,
    Set,
    Integer,
    Real,
    Boolean,
    Union,
    /// Unrecognized; values pass through unchanged.
    Opaque,
}

impl Origin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::Sequence => "sequence",
            Origin::Mapping => "mapping",
            Origin::FixedSequence => "fixed-sequence",
            Origin::Text => "text",
            Origin::Set => "set",
            Origin::Integer => "integer",
            Origin::Real => "real",
            Origin::Boolean => "boolean",
            Origin::Union => "union",
            Origin::Opaque => "opaque",
        }
    }

    /// Whether element types of this origin are composed recursively.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            Origin::Sequence | Origin::Mapping | Origin::FixedSequence | Origin::Set
        )
    }

    /// The value kind that already satisfies this origin, if any.
    pub fn value_kind(&self) -> Option<ValueKind> {
        match self {
            Origin::Sequence => Some(ValueKind::List),
            Origin::Mapping => Some(ValueKind::Map),
            Origin::FixedSequence => Some(ValueKind::Tuple),
            Origin::Text => Some(ValueKind::Str),
            Origin::Set => Some(ValueKind::Set),
            Origin::Integer => Some(ValueKind::Int),
            Origin::Real => Some(ValueKind::Float),
            Origin::Boolean => Some(ValueKind::Bool),
            Origin::Union | Origin::Opaque => None,
        }
    }

    /// Whether `value` already has this origin's runtime kind.
    pub fn accepts(&self, value: &Value) -> bool {
        self.value_kind() == Some(value.kind())
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decompose `target` into its origin and type arguments.
///
/// A union yields [`Origin::Union`] with its members, `None` included. A
/// bare descriptor is its own origin with no arguments. The null type and
/// named types are [`Origin::Opaque`].
pub fn inspect(target: &TypeDescriptor) -> (Origin, &[TypeDescriptor]) {
    let origin = match target.name() {
        TypeName::List => Origin::Sequence,
        TypeName::Dict => Origin::Mapping,
        TypeName::Tuple => Origin::FixedSequence,
        TypeName::Set => Origin::Set,
        TypeName::Str => Origin::Text,
        TypeName::Int => Origin::Integer,
        TypeName::Float => Origin::Real,
        TypeName::Bool => Origin::Boolean,
        TypeName::Union => Origin::Union,
        TypeName::None | TypeName::Named(_) => Origin::Opaque,
    };
    (origin, target.args())
}
