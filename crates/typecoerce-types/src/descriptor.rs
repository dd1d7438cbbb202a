//! Target type descriptors.
//!
//! A [`TypeDescriptor`] is a base [`TypeName`] plus ordered type arguments,
//! mirroring how annotated types such as `dict[str, list[int | None]]`
//! decompose into an origin and parameters.

use std::fmt;

/// Base name of a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeName {
    List,
    Dict,
    Tuple,
    Set,
    Str,
    Int,
    Float,
    Bool,
    /// The null type; only meaningful as a union member.
    None,
    Union,
    /// Any other named type. The engine treats these as opaque.
    Named(String),
}

impl TypeName {
    pub fn as_str(&self) -> &str {
        match self {
            TypeName::List => "list",
            TypeName::Dict => "dict",
            TypeName::Tuple => "tuple",
            TypeName::Set => "set",
            TypeName::Str => "str",
            TypeName::Int => "int",
            TypeName::Float => "float",
            TypeName::Bool => "bool",
            TypeName::None => "None",
            TypeName::Union => "Union",
            TypeName::Named(name) => name,
        }
    }
}

/// A target type: base name and type arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    name: TypeName,
    args: Vec<TypeDescriptor>,
}

impl TypeDescriptor {
    /// Raw constructor. Does not check argument counts, so it can express
    /// descriptors the engine rejects as malformed (e.g. `dict[int]`).
    pub fn new(name: TypeName, args: Vec<TypeDescriptor>) -> Self {
        Self { name, args }
    }

    fn bare(name: TypeName) -> Self {
        Self::new(name, vec![])
    }

    pub fn int() -> Self {
        Self::bare(TypeName::Int)
    }

    pub fn float() -> Self {
        Self::bare(TypeName::Float)
    }

    pub fn bool() -> Self {
        Self::bare(TypeName::Bool)
    }

    pub fn str() -> Self {
        Self::bare(TypeName::Str)
    }

    pub fn none() -> Self {
        Self::bare(TypeName::None)
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::bare(TypeName::Named(name.into()))
    }

    pub fn list(item: TypeDescriptor) -> Self {
        Self::new(TypeName::List, vec![item])
    }

    pub fn list_any() -> Self {
        Self::bare(TypeName::List)
    }

    pub fn set(item: TypeDescriptor) -> Self {
        Self::new(TypeName::Set, vec![item])
    }

    pub fn dict(key: TypeDescriptor, value: TypeDescriptor) -> Self {
        Self::new(TypeName::Dict, vec![key, value])
    }

    /// `tuple[A, B, ...]` with one argument per position, or a single
    /// argument applied to every position.
    pub fn tuple(items: impl IntoIterator<Item = TypeDescriptor>) -> Self {
        Self::new(TypeName::Tuple, items.into_iter().collect())
    }

    pub fn tuple_any() -> Self {
        Self::bare(TypeName::Tuple)
    }

    /// `T | None`.
    pub fn optional(inner: TypeDescriptor) -> Self {
        Self::union([inner, Self::none()])
    }

    /// Union of `members`. Nested unions are flattened and repeated
    /// members dropped, keeping first-occurrence order. A single remaining
    /// member is returned as is.
    pub fn union(members: impl IntoIterator<Item = TypeDescriptor>) -> Self {
        let mut flat: Vec<TypeDescriptor> = Vec::new();
        for member in members {
            let parts = if member.is_union() {
                member.args
            } else {
                vec![member]
            };
            for part in parts {
                if !flat.contains(&part) {
                    flat.push(part);
                }
            }
        }
        if flat.len() == 1 {
            return flat.remove(0);
        }
        Self::new(TypeName::Union, flat)
    }

    pub fn name(&self) -> &TypeName {
        &self.name
    }

    pub fn args(&self) -> &[TypeDescriptor] {
        &self.args
    }

    pub fn is_union(&self) -> bool {
        self.name == TypeName::Union
    }

    pub fn is_none(&self) -> bool {
        self.name == TypeName::None
    }

    /// Whether this is a union with a `None` member.
    pub fn is_optional(&self) -> bool {
        self.is_union() && self.args.iter().any(TypeDescriptor::is_none)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_union() {
            if self.args.is_empty() {
                return f.write_str("Union[]");
            }
            for (i, member) in self.args.iter().enumerate() {
                if i > 0 {
                    f.write_str(" | ")?;
                }
                write!(f, "{}", member)?;
            }
            return Ok(());
        }

        f.write_str(self.name.as_str())?;
        if !self.args.is_empty() {
            f.write_str("[")?;
            for (i, arg) in self.args.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", arg)?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_nested() {
        let t = TypeDescriptor::dict(
            TypeDescriptor::str(),
            TypeDescriptor::list(TypeDescriptor::union([
                TypeDescriptor::int(),
                TypeDescriptor::str(),
            ])),
        );
        assert_eq!(t.to_string(), "dict[str, list[int | str]]");
        assert_eq!(
            TypeDescriptor::optional(TypeDescriptor::int()).to_string(),
            "int | None"
        );
        assert_eq!(TypeDescriptor::tuple_any().to_string(), "tuple");
    }

    #[test]
    fn test_union_flattens_and_dedups() {
        let t = TypeDescriptor::union([
            TypeDescriptor::optional(TypeDescriptor::int()),
            TypeDescriptor::str(),
            TypeDescriptor::int(),
            TypeDescriptor::none(),
        ]);
        assert_eq!(
            t.args(),
            &[
                TypeDescriptor::int(),
                TypeDescriptor::none(),
                TypeDescriptor::str()
            ]
        );
        assert!(t.is_optional());
    }

    #[test]
    fn test_single_member_union_collapses() {
        let t = TypeDescriptor::union([TypeDescriptor::float(), TypeDescriptor::float()]);
        assert_eq!(t, TypeDescriptor::float());
        assert!(!t.is_union());
    }
}
