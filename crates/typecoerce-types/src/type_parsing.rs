//! Type string parsing utilities.
//!
//! Parses annotation-style type strings into [`TypeDescriptor`]s so callers
//! (and the CLI) can name targets without building descriptors by hand.

use crate::descriptor::{TypeDescriptor, TypeName};

/// Parse an annotation-style type string into a TypeDescriptor.
///
/// Supports:
/// - Builtins: `int`, `float`, `bool`, `str`, `list`, `dict`, `tuple`, `set`, `None`
/// - Typing aliases: `List`, `Dict`, `Tuple`, `Set`, `Optional[T]`, `Union[A, B]`,
///   `NoneType`, with or without a `typing.` prefix
/// - Parameters: `dict[str, list[int]]`, and `tuple[T, ...]` for a homogeneous tuple
/// - Unions: `int | str | None`
///
/// Any other identifier (including `Any`) becomes an opaque named type.
///
/// # Examples
///
/// ```
/// use typecoerce_types::{parse_type_descriptor, TypeDescriptor};
///
/// let t = parse_type_descriptor("Optional[list[int]]").unwrap();
/// assert_eq!(t, TypeDescriptor::optional(TypeDescriptor::list(TypeDescriptor::int())));
/// ```
pub fn parse_type_descriptor(type_str: &str) -> Option<TypeDescriptor> {
    let type_str = type_str.trim();
    if type_str.is_empty() {
        return None;
    }

    let members = split_top_level(type_str, '|')?;
    if members.len() > 1 {
        let parsed = members
            .into_iter()
            .map(parse_type_descriptor)
            .collect::<Option<Vec<_>>>()?;
        return Some(TypeDescriptor::union(parsed));
    }

    let (base, args) = match type_str.find('[') {
        Some(open) => {
            let inner = type_str[open + 1..].strip_suffix(']')?;
            (type_str[..open].trim(), Some(parse_type_args(inner)?))
        }
        None => (type_str, None),
    };

    let base = base.strip_prefix("typing.").unwrap_or(base);
    if !is_identifier(base) {
        return None;
    }
    let args = args.unwrap_or_default();

    let name = match base {
        "int" => TypeName::Int,
        "float" => TypeName::Float,
        "bool" => TypeName::Bool,
        "str" => TypeName::Str,
        "list" | "List" => TypeName::List,
        "dict" | "Dict" => TypeName::Dict,
        "set" | "Set" => TypeName::Set,
        "tuple" | "Tuple" => return Some(parse_tuple(args)),
        "None" | "NoneType" => TypeName::None,
        "Optional" => {
            let [inner] = <[TypeArg; 1]>::try_from(args).ok()?;
            return Some(TypeDescriptor::optional(inner.into_descriptor()?));
        }
        "Union" => {
            let members = args
                .into_iter()
                .map(TypeArg::into_descriptor)
                .collect::<Option<Vec<_>>>()?;
            return Some(TypeDescriptor::union(members));
        }
        other => TypeName::Named(other.to_string()),
    };

    let args = args
        .into_iter()
        .map(TypeArg::into_descriptor)
        .collect::<Option<Vec<_>>>()?;
    Some(TypeDescriptor::new(name, args))
}

/// One parsed entry of a `[...]` parameter list.
enum TypeArg {
    Type(TypeDescriptor),
    Ellipsis,
}

impl TypeArg {
    fn into_descriptor(self) -> Option<TypeDescriptor> {
        match self {
            TypeArg::Type(t) => Some(t),
            TypeArg::Ellipsis => None,
        }
    }
}

/// `tuple[T, ...]` is homogeneous; an ellipsis in any other position
/// becomes an opaque `...` member.
fn parse_tuple(args: Vec<TypeArg>) -> TypeDescriptor {
    let mut items = Vec::with_capacity(args.len());
    let homogeneous = args.len() == 2 && matches!(args[1], TypeArg::Ellipsis);
    for arg in args {
        match arg {
            TypeArg::Type(t) => items.push(t),
            TypeArg::Ellipsis if homogeneous => {}
            TypeArg::Ellipsis => items.push(TypeDescriptor::named("...")),
        }
    }
    TypeDescriptor::tuple(items)
}

/// Parse type arguments string like "T1, T2, T3" (without the brackets).
fn parse_type_args(inner: &str) -> Option<Vec<TypeArg>> {
    if inner.trim().is_empty() {
        return Some(vec![]);
    }

    let mut args = vec![];
    let parts = split_top_level(inner, ',')?;
    let last = parts.len() - 1;
    for (i, part) in parts.into_iter().enumerate() {
        if part.is_empty() {
            // Tolerate a trailing comma, nothing else.
            if i == last {
                continue;
            }
            return None;
        }
        if part == "..." {
            args.push(TypeArg::Ellipsis);
        } else {
            args.push(TypeArg::Type(parse_type_descriptor(part)?));
        }
    }
    Some(args)
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '.')
        && !s.starts_with(|c: char| c.is_ascii_digit())
}

/// Split at `sep` outside square brackets. Returns `None` on unbalanced
/// brackets.
fn split_top_level(s: &str, sep: char) -> Option<Vec<&str>> {
    let mut result = Vec::new();
    let mut depth: i32 = 0;
    let mut start = 0;

    for (i, c) in s.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth < 0 {
                    return None;
                }
            }
            c if c == sep && depth == 0 => {
                result.push(s[start..i].trim());
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }

    if depth != 0 {
        return None;
    }
    result.push(s[start..].trim());
    Some(result)
}

/// Split type parameters respecting nested square brackets.
///
/// Given "A, B[C, D], E", returns ["A", "B[C, D]", "E"] by tracking bracket depth.
pub fn split_type_params(s: &str) -> Vec<&str> {
    split_top_level(s, ',')
        .unwrap_or_else(|| vec![s.trim()])
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect()
}
