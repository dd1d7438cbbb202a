//! Coercion error types.
//!
//! Strict conversion reports [`TypeMismatch`]. Internal faults (a malformed
//! descriptor, a number that does not fit the integer kind) surface as the
//! other [`CoercionError`] variants. Lenient conversion wraps whichever of
//! these escaped into a single [`ConversionError`].

use typecoerce_types::{TypeDescriptor, Value};

/// A value whose kind cannot be reconciled with the target without repair.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeMismatch {
    /// The offending value
    pub value: Value,
    /// The target it was checked against
    pub expected: TypeDescriptor,
}

impl TypeMismatch {
    pub fn new(value: Value, expected: TypeDescriptor) -> Self {
        Self { value, expected }
    }
}

impl std::fmt::Display for TypeMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Value {} ({}) is not of expected type {}",
            self.value,
            self.value.kind(),
            self.expected
        )
    }
}

impl std::error::Error for TypeMismatch {}

/// Failure raised by a single conversion step.
#[derive(Debug, Clone, PartialEq)]
pub enum CoercionError {
    /// Strict mode: the value does not already match the target.
    Mismatch(TypeMismatch),

    /// The descriptor cannot drive a conversion (e.g. `dict` with one argument).
    MalformedDescriptor {
        descriptor: TypeDescriptor,
        reason: String,
    },

    /// A parsed number has no integer representation.
    IntegerOverflow {
        /// The value being converted
        value: Value,
        /// What it parsed to
        parsed: f64,
    },
}

impl CoercionError {
    pub fn mismatch(value: Value, expected: &TypeDescriptor) -> Self {
        CoercionError::Mismatch(TypeMismatch::new(value, expected.clone()))
    }

    pub fn is_mismatch(&self) -> bool {
        matches!(self, CoercionError::Mismatch(_))
    }
}

impl std::fmt::Display for CoercionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoercionError::Mismatch(m) => write!(f, "{}", m),
            CoercionError::MalformedDescriptor { descriptor, reason } => {
                write!(f, "Malformed type descriptor {}: {}", descriptor, reason)
            }
            CoercionError::IntegerOverflow { value, parsed } => {
                write!(
                    f,
                    "Cannot represent {} (parsed as {}) as an integer",
                    value, parsed
                )
            }
        }
    }
}

impl std::error::Error for CoercionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CoercionError::Mismatch(m) => Some(m),
            _ => None,
        }
    }
}

impl From<TypeMismatch> for CoercionError {
    fn from(m: TypeMismatch) -> Self {
        CoercionError::Mismatch(m)
    }
}

/// Lenient conversion gave up on an internal fault.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionError {
    /// The value handed to `convert`
    pub value: Value,
    /// The requested target
    pub target: TypeDescriptor,
    source: CoercionError,
}

impl ConversionError {
    pub fn new(value: Value, target: TypeDescriptor, source: CoercionError) -> Self {
        Self {
            value,
            target,
            source,
        }
    }

    /// The underlying failure.
    pub fn cause(&self) -> &CoercionError {
        &self.source
    }
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to convert {} to {}", self.value, self.target)
    }
}

impl std::error::Error for ConversionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_mismatch_message() {
        let err = CoercionError::mismatch(Value::Null, &TypeDescriptor::int());
        assert_eq!(err.to_string(), "Value null (null) is not of expected type int");
        assert!(err.is_mismatch());
        assert!(err.source().is_some());
    }

    #[test]
    fn test_conversion_error_chain() {
        let target = TypeDescriptor::new(
            typecoerce_types::TypeName::Dict,
            vec![TypeDescriptor::int()],
        );
        let cause = CoercionError::MalformedDescriptor {
            descriptor: target.clone(),
            reason: "expected 2 type arguments, got 1".to_string(),
        };
        let err = ConversionError::new(Value::from("x"), target, cause.clone());
        assert_eq!(err.to_string(), "Failed to convert \"x\" to dict[int]");
        assert_eq!(err.cause(), &cause);
        let source = err.source().map(|s| s.to_string()).unwrap_or_default();
        assert!(source.contains("expected 2 type arguments"));
    }
}
