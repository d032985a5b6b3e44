use std::fmt;

use crate::function::Signature;
use crate::value::Value;

/// The runtime type of a value.
///
/// Types are compared structurally; there is no subtyping and no
/// coercion. A sequence of `integer?` is not a sequence of `integer`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ValueType {
    Boolean,
    Integer,
    Float,
    String,
    /// Either a value of the inner type or null.
    Optional(Box<ValueType>),
    /// A sequence with the given element type.
    Sequence(Box<ValueType>),
    Function(Box<Signature>),
}

impl ValueType {
    pub fn optional(inner: ValueType) -> Self {
        ValueType::Optional(Box::new(inner))
    }

    pub fn sequence(element_type: ValueType) -> Self {
        ValueType::Sequence(Box::new(element_type))
    }

    pub fn function(signature: Signature) -> Self {
        ValueType::Function(Box::new(signature))
    }

    /// Check whether `value` is an instance of this type.
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (ValueType::Boolean, Value::Boolean(_)) => true,
            (ValueType::Integer, Value::Integer(_)) => true,
            (ValueType::Float, Value::Float(_)) => true,
            (ValueType::String, Value::String(_)) => true,
            (ValueType::Optional(_), Value::Null) => true,
            (ValueType::Optional(inner), value) => inner.matches(value),
            (ValueType::Sequence(element_type), Value::Sequence(sequence)) => {
                sequence.element_type() == element_type.as_ref()
            }
            (ValueType::Function(signature), Value::Function(function)) => {
                function.signature() == signature.as_ref()
            }
            _ => false,
        }
    }

    pub(crate) fn ensure_matches(&self, value: &Value) -> crate::Result<()> {
        if self.matches(value) {
            Ok(())
        } else {
            Err(crate::Error::TypeMismatch {
                expected: self.clone(),
                found: value.type_name(),
            })
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Boolean => write!(f, "boolean"),
            ValueType::Integer => write!(f, "integer"),
            ValueType::Float => write!(f, "float"),
            ValueType::String => write!(f, "string"),
            ValueType::Optional(inner) => write!(f, "{}?", inner),
            ValueType::Sequence(element_type) => write!(f, "[{}]", element_type),
            ValueType::Function(signature) => write!(f, "{}", signature),
        }
    }
}
