use std::rc::Rc;

use ibig::IBig;
use ordered_float::OrderedFloat;

use crate::error::{Error, Result};
use crate::function::Function;
use crate::types::ValueType;

/// A dynamically typed value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absent value; an instance of any optional type.
    Null,
    Boolean(bool),
    Integer(IBig),
    Float(OrderedFloat<f64>),
    String(Rc<str>),
    Sequence(Sequence),
    Function(Function),
}

impl Value {
    /// The type of this value, or `None` for null, which belongs to every
    /// optional type.
    pub fn value_type(&self) -> Option<ValueType> {
        match self {
            Value::Null => None,
            Value::Boolean(_) => Some(ValueType::Boolean),
            Value::Integer(_) => Some(ValueType::Integer),
            Value::Float(_) => Some(ValueType::Float),
            Value::String(_) => Some(ValueType::String),
            Value::Sequence(sequence) => Some(ValueType::sequence(sequence.element_type().clone())),
            Value::Function(function) => Some(ValueType::function(function.signature().clone())),
        }
    }

    /// A human readable name for the type of this value, used in errors.
    pub fn type_name(&self) -> String {
        match self.value_type() {
            Some(value_type) => value_type.to_string(),
            None => "null".to_string(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn to_bool(&self) -> Result<bool> {
        match self {
            Value::Boolean(b) => Ok(*b),
            _ => Err(self.mismatch(ValueType::Boolean)),
        }
    }

    pub fn to_integer(&self) -> Result<&IBig> {
        match self {
            Value::Integer(i) => Ok(i),
            _ => Err(self.mismatch(ValueType::Integer)),
        }
    }

    pub fn to_float(&self) -> Result<f64> {
        match self {
            Value::Float(f) => Ok(f.into_inner()),
            _ => Err(self.mismatch(ValueType::Float)),
        }
    }

    pub fn to_str(&self) -> Result<&str> {
        match self {
            Value::String(s) => Ok(s),
            _ => Err(self.mismatch(ValueType::String)),
        }
    }

    fn mismatch(&self, expected: ValueType) -> Error {
        Error::TypeMismatch {
            expected,
            found: self.type_name(),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i.into())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i.into())
    }
}

impl From<IBig> for Value {
    fn from(i: IBig) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(OrderedFloat(f))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s.into())
    }
}

impl From<Sequence> for Value {
    fn from(sequence: Sequence) -> Self {
        Value::Sequence(sequence)
    }
}

impl From<Function> for Value {
    fn from(function: Function) -> Self {
        Value::Function(function)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => value.into(),
            None => Value::Null,
        }
    }
}

/// An ordered sequence of values that all share one element type.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    element_type: ValueType,
    items: Vec<Value>,
}

impl Sequence {
    /// Create a sequence, checking that every item is an instance of
    /// `element_type`.
    pub fn new(element_type: ValueType, items: Vec<Value>) -> Result<Self> {
        for item in &items {
            element_type.ensure_matches(item)?;
        }
        Ok(Self {
            element_type,
            items,
        })
    }

    pub fn empty(element_type: ValueType) -> Self {
        Self {
            element_type,
            items: Vec::new(),
        }
    }

    // callers guarantee that items are instances of element_type
    pub(crate) fn new_unchecked(element_type: ValueType, items: Vec<Value>) -> Self {
        Self {
            element_type,
            items,
        }
    }

    pub fn element_type(&self) -> &ValueType {
        &self.element_type
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Value] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn into_items(self) -> Vec<Value> {
        self.items
    }

    pub(crate) fn items_mut(&mut self) -> &mut Vec<Value> {
        &mut self.items
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
