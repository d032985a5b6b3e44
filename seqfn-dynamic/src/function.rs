use std::fmt;
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::types::ValueType;
use crate::value::Value;

/// A function signature: parameter types and a single return type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Signature {
    parameter_types: Vec<ValueType>,
    return_type: ValueType,
}

impl Signature {
    pub fn new(parameter_types: Vec<ValueType>, return_type: ValueType) -> Self {
        Self {
            parameter_types,
            return_type,
        }
    }

    /// The parameter types of the function.
    pub fn parameter_types(&self) -> &[ValueType] {
        &self.parameter_types
    }

    /// The return type of the function.
    pub fn return_type(&self) -> &ValueType {
        &self.return_type
    }

    /// Return the arity of the function signature.
    pub fn arity(&self) -> usize {
        self.parameter_types.len()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fn(")?;
        for (i, parameter_type) in self.parameter_types.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", parameter_type)?;
        }
        write!(f, ") -> {}", self.return_type)
    }
}

type Body = dyn Fn(&[Value]) -> Result<Value>;

/// A callable value with a declared signature.
///
/// The body is shared, so cloning a function is cheap. Two functions are
/// equal when they have the same signature and share the same body.
#[derive(Clone)]
pub struct Function {
    signature: Signature,
    body: Rc<Body>,
}

impl Function {
    pub fn new<F>(signature: Signature, body: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value> + 'static,
    {
        Self {
            signature,
            body: Rc::new(body),
        }
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn arity(&self) -> usize {
        self.signature.arity()
    }

    /// Call the function.
    ///
    /// The arguments are checked against the parameter types and the
    /// result against the return type. An error returned by the body is
    /// passed through as is.
    pub fn call(&self, arguments: &[Value]) -> Result<Value> {
        if arguments.len() != self.arity() {
            return Err(Error::ArityMismatch {
                expected: self.arity(),
                found: arguments.len(),
            });
        }
        for (parameter_type, argument) in self.signature.parameter_types.iter().zip(arguments) {
            parameter_type.ensure_matches(argument)?;
        }
        let result = (self.body)(arguments)?;
        self.signature.return_type.ensure_matches(&result)?;
        Ok(result)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.signature == other.signature && Rc::ptr_eq(&self.body, &other.body)
    }
}
