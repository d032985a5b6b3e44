// Argument checks performed on entry to every operation, before any
// element is visited.

use tracing::debug;

use crate::error::{Error, Operation, Result};
use crate::function::Function;
use crate::types::ValueType;
use crate::value::{Sequence, Value};

pub(crate) fn sequence(operation: Operation, value: &Value) -> Result<&Sequence> {
    match value {
        Value::Sequence(sequence) => Ok(sequence),
        _ => Err(not_a_sequence(operation, value)),
    }
}

pub(crate) fn sequence_mut(operation: Operation, value: &mut Value) -> Result<&mut Sequence> {
    match value {
        Value::Sequence(sequence) => Ok(sequence),
        _ => Err(not_a_sequence(operation, value)),
    }
}

fn not_a_sequence(operation: Operation, value: &Value) -> Error {
    let found = value.type_name();
    debug!(%operation, %found, "rejected non-sequence argument");
    Error::NotASequence { operation, found }
}

/// Check that `value` is a function taking exactly `parameter_types`.
///
/// A `return_type` of `None` accepts any return type.
pub(crate) fn function<'a>(
    operation: Operation,
    value: &'a Value,
    parameter_types: &[ValueType],
    return_type: Option<&ValueType>,
) -> Result<&'a Function> {
    debug_assert_eq!(parameter_types.len(), operation.arity());
    if let Value::Function(function) = value {
        let signature = function.signature();
        let return_type_ok = match return_type {
            Some(return_type) => signature.return_type() == return_type,
            None => true,
        };
        if signature.parameter_types() == parameter_types && return_type_ok {
            return Ok(function);
        }
    }
    let expected = describe(parameter_types, return_type);
    let found = value.type_name();
    debug!(%operation, %expected, %found, "rejected function signature");
    Err(Error::SignatureMismatch {
        operation,
        expected,
        found,
    })
}

/// Check that `value` is a combiner of type `fn(A, T) -> A` for the
/// element type `T`, where the seed `zero` is an instance of `A`.
pub(crate) fn combiner<'a>(
    operation: Operation,
    value: &'a Value,
    element_type: &ValueType,
    zero: &Value,
) -> Result<&'a Function> {
    if let Value::Function(function) = value {
        let signature = function.signature();
        if let [accumulator_type, item_type] = signature.parameter_types() {
            if item_type == element_type
                && accumulator_type == signature.return_type()
                && accumulator_type.matches(zero)
            {
                return Ok(function);
            }
        }
    }
    // a null seed fits any optional accumulator type
    let accumulator = match zero.value_type() {
        Some(accumulator_type) => accumulator_type.to_string(),
        None => "_?".to_string(),
    };
    let expected = format!("fn({accumulator}, {element_type}) -> {accumulator}");
    let found = value.type_name();
    debug!(%operation, %expected, %found, "rejected combiner signature");
    Err(Error::SignatureMismatch {
        operation,
        expected,
        found,
    })
}

fn describe(parameter_types: &[ValueType], return_type: Option<&ValueType>) -> String {
    let parameters = parameter_types
        .iter()
        .map(|parameter_type| parameter_type.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    match return_type {
        Some(return_type) => format!("fn({}) -> {}", parameters, return_type),
        None => format!("fn({}) -> any", parameters),
    }
}
