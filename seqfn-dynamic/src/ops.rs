use std::slice;

use tracing::trace;

use crate::check;
use crate::error::{Operation, Result};
use crate::function::Function;
use crate::types::ValueType;
use crate::value::{Sequence, Value};

/// Apply `function` to every element of the sequence `seq`.
///
/// `function` must take exactly the element type of `seq`; its return type
/// can be anything and becomes the element type of the new sequence.
pub fn apply(seq: &Value, function: &Value) -> Result<Value> {
    let operation = Operation::Apply;
    let sequence = check::sequence(operation, seq)?;
    let function = check::function(
        operation,
        function,
        slice::from_ref(sequence.element_type()),
        None,
    )?;
    trace!(%operation, len = sequence.len());
    let items = seqfn::try_apply(sequence.items(), |item| call1(function, item))?;
    let element_type = function.signature().return_type().clone();
    Ok(Sequence::new_unchecked(element_type, items).into())
}

/// Like [`apply`], but overwrites the elements of `seq`.
///
/// `function` must return the element type of `seq`. If `function` fails
/// part way, the elements before the failing one have been overwritten.
pub fn apply_in_place(seq: &mut Value, function: &Value) -> Result<()> {
    let operation = Operation::ApplyInPlace;
    let sequence = check::sequence_mut(operation, seq)?;
    let element_type = sequence.element_type().clone();
    let function = check::function(
        operation,
        function,
        slice::from_ref(&element_type),
        Some(&element_type),
    )?;
    trace!(%operation, len = sequence.len());
    seqfn::try_apply_in_place(sequence.items_mut(), |item| call1(function, item))
}

/// Return a new sequence with the elements of `seq` for which the boolean
/// `function` returns true.
pub fn choose(seq: &Value, function: &Value) -> Result<Value> {
    choose_or_drop(Operation::Choose, seq, function, true)
}

/// Return a new sequence with the elements of `seq` for which the boolean
/// `function` returns false.
pub fn drop(seq: &Value, function: &Value) -> Result<Value> {
    choose_or_drop(Operation::Drop, seq, function, false)
}

/// Like [`choose`], but compacts `seq` itself.
///
/// If `function` fails part way, the length of `seq` is unchanged and the
/// order of its elements is unspecified.
pub fn choose_in_place(seq: &mut Value, function: &Value) -> Result<()> {
    choose_or_drop_in_place(Operation::ChooseInPlace, seq, function, true)
}

/// Like [`drop`], but compacts `seq` itself.
pub fn drop_in_place(seq: &mut Value, function: &Value) -> Result<()> {
    choose_or_drop_in_place(Operation::DropInPlace, seq, function, false)
}

/// Left fold the sequence `seq` with `function`, starting from `zero`.
///
/// `function` must be of type `fn(A, T) -> A`, where `T` is the element type
/// of `seq` and `zero` is an instance of `A`. An empty sequence returns
/// `zero`.
pub fn reduce(seq: &Value, function: &Value, zero: &Value) -> Result<Value> {
    let operation = Operation::Reduce;
    let sequence = check::sequence(operation, seq)?;
    let function = check::combiner(operation, function, sequence.element_type(), zero)?;
    trace!(%operation, len = sequence.len());
    seqfn::try_reduce(
        sequence.items(),
        |accumulator, item| function.call(&[accumulator, item.clone()]),
        zero.clone(),
    )
}

fn choose_or_drop(
    operation: Operation,
    seq: &Value,
    function: &Value,
    truth: bool,
) -> Result<Value> {
    let sequence = check::sequence(operation, seq)?;
    let function = check::function(
        operation,
        function,
        slice::from_ref(sequence.element_type()),
        Some(&ValueType::Boolean),
    )?;
    trace!(%operation, len = sequence.len());
    let predicate = |item: &Value| call1(function, item)?.to_bool();
    let items = if truth {
        seqfn::try_choose(sequence.items(), predicate)?
    } else {
        seqfn::try_drop(sequence.items(), predicate)?
    };
    Ok(Sequence::new_unchecked(sequence.element_type().clone(), items).into())
}

fn choose_or_drop_in_place(
    operation: Operation,
    seq: &mut Value,
    function: &Value,
    truth: bool,
) -> Result<()> {
    let sequence = check::sequence_mut(operation, seq)?;
    let function = check::function(
        operation,
        function,
        slice::from_ref(sequence.element_type()),
        Some(&ValueType::Boolean),
    )?;
    trace!(%operation, len = sequence.len());
    let predicate = |item: &Value| call1(function, item)?.to_bool();
    if truth {
        seqfn::try_choose_in_place(sequence.items_mut(), predicate)
    } else {
        seqfn::try_drop_in_place(sequence.items_mut(), predicate)
    }
}

fn call1(function: &Function, item: &Value) -> Result<Value> {
    function.call(slice::from_ref(item))
}
