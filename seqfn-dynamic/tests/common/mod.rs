// disable dead code warning for this module as not every test file uses
// every helper
#![allow(dead_code)]

use ibig::IBig;
use seqfn_dynamic::{Function, Sequence, Signature, Value, ValueType};

pub(crate) fn integers(items: impl IntoIterator<Item = i64>) -> Value {
    let items = items.into_iter().map(Value::from).collect();
    Sequence::new(ValueType::Integer, items).unwrap().into()
}

pub(crate) fn strings(items: &[&str]) -> Value {
    let items = items.iter().map(|s| Value::from(*s)).collect();
    Sequence::new(ValueType::String, items).unwrap().into()
}

pub(crate) fn function<F>(
    parameter_types: Vec<ValueType>,
    return_type: ValueType,
    body: F,
) -> Value
where
    F: Fn(&[Value]) -> seqfn_dynamic::Result<Value> + 'static,
{
    Function::new(Signature::new(parameter_types, return_type), body).into()
}

pub(crate) fn triple() -> Value {
    function(vec![ValueType::Integer], ValueType::Integer, |args| {
        Ok((args[0].to_integer()? * IBig::from(3)).into())
    })
}

pub(crate) fn is_even() -> Value {
    function(vec![ValueType::Integer], ValueType::Boolean, |args| {
        Ok((args[0].to_integer()? % IBig::from(2) == IBig::from(0)).into())
    })
}

pub(crate) fn multiply() -> Value {
    function(
        vec![ValueType::Integer, ValueType::Integer],
        ValueType::Integer,
        |args| Ok((args[0].to_integer()? * args[1].to_integer()?).into()),
    )
}
