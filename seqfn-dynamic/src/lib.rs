//! Sequence operations over dynamically typed values.
//!
//! This is the counterpart of the `seqfn` crate for callers that only know
//! their element types at runtime. Sequences and functions are passed as
//! opaque [`Value`]s; before any element is touched, each operation checks
//! that the first argument is a sequence and that the function's signature
//! fits the sequence's element type.
//!
//! ```
//! use ibig::IBig;
//! use seqfn_dynamic::{apply, Function, Sequence, Signature, Value, ValueType};
//!
//! let seq: Value = Sequence::new(ValueType::Integer, vec![1.into(), 2.into()])?.into();
//! let triple = Function::new(
//!     Signature::new(vec![ValueType::Integer], ValueType::Integer),
//!     |args| Ok((args[0].to_integer()? * IBig::from(3)).into()),
//! );
//! let result = apply(&seq, &triple.into())?;
//! let expected = Sequence::new(ValueType::Integer, vec![3.into(), 6.into()])?;
//! assert_eq!(result, Value::from(expected));
//! # Ok::<(), seqfn_dynamic::Error>(())
//! ```
mod check;
mod error;
mod function;
mod ops;
mod types;
mod value;

pub use error::{Error, Operation, Result};
pub use function::{Function, Signature};
pub use ops::{apply, apply_in_place, choose, choose_in_place, drop, drop_in_place, reduce};
pub use types::ValueType;
pub use value::{Sequence, Value};
