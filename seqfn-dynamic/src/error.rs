use strum_macros::{Display, EnumIter};
use thiserror::Error;

use crate::types::ValueType;

/// The sequence operation that raised an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Operation {
    Apply,
    ApplyInPlace,
    Choose,
    Drop,
    ChooseInPlace,
    DropInPlace,
    Reduce,
}

impl Operation {
    /// The number of arguments the operation's function must take.
    pub fn arity(&self) -> usize {
        match self {
            Operation::Reduce => 2,
            _ => 1,
        }
    }
}

/// Errors raised by the dynamic sequence operations.
///
/// `NotASequence` and `SignatureMismatch` are programmer errors: they are
/// raised before any element is visited. `Raised` is the error a user
/// function returns to fail; it is passed through untouched.
#[derive(Debug, Error, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Error {
    #[error("{operation}: not a sequence: {found}")]
    NotASequence { operation: Operation, found: String },
    #[error("{operation}: function must be of type {expected}, found {found}")]
    SignatureMismatch {
        operation: Operation,
        expected: String,
        found: String,
    },
    #[error("function takes {expected} argument(s), called with {found}")]
    ArityMismatch { expected: usize, found: usize },
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: ValueType, found: String },
    #[error("{0}")]
    Raised(String),
}

pub type Result<T> = std::result::Result<T, Error>;
