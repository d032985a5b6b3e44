//! Higher-order operations over homogeneous, ordered sequences.
//!
//! Five operations are offered: [`apply`] (map), [`choose`] (keep the
//! elements a predicate accepts), [`drop`] (keep the elements a predicate
//! rejects), their in-place variants, and [`reduce`] (a seeded left fold).
//!
//! Every operation invokes the user callable exactly once per element, in
//! strictly increasing index order. Callables with side effects may rely on
//! this.
//!
//! ```
//! let numbers = [1, 2, 3, 4, 5, 6, 7, 8, 9];
//! assert_eq!(seqfn::apply(&numbers, |x| x * 3)[..3], [3, 6, 9]);
//! assert_eq!(seqfn::choose(&numbers, |x| x % 2 == 0), [2, 4, 6, 8]);
//! assert_eq!(seqfn::reduce(&numbers, |a, x| a * x, 1), 362880);
//! ```
//!
//! Each operation has a `try_` counterpart that accepts a fallible callable.
//! The first error the callable returns is handed back unchanged.
mod apply;
mod filter;
mod reduce;
mod seq;

pub use apply::{apply, apply_in_place, try_apply, try_apply_in_place};
pub use filter::{
    choose, choose_in_place, drop, drop_in_place, try_choose, try_choose_in_place, try_drop,
    try_drop_in_place,
};
pub use reduce::{reduce, try_reduce};
pub use seq::SeqMut;
