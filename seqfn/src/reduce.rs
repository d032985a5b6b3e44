/// Left fold `seq` with `f`, starting from `zero`.
///
/// The result is `f(...f(f(zero, &seq[0]), &seq[1])..., &seq[n - 1])`, and
/// `zero` itself when `seq` is empty. The seed takes part in the first step
/// on every non-empty input, so the accumulator type `A` is free to differ
/// from the element type `T`. `f` is not assumed to be associative.
///
/// ```
/// let a = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
/// assert_eq!(seqfn::reduce(&a, |acc, x| acc * x, 1), 3628800);
/// ```
pub fn reduce<T, A, F>(seq: &[T], mut f: F, zero: A) -> A
where
    F: FnMut(A, &T) -> A,
{
    let mut accumulator = zero;
    for item in seq {
        accumulator = f(accumulator, item);
    }
    accumulator
}

/// Like [`reduce`], but the combiner may fail.
pub fn try_reduce<T, A, E, F>(seq: &[T], mut f: F, zero: A) -> Result<A, E>
where
    F: FnMut(A, &T) -> Result<A, E>,
{
    let mut accumulator = zero;
    for item in seq {
        accumulator = f(accumulator, item)?;
    }
    Ok(accumulator)
}
