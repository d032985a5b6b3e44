/// Map every element of `seq` through `f` into a newly allocated vector.
///
/// The result has the same length as `seq`, and `result[i] == f(&seq[i])`.
/// `f` is called once per element in index order.
pub fn apply<T, U, F>(seq: &[T], mut f: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    let mut result = Vec::with_capacity(seq.len());
    for item in seq {
        result.push(f(item));
    }
    result
}

/// Like [`apply`], but the callable may fail.
///
/// The first error stops the iteration and is returned as is; no partial
/// result is produced.
pub fn try_apply<T, U, E, F>(seq: &[T], mut f: F) -> Result<Vec<U>, E>
where
    F: FnMut(&T) -> Result<U, E>,
{
    let mut result = Vec::with_capacity(seq.len());
    for item in seq {
        result.push(f(item)?);
    }
    Ok(result)
}

/// Overwrite every element of `seq` with `f` applied to it.
///
/// The element type cannot change as the storage is reused.
pub fn apply_in_place<T, F>(seq: &mut [T], mut f: F)
where
    F: FnMut(&T) -> T,
{
    for item in seq.iter_mut() {
        *item = f(item);
    }
}

/// Like [`apply_in_place`], but the callable may fail.
///
/// When `f` fails at index `i`, elements before `i` have already been
/// overwritten and elements from `i` onward are untouched.
pub fn try_apply_in_place<T, E, F>(seq: &mut [T], mut f: F) -> Result<(), E>
where
    F: FnMut(&T) -> Result<T, E>,
{
    for item in seq.iter_mut() {
        *item = f(item)?;
    }
    Ok(())
}
