use crate::seq::SeqMut;

/// Return a new vector with the elements of `seq` that satisfy `predicate`.
///
/// The kept elements are cloned and keep their original relative order.
/// `predicate` is called once per element in index order.
pub fn choose<T, F>(seq: &[T], predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    choose_or_drop(seq, predicate, true)
}

/// Return a new vector with the elements of `seq` that do not satisfy
/// `predicate`, that is, with the satisfying elements removed.
///
/// `choose(seq, p)` and `drop(seq, p)` together partition `seq`.
///
/// A glob import (`use seqfn::*`) brings this function in over
/// `std::mem::drop` from the prelude; call the latter by its full path.
pub fn drop<T, F>(seq: &[T], predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    choose_or_drop(seq, predicate, false)
}

/// Like [`choose`], but the predicate may fail.
pub fn try_choose<T, E, F>(seq: &[T], predicate: F) -> Result<Vec<T>, E>
where
    T: Clone,
    F: FnMut(&T) -> Result<bool, E>,
{
    try_choose_or_drop(seq, predicate, true)
}

/// Like [`drop`], but the predicate may fail.
pub fn try_drop<T, E, F>(seq: &[T], predicate: F) -> Result<Vec<T>, E>
where
    T: Clone,
    F: FnMut(&T) -> Result<bool, E>,
{
    try_choose_or_drop(seq, predicate, false)
}

/// Keep only the elements that satisfy `predicate`, shrinking `seq`.
///
/// This is a stable compaction: no allocation happens, survivors keep their
/// relative order and the length of `seq` becomes the number of survivors.
pub fn choose_in_place<S, F>(seq: &mut S, predicate: F)
where
    S: SeqMut + ?Sized,
    F: FnMut(&S::Item) -> bool,
{
    choose_or_drop_in_place(seq, predicate, true)
}

/// Remove the elements that satisfy `predicate`, shrinking `seq`.
pub fn drop_in_place<S, F>(seq: &mut S, predicate: F)
where
    S: SeqMut + ?Sized,
    F: FnMut(&S::Item) -> bool,
{
    choose_or_drop_in_place(seq, predicate, false)
}

/// Like [`choose_in_place`], but the predicate may fail.
///
/// On failure the length of `seq` is unchanged. The elements kept so far
/// sit at the front in their original order; the order of the remaining
/// elements is unspecified.
pub fn try_choose_in_place<S, E, F>(seq: &mut S, predicate: F) -> Result<(), E>
where
    S: SeqMut + ?Sized,
    F: FnMut(&S::Item) -> Result<bool, E>,
{
    try_choose_or_drop_in_place(seq, predicate, true)
}

/// Like [`drop_in_place`], but the predicate may fail.
///
/// See [`try_choose_in_place`] for the state `seq` is left in on failure.
pub fn try_drop_in_place<S, E, F>(seq: &mut S, predicate: F) -> Result<(), E>
where
    S: SeqMut + ?Sized,
    F: FnMut(&S::Item) -> Result<bool, E>,
{
    try_choose_or_drop_in_place(seq, predicate, false)
}

// an element is kept when the predicate result equals `truth`
fn choose_or_drop<T, F>(seq: &[T], mut predicate: F, truth: bool) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    let mut result = Vec::new();
    for item in seq {
        if predicate(item) == truth {
            result.push(item.clone());
        }
    }
    result
}

fn try_choose_or_drop<T, E, F>(seq: &[T], mut predicate: F, truth: bool) -> Result<Vec<T>, E>
where
    T: Clone,
    F: FnMut(&T) -> Result<bool, E>,
{
    let mut result = Vec::new();
    for item in seq {
        if predicate(item)? == truth {
            result.push(item.clone());
        }
    }
    Ok(result)
}

fn choose_or_drop_in_place<S, F>(seq: &mut S, mut predicate: F, truth: bool)
where
    S: SeqMut + ?Sized,
    F: FnMut(&S::Item) -> bool,
{
    let result: Result<(), std::convert::Infallible> =
        try_choose_or_drop_in_place(seq, |item| Ok(predicate(item)), truth);
    match result {
        Ok(()) => {}
        Err(never) => match never {},
    }
}

fn try_choose_or_drop_in_place<S, E, F>(
    seq: &mut S,
    mut predicate: F,
    truth: bool,
) -> Result<(), E>
where
    S: SeqMut + ?Sized,
    F: FnMut(&S::Item) -> Result<bool, E>,
{
    // `write` trails `read`; everything before `write` is kept.
    let mut write = 0;
    for read in 0..seq.len() {
        if predicate(seq.get(read))? == truth {
            if read != write {
                seq.swap(read, write);
            }
            write += 1;
        }
    }
    seq.truncate(write);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;

    fn is_even(x: &i32) -> bool {
        x % 2 == 0
    }

    fn is_even_string(s: &String) -> bool {
        s.as_bytes()[0] % 2 == 0
    }

    fn digits() -> Vec<String> {
        (1..=9).map(|i| i.to_string()).collect()
    }

    #[test]
    fn test_choose() {
        let a = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        assert_eq!(choose(&a, is_even), vec![2, 4, 6, 8]);
    }

    #[test]
    fn test_drop() {
        let a = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        assert_eq!(drop(&a, is_even), vec![1, 3, 5, 7, 9]);
    }

    #[test]
    fn test_choose_none() {
        let a = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        assert!(choose(&a, |x| *x == 18).is_empty());
    }

    #[test]
    fn test_choose_in_place_string() {
        let mut a = digits();
        choose_in_place(&mut a, is_even_string);
        assert_eq!(a, ["2", "4", "6", "8"]);
        assert_eq!(a.len(), 4);
    }

    #[test]
    fn test_drop_in_place_string() {
        let mut a = digits();
        drop_in_place(&mut a, is_even_string);
        assert_eq!(a, ["1", "3", "5", "7", "9"]);
    }

    #[test]
    fn test_choose_in_place_vec_deque() {
        let mut a: VecDeque<i32> = (1..=9).collect();
        choose_in_place(&mut a, is_even);
        assert_eq!(a, [2, 4, 6, 8]);
    }

    #[test]
    fn test_choose_in_place_calls_predicate_once_per_element() {
        let mut a = vec![5, 1, 4, 2, 3];
        let mut seen = Vec::new();
        choose_in_place(&mut a, |x| {
            seen.push(*x);
            *x > 2
        });
        assert_eq!(seen, [5, 1, 4, 2, 3]);
        assert_eq!(a, [5, 4, 3]);
    }

    #[test]
    fn test_try_choose_in_place_failure_keeps_length() {
        let mut a = vec![1, 2, 3, 4, 5];
        let result = try_choose_in_place(&mut a, |x| {
            if *x == 4 {
                Err("four")
            } else {
                Ok(is_even(x))
            }
        });
        assert_eq!(result, Err("four"));
        assert_eq!(a.len(), 5);
        assert_eq!(a[0], 2);
    }

    #[test]
    fn test_try_drop() {
        let a = [1, 2, 3];
        let result: Result<Vec<i32>, ()> = try_drop(&a, |x| Ok(*x == 2));
        assert_eq!(result, Ok(vec![1, 3]));
    }
}
