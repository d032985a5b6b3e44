use std::collections::VecDeque;

/// A sequence whose length can shrink in place.
///
/// The in-place filters need more than mutable access to the elements:
/// they reorder elements and then cut the sequence down to the survivors.
pub trait SeqMut {
    type Item;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the element at `index`.
    ///
    /// Panics if `index` is out of bounds.
    fn get(&self, index: usize) -> &Self::Item;

    fn swap(&mut self, a: usize, b: usize);

    /// Shorten the sequence to `len`, dropping the rest. Has no effect if
    /// `len` is greater than the current length.
    fn truncate(&mut self, len: usize);
}

impl<T> SeqMut for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b)
    }

    fn truncate(&mut self, len: usize) {
        Vec::truncate(self, len)
    }
}

impl<T> SeqMut for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn swap(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b)
    }

    fn truncate(&mut self, len: usize) {
        VecDeque::truncate(self, len)
    }
}
