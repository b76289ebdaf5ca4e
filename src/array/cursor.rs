use std::marker::PhantomData;
use std::ptr::{self, NonNull};

use crate::cursor::{Bidirectional, Forward, OwnerId, Random, Writable};
use crate::error::{Error, Result};

/// A read-only cursor over a contiguous buffer.
///
/// In a buffer with length *n*, there are *n* + 1 valid positions for the
/// cursor, indexed by 0, 1, ..., *n*, where *n* is the end position.
///
/// # Examples
///
/// ```
/// use dsa_kit::cursor::{Bidirectional, Forward, Random};
/// use dsa_kit::traits::Traverse;
/// use dsa_kit::DynamicArray;
/// use std::iter::FromIterator;
///
/// let array = DynamicArray::from_iter(['A', 'B', 'C', 'D']);
/// let (mut cursor, end) = array.range();
///
/// cursor.seek_to(2).unwrap();
/// assert_eq!(cursor.get(), Some(&'C'));
///
/// cursor.seek_backward(2).unwrap();
/// assert_eq!(cursor.current(), Some(&'A'));
///
/// assert_eq!(cursor.distance_to(&end), 4);
/// ```
pub struct IndexCursor<'a, T> {
    slice: &'a [T],
    index: usize,
    generation: u64,
    owner: OwnerId,
}

/// A writable cursor over a contiguous buffer.
///
/// The buffer stays mutably borrowed for `'a`. Several `IndexCursorMut`
/// may point into it at once, which is why elements are read by cloning
/// and written by replacing: no reference into the buffer ever escapes.
pub struct IndexCursorMut<'a, T> {
    base: NonNull<T>,
    len: usize,
    index: usize,
    generation: u64,
    owner: OwnerId,
    _marker: PhantomData<&'a mut [T]>,
}

impl<'a, T> IndexCursor<'a, T> {
    pub(crate) fn new(slice: &'a [T], index: usize, generation: u64, owner: OwnerId) -> Self {
        debug_assert!(index <= slice.len());
        Self {
            slice,
            index,
            generation,
            owner,
        }
    }

    /// The half-open range over a whole slice.
    ///
    /// Each call treats the slice as a new container: cursors of two calls
    /// never compare equal.
    pub fn range(slice: &'a [T]) -> (Self, Self) {
        let owner = OwnerId::new_unique();
        (Self::new(slice, 0, 0, owner), Self::new(slice, slice.len(), 0, owner))
    }

    /// The designated element, borrowed for the whole lifetime of the buffer.
    pub fn current(&self) -> Option<&'a T> {
        self.slice.get(self.index)
    }

    fn buffer_len(&self) -> usize {
        self.slice.len()
    }
}

impl<'a, T> IndexCursorMut<'a, T> {
    pub(crate) fn new(slice: &'a mut [T], index: usize, generation: u64, owner: OwnerId) -> Self {
        debug_assert!(index <= slice.len());
        Self {
            len: slice.len(),
            base: NonNull::from(slice).cast(),
            index,
            generation,
            owner,
            _marker: PhantomData,
        }
    }

    /// The half-open range over a whole slice, see [`IndexCursor::range`].
    pub fn range(slice: &'a mut [T]) -> (Self, Self) {
        let begin = Self::new(slice, 0, 0, OwnerId::new_unique());
        let mut end = begin.clone();
        end.index = end.len;
        (begin, end)
    }

    fn slot(&self) -> Option<*mut T> {
        if self.index < self.len {
            // SAFETY: `index < len`, so the offset stays inside the buffer.
            Some(unsafe { self.base.as_ptr().add(self.index) })
        } else {
            None
        }
    }

    fn missing(&self) -> Error {
        Error::out_of_range(self.index, self.len)
    }

    fn buffer_len(&self) -> usize {
        self.len
    }
}

impl<T> Clone for IndexCursor<'_, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<T> Clone for IndexCursorMut<'_, T> {
    fn clone(&self) -> Self {
        Self {
            base: self.base,
            len: self.len,
            index: self.index,
            generation: self.generation,
            owner: self.owner,
            _marker: PhantomData,
        }
    }
}

/// Cursors are equal when they belong to the same container and are at the
/// same index.
impl<T> PartialEq for IndexCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner && self.index == other.index
    }
}

impl<T> Eq for IndexCursor<'_, T> {}

impl<T> PartialEq for IndexCursorMut<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner && self.index == other.index
    }
}

impl<T> Eq for IndexCursorMut<'_, T> {}

impl<T> std::fmt::Debug for IndexCursor<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexCursor")
            .field("index", &self.index)
            .field("len", &self.slice.len())
            .finish()
    }
}

impl<T> std::fmt::Debug for IndexCursorMut<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexCursorMut")
            .field("index", &self.index)
            .field("len", &self.len)
            .finish()
    }
}

macro_rules! impl_index_moves {
    ($CURSOR:ident $(, $BOUND:path)?) => {
        impl<'a, T $(: $BOUND)?> Bidirectional for $CURSOR<'a, T> {
            fn move_prev(&mut self) -> Result<()> {
                if self.index == 0 {
                    return Err(Error::out_of_range(1, 0));
                }
                self.index -= 1;
                Ok(())
            }

            fn seek_backward(&mut self, steps: usize) -> Result<()> {
                self.index = self
                    .index
                    .checked_sub(steps)
                    .ok_or_else(|| Error::out_of_range(steps, self.index))?;
                Ok(())
            }
        }

        impl<'a, T $(: $BOUND)?> Random for $CURSOR<'a, T> {
            fn len(&self) -> usize {
                self.buffer_len()
            }

            fn seek_to(&mut self, index: usize) -> Result<()> {
                let len = Random::len(self);
                if index > len {
                    return Err(Error::out_of_range(index, len));
                }
                self.index = index;
                Ok(())
            }
        }
    };
}

impl_index_moves!(IndexCursor);
impl_index_moves!(IndexCursorMut, Clone);

impl<'a, T> Forward for IndexCursor<'a, T> {
    type Item = T;
    type Ref<'r> = &'r T where Self: 'r;

    fn get(&self) -> Option<Self::Ref<'_>> {
        self.slice.get(self.index)
    }

    fn index(&self) -> usize {
        self.index
    }

    fn generation(&self) -> u64 {
        self.generation
    }

    fn owner(&self) -> OwnerId {
        self.owner
    }

    fn is_end(&self) -> bool {
        self.index >= self.slice.len()
    }

    fn move_next(&mut self) {
        if !self.is_end() {
            self.index += 1;
        }
    }

    fn seek_forward(&mut self, steps: usize) {
        self.index = self.index.saturating_add(steps).min(self.slice.len());
    }

    fn distance_to(&self, end: &Self) -> usize {
        end.index.saturating_sub(self.index)
    }
}

impl<'a, T: Clone> Forward for IndexCursorMut<'a, T> {
    type Item = T;
    type Ref<'r> = T where Self: 'r;

    fn get(&self) -> Option<Self::Ref<'_>> {
        // SAFETY: the slot is in bounds and the buffer is exclusively borrowed
        // by the cursors of this range, none of which holds a reference.
        self.slot().map(|slot| unsafe { (*slot).clone() })
    }

    fn index(&self) -> usize {
        self.index
    }

    fn generation(&self) -> u64 {
        self.generation
    }

    fn owner(&self) -> OwnerId {
        self.owner
    }

    fn is_end(&self) -> bool {
        self.index >= self.len
    }

    fn move_next(&mut self) {
        if !self.is_end() {
            self.index += 1;
        }
    }

    fn seek_forward(&mut self, steps: usize) {
        self.index = self.index.saturating_add(steps).min(self.len);
    }

    fn distance_to(&self, end: &Self) -> usize {
        end.index.saturating_sub(self.index)
    }
}

impl<'a, T: Clone> Writable for IndexCursorMut<'a, T> {
    fn set(&mut self, value: T) -> Result<T> {
        let slot = self.slot().ok_or_else(|| self.missing())?;
        // SAFETY: see `get`.
        Ok(unsafe { ptr::replace(slot, value) })
    }

    fn swap(&mut self, other: &mut Self) -> Result<()> {
        let a = self.slot().ok_or_else(|| self.missing())?;
        let b = other.slot().ok_or_else(|| other.missing())?;
        // SAFETY: both slots are in bounds of exclusively borrowed buffers;
        // `ptr::swap` allows `a == b`.
        unsafe { ptr::swap(a, b) };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{IndexCursor, IndexCursorMut};
    use crate::cursor::{Bidirectional, Forward, OwnerId, Random, Writable};
    use crate::error::Error;

    #[test]
    fn read_cursor_moves() {
        let data = [10, 20, 30];
        let (mut cursor, end) = IndexCursor::range(&data);
        assert_eq!(cursor.get(), Some(&10));
        assert_eq!(cursor.move_prev(), Err(Error::out_of_range(1, 0)));
        cursor.seek_forward(2);
        assert_eq!(cursor.current(), Some(&30));
        cursor.move_next();
        assert_eq!(cursor, end);
        cursor.move_next();
        assert_eq!(cursor.index(), 3);
        assert!(cursor.get().is_none());
        cursor.seek_to(1).unwrap();
        assert_eq!(cursor.get(), Some(&20));
        assert_eq!(Random::len(&cursor), 3);
    }

    #[test]
    fn cursors_of_different_ranges_differ() {
        let a = [1, 2];
        let b = [1, 2];
        assert_ne!(IndexCursor::range(&a).0, IndexCursor::range(&b).0);
        assert_ne!(IndexCursor::range(&a).0, IndexCursor::range(&a).0);
        let (begin, end) = IndexCursor::range(&a);
        assert_eq!(begin.advanced(2), end);

        let (empty, zst) = ([0u8; 0], [(); 3]);
        assert_ne!(IndexCursor::range(&empty).1, IndexCursor::range(&empty).1);
        let (begin, _) = IndexCursor::range(&zst);
        assert_ne!(begin, IndexCursor::range(&zst).0);
    }

    #[test]
    fn write_cursor_sets_and_swaps() {
        let mut data = vec![1, 2, 3];
        {
            let (mut first, end) = IndexCursorMut::range(&mut data);
            let mut last = end.clone();
            last.move_prev().unwrap();
            assert_eq!(first.set(7), Ok(1));
            first.swap(&mut last).unwrap();
            assert_eq!(first.get(), Some(3));
            assert_eq!(last.get(), Some(7));

            let mut end = end;
            assert_eq!(end.set(0), Err(Error::out_of_range(3, 3)));
            assert_eq!(first.swap(&mut end), Err(Error::out_of_range(3, 3)));

            let mut same = first.clone();
            first.swap(&mut same).unwrap();
            assert_eq!(first.get(), Some(3));
        }
        assert_eq!(data, vec![3, 2, 7]);
    }
}
