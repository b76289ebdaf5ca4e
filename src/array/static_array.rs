use std::convert::TryFrom;

use super::{impl_array, IndexCursor, IndexCursorMut};
use crate::cursor::{Bookmark, Forward, OwnerId};
use crate::error::{Error, Result};
use crate::traits::{Basic, Linear, RandomAccess, Traverse, TraverseMut};

/// An array holding at most `N` elements.
///
/// The buffer is allocated once, on construction, and never grows:
/// inserting into a full array fails with [`Error::CapacityExceeded`].
///
/// # Examples
///
/// ```
/// use dsa_kit::{Error, StaticArray};
///
/// let mut array = StaticArray::<_, 2>::new();
/// array.push_back('a').unwrap();
/// array.push_front('b').unwrap();
///
/// assert_eq!(array.as_slice(), &['b', 'a']);
/// assert_eq!(array.push_back('c'), Err(Error::CapacityExceeded { capacity: 2 }));
/// ```
pub struct StaticArray<T, const N: usize> {
    items: Vec<T>,
    generation: u64,
    id: OwnerId,
}

impl<T, const N: usize> StaticArray<T, N> {
    pub fn new() -> Self {
        Self {
            items: Vec::with_capacity(N),
            generation: 0,
            id: OwnerId::new_unique(),
        }
    }

    /// The fixed capacity `N`.
    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= N
    }

    /// Append every element of `iter`, stopping at the first one that does
    /// not fit.
    pub fn try_extend<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<()> {
        iter.into_iter().try_for_each(|value| self.push_back(value))
    }

    fn make_room(&mut self) -> Result<()> {
        if self.is_full() {
            return Err(Error::CapacityExceeded { capacity: N });
        }
        Ok(())
    }

    fn limit(&self) -> Option<usize> {
        Some(N)
    }
}

impl_array!([T, const N: usize] StaticArray<T, N>);

impl<T, const N: usize> Default for StaticArray<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const N: usize> Clone for StaticArray<T, N> {
    fn clone(&self) -> Self {
        let mut items = Vec::with_capacity(N);
        items.extend_from_slice(&self.items);
        Self {
            items,
            generation: 0,
            id: OwnerId::new_unique(),
        }
    }
}

impl<T, const N: usize> TryFrom<Vec<T>> for StaticArray<T, N> {
    type Error = Error;

    fn try_from(items: Vec<T>) -> Result<Self> {
        if items.len() > N {
            return Err(Error::CapacityExceeded { capacity: N });
        }
        let mut array = Self::new();
        array.items.extend(items);
        Ok(array)
    }
}

impl<T, const N: usize> TryFrom<[T; N]> for StaticArray<T, N> {
    type Error = Error;

    fn try_from(items: [T; N]) -> Result<Self> {
        Self::try_from(Vec::from(items))
    }
}

#[cfg(test)]
mod tests {
    use super::StaticArray;
    use crate::cursor::{Forward, Writable};
    use crate::error::{Error, ErrorKind};
    use crate::traits::{Basic, TraverseMut};
    use std::convert::TryFrom;

    #[test]
    fn static_array_bounds() {
        let mut array = StaticArray::<i32, 3>::new();
        assert_eq!(array.capacity(), 3);
        assert_eq!(Basic::capacity(&array), Some(3));
        array.try_extend([1, 2, 3]).unwrap();
        assert!(array.is_full());
        assert_eq!(
            array.insert(0, 0),
            Err(Error::CapacityExceeded { capacity: 3 })
        );
        assert_eq!(array.insert(5, 0), Err(Error::out_of_range(5, 3)));
        assert_eq!(array.remove(3), Err(Error::out_of_range(3, 3)));
        assert_eq!(array.remove(1), Ok(2));
        assert_eq!(array.as_slice(), &[1, 3]);
    }

    #[test]
    fn static_array_try_from() {
        let array = StaticArray::<_, 4>::try_from(vec![1, 2]).unwrap();
        assert_eq!(array.len(), 2);
        assert!(StaticArray::<_, 1>::try_from(vec![1, 2]).is_err());
        let full = StaticArray::<_, 3>::try_from([7, 8, 9]).unwrap();
        assert_eq!(full.as_slice(), &[7, 8, 9]);
    }

    #[test]
    fn zero_capacity() {
        let mut array = StaticArray::<u8, 0>::new();
        assert!(array.is_full());
        assert_eq!(
            array.push_back(1).unwrap_err().kind(),
            ErrorKind::InvalidParameter
        );
        assert_eq!(array.pop_front(), None);
    }

    #[test]
    fn write_through_cursor_keeps_generation() {
        let mut array = StaticArray::<_, 4>::try_from(vec![4, 5, 6]).unwrap();
        let generation = array.generation();
        {
            let (mut begin, _) = array.range_mut();
            begin.set(1).unwrap();
            assert_eq!(begin.get(), Some(1));
        }
        assert_eq!(array.generation(), generation);
        assert_eq!(array.front(), Some(&1));
        array.pop_back();
        assert_ne!(array.generation(), generation);
    }
}
