use std::iter::FromIterator;

use log::debug;

use super::{impl_array, IndexCursor, IndexCursorMut};
use crate::cursor::{Bookmark, Forward, OwnerId};
use crate::error::{Error, Result};
use crate::traits::{Basic, Linear, RandomAccess, Traverse, TraverseMut};

/// How a [`DynamicArray`] computes its next capacity when it is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrowthPolicy {
    /// Double the capacity.
    Double,
    /// Add a fixed number of slots.
    Step(usize),
}

impl GrowthPolicy {
    /// Capacity after growing from `current`. Never less than
    /// [`DynamicArray::MIN_CAPACITY`].
    pub fn next_capacity(self, current: usize) -> usize {
        let grown = match self {
            GrowthPolicy::Double => current.saturating_mul(2),
            GrowthPolicy::Step(step) => current.saturating_add(step.max(1)),
        };
        grown.max(DynamicArray::<()>::MIN_CAPACITY)
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        GrowthPolicy::Double
    }
}

/// A growable array.
///
/// When an insertion finds the buffer full, the buffer is reallocated to the
/// capacity given by its [`GrowthPolicy`]. A failed reallocation is
/// reported as [`Error::AllocationFailed`] and leaves the array untouched.
///
/// # Examples
///
/// ```
/// use dsa_kit::{DynamicArray, GrowthPolicy};
///
/// let mut array = DynamicArray::with_capacity_and_policy(2, GrowthPolicy::Step(3)).unwrap();
/// for i in 0..5 {
///     array.push_back(i).unwrap();
/// }
/// assert_eq!(array.as_slice(), &[0, 1, 2, 3, 4]);
/// assert!(array.allocated() >= 5);
/// ```
pub struct DynamicArray<T> {
    items: Vec<T>,
    policy: GrowthPolicy,
    generation: u64,
    id: OwnerId,
}

impl<T> DynamicArray<T> {
    /// Capacity of the first allocation.
    pub const MIN_CAPACITY: usize = 4;

    /// Create an empty array. Nothing is allocated until the first insertion.
    pub fn new() -> Self {
        Self::with_policy(GrowthPolicy::default())
    }

    pub fn with_policy(policy: GrowthPolicy) -> Self {
        Self {
            items: Vec::new(),
            policy,
            generation: 0,
            id: OwnerId::new_unique(),
        }
    }

    /// Create an empty array with room for `capacity` elements.
    ///
    /// # Errors
    ///
    /// [`Error::AllocationFailed`] if the buffer cannot be allocated.
    pub fn with_capacity_and_policy(capacity: usize, policy: GrowthPolicy) -> Result<Self> {
        let mut array = Self::with_policy(policy);
        array.items.try_reserve_exact(capacity)?;
        Ok(array)
    }

    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: GrowthPolicy) {
        self.policy = policy;
    }

    /// Number of elements the current buffer holds without reallocating.
    pub fn allocated(&self) -> usize {
        self.items.capacity()
    }

    /// Make room for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) -> Result<()> {
        self.items.try_reserve(additional)?;
        Ok(())
    }

    /// Shrink the buffer to the number of elements.
    pub fn shrink_to_fit(&mut self) {
        self.items.shrink_to_fit();
    }

    fn make_room(&mut self) -> Result<()> {
        let capacity = self.items.capacity();
        if self.items.len() < capacity {
            return Ok(());
        }
        let target = self.policy.next_capacity(capacity);
        self.items.try_reserve_exact(target - self.items.len())?;
        debug!(
            "dynamic array grew from {} to {} slots ({:?})",
            capacity,
            self.items.capacity(),
            self.policy
        );
        Ok(())
    }

    fn limit(&self) -> Option<usize> {
        None
    }
}

impl_array!([T] DynamicArray<T>);

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            policy: self.policy,
            generation: 0,
            id: OwnerId::new_unique(),
        }
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items,
            policy: GrowthPolicy::default(),
            generation: 0,
            id: OwnerId::new_unique(),
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(Vec::from_iter(iter))
    }
}

/// Bulk extension lets the backing vector size its buffer from the
/// iterator's size hint instead of the growth policy.
impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
        self.touch();
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::{DynamicArray, GrowthPolicy};
    use crate::cursor::Forward;
    use crate::error::{Error, ErrorKind};
    use crate::traits::{Linear, RandomAccess, Traverse};
    use std::iter::FromIterator;

    #[test]
    fn growth_policies() {
        assert_eq!(GrowthPolicy::Double.next_capacity(0), 4);
        assert_eq!(GrowthPolicy::Double.next_capacity(8), 16);
        assert_eq!(GrowthPolicy::Step(3).next_capacity(4), 7);
        assert_eq!(GrowthPolicy::Step(0).next_capacity(4), 5);
    }

    #[test]
    fn grows_on_demand() {
        let mut array = DynamicArray::new();
        assert_eq!(array.allocated(), 0);
        array.push_back(1).unwrap();
        assert!(array.allocated() >= DynamicArray::<i32>::MIN_CAPACITY);
        for i in 2..=20 {
            Linear::push_back(&mut array, i).unwrap();
        }
        assert_eq!(array.len(), 20);
        assert_eq!(array.as_slice(), Vec::from_iter(1..=20).as_slice());
        array.shrink_to_fit();
        assert_eq!(array.allocated(), 20);
    }

    #[test]
    fn allocation_failure_is_reported() {
        let err = DynamicArray::<u64>::with_capacity_and_policy(usize::MAX, GrowthPolicy::Double)
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::MemoryAllocation);

        let mut array = DynamicArray::<u64>::new();
        assert!(matches!(
            array.reserve(usize::MAX),
            Err(Error::AllocationFailed(_))
        ));
        assert!(array.is_empty());
    }

    #[test]
    fn random_access() {
        let mut array = DynamicArray::from_iter(["a", "b", "d"]);
        RandomAccess::insert(&mut array, 2, "c").unwrap();
        assert_eq!(RandomAccess::get(&array, 2), Some(&"c"));
        *RandomAccess::get_mut(&mut array, 0).unwrap() = "z";
        assert_eq!(RandomAccess::set(&mut array, 3, "e"), Ok("d"));
        assert_eq!(RandomAccess::get(&array, 4), None);
        assert_eq!(array.as_slice(), &["z", "b", "c", "e"]);
    }

    #[test]
    fn restore_checks_generation() {
        let mut array = DynamicArray::from_iter(0..5);
        let bookmark = array.range().0.advanced(3).bookmark();
        array.set(0, 9).unwrap();
        assert_eq!(array.restore(&bookmark).unwrap().get(), Some(&3));
        array.remove(0).unwrap();
        assert_eq!(
            array.restore(&bookmark).unwrap_err(),
            Error::StaleCursor {
                expected: bookmark.generation(),
                found: array.generation()
            }
        );
    }

    #[test]
    fn bookmarks_stay_with_their_array() {
        let a = DynamicArray::from_iter([1, 2, 3]);
        let b = DynamicArray::from_iter([10, 20, 30]);
        let bookmark = a.range().0.advanced(1).bookmark();
        assert_eq!(bookmark.owner(), a.owner_id());
        assert_eq!(a.restore(&bookmark).unwrap().get(), Some(&2));
        assert_eq!(b.restore(&bookmark).unwrap_err().kind(), ErrorKind::Unsupported);

        let mut copy = a.clone();
        assert_ne!(copy.owner_id(), a.owner_id());
        assert!(copy.restore(&bookmark).is_err());
        assert!(copy.restore_mut(&bookmark).is_err());
    }

    #[test]
    fn cursors_of_distinct_arrays_differ() {
        let a = DynamicArray::<i32>::new();
        let b = DynamicArray::<i32>::new();
        assert_ne!(a.range().0, b.range().0);
        assert_ne!(a.range().1, b.range().1);
        assert_eq!(a.range().0, a.range().1);

        let units = DynamicArray::from_iter([(), (), ()]);
        let others = DynamicArray::from_iter([(), (), ()]);
        assert_ne!(units.range().0, others.range().0);
        assert_eq!(units.range().0.advanced(3), units.range().1);
    }
}
