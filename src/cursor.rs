//! The cursor contract shared by every container.
//!
//! A cursor designates either an element of its container or the *end*
//! position one past the last element. Ranges are half-open pairs
//! `[begin, end)` of cursors over the same container, and every algorithm in
//! [`search`](crate::search) and [`sort`](crate::sort) is written against
//! these traits only.
//!
//! The traits form a ladder of capabilities:
//!
//! - [`Forward`]: read the current element and step towards the end;
//! - [`Bidirectional`]: also step back towards the first element;
//! - [`Random`]: also jump to any position in *O*(1) time;
//! - [`Writable`]: overwrite or exchange the designated elements.
//!
//! Read-only cursors yield references borrowed from the container. Writable
//! cursors yield clones of the elements, so that several writable cursors
//! over one container can coexist without handing out aliasing references.
//!
//! # Examples
//!
//! ```
//! use dsa_kit::cursor::{Bidirectional, Forward};
//! use dsa_kit::traits::Traverse;
//! use dsa_kit::DoublyLinkedList;
//! use std::iter::FromIterator;
//!
//! let list = DoublyLinkedList::from_iter(['a', 'b', 'c']);
//! let (begin, end) = list.range();
//!
//! let mut cursor = begin.clone();
//! cursor.move_next();
//! assert_eq!(cursor.get(), Some(&'b'));
//! assert_eq!(cursor.index(), 1);
//!
//! // Moving past the end is a no-op.
//! cursor.seek_forward(10);
//! assert!(cursor == end && cursor.get().is_none());
//!
//! // Moving before the first element fails and leaves the cursor put.
//! let mut first = begin.clone();
//! assert!(first.move_prev().is_err());
//! assert_eq!(first, begin);
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::sync::atomic::{self, AtomicU64};

use crate::error::{Error, Result};
use crate::stats::Tally;

/// A cursor that can be read and moved towards the end.
///
/// Equality compares positions: two cursors are equal when they belong to
/// the same container and designate the same position.
pub trait Forward: Clone + PartialEq {
    type Item;

    /// What [`get`](Forward::get) hands out: a reference for read-only
    /// cursors, a clone for writable ones.
    type Ref<'r>: Borrow<Self::Item>
    where
        Self: 'r;

    /// The designated element, or `None` at the end position.
    fn get(&self) -> Option<Self::Ref<'_>>;

    /// Position of the cursor, counted from the first element.
    fn index(&self) -> usize;

    /// Generation of the container when the cursor was created.
    fn generation(&self) -> u64;

    /// Identity of the container the cursor belongs to.
    fn owner(&self) -> OwnerId;

    fn is_end(&self) -> bool;

    /// `true` when the cursor designates an element.
    fn is_valid(&self) -> bool {
        !self.is_end()
    }

    /// Step to the next position. At the end position this is a no-op.
    fn move_next(&mut self);

    /// Step `steps` positions forward, stopping at the end position.
    fn seek_forward(&mut self, steps: usize) {
        for _ in 0..steps {
            if self.is_end() {
                break;
            }
            self.move_next();
        }
    }

    /// Number of forward steps from `self` to `end`.
    ///
    /// If `end` is not reachable, the count stops at the end of the
    /// container.
    ///
    /// # Complexity
    ///
    /// *O*(*n*) for node cursors, *O*(1) for index cursors.
    fn distance_to(&self, end: &Self) -> usize {
        let mut walker = self.clone();
        let mut steps = 0;
        while walker != *end && !walker.is_end() {
            walker.move_next();
            steps += 1;
        }
        steps
    }

    /// A copy of the cursor moved `steps` positions forward.
    fn advanced(&self, steps: usize) -> Self {
        let mut cursor = self.clone();
        cursor.seek_forward(steps);
        cursor
    }

    /// Detach the position from the cursor, see [`Bookmark`].
    fn bookmark(&self) -> Bookmark {
        Bookmark::new(self.owner(), self.index(), self.generation())
    }
}

/// A cursor that can also move towards the first element.
pub trait Bidirectional: Forward {
    /// Step to the previous position.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::IndexOutOfRange`] on the first position, leaving the
    /// cursor where it was.
    fn move_prev(&mut self) -> Result<()>;

    /// Step `steps` positions backward.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::IndexOutOfRange`] when fewer than `steps` positions
    /// precede the cursor. The cursor does not move in that case.
    fn seek_backward(&mut self, steps: usize) -> Result<()> {
        if steps > self.index() {
            return Err(Error::out_of_range(steps, self.index()));
        }
        for _ in 0..steps {
            self.move_prev()?;
        }
        Ok(())
    }
}

/// A cursor that jumps to any position in constant time.
pub trait Random: Bidirectional {
    /// Number of elements in the container.
    fn len(&self) -> usize;

    /// Move to position `index`; `index == len` is the end position.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::IndexOutOfRange`] when `index > len`, leaving the
    /// cursor where it was.
    fn seek_to(&mut self, index: usize) -> Result<()>;
}

/// A cursor that can overwrite the designated element.
pub trait Writable: Forward {
    /// Replace the designated element, returning the previous one.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::IndexOutOfRange`] at the end position.
    fn set(&mut self, value: Self::Item) -> Result<Self::Item>;

    /// Exchange the elements designated by `self` and `other`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::IndexOutOfRange`] if either cursor is at the end
    /// position. Nothing is exchanged in that case.
    fn swap(&mut self, other: &mut Self) -> Result<()>;
}

/// Identity of a container, unique within the process.
///
/// Every container draws a fresh id when it is created, clones included, and
/// keeps it when moved. Cursors and bookmarks carry the id of their container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OwnerId(u64);

impl OwnerId {
    pub(crate) fn new_unique() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        OwnerId(NEXT.fetch_add(1, atomic::Ordering::Relaxed))
    }
}

/// A position detached from any borrow of its container.
///
/// Cursors borrow their container, so no cursor can survive a structural
/// mutation. A bookmark can: it records the position together with the
/// generation of the container, and restoring it after the container was
/// structurally modified fails with [`Error::StaleCursor`] instead of
/// designating a different element. Restoring it on another container fails
/// with [`Error::Unsupported`].
///
/// # Examples
///
/// ```
/// use dsa_kit::cursor::Forward;
/// use dsa_kit::traits::{Linear, Traverse};
/// use dsa_kit::{DynamicArray, Error};
/// use std::iter::FromIterator;
///
/// let mut array = DynamicArray::from_iter([1, 2, 3]);
/// let bookmark = array.range().0.advanced(1).bookmark();
///
/// assert_eq!(array.restore(&bookmark).unwrap().get(), Some(&2));
///
/// array.push_back(4).unwrap();
/// assert!(matches!(array.restore(&bookmark), Err(Error::StaleCursor { .. })));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bookmark {
    owner: OwnerId,
    index: usize,
    generation: u64,
}

impl Bookmark {
    pub(crate) fn new(owner: OwnerId, index: usize, generation: u64) -> Self {
        Self {
            owner,
            index,
            generation,
        }
    }

    pub fn owner(&self) -> OwnerId {
        self.owner
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Check the bookmark against the current state of its container and
    /// return the position to restore.
    pub(crate) fn resolve(&self, owner: OwnerId, generation: u64, len: usize) -> Result<usize> {
        if self.owner != owner {
            return Err(Error::Unsupported("restoring a bookmark of another container"));
        }
        if self.generation != generation {
            return Err(Error::StaleCursor {
                expected: self.generation,
                found: generation,
            });
        }
        if self.index > len {
            return Err(Error::out_of_range(self.index, len));
        }
        Ok(self.index)
    }
}

/// Number of forward steps from `begin` to `end`.
pub fn distance<C: Forward>(begin: &C, end: &C) -> usize {
    begin.distance_to(end)
}

/// `true` while `cursor` has not reached `end`, nor the end of its container
/// when `end` lies before it.
pub(crate) fn in_range<C: Forward>(cursor: &C, end: &C) -> bool {
    cursor != end && !cursor.is_end()
}

/// View the value handed out by [`Forward::get`] as a plain reference.
pub(crate) fn item<'r, 'c, C>(value: &'r C::Ref<'c>) -> &'r C::Item
where
    C: Forward + 'c,
{
    <C::Ref<'c> as Borrow<C::Item>>::borrow(value)
}

/// Compare the element under `cursor` against `value`; `None` at the end.
pub(crate) fn compare_with<C, F>(
    cursor: &C,
    value: &C::Item,
    compare: &mut F,
    tally: &mut Tally<'_>,
) -> Option<Ordering>
where
    C: Forward,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    let current = cursor.get()?;
    Some(tally.compare(compare, item::<C>(&current), value))
}

/// Compare the elements under two cursors; `None` if either is at the end.
pub(crate) fn compare_cursors<C, F>(
    a: &C,
    b: &C,
    compare: &mut F,
    tally: &mut Tally<'_>,
) -> Option<Ordering>
where
    C: Forward,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    let a = a.get()?;
    let b = b.get()?;
    Some(tally.compare(compare, item::<C>(&a), item::<C>(&b)))
}

#[cfg(test)]
mod tests {
    use super::{distance, Bidirectional, Bookmark, Forward, OwnerId, Random};
    use crate::error::Error;
    use crate::traits::Traverse;
    use crate::{DoublyLinkedList, DynamicArray, SinglyLinkedList};
    use std::iter::FromIterator;

    fn walk_forward<C: Forward<Item = i32>>(begin: C, end: C) -> Vec<i32> {
        let mut seen = Vec::new();
        let mut cursor = begin;
        while cursor != end {
            seen.push(*super::item::<C>(&cursor.get().unwrap()));
            cursor.move_next();
        }
        seen
    }

    #[test]
    fn forward_walks_every_family() {
        let array = DynamicArray::from_iter([1, 2, 3]);
        let (begin, end) = array.range();
        assert_eq!(walk_forward(begin, end), vec![1, 2, 3]);

        let list = DoublyLinkedList::from_iter([1, 2, 3]);
        let (begin, end) = list.range();
        assert_eq!(walk_forward(begin, end), vec![1, 2, 3]);

        let list = SinglyLinkedList::from_iter([1, 2, 3]);
        let (begin, end) = list.range();
        assert_eq!(walk_forward(begin, end), vec![1, 2, 3]);
    }

    #[test]
    fn end_is_sticky() {
        let list = SinglyLinkedList::from_iter([1]);
        let (begin, end) = list.range();
        let mut cursor = begin.advanced(5);
        assert_eq!(cursor, end);
        assert_eq!(cursor.index(), 1);
        cursor.move_next();
        assert_eq!(cursor, end);
        assert!(!cursor.is_valid());
    }

    #[test]
    fn distance_counts_steps() {
        let list = DoublyLinkedList::from_iter(0..7);
        let (begin, end) = list.range();
        assert_eq!(distance(&begin, &end), 7);
        assert_eq!(distance(&begin.advanced(3), &end), 4);
        assert_eq!(distance(&end, &end), 0);

        let array = DynamicArray::from_iter(0..7);
        let (begin, end) = array.range();
        assert_eq!(distance(&begin.advanced(2), &end), 5);
    }

    #[test]
    fn seek_backward_is_all_or_nothing() {
        let list = DoublyLinkedList::from_iter(0..4);
        let (_, end) = list.range();
        let mut cursor = end.clone();
        assert_eq!(cursor.seek_backward(5), Err(Error::out_of_range(5, 4)));
        assert_eq!(cursor, end);
        cursor.seek_backward(4).unwrap();
        assert_eq!(cursor.get(), Some(&0));
    }

    #[test]
    fn random_seek_is_checked() {
        let array = DynamicArray::from_iter(0..4);
        let (mut cursor, end) = array.range();
        cursor.seek_to(4).unwrap();
        assert_eq!(cursor, end);
        assert_eq!(cursor.seek_to(5), Err(Error::out_of_range(5, 4)));
        assert_eq!(cursor, end);
    }

    #[test]
    fn bookmark_resolution() {
        let owner = OwnerId::new_unique();
        let bookmark = Bookmark::new(owner, 2, 7);
        assert_eq!(bookmark.resolve(owner, 7, 3), Ok(2));
        assert_eq!(
            bookmark.resolve(owner, 8, 3),
            Err(Error::StaleCursor {
                expected: 7,
                found: 8
            })
        );
        assert_eq!(bookmark.resolve(owner, 7, 1), Err(Error::out_of_range(2, 1)));
        assert_eq!(
            bookmark.resolve(OwnerId::new_unique(), 7, 3),
            Err(Error::Unsupported("restoring a bookmark of another container"))
        );
    }

    #[test]
    fn owner_ids_are_unique() {
        let a = OwnerId::new_unique();
        let b = OwnerId::new_unique();
        assert_ne!(a, b);
    }
}
