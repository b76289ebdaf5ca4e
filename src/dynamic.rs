//! Type-erased cursors.
//!
//! The generic algorithms are statically dispatched over the cursor traits.
//! When the container is only known at run time, cursors of any family can
//! be boxed into a [`BoxedCursor`] instead. Capabilities the family lacks
//! turn into [`Error::Unsupported`] at run time: moving a forward-only cursor
//! backward, or writing through a read-only one.
//!
//! # Examples
//!
//! ```
//! use dsa_kit::dynamic::{boxed, equals, BoxedCursor, DynCursor};
//! use dsa_kit::traits::Traverse;
//! use dsa_kit::{DynamicArray, ErrorKind, SinglyLinkedList};
//! use std::iter::FromIterator;
//!
//! let array = DynamicArray::from_iter([1, 2, 3]);
//! let list = SinglyLinkedList::from_iter([1, 2, 3]);
//!
//! let mut cursors: Vec<BoxedCursor<'_, i32>> = vec![boxed(array.range().0), boxed(list.range().0)];
//! for cursor in &mut cursors {
//!     cursor.next();
//!     assert_eq!(cursor.get_value(), Some(2));
//! }
//! assert!(cursors[0].prev().is_ok());
//! assert_eq!(cursors[1].prev().unwrap_err().kind(), ErrorKind::Unsupported);
//!
//! assert!(!equals(Some(&*cursors[0]), Some(&*cursors[1])));
//! assert!(equals::<i32>(None, None));
//! ```

use crate::array::{IndexCursor, IndexCursorMut};
use crate::cursor::{Bidirectional, Forward, OwnerId, Writable};
use crate::error::{Error, Result};
use crate::list::doubly::{Cursor as NodeCursor, CursorMut as NodeCursorMut};
use crate::list::singly::{Cursor as ForwardCursor, CursorMut as ForwardCursorMut};

/// The identity of a cursor position: which container, and which slot in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    pub owner: OwnerId,
    pub index: usize,
}

/// An object-safe cursor over elements of type `T`.
pub trait DynCursor<'a, T: Clone + 'a> {
    /// Step forward; a no-op at the end position.
    fn next(&mut self);

    /// Step backward.
    ///
    /// # Errors
    ///
    /// [`Error::Unsupported`] on forward-only families,
    /// [`Error::IndexOutOfRange`] on the first position.
    fn prev(&mut self) -> Result<()>;

    /// Step `steps` forward, stopping at the end position.
    fn next_n(&mut self, steps: usize);

    /// Step `steps` backward, or fail without moving.
    fn prev_n(&mut self, steps: usize) -> Result<()>;

    /// A clone of the designated element, `None` at the end position.
    fn get_value(&self) -> Option<T>;

    /// Overwrite the designated element, returning the previous one.
    ///
    /// # Errors
    ///
    /// [`Error::Unsupported`] on read-only cursors,
    /// [`Error::IndexOutOfRange`] at the end position.
    fn set_value(&mut self, value: T) -> Result<T>;

    fn is_valid(&self) -> bool;

    fn slot(&self) -> Slot;

    fn clone_boxed(&self) -> BoxedCursor<'a, T>;
}

pub type BoxedCursor<'a, T> = Box<dyn DynCursor<'a, T> + 'a>;

impl<'a, T: Clone + 'a> Clone for BoxedCursor<'a, T> {
    fn clone(&self) -> Self {
        self.clone_boxed()
    }
}

/// Erase the type of `cursor`.
pub fn boxed<'a, T, C>(cursor: C) -> BoxedCursor<'a, T>
where
    T: Clone + 'a,
    C: DynCursor<'a, T> + 'a,
{
    Box::new(cursor)
}

/// Whether two optional cursors designate the same slot of the same
/// container. Two absent cursors are equal; an absent and a present one are
/// not.
pub fn equals<'a, T: Clone + 'a>(
    a: Option<&dyn DynCursor<'a, T>>,
    b: Option<&dyn DynCursor<'a, T>>,
) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.slot() == b.slot(),
        _ => false,
    }
}

/// Clones of the elements from `begin` up to `end`, or up to the end of the
/// container if `end` is never reached.
pub fn collect<'a, T: Clone + 'a>(begin: &dyn DynCursor<'a, T>, end: &dyn DynCursor<'a, T>) -> Vec<T> {
    let mut values = Vec::new();
    let mut cursor = begin.clone_boxed();
    while cursor.slot() != end.slot() {
        match cursor.get_value() {
            Some(value) => values.push(value),
            None => break,
        }
        cursor.next();
    }
    values
}

macro_rules! impl_dyn_cursor {
    (@prev bidirectional) => {
        fn prev(&mut self) -> Result<()> {
            Bidirectional::move_prev(self)
        }

        fn prev_n(&mut self, steps: usize) -> Result<()> {
            Bidirectional::seek_backward(self, steps)
        }
    };
    (@prev forward) => {
        fn prev(&mut self) -> Result<()> {
            Err(Error::Unsupported("moving a forward-only cursor backward"))
        }

        fn prev_n(&mut self, _steps: usize) -> Result<()> {
            Err(Error::Unsupported("moving a forward-only cursor backward"))
        }
    };
    (@access read) => {
        fn get_value(&self) -> Option<T> {
            Forward::get(self).cloned()
        }

        fn set_value(&mut self, _value: T) -> Result<T> {
            Err(Error::Unsupported("writing through a read-only cursor"))
        }
    };
    (@access write) => {
        fn get_value(&self) -> Option<T> {
            Forward::get(self)
        }

        fn set_value(&mut self, value: T) -> Result<T> {
            Writable::set(self, value)
        }
    };
    ($CURSOR:ident, $MOVES:ident, $ACCESS:ident) => {
        impl<'a, T: Clone + 'a> DynCursor<'a, T> for $CURSOR<'a, T> {
            fn next(&mut self) {
                Forward::move_next(self)
            }

            fn next_n(&mut self, steps: usize) {
                Forward::seek_forward(self, steps)
            }

            impl_dyn_cursor!(@prev $MOVES);
            impl_dyn_cursor!(@access $ACCESS);

            fn is_valid(&self) -> bool {
                Forward::is_valid(self)
            }

            fn slot(&self) -> Slot {
                Slot {
                    owner: Forward::owner(self),
                    index: Forward::index(self),
                }
            }

            fn clone_boxed(&self) -> BoxedCursor<'a, T> {
                Box::new(self.clone())
            }
        }
    };
}

impl_dyn_cursor!(IndexCursor, bidirectional, read);
impl_dyn_cursor!(IndexCursorMut, bidirectional, write);
impl_dyn_cursor!(NodeCursor, bidirectional, read);
impl_dyn_cursor!(NodeCursorMut, bidirectional, write);
impl_dyn_cursor!(ForwardCursor, forward, read);
impl_dyn_cursor!(ForwardCursorMut, forward, write);

#[cfg(test)]
mod tests {
    use super::{boxed, collect, equals, BoxedCursor, DynCursor};
    use crate::error::{Error, ErrorKind};
    use crate::traits::{Traverse, TraverseMut};
    use crate::{CircularList, DoublyLinkedList, DynamicArray, StaticArray};
    use std::iter::FromIterator;

    #[test]
    fn forward_only_families_refuse_prev() {
        let list = CircularList::from_iter([1, 2, 3]);
        let (begin, end) = list.range();
        let mut cursor = boxed(end);
        assert_eq!(cursor.prev().unwrap_err().kind(), ErrorKind::Unsupported);
        assert_eq!(cursor.prev_n(1).unwrap_err().kind(), ErrorKind::Unsupported);
        assert!(!cursor.is_valid());

        let mut cursor = boxed(begin);
        cursor.next_n(2);
        assert_eq!(cursor.get_value(), Some(3));
        cursor.next_n(10);
        assert_eq!(cursor.get_value(), None);
    }

    #[test]
    fn read_only_cursors_refuse_writes() {
        let list = DoublyLinkedList::from_iter(['a', 'b']);
        let mut cursor = boxed(list.range().0);
        assert_eq!(
            cursor.set_value('z'),
            Err(Error::Unsupported("writing through a read-only cursor"))
        );
        assert_eq!(cursor.get_value(), Some('a'));
    }

    #[test]
    fn writes_through_erased_cursors() {
        let mut array = StaticArray::<i32, 4>::new();
        array.try_extend([1, 2, 3]).unwrap();
        {
            let (begin, end) = array.range_mut();
            let mut cursor: BoxedCursor<'_, i32> = boxed(end);
            assert_eq!(cursor.set_value(0).unwrap_err().kind(), ErrorKind::IndexOutOfRange);
            cursor.prev_n(2).unwrap();
            assert_eq!(cursor.set_value(20), Ok(2));
            assert!(cursor.prev_n(5).is_err());
            assert_eq!(cursor.slot().index, 1);

            let copy = cursor.clone();
            assert!(equals(Some(&*copy), Some(&*cursor)));
            assert!(!equals(Some(&*copy), Some(&*boxed(begin))));
        }
        assert_eq!(array.as_slice(), &[1, 20, 3]);
    }

    #[test]
    fn equality_of_optional_cursors() {
        let a = DynamicArray::from_iter([1, 2]);
        let b = DynamicArray::from_iter([1, 2]);
        let ca = boxed(a.range().0);
        let cb = boxed(b.range().0);
        assert!(equals::<i32>(None, None));
        assert!(!equals(Some(&*ca), None));
        assert!(!equals(None, Some(&*cb)));
        assert!(!equals(Some(&*ca), Some(&*cb)));
        assert!(equals(Some(&*ca), Some(&*ca.clone_boxed())));
    }

    #[test]
    fn empty_containers_have_distinct_slots() {
        let a = DynamicArray::<i32>::new();
        let b = DynamicArray::<i32>::new();
        let (ca, cb) = (boxed(a.range().1), boxed(b.range().1));
        assert_eq!(ca.slot().index, cb.slot().index);
        assert!(!equals(Some(&*ca), Some(&*cb)));
        assert!(equals(Some(&*ca), Some(&*boxed(a.range().0))));
    }

    #[test]
    fn collect_over_any_family() {
        let mut list = DoublyLinkedList::from_iter(0..5);
        let (begin, end) = list.range_mut();
        let mut from = boxed(begin);
        from.next();
        assert_eq!(collect(&*from, &*boxed(end)), vec![1, 2, 3, 4]);
    }
}
