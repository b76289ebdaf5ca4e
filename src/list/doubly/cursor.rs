use std::cmp::Ordering;
use std::fmt::{self, Formatter};
use std::marker::PhantomData;
use std::ptr::{self, NonNull};

use super::{next_of, prev_of, DoublyLinkedList, Node};
use crate::cursor::{Bidirectional, Forward, OwnerId, Writable};
use crate::error::{Error, Result};

/// A cursor over a `DoublyLinkedList`.
///
/// A `Cursor` is like an iterator, except that it can freely seek back-and-forth.
///
/// In a list with length *n*, there are *n* + 1 valid locations for the cursor,
/// indexed by 0, 1, ..., *n*, where *n* is the ghost node of the list.
///
/// # Examples
///
/// Here is a simple example showing how the cursors work. (The ghost node of the
/// list is denoted by `#`).
/// ```
/// use dsa_kit::cursor::{Bidirectional, Forward};
/// use dsa_kit::DoublyLinkedList;
/// use std::iter::FromIterator;
///
/// // Create a list: [ A B C D #]
/// let list = DoublyLinkedList::from_iter(['A', 'B', 'C', 'D']);
///
/// // Create a cursor at start: [|A B C D #] (index = 0)
/// let mut cursor = list.cursor_start();
/// assert_eq!(cursor.current(), Some(&'A'));
///
/// // Move cursor forward: [ A|B C D #] (index = 1)
/// cursor.move_next();
/// assert_eq!(cursor.current(), Some(&'B'));
///
/// // Create a cursor in the end: [ A B C D|#] (index = 4)
/// let mut cursor = list.cursor_end();
/// assert_eq!(cursor.current(), None);
///
/// // Move cursor backward: [ A B C|D #] (index = 3)
/// assert!(cursor.move_prev().is_ok());
/// assert_eq!(cursor.current(), Some(&'D'));
/// ```
pub struct Cursor<'a, T: 'a> {
    index: usize,
    current: NonNull<Node<T>>,
    list: &'a DoublyLinkedList<T>,
}

/// A writable cursor over a `DoublyLinkedList`.
///
/// The list stays mutably borrowed while the cursor lives, so the cursor
/// can never observe a node being unlinked. Elements are read by cloning
/// and written by replacing, which lets several `CursorMut` over the same
/// list coexist.
///
/// ```compile_fail
/// use dsa_kit::traits::TraverseMut;
/// use dsa_kit::DoublyLinkedList;
/// use std::iter::FromIterator;
///
/// let mut list = DoublyLinkedList::from_iter([1, 2, 3]);
/// let (begin, _end) = list.range_mut();
/// list.push_back(4); // The list is already borrowed by the cursors.
/// drop(begin);
/// ```
pub struct CursorMut<'a, T: 'a> {
    index: usize,
    current: NonNull<Node<T>>,
    ghost: NonNull<Node<T>>,
    len: usize,
    generation: u64,
    owner: OwnerId,
    _marker: PhantomData<&'a mut DoublyLinkedList<T>>,
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        // Private methods
        impl<'a, T: 'a> $CURSOR<'a, T> {
            pub(crate) fn is_ghost_node(&self) -> bool {
                self.current == self.ghost()
            }
            pub(crate) fn is_front_node(&self) -> bool {
                self.prev_node() == self.ghost()
            }
            pub(crate) fn next_node(&self) -> NonNull<Node<T>> {
                // SAFETY: `current.next` is always valid since it is a cyclic list.
                unsafe { next_of(self.current) }
            }
            pub(crate) fn prev_node(&self) -> NonNull<Node<T>> {
                // SAFETY: `current.prev` is always valid since it is a cyclic list.
                unsafe { prev_of(self.current) }
            }

            /// Move forward the cursor by given steps, without checking whether
            /// it will pass through the ghost node.
            ///
            /// It is unsafe because if the moving passes through the ghost node,
            /// the index will be invalid.
            unsafe fn seek_forward_fast(&mut self, steps: usize) {
                self.index = self.index.saturating_add(steps);
                (0..steps).for_each(|_| self.current = self.next_node());
            }

            /// Move backward the cursor by given steps, without checking whether
            /// it will pass through the ghost node.
            ///
            /// It is unsafe because if the moving passes through the ghost node,
            /// the index will be invalid.
            unsafe fn seek_backward_fast(&mut self, steps: usize) {
                self.index = self.index.saturating_sub(steps);
                (0..steps).for_each(|_| self.current = self.prev_node());
            }
        }

        impl<'a, T: 'a> $CURSOR<'a, T> {
            /// Return the index of the cursor.
            pub fn position(&self) -> usize {
                self.index
            }

            /// Returns the length of the list.
            pub fn len(&self) -> usize {
                self.list_len()
            }

            /// Returns `true` if the list is empty.
            pub fn is_empty(&self) -> bool {
                self.list_len() == 0
            }

            /// Move the cursor to the given position `target`, or return an error
            /// when `target > len`.
            ///
            /// If an error occurs, the cursor will stay put.
            ///
            /// This operation should compute in *O*(*n*) time, walking from
            /// the nearest of the cursor, the first node and the ghost node.
            pub fn seek_to(&mut self, target: usize) -> Result<()> {
                if target == self.index {
                    return Ok(());
                }
                let len = self.list_len();
                match target {
                    target if target > len => return Err(Error::out_of_range(target, len)),
                    0 => self.move_to_start(),
                    target if target == len => self.move_to_end(),
                    // SAFETY: `0 < target < len`, and each branch below walks
                    // without crossing the ghost node.
                    _ => unsafe {
                        // current=c, target=t, ghost=#
                        if target > self.index {
                            // target is at the right side of current: [   c----->t   #]
                            if target - self.index <= len - target {
                                // target is near the right side of current: [    c-->t     #]
                                self.seek_forward_fast(target - self.index);
                            } else {
                                // target is far from the right side of current: [ c     t<--#]
                                self.move_to_end();
                                self.seek_backward_fast(len - target);
                            }
                        } else if self.index - target <= target {
                            // target is near the left side of current: [    t<--c     #]
                            self.seek_backward_fast(self.index - target);
                        } else {
                            // target is far from the left side of current: [-->t      c #]
                            self.move_to_start();
                            self.seek_forward_fast(target);
                        }
                    },
                }
                Ok(())
            }

            /// Set the cursor to the start of the list (i.e. the first node).
            ///
            /// This operation should compute in *O*(*1*) time.
            #[inline]
            pub fn move_to_start(&mut self) {
                self.index = 0;
                // SAFETY: the ghost node is always valid.
                self.current = unsafe { next_of(self.ghost()) };
            }

            /// Set the cursor to the end of the list (i.e. the ghost node).
            ///
            /// This operation should compute in *O*(*1*) time.
            #[inline]
            pub fn move_to_end(&mut self) {
                self.index = self.list_len();
                self.current = self.ghost();
            }
        }

        impl<'a, T: 'a> Clone for $CURSOR<'a, T> {
            fn clone(&self) -> Self {
                self.with_position(self.current, self.index)
            }
        }

        /// Compare cursors by its position.
        ///
        /// Only cursors belong to the same list and have the same positions
        /// are considered equal.
        impl<'a, T: 'a> PartialEq for $CURSOR<'a, T> {
            fn eq(&self, other: &Self) -> bool {
                self.ghost() == other.ghost() && self.current == other.current
            }
        }

        impl<'a, T: 'a> Eq for $CURSOR<'a, T> {}

        /// Compare cursors by its position.
        ///
        /// Only cursors belong to the same list can compare, so it is `PartialOrd`
        /// but not `Ord`.
        impl<'a, T: 'a> PartialOrd for $CURSOR<'a, T> {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                if self.ghost() == other.ghost() {
                    return Some(self.index.cmp(&other.index));
                }
                None
            }
        }
    };
}

impl_cursor!(Cursor);
impl_cursor!(CursorMut);

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(list: &'a DoublyLinkedList<T>, current: NonNull<Node<T>>, index: usize) -> Self {
        Self {
            index,
            current,
            list,
        }
    }

    fn with_position(&self, current: NonNull<Node<T>>, index: usize) -> Self {
        Self::new(self.list, current, index)
    }

    fn ghost(&self) -> NonNull<Node<T>> {
        self.list.ghost_node()
    }

    fn list_len(&self) -> usize {
        self.list.len()
    }

    fn list_generation(&self) -> u64 {
        self.list.generation()
    }

    fn list_owner(&self) -> OwnerId {
        self.list.owner_id()
    }

    /// Return an immutable reference of current node of the cursor,
    /// or return `None` if it is located at the ghost node.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_kit::DoublyLinkedList;
    /// use std::iter::FromIterator;
    ///
    /// let list = DoublyLinkedList::from_iter([1, 2, 3]);
    /// assert_eq!(list.cursor(0).unwrap().current(), Some(&1));
    /// assert_eq!(list.cursor(2).unwrap().current(), Some(&3));
    /// assert_eq!(list.cursor(3).unwrap().current(), None);
    /// ```
    pub fn current(&self) -> Option<&'a T> {
        if self.is_ghost_node() {
            return None;
        }
        // SAFETY: it is safe because non-ghost nodes must hold a
        // valid element.
        unsafe { Some(&(*self.current.as_ptr()).element) }
    }

    /// Return an immutable reference of previous node of the cursor,
    /// or return `None` if it is located at the first node.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_kit::DoublyLinkedList;
    /// use std::iter::FromIterator;
    ///
    /// let list = DoublyLinkedList::from_iter([1, 2, 3]);
    /// assert_eq!(list.cursor(0).unwrap().previous(), None);
    /// assert_eq!(list.cursor(3).unwrap().previous(), Some(&3));
    /// ```
    pub fn previous(&self) -> Option<&'a T> {
        if self.is_front_node() {
            return None;
        }
        // SAFETY: the previous node of a non-first node is never a ghost node,
        // and non-ghost nodes must hold a valid element.
        Some(unsafe { &(*self.prev_node().as_ptr()).element })
    }

    /// Temporarily view the list via an immutable reference.
    pub fn view(&self) -> &'a DoublyLinkedList<T> {
        self.list
    }
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut DoublyLinkedList<T>, current: NonNull<Node<T>>, index: usize) -> Self {
        Self {
            index,
            current,
            ghost: list.ghost_node(),
            len: list.len(),
            generation: list.generation(),
            owner: list.owner_id(),
            _marker: PhantomData,
        }
    }

    /// A cursor over the same list at another position.
    pub(crate) fn with_position(&self, current: NonNull<Node<T>>, index: usize) -> Self {
        Self {
            index,
            current,
            ghost: self.ghost,
            len: self.len,
            generation: self.generation,
            owner: self.owner,
            _marker: PhantomData,
        }
    }

    fn ghost(&self) -> NonNull<Node<T>> {
        self.ghost
    }

    fn list_len(&self) -> usize {
        self.len
    }

    fn list_generation(&self) -> u64 {
        self.generation
    }

    fn list_owner(&self) -> OwnerId {
        self.owner
    }

    fn element_ptr(&self) -> Option<*mut T> {
        if self.is_ghost_node() {
            return None;
        }
        // SAFETY: non-ghost nodes hold a valid element.
        Some(unsafe { ptr::addr_of_mut!((*self.current.as_ptr()).element) })
    }

    fn missing(&self) -> Error {
        Error::out_of_range(self.index, self.len)
    }
}

macro_rules! impl_bidirectional {
    ($CURSOR:ident $(, $BOUND:path)?) => {
        impl<'a, T: 'a $(+ $BOUND)?> Bidirectional for $CURSOR<'a, T> {
            /// Move the cursor to the previous position, or return an error
            /// when passing through the ghost node would happen.
            ///
            /// This operation should compute in *O*(*1*) time.
            fn move_prev(&mut self) -> Result<()> {
                if self.is_front_node() {
                    return Err(Error::out_of_range(1, 0));
                }
                self.index -= 1;
                self.current = self.prev_node();
                Ok(())
            }

            fn seek_backward(&mut self, steps: usize) -> Result<()> {
                if steps > self.index {
                    return Err(Error::out_of_range(steps, self.index));
                }
                // SAFETY: there are at least `steps` nodes before the cursor.
                unsafe { self.seek_backward_fast(steps) };
                Ok(())
            }
        }
    };
}

impl_bidirectional!(Cursor);
impl_bidirectional!(CursorMut, Clone);

impl<'a, T: 'a> Forward for Cursor<'a, T> {
    type Item = T;
    type Ref<'r> = &'r T where Self: 'r;

    fn get(&self) -> Option<Self::Ref<'_>> {
        self.current()
    }

    fn index(&self) -> usize {
        self.index
    }

    fn generation(&self) -> u64 {
        self.list_generation()
    }

    fn owner(&self) -> OwnerId {
        self.list_owner()
    }

    fn is_end(&self) -> bool {
        self.is_ghost_node()
    }

    fn move_next(&mut self) {
        if !self.is_ghost_node() {
            self.index += 1;
            self.current = self.next_node();
        }
    }

    fn seek_forward(&mut self, steps: usize) {
        let steps = steps.min(self.list_len() - self.index);
        // SAFETY: the walk stops at the ghost node at the latest.
        unsafe { self.seek_forward_fast(steps) };
    }
}

impl<'a, T: Clone + 'a> Forward for CursorMut<'a, T> {
    type Item = T;
    type Ref<'r> = T where Self: 'r;

    fn get(&self) -> Option<Self::Ref<'_>> {
        // SAFETY: the list is exclusively borrowed by cursors that never hand
        // out references, so reading the element is not aliased by a write.
        self.element_ptr().map(|element| unsafe { (*element).clone() })
    }

    fn index(&self) -> usize {
        self.index
    }

    fn generation(&self) -> u64 {
        self.list_generation()
    }

    fn owner(&self) -> OwnerId {
        self.list_owner()
    }

    fn is_end(&self) -> bool {
        self.is_ghost_node()
    }

    fn move_next(&mut self) {
        if !self.is_ghost_node() {
            self.index += 1;
            self.current = self.next_node();
        }
    }

    fn seek_forward(&mut self, steps: usize) {
        let steps = steps.min(self.list_len() - self.index);
        // SAFETY: the walk stops at the ghost node at the latest.
        unsafe { self.seek_forward_fast(steps) };
    }
}

impl<'a, T: Clone + 'a> Writable for CursorMut<'a, T> {
    fn set(&mut self, value: T) -> Result<T> {
        let element = self.element_ptr().ok_or_else(|| self.missing())?;
        // SAFETY: see `get`.
        Ok(unsafe { ptr::replace(element, value) })
    }

    fn swap(&mut self, other: &mut Self) -> Result<()> {
        let a = self.element_ptr().ok_or_else(|| self.missing())?;
        let b = other.element_ptr().ok_or_else(|| other.missing())?;
        // SAFETY: see `get`; `ptr::swap` allows `a == b`.
        unsafe { ptr::swap(a, b) };
        Ok(())
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Cursor<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("list", &self.list)
            .field("current", &self.current())
            .field("index", &self.index)
            .finish()
    }
}

impl<'a, T: 'a> fmt::Debug for CursorMut<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("index", &self.index)
            .field("len", &self.len)
            .finish()
    }
}
