//! Singly-linked nodes, and the forward-only cursors and iterators shared by
//! [`SinglyLinkedList`](super::SinglyLinkedList) and
//! [`CircularList`](super::CircularList).
//!
//! Both lists chain their nodes through a single `next` link. The circular
//! list links its last node back to the first one, so the walkers here never
//! follow links blindly: they count positions and stop after `len` nodes.

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::{self, NonNull};

use crate::cursor::{Forward, OwnerId, Writable};
use crate::error::{Error, Result};

pub(crate) struct Node<T> {
    pub(crate) next: Option<NonNull<Node<T>>>,
    pub(crate) element: T,
}

impl<T> Node<T> {
    pub(crate) fn new_detached(element: T) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node {
            next: None,
            element,
        })))
    }
}

/// Read the successor link of `node`.
///
/// # Safety
///
/// `node` must point to a live node.
pub(crate) unsafe fn next_of<T>(node: NonNull<Node<T>>) -> Option<NonNull<Node<T>>> {
    (*node.as_ptr()).next
}

/// # Safety
///
/// `node` must point to a live node.
pub(crate) unsafe fn set_next<T>(node: NonNull<Node<T>>, next: Option<NonNull<Node<T>>>) {
    (*node.as_ptr()).next = next;
}

/// Free `node` and return its element.
///
/// # Safety
///
/// `node` must come from [`Node::new_detached`] and be unreachable from any
/// list afterwards.
pub(crate) unsafe fn free_node<T>(node: NonNull<Node<T>>) -> T {
    Box::from_raw(node.as_ptr()).element
}

/// Walk `steps` links from `node`.
///
/// # Safety
///
/// At least `steps` live nodes must follow `node`.
pub(crate) unsafe fn walk<T>(mut node: NonNull<Node<T>>, steps: usize) -> NonNull<Node<T>> {
    for _ in 0..steps {
        match next_of(node) {
            Some(next) => node = next,
            None => break,
        }
    }
    node
}

/// A read-only forward cursor over a singly-linked list.
///
/// The end position carries no node, so a `Cursor` cannot step backward:
/// there is no `Bidirectional` implementation.
///
/// ```compile_fail
/// use dsa_kit::cursor::Bidirectional;
/// use dsa_kit::traits::Traverse;
/// use dsa_kit::SinglyLinkedList;
/// use std::iter::FromIterator;
///
/// let list = SinglyLinkedList::from_iter([1, 2]);
/// let (_, mut end) = list.range();
/// end.move_prev().unwrap();
/// ```
pub struct Cursor<'a, T: 'a> {
    current: Option<NonNull<Node<T>>>,
    index: usize,
    len: usize,
    generation: u64,
    owner: OwnerId,
    _marker: PhantomData<&'a T>,
}

/// A writable forward cursor over a singly-linked list.
///
/// Reads clone the element and writes replace it, so several `CursorMut`
/// over one list can coexist.
pub struct CursorMut<'a, T: 'a> {
    current: Option<NonNull<Node<T>>>,
    index: usize,
    len: usize,
    generation: u64,
    owner: OwnerId,
    _marker: PhantomData<&'a mut T>,
}

macro_rules! impl_forward_cursor {
    ($CURSOR:ident) => {
        impl<'a, T: 'a> $CURSOR<'a, T> {
            /// A cursor on `first`, the node at position 0.
            pub(crate) fn new(
                first: Option<NonNull<Node<T>>>,
                len: usize,
                generation: u64,
                owner: OwnerId,
            ) -> Self {
                Self {
                    current: if len == 0 { None } else { first },
                    index: 0,
                    len,
                    generation,
                    owner,
                    _marker: PhantomData,
                }
            }

            /// Step one node forward. After `len` steps the cursor reaches the
            /// end position, even if the last node links back to the first.
            fn step(&mut self) {
                if let Some(node) = self.current {
                    self.index += 1;
                    self.current = if self.index == self.len {
                        None
                    } else {
                        // SAFETY: fewer than `len` nodes were visited, so the
                        // successor is a live node of the list.
                        unsafe { next_of(node) }
                    };
                }
            }
        }

        impl<'a, T: 'a> Clone for $CURSOR<'a, T> {
            fn clone(&self) -> Self {
                Self {
                    current: self.current,
                    index: self.index,
                    len: self.len,
                    generation: self.generation,
                    owner: self.owner,
                    _marker: PhantomData,
                }
            }
        }

        /// Only cursors of the same list at the same position are equal.
        impl<'a, T: 'a> PartialEq for $CURSOR<'a, T> {
            fn eq(&self, other: &Self) -> bool {
                self.owner == other.owner && self.index == other.index
            }
        }

        impl<'a, T: 'a> Eq for $CURSOR<'a, T> {}

        impl<'a, T: 'a> fmt::Debug for $CURSOR<'a, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($CURSOR))
                    .field("index", &self.index)
                    .field("len", &self.len)
                    .finish()
            }
        }
    };
}

impl_forward_cursor!(Cursor);
impl_forward_cursor!(CursorMut);

impl<'a, T: 'a> Cursor<'a, T> {
    /// The element under the cursor, or `None` at the end position.
    pub fn current(&self) -> Option<&'a T> {
        // SAFETY: the list is immutably borrowed for `'a`, and the node is live.
        self.current.map(|node| unsafe { &(*node.as_ptr()).element })
    }
}

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
        self.generation
    }

    fn owner(&self) -> OwnerId {
        self.owner
    }

    fn is_end(&self) -> bool {
        self.current.is_none()
    }

    fn move_next(&mut self) {
        self.step()
    }
}

impl<'a, T: 'a> CursorMut<'a, T> {
    fn element_ptr(&self) -> Result<*mut T> {
        let node = self
            .current
            .ok_or_else(|| Error::out_of_range(self.index, self.len))?;
        // SAFETY: the node is live while the list is borrowed.
        Ok(unsafe { ptr::addr_of_mut!((*node.as_ptr()).element) })
    }
}

impl<'a, T: Clone + 'a> Forward for CursorMut<'a, T> {
    type Item = T;
    type Ref<'r> = T where Self: 'r;

    fn get(&self) -> Option<T> {
        // SAFETY: the writable cursors never hand out references, so no write
        // can overlap this read.
        self.element_ptr()
            .ok()
            .map(|element| unsafe { (*element).clone() })
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
        self.current.is_none()
    }

    fn move_next(&mut self) {
        self.step()
    }
}

impl<'a, T: Clone + 'a> Writable for CursorMut<'a, T> {
    fn set(&mut self, value: T) -> Result<T> {
        let element = self.element_ptr()?;
        // SAFETY: see `get`.
        Ok(unsafe { ptr::replace(element, value) })
    }

    fn swap(&mut self, other: &mut Self) -> Result<()> {
        let a = self.element_ptr()?;
        let b = other.element_ptr()?;
        // SAFETY: see `get`; `ptr::swap` allows `a == b`.
        unsafe { ptr::swap(a, b) };
        Ok(())
    }
}

/// An iterator over the first `len` nodes of a chain.
pub struct Iter<'a, T: 'a> {
    next: Option<NonNull<Node<T>>>,
    len: usize,
    _marker: PhantomData<&'a T>,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(first: Option<NonNull<Node<T>>>, len: usize) -> Self {
        Self {
            next: first,
            len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self::new(self.next, self.len)
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let node = self.next?;
        self.len -= 1;
        // SAFETY: `node` is one of the first `len` nodes of a borrowed list.
        unsafe {
            self.next = next_of(node);
            Some(&(*node.as_ptr()).element)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

/// A mutable iterator over the first `len` nodes of a chain.
pub struct IterMut<'a, T: 'a> {
    next: Option<NonNull<Node<T>>>,
    len: usize,
    _marker: PhantomData<&'a mut T>,
}

impl<'a, T: 'a> IterMut<'a, T> {
    pub(crate) fn new(first: Option<NonNull<Node<T>>>, len: usize) -> Self {
        Self {
            next: first,
            len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T: 'a> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let node = self.next?;
        self.len -= 1;
        // SAFETY: the list is mutably borrowed, and each of the first `len`
        // nodes is yielded once.
        unsafe {
            self.next = next_of(node);
            Some(&mut (*node.as_ptr()).element)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T: 'a> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T: 'a> FusedIterator for IterMut<'a, T> {}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T: 'a> fmt::Debug for IterMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IterMut").field(&self.len).finish()
    }
}

unsafe impl<T: Sync> Send for Iter<'_, T> {}

unsafe impl<T: Sync> Sync for Iter<'_, T> {}

unsafe impl<T: Send> Send for IterMut<'_, T> {}

unsafe impl<T: Sync> Sync for IterMut<'_, T> {}
