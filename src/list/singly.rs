//! A singly-linked list with head and tail pointers.

use std::fmt;
use std::iter::{FromIterator, FusedIterator};
use std::marker::PhantomData;
use std::ptr::NonNull;

use super::forward::{free_node, next_of, set_next, walk, Node};
pub use super::forward::{Cursor, CursorMut, Iter, IterMut};
use crate::cursor::{Bookmark, Forward, OwnerId};
use crate::error::{Error, Result};
use crate::traits::{Basic, Linear, Traverse, TraverseMut};

/// A singly-linked list.
///
/// Pushing at either end and popping at the front take *O*(1) time. Popping
/// at the back walks the list to find the new last node, in *O*(*n*) time.
///
/// The list hands out forward-only cursors.
///
/// # Examples
///
/// ```
/// use dsa_kit::SinglyLinkedList;
///
/// let mut list = SinglyLinkedList::new();
/// list.push_back(2);
/// list.push_back(3);
/// list.push_front(1);
///
/// assert_eq!(list.front(), Some(&1));
/// assert_eq!(list.back(), Some(&3));
/// assert_eq!(list.pop_back(), Some(3));
/// assert_eq!(list.len(), 2);
/// ```
pub struct SinglyLinkedList<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    generation: u64,
    id: OwnerId,
    _marker: PhantomData<Box<Node<T>>>,
}

impl<T> SinglyLinkedList<T> {
    fn touch(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    /// Identity of this list, see [`OwnerId`].
    pub fn owner_id(&self) -> OwnerId {
        self.id
    }

    fn node_at(&self, at: usize) -> Option<NonNull<Node<T>>> {
        if at >= self.len {
            return None;
        }
        // SAFETY: `at < len` nodes follow the head.
        self.head.map(|head| unsafe { walk(head, at) })
    }
}

impl<T> SinglyLinkedList<T> {
    /// Create an empty `SinglyLinkedList`.
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            generation: 0,
            id: OwnerId::new_unique(),
            _marker: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Structural modifications made so far, see [`Bookmark`].
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn front(&self) -> Option<&T> {
        // SAFETY: the head node is live while the list is borrowed.
        self.head.map(|node| unsafe { &(*node.as_ptr()).element })
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        // SAFETY: the list is mutably borrowed.
        self.head.map(|node| unsafe { &mut (*node.as_ptr()).element })
    }

    pub fn back(&self) -> Option<&T> {
        // SAFETY: the tail node is live while the list is borrowed.
        self.tail.map(|node| unsafe { &(*node.as_ptr()).element })
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        // SAFETY: the list is mutably borrowed.
        self.tail.map(|node| unsafe { &mut (*node.as_ptr()).element })
    }

    /// The element at position `at`, walking from the head.
    pub fn get(&self, at: usize) -> Option<&T> {
        // SAFETY: `node_at` only returns live nodes.
        self.node_at(at)
            .map(|node| unsafe { &(*node.as_ptr()).element })
    }

    pub fn push_front(&mut self, elt: T) {
        let node = Node::new_detached(elt);
        // SAFETY: `node` was just allocated.
        unsafe { set_next(node, self.head) };
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.head = Some(node);
        self.len += 1;
        self.touch();
    }

    pub fn push_back(&mut self, elt: T) {
        let node = Node::new_detached(elt);
        match self.tail {
            // SAFETY: the tail node is live.
            Some(tail) => unsafe { set_next(tail, Some(node)) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
        self.touch();
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        // SAFETY: the head node is unlinked before it is freed.
        unsafe {
            self.head = next_of(head);
            if self.head.is_none() {
                self.tail = None;
            }
            self.len -= 1;
            self.touch();
            Some(free_node(head))
        }
    }

    /// Remove the last element.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len <= 1 {
            return self.pop_front();
        }
        let tail = self.tail?;
        let new_tail = self.node_at(self.len - 2)?;
        // SAFETY: `new_tail` precedes the tail node, which is unlinked before
        // it is freed.
        unsafe {
            set_next(new_tail, None);
            self.tail = Some(new_tail);
            self.len -= 1;
            self.touch();
            Some(free_node(tail))
        }
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
        self.touch();
    }

    /// Remove all elements and return them in order.
    pub fn take_all(&mut self) -> Vec<T> {
        let mut items = Vec::with_capacity(self.len);
        while let Some(elt) = self.pop_front() {
            items.push(elt);
        }
        self.touch();
        items
    }

    /// Move all elements of `other` to the back of `self`, leaving `other`
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn append(&mut self, other: &mut Self) {
        let Some(other_head) = other.head.take() else {
            return;
        };
        match self.tail {
            // SAFETY: the tail node is live.
            Some(tail) => unsafe { set_next(tail, Some(other_head)) },
            None => self.head = Some(other_head),
        }
        self.tail = other.tail.take();
        self.len += std::mem::take(&mut other.len);
        self.touch();
        other.touch();
    }

    /// Reverse the order of the elements in place.
    pub fn reverse(&mut self) {
        let mut prev = None;
        let mut current = self.head;
        while let Some(node) = current {
            // SAFETY: every node of the chain is live and visited once.
            unsafe {
                current = next_of(node);
                set_next(node, prev);
            }
            prev = Some(node);
        }
        std::mem::swap(&mut self.head, &mut self.tail);
        self.touch();
    }

    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|e| e == x)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head, self.len)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.head, self.len)
    }

    /// Provides a cursor at position `at`; `at == len` is the end.
    pub fn cursor(&self, at: usize) -> Result<Cursor<'_, T>> {
        if at > self.len {
            return Err(Error::out_of_range(at, self.len));
        }
        Ok(Cursor::new(self.head, self.len, self.generation, self.id).advanced(at))
    }

    /// Provides a cursor at the position recorded by `bookmark`.
    pub fn restore(&self, bookmark: &Bookmark) -> Result<Cursor<'_, T>> {
        let at = bookmark.resolve(self.id, self.generation, self.len)?;
        self.cursor(at)
    }

    /// Like [`restore`](Self::restore), but the cursor is writable.
    pub fn restore_mut(&mut self, bookmark: &Bookmark) -> Result<CursorMut<'_, T>>
    where
        T: Clone,
    {
        let at = bookmark.resolve(self.id, self.generation, self.len)?;
        Ok(self.range_mut().0.advanced(at))
    }
}

impl<T> Basic for SinglyLinkedList<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> Option<usize> {
        None
    }

    fn clear(&mut self) {
        SinglyLinkedList::clear(self)
    }

    fn take_all(&mut self) -> Vec<T> {
        SinglyLinkedList::take_all(self)
    }
}

impl<T> Linear for SinglyLinkedList<T> {
    fn push_front(&mut self, value: T) -> Result<()> {
        SinglyLinkedList::push_front(self, value);
        Ok(())
    }

    fn push_back(&mut self, value: T) -> Result<()> {
        SinglyLinkedList::push_back(self, value);
        Ok(())
    }

    fn pop_front(&mut self) -> Option<T> {
        SinglyLinkedList::pop_front(self)
    }

    fn pop_back(&mut self) -> Option<T> {
        SinglyLinkedList::pop_back(self)
    }

    fn peek_front(&self) -> Option<&T> {
        self.front()
    }

    fn peek_back(&self) -> Option<&T> {
        self.back()
    }
}

impl<T> Traverse for SinglyLinkedList<T> {
    type Cursor<'a> = Cursor<'a, T> where Self: 'a;

    fn range(&self) -> (Cursor<'_, T>, Cursor<'_, T>) {
        let begin = Cursor::new(self.head, self.len, self.generation, self.id);
        let end = begin.advanced(self.len);
        (begin, end)
    }
}

impl<T: Clone> TraverseMut for SinglyLinkedList<T> {
    type CursorMut<'a> = CursorMut<'a, T> where Self: 'a;

    fn range_mut(&mut self) -> (CursorMut<'_, T>, CursorMut<'_, T>) {
        let begin = CursorMut::new(self.head, self.len, self.generation, self.id);
        let end = begin.advanced(self.len);
        (begin, end)
    }
}

/// An owning iterator over the elements of a `SinglyLinkedList`.
pub struct IntoIter<T> {
    list: SinglyLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SinglyLinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SinglyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|elt| self.push_back(elt));
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        while self.pop_front().is_some() {}
    }
}

unsafe impl<T: Send> Send for SinglyLinkedList<T> {}

unsafe impl<T: Sync> Sync for SinglyLinkedList<T> {}
