//! A circular singly-linked list, held by its last node.

use std::fmt;
use std::iter::{FromIterator, FusedIterator};
use std::marker::PhantomData;
use std::ptr::NonNull;

use super::forward::{free_node, next_of, set_next, walk, Node};
pub use super::forward::{Cursor, CursorMut, Iter, IterMut};
use crate::cursor::{Bookmark, Forward, OwnerId};
use crate::error::{Error, Result};
use crate::traits::{Basic, Linear, Traverse, TraverseMut};

/// A circular singly-linked list.
///
/// The list only keeps its last node, whose successor is the first node.
/// This gives *O*(1) pushes at both ends, *O*(1) pops at the front and an
/// *O*(1) [`rotate`](CircularList::rotate). Popping at the back is *O*(*n*).
///
/// Cursors and iterators visit each element once, from the first to the
/// last; they do not wrap around.
///
/// # Examples
///
/// ```
/// use dsa_kit::CircularList;
/// use std::iter::FromIterator;
///
/// let mut list = CircularList::from_iter([1, 2, 3]);
/// list.rotate();
/// assert_eq!(Vec::from_iter(list.iter().copied()), vec![2, 3, 1]);
/// assert_eq!(list.front(), Some(&2));
/// assert_eq!(list.back(), Some(&1));
/// ```
pub struct CircularList<T> {
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    generation: u64,
    id: OwnerId,
    _marker: PhantomData<Box<Node<T>>>,
}

impl<T> CircularList<T> {
    fn touch(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    /// Identity of this list, see [`OwnerId`].
    pub fn owner_id(&self) -> OwnerId {
        self.id
    }

    fn head(&self) -> Option<NonNull<Node<T>>> {
        // SAFETY: the tail node is live and links to the first node.
        self.tail.and_then(|tail| unsafe { next_of(tail) })
    }
}

impl<T> CircularList<T> {
    /// Create an empty `CircularList`.
    pub fn new() -> Self {
        Self {
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
        // SAFETY: nodes are live while the list is borrowed.
        self.head().map(|node| unsafe { &(*node.as_ptr()).element })
    }

    pub fn back(&self) -> Option<&T> {
        // SAFETY: nodes are live while the list is borrowed.
        self.tail.map(|node| unsafe { &(*node.as_ptr()).element })
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        // SAFETY: the list is mutably borrowed.
        self.head().map(|node| unsafe { &mut (*node.as_ptr()).element })
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        // SAFETY: the list is mutably borrowed.
        self.tail.map(|node| unsafe { &mut (*node.as_ptr()).element })
    }

    pub fn push_front(&mut self, elt: T) {
        let node = Node::new_detached(elt);
        // SAFETY: `node` was just allocated and the tail node is live.
        unsafe {
            match self.tail {
                Some(tail) => {
                    set_next(node, next_of(tail));
                    set_next(tail, Some(node));
                }
                None => {
                    set_next(node, Some(node));
                    self.tail = Some(node);
                }
            }
        }
        self.len += 1;
        self.touch();
    }

    pub fn push_back(&mut self, elt: T) {
        self.push_front(elt);
        // The new first node becomes the last one.
        self.tail = self.head();
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let tail = self.tail?;
        let head = self.head()?;
        // SAFETY: the first node is unlinked from the cycle before it is freed.
        unsafe {
            if head == tail {
                self.tail = None;
            } else {
                set_next(tail, next_of(head));
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
        let head = self.head()?;
        // SAFETY: `len >= 2`, so the node before the tail is `len - 2` steps
        // after the head. The tail is unlinked before it is freed.
        unsafe {
            let new_tail = walk(head, self.len - 2);
            set_next(new_tail, next_of(tail));
            self.tail = Some(new_tail);
            self.len -= 1;
            self.touch();
            Some(free_node(tail))
        }
    }

    /// Move the first element to the back.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn rotate(&mut self) {
        if self.len > 1 {
            self.tail = self.head();
            self.touch();
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

    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|e| e == x)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head(), self.len)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.head(), self.len)
    }

    /// Provides a cursor at position `at`; `at == len` is the end.
    pub fn cursor(&self, at: usize) -> Result<Cursor<'_, T>> {
        if at > self.len {
            return Err(Error::out_of_range(at, self.len));
        }
        Ok(self.range().0.advanced(at))
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

impl<T> Basic for CircularList<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> Option<usize> {
        None
    }

    fn clear(&mut self) {
        CircularList::clear(self)
    }

    fn take_all(&mut self) -> Vec<T> {
        CircularList::take_all(self)
    }
}

impl<T> Linear for CircularList<T> {
    fn push_front(&mut self, value: T) -> Result<()> {
        CircularList::push_front(self, value);
        Ok(())
    }

    fn push_back(&mut self, value: T) -> Result<()> {
        CircularList::push_back(self, value);
        Ok(())
    }

    fn pop_front(&mut self) -> Option<T> {
        CircularList::pop_front(self)
    }

    fn pop_back(&mut self) -> Option<T> {
        CircularList::pop_back(self)
    }

    fn peek_front(&self) -> Option<&T> {
        self.front()
    }

    fn peek_back(&self) -> Option<&T> {
        self.back()
    }
}

impl<T> Traverse for CircularList<T> {
    type Cursor<'a> = Cursor<'a, T> where Self: 'a;

    fn range(&self) -> (Cursor<'_, T>, Cursor<'_, T>) {
        let begin = Cursor::new(self.head(), self.len, self.generation, self.id);
        let end = begin.advanced(self.len);
        (begin, end)
    }
}

impl<T: Clone> TraverseMut for CircularList<T> {
    type CursorMut<'a> = CursorMut<'a, T> where Self: 'a;

    fn range_mut(&mut self) -> (CursorMut<'_, T>, CursorMut<'_, T>) {
        let begin = CursorMut::new(self.head(), self.len, self.generation, self.id);
        let end = begin.advanced(self.len);
        (begin, end)
    }
}

/// An owning iterator over the elements of a `CircularList`.
pub struct IntoIter<T> {
    list: CircularList<T>,
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

impl<T> IntoIterator for CircularList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a CircularList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut CircularList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T> FromIterator<T> for CircularList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = CircularList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for CircularList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|elt| self.push_back(elt));
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for CircularList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

impl<T: Clone> Clone for CircularList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for CircularList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for CircularList<T> {}

impl<T: fmt::Debug> fmt::Debug for CircularList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T> Default for CircularList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for CircularList<T> {
    fn drop(&mut self) {
        while self.pop_front().is_some() {}
    }
}

unsafe impl<T: Send> Send for CircularList<T> {}

unsafe impl<T: Sync> Sync for CircularList<T> {}

#[cfg(test)]
mod tests {
    use super::CircularList;
    use crate::cursor::{distance, Forward, Writable};
    use crate::traits::{Linear, Traverse, TraverseMut};
    use std::iter::FromIterator;

    #[test]
    fn push_pop_keeps_the_cycle() {
        let mut list = CircularList::new();
        list.push_back(2);
        list.push_front(1);
        list.push_back(3);
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.back(), Some(&3));
        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.front(), list.back());
        assert_eq!(list.pop_back(), Some(2));
        assert_eq!(list.pop_front(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn rotate_moves_front_to_back() {
        let mut list = CircularList::from_iter(1..=4);
        let generation = list.generation();
        list.rotate();
        list.rotate();
        assert_eq!(Vec::from_iter(list.clone()), vec![3, 4, 1, 2]);
        assert_ne!(list.generation(), generation);

        let mut single = CircularList::from_iter([9]);
        single.rotate();
        assert_eq!(single.front(), Some(&9));
    }

    #[test]
    fn cursors_stop_after_one_lap() {
        let list = CircularList::from_iter(['x', 'y', 'z']);
        let (begin, end) = list.range();
        assert_eq!(distance(&begin, &end), 3);
        let mut cursor = begin.advanced(2);
        assert_eq!(cursor.get(), Some(&'z'));
        cursor.move_next();
        assert!(cursor.is_end());
        cursor.move_next();
        assert_eq!(cursor, end);
        assert_eq!(list.iter().count(), 3);
    }

    #[test]
    fn writable_cursors() {
        let mut list = CircularList::from_iter([3, 1, 2]);
        {
            let (mut begin, _) = list.range_mut();
            let mut second = begin.advanced(1);
            begin.swap(&mut second).unwrap();
            assert_eq!(second.set(7), Ok(3));
        }
        assert_eq!(list.peek_front(), Some(&1));
        assert_eq!(Vec::from_iter(list), vec![1, 7, 2]);
    }
}
