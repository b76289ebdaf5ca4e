use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::ptr::NonNull;

use crate::cursor::{Bookmark, OwnerId};
use crate::error::{Error, Result};
use crate::traits::{Basic, Linear, RandomAccess, Traverse, TraverseMut};

pub use cursor::{Cursor, CursorMut};
pub use iterator::{IntoIter, Iter, IterMut};

mod algorithms;
pub mod cursor;
pub mod iterator;

/// A doubly-linked list with owned nodes, implemented as a cyclic list
/// around a ghost node.
///
/// Inserting or removing at either end takes constant time; reaching an
/// element by position takes *O*(*n*) time, walking from whichever end is
/// nearer.
///
/// In a list with length *n*, the nodes are indexed by 0, 1, ..., *n* - 1,
/// and the ghost node, which is the end position of every cursor, is indexed
/// by *n*:
///
/// ```text
///          ┌────────────────────────────────────────────────┐
///          ↓                                   (Ghost) Node N│
///    ╔═══════════╗           ╔═══════════╗      ┌───────────┐│
///    ║   next    ║ ────────→ ║   next    ║ ┄┄─→ │   next    │┘
///    ╟───────────╢           ╟───────────╢      ├───────────┤
/// ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←─┄┄ │   prev    │
/// │  ╟───────────╢           ╟───────────╢      ├───────────┤
/// │  ║ payload T ║           ║ payload T ║      ┊no payload ┊
/// │  ╚═══════════╝           ╚═══════════╝      └╌╌╌╌╌╌╌╌╌╌╌┘
/// │      Node 0                  Node 1              ↑
/// └──────────────────────────────────────────────────┘
/// ```
///
/// # Naming Conventions
///
/// - `front..=back`: a closed range of list nodes, both inclusive;
/// - `start..end`: a half-open range of list nodes, left inclusive and right
///   exclusive (probably the ghost node).
pub struct DoublyLinkedList<T> {
    /// Allocated with the layout of a full node; its element is never
    /// initialized.
    ghost: NonNull<Node<T>>,
    len: usize,
    generation: u64,
    id: OwnerId,
    _marker: PhantomData<Box<Node<T>>>,
}

#[repr(C)]
pub(crate) struct Node<T> {
    pub(crate) next: NonNull<Node<T>>,
    pub(crate) prev: NonNull<Node<T>>,
    pub(crate) element: T,
}

/// Nodes fragment detached from a list, used in list splitting or
/// splicing.
///
/// When detached from a list, reading of `front.prev` and `back.next`
/// is invalid.
pub(crate) struct DetachedNodes<T> {
    front: NonNull<Node<T>>,
    back: NonNull<Node<T>>,
    len: usize,
}

impl<T> Node<T> {
    /// Create a detached node with given element.
    pub(crate) fn new_detached(element: T) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node {
            next: NonNull::dangling(),
            prev: NonNull::dangling(),
            element,
        })))
    }

    pub(crate) fn into_element(node: Box<Node<T>>) -> T {
        node.element
    }
}

/// Read the successor link of `node`.
///
/// # Safety
///
/// `node` is an element node or the ghost node of a live list.
#[inline]
pub(crate) unsafe fn next_of<T>(node: NonNull<Node<T>>) -> NonNull<Node<T>> {
    (*node.as_ptr()).next
}

/// Read the predecessor link of `node`.
///
/// # Safety
///
/// Same as [`next_of`].
#[inline]
pub(crate) unsafe fn prev_of<T>(node: NonNull<Node<T>>) -> NonNull<Node<T>> {
    (*node.as_ptr()).prev
}

/// Link `prev` and `next` to each other.
///
/// # Safety
///
/// Same as [`next_of`], for both nodes.
unsafe fn connect<T>(prev: NonNull<Node<T>>, next: NonNull<Node<T>>) {
    (*prev.as_ptr()).next = next;
    (*next.as_ptr()).prev = prev;
}

// private methods
impl<T> DoublyLinkedList<T> {
    pub(crate) fn ghost_node(&self) -> NonNull<Node<T>> {
        self.ghost
    }

    pub(crate) fn front_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `ghost.next` is always valid (either `ghost` itself, or the first element
        // in the list).
        unsafe { next_of(self.ghost) }
    }

    pub(crate) fn back_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `ghost.prev` is always valid (either `ghost` itself, or the last element
        // in the list).
        unsafe { prev_of(self.ghost) }
    }

    fn touch(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    /// Detach a single node `node` from the list, and return it as a box.
    ///
    /// It is unsafe because it does not check whether `node` belongs to the list.
    ///
    /// If the `node` does not belong to the list, or is the ghost node, this
    /// function call will make the list ill-formed.
    unsafe fn detach_node(&mut self, node: NonNull<Node<T>>) -> Box<Node<T>> {
        self.len -= 1;
        self.touch();
        let node = Box::from_raw(node.as_ptr());
        connect(node.prev, node.next);
        node
    }

    /// Attach a single node `node` to the list, between `prev` and `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next` belongs
    /// to the list, or whether the `prev` and `next` is adjacent (only in
    /// `#[cfg(debug_assertions)]`).
    unsafe fn attach_node(
        &mut self,
        prev: NonNull<Node<T>>,
        next: NonNull<Node<T>>,
        node: NonNull<Node<T>>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        connect(prev, node);
        connect(node, next);
        self.len += 1;
        self.touch();
    }

    /// Detach a range of nodes `front..=back` of length `len` from the list.
    ///
    /// It is unsafe because it does not check whether `front..=back` is a valid
    /// range of the list with exactly `len` nodes.
    unsafe fn detach_nodes(
        &mut self,
        front: NonNull<Node<T>>,
        back: NonNull<Node<T>>,
        len: usize,
    ) -> DetachedNodes<T> {
        debug_assert!(len > 0, "Cannot detach nodes of length 0");
        self.len -= len;
        self.touch();
        connect(prev_of(front), next_of(back));
        DetachedNodes { front, back, len }
    }

    /// Attach a range of detached nodes to the list, between `prev` and `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next` belongs
    /// to the list, or whether the `prev` and `next` is adjacent.
    unsafe fn attach_nodes(
        &mut self,
        prev: NonNull<Node<T>>,
        next: NonNull<Node<T>>,
        detached: DetachedNodes<T>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        connect(prev, detached.front);
        connect(detached.back, next);
        self.len += detached.len;
        self.touch();
    }

    /// Detach all nodes from the list, or return `None` if the list is empty.
    fn detach_all_nodes(&mut self) -> Option<DetachedNodes<T>> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: `front_node()..=back_node()` is the whole, non-empty list.
        unsafe { Some(self.detach_nodes(self.front_node(), self.back_node(), self.len)) }
    }

    fn from_detached(detached: DetachedNodes<T>) -> Self {
        let mut list = DoublyLinkedList::new();
        // SAFETY: the ghost node of an empty list is adjacent to itself.
        unsafe { list.attach_nodes(list.ghost, list.ghost, detached) };
        list
    }

    /// The node at position `at`, where `at == len` is the ghost node. Walks
    /// from whichever end is nearer.
    ///
    /// The caller checks `at <= len`.
    fn node_at(&self, at: usize) -> NonNull<Node<T>> {
        debug_assert!(at <= self.len);
        let mut node = self.ghost;
        // SAFETY: at most `len` steps are taken in either direction, so the
        // walk never leaves the cycle.
        unsafe {
            if at <= self.len / 2 {
                node = next_of(node);
                (0..at).for_each(|_| node = next_of(node));
            } else {
                (0..self.len - at).for_each(|_| node = prev_of(node));
            }
        }
        node
    }

    fn check_position(&self, at: usize, inclusive_end: bool) -> Result<()> {
        let bound = if inclusive_end { self.len + 1 } else { self.len };
        if at >= bound {
            return Err(Error::out_of_range(at, self.len));
        }
        Ok(())
    }
}

impl<T> DoublyLinkedList<T> {
    /// Create an empty `DoublyLinkedList`.
    ///
    /// # Examples
    /// ```
    /// use dsa_kit::DoublyLinkedList;
    /// let list: DoublyLinkedList<u32> = DoublyLinkedList::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        let ghost = NonNull::from(Box::leak(Box::new(MaybeUninit::<Node<T>>::uninit()))).cast();
        // SAFETY: `ghost` is freshly allocated with the layout of a node; only
        // its links are written and read.
        unsafe { connect(ghost, ghost) };
        Self {
            ghost,
            len: 0,
            generation: 0,
            id: OwnerId::new_unique(),
            _marker: PhantomData,
        }
    }

    /// Returns `true` if the list is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the length of the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_kit::DoublyLinkedList;
    ///
    /// let mut list = DoublyLinkedList::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_back(3);
    /// assert_eq!(list.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Structural modifications made so far, see [`Bookmark`].
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Identity of this list, see [`OwnerId`].
    pub fn owner_id(&self) -> OwnerId {
        self.id
    }

    /// Removes all elements from the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.cursor_start().current()
    }

    /// Provides a mutable reference to the front element, or `None` if the list
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_kit::DoublyLinkedList;
    ///
    /// let mut list = DoublyLinkedList::new();
    /// list.push_front(1);
    ///
    /// if let Some(x) = list.front_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.front(), Some(&5));
    /// ```
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|at| self.get(at))
    }

    /// Provides a mutable reference to the back element, or `None` if the list
    /// is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.len.checked_sub(1).and_then(move |at| self.get_mut(at))
    }

    /// Provides a reference to the element at position `at`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(min(`at`, *n* - `at`)) time.
    pub fn get(&self, at: usize) -> Option<&T> {
        if at >= self.len {
            return None;
        }
        // SAFETY: `at < len`, so the node holds an element.
        Some(unsafe { &(*self.node_at(at).as_ptr()).element })
    }

    pub fn get_mut(&mut self, at: usize) -> Option<&mut T> {
        if at >= self.len {
            return None;
        }
        // SAFETY: `at < len`, and the list is borrowed mutably.
        Some(unsafe { &mut (*self.node_at(at).as_ptr()).element })
    }

    /// Replaces the element at position `at`, returning the previous one.
    ///
    /// This is not a structural modification: outstanding bookmarks stay
    /// valid.
    pub fn set(&mut self, at: usize, value: T) -> Result<T> {
        let len = self.len;
        let slot = self
            .get_mut(at)
            .ok_or_else(|| Error::out_of_range(at, len))?;
        Ok(std::mem::replace(slot, value))
    }

    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_kit::DoublyLinkedList;
    ///
    /// let mut list = DoublyLinkedList::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.front().unwrap(), &2);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front().unwrap(), &1);
    /// ```
    pub fn push_front(&mut self, elt: T) {
        // SAFETY: the ghost node and the front node are adjacent.
        unsafe { self.attach_node(self.ghost, self.front_node(), Node::new_detached(elt)) }
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the list is not empty, so the front node is an element node.
        let node = unsafe { self.detach_node(self.front_node()) };
        Some(Node::into_element(node))
    }

    /// Appends an element to the back of a list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_kit::DoublyLinkedList;
    ///
    /// let mut list = DoublyLinkedList::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.back().unwrap(), &3);
    /// ```
    pub fn push_back(&mut self, elt: T) {
        // SAFETY: the back node and the ghost node are adjacent.
        unsafe { self.attach_node(self.back_node(), self.ghost, Node::new_detached(elt)) }
    }

    /// Removes the last element from a list and returns it, or `None` if
    /// it is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the list is not empty, so the back node is an element node.
        let node = unsafe { self.detach_node(self.back_node()) };
        Some(Node::into_element(node))
    }

    /// Provides a cursor at the node with given index.
    ///
    /// By convention, the cursor is pointing to the ghost node if `at == len`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_kit::DoublyLinkedList;
    /// use std::iter::FromIterator;
    ///
    /// let list = DoublyLinkedList::from_iter([1, 2, 3]);
    /// assert_eq!(list.cursor(1).unwrap().current(), Some(&2));
    /// assert_eq!(list.cursor(3).unwrap().current(), None);
    /// assert!(list.cursor(4).is_err());
    /// ```
    pub fn cursor(&self, at: usize) -> Result<Cursor<'_, T>> {
        self.check_position(at, true)?;
        Ok(Cursor::new(self, self.node_at(at), at))
    }

    /// Provides a cursor at the first node.
    ///
    /// The cursor is pointing to the ghost node if the list is empty.
    pub fn cursor_start(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.front_node(), 0)
    }

    /// Provides a cursor at the ghost node.
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.ghost, self.len)
    }

    /// Provides a writable cursor at the node with given index.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `at > len`.
    pub fn cursor_mut(&mut self, at: usize) -> Result<CursorMut<'_, T>> {
        self.check_position(at, true)?;
        let node = self.node_at(at);
        Ok(CursorMut::new(self, node, at))
    }

    /// Provides a cursor at the position recorded by `bookmark`.
    ///
    /// # Errors
    ///
    /// [`Error::StaleCursor`] if the list was structurally modified since
    /// the bookmark was taken, [`Error::Unsupported`] if the bookmark belongs
    /// to another container.
    pub fn restore(&self, bookmark: &Bookmark) -> Result<Cursor<'_, T>> {
        let at = bookmark.resolve(self.id, self.generation, self.len)?;
        self.cursor(at)
    }

    /// Like [`restore`](Self::restore), but the cursor is writable.
    pub fn restore_mut(&mut self, bookmark: &Bookmark) -> Result<CursorMut<'_, T>> {
        let at = bookmark.resolve(self.id, self.generation, self.len)?;
        self.cursor_mut(at)
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_kit::DoublyLinkedList;
    ///
    /// let mut list: DoublyLinkedList<u32> = DoublyLinkedList::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Moves all elements from `other` to the end of the list.
    ///
    /// This reuses all the nodes from `other` and moves them into `self`. After
    /// this operation, `other` becomes empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_kit::DoublyLinkedList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list1 = DoublyLinkedList::from_iter(['a']);
    /// let mut list2 = DoublyLinkedList::from_iter(['b', 'c']);
    ///
    /// list1.append(&mut list2);
    ///
    /// assert_eq!(Vec::from_iter(list1), vec!['a', 'b', 'c']);
    /// assert!(list2.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        if let Some(detached) = other.detach_all_nodes() {
            // SAFETY: `self.back_node()` and the ghost node are adjacent.
            unsafe { self.attach_nodes(self.back_node(), self.ghost, detached) }
        }
    }

    /// Moves all elements from `other` to the begin of the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time and *O*(1) memory.
    pub fn prepend(&mut self, other: &mut Self) {
        if let Some(detached) = other.detach_all_nodes() {
            // SAFETY: the ghost node and `self.front_node()` are adjacent.
            unsafe { self.attach_nodes(self.ghost, self.front_node(), detached) }
        }
    }

    /// Splits the list into two at the given index. Returns everything after
    /// the given index (inclusive).
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(min(`at`, *n* - `at`)) time.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_kit::DoublyLinkedList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = DoublyLinkedList::from_iter([3, 2, 1]);
    /// let split = list.split_off(2).unwrap();
    ///
    /// assert_eq!(Vec::from_iter(split), vec![1]);
    /// assert_eq!(Vec::from_iter(list), vec![3, 2]);
    /// ```
    pub fn split_off(&mut self, at: usize) -> Result<Self> {
        self.check_position(at, true)?;
        if at == self.len {
            return Ok(DoublyLinkedList::new());
        }
        let front = self.node_at(at);
        let len = self.len - at;
        // SAFETY: `front` is an element node, so `front..=back` is a valid,
        // non-empty range of `len` nodes.
        let detached = unsafe { self.detach_nodes(front, self.back_node(), len) };
        Ok(DoublyLinkedList::from_detached(detached))
    }

    /// Removes the element at the given index and returns it.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(min(`at`, *n* - `at`)) time.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `at >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_kit::DoublyLinkedList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = DoublyLinkedList::from_iter([3, 2, 1]);
    ///
    /// assert_eq!(list.remove(1), Ok(2));
    /// assert_eq!(list.remove(0), Ok(3));
    /// assert!(list.remove(1).is_err());
    /// ```
    pub fn remove(&mut self, at: usize) -> Result<T> {
        self.check_position(at, false)?;
        // SAFETY: `at < len`, so the node is an element node of the list.
        let node = unsafe { self.detach_node(self.node_at(at)) };
        Ok(Node::into_element(node))
    }

    /// Adds an element at the given index in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(min(`at`, *n* - `at`)) time.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_kit::DoublyLinkedList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = DoublyLinkedList::from_iter([1, 2, 3]);
    ///
    /// list.insert(2, 4).unwrap();
    /// list.insert(4, 5).unwrap();
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 4, 3, 5]);
    /// ```
    pub fn insert(&mut self, at: usize, elt: T) -> Result<()> {
        self.check_position(at, true)?;
        let next = self.node_at(at);
        // SAFETY: `next` belongs to the list, and so does its predecessor.
        unsafe { self.attach_node(prev_of(next), next, Node::new_detached(elt)) };
        Ok(())
    }

    /// Splices another list at the given index.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `at > len`; `other` is dropped in that
    /// case.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_kit::DoublyLinkedList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = DoublyLinkedList::from_iter([1, 2, 3]);
    /// list.splice_at(2, DoublyLinkedList::from_iter([4, 5, 6])).unwrap();
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 4, 5, 6, 3]);
    /// ```
    pub fn splice_at(&mut self, at: usize, mut other: Self) -> Result<()> {
        self.check_position(at, true)?;
        let next = self.node_at(at);
        if let Some(detached) = other.detach_all_nodes() {
            // SAFETY: `next` belongs to the list, and so does its predecessor.
            unsafe { self.attach_nodes(prev_of(next), next, detached) };
        }
        Ok(())
    }

    /// Removes all elements and returns them in order.
    pub fn take_all(&mut self) -> Vec<T> {
        let mut items = Vec::with_capacity(self.len);
        while let Some(item) = self.pop_front() {
            items.push(item);
        }
        items
    }
}

impl<T: Debug> Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(debug_assertions)]
fn assert_adjacent<T>(prev: NonNull<Node<T>>, next: NonNull<Node<T>>) {
    // SAFETY: only called with nodes of a live list.
    unsafe {
        assert_eq!(next_of(prev), next);
        assert_eq!(prev_of(next), prev);
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
        // SAFETY: the ghost was allocated in `new` as a `MaybeUninit<Node<T>>`,
        // and its element was never initialized, so nothing else is dropped.
        unsafe { drop(Box::from_raw(self.ghost.cast::<MaybeUninit<Node<T>>>().as_ptr())) };
    }
}

unsafe impl<T: Send> Send for DoublyLinkedList<T> {}

unsafe impl<T: Sync> Sync for DoublyLinkedList<T> {}

impl<T> Basic for DoublyLinkedList<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> Option<usize> {
        None
    }

    fn clear(&mut self) {
        DoublyLinkedList::clear(self)
    }

    fn take_all(&mut self) -> Vec<T> {
        DoublyLinkedList::take_all(self)
    }
}

impl<T> RandomAccess for DoublyLinkedList<T> {
    fn get(&self, index: usize) -> Option<&T> {
        DoublyLinkedList::get(self, index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        DoublyLinkedList::get_mut(self, index)
    }

    fn set(&mut self, index: usize, value: T) -> Result<T> {
        DoublyLinkedList::set(self, index, value)
    }

    fn insert(&mut self, index: usize, value: T) -> Result<()> {
        DoublyLinkedList::insert(self, index, value)
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        DoublyLinkedList::remove(self, index)
    }
}

impl<T> Linear for DoublyLinkedList<T> {
    fn push_front(&mut self, value: T) -> Result<()> {
        DoublyLinkedList::push_front(self, value);
        Ok(())
    }

    fn push_back(&mut self, value: T) -> Result<()> {
        DoublyLinkedList::push_back(self, value);
        Ok(())
    }

    fn pop_front(&mut self) -> Option<T> {
        DoublyLinkedList::pop_front(self)
    }

    fn pop_back(&mut self) -> Option<T> {
        DoublyLinkedList::pop_back(self)
    }

    fn peek_front(&self) -> Option<&T> {
        self.front()
    }

    fn peek_back(&self) -> Option<&T> {
        self.back()
    }
}

impl<T> Traverse for DoublyLinkedList<T> {
    type Cursor<'a> = Cursor<'a, T> where Self: 'a;

    fn range(&self) -> (Cursor<'_, T>, Cursor<'_, T>) {
        (self.cursor_start(), self.cursor_end())
    }
}

impl<T: Clone> TraverseMut for DoublyLinkedList<T> {
    type CursorMut<'a> = CursorMut<'a, T> where Self: 'a;

    fn range_mut(&mut self) -> (CursorMut<'_, T>, CursorMut<'_, T>) {
        let (front, ghost, len) = (self.front_node(), self.ghost, self.len);
        let begin = CursorMut::new(self, front, 0);
        let end = begin.with_position(ghost, len);
        (begin, end)
    }
}

// Ensure that `DoublyLinkedList` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: DoublyLinkedList<&'static str>) -> DoublyLinkedList<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}

#[cfg(test)]
mod tests {
    use super::DoublyLinkedList;
    use crate::cursor::Forward;
    use crate::error::Error;
    use std::cell::RefCell;
    use std::fmt::Debug;
    use std::iter::FromIterator;

    #[test]
    fn list_create() {
        let mut list = DoublyLinkedList::<i32>::new();
        assert!(list.is_empty());
        list.push_back(1);
        assert!(!list.is_empty());
        assert_eq!(list.pop_back(), Some(1));
        assert!(list.is_empty());
    }

    #[test]
    fn list_drop() {
        #[derive(Debug)]
        struct DropChecker<'a, T: Copy> {
            value: T,
            dropped: &'a RefCell<Vec<T>>,
        }
        impl<'a, T: Copy> Drop for DropChecker<'a, T> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = DoublyLinkedList::new();
        for value in 1..=3 {
            list.push_back(DropChecker {
                value,
                dropped: &dropped,
            });
        }
        let kept = list.pop_back();
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2]);
        drop(kept);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = DoublyLinkedList::new();
        assert_eq!(list.len(), 0);
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);

        list.push_front(1);
        list.push_front(2);
        list.push_back(3);
        assert_eq!(list.len(), 3);
        assert_eq!(list.back(), Some(&3));
        assert_eq!(list.front(), Some(&2));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_back(), Some(3));

        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.front(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn list_insert_and_remove() {
        fn list_eq<T, I>(list: &DoublyLinkedList<T>, expected: I)
        where
            T: Debug + Clone + Eq,
            I: IntoIterator<Item = T>,
        {
            assert_eq!(
                Vec::from_iter(list.iter().cloned()),
                Vec::from_iter(expected)
            );
        }

        let mut list = DoublyLinkedList::from_iter(0..10);
        list.insert(5, 10).unwrap();
        list_eq(&list, (0..5).chain(Some(10)).chain(5..10));

        assert_eq!(list.remove(10), Ok(9));
        assert_eq!(list.back(), Some(&8));
        list_eq(&list, (0..5).chain(Some(10)).chain(5..9));

        list.insert(0, 11).unwrap();
        assert_eq!(list.front(), Some(&11));
        assert_eq!(list.remove(0), Ok(11));

        list.insert(10, 12).unwrap();
        assert_eq!(list.back(), Some(&12));
        list_eq(&list, (0..5).chain(Some(10)).chain(5..9).chain(Some(12)));

        assert_eq!(list.insert(12, 0), Err(Error::out_of_range(12, 11)));
        assert_eq!(list.remove(11), Err(Error::out_of_range(11, 11)));
    }

    #[test]
    fn list_positional_access() {
        let mut list = DoublyLinkedList::from_iter(0..9);
        for at in 0..9 {
            assert_eq!(list.get(at), Some(&at));
        }
        assert_eq!(list.get(9), None);
        *list.back_mut().unwrap() = 80;
        assert_eq!(list.set(4, 40), Ok(4));
        assert_eq!(list.set(9, 0), Err(Error::out_of_range(9, 9)));
        assert_eq!(list.get(4), Some(&40));
        assert_eq!(list.back(), Some(&80));
    }

    #[test]
    fn list_split_and_append() {
        fn check<I1, I2>(list: I1, other: I2, at: usize)
        where
            I1: IntoIterator<Item = i32>,
            I2: IntoIterator<Item = i32>,
        {
            let mut list = DoublyLinkedList::from_iter(list);
            let other = DoublyLinkedList::from_iter(other);
            let cloned = list.clone();
            let mut other_cloned = other.clone();

            list.append(&mut other_cloned);
            assert!(other_cloned.is_empty());
            assert_eq!(list.len(), cloned.len() + other.len());

            let split = list.split_off(at).unwrap();
            assert_eq!(list, cloned);
            assert_eq!(split, other);

            let mut joined = other.clone();
            let mut front = cloned.clone();
            joined.prepend(&mut front);
            assert!(front.is_empty());
            let split = joined.split_off(at).unwrap();
            assert_eq!(joined, cloned);
            assert_eq!(split, other);
        }
        check(0..5, 5..7, 5);
        check(0..5, None, 5);
        check(0..1, 1..3, 1);
        check(None, 0..2, 0);
        check(None, None, 0);
    }

    #[test]
    fn list_splice() {
        let mut list = DoublyLinkedList::from_iter(0..5);
        list.splice_at(2, DoublyLinkedList::from_iter(5..7)).unwrap();
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![0, 1, 5, 6, 2, 3, 4]);
        list.splice_at(7, DoublyLinkedList::from_iter(Some(7))).unwrap();
        assert_eq!(list.back(), Some(&7));
        assert!(list
            .splice_at(9, DoublyLinkedList::from_iter(Some(8)))
            .is_err());
        assert_eq!(list.len(), 8);
    }

    #[test]
    fn structural_changes_bump_generation() {
        let mut list = DoublyLinkedList::from_iter(0..3);
        let generation = list.generation();
        list.set(0, 7).unwrap();
        assert_eq!(list.generation(), generation);
        list.push_back(3);
        assert_ne!(list.generation(), generation);
        let generation = list.generation();
        assert!(list.remove(10).is_err());
        assert_eq!(list.generation(), generation);
    }

    #[test]
    fn clones_reject_bookmarks_of_the_original() {
        let mut list = DoublyLinkedList::from_iter([1, 2, 3, 4]);
        let bookmark = list.cursor(2).unwrap().bookmark();
        let mut copy = list.clone();
        assert_eq!(
            copy.restore(&bookmark).unwrap_err(),
            Error::Unsupported("restoring a bookmark of another container")
        );
        assert!(copy.restore_mut(&bookmark).is_err());
        assert_eq!(list.restore_mut(&bookmark).unwrap().position(), 2);
    }
}
