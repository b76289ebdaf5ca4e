//! Capability traits implemented by the containers.
//!
//! A container advertises what it can do by implementing a subset of these
//! traits; the algorithms and the facades in [`adapters`](crate::adapters)
//! only ask for the capabilities they use.
//!
//! | container | [`Basic`] | [`RandomAccess`] | [`Linear`] | cursor family |
//! |---|---|---|---|---|
//! | [`StaticArray`](crate::StaticArray) | yes | yes | yes | index, random |
//! | [`DynamicArray`](crate::DynamicArray) | yes | yes | yes | index, random |
//! | [`DoublyLinkedList`](crate::DoublyLinkedList) | yes | yes | yes | node, bidirectional |
//! | [`SinglyLinkedList`](crate::SinglyLinkedList) | yes | no | yes | node, forward-only |
//! | [`CircularList`](crate::CircularList) | yes | no | yes | node, forward-only |

use crate::cursor::{Forward, Writable};
use crate::error::Result;

/// Size bookkeeping shared by every container.
///
/// Dropping a container drops its elements. To keep them, call
/// [`take_all`](Basic::take_all) first: the container is left empty and the
/// elements are handed back to the caller.
pub trait Basic {
    type Item;

    fn len(&self) -> usize;

    /// Maximum number of elements, or `None` when the container grows
    /// without a fixed bound.
    fn capacity(&self) -> Option<usize>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_full(&self) -> bool {
        self.capacity()
            .map_or(false, |capacity| self.len() >= capacity)
    }

    /// Remove and drop every element.
    fn clear(&mut self);

    /// Remove every element and return them in order, leaving the container
    /// empty.
    fn take_all(&mut self) -> Vec<Self::Item>;
}

/// Positional access by index.
pub trait RandomAccess: Basic {
    fn get(&self, index: usize) -> Option<&Self::Item>;

    fn get_mut(&mut self, index: usize) -> Option<&mut Self::Item>;

    /// Overwrite the element at `index`, returning the previous one.
    fn set(&mut self, index: usize, value: Self::Item) -> Result<Self::Item>;

    /// Insert `value` before position `index`; `index == len` appends.
    fn insert(&mut self, index: usize, value: Self::Item) -> Result<()>;

    fn remove(&mut self, index: usize) -> Result<Self::Item>;
}

/// Push, pop and peek at both ends.
pub trait Linear: Basic {
    fn push_front(&mut self, value: Self::Item) -> Result<()>;

    fn push_back(&mut self, value: Self::Item) -> Result<()>;

    fn pop_front(&mut self) -> Option<Self::Item>;

    fn pop_back(&mut self) -> Option<Self::Item>;

    fn peek_front(&self) -> Option<&Self::Item>;

    fn peek_back(&self) -> Option<&Self::Item>;
}

/// Containers that hand out read-only cursors over all their elements.
pub trait Traverse: Basic {
    type Cursor<'a>: Forward<Item = Self::Item>
    where
        Self: 'a;

    /// The half-open range `[begin, end)` covering the whole container.
    fn range(&self) -> (Self::Cursor<'_>, Self::Cursor<'_>);
}

/// Containers that hand out writable cursors over all their elements.
///
/// The container stays mutably borrowed while the cursors live, so no
/// structural mutation can happen behind their back.
pub trait TraverseMut: Traverse {
    type CursorMut<'a>: Writable<Item = Self::Item>
    where
        Self: 'a;

    fn range_mut(&mut self) -> (Self::CursorMut<'_>, Self::CursorMut<'_>);
}

/// Length of an optional container, `0` when absent.
pub fn len_of<C: Basic + ?Sized>(container: Option<&C>) -> usize {
    container.map_or(0, Basic::len)
}

/// `true` when the container is absent or holds no element.
pub fn is_empty_or_absent<C: Basic + ?Sized>(container: Option<&C>) -> bool {
    container.map_or(true, Basic::is_empty)
}
