use super::{next_of, prev_of, DoublyLinkedList, Node};
use std::fmt;
use std::iter::{FromIterator, FusedIterator};
use std::marker::PhantomData;
use std::ptr::NonNull;

/// The nodes still to be yielded: `head` inclusive up to `tail` exclusive,
/// `remaining` of them.
struct Span<T> {
    head: NonNull<Node<T>>,
    tail: NonNull<Node<T>>,
    remaining: usize,
}

impl<T> Clone for Span<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Span<T> {}

impl<T> Span<T> {
    fn of(list: &DoublyLinkedList<T>) -> Self {
        Self {
            head: list.front_node(),
            tail: list.ghost_node(),
            remaining: list.len(),
        }
    }

    /// Take the first node of the span.
    ///
    /// # Safety
    ///
    /// The span must describe live nodes of one list.
    unsafe fn take_head(&mut self) -> Option<NonNull<Node<T>>> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.head;
        self.head = next_of(node);
        self.remaining -= 1;
        Some(node)
    }

    /// Take the last node of the span.
    ///
    /// # Safety
    ///
    /// Same as [`take_head`](Self::take_head).
    unsafe fn take_tail(&mut self) -> Option<NonNull<Node<T>>> {
        if self.remaining == 0 {
            return None;
        }
        self.tail = prev_of(self.tail);
        self.remaining -= 1;
        Some(self.tail)
    }
}

/// An iterator over the elements of a `DoublyLinkedList`.
///
/// The iterator borrows the list immutably, so the list cannot be written
/// while it is alive.
///
/// # Examples
///
/// ```compile_fail
/// use dsa_kit::DoublyLinkedList;
/// use std::iter::FromIterator;
///
/// let mut list = DoublyLinkedList::from_iter([1, 2, 3]);
/// let mut iter = list.iter();
///
/// // Won't compile, because list is already borrowed immutably.
/// list.push_back(4);
/// println!("{:?}", iter.next());
/// ```
pub struct Iter<'a, T: 'a> {
    span: Span<T>,
    _marker: PhantomData<&'a DoublyLinkedList<T>>,
}

/// A mutable iterator over the elements of a `DoublyLinkedList`.
///
/// It hands out each element once, and only the elements: the links of the
/// list cannot be changed through it.
///
/// # Examples
///
/// ```compile_fail
/// use dsa_kit::DoublyLinkedList;
/// use std::iter::FromIterator;
///
/// let mut list = DoublyLinkedList::from_iter([1, 2, 3]);
/// let mut iter = list.iter_mut();
/// println!("{:?}", list.back());
/// println!("{:?}", iter.next());
/// ```
pub struct IterMut<'a, T: 'a> {
    span: Span<T>,
    _marker: PhantomData<&'a mut DoublyLinkedList<T>>,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(list: &'a DoublyLinkedList<T>) -> Self {
        Self {
            span: Span::of(list),
            _marker: PhantomData,
        }
    }
}

impl<'a, T: 'a> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut DoublyLinkedList<T>) -> Self {
        Self {
            span: Span::of(list),
            _marker: PhantomData,
        }
    }
}

impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            span: self.span,
            _marker: PhantomData,
        }
    }
}

macro_rules! impl_node_iter {
    ($ITER:ident, $ITEM:ty, |$node:ident| $element:expr) => {
        impl<'a, T: 'a> Iterator for $ITER<'a, T> {
            type Item = $ITEM;

            fn next(&mut self) -> Option<$ITEM> {
                // SAFETY: the span covers live nodes of the borrowed list, and
                // each node leaves the span once, so references never alias.
                unsafe { self.span.take_head().map(|$node| $element) }
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                (self.span.remaining, Some(self.span.remaining))
            }

            fn last(mut self) -> Option<$ITEM> {
                self.next_back()
            }
        }

        impl<'a, T: 'a> DoubleEndedIterator for $ITER<'a, T> {
            fn next_back(&mut self) -> Option<$ITEM> {
                // SAFETY: same as `next`.
                unsafe { self.span.take_tail().map(|$node| $element) }
            }
        }

        impl<'a, T: 'a> ExactSizeIterator for $ITER<'a, T> {}

        impl<'a, T: 'a> FusedIterator for $ITER<'a, T> {}

        impl<'a, T: 'a> fmt::Debug for $ITER<'a, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($ITER))
                    .field("remaining", &self.span.remaining)
                    .finish()
            }
        }
    };
}

impl_node_iter!(Iter, &'a T, |node| &(*node.as_ptr()).element);
impl_node_iter!(IterMut, &'a mut T, |node| &mut (*node.as_ptr()).element);

/// An owning iterator over the elements of a `DoublyLinkedList`.
///
/// This `struct` is created by the [`into_iter`] method on [`DoublyLinkedList`]
/// (provided by the `IntoIterator` trait).
///
/// [`into_iter`]: DoublyLinkedList::into_iter
#[derive(Debug)]
pub struct IntoIter<T> {
    list: DoublyLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DoublyLinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elt in iter {
            self.push_back(elt);
        }
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

unsafe impl<T: Sync> Send for Iter<'_, T> {}

unsafe impl<T: Sync> Sync for Iter<'_, T> {}

unsafe impl<T: Send> Send for IterMut<'_, T> {}

unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

#[cfg(test)]
mod tests {
    use crate::DoublyLinkedList;
    use std::iter::FromIterator;

    /// Drain `take` items from the front, then the rest from the back,
    /// checking the reported length at every step.
    fn check_both_ends<I>(mut iter: I, expected: &[i32], take: usize)
    where
        I: DoubleEndedIterator + ExactSizeIterator,
        I::Item: std::ops::Deref<Target = i32>,
    {
        for (i, want) in expected.iter().take(take).enumerate() {
            assert_eq!(iter.next().as_deref(), Some(want));
            assert_eq!(iter.len(), expected.len() - i - 1);
        }
        for want in expected.iter().skip(take).rev() {
            assert_eq!(iter.next_back().as_deref(), Some(want));
        }
        assert_eq!(iter.len(), 0);
        assert!(iter.next().is_none());
        assert!(iter.next_back().is_none());
    }

    #[test]
    fn iterators_meet_in_the_middle() {
        for len in [0, 1, 2, 7] {
            let expected = Vec::from_iter(0..len);
            let mut list = DoublyLinkedList::from_iter(expected.iter().copied());
            for take in 0..=expected.len() {
                check_both_ends(list.iter(), &expected, take);
                check_both_ends(list.iter_mut(), &expected, take);
            }
        }
    }

    #[test]
    fn iter_mut_writes_elements() {
        let mut list = DoublyLinkedList::from_iter([1, 2, 3]);
        for elt in &mut list {
            *elt *= 10;
        }
        assert_eq!(Vec::from_iter(&list), vec![&10, &20, &30]);
        assert_eq!(list.iter().rev().last(), Some(&10));
    }

    #[test]
    fn into_iter_both_ends() {
        let list = DoublyLinkedList::from_iter(1..=4);
        let mut iter = list.into_iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next_back(), Some(4));
        assert_eq!(iter.next(), Some(1));
        assert_eq!(Vec::from_iter(iter), vec![2, 3]);
    }
}
