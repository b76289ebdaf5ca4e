//! Stack, queue and deque facades over any [`Linear`] container.
//!
//! The facades only call [`Basic`] and [`Linear`], so the backing container
//! can be swapped without touching the code using them.
//!
//! # Examples
//!
//! ```
//! use dsa_kit::adapters::{Queue, Stack};
//! use dsa_kit::{CircularList, StaticArray};
//!
//! let mut stack = Stack::new(StaticArray::<_, 2>::new());
//! stack.push('a').unwrap();
//! stack.push('b').unwrap();
//! assert!(stack.push('c').is_err());
//! assert_eq!(stack.pop(), Some('b'));
//!
//! let mut queue = Queue::new(CircularList::new());
//! queue.enqueue(1).unwrap();
//! queue.enqueue(2).unwrap();
//! assert_eq!(queue.dequeue(), Some(1));
//! assert_eq!(queue.peek(), Some(&2));
//! ```

use crate::error::Result;
use crate::traits::{Basic, Linear};

macro_rules! impl_facade {
    ($FACADE:ident) => {
        impl<C: Basic + Linear> $FACADE<C> {
            /// Wrap `container`, keeping the elements it already holds.
            pub fn new(container: C) -> Self {
                Self { container }
            }

            pub fn len(&self) -> usize {
                self.container.len()
            }

            pub fn is_empty(&self) -> bool {
                self.container.is_empty()
            }

            pub fn is_full(&self) -> bool {
                self.container.is_full()
            }

            pub fn clear(&mut self) {
                self.container.clear()
            }

            /// Unwrap the backing container.
            pub fn into_inner(self) -> C {
                self.container
            }
        }

        impl<C: Basic + Linear + Default> Default for $FACADE<C> {
            fn default() -> Self {
                Self::new(C::default())
            }
        }
    };
}

/// Last in, first out. The top of the stack is the back of the container.
#[derive(Debug, Clone)]
pub struct Stack<C> {
    container: C,
}

impl_facade!(Stack);

impl<C: Basic + Linear> Stack<C> {
    pub fn push(&mut self, value: C::Item) -> Result<()> {
        self.container.push_back(value)
    }

    pub fn pop(&mut self) -> Option<C::Item> {
        self.container.pop_back()
    }

    pub fn peek(&self) -> Option<&C::Item> {
        self.container.peek_back()
    }
}

/// First in, first out. Elements enter at the back and leave at the front.
#[derive(Debug, Clone)]
pub struct Queue<C> {
    container: C,
}

impl_facade!(Queue);

impl<C: Basic + Linear> Queue<C> {
    pub fn enqueue(&mut self, value: C::Item) -> Result<()> {
        self.container.push_back(value)
    }

    pub fn dequeue(&mut self) -> Option<C::Item> {
        self.container.pop_front()
    }

    pub fn peek(&self) -> Option<&C::Item> {
        self.container.peek_front()
    }
}

/// Double-ended queue.
#[derive(Debug, Clone)]
pub struct Deque<C> {
    container: C,
}

impl_facade!(Deque);

impl<C: Basic + Linear> Deque<C> {
    pub fn push_front(&mut self, value: C::Item) -> Result<()> {
        self.container.push_front(value)
    }

    pub fn push_back(&mut self, value: C::Item) -> Result<()> {
        self.container.push_back(value)
    }

    pub fn pop_front(&mut self) -> Option<C::Item> {
        self.container.pop_front()
    }

    pub fn pop_back(&mut self) -> Option<C::Item> {
        self.container.pop_back()
    }

    pub fn peek_front(&self) -> Option<&C::Item> {
        self.container.peek_front()
    }

    pub fn peek_back(&self) -> Option<&C::Item> {
        self.container.peek_back()
    }
}

#[cfg(test)]
mod tests {
    use super::{Deque, Queue, Stack};
    use crate::error::Error;
    use crate::{CircularList, DoublyLinkedList, DynamicArray, SinglyLinkedList, StaticArray};

    #[test]
    fn stack_over_every_container() {
        fn exercise<C: crate::traits::Basic<Item = u8> + crate::traits::Linear>(container: C) {
            let mut stack = Stack::new(container);
            assert!(stack.is_empty());
            for i in 0..4 {
                stack.push(i).unwrap();
            }
            assert_eq!(stack.peek(), Some(&3));
            assert_eq!(stack.pop(), Some(3));
            assert_eq!(stack.len(), 3);
            stack.clear();
            assert_eq!(stack.pop(), None);
        }
        exercise(DynamicArray::new());
        exercise(StaticArray::<u8, 4>::new());
        exercise(SinglyLinkedList::new());
        exercise(DoublyLinkedList::new());
        exercise(CircularList::new());
    }

    #[test]
    fn bounded_stack_reports_overflow() {
        let mut stack = Stack::new(StaticArray::<i32, 1>::new());
        stack.push(1).unwrap();
        assert!(stack.is_full());
        assert_eq!(stack.push(2), Err(Error::CapacityExceeded { capacity: 1 }));
        assert_eq!(stack.into_inner().as_slice(), &[1]);
    }

    #[test]
    fn queue_is_fifo() {
        let mut queue: Queue<SinglyLinkedList<&str>> = Queue::default();
        queue.enqueue("first").unwrap();
        queue.enqueue("second").unwrap();
        assert_eq!(queue.peek(), Some(&"first"));
        assert_eq!(queue.dequeue(), Some("first"));
        assert_eq!(queue.dequeue(), Some("second"));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn deque_both_ends() {
        let mut deque = Deque::new(CircularList::new());
        deque.push_back(2).unwrap();
        deque.push_front(1).unwrap();
        deque.push_back(3).unwrap();
        assert_eq!(deque.peek_front(), Some(&1));
        assert_eq!(deque.peek_back(), Some(&3));
        assert_eq!(deque.pop_back(), Some(3));
        assert_eq!(deque.pop_front(), Some(1));
        assert_eq!(deque.pop_front(), Some(2));
        assert!(deque.is_empty());
    }
}
