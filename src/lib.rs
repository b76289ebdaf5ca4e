//! This crate provides a small collection framework built around cursors.
//!
//! Containers advertise their capabilities through the traits in
//! [`traits`], and hand out cursors implementing the ladder of traits in
//! [`cursor`]. The algorithms in [`search`] and [`sort`] are written once
//! against those cursor traits and run unchanged over every container whose
//! cursor family is strong enough.
//!
//! Here is a quick example sorting and searching a linked list.
//!
//! ```
//! use dsa_kit::search::{search, SearchStrategy};
//! use dsa_kit::sort::{insertion_sort, InsertionStrategy};
//! use dsa_kit::traits::{Traverse, TraverseMut};
//! use dsa_kit::{DoublyLinkedList, Stats};
//! use std::iter::FromIterator;
//!
//! let mut list = DoublyLinkedList::from_iter([5, 2, 8, 1, 3]);
//!
//! let mut stats = Stats::new();
//! let (begin, end) = list.range_mut();
//! insertion_sort(&begin, &end, i32::cmp, InsertionStrategy::Binary, Some(&mut stats)).unwrap();
//! drop((begin, end));
//! assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 2, 3, 5, 8]);
//! assert_eq!(stats.swaps, 6);
//!
//! let (begin, end) = list.range();
//! let found = search(SearchStrategy::Binary, &begin, &end, &5, i32::cmp, None);
//! assert_eq!(found.current(), Some(&5));
//! assert_eq!(found.position(), 3);
//! ```
//!
//! # Containers
//!
//! | container | storage | cursor family |
//! |---|---|---|
//! | [`StaticArray`] | contiguous, fixed capacity | [`IndexCursor`](array::IndexCursor), random access |
//! | [`DynamicArray`] | contiguous, grows by a [`GrowthPolicy`] | [`IndexCursor`](array::IndexCursor), random access |
//! | [`DoublyLinkedList`] | cyclic nodes around a ghost node | [`Cursor`](list::doubly::Cursor), bidirectional |
//! | [`SinglyLinkedList`] | nodes with a tail pointer | [`Cursor`](list::singly::Cursor), forward only |
//! | [`CircularList`] | ring of nodes entered from the tail | [`Cursor`](list::singly::Cursor), forward only |
//!
//! The stack, queue and deque in [`adapters`] work over any of them.
//!
//! # Cursor Positions
//!
//! In a container with length *n*, there are *n* + 1 valid positions for a
//! cursor, indexed by 0, 1, ..., *n*. Position *n* is the *end* position: it
//! designates no element, and stepping forward from it is a no-op. Stepping
//! backward from position 0 fails and leaves the cursor in place.
//!
//! Cursors of a circular list count positions too, so walking one never
//! wraps around the ring.
//!
//! # Errors and Sentinels
//!
//! Queries answer with sentinels (`None`, `false`, `0`, or the `end`
//! cursor). Operations that can fail for more than one reason return
//! [`Result`], whose [`Error`] can be classified by [`ErrorKind`].
//!
//! # Run-Time Dispatch
//!
//! Strategies are plain enums, so they can be picked at run time, and
//! [`dynamic`] boxes cursors of any family behind one object-safe trait.
//!
//! # Diagnostics
//!
//! Every algorithm accepts an optional [`Stats`] record and counts its
//! comparisons and swaps into it. The crate also logs through the [`log`]
//! facade at `trace` level, with a `warn` for rejected strategies; install
//! any logger to see those records.

#[doc(inline)]
pub use adapters::{Deque, Queue, Stack};
#[doc(inline)]
pub use array::{DynamicArray, GrowthPolicy, StaticArray};
#[doc(inline)]
pub use error::{Error, ErrorKind, Result};
#[doc(inline)]
pub use list::{CircularList, DoublyLinkedList, SinglyLinkedList};
#[doc(inline)]
pub use stats::Stats;

pub mod adapters;
pub mod array;
pub mod cursor;
pub mod dynamic;
pub mod error;
pub mod list;
pub mod search;
pub mod sort;
pub mod stats;
pub mod traits;
