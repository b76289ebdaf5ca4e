//! Sorting a range of writable cursors in place.
//!
//! Both engines exchange elements only through [`Writable::swap`], so they
//! run unchanged on arrays and on linked lists. Empty and single-element
//! ranges return right away without calling the comparator.
//!
//! | engine | strategies | cursor needs | stable |
//! |---|---|---|---|
//! | [`insertion_sort`] | `Linear`, `Binary` (`Shell` reserved) | [`Writable`] | yes |
//! | [`selection_sort`] | `Linear`, `Bubble` (`Heap` reserved) | [`Writable`] + [`Bidirectional`] | no |
//!
//! # Examples
//!
//! ```
//! use dsa_kit::sort::{insertion_sort, is_sorted, InsertionStrategy};
//! use dsa_kit::traits::{Traverse, TraverseMut};
//! use dsa_kit::{SinglyLinkedList, Stats};
//! use std::iter::FromIterator;
//!
//! let mut list = SinglyLinkedList::from_iter([5, 2, 8, 1, 3]);
//! let mut stats = Stats::new();
//! {
//!     let (begin, end) = list.range_mut();
//!     insertion_sort(&begin, &end, i32::cmp, InsertionStrategy::Binary, Some(&mut stats)).unwrap();
//! }
//! assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 2, 3, 5, 8]);
//! assert_eq!(stats.comparisons, 6);
//!
//! let (begin, end) = list.range();
//! assert!(is_sorted(&begin, &end, i32::cmp));
//! ```

use std::cmp::Ordering;
use std::convert::TryFrom;

use log::{trace, warn};

use crate::cursor::{compare_cursors, distance, in_range, item, Bidirectional, Forward, Writable};
use crate::error::{Error, Result};
use crate::search::{insert_finder, linear_search_min_with, Finder, SearchStrategy};
use crate::stats::{Tally, Stats};

/// How [`insertion_sort`] finds where the next element goes in the sorted
/// prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsertionStrategy {
    /// Scan the prefix from its start.
    Linear,
    /// Halve the prefix; fewer comparisons, same number of swaps.
    Binary,
    /// Reserved. Sorting with it fails with [`Error::InvalidParameter`].
    Shell,
}

/// How [`selection_sort`] brings the minimum of the unsorted suffix to its
/// front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionStrategy {
    /// Scan for the first minimum, then swap it into place.
    Linear,
    /// One backward pass of adjacent swaps carries the minimum to the front.
    Bubble,
    /// Reserved. Sorting with it fails with [`Error::InvalidParameter`].
    Heap,
}

impl InsertionStrategy {
    pub const ALL: [InsertionStrategy; 3] = [
        InsertionStrategy::Linear,
        InsertionStrategy::Binary,
        InsertionStrategy::Shell,
    ];

    /// Convert a raw strategy tag: `0` is linear, `1` binary and `2` shell.
    pub fn from_index(tag: u8) -> Result<Self> {
        match tag {
            0 => Ok(InsertionStrategy::Linear),
            1 => Ok(InsertionStrategy::Binary),
            2 => Ok(InsertionStrategy::Shell),
            _ => Err(Error::InvalidParameter("unknown insertion strategy")),
        }
    }
}

impl SelectionStrategy {
    pub const ALL: [SelectionStrategy; 3] = [
        SelectionStrategy::Linear,
        SelectionStrategy::Bubble,
        SelectionStrategy::Heap,
    ];

    /// Convert a raw strategy tag: `0` is linear, `1` bubble and `2` heap.
    pub fn from_index(tag: u8) -> Result<Self> {
        match tag {
            0 => Ok(SelectionStrategy::Linear),
            1 => Ok(SelectionStrategy::Bubble),
            2 => Ok(SelectionStrategy::Heap),
            _ => Err(Error::InvalidParameter("unknown selection strategy")),
        }
    }
}

impl TryFrom<u8> for InsertionStrategy {
    type Error = Error;

    fn try_from(tag: u8) -> Result<Self> {
        Self::from_index(tag)
    }
}

impl TryFrom<u8> for SelectionStrategy {
    type Error = Error;

    fn try_from(tag: u8) -> Result<Self> {
        Self::from_index(tag)
    }
}

fn insertion_finder<C, F>(strategy: InsertionStrategy) -> Result<Finder<C, F>>
where
    C: Forward,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    match strategy {
        InsertionStrategy::Linear => Ok(insert_finder(SearchStrategy::Linear)),
        InsertionStrategy::Binary => Ok(insert_finder(SearchStrategy::Binary)),
        InsertionStrategy::Shell => {
            warn!("shell insertion sort was requested but is not implemented");
            Err(Error::InvalidParameter("shell insertion sort is not implemented"))
        }
    }
}

/// Brings the minimum of `[first, end)` to `first`, or returns the cursor to
/// swap with `first`.
type Selector<C, F> = fn(&C, &C, &mut F, &mut Tally<'_>) -> Result<C>;

fn selector<C, F>(strategy: SelectionStrategy) -> Result<Selector<C, F>>
where
    C: Writable + Bidirectional,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    match strategy {
        SelectionStrategy::Linear => Ok(find_min_linear::<C, F>),
        SelectionStrategy::Bubble => Ok(find_min_bubble::<C, F>),
        SelectionStrategy::Heap => {
            warn!("heap selection sort was requested but is not implemented");
            Err(Error::InvalidParameter("heap selection sort is not implemented"))
        }
    }
}

/// Sort `[begin, end)` by inserting each element into the sorted prefix.
///
/// The position in the prefix is found with the given strategy, then the
/// element is carried there by adjacent swaps. Equal elements keep their
/// relative order.
///
/// # Complexity
///
/// *O*(*n*²) swaps with both strategies. *O*(*n*²) comparisons with
/// [`InsertionStrategy::Linear`], *O*(*n* log *n*) with
/// [`InsertionStrategy::Binary`].
///
/// # Errors
///
/// [`Error::InvalidParameter`] for [`InsertionStrategy::Shell`], checked
/// before anything else.
pub fn insertion_sort<C, F>(
    begin: &C,
    end: &C,
    mut compare: F,
    strategy: InsertionStrategy,
    stats: Option<&mut Stats>,
) -> Result<()>
where
    C: Writable,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    let position = insertion_finder::<C, F>(strategy)?;
    let mut tally = Tally::new(stats);
    tally.record_len(|| distance(begin, end));
    if !in_range(begin, end) {
        return Ok(());
    }
    trace!("{:?} insertion sort from index {}", strategy, begin.index());

    let mut current = begin.advanced(1);
    while in_range(&current, end) {
        let mut slot = match current.get() {
            Some(value) => position(begin, &current, item::<C>(&value), &mut compare, &mut tally),
            None => break,
        };
        // Rotate `[slot, current]` one step to the right.
        while slot != current {
            slot.swap(&mut current)?;
            tally.swapped();
            slot.move_next();
        }
        current.move_next();
    }

    trace!("insertion sort done: {:?}", tally.snapshot());
    Ok(())
}

/// Sort `[begin, end)` by repeatedly moving the minimum of the unsorted
/// suffix to its front.
///
/// # Complexity
///
/// *O*(*n*²) comparisons, at most *n* - 1 swaps with
/// [`SelectionStrategy::Linear`] and *O*(*n*²) with
/// [`SelectionStrategy::Bubble`].
///
/// # Errors
///
/// [`Error::InvalidParameter`] for [`SelectionStrategy::Heap`], checked
/// before anything else.
///
/// # Examples
///
/// ```
/// use dsa_kit::sort::{selection_sort, SelectionStrategy};
/// use dsa_kit::traits::TraverseMut;
/// use dsa_kit::DoublyLinkedList;
/// use std::iter::FromIterator;
///
/// let mut list = DoublyLinkedList::from_iter(["pear", "fig", "apple"]);
/// let (begin, end) = list.range_mut();
/// selection_sort(&begin, &end, |a: &&str, b: &&str| a.cmp(b), SelectionStrategy::Bubble, None).unwrap();
/// drop((begin, end));
/// assert_eq!(list, DoublyLinkedList::from_iter(["apple", "fig", "pear"]));
/// ```
pub fn selection_sort<C, F>(
    begin: &C,
    end: &C,
    mut compare: F,
    strategy: SelectionStrategy,
    stats: Option<&mut Stats>,
) -> Result<()>
where
    C: Writable + Bidirectional,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    let select = selector::<C, F>(strategy)?;
    let mut tally = Tally::new(stats);
    tally.record_len(|| distance(begin, end));
    trace!("{:?} selection sort from index {}", strategy, begin.index());

    let mut first = begin.clone();
    while in_range(&first, end) {
        if !in_range(&first.advanced(1), end) {
            break;
        }
        let mut min = select(&first, end, &mut compare, &mut tally)?;
        if min != first {
            first.swap(&mut min)?;
            tally.swapped();
        }
        first.move_next();
    }

    trace!("selection sort done: {:?}", tally.snapshot());
    Ok(())
}

fn find_min_linear<C, F>(first: &C, end: &C, compare: &mut F, tally: &mut Tally<'_>) -> Result<C>
where
    C: Writable + Bidirectional,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    Ok(linear_search_min_with(first, end, compare, tally))
}

/// Walk `[first, end)` backward, swapping each element with its predecessor
/// when it is smaller. The minimum ends up at `first`.
fn find_min_bubble<C, F>(first: &C, end: &C, compare: &mut F, tally: &mut Tally<'_>) -> Result<C>
where
    C: Writable + Bidirectional,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    let mut right = end.clone();
    if right.move_prev().is_err() {
        return Ok(first.clone());
    }
    while right != *first {
        let mut left = right.clone();
        if left.move_prev().is_err() {
            break;
        }
        if compare_cursors(&right, &left, compare, tally) == Some(Ordering::Less) {
            left.swap(&mut right)?;
            tally.swapped();
        }
        right = left;
    }
    Ok(first.clone())
}

/// `true` if no element of `[begin, end)` compares greater than its
/// successor.
pub fn is_sorted<C, F>(begin: &C, end: &C, mut compare: F) -> bool
where
    C: Forward,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    if !in_range(begin, end) {
        return true;
    }
    let mut tally = Tally::new(None);
    let mut prev = begin.clone();
    let mut cursor = begin.advanced(1);
    while in_range(&cursor, end) {
        if compare_cursors(&prev, &cursor, &mut compare, &mut tally) == Some(Ordering::Greater) {
            return false;
        }
        prev = cursor.clone();
        cursor.move_next();
    }
    true
}
