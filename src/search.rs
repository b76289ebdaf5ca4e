//! Searching a cursor range.
//!
//! Every routine takes a half-open range `[begin, end)`, a target value and a
//! three-way comparator, and returns a cursor: the element found, or a clone
//! of `end` when there is none. The comparator is always called as
//! `compare(element, target)`.
//!
//! Binary searches assume the range is sorted by the same comparator. An
//! unsorted range gives an unspecified cursor inside `[begin, end]`, never a
//! panic.
//!
//! # Examples
//!
//! ```
//! use dsa_kit::search::{search, SearchStrategy};
//! use dsa_kit::traits::Traverse;
//! use dsa_kit::{DynamicArray, Stats};
//! use std::iter::FromIterator;
//!
//! let array = DynamicArray::from_iter(1..=10);
//! let (begin, end) = array.range();
//!
//! let mut stats = Stats::new();
//! let found = search(SearchStrategy::Binary, &begin, &end, &7, i32::cmp, Some(&mut stats));
//! assert_eq!(found.current(), Some(&7));
//! assert!(stats.comparisons <= 4);
//!
//! let missing = search(SearchStrategy::Linear, &begin, &end, &15, i32::cmp, None);
//! assert_eq!(missing, end);
//! ```

use std::cmp::Ordering;
use std::convert::TryFrom;

use log::trace;

use crate::cursor::{compare_cursors, compare_with, distance, in_range, Forward};
use crate::error::{Error, Result};
use crate::stats::{Tally, Stats};

/// How [`search`] and [`search_insert_position`] walk the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchStrategy {
    /// One pass from `begin`; works on any range.
    Linear,
    /// Interval halving; the range must be sorted.
    Binary,
}

impl SearchStrategy {
    pub const ALL: [SearchStrategy; 2] = [SearchStrategy::Linear, SearchStrategy::Binary];

    /// Convert a raw strategy tag: `0` is linear, `1` is binary.
    pub fn from_index(tag: u8) -> Result<Self> {
        match tag {
            0 => Ok(SearchStrategy::Linear),
            1 => Ok(SearchStrategy::Binary),
            _ => Err(Error::InvalidParameter("unknown search strategy")),
        }
    }
}

impl TryFrom<u8> for SearchStrategy {
    type Error = Error;

    fn try_from(tag: u8) -> Result<Self> {
        Self::from_index(tag)
    }
}

/// A search routine over a range, as stored in the dispatch tables.
pub(crate) type Finder<C, F> =
    fn(&C, &C, &<C as Forward>::Item, &mut F, &mut Tally<'_>) -> C;

fn finder<C, F>(strategy: SearchStrategy) -> Finder<C, F>
where
    C: Forward,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    match strategy {
        SearchStrategy::Linear => linear_search_with::<C, F>,
        SearchStrategy::Binary => binary_search_with::<C, F>,
    }
}

pub(crate) fn insert_finder<C, F>(strategy: SearchStrategy) -> Finder<C, F>
where
    C: Forward,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    match strategy {
        SearchStrategy::Linear => linear_insert_position_with::<C, F>,
        SearchStrategy::Binary => binary_insert_position_with::<C, F>,
    }
}

/// Search `target` in `[begin, end)` with the given strategy.
pub fn search<C, F>(
    strategy: SearchStrategy,
    begin: &C,
    end: &C,
    target: &C::Item,
    mut compare: F,
    stats: Option<&mut Stats>,
) -> C
where
    C: Forward,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    let mut tally = Tally::new(stats);
    tally.record_len(|| distance(begin, end));
    trace!("{:?} search from index {}", strategy, begin.index());
    let found = finder::<C, F>(strategy)(begin, end, target, &mut compare, &mut tally);
    trace!("search stopped at index {}: {:?}", found.index(), tally.snapshot());
    found
}

/// Find where `value` would be inserted in `[begin, end)` with the given
/// strategy, see [`linear_search_insert_position`].
pub fn search_insert_position<C, F>(
    strategy: SearchStrategy,
    begin: &C,
    end: &C,
    value: &C::Item,
    mut compare: F,
    stats: Option<&mut Stats>,
) -> C
where
    C: Forward,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    let mut tally = Tally::new(stats);
    tally.record_len(|| distance(begin, end));
    trace!("{:?} insert position search from index {}", strategy, begin.index());
    let position = insert_finder::<C, F>(strategy)(begin, end, value, &mut compare, &mut tally);
    trace!("insert position is index {}: {:?}", position.index(), tally.snapshot());
    position
}

/// The first element of `[begin, end)` equal to `target`, or `end`.
///
/// # Complexity
///
/// One comparison per visited element.
pub fn linear_search<C, F>(
    begin: &C,
    end: &C,
    target: &C::Item,
    compare: F,
    stats: Option<&mut Stats>,
) -> C
where
    C: Forward,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    search(SearchStrategy::Linear, begin, end, target, compare, stats)
}

/// An element of the sorted range `[begin, end)` equal to `target`, or `end`.
///
/// With duplicates, any of the equal elements may be returned.
///
/// # Complexity
///
/// At most ⌈log2(*n* + 1)⌉ comparisons. The cursor moves *O*(log *n*) times
/// in total on index cursors and *O*(*n*) on node cursors.
pub fn binary_search<C, F>(
    begin: &C,
    end: &C,
    target: &C::Item,
    compare: F,
    stats: Option<&mut Stats>,
) -> C
where
    C: Forward,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    search(SearchStrategy::Binary, begin, end, target, compare, stats)
}

/// The first element of `[begin, end)` greater than `value`, or `end`.
///
/// Inserting `value` there keeps a sorted range sorted, after any element
/// equal to it.
///
/// # Examples
///
/// ```
/// use dsa_kit::search::linear_search_insert_position;
/// use dsa_kit::traits::Traverse;
/// use dsa_kit::cursor::Forward;
/// use dsa_kit::SinglyLinkedList;
/// use std::iter::FromIterator;
///
/// let list = SinglyLinkedList::from_iter([1, 3, 3, 5]);
/// let (begin, end) = list.range();
/// let position = linear_search_insert_position(&begin, &end, &3, i32::cmp, None);
/// assert_eq!(position.index(), 3);
/// ```
pub fn linear_search_insert_position<C, F>(
    begin: &C,
    end: &C,
    value: &C::Item,
    compare: F,
    stats: Option<&mut Stats>,
) -> C
where
    C: Forward,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    search_insert_position(SearchStrategy::Linear, begin, end, value, compare, stats)
}

/// Same position as [`linear_search_insert_position`], found by interval
/// halving over the sorted range.
pub fn binary_search_insert_position<C, F>(
    begin: &C,
    end: &C,
    value: &C::Item,
    compare: F,
    stats: Option<&mut Stats>,
) -> C
where
    C: Forward,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    search_insert_position(SearchStrategy::Binary, begin, end, value, compare, stats)
}

/// The first minimum of `[begin, end)`, or `end` if the range is empty.
///
/// # Complexity
///
/// *n* - 1 comparisons.
pub fn linear_search_min<C, F>(begin: &C, end: &C, mut compare: F, stats: Option<&mut Stats>) -> C
where
    C: Forward,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    let mut tally = Tally::new(stats);
    tally.record_len(|| distance(begin, end));
    let min = linear_search_min_with(begin, end, &mut compare, &mut tally);
    trace!("minimum at index {}: {:?}", min.index(), tally.snapshot());
    min
}

pub(crate) fn linear_search_with<C, F>(
    begin: &C,
    end: &C,
    target: &C::Item,
    compare: &mut F,
    tally: &mut Tally<'_>,
) -> C
where
    C: Forward,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    let mut cursor = begin.clone();
    while in_range(&cursor, end) {
        if compare_with(&cursor, target, compare, tally) == Some(Ordering::Equal) {
            return cursor;
        }
        cursor.move_next();
    }
    end.clone()
}

pub(crate) fn binary_search_with<C, F>(
    begin: &C,
    end: &C,
    target: &C::Item,
    compare: &mut F,
    tally: &mut Tally<'_>,
) -> C
where
    C: Forward,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    let mut left = begin.clone();
    let mut size = distance(begin, end);
    while size > 0 {
        let half = size / 2;
        let mid = left.advanced(half);
        match compare_with(&mid, target, compare, tally) {
            Some(Ordering::Equal) => return mid,
            Some(Ordering::Less) => {
                left = mid.advanced(1);
                size -= half + 1;
            }
            Some(Ordering::Greater) => size = half,
            None => break,
        }
    }
    end.clone()
}

pub(crate) fn linear_insert_position_with<C, F>(
    begin: &C,
    end: &C,
    value: &C::Item,
    compare: &mut F,
    tally: &mut Tally<'_>,
) -> C
where
    C: Forward,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    let mut cursor = begin.clone();
    while in_range(&cursor, end) {
        if compare_with(&cursor, value, compare, tally) == Some(Ordering::Greater) {
            return cursor;
        }
        cursor.move_next();
    }
    end.clone()
}

pub(crate) fn binary_insert_position_with<C, F>(
    begin: &C,
    end: &C,
    value: &C::Item,
    compare: &mut F,
    tally: &mut Tally<'_>,
) -> C
where
    C: Forward,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    let mut left = begin.clone();
    let mut size = distance(begin, end);
    while size > 0 {
        let half = size / 2;
        let mid = left.advanced(half);
        match compare_with(&mid, value, compare, tally) {
            Some(Ordering::Greater) => size = half,
            Some(_) => {
                left = mid.advanced(1);
                size -= half + 1;
            }
            None => break,
        }
    }
    left
}

pub(crate) fn linear_search_min_with<C, F>(
    begin: &C,
    end: &C,
    compare: &mut F,
    tally: &mut Tally<'_>,
) -> C
where
    C: Forward,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    if !in_range(begin, end) {
        return end.clone();
    }
    let mut min = begin.clone();
    let mut cursor = begin.advanced(1);
    while in_range(&cursor, end) {
        if compare_cursors(&cursor, &min, compare, tally) == Some(Ordering::Less) {
            min = cursor.clone();
        }
        cursor.move_next();
    }
    min
}
