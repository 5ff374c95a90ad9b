use core::fmt::{self, Debug};
use core::iter::FusedIterator;
use core::mem;
use core::ops;

use alloc::vec::Vec;

use num_traits::Zero;

use crate::index_error::{index_error, IndexingError};
use crate::index_traits::{BidirectionalIndex, ForwardIndex, RandomAccessIndex};
use crate::reverse::ReverseRange;
use crate::stride::StridedRangeIter;

/// A half-open range `[start, end)` of indices.
///
/// The range is a plain value: copying it gives an independent range, and
/// iterating it never consumes it (each iteration starts from a fresh
/// [`RangeIter`]).
///
/// No ordering between the endpoints is enforced. The range is empty only
/// when `start == end`; a range whose start lies after its end counts as
/// nonempty, and its forward cursor walks past `end` until the index domain
/// runs out.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Range<T> {
    start: T,
    end: T,
}

impl<T: ForwardIndex> Range<T> {
    /// Form the half-open range that includes `start` but excludes `end`.
    #[inline]
    pub fn new(start: T, end: T) -> Self {
        Range { start, end }
    }

    /// Form the half-open range that includes `min` but excludes `max`.
    ///
    /// If `min == max`, the range is empty.
    #[inline]
    pub fn half_open(min: T, max: T) -> Self {
        Range::new(min, max)
    }

    /// Form the closed range that includes both `min` and `max`; it is
    /// represented as the half-open range up to the successor of `max`.
    ///
    /// ***Panics*** if `max` has no successor in its index domain.
    #[inline]
    pub fn closed(min: T, max: T) -> Self {
        match max.checked_successor() {
            Some(end) => Range::new(min, end),
            None => precondition_failed!("closed range: maximum has no successor"),
        }
    }

    /// Form the closed range that includes both `min` and `max`, or return
    /// an error if `max` has no successor.
    #[inline]
    pub fn try_closed(min: T, max: T) -> Result<Self, IndexingError> {
        max.checked_successor()
           .map(|end| Range::new(min, end))
           .ok_or_else(index_error)
    }

    /// Return the start index.
    #[inline]
    pub fn start_index(&self) -> &T { &self.start }

    /// Return the end index (one past the last element).
    #[inline]
    pub fn end_index(&self) -> &T { &self.end }

    #[inline]
    pub fn set_start_index(&mut self, start: T) { self.start = start; }

    #[inline]
    pub fn set_end_index(&mut self, end: T) { self.end = end; }

    /// Split the range into its `(start, end)` endpoints.
    #[inline]
    pub fn into_bounds(self) -> (T, T) { (self.start, self.end) }

    /// Return `true` if the range is empty.
    #[inline]
    pub fn is_empty(&self) -> bool { self.start == self.end }

    /// Return `true` if the range has at least one element.
    #[inline]
    pub fn is_nonempty(&self) -> bool { !self.is_empty() }

    /// Check that the range is nonempty; return a `Result` where the `Ok`
    /// branch carries a copy of the range.
    #[inline]
    pub fn nonempty(&self) -> Result<Range<T>, IndexingError> {
        if self.is_nonempty() {
            Ok(self.clone())
        } else {
            Err(index_error())
        }
    }

    /// Identity projection: a range, seen as a lookup table over its own
    /// index domain, maps every index to itself.
    ///
    /// `index` is not checked against the bounds of the range.
    #[inline]
    pub fn at(&self, index: T) -> T { index }

    /// Return a range with the endpoints of `sub`.
    ///
    /// `sub` is ***not*** clipped to the bounds of `self`; the result is
    /// `sub` unchanged.
    #[inline]
    pub fn subrange(&self, sub: Range<T>) -> Range<T> {
        Range::new(sub.start, sub.end)
    }

    /// Return a fresh forward cursor over the range.
    #[inline]
    pub fn iter(&self) -> RangeIter<T> {
        RangeIter::new(self.clone())
    }

    /// Return a vector with the results of calling `f` on each index of the
    /// range, in order.
    pub fn map<U, F>(&self, f: F) -> Vec<U>
        where F: FnMut(T) -> U,
    {
        self.iter().map(f).collect()
    }

    #[inline]
    pub fn as_range(&self) -> ops::Range<T> { self.start.clone()..self.end.clone() }
}

impl<T: BidirectionalIndex> Range<T> {
    /// Return a range over the same indices, walked from the back.
    #[inline]
    pub fn reversed(&self) -> ReverseRange<T> {
        ReverseRange::from(self.clone())
    }
}

impl<T: RandomAccessIndex> Range<T> {
    /// Return the length of the range, measured without iterating.
    ///
    /// This is the number of indices the forward cursor produces.
    #[inline]
    pub fn len(&self) -> T::Distance {
        self.start.distance_to(&self.end)
    }

    /// Return `true` if `index` lies in the range.
    ///
    /// The test only uses distances, so it holds for index types without an
    /// ordering, and it can't overflow for the provided integer indices.
    #[inline]
    pub fn contains(&self, index: &T) -> bool {
        let zero = T::Distance::zero();
        self.start.distance_to(index) >= zero && index.distance_to(&self.end) > zero
    }

    /// Return a cursor that steps through the range `stride` indices at a
    /// time, never stepping past the end.
    ///
    /// ***Panics*** if `stride` is zero, or if the range is nonempty and
    /// `stride` points away from its end.
    #[inline]
    pub fn by(&self, stride: T::Distance) -> StridedRangeIter<T> {
        StridedRangeIter::new(self.clone(), stride)
    }

    /// Like `by`, but return an error instead of panicking on a bad stride.
    #[inline]
    pub fn try_by(&self, stride: T::Distance) -> Result<StridedRangeIter<T>, IndexingError> {
        StridedRangeIter::try_new(self.clone(), stride)
    }
}

/// Return the number of indices in `range`, without iterating.
#[inline]
pub fn count<T: RandomAccessIndex>(range: &Range<T>) -> T::Distance {
    range.len()
}

/// Return `true` if `index` lies in `range`.
#[inline]
pub fn contains<T: RandomAccessIndex>(range: &Range<T>, index: &T) -> bool {
    range.contains(index)
}

impl<T: Debug> Debug for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Range({:?} to {:?})", self.start, self.end)
    }
}

impl<T: ForwardIndex> From<ops::Range<T>> for Range<T> {
    #[inline]
    fn from(r: ops::Range<T>) -> Self {
        Range::new(r.start, r.end)
    }
}

/// ***Panics*** if the maximum has no successor, like `Range::closed`.
impl<T: ForwardIndex> From<ops::RangeInclusive<T>> for Range<T> {
    #[inline]
    fn from(r: ops::RangeInclusive<T>) -> Self {
        let (min, max) = r.into_inner();
        Range::closed(min, max)
    }
}

impl<T> From<Range<T>> for ops::Range<T> {
    #[inline]
    fn from(r: Range<T>) -> Self {
        r.start..r.end
    }
}

impl<T: ForwardIndex> IntoIterator for Range<T> {
    type Item = T;
    type IntoIter = RangeIter<T>;
    #[inline]
    fn into_iter(self) -> RangeIter<T> {
        RangeIter::new(self)
    }
}

impl<'a, T: ForwardIndex> IntoIterator for &'a Range<T> {
    type Item = T;
    type IntoIter = RangeIter<T>;
    #[inline]
    fn into_iter(self) -> RangeIter<T> {
        self.iter()
    }
}

/// A single-pass forward cursor over the indices in a range.
///
/// The cursor is a value: a copy continues independently from the position
/// it was copied at. A cursor instance must not be stepped from more than
/// one place at once (`next` takes `&mut self`).
#[derive(Copy, Clone)]
pub struct RangeIter<T> {
    start: T,
    end: T,
}

impl<T: ForwardIndex> RangeIter<T> {
    #[inline]
    pub fn new(range: Range<T>) -> Self {
        let (start, end) = range.into_bounds();
        RangeIter { start, end }
    }

    /// Return the range of indices not yet produced.
    #[inline]
    pub fn into_range(&self) -> Range<T> {
        Range::new(self.start.clone(), self.end.clone())
    }
}

impl<T: ForwardIndex> Iterator for RangeIter<T> {
    type Item = T;
    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            None
        } else {
            let next = self.start.successor();
            Some(mem::replace(&mut self.start, next))
        }
    }
}

impl<T: BidirectionalIndex> DoubleEndedIterator for RangeIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            None
        } else {
            self.end = self.end.predecessor();
            Some(self.end.clone())
        }
    }
}

impl<T: ForwardIndex> FusedIterator for RangeIter<T> { }

impl<T: Debug> Debug for RangeIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "RangeIter({:?} to {:?})", self.start, self.end)
    }
}

#[test]
fn test_half_open() {
    let r = Range::half_open(0i32, 5);
    assert!(!r.is_empty());
    assert!(r.is_nonempty());
    assert_eq!(r.len(), 5);
    assert_eq!(r.iter().collect::<Vec<_>>(), [0, 1, 2, 3, 4]);
    // the range is restartable
    assert_eq!(r.into_iter().count(), 5);
    assert_eq!(r.into_iter().count(), 5);
}

#[test]
fn test_empty() {
    let r = Range::half_open(3u32, 3);
    assert!(r.is_empty());
    assert_eq!(r.nonempty(), Err(index_error()));
    assert_eq!(r.len(), 0);
    assert_eq!(r.iter().next(), None);
    assert_eq!(r.map(|x| x), Vec::<u32>::new());
}

#[test]
fn test_closed() {
    let r = Range::closed(1u8, 4);
    assert_eq!(r, Range::half_open(1, 5));
    assert_eq!(r.iter().last(), Some(4));
    assert_eq!(Range::closed(7i32, 7).len(), 1);
    assert_eq!(Range::try_closed(0u8, 255), Err(index_error()));
    assert_eq!(Range::try_closed(0u8, 254), Ok(Range::half_open(0, 255)));
    assert_eq!(Range::from(2..=4i64), Range::half_open(2, 5));
}

#[test]
#[should_panic(expected = "closed range: maximum has no successor")]
fn test_closed_at_domain_end() {
    Range::closed(0u8, 255);
}

#[test]
fn test_projection_and_subrange() {
    let r = Range::half_open(2, 7);
    assert_eq!(r.at(4), 4);
    // no bounds check
    assert_eq!(r.at(100), 100);
    // not clipped
    let sub = r.subrange(Range::half_open(0, 10));
    assert_eq!(sub, Range::half_open(0, 10));
}

#[test]
fn test_contains_boundaries() {
    let r = Range::half_open(2i32, 7);
    assert!(r.contains(&2));
    assert!(r.contains(&6));
    assert!(!r.contains(&7));
    assert!(!r.contains(&1));
    assert!(contains(&r, &3));

    let r = Range::half_open(u64::MIN, u64::MAX);
    assert!(r.contains(&0));
    assert!(r.contains(&(u64::MAX - 1)));
    assert!(!r.contains(&u64::MAX));
    assert_eq!(count(&r), u64::MAX as i128);
}

#[test]
fn test_map() {
    assert_eq!(Range::half_open(0, 3).map(|x| x * x), [0, 1, 4]);
}

#[test]
fn test_cursor_copies_are_independent() {
    let mut a = Range::half_open(0, 4).iter();
    a.next();
    let mut b = a;
    assert_eq!(b.next(), Some(1));
    assert_eq!(b.next(), Some(2));
    assert_eq!(a.next(), Some(1));
    assert_eq!(a.into_range(), Range::half_open(2, 4));
    assert_eq!(b.into_range(), Range::half_open(3, 4));
}

#[test]
fn test_cursor_fused() {
    let mut it = Range::half_open(0, 1).iter();
    assert_eq!(it.next(), Some(0));
    assert_eq!(it.next(), None);
    assert_eq!(it.next(), None);
}

#[test]
fn test_double_ended() {
    let mut it = Range::half_open(0, 5).iter();
    assert_eq!(it.next(), Some(0));
    assert_eq!(it.next_back(), Some(4));
    assert_eq!(it.collect::<Vec<_>>(), [1, 2, 3]);
    assert_eq!(Range::half_open('a', 'd').iter().rev().collect::<Vec<_>>(), ['c', 'b', 'a']);
}

#[test]
fn test_std_range_conversion() {
    let r: Range<usize> = (3..9).into();
    assert_eq!(*r.start_index(), 3);
    assert_eq!(*r.end_index(), 9);
    let back: ops::Range<usize> = r.into();
    assert_eq!(back, 3..9);
    assert_eq!(r.as_range(), 3..9);
}

#[test]
fn test_debug() {
    assert_eq!(format!("{:?}", Range::half_open(0, 5)), "Range(0 to 5)");
    assert_eq!(format!("{:?}", Range::half_open(0, 5).iter()), "RangeIter(0 to 5)");
}
