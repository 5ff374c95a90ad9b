use core::fmt::{self, Debug};
use core::iter::FusedIterator;

use crate::index_traits::BidirectionalIndex;
use crate::range::Range;

/// A half-open range `[start, past_end)` that is walked from the back.
///
/// Its cursor yields exactly the indices the forward cursor of the same
/// range would, in reverse order.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct ReverseRange<T> {
    start: T,
    past_end: T,
}

impl<T: BidirectionalIndex> ReverseRange<T> {
    #[inline]
    pub fn new(start: T, past_end: T) -> Self {
        ReverseRange { start, past_end }
    }

    #[inline]
    pub fn is_empty(&self) -> bool { self.start == self.past_end }

    /// Return the `(start, past_end)` endpoints.
    #[inline]
    pub fn bounds(&self) -> (T, T) {
        (self.start.clone(), self.past_end.clone())
    }

    #[inline]
    pub fn iter(&self) -> ReverseRangeIter<T> {
        ReverseRangeIter::new(self.start.clone(), self.past_end.clone())
    }
}

/// The endpoints are taken over unchanged.
impl<T: BidirectionalIndex> From<Range<T>> for ReverseRange<T> {
    #[inline]
    fn from(range: Range<T>) -> Self {
        let (start, past_end) = range.into_bounds();
        ReverseRange::new(start, past_end)
    }
}

impl<T: BidirectionalIndex> IntoIterator for ReverseRange<T> {
    type Item = T;
    type IntoIter = ReverseRangeIter<T>;
    #[inline]
    fn into_iter(self) -> ReverseRangeIter<T> {
        ReverseRangeIter::new(self.start, self.past_end)
    }
}

impl<'a, T: BidirectionalIndex> IntoIterator for &'a ReverseRange<T> {
    type Item = T;
    type IntoIter = ReverseRangeIter<T>;
    #[inline]
    fn into_iter(self) -> ReverseRangeIter<T> {
        self.iter()
    }
}

impl<T: Debug> Debug for ReverseRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ReverseRange({:?} to {:?})", self.start, self.past_end)
    }
}

/// A single-pass cursor walking a range from its end to its start.
#[derive(Copy, Clone)]
pub struct ReverseRangeIter<T> {
    start: T,
    past_end: T,
}

impl<T: BidirectionalIndex> ReverseRangeIter<T> {
    #[inline]
    pub fn new(start: T, past_end: T) -> Self {
        ReverseRangeIter { start, past_end }
    }
}

impl<T: BidirectionalIndex> Iterator for ReverseRangeIter<T> {
    type Item = T;
    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.start == self.past_end {
            return None;
        }
        self.past_end = self.past_end.predecessor();
        Some(self.past_end.clone())
    }
}

impl<T: BidirectionalIndex> FusedIterator for ReverseRangeIter<T> { }

impl<T: Debug> Debug for ReverseRangeIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ReverseRangeIter({:?} to {:?})", self.start, self.past_end)
    }
}

#[cfg(test)]
use alloc::vec::Vec;

#[test]
fn test_reverse() {
    let r = ReverseRange::new(0, 5);
    assert_eq!(r.iter().collect::<Vec<_>>(), [4, 3, 2, 1, 0]);
    assert!(!r.is_empty());
    assert_eq!(r.bounds(), (0, 5));

    let fwd = Range::half_open(-3i64, 4);
    let mut expected = fwd.iter().collect::<Vec<_>>();
    expected.reverse();
    assert_eq!(fwd.reversed().into_iter().collect::<Vec<_>>(), expected);
    assert_eq!(ReverseRange::from(fwd).bounds(), (-3, 4));
}

#[test]
fn test_reverse_empty() {
    let r = ReverseRange::new('x', 'x');
    assert!(r.is_empty());
    assert_eq!(r.iter().next(), None);
}

#[test]
fn test_reverse_chars() {
    let r = Range::closed('a', 'e').reversed();
    assert_eq!(r.iter().collect::<Vec<_>>(), ['e', 'd', 'c', 'b', 'a']);
}

#[test]
fn test_reverse_fused() {
    let mut it = ReverseRange::new(0u8, 1).iter();
    assert_eq!(it.next(), Some(0));
    assert_eq!(it.next(), None);
    assert_eq!(it.next(), None);
    assert_eq!(format!("{:?}", it), "ReverseRangeIter(0 to 0)");
}
