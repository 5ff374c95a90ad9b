//! Strided cursors.

use core::fmt::{self, Debug};
use core::iter::FusedIterator;

use num_traits::{Signed, Zero};

use crate::index_error::{index_error, IndexingError};
use crate::index_traits::RandomAccessIndex;
use crate::range::Range;

/// A cursor that steps through a range a fixed number of indices at a time.
///
/// Each step moves the start of the held range by `stride`, clamped so that
/// it never moves past the end. With a positive stride over a forward range
/// the cursor yields at most `ceil(len / stride)` indices.
///
/// The stride must point from the start of the range toward its end; this
/// is checked when the cursor is created. A range written backwards (start
/// after end) is walked with a negative stride.
#[derive(Copy, Clone)]
pub struct StridedRangeIter<T: RandomAccessIndex> {
    range: Range<T>,
    stride: T::Distance,
}

impl<T: RandomAccessIndex> StridedRangeIter<T> {
    /// ***Panics*** if `stride` is zero, or if `range` is nonempty and
    /// `stride` points away from its end.
    pub fn new(range: Range<T>, stride: T::Distance) -> Self {
        match Self::try_new(range, stride) {
            Ok(iter) => iter,
            Err(_) if stride.is_zero() => precondition_failed!("stride must not be zero"),
            Err(_) => precondition_failed!("stride {:?} points away from the end of the range",
                                           stride),
        }
    }

    pub fn try_new(range: Range<T>, stride: T::Distance) -> Result<Self, IndexingError> {
        if stride.is_zero() {
            return Err(index_error());
        }
        if range.is_nonempty() {
            let direction = range.start_index().distance_to(range.end_index()).signum();
            if direction != stride.signum() {
                return Err(index_error());
            }
        }
        log::trace!("strided cursor over {:?} indices by {:?}",
                    range.start_index().distance_to(range.end_index()), stride);
        Ok(StridedRangeIter { range, stride })
    }

    #[inline]
    pub fn stride(&self) -> T::Distance { self.stride }

    /// Return the range of indices not yet stepped over.
    #[inline]
    pub fn into_range(&self) -> Range<T> { self.range.clone() }
}

impl<T: RandomAccessIndex> Iterator for StridedRangeIter<T> {
    type Item = T;
    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.range.is_empty() {
            return None;
        }
        let ret = self.range.start_index().clone();
        let next = ret.advanced_by_limited(self.stride, self.range.end_index());
        self.range.set_start_index(next);
        Some(ret)
    }
}

impl<T: RandomAccessIndex> FusedIterator for StridedRangeIter<T> { }

impl<T: RandomAccessIndex + Debug> Debug for StridedRangeIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "StridedRangeIter({:?} to {:?} by {:?})",
               self.range.start_index(), self.range.end_index(), self.stride)
    }
}

#[cfg(test)]
use alloc::vec::Vec;

#[test]
fn test_stride() {
    let r = Range::half_open(0i32, 5);
    assert_eq!(r.by(2).collect::<Vec<_>>(), [0, 2, 4]);
    assert_eq!(r.by(1).collect::<Vec<_>>(), [0, 1, 2, 3, 4]);
    assert_eq!(r.by(5).collect::<Vec<_>>(), [0]);
    assert_eq!(r.by(100).collect::<Vec<_>>(), [0]);
    assert_eq!(Range::half_open(0i32, 6).by(2).collect::<Vec<_>>(), [0, 2, 4]);
    assert_eq!(Range::half_open(0i32, 7).by(3).collect::<Vec<_>>(), [0, 3, 6]);
}

#[test]
fn test_stride_near_domain_end() {
    // clamping keeps the cursor from stepping outside `u8`
    let r = Range::half_open(250u8, 255);
    assert_eq!(r.by(4).collect::<Vec<_>>(), [250, 254]);
}

#[test]
fn test_stride_empty_range() {
    let r = Range::half_open(3i32, 3);
    assert_eq!(r.by(2).next(), None);
    // any nonzero direction is accepted for an empty range
    assert_eq!(r.by(-2).next(), None);
}

#[test]
fn test_stride_backwards() {
    let r = Range::half_open(10i32, 0);
    assert_eq!(r.by(-3).collect::<Vec<_>>(), [10, 7, 4, 1]);
}

#[test]
fn test_stride_rejected() {
    let r = Range::half_open(0i32, 5);
    assert!(r.try_by(0).is_err());
    assert!(r.try_by(-1).is_err());
    assert!(Range::half_open(5i32, 0).try_by(1).is_err());
    assert!(r.try_by(1).is_ok());
}

#[test]
#[should_panic(expected = "points away from the end of the range")]
fn test_stride_mismatched_direction() {
    Range::half_open(0i32, 5).by(-1);
}

#[test]
#[should_panic(expected = "stride must not be zero")]
fn test_stride_zero() {
    Range::half_open(0i32, 5).by(0);
}

#[test]
fn test_stride_fused_and_copied() {
    let mut it = Range::half_open(0i32, 4).by(3);
    let snapshot = it;
    assert_eq!(it.next(), Some(0));
    assert_eq!(it.next(), Some(3));
    assert_eq!(it.next(), None);
    assert_eq!(it.next(), None);
    assert_eq!(snapshot.stride(), 3);
    assert_eq!(snapshot.into_range(), Range::half_open(0i32, 4));
    assert_eq!(format!("{:?}", snapshot), "StridedRangeIter(0 to 4 by 3)");
}
