//! Location and length pairs.
//!
//! Foreign collection APIs often describe a run of positions as a start
//! location plus a length rather than as two endpoints. `Span` is that
//! representation for ranges of `usize` positions, and converts to and from
//! [`Range<usize>`](../struct.Range.html) exactly.

use core::convert::TryFrom;

use crate::index_error::{index_error, IndexingError};
use crate::range::Range;

/// A run of positions given by its first `location` and its `length`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub location: usize,
    pub length: usize,
}

impl Span {
    #[inline]
    pub fn new(location: usize, length: usize) -> Self {
        Span { location, length }
    }

    #[inline]
    pub fn is_empty(&self) -> bool { self.length == 0 }

    /// Return the position one past the end of the span, or `None` if it is
    /// not representable.
    #[inline]
    pub fn checked_end(&self) -> Option<usize> {
        self.location.checked_add(self.length)
    }

    /// Return the range `location..location + length`.
    ///
    /// ***Panics*** if `location + length` overflows.
    #[inline]
    pub fn to_range(&self) -> Range<usize> {
        match self.checked_end() {
            Some(end) => Range::half_open(self.location, end),
            None => precondition_failed!("span {} + {} overflows usize",
                                         self.location, self.length),
        }
    }
}

impl From<Span> for Range<usize> {
    #[inline]
    fn from(span: Span) -> Self {
        span.to_range()
    }
}

/// Fails if the range runs backwards (its end lies before its start).
impl TryFrom<Range<usize>> for Span {
    type Error = IndexingError;

    #[inline]
    fn try_from(range: Range<usize>) -> Result<Self, IndexingError> {
        let (start, end) = range.into_bounds();
        match end.checked_sub(start) {
            Some(length) => Ok(Span::new(start, length)),
            None => Err(index_error()),
        }
    }
}

#[test]
fn test_span_round_trip() {
    let span = Span::new(3, 4);
    let range = span.to_range();
    assert_eq!(range, Range::half_open(3, 7));
    assert_eq!(range.len(), 4);
    assert_eq!(Span::try_from(range), Ok(span));

    let range = Range::half_open(10usize, 10);
    assert_eq!(Span::try_from(range).map(|s| s.to_range()), Ok(range));
    assert!(Span::try_from(range).unwrap().is_empty());
}

#[test]
fn test_span_backwards_range() {
    assert_eq!(Span::try_from(Range::half_open(5usize, 2)), Err(index_error()));
}

#[test]
#[should_panic(expected = "overflows usize")]
fn test_span_overflow() {
    Span::new(usize::MAX, 1).to_range();
}
