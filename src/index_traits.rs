//! The index capability hierarchy.
//!
//! An index is an opaque position in some sequence. What a range or cursor
//! can do with its indices depends on which of these traits they implement:
//!
//! - [`ForwardIndex`]: equality and a successor. Enough for a half-open
//!   [`Range`](../struct.Range.html) and its forward cursor.
//! - [`BidirectionalIndex`]: adds the predecessor, which enables
//!   [`ReverseRange`](../struct.ReverseRange.html).
//! - [`RandomAccessIndex`]: adds a signed distance and jumps, which enables
//!   O(1) length, containment tests and strided cursors.
//!
//! The machine integers (up to 64 bits) implement all three tiers, with a
//! distance type wide enough to hold the difference of any two values.
//! `char` is bidirectional: it steps over the surrogate gap.

use core::convert::TryFrom;
use core::fmt::Debug;

use num_traits::{Signed, Zero};

/// An index that can step forward one position at a time.
///
/// `successor` must be a pure function of the index: calling it twice on
/// equal indices gives equal results.
pub trait ForwardIndex : Clone + Eq {
    /// Return the index one step ahead.
    ///
    /// ***Panics*** if `self` is the last position of the index domain.
    fn successor(&self) -> Self;

    /// Return the index one step ahead, or `None` if there is none.
    #[inline]
    fn checked_successor(&self) -> Option<Self> {
        Some(self.successor())
    }
}

/// An index that can also step backward.
///
/// `predecessor` is the exact inverse of `successor`:
/// `i.successor().predecessor() == i`.
pub trait BidirectionalIndex : ForwardIndex {
    /// Return the index one step back.
    ///
    /// ***Panics*** if `self` is the first position of the index domain.
    fn predecessor(&self) -> Self;

    /// Return the index one step back, or `None` if there is none.
    #[inline]
    fn checked_predecessor(&self) -> Option<Self> {
        Some(self.predecessor())
    }
}

/// An index that can measure the distance to another index and jump by a
/// distance, both in bounded time.
///
/// Implementations must uphold, for all `a` and `b` of the same domain:
///
/// - `a.advanced_by(a.distance_to(&b)) == b`
/// - `a.distance_to(&b) == -b.distance_to(&a)`
pub trait RandomAccessIndex : BidirectionalIndex {
    /// Signed step count between two indices.
    type Distance: Copy + Signed + PartialOrd + Debug;

    /// Return the signed number of steps from `self` to `other`; positive if
    /// `other` is ahead of `self`.
    fn distance_to(&self, other: &Self) -> Self::Distance;

    /// Return the index `n` steps away (backward if `n` is negative).
    ///
    /// ***Panics*** if the result would leave the index domain.
    fn advanced_by(&self, n: Self::Distance) -> Self;

    /// Return the index `n` steps away, but never move past `limit`.
    ///
    /// If `limit` lies in the direction of travel and is less than `n` steps
    /// away, `limit` is returned instead. A move away from `limit` is not
    /// clamped.
    #[inline]
    fn advanced_by_limited(&self, n: Self::Distance, limit: &Self) -> Self {
        let d = self.distance_to(limit);
        let zero = <Self::Distance as Zero>::zero();
        let overshoots = if n > zero {
            d >= zero && n > d
        } else if n < zero {
            d <= zero && n < d
        } else {
            false
        };
        if overshoots {
            limit.clone()
        } else {
            self.advanced_by(n)
        }
    }
}

macro_rules! integer_index {
    ($($t:ty => $d:ty,)*) => {
        $(
        impl ForwardIndex for $t {
            #[inline]
            fn successor(&self) -> Self {
                match self.checked_add(1) {
                    Some(i) => i,
                    None => precondition_failed!("{}::MAX has no successor", stringify!($t)),
                }
            }

            #[inline]
            fn checked_successor(&self) -> Option<Self> {
                self.checked_add(1)
            }
        }

        impl BidirectionalIndex for $t {
            #[inline]
            fn predecessor(&self) -> Self {
                match self.checked_sub(1) {
                    Some(i) => i,
                    None => precondition_failed!("{}::MIN has no predecessor", stringify!($t)),
                }
            }

            #[inline]
            fn checked_predecessor(&self) -> Option<Self> {
                self.checked_sub(1)
            }
        }

        impl RandomAccessIndex for $t {
            type Distance = $d;

            #[inline]
            fn distance_to(&self, other: &Self) -> $d {
                // the distance type is wider than `$t`, this can't overflow
                *other as $d - *self as $d
            }

            #[inline]
            fn advanced_by(&self, n: $d) -> Self {
                let target = (*self as $d).checked_add(n);
                match target.and_then(|t| <$t>::try_from(t).ok()) {
                    Some(i) => i,
                    None => precondition_failed!("{} advanced by {} leaves the domain of {}",
                                                 self, n, stringify!($t)),
                }
            }
        }
        )*
    }
}

integer_index! {
    i8 => i16,
    u8 => i16,
    i16 => i32,
    u16 => i32,
    i32 => i64,
    u32 => i64,
    i64 => i128,
    u64 => i128,
    isize => i128,
    usize => i128,
}

const SURROGATE_LOW: u32 = 0xD800;
const SURROGATE_HIGH: u32 = 0xDFFF;

impl ForwardIndex for char {
    #[inline]
    fn successor(&self) -> Self {
        match self.checked_successor() {
            Some(c) => c,
            None => precondition_failed!("char::MAX has no successor"),
        }
    }

    #[inline]
    fn checked_successor(&self) -> Option<Self> {
        let next = match *self as u32 {
            c if c == SURROGATE_LOW - 1 => SURROGATE_HIGH + 1,
            c => c.checked_add(1)?,
        };
        core::char::from_u32(next)
    }
}

impl BidirectionalIndex for char {
    #[inline]
    fn predecessor(&self) -> Self {
        match self.checked_predecessor() {
            Some(c) => c,
            None => precondition_failed!("'\\0' has no predecessor"),
        }
    }

    #[inline]
    fn checked_predecessor(&self) -> Option<Self> {
        let prev = match *self as u32 {
            c if c == SURROGATE_HIGH + 1 => SURROGATE_LOW - 1,
            c => c.checked_sub(1)?,
        };
        core::char::from_u32(prev)
    }
}

#[test]
fn test_integer_steps() {
    assert_eq!(3u8.successor(), 4);
    assert_eq!(3u8.predecessor(), 2);
    assert_eq!(255u8.checked_successor(), None);
    assert_eq!(0u8.checked_predecessor(), None);
    assert_eq!(i64::MIN.checked_predecessor(), None);
    assert_eq!((-1isize).successor(), 0);
}

#[test]
#[should_panic(expected = "has no successor")]
fn test_integer_successor_overflow() {
    i32::MAX.successor();
}

#[test]
fn test_integer_distance() {
    assert_eq!(0u8.distance_to(&255), 255i16);
    assert_eq!(255u8.distance_to(&0), -255i16);
    assert_eq!(i8::MIN.distance_to(&i8::MAX), 255i16);
    assert_eq!(0usize.distance_to(&usize::MAX), usize::MAX as i128);
    assert_eq!(i64::MAX.distance_to(&i64::MIN), i64::MIN as i128 - i64::MAX as i128);

    for &(a, b) in &[(0i32, 10), (10, 0), (-5, 5), (i32::MIN, i32::MAX)] {
        assert_eq!(a.advanced_by(a.distance_to(&b)), b);
        assert_eq!(a.distance_to(&b), -b.distance_to(&a));
    }
}

#[test]
#[should_panic(expected = "leaves the domain of u8")]
fn test_advanced_by_out_of_domain() {
    250u8.advanced_by(10);
}

#[test]
fn test_advanced_by_limited() {
    // forward, clamped
    assert_eq!(0i32.advanced_by_limited(3, &5), 3);
    assert_eq!(3i32.advanced_by_limited(3, &5), 5);
    assert_eq!(5i32.advanced_by_limited(3, &5), 5);
    // backward, clamped
    assert_eq!(5i32.advanced_by_limited(-3, &0), 2);
    assert_eq!(2i32.advanced_by_limited(-3, &0), 0);
    // moving away from the limit is not clamped
    assert_eq!(5i32.advanced_by_limited(-3, &10), 2);
    // zero never moves
    assert_eq!(7u64.advanced_by_limited(0, &7), 7);
    // clamping keeps us inside the domain
    assert_eq!(250u8.advanced_by_limited(100, &255), 255);
}

#[test]
fn test_char_steps() {
    assert_eq!('a'.successor(), 'b');
    assert_eq!('b'.predecessor(), 'a');
    assert_eq!('\u{D7FF}'.successor(), '\u{E000}');
    assert_eq!('\u{E000}'.predecessor(), '\u{D7FF}');
    assert_eq!(char::MAX.checked_successor(), None);
    assert_eq!('\0'.checked_predecessor(), None);
}
