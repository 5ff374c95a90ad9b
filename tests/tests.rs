extern crate steps;
#[macro_use]
extern crate quickcheck;

use steps::prelude::*;
use steps::{contains, count};

use std::convert::TryFrom;

use quickcheck::TestResult;

fn ordered<T: Ord>(a: T, b: T) -> (T, T) {
    if a <= b { (a, b) } else { (b, a) }
}

// A pointer-like index into a singly linked list stored as a "next" table;
// it can only step forward.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Link(usize);

const NIL: usize = usize::MAX;

// 0 -> 2 -> 4 -> 3 -> 1 -> NIL
static NEXT: [usize; 5] = [2, NIL, 4, 1, 3];

impl ForwardIndex for Link {
    fn successor(&self) -> Self {
        Link(NEXT[self.0])
    }
}

#[test]
fn forward_only_index() {
    let all = Range::half_open(Link(0), Link(NIL));
    assert_eq!(all.map(|l| l.0), [0, 2, 4, 3, 1]);

    let mid = Range::half_open(Link(2), Link(1));
    assert_eq!(mid.iter().collect::<Vec<_>>(), [Link(2), Link(4), Link(3)]);

    let closed = Range::closed(Link(2), Link(3));
    assert_eq!(closed, Range::half_open(Link(2), Link(1)));
    assert_eq!(closed.iter().last(), Some(Link(3)));

    assert!(Range::half_open(Link(4), Link(4)).is_empty());
}

#[test]
fn spec_examples() {
    let r = Range::half_open(0i32, 5);
    assert_eq!(r.by(2).collect::<Vec<_>>(), [0, 2, 4]);
    assert_eq!(ReverseRange::from(r).into_iter().collect::<Vec<_>>(), [4, 3, 2, 1, 0]);

    let r = Range::half_open(2i32, 7);
    assert!(contains(&r, &2));
    assert!(contains(&r, &6));
    assert!(!contains(&r, &7));
    assert!(!contains(&r, &1));

    assert_eq!(Range::half_open(0, 3).map(|x| x * x), [0, 1, 4]);

    let span = Span::new(3, 4);
    assert_eq!(Span::try_from(Range::<usize>::from(span)), Ok(span));
}

#[test]
fn range_is_not_consumed() {
    let r = Range::half_open(1usize, 4);
    let first: Vec<_> = r.iter().collect();
    let second: Vec<_> = (&r).into_iter().collect();
    assert_eq!(first, second);
    assert_eq!(count(&r), 3);
}

#[test]
fn truthiness_drives_cursors() {
    let mut r = Range::half_open(0u16, 3);
    let mut seen = Vec::new();
    while r.is_nonempty() {
        seen.push(*r.start_index());
        let next = r.start_index().successor();
        r.set_start_index(next);
    }
    assert_eq!(seen, [0, 1, 2]);
    assert!(r.nonempty().is_err());
}

#[test]
fn char_ranges() {
    let letters = Range::closed('a', 'f');
    assert_eq!(letters.iter().collect::<String>(), "abcdef");
    assert_eq!(letters.reversed().iter().collect::<String>(), "fedcba");

    // the surrogate gap is stepped over in both directions
    let around = Range::closed('\u{D7FE}', '\u{E001}');
    assert_eq!(around.iter().count(), 4);
    assert_eq!(around.iter().rev().count(), 4);
}

#[test]
#[should_panic(expected = "has no successor")]
fn closed_range_at_char_max() {
    Range::closed('a', char::MAX);
}

quickcheck! {
    fn count_matches_iteration(a: i16, b: i16) -> bool {
        let (a, b) = ordered(a, b);
        let r = Range::half_open(a, b);
        r.len() == r.iter().count() as i32
    }

    fn empty_range_yields_nothing(a: u64) -> bool {
        let r = Range::half_open(a, a);
        r.is_empty() && r.len() == 0 && r.iter().next().is_none() && r.by(3).next().is_none()
    }

    fn closed_matches_half_open(a: u8, b: u8) -> TestResult {
        let (a, b) = ordered(a, b);
        if b == u8::MAX {
            return TestResult::discard();
        }
        let closed: Vec<_> = Range::closed(a, b).into_iter().collect();
        let half_open: Vec<_> = Range::half_open(a, b.successor()).into_iter().collect();
        TestResult::from_bool(closed == half_open && closed.last() == Some(&b))
    }

    fn reverse_is_reversed_forward(a: i8, b: i8) -> bool {
        let (a, b) = ordered(a, b);
        let r = Range::half_open(a, b);
        let mut forward: Vec<_> = r.iter().collect();
        forward.reverse();
        let backward: Vec<_> = r.reversed().into_iter().collect();
        let rev: Vec<_> = r.iter().rev().collect();
        forward == backward && backward == rev
    }

    fn stride_matches_step_by(start: i16, len: u8, stride: u8) -> TestResult {
        if stride == 0 {
            return TestResult::discard();
        }
        let (start, end) = (start as i32, start as i32 + len as i32);
        let strided: Vec<_> = Range::half_open(start, end).by(stride as i64).collect();
        let expected: Vec<_> = (start..end).step_by(stride as usize).collect();
        TestResult::from_bool(strided == expected)
    }

    fn stride_step_count(len: u16, stride: u8) -> TestResult {
        if stride == 0 {
            return TestResult::discard();
        }
        let n = Range::half_open(0u32, len as u32).by(stride as i64).count();
        let expected = (len as usize + stride as usize - 1) / stride as usize;
        TestResult::from_bool(n == expected)
    }

    fn contains_matches_std(a: i32, b: i32, y: i32) -> bool {
        let (a, b) = ordered(a, b);
        Range::half_open(a, b).contains(&y) == (a..b).contains(&y)
    }

    fn contains_full_domain(a: u64, b: u64, y: u64) -> bool {
        // distances of u64 indices are i128, so extreme values can't overflow
        let (a, b) = ordered(a, b);
        let r = Range::half_open(a, b);
        r.contains(&y) == (a..b).contains(&y)
            && r.contains(&a) == (a != b)
            && !r.contains(&b)
    }

    fn span_round_trip(location: usize, length: usize) -> TestResult {
        if location.checked_add(length).is_none() {
            return TestResult::discard();
        }
        let span = Span::new(location, length);
        let range = span.to_range();
        TestResult::from_bool(Span::try_from(range) == Ok(span)
                              && *range.start_index() == location
                              && range.len() == length as i128)
    }

    fn range_round_trip(a: usize, b: usize) -> bool {
        let (a, b) = ordered(a, b);
        let range = Range::half_open(a, b);
        Span::try_from(range).map(Range::<usize>::from) == Ok(range)
    }

    fn distance_laws(a: i64, b: i64) -> bool {
        a.advanced_by(a.distance_to(&b)) == b && a.distance_to(&b) == -b.distance_to(&a)
    }

    fn successor_predecessor_inverse(a: u32) -> TestResult {
        if a == u32::MAX {
            return TestResult::discard();
        }
        TestResult::from_bool(a.successor().predecessor() == a)
    }

    fn char_successor_predecessor_inverse(c: char) -> TestResult {
        match c.checked_successor() {
            Some(next) => TestResult::from_bool(next.predecessor() == c && next != c),
            None => TestResult::from_bool(c == char::MAX),
        }
    }

    fn subrange_is_not_clipped(a: i32, b: i32, c: i32, d: i32) -> bool {
        let outer = Range::half_open(a, b);
        let inner = Range::half_open(c, d);
        outer.subrange(inner) == inner
    }
}
