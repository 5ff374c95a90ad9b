//! Positions in a sequence and the cursors that walk them.
//!
//! The crate is built on a small hierarchy of index capabilities, and
//! everything else asks for exactly the tier it needs:
//!
//! - [`ForwardIndex`]: equality and `successor`. Half-open [`Range`]s and
//!   their forward cursor [`RangeIter`] need nothing more.
//! - [`BidirectionalIndex`]: adds `predecessor`, for [`ReverseRange`] and
//!   `DoubleEndedIterator`.
//! - [`RandomAccessIndex`]: adds a signed `Distance`, `distance_to` and
//!   `advanced_by`. This enables O(1) [`Range::len`], the distance based
//!   [`Range::contains`] and the strided cursor [`StridedRangeIter`].
//!
//! The machine integers up to 64 bits implement all three tiers; `char` is
//! bidirectional. Other position types (cursors of some foreign collection,
//! for example) join in by implementing the traits.
//!
//! # Value semantics
//!
//! Ranges and cursors are plain values. Copying a cursor forks it: the copy
//! continues on its own from where the original was. A range is never
//! consumed by iterating it.
//!
//! # Preconditions
//!
//! Misuse is not reported through error values but aborts with a panic
//! (recorded with `log::error!` first):
//!
//! - stepping an integer index past the edge of its type, or `char` past
//!   `char::MAX` or before `'\0'`;
//! - [`Range::closed`] when the maximum has no successor;
//! - `advanced_by` leaving the index domain;
//! - [`Range::by`] with a zero stride, or a stride pointing away from the end
//!   of a nonempty range;
//! - [`Span::to_range`] when `location + length` overflows.
//!
//! Each of them has a fallible counterpart (`try_closed`, `try_by`,
//! `checked_successor`, ...) that returns [`IndexingError`] or `None`
//! instead.
//!
//! # Example
//!
//! ```rust
//! use steps::prelude::*;
//!
//! let r = Range::half_open(0u32, 5);
//! assert_eq!(r.len(), 5);
//! assert!(r.contains(&4) && !r.contains(&5));
//!
//! assert_eq!(r.by(2).collect::<Vec<_>>(), [0, 2, 4]);
//! assert_eq!(r.reversed().into_iter().collect::<Vec<_>>(), [4, 3, 2, 1, 0]);
//! assert_eq!(Range::closed('a', 'c').map(|c| c.to_ascii_uppercase()), ['A', 'B', 'C']);
//! ```
//!
#![doc(html_root_url="https://docs.rs/steps/0.1/")]
#![cfg_attr(not(any(test, feature = "use_std")), no_std)]

extern crate alloc;

#[macro_use]
mod index_error;
pub mod index_traits;
mod range;
mod stride;
mod reverse;
pub mod span;
pub mod prelude;

pub use crate::index_error::IndexingError;

pub use crate::index_traits::{BidirectionalIndex, ForwardIndex, RandomAccessIndex};
pub use crate::range::{count, contains, Range, RangeIter};
pub use crate::stride::StridedRangeIter;
pub use crate::reverse::{ReverseRange, ReverseRangeIter};
pub use crate::span::Span;
