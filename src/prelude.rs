//! Import the index traits and the range types in one go.

pub use crate::index_traits::{BidirectionalIndex, ForwardIndex, RandomAccessIndex};
pub use crate::{Range, ReverseRange, Span};
