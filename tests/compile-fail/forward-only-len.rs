extern crate steps;

use steps::{ForwardIndex, Range};

// A pointer-like index that can only move forward.
#[derive(Copy, Clone, PartialEq, Eq)]
struct Link(usize);

static NEXT: [usize; 3] = [2, 3, 1];

impl ForwardIndex for Link {
    fn successor(&self) -> Self { Link(NEXT[self.0]) }
}

fn main() {
    let r = Range::half_open(Link(0), Link(3));
    for _ in r { }
    // Length needs a random access index
    r.len(); //~ ERROR `len`
}
