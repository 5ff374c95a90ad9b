extern crate steps;

use steps::Range;

fn main() {
    let r = Range::half_open('a', 'z');
    let _ = r.by(2); //~ ERROR `by`
}
