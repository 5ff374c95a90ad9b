extern crate steps;

use steps::Range;

fn main() {
    // `char` steps both ways but has no distance
    let r = Range::closed('a', 'z');
    r.reversed();
    r.contains(&'q'); //~ ERROR `contains`
}
