use core::fmt;

/// Error produced when a range or cursor operation is inapplicable: a
/// closed range whose maximum has no successor, a stride that points away
/// from the end of its range, or a span that cannot describe a range.
///
/// Carries no context information (to be as light as possible).
#[derive(Copy, Debug, PartialEq, Eq)]
pub struct IndexingError(());

#[inline]
pub fn index_error() -> IndexingError {
    IndexingError(())
}

impl Clone for IndexingError {
    fn clone(&self) -> Self { *self }
}

impl IndexingError {
    pub fn description(&self) -> &str {
        "index error"
    }
}

impl fmt::Display for IndexingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[cfg(feature = "use_std")]
impl std::error::Error for IndexingError { }

/// Abort on a violated precondition.
///
/// Every fatal condition of the crate goes through here so that it is
/// recorded with `log` before unwinding.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn precondition_failed(args: fmt::Arguments) -> ! {
    log::error!("precondition failed: {}", args);
    panic!("precondition failed: {}", args)
}

macro_rules! precondition_failed {
    ($($t:tt)*) => {
        $crate::index_error::precondition_failed(format_args!($($t)*))
    }
}

#[test]
fn test_display() {
    let e = index_error();
    assert_eq!(e.to_string(), "index error");
    assert_eq!(e, e.clone());
}

#[test]
#[should_panic(expected = "precondition failed: no successor")]
fn test_precondition_failed() {
    precondition_failed!("no {}", "successor");
}
