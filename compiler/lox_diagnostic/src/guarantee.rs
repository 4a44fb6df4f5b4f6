//! Proof that an error was reported.

use std::fmt;

/// Type-level proof that at least one error diagnostic was reported.
///
/// Cannot be constructed outside this crate except through
/// [`ErrorGuaranteed::from_error_count`], which refuses a zero count.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ErrorGuaranteed(());

impl ErrorGuaranteed {
    /// Returns `Some` only when `count` is nonzero.
    pub fn from_error_count(count: usize) -> Option<Self> {
        if count > 0 {
            Some(ErrorGuaranteed(()))
        } else {
            None
        }
    }
}

impl fmt::Display for ErrorGuaranteed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("error(s) emitted")
    }
}
