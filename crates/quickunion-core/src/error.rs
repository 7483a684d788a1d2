//! Error returned by the checked `try_*` operations of [`crate::UnionFind`].
use std::fmt;

/// An element index outside the universe `[0, len)`.
///
/// This is the only failure a union-find can report. The unchecked
/// operations treat it as a caller bug and panic; the checked ones hand it
/// back so callers feeding untrusted indices can report it instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfRange {
    /// The rejected index.
    pub index: usize,
    /// Number of elements in the structure that rejected it.
    pub len: usize,
}

impl fmt::Display for IndexOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index {} out of range for union-find of {} elements",
            self.index, self.len
        )
    }
}

impl std::error::Error for IndexOutOfRange {}
