#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod error;
pub mod union_find;

pub use error::IndexOutOfRange;
pub use union_find::UnionFind;

/// Returns the crate version string (e.g. `"0.1.0"`).
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
