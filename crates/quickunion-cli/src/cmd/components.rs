//! Implementation of `quickunion components <file>`.
//!
//! Replays the script and prints each component as a brace-delimited list
//! of its members, ordered by smallest member. Query results are dropped.
use std::io::Write;

use super::{Report, replay};
use crate::OutputFormat;
use crate::error::CliError;

/// Runs the `components` command on the script text in `content`.
///
/// # Errors
///
/// Same as [`crate::cmd::run::run`].
pub fn run<W: Write>(
    content: &str,
    max_elements: usize,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), CliError> {
    let (mut uf, _) = replay(content, max_elements)?;
    Report {
        size: uf.len(),
        components: uf.component_count(),
        results: None,
        groups: Some(uf.components()),
    }
    .write(format, out)
}
