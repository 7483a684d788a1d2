//! Implementation of `quickunion run <file>`.
//!
//! Replays the script and prints every query result followed by the final
//! component count.
use std::io::Write;

use super::{Report, replay};
use crate::OutputFormat;
use crate::error::CliError;

/// Runs the `run` command on the script text in `content`.
///
/// # Errors
///
/// - [`CliError`] exit code 2 if the script is malformed or declares more
///   than `max_elements` elements.
/// - [`CliError`] exit code 1 if an instruction names an element outside the
///   universe.
pub fn run<W: Write>(
    content: &str,
    max_elements: usize,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), CliError> {
    let (uf, outcomes) = replay(content, max_elements)?;
    Report {
        size: uf.len(),
        components: uf.component_count(),
        results: Some(outcomes),
        groups: None,
    }
    .write(format, out)
}
