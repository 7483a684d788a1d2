//! Implementation of `quickunion demo`.
//!
//! Runs a fixed ten-element script: five unions that leave five components,
//! then three connectivity checks. Prints the query results and the final
//! grouping.
use std::io::Write;

use super::{Report, replay};
use crate::OutputFormat;
use crate::error::CliError;
use crate::script::DEFAULT_MAX_ELEMENTS;

/// The walkthrough replayed by `quickunion demo`.
pub const DEMO_SCRIPT: &str = "\
10
union 4 3
union 3 8
union 6 5
union 9 4
union 2 1
count
connected 8 9
connected 5 0
connected 7 0
";

/// Runs the `demo` command.
///
/// # Errors
///
/// Only fails if `out` cannot be written.
pub fn run<W: Write>(format: OutputFormat, out: &mut W) -> Result<(), CliError> {
    let (mut uf, outcomes) = replay(DEMO_SCRIPT, DEFAULT_MAX_ELEMENTS)?;
    Report {
        size: uf.len(),
        components: uf.component_count(),
        results: Some(outcomes),
        groups: Some(uf.components()),
    }
    .write(format, out)
}
