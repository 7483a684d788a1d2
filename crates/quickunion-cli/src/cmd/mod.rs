/// Command module for the `quickunion` CLI.
///
/// Each submodule implements one subcommand. The `run` function in each
/// module takes the parsed arguments plus an output sink and returns
/// `Ok(())` on success or a [`crate::error::CliError`] on failure.
pub mod components;
pub mod demo;
pub mod run;

use std::io::Write;

use quickunion_core::UnionFind;
use serde::Serialize;

use crate::OutputFormat;
use crate::error::CliError;
use crate::script::{self, Outcome};

/// What a command prints: always the universe size and final component
/// count, plus whichever of query results and groups the command asked for.
#[derive(Debug, Serialize)]
pub struct Report {
    pub size: usize,
    pub components: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<Outcome>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<Vec<usize>>>,
}

impl Report {
    /// Writes the report in `format`, mapping write failures to
    /// [`CliError::IoError`].
    pub fn write<W: Write>(&self, format: OutputFormat, out: &mut W) -> Result<(), CliError> {
        match format {
            OutputFormat::Human => self.write_human(out),
            OutputFormat::Json => self.write_json(out),
        }
        .map_err(|e| CliError::IoError {
            source: "stdout".to_owned(),
            detail: e.to_string(),
        })
    }

    fn write_human<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for outcome in self.results.iter().flatten() {
            writeln!(out, "{outcome}")?;
        }
        for group in self.groups.iter().flatten() {
            let members: Vec<String> = group.iter().map(ToString::to_string).collect();
            writeln!(out, "{{{}}}", members.join(" "))?;
        }
        writeln!(out, "components: {}", self.components)
    }

    fn write_json<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        serde_json::to_writer(&mut *out, self)?;
        writeln!(out)
    }
}

/// Parses `content` as a script and replays it on a fresh [`UnionFind`].
/// Scripts declaring more than `max_elements` elements are rejected before
/// anything is allocated.
fn replay(content: &str, max_elements: usize) -> Result<(UnionFind, Vec<Outcome>), CliError> {
    let script = script::parse(content, max_elements)?;
    tracing::debug!(
        size = script.size,
        steps = script.steps.len(),
        "parsed script"
    );
    let mut uf = UnionFind::new(script.size);
    let outcomes = script::execute(&script, &mut uf)?;
    tracing::info!(
        size = uf.len(),
        components = uf.component_count(),
        "script finished"
    );
    Ok((uf, outcomes))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    fn report() -> Report {
        Report {
            size: 3,
            components: 2,
            results: Some(vec![Outcome::Count { result: 2 }]),
            groups: Some(vec![vec![0, 2], vec![1]]),
        }
    }

    #[test]
    fn human_lists_results_then_groups() {
        let mut buf = Vec::new();
        report()
            .write(OutputFormat::Human, &mut buf)
            .expect("write");
        assert_eq!(
            String::from_utf8(buf).expect("utf8"),
            "count: 2\n{0 2}\n{1}\ncomponents: 2\n"
        );
    }

    #[test]
    fn json_omits_absent_sections() {
        let r = Report {
            results: None,
            ..report()
        };
        let mut buf = Vec::new();
        r.write(OutputFormat::Json, &mut buf).expect("write");
        let value: serde_json::Value = serde_json::from_slice(&buf).expect("json");
        assert_eq!(
            value,
            serde_json::json!({"size": 3, "components": 2, "groups": [[0, 2], [1]]})
        );
    }
}
