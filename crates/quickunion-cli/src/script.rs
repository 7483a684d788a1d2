//! Line-oriented union-find scripts.
//!
//! ```text
//! # comments and blank lines are skipped
//! 10            universe size, must come first
//! union 4 3     merge (a bare "4 3" pair means the same)
//! connected 8 9
//! find 3
//! size 3
//! count
//! ```
//!
//! Indices are parsed as `i64` so that a negative index survives parsing and
//! is rejected by the range check with the same error as one that is too
//! large.
use quickunion_core::{IndexOutOfRange, UnionFind};
use serde::Serialize;

use crate::error::CliError;

/// Largest universe a script may declare unless `--max-elements` says
/// otherwise.
pub const DEFAULT_MAX_ELEMENTS: usize = 100_000_000;

/// One executable instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Union(i64, i64),
    Connected(i64, i64),
    Find(i64),
    Size(i64),
    Count,
}

/// An instruction with the 1-based line it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub line: usize,
    pub instruction: Instruction,
}

/// A parsed script: the universe size followed by its steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    pub size: usize,
    pub steps: Vec<Step>,
}

/// The answer to a query instruction. Unions produce no outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Outcome {
    Connected { p: usize, q: usize, result: bool },
    Find { p: usize, result: usize },
    Size { p: usize, result: usize },
    Count { result: usize },
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connected { p, q, result } => write!(f, "connected {p} {q}: {result}"),
            Self::Find { p, result } => write!(f, "find {p}: {result}"),
            Self::Size { p, result } => write!(f, "size {p}: {result}"),
            Self::Count { result } => write!(f, "count: {result}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parses script text.
///
/// # Errors
///
/// Returns [`CliError::ScriptSyntax`] for a missing or malformed universe
/// size, a universe larger than `max_elements`, an unknown instruction, a wrong operand count, or an operand that
/// is not an integer.
pub fn parse(text: &str, max_elements: usize) -> Result<Script, CliError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, raw)| (i + 1, raw.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

    let Some((size_line, size_text)) = lines.next() else {
        return Err(CliError::ScriptSyntax {
            line: 0,
            detail: "missing universe size".to_owned(),
        });
    };
    let size = size_text
        .parse::<usize>()
        .map_err(|_| CliError::ScriptSyntax {
            line: size_line,
            detail: format!("expected a non-negative universe size, got {size_text:?}"),
        })?;
    if size > max_elements {
        return Err(CliError::ScriptSyntax {
            line: size_line,
            detail: format!("universe size {size} exceeds the limit of {max_elements} elements"),
        });
    }

    let steps = lines
        .map(|(line, text)| parse_step(line, text))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Script { size, steps })
}

fn parse_step(line: usize, text: &str) -> Result<Step, CliError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let syntax = |detail: String| CliError::ScriptSyntax { line, detail };

    let (keyword, operands) = match tokens.split_first() {
        Some((first, rest)) if first.parse::<i64>().is_err() => (*first, rest),
        Some(_) | None => ("union", tokens.as_slice()),
    };

    let arity = match keyword {
        "union" | "connected" => 2,
        "find" | "size" => 1,
        "count" => 0,
        other => return Err(syntax(format!("unknown instruction {other:?}"))),
    };
    if operands.len() != arity {
        return Err(syntax(format!(
            "{keyword} takes {arity} operand(s), got {}",
            operands.len()
        )));
    }

    let mut values = Vec::with_capacity(arity);
    for operand in operands {
        let value = operand
            .parse::<i64>()
            .map_err(|_| syntax(format!("expected an integer index, got {operand:?}")))?;
        values.push(value);
    }

    let instruction = match (keyword, values.as_slice()) {
        ("union", &[p, q]) => Instruction::Union(p, q),
        ("connected", &[p, q]) => Instruction::Connected(p, q),
        ("find", &[p]) => Instruction::Find(p),
        ("size", &[p]) => Instruction::Size(p),
        ("count", &[]) => Instruction::Count,
        _ => return Err(syntax(format!("malformed {keyword} instruction"))),
    };
    Ok(Step { line, instruction })
}

// ---------------------------------------------------------------------------
// Execution
// ---------------------------------------------------------------------------

/// Runs every step of `script` against `uf`, collecting query outcomes.
///
/// Execution stops at the first out-of-range index; steps before it have
/// already been applied.
///
/// # Errors
///
/// Returns [`CliError::IndexOutOfRange`] naming the offending line.
pub fn execute(script: &Script, uf: &mut UnionFind) -> Result<Vec<Outcome>, CliError> {
    let mut outcomes = Vec::new();
    let mut unions = 0usize;
    let len = uf.len();

    for step in &script.steps {
        let at = |index: i64| element(step.line, index, len);
        match step.instruction {
            Instruction::Union(p, q) => {
                let (p, q) = (at(p)?, at(q)?);
                let root = uf.try_union(p, q).map_err(|e| out_of_range(step.line, e))?;
                tracing::trace!(line = step.line, p, q, root, "union");
                unions += 1;
            }
            Instruction::Connected(p, q) => {
                let (p, q) = (at(p)?, at(q)?);
                let result = uf
                    .try_connected(p, q)
                    .map_err(|e| out_of_range(step.line, e))?;
                outcomes.push(Outcome::Connected { p, q, result });
            }
            Instruction::Find(p) => {
                let p = at(p)?;
                let result = uf.try_find(p).map_err(|e| out_of_range(step.line, e))?;
                outcomes.push(Outcome::Find { p, result });
            }
            Instruction::Size(p) => {
                let p = at(p)?;
                let result = uf
                    .try_component_size(p)
                    .map_err(|e| out_of_range(step.line, e))?;
                outcomes.push(Outcome::Size { p, result });
            }
            Instruction::Count => outcomes.push(Outcome::Count {
                result: uf.component_count(),
            }),
        }
    }

    tracing::debug!(
        steps = script.steps.len(),
        unions,
        queries = outcomes.len(),
        "script executed"
    );
    Ok(outcomes)
}

/// Converts a script index to an element, rejecting negatives the same way
/// the union-find rejects indices past the end.
fn element(line: usize, index: i64, len: usize) -> Result<usize, CliError> {
    usize::try_from(index).map_err(|_| CliError::IndexOutOfRange { line, index, len })
}

fn out_of_range(line: usize, e: IndexOutOfRange) -> CliError {
    CliError::IndexOutOfRange {
        line,
        index: i64::try_from(e.index).unwrap_or(i64::MAX),
        len: e.len,
    }
}
