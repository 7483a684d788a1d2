/// CLI error types with associated exit codes.
///
/// [`CliError`] is the top-level error type for the `quickunion` binary.
/// Every variant maps to a stable exit code (1 or 2) via
/// [`CliError::exit_code`]:
///
/// - Exit code **2**: input failure. The script could not be read or parsed
///   at all, so no union-find operation ran.
/// - Exit code **1**: logical failure. The script parsed but an instruction
///   named an element outside the universe.
use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// CliError
// ---------------------------------------------------------------------------

/// All error conditions that the `quickunion` CLI can produce.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// A file argument could not be found on the filesystem.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read a file.
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// The input exceeds the configured `--max-file-size` limit.
    FileTooLarge {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// The configured size limit in bytes.
        limit: u64,
        /// The actual size in bytes, if known (`None` for stdin).
        actual: Option<u64>,
    },

    /// The input bytes are not valid UTF-8.
    InvalidUtf8 {
        /// A human-readable label for the source.
        source: String,
        /// The byte offset of the first invalid byte sequence.
        byte_offset: usize,
    },

    /// An I/O error occurred while reading from stdin.
    StdinReadError {
        /// The underlying I/O error message.
        detail: String,
    },

    /// A generic I/O error not covered by the more specific variants above.
    IoError {
        /// A human-readable label for the source or sink.
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// The script text is malformed.
    ScriptSyntax {
        /// 1-based line number of the offending line (0 when the script is
        /// empty).
        line: usize,
        /// What was wrong with it.
        detail: String,
    },

    // --- Exit code 1: logical failures ---
    /// An instruction referenced an element outside `[0, len)`.
    IndexOutOfRange {
        /// 1-based line number of the instruction.
        line: usize,
        /// The index as written in the script; may be negative.
        index: i64,
        /// Universe size declared by the script.
        len: usize,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    ///
    /// - `2`: input failure (file not found, syntax error, etc.).
    /// - `1`: logical failure (index out of range).
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. }
            | Self::ScriptSyntax { .. } => 2,

            Self::IndexOutOfRange { .. } => 1,
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("error: file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                format!("error: permission denied: {}", path.display())
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: Some(actual),
            } => {
                format!("error: file too large: {source} is {actual} bytes, limit is {limit} bytes")
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: None,
            } => {
                format!("error: file too large: {source} exceeded limit of {limit} bytes")
            }
            Self::InvalidUtf8 {
                source,
                byte_offset,
            } => {
                format!(
                    "error: invalid UTF-8 in {source}: first invalid byte at offset {byte_offset}"
                )
            }
            Self::StdinReadError { detail } => {
                format!("error: failed to read stdin: {detail}")
            }
            Self::IoError { source, detail } => {
                format!("error: I/O error on {source}: {detail}")
            }
            Self::ScriptSyntax { line, detail } => {
                format!("error: line {line}: {detail}")
            }
            Self::IndexOutOfRange { line, index, len } => {
                format!("error: line {line}: index {index} out of range for {len} elements")
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    // ── exit_code ────────────────────────────────────────────────────────────

    #[test]
    fn file_not_found_is_exit_2() {
        let e = CliError::FileNotFound {
            path: PathBuf::from("pairs.txt"),
        };
        assert_eq!(e.exit_code(), 2);
    }

    #[test]
    fn file_too_large_is_exit_2() {
        let e = CliError::FileTooLarge {
            source: "big.txt".to_owned(),
            limit: 1024,
            actual: Some(2048),
        };
        assert_eq!(e.exit_code(), 2);
    }

    #[test]
    fn script_syntax_is_exit_2() {
        let e = CliError::ScriptSyntax {
            line: 3,
            detail: "unknown instruction \"merge\"".to_owned(),
        };
        assert_eq!(e.exit_code(), 2);
    }

    #[test]
    fn index_out_of_range_is_exit_1() {
        let e = CliError::IndexOutOfRange {
            line: 2,
            index: -1,
            len: 10,
        };
        assert_eq!(e.exit_code(), 1);
    }

    // ── message content ──────────────────────────────────────────────────────

    #[test]
    fn file_not_found_message_contains_path() {
        let e = CliError::FileNotFound {
            path: PathBuf::from("tiny.txt"),
        };
        let msg = e.message();
        assert!(msg.contains("tiny.txt"), "message: {msg}");
        assert!(msg.contains("not found"), "message: {msg}");
    }

    #[test]
    fn file_too_large_without_actual_mentions_limit() {
        let e = CliError::FileTooLarge {
            source: "-".to_owned(),
            limit: 512,
            actual: None,
        };
        assert!(e.message().contains("512"));
    }

    #[test]
    fn index_out_of_range_message_keeps_sign() {
        let e = CliError::IndexOutOfRange {
            line: 4,
            index: -3,
            len: 10,
        };
        let msg = e.message();
        assert!(msg.contains("line 4"), "message: {msg}");
        assert!(msg.contains("-3"), "message: {msg}");
        assert!(msg.contains("10 elements"), "message: {msg}");
    }

    #[test]
    fn display_matches_message() {
        let e = CliError::ScriptSyntax {
            line: 1,
            detail: "missing universe size".to_owned(),
        };
        assert_eq!(format!("{e}"), e.message());
    }
}
