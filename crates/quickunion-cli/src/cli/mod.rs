//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Environment variable consulted for `--max-file-size`.
pub const MAX_FILE_SIZE_ENV: &str = "QUICKUNION_MAX_FILE_SIZE";

/// Environment variable consulted for `--max-elements`.
pub const MAX_ELEMENTS_ENV: &str = "QUICKUNION_MAX_ELEMENTS";

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// One line per result (default).
    Human,
    /// A single JSON object.
    Json,
}

/// All top-level subcommands exposed by the `quickunion` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Run the ten-element walkthrough and print its results.
    Demo,

    /// Execute a union-find script and print every query result.
    Run {
        /// Path to a script file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },

    /// Execute a union-find script and print the resulting components.
    Components {
        /// Path to a script file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },
}

/// Root CLI struct for the `quickunion` binary.
///
/// Global flags are marked `global = true` so clap accepts them before or
/// after the subcommand.
#[derive(Parser)]
#[command(
    name = "quickunion",
    version,
    about = "Weighted quick-union driver",
    long_about = "Replays union-find scripts against a weighted quick-union with\n\
                  path halving and reports connectivity queries and components."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Only log errors (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log debug events to stderr (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Maximum script size in bytes.
    ///
    /// Can also be set via the `QUICKUNION_MAX_FILE_SIZE` environment
    /// variable; the flag wins. Default: 16777216 (16 MiB).
    #[arg(
        long,
        global = true,
        env = MAX_FILE_SIZE_ENV,
        default_value = "16777216"
    )]
    pub max_file_size: u64,

    /// Largest universe size a script may declare.
    ///
    /// Can also be set via the `QUICKUNION_MAX_ELEMENTS` environment
    /// variable; the flag wins. Default: 100000000.
    #[arg(
        long,
        global = true,
        env = MAX_ELEMENTS_ENV,
        default_value = "100000000"
    )]
    pub max_elements: usize,
}

#[cfg(test)]
mod tests;
