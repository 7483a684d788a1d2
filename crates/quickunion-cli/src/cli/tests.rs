#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(clippy::wildcard_enum_match_arm)]

use clap::CommandFactory;

use super::*;

#[test]
fn root_help_lists_all_subcommands() {
    let mut cmd = Cli::command();
    let help = format!("{}", cmd.render_help());
    for name in ["demo", "run", "components"] {
        assert!(
            help.contains(name),
            "root help should mention subcommand '{name}'"
        );
    }
}

#[test]
fn root_help_lists_global_flags() {
    let mut cmd = Cli::command();
    let help = format!("{}", cmd.render_help());
    for flag in [
        "--format",
        "--quiet",
        "--verbose",
        "--max-file-size",
        "--max-elements",
        "--help",
        "--version",
    ] {
        assert!(help.contains(flag), "root help should mention '{flag}'");
    }
}

#[test]
fn debug_assert_cli() {
    Cli::command().debug_assert();
}

#[test]
fn run_parses_path_argument() {
    let cli = Cli::try_parse_from(["quickunion", "run", "tiny.txt"]).expect("parses");
    match cli.command {
        Command::Run {
            file: PathOrStdin::Path(p),
        } => assert_eq!(p, PathBuf::from("tiny.txt")),
        _ => panic!("expected run with a path"),
    }
}

#[test]
fn dash_means_stdin() {
    let cli = Cli::try_parse_from(["quickunion", "components", "-"]).expect("parses");
    assert!(matches!(
        cli.command,
        Command::Components {
            file: PathOrStdin::Stdin
        }
    ));
}

#[test]
fn global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["quickunion", "demo", "-f", "json", "-v"]).expect("parses");
    assert!(matches!(cli.format, OutputFormat::Json));
    assert!(cli.verbose);
    assert!(!cli.quiet);
}

#[test]
fn quiet_conflicts_with_verbose() {
    assert!(Cli::try_parse_from(["quickunion", "demo", "-q", "-v"]).is_err());
}

#[test]
fn run_requires_file() {
    assert!(Cli::try_parse_from(["quickunion", "run"]).is_err());
}

#[test]
fn max_file_size_flag() {
    let cli = Cli::try_parse_from(["quickunion", "demo", "--max-file-size", "42"]).expect("parses");
    assert_eq!(cli.max_file_size, 42);
}

#[test]
fn max_elements_flag() {
    let cli = Cli::try_parse_from(["quickunion", "run", "-", "--max-elements", "7"]).expect("parses");
    assert_eq!(cli.max_elements, 7);
}
