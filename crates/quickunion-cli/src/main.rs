mod cli;
mod cmd;
mod error;
mod io;
mod logging;
mod script;

use clap::Parser;

pub use cli::{Cli, Command, OutputFormat, PathOrStdin};
use error::CliError;

fn main() {
    let cli = Cli::parse();
    logging::set_logger(cli.verbose, cli.quiet);

    if let Err(e) = dispatch(&cli) {
        tracing::debug!(exit_code = e.exit_code(), "command failed");
        eprintln!("{}", e.message());
        std::process::exit(e.exit_code());
    }
}

fn dispatch(cli: &Cli) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Command::Demo => cmd::demo::run(cli.format, &mut out),
        Command::Run { file } => {
            let content = io::read_script(file, cli.max_file_size)?;
            cmd::run::run(&content, cli.max_elements, cli.format, &mut out)
        }
        Command::Components { file } => {
            let content = io::read_script(file, cli.max_file_size)?;
            cmd::components::run(&content, cli.max_elements, cli.format, &mut out)
        }
    }
}
