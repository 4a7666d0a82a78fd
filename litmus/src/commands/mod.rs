mod check;
mod coerce;
mod completions;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use coerce::CoerceCommand;
use completions::CompletionsCommand;
use eyre::Result;

/// Extension trait for exiting on library errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T, E> UnwrapOrExit<T> for std::result::Result<T, Box<E>>
where
    E: miette::Diagnostic + Send + Sync + 'static,
{
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "litmus")]
#[command(version)]
#[command(about = "Coerce literals against types declared in litmus.toml")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Coerce(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Coerce a JSON-encoded literal against a declared type
    Coerce(CoerceCommand),

    /// Validate litmus.toml and list the declared types
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_coerce_rejects_bad_type_syntax() {
        let result = Cli::try_parse_from(["litmus", "coerce", "--type", "[Int", "--literal", "-"]);
        assert!(result.is_err());
    }
}
