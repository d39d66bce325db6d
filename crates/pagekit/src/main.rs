//! pagekit CLI - setup and teardown page composition.
//!
//! Provides commands for:
//! - `render`: Print a page with its inherited setup and teardown includes
//! - `tree`: List every page in the tree

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{RenderArgs, TreeArgs};
use output::Output;

/// pagekit - setup and teardown page composition.
#[derive(Parser)]
#[command(name = "pagekit", version, about)]
struct Cli {
    /// Enable verbose output (log resolved includes).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a page with its setup and teardown includes.
    Render(RenderArgs),
    /// List all pages in the tree.
    Tree(TreeArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info,pagekit_include=debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(&output),
        Commands::Tree(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
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
    fn test_cli_parses_global_verbose() {
        let cli = Cli::try_parse_from(["pagekit", "tree", "-v"]).unwrap();

        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Tree(_)));
    }

    #[test]
    fn test_cli_requires_render_path() {
        assert!(Cli::try_parse_from(["pagekit", "render"]).is_err());
    }
}
