//! Tokensmith - design-token compiler for CSS and Tailwind themes.

use clap::{Parser, Subcommand};
use tokensmith::cli::{GenerateArgs, InspectArgs};
use tokensmith::constants::APP_BINARY_NAME;

/// Tokensmith - compile variable snapshots into theme artifacts
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate CSS and Tailwind theme files from a variable snapshot
    Generate(GenerateArgs),
    /// List the color variables of a snapshot in compilation order
    Inspect(InspectArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Command::Generate(args) => args.execute(),
        Command::Inspect(args) => args.execute(),
    };

    if let Err(error) = result {
        eprintln!("Error: {error}");
        std::process::exit(error.exit_code());
    }
}
