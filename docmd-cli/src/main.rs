use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod error;
mod subcommands;

/// Convert reStructuredText docstrings to Markdown
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert docstrings to Markdown
    Convert(subcommands::convert::Args),

    /// Report which inputs look like reStructuredText
    Detect(subcommands::detect::Args),
}

fn main() -> miette::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // stdout carries the converted documents
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    match args.command {
        Commands::Convert(args) => subcommands::convert::run(&args),
        Commands::Detect(args) => subcommands::detect::run(&args),
    }
}
