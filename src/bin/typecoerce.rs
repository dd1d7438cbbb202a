//! typecoerce: convert JSON values to a target type from the command line
//!
//! ## Commands
//!
//! - **convert**: lenient conversion, repairing mismatches
//! - **match**: strict matching, failing on the first mismatch
//! - **inspect**: show how a type descriptor decomposes
//!
//! ## Example Usage
//!
//! ```bash
//! # Repair form input
//! typecoerce convert --type 'dict[str, list[int]]' --value '{"ids": "[1, 2]"}'
//!
//! # Check a payload read from stdin
//! cat payload.json | typecoerce match --type 'list[Optional[float]]' --json-file -
//!
//! # Decompose a descriptor
//! typecoerce inspect --type 'Union[int, str]' --json
//! ```

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod coerce_cli;

use coerce_cli::{
    convert::ConvertCmd,
    inspect::InspectCmd,
    output::format_error,
};

#[derive(Parser)]
#[command(
    name = "typecoerce",
    author,
    version,
    about = "Best-effort coercion of JSON values to a target type",
    long_about = "Converts loosely-typed JSON values to a target type descriptor.\n\n\
                  Descriptors use annotation syntax: int, list[str], Dict[str, Optional[int]], int | None."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON instead of human-readable format
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (debug-level tracing on stderr)
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a value leniently, repairing mismatches
    Convert(ConvertCmd),

    /// Check a value strictly against a type
    Match(ConvertCmd),

    /// Show the origin and type arguments of a descriptor
    Inspect(InspectCmd),
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let Cli {
        command,
        json,
        verbose,
    } = Cli::parse();
    init_tracing(verbose);

    let result = match command {
        Commands::Convert(cmd) => cmd.execute(typecoerce::Mode::Lenient, json),
        Commands::Match(cmd) => cmd.execute(typecoerce::Mode::Strict, json),
        Commands::Inspect(cmd) => cmd.execute(json),
    };

    if let Err(err) = result {
        eprint!("{}", format_error(&err, json));
        std::process::exit(1);
    }
}
