//! CLI argument parsing for the options inspector.
//!
//! The CLI is a thin wrapper around the library; it never stores encoded text.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "reproopts",
    version,
    about = "Inspect, validate, and enumerate reproducer options strings",
    after_help = "Examples:\n  reproopts parse '{Threaded:true Collide:true ...}' --check\n  reproopts check '{Threaded:true Collide:true ...}'\n  reproopts serialize opts.json\n  reproopts enumerate --all\n  reproopts fields",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Parse(ParseArgs),
    Check(CheckArgs),
    Serialize(SerializeArgs),
    Enumerate(EnumerateArgs),
    /// Print the field descriptor table
    Fields,
}

/// Parse command inputs.
#[derive(Parser, Debug)]
#[command(about = "Parse an options string and print it as JSON")]
pub struct ParseArgs {
    /// Options text, canonical or legacy
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Also validate the parsed record
    #[arg(long)]
    pub check: bool,
}

#[derive(Parser, Debug)]
#[command(about = "Parse and validate an options string")]
pub struct CheckArgs {
    /// Options text, canonical or legacy
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Serialize command inputs.
#[derive(Parser, Debug)]
#[command(about = "Print the canonical text for a JSON options record")]
pub struct SerializeArgs {
    /// JSON file holding the record, or '-' for stdin
    #[arg(value_name = "PATH")]
    pub input: PathBuf,

    /// Refuse to print records that fail validation
    #[arg(long)]
    pub check: bool,
}

#[derive(Parser, Debug)]
#[command(about = "Print every valid options record, one per line")]
pub struct EnumerateArgs {
    /// Full cross product instead of single-field variation
    #[arg(long)]
    pub all: bool,
}
