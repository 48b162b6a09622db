//! nda — South African NDA generator CLI.
//!
//! # Usage
//!
//! ```text
//! nda init <file> [--type employee|contractor|mutual] [--force]
//! nda validate <file>
//! nda generate <file> [--format text|pdf|docx]... [--all] [--out-dir <dir>] [--date <yyyy-mm-dd>] [--stdout]
//! nda formats [--json]
//! ```

mod commands;
mod logging;

use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    formats::FormatsArgs, generate::GenerateArgs, init::InitArgs, validate::ValidateArgs,
};
use nda_core::ContractType;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "nda",
    version,
    about = "Generate South African non-disclosure agreements as text, PDF or Word documents",
    long_about = None,
)]
struct Cli {
    /// Log derived defaults and render details to stderr.
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a sample submission file to fill in.
    Init(InitArgs),

    /// Check a submission for missing fields and unused inputs.
    Validate(ValidateArgs),

    /// Render a submission into one or more agreement files.
    Generate(GenerateArgs),

    /// List output formats and whether this build can produce them.
    Formats(FormatsArgs),
}

// ---------------------------------------------------------------------------
// Shared ContractType argument, parsed from CLI strings
// ---------------------------------------------------------------------------

/// Thin wrapper so clap can parse `ContractType` from CLI args.
#[derive(Debug, Clone, Default)]
pub struct ContractTypeArg(pub ContractType);

impl FromStr for ContractTypeArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.parse::<ContractType>().map(Self)
    }
}

impl fmt::Display for ContractTypeArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<ContractTypeArg> for ContractType {
    fn from(c: ContractTypeArg) -> Self {
        c.0
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);
    match cli.command {
        Commands::Init(args) => args.run(),
        Commands::Validate(args) => args.run(),
        Commands::Generate(args) => args.run(),
        Commands::Formats(args) => args.run(),
    }
}
