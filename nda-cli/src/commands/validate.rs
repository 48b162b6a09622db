//! `nda validate <file>`: missing fields and inputs no clause uses.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;

use nda_core::{build, load_inputs_at};

/// Check a submission without rendering it.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Submission file (YAML or JSON).
    pub path: PathBuf,
}

impl ValidateArgs {
    pub fn run(self) -> Result<()> {
        let raw = load_inputs_at(&self.path)
            .with_context(|| format!("cannot load submission '{}'", self.path.display()))?;

        let record = match build(&raw) {
            Ok(record) => record,
            Err(err) => {
                eprintln!("{} {}", "✗".red().bold(), "missing required fields:".bold());
                for field in &err.missing_fields {
                    eprintln!("  - {field}");
                }
                bail!(err);
            }
        };

        println!(
            "{} {} between {} and {}",
            "✓".green().bold(),
            record.contract_type().label(),
            record.company().name,
            record.counterparty().name()
        );

        let notes = record.unrendered_inputs();
        if !notes.is_empty() {
            println!("{}", "Collected but not rendered:".yellow().bold());
            for note in notes {
                println!("  {} {note}", "!".yellow());
            }
        }
        Ok(())
    }
}
