//! `nda init <file> [--type ...] [--force]`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use nda_core::write_sample_at;

use super::super::ContractTypeArg;

/// Write a sample submission file to fill in.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Where to write the submission (YAML).
    pub path: PathBuf,

    /// Agreement flavour: employee | contractor | mutual.
    #[arg(long = "type", short = 't', value_name = "TYPE", default_value = "employee")]
    pub contract_type: ContractTypeArg,

    /// Replace an existing file.
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    pub fn run(self) -> Result<()> {
        if self.force && self.path.exists() {
            std::fs::remove_file(&self.path)
                .with_context(|| format!("cannot replace '{}'", self.path.display()))?;
        }

        let contract_type = self.contract_type.into();
        let sample = write_sample_at(&self.path, contract_type)
            .with_context(|| format!("failed to write sample to '{}'", self.path.display()))?;

        println!(
            "{} Wrote sample {} submission to {}",
            "✓".green().bold(),
            sample.contract_type.label(),
            self.path.display()
        );
        println!("  Edit it, then run: nda generate {}", self.path.display());
        Ok(())
    }
}
