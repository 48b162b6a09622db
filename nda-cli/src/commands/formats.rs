//! `nda formats [--json]`

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use nda_renderer::{Capabilities, OutputFormat};

/// List output formats and their availability in this build.
#[derive(Args, Debug)]
pub struct FormatsArgs {
    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct FormatJson {
    format: OutputFormat,
    label: &'static str,
    extension: &'static str,
    mime_type: &'static str,
    available: bool,
}

#[derive(Tabled)]
struct FormatRow {
    #[tabled(rename = "format")]
    format: String,
    #[tabled(rename = "extension")]
    extension: String,
    #[tabled(rename = "mime type")]
    mime_type: String,
    #[tabled(rename = "available")]
    available: String,
}

impl FormatsArgs {
    pub fn run(self) -> Result<()> {
        let caps = Capabilities::detect();
        let formats: Vec<FormatJson> = OutputFormat::all()
            .iter()
            .map(|&format| FormatJson {
                format,
                label: format.label(),
                extension: format.extension(),
                mime_type: format.mime_type(),
                available: caps.is_available(format),
            })
            .collect();

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&formats).context("failed to serialize formats JSON")?
            );
            return Ok(());
        }

        let rows: Vec<FormatRow> = formats
            .into_iter()
            .map(|f| FormatRow {
                format: f.label.to_string(),
                extension: format!(".{}", f.extension),
                mime_type: f.mime_type.to_string(),
                available: if f.available {
                    "yes".green().to_string()
                } else {
                    "no".red().to_string()
                },
            })
            .collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
        Ok(())
    }
}
