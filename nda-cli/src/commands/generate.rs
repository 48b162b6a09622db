//! `nda generate <file> [--format ...]... [--all] [--out-dir <dir>] [--date <yyyy-mm-dd>] [--stdout]`

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::Args;
use colored::Colorize;

use nda_core::{build, load_inputs_at, ContractRecord};
use nda_renderer::{OutputFormat, RenderedAgreement, Renderer};

/// Render a submission into agreement files.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Submission file (YAML or JSON).
    pub path: PathBuf,

    /// Output format: text | pdf | docx. Repeatable.
    #[arg(long, short = 'f', value_name = "FORMAT", default_value = "text")]
    pub format: Vec<OutputFormat>,

    /// Render every format this build supports.
    #[arg(long, conflicts_with = "format")]
    pub all: bool,

    /// Directory to write files into.
    #[arg(long, short = 'o', value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Agreement date (defaults to today).
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,

    /// Print the text rendering to stdout instead of writing a file.
    #[arg(long, conflicts_with_all = ["all", "out_dir"])]
    pub stdout: bool,
}

impl GenerateArgs {
    pub fn run(self) -> Result<()> {
        let raw = load_inputs_at(&self.path)
            .with_context(|| format!("cannot load submission '{}'", self.path.display()))?;
        let record = build(&raw)?;
        let renderer = Renderer::new().context("failed to initialise renderer")?;

        if self.stdout {
            if self.format.iter().any(|f| *f != OutputFormat::Text) {
                bail!("--stdout only supports the text format");
            }
            let date = self.date.unwrap_or_else(|| chrono::Local::now().date_naive());
            let text = renderer.render_text(&record, date)?;
            std::io::stdout()
                .write_all(text.as_bytes())
                .context("failed to write to stdout")?;
            return Ok(());
        }

        let formats = if self.all { renderer.available_formats() } else { dedup(self.format) };
        tracing::debug!(?formats, date = ?self.date, "rendering submission");
        let rendered = render(&renderer, &record, &formats, self.date)?;

        std::fs::create_dir_all(&self.out_dir)
            .with_context(|| format!("cannot create '{}'", self.out_dir.display()))?;
        for agreement in &rendered {
            let target = self.out_dir.join(agreement.file_name(&record.company().name));
            write_atomic(&target, agreement.output.as_bytes())?;
            tracing::debug!(
                format = %agreement.format,
                path = %target.display(),
                bytes = agreement.output.len(),
                "agreement written"
            );
            println!(
                "{} {} {} ({} bytes)",
                "✓".green().bold(),
                agreement.format.label(),
                target.display(),
                agreement.output.len()
            );
        }

        for note in record.unrendered_inputs() {
            println!("  {} {note}", "!".yellow());
        }
        Ok(())
    }
}

fn render(
    renderer: &Renderer,
    record: &ContractRecord,
    formats: &[OutputFormat],
    date: Option<NaiveDate>,
) -> Result<Vec<RenderedAgreement>> {
    let rendered = match date {
        Some(date) => formats
            .iter()
            .map(|&format| renderer.render_on(record, format, date))
            .collect::<Result<Vec<_>, _>>()?,
        None => renderer.render_many(record, formats)?,
    };
    Ok(rendered)
}

fn dedup(formats: Vec<OutputFormat>) -> Vec<OutputFormat> {
    let mut out = Vec::with_capacity(formats.len());
    for format in formats {
        if !out.contains(&format) {
            out.push(format);
        }
    }
    out
}

/// Write flow: `.tmp` sibling, then rename over the target.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut tmp_name = path.file_name().unwrap_or(path.as_os_str()).to_os_string();
    tmp_name.push(".tmp");
    let tmp = path.with_file_name(tmp_name);
    std::fs::write(&tmp, bytes).with_context(|| format!("cannot write '{}'", tmp.display()))?;
    std::fs::rename(&tmp, path).with_context(|| format!("cannot write '{}'", path.display()))?;
    Ok(())
}
