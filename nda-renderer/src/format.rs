//! Output formats, backend availability, and delivery metadata.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// All supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Pdf,
    Docx,
}

impl OutputFormat {
    /// All formats in a stable order.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Text, OutputFormat::Pdf, OutputFormat::Docx]
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Pdf  => "pdf",
            OutputFormat::Docx => "docx",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text/plain",
            OutputFormat::Pdf  => "application/pdf",
            OutputFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }

    /// Label offered in a format picker.
    pub fn label(&self) -> &'static str {
        match self {
            OutputFormat::Text => "Text (.txt)",
            OutputFormat::Pdf  => "PDF (.pdf)",
            OutputFormat::Docx => "Word (.docx)",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Pdf => write!(f, "pdf"),
            OutputFormat::Docx => write!(f, "docx"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches('.').to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "pdf" => Ok(OutputFormat::Pdf),
            "docx" | "word" => Ok(OutputFormat::Docx),
            other => Err(format!("unknown format '{other}'; expected: text, pdf, docx")),
        }
    }
}

// ---------------------------------------------------------------------------
// Capabilities
// ---------------------------------------------------------------------------

/// Which document backends a renderer may use. Text is always available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    pub pdf: bool,
    pub docx: bool,
}

impl Capabilities {
    /// Backends compiled into this build (cargo features `pdf`, `docx`).
    pub fn detect() -> Self {
        Capabilities {
            pdf: cfg!(feature = "pdf"),
            docx: cfg!(feature = "docx"),
        }
    }

    /// Plain text only.
    pub fn text_only() -> Self {
        Capabilities { pdf: false, docx: false }
    }

    pub fn is_available(&self, format: OutputFormat) -> bool {
        match format {
            OutputFormat::Text => true,
            OutputFormat::Pdf => self.pdf && cfg!(feature = "pdf"),
            OutputFormat::Docx => self.docx && cfg!(feature = "docx"),
        }
    }

    /// Formats a caller may offer, in stable order.
    pub fn available_formats(&self) -> Vec<OutputFormat> {
        OutputFormat::all()
            .iter()
            .copied()
            .filter(|f| self.is_available(*f))
            .collect()
    }

    /// `Err(FormatUnavailable)` unless `format` can be rendered.
    pub fn ensure(&self, format: OutputFormat) -> Result<(), RenderError> {
        if self.is_available(format) {
            Ok(())
        } else {
            Err(RenderError::FormatUnavailable { format })
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Capabilities::detect()
    }
}

// ---------------------------------------------------------------------------
// File naming
// ---------------------------------------------------------------------------

/// `SA_NDA_<company>_<yyyymmdd>.<ext>`.
///
/// Spaces and path separators in the company name become underscores.
pub fn output_file_name(company_name: &str, date: NaiveDate, format: OutputFormat) -> String {
    let company: String = company_name
        .trim()
        .chars()
        .map(|c| if c == ' ' || c == '/' || c == '\\' { '_' } else { c })
        .collect();
    format!("SA_NDA_{}_{}.{}", company, date.format("%Y%m%d"), format.extension())
}
