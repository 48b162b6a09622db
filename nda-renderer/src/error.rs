//! Error types for nda-renderer.

use std::path::PathBuf;

use thiserror::Error;

use crate::format::OutputFormat;

/// All errors that can arise from rendering an agreement.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The backend for this format is not available to this renderer.
    #[error("{format} export is not available")]
    FormatUnavailable { format: OutputFormat },

    /// Tera template engine error.
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// PDF backend failure.
    #[error("PDF generation failed: {0}")]
    Pdf(String),

    /// The built-in PDF fonts have no WinAnsiEncoding code for a character.
    #[error(
        "PDF export cannot draw '{character}' (U+{:04X}) in \"{text}\": the built-in Helvetica fonts only cover Windows-1252 characters",
        code_point(.character)
    )]
    UnencodableCharacter { character: char, text: String },

    /// Packaging the word-processor archive failed.
    #[cfg(feature = "docx")]
    #[error("docx packaging failed: {0}")]
    Docx(#[from] zip::result::ZipError),

    /// Filesystem or in-memory write error.
    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn code_point(c: &char) -> u32 {
    u32::from(*c)
}

pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io { path: path.into(), source }
}
