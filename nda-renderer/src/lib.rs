//! # nda-renderer
//!
//! Turns a validated [`nda_core::ContractRecord`] into a South African NDA in
//! plain text, PDF or `.docx`. Clause wording lives in [`clauses`] only; each
//! format adapter renders the same [`Document`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use nda_core::{build, ContractType, RawInputs};
//! use nda_renderer::{OutputFormat, Renderer};
//!
//! fn render_sample() -> Result<(), Box<dyn std::error::Error>> {
//!     let record = build(&RawInputs::sample(ContractType::Employee))?;
//!     let renderer = Renderer::new()?;
//!     for format in renderer.available_formats() {
//!         let rendered = renderer.render(&record, format)?;
//!         let name = rendered.file_name(&record.company().name);
//!         std::fs::write(name, rendered.output.as_bytes())?;
//!     }
//!     Ok(())
//! }
//! ```

pub mod clauses;
pub mod document;
#[cfg(feature = "docx")]
pub mod docx;
pub mod engine;
pub mod error;
pub mod format;
#[cfg(feature = "pdf")]
pub mod pdf;
pub mod text;

pub use document::{content_words, Block, Document, ListStyle, Run};
pub use engine::{FormatAdapter, RenderedAgreement, RenderedOutput, Renderer};
pub use error::RenderError;
pub use format::{output_file_name, Capabilities, OutputFormat};
