//! Rendering engine: embedded templates, the [`FormatAdapter`] seam and the
//! [`Renderer`] that dispatches a [`ContractRecord`] to the right adapter.
//!
//! | Format | Adapter              | Backend                | Output   |
//! |--------|----------------------|------------------------|----------|
//! | Text   | [`TextAdapter`]      | Tera                   | `String` |
//! | Pdf    | `PdfAdapter`         | printpdf (feature `pdf`)   | bytes |
//! | Docx   | `DocxAdapter`        | Tera + zip (feature `docx`) | bytes |

use chrono::{Local, NaiveDate};
use tera::Tera;

use nda_core::ContractRecord;

use crate::clauses;
use crate::document::Document;
use crate::error::RenderError;
use crate::format::{output_file_name, Capabilities, OutputFormat};
use crate::text::TextAdapter;

// ---------------------------------------------------------------------------
// Embedded templates, baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

const TPLS: &[(&str, &str)] = &[
    ("text/agreement.txt", include_str!("templates/text/agreement.txt.tera")),
    ("docx/document.xml", include_str!("templates/docx/document.xml.tera")),
];

pub(crate) fn build_tera() -> Result<Tera, RenderError> {
    let mut tera = Tera::default();
    // Only the XML part gets escaped; the text template must stay verbatim.
    tera.autoescape_on(vec![".xml"]);
    tera.add_raw_templates(TPLS.iter().copied())?;
    Ok(tera)
}

// ---------------------------------------------------------------------------
// Adapter seam
// ---------------------------------------------------------------------------

/// What an adapter hands back: text for the text format, bytes otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedOutput {
    Text(String),
    Binary(Vec<u8>),
}

impl RenderedOutput {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            RenderedOutput::Text(s) => s.as_bytes(),
            RenderedOutput::Binary(b) => b,
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            RenderedOutput::Text(s) => s.into_bytes(),
            RenderedOutput::Binary(b) => b,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            RenderedOutput::Text(s) => Some(s),
            RenderedOutput::Binary(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A backend that turns a resolved [`Document`] into one output format.
///
/// Adapters only decide markup; all wording comes from the document.
pub trait FormatAdapter {
    fn format(&self) -> OutputFormat;
    fn render(&self, doc: &Document) -> Result<RenderedOutput, RenderError>;
}

/// One rendered agreement plus the metadata a delivery layer needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedAgreement {
    pub format: OutputFormat,
    pub agreement_date: NaiveDate,
    pub output: RenderedOutput,
}

impl RenderedAgreement {
    /// `SA_NDA_<company>_<yyyymmdd>.<ext>` for this output.
    pub fn file_name(&self, company_name: &str) -> String {
        output_file_name(company_name, self.agreement_date, self.format)
    }

    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Renders contract records into any available [`OutputFormat`].
///
/// Holds the compiled templates and the capability set only; create once
/// with [`Renderer::new`] and reuse.
pub struct Renderer {
    tera: Tera,
    capabilities: Capabilities,
}

impl Renderer {
    /// Renderer with every backend compiled into this build.
    pub fn new() -> Result<Self, RenderError> {
        Self::with_capabilities(Capabilities::detect())
    }

    /// Renderer restricted to `capabilities`.
    pub fn with_capabilities(capabilities: Capabilities) -> Result<Self, RenderError> {
        Ok(Renderer { tera: build_tera()?, capabilities })
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn available_formats(&self) -> Vec<OutputFormat> {
        self.capabilities.available_formats()
    }

    /// Resolved clause text for `record` without any format markup.
    pub fn document(&self, record: &ContractRecord, agreement_date: NaiveDate) -> Document {
        clauses::assemble(record, agreement_date)
    }

    /// Render `record` dated today (local time).
    pub fn render(
        &self,
        record: &ContractRecord,
        format: OutputFormat,
    ) -> Result<RenderedAgreement, RenderError> {
        self.render_on(record, format, Local::now().date_naive())
    }

    /// Render `record` with an explicit agreement date.
    pub fn render_on(
        &self,
        record: &ContractRecord,
        format: OutputFormat,
        agreement_date: NaiveDate,
    ) -> Result<RenderedAgreement, RenderError> {
        self.capabilities.ensure(format)?;
        let doc = self.document(record, agreement_date);
        let output = self.render_document(&doc, format)?;
        tracing::debug!(%format, bytes = output.len(), "agreement rendered");
        Ok(RenderedAgreement { format, agreement_date, output })
    }

    /// Render several formats of one agreement, all stamped with the same date.
    ///
    /// Fails on the first unavailable format before rendering anything.
    pub fn render_many(
        &self,
        record: &ContractRecord,
        formats: &[OutputFormat],
    ) -> Result<Vec<RenderedAgreement>, RenderError> {
        for format in formats {
            self.capabilities.ensure(*format)?;
        }
        let agreement_date = Local::now().date_naive();
        let doc = self.document(record, agreement_date);
        formats
            .iter()
            .map(|&format| {
                let output = self.render_document(&doc, format)?;
                Ok(RenderedAgreement { format, agreement_date, output })
            })
            .collect()
    }

    /// Text rendering dated `agreement_date`.
    pub fn render_text(
        &self,
        record: &ContractRecord,
        agreement_date: NaiveDate,
    ) -> Result<String, RenderError> {
        TextAdapter::new(&self.tera).render_string(&self.document(record, agreement_date))
    }

    fn render_document(
        &self,
        doc: &Document,
        format: OutputFormat,
    ) -> Result<RenderedOutput, RenderError> {
        match format {
            OutputFormat::Text => TextAdapter::new(&self.tera).render(doc),
            #[cfg(feature = "pdf")]
            OutputFormat::Pdf => crate::pdf::PdfAdapter::new().render(doc),
            #[cfg(feature = "docx")]
            OutputFormat::Docx => crate::docx::DocxAdapter::new(&self.tera).render(doc),
            #[allow(unreachable_patterns)]
            _ => Err(RenderError::FormatUnavailable { format }),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use nda_core::{build, ContractType, RawInputs};

    fn record(contract_type: ContractType) -> ContractRecord {
        build(&RawInputs::sample(contract_type)).expect("sample inputs are valid")
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn renderer_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Renderer>();
    }

    #[test]
    fn embedded_templates_compile() {
        let tera = build_tera().expect("templates compile");
        let names: Vec<&str> = tera.get_template_names().collect();
        assert!(names.contains(&"text/agreement.txt"));
        assert!(names.contains(&"docx/document.xml"));
    }

    #[test]
    fn text_render_is_dated_and_named() {
        let renderer = Renderer::new().unwrap();
        let rendered = renderer
            .render_on(&record(ContractType::Employee), OutputFormat::Text, date())
            .unwrap();
        let text = rendered.output.as_text().expect("text output");
        assert!(text.contains("THIS AGREEMENT is made on 15 March 2024"));
        assert_eq!(rendered.file_name("ABC (Pty) Ltd"), "SA_NDA_ABC_(Pty)_Ltd_20240315.txt");
        assert_eq!(rendered.mime_type(), "text/plain");
    }

    #[test]
    fn text_only_refuses_binary_formats() {
        let renderer = Renderer::with_capabilities(Capabilities::text_only()).unwrap();
        let rec = record(ContractType::Contractor);
        for format in [OutputFormat::Pdf, OutputFormat::Docx] {
            assert!(matches!(
                renderer.render_on(&rec, format, date()),
                Err(RenderError::FormatUnavailable { format: f }) if f == format
            ));
        }
        assert!(renderer.render_on(&rec, OutputFormat::Text, date()).is_ok());
    }

    #[test]
    fn render_many_rejects_before_rendering() {
        let renderer = Renderer::with_capabilities(Capabilities::text_only()).unwrap();
        let err = renderer
            .render_many(&record(ContractType::Mutual), &[OutputFormat::Text, OutputFormat::Pdf])
            .unwrap_err();
        assert!(matches!(err, RenderError::FormatUnavailable { format: OutputFormat::Pdf }));
    }

    #[test]
    fn render_text_matches_dispatch() {
        let renderer = Renderer::new().unwrap();
        let rec = record(ContractType::Employee);
        let direct = renderer.render_text(&rec, date()).unwrap();
        let dispatched = renderer.render_on(&rec, OutputFormat::Text, date()).unwrap();
        assert_eq!(dispatched.output, RenderedOutput::Text(direct));
    }

    #[test]
    fn rendered_output_bytes() {
        let text = RenderedOutput::Text("abc".into());
        assert_eq!(text.as_bytes(), b"abc");
        assert_eq!(text.len(), 3);
        let bin = RenderedOutput::Binary(vec![1, 2]);
        assert!(bin.as_text().is_none());
        assert_eq!(bin.into_bytes(), vec![1, 2]);
    }
}
