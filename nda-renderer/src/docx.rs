//! Word-processor (`.docx`) adapter.
//!
//! `word/document.xml` is rendered from the embedded Tera template (XML
//! autoescaping on); the remaining package parts are static. The archive is
//! written with a fixed timestamp so identical documents give identical bytes.

use std::io::{Cursor, Write};

use tera::Tera;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::document::Document;
use crate::engine::{FormatAdapter, RenderedOutput};
use crate::error::{io_err, RenderError};
use crate::format::OutputFormat;

pub(crate) const DOCUMENT_TEMPLATE: &str = "docx/document.xml";

const CONTENT_TYPES: &str = include_str!("templates/docx/content_types.xml");
const PACKAGE_RELS: &str = include_str!("templates/docx/package.rels");
const DOCUMENT_RELS: &str = include_str!("templates/docx/document.xml.rels");
const STYLES: &str = include_str!("templates/docx/styles.xml");

/// Renders a [`Document`] into a WordprocessingML package.
pub struct DocxAdapter<'a> {
    tera: &'a Tera,
}

impl<'a> DocxAdapter<'a> {
    pub fn new(tera: &'a Tera) -> Self {
        DocxAdapter { tera }
    }

    /// The main document part, before packaging.
    pub fn document_xml(&self, doc: &Document) -> Result<String, RenderError> {
        let ctx = doc.to_tera_context()?;
        Ok(self.tera.render(DOCUMENT_TEMPLATE, &ctx)?)
    }

    pub fn render_bytes(&self, doc: &Document) -> Result<Vec<u8>, RenderError> {
        let document_xml = self.document_xml(doc)?;
        let parts: [(&str, &str); 5] = [
            ("[Content_Types].xml", CONTENT_TYPES),
            ("_rels/.rels", PACKAGE_RELS),
            ("word/document.xml", &document_xml),
            ("word/_rels/document.xml.rels", DOCUMENT_RELS),
            ("word/styles.xml", STYLES),
        ];

        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(DateTime::default());

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in parts {
            zip.start_file(name, options)?;
            zip.write_all(content.as_bytes()).map_err(|e| io_err(name, e))?;
        }
        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }
}

impl FormatAdapter for DocxAdapter<'_> {
    fn format(&self) -> OutputFormat {
        OutputFormat::Docx
    }

    fn render(&self, doc: &Document) -> Result<RenderedOutput, RenderError> {
        self.render_bytes(doc).map(RenderedOutput::Binary)
    }
}
