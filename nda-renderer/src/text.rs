//! Plain-text adapter.
//!
//! Blocks are separated by one blank line; list items and line groups stay on
//! consecutive lines. Numbered items are indented eight spaces, lettered
//! items four. Page breaks have no plain-text form and are dropped.

use tera::Tera;

use crate::document::Document;
use crate::engine::{FormatAdapter, RenderedOutput};
use crate::error::RenderError;
use crate::format::OutputFormat;

pub(crate) const TEMPLATE: &str = "text/agreement.txt";

/// Renders a [`Document`] through the embedded `text/agreement.txt` template.
pub struct TextAdapter<'a> {
    tera: &'a Tera,
}

impl<'a> TextAdapter<'a> {
    pub fn new(tera: &'a Tera) -> Self {
        TextAdapter { tera }
    }

    pub fn render_string(&self, doc: &Document) -> Result<String, RenderError> {
        let ctx = doc.to_tera_context()?;
        Ok(self.tera.render(TEMPLATE, &ctx)?)
    }
}

impl FormatAdapter for TextAdapter<'_> {
    fn format(&self) -> OutputFormat {
        OutputFormat::Text
    }

    fn render(&self, doc: &Document) -> Result<RenderedOutput, RenderError> {
        self.render_string(doc).map(RenderedOutput::Text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Block, ListStyle, Run};
    use crate::engine::build_tera;

    fn render(blocks: Vec<Block>) -> String {
        let tera = build_tera().expect("templates compile");
        TextAdapter::new(&tera)
            .render_string(&Document { blocks })
            .expect("render")
    }

    #[test]
    fn blocks_are_separated_by_blank_lines() {
        let out = render(vec![
            Block::Title { text: "TITLE".into(), subtitle: "(sub)".into() },
            Block::heading(1, "RECITALS"),
            Block::Paragraph { runs: vec![Run::bold("(1) ACME"), Run::plain(", a company")] },
        ]);
        assert_eq!(out, "TITLE\n(sub)\n\nRECITALS\n\n(1) ACME, a company\n");
    }

    #[test]
    fn lists_are_indented_by_style() {
        let out = render(vec![
            Block::list(None, ListStyle::Numbered, ["One;", "Two;"]),
            Block::list(Some("1.2 Except:"), ListStyle::Lettered, ["first", "second"]),
        ]);
        assert_eq!(
            out,
            "        1. One;\n        2. Two;\n\n1.2 Except:\n    (a) first\n    (b) second\n"
        );
    }

    #[test]
    fn line_groups_stay_together_and_page_breaks_vanish() {
        let out = render(vec![
            Block::LineGroup { lines: vec!["THE COMPANY:".into(), "____".into(), "John".into()] },
            Block::PageBreak,
            Block::paragraph("Disclaimer"),
        ]);
        assert_eq!(out, "THE COMPANY:\n____\nJohn\n\nDisclaimer\n");
    }

    #[test]
    fn text_is_not_html_escaped() {
        let out = render(vec![Block::paragraph("\"Party\" & <Parties>")]);
        assert_eq!(out, "\"Party\" & <Parties>\n");
    }
}
