//! Format-neutral agreement document.
//!
//! A [`Document`] is the single rendering payload shared by every format
//! adapter. Blocks carry content plus structural intent only (heading,
//! bold run, list, page break); fonts, spacing and markup belong to the
//! adapters.

use serde::{Deserialize, Serialize};

/// A run of text within a paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub text: String,
    pub bold: bool,
}

impl Run {
    pub fn plain(text: impl Into<String>) -> Self {
        Run { text: text.into(), bold: false }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Run { text: text.into(), bold: true }
    }
}

/// Marker style of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListStyle {
    /// `1.`, `2.`, ...
    Numbered,
    /// `(a)`, `(b)`, ...
    Lettered,
}

impl ListStyle {
    /// Marker for the zero-based `index`.
    pub fn marker(&self, index: usize) -> String {
        match self {
            ListStyle::Numbered => format!("{}.", index + 1),
            ListStyle::Lettered => {
                let letter = (b'a' + (index % 26) as u8) as char;
                format!("({letter})")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub marker: String,
    pub text: String,
}

/// One structural element of the agreement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Title { text: String, subtitle: String },
    /// Level 1 is a numbered section, level 2 a sub-heading.
    Heading { level: u8, text: String },
    Paragraph { runs: Vec<Run> },
    /// Items kept together; `lead` is an introductory line with no gap before the items.
    List {
        lead: Option<String>,
        style: ListStyle,
        items: Vec<ListItem>,
    },
    /// Consecutive short lines with no paragraph spacing (signature blocks).
    LineGroup { lines: Vec<String> },
    PageBreak,
}

impl Block {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph { runs: vec![Run::plain(text)] }
    }

    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Block::Heading { level, text: text.into() }
    }

    pub fn list<I, S>(lead: Option<&str>, style: ListStyle, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items = items
            .into_iter()
            .enumerate()
            .map(|(i, text)| ListItem { marker: style.marker(i), text: text.into() })
            .collect();
        Block::List { lead: lead.map(str::to_string), style, items }
    }

    /// Text lines of this block, without any markup.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Block::Title { text, subtitle } => vec![text.clone(), subtitle.clone()],
            Block::Heading { text, .. } => vec![text.clone()],
            Block::Paragraph { runs } => vec![runs.iter().map(|r| r.text.as_str()).collect()],
            Block::List { lead, items, .. } => lead
                .iter()
                .cloned()
                .chain(items.iter().map(|item| format!("{} {}", item.marker, item.text)))
                .collect(),
            Block::LineGroup { lines } => lines.clone(),
            Block::PageBreak => Vec::new(),
        }
    }
}

/// The assembled agreement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    /// Canonical content: every text line of every block, in order.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .flat_map(Block::lines)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Convert to a [`tera::Context`] for template-driven adapters.
    pub fn to_tera_context(&self) -> Result<tera::Context, tera::Error> {
        tera::Context::from_serialize(self)
    }
}

/// Whitespace-normalised word sequence of `text`.
///
/// Two renderings carry the same content exactly when their word sequences
/// are equal; indentation, line wrapping and blank lines do not count.
pub fn content_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_follow_style() {
        assert_eq!(ListStyle::Numbered.marker(0), "1.");
        assert_eq!(ListStyle::Numbered.marker(10), "11.");
        assert_eq!(ListStyle::Lettered.marker(0), "(a)");
        assert_eq!(ListStyle::Lettered.marker(4), "(e)");
    }

    #[test]
    fn paragraph_lines_join_runs() {
        let block = Block::Paragraph {
            runs: vec![Run::bold("(1) ACME"), Run::plain(" (Registration Number: 1)")],
        };
        assert_eq!(block.lines(), vec!["(1) ACME (Registration Number: 1)".to_string()]);
    }

    #[test]
    fn list_lines_include_lead() {
        let block = Block::list(Some("1.2 Lead:"), ListStyle::Lettered, ["first", "second"]);
        assert_eq!(block.lines(), vec!["1.2 Lead:", "(a) first", "(b) second"]);
    }

    #[test]
    fn blocks_serialize_with_kind_tag() {
        let json = serde_json::to_value(Block::PageBreak).expect("serialize");
        assert_eq!(json["kind"], "page_break");
        let json = serde_json::to_value(Block::heading(1, "RECITALS")).expect("serialize");
        assert_eq!(json["kind"], "heading");
        assert_eq!(json["level"], 1);
    }

    #[test]
    fn content_words_ignore_layout() {
        assert_eq!(
            content_words("  1. Item;\n\n        2. Next;"),
            content_words("1. Item; 2. Next;")
        );
    }
}
