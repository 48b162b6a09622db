//! PDF adapter.
//!
//! Rendering happens in two stages. [`layout`] breaks the document into
//! positioned lines on A4 pages (greedy word wrap against Helvetica advance
//! widths); [`PdfAdapter`] then draws those lines with printpdf's built-in
//! Helvetica fonts. Layout is pure and deterministic, the PDF bytes are not
//! (printpdf stamps a creation date and document id).
//!
//! The built-in fonts are drawn through WinAnsiEncoding, so any character
//! outside Windows-1252 is refused with
//! [`RenderError::UnencodableCharacter`] before anything is drawn.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

use crate::clauses::TITLE;
use crate::document::{Block, Document, ListStyle, Run};
use crate::engine::{FormatAdapter, RenderedOutput};
use crate::error::RenderError;
use crate::format::OutputFormat;

// All layout units are PDF points (1/72 inch).
const PAGE_WIDTH: f32 = 595.28;
const PAGE_HEIGHT: f32 = 841.89;
const MARGIN_SIDE: f32 = 72.0;
const MARGIN_TOP: f32 = 72.0;
const MARGIN_BOTTOM: f32 = 18.0;
const LEADING: f32 = 1.2;
const LIST_INDENT: f32 = 20.0;
const WIN_ANSI: &str = "WinAnsiEncoding";

/// Helvetica advance widths (1/1000 em) for ASCII 32..=126.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n'..'z'
    334, 260, 334, 584, // '{'..'~'
];

/// Helvetica-Bold advance widths (1/1000 em) for ASCII 32..=126.
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    333, 333, 584, 584, 584, 611, 975, // ':'..'@'
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    333, 278, 333, 584, 556, 333, // '['..'`'
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, // 'a'..'m'
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, // 'n'..'z'
    389, 280, 389, 584, // '{'..'~'
];

// Widest glyph in either font; keeps non-ASCII lines inside the margins.
const NON_ASCII_WIDTH: u16 = 1000;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Align {
    Left,
    Center,
}

#[derive(Debug, Clone, Copy)]
struct Style {
    size: f32,
    bold: bool,
    space_before: f32,
    space_after: f32,
    indent: f32,
    align: Align,
}

const TITLE_STYLE: Style = Style { size: 18.0, bold: true, space_before: 0.0, space_after: 10.0, indent: 0.0, align: Align::Center };
const SUBTITLE_STYLE: Style = Style { size: 10.0, bold: false, space_before: 0.0, space_after: 20.0, indent: 0.0, align: Align::Center };
const H1_STYLE: Style = Style { size: 14.0, bold: true, space_before: 20.0, space_after: 12.0, indent: 0.0, align: Align::Left };
const H2_STYLE: Style = Style { size: 12.0, bold: true, space_before: 15.0, space_after: 8.0, indent: 0.0, align: Align::Left };
const BODY_STYLE: Style = Style { size: 11.0, bold: false, space_before: 0.0, space_after: 8.0, indent: 0.0, align: Align::Left };
const TIGHT_STYLE: Style = Style { size: 11.0, bold: false, space_before: 0.0, space_after: 2.0, indent: 0.0, align: Align::Left };

/// Width of `text` in points.
pub fn text_width(text: &str, size: f32, bold: bool) -> f32 {
    let table = if bold { &HELVETICA_BOLD_WIDTHS } else { &HELVETICA_WIDTHS };
    let units: u32 = text
        .chars()
        .map(|c| match c as u32 {
            code @ 32..=126 => u32::from(table[(code - 32) as usize]),
            _ => u32::from(NON_ASCII_WIDTH),
        })
        .sum();
    units as f32 * size / 1000.0
}

/// First character of `text` with no WinAnsiEncoding code, if any.
pub fn unencodable_char(text: &str) -> Option<char> {
    let mut buf = [0u8; 4];
    text.chars().find(|c| {
        printpdf::lopdf::Document::encode_text(Some(WIN_ANSI), c.encode_utf8(&mut buf)).is_empty()
    })
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// A stretch of same-weight text on one line.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub text: String,
    pub bold: bool,
}

/// A line of text with its position; `baseline` is measured from the page bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub page: usize,
    pub x: f32,
    pub baseline: f32,
    pub size: f32,
    pub segments: Vec<Segment>,
}

impl PlacedLine {
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn width(&self) -> f32 {
        self.segments
            .iter()
            .map(|s| text_width(&s.text, self.size, s.bold))
            .sum()
    }
}

/// Positioned lines of a whole document.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub page_count: usize,
    pub lines: Vec<PlacedLine>,
}

impl Layout {
    /// Laid-out text, one line per placed line.
    pub fn plain_text(&self) -> String {
        self.lines
            .iter()
            .map(PlacedLine::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A word as a sequence of same-weight fragments (a word may switch weight
/// mid-way, e.g. a bold name followed by a plain comma).
type Word = Vec<Segment>;

fn words(runs: &[Run], force_bold: bool) -> Vec<Word> {
    let mut out: Vec<Word> = Vec::new();
    let mut current: Word = Vec::new();
    for run in runs {
        let bold = run.bold || force_bold;
        for c in run.text.chars() {
            if c.is_whitespace() {
                if !current.is_empty() {
                    out.push(std::mem::take(&mut current));
                }
                continue;
            }
            match current.last_mut() {
                Some(seg) if seg.bold == bold => seg.text.push(c),
                _ => current.push(Segment { text: c.to_string(), bold }),
            }
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

fn word_width(word: &Word, size: f32) -> f32 {
    word.iter().map(|s| text_width(&s.text, size, s.bold)).sum()
}

/// Append `word` to `line`, merging fragments of equal weight.
fn push_word(line: &mut Vec<Segment>, word: &Word) {
    if let Some(last) = line.last_mut() {
        last.text.push(' ');
    }
    for fragment in word {
        match line.last_mut() {
            Some(last) if last.bold == fragment.bold => last.text.push_str(&fragment.text),
            _ => line.push(fragment.clone()),
        }
    }
}

struct Paginator {
    page: usize,
    cursor: f32,
    lines: Vec<PlacedLine>,
}

impl Paginator {
    fn new() -> Self {
        Paginator { page: 0, cursor: PAGE_HEIGHT - MARGIN_TOP, lines: Vec::new() }
    }

    fn at_page_top(&self) -> bool {
        self.cursor >= PAGE_HEIGHT - MARGIN_TOP
    }

    fn new_page(&mut self) {
        self.page += 1;
        self.cursor = PAGE_HEIGHT - MARGIN_TOP;
    }

    fn space(&mut self, points: f32) {
        if !self.at_page_top() {
            self.cursor -= points;
        }
    }

    fn place(&mut self, segments: Vec<Segment>, style: &Style, extra_indent: f32) {
        let leading = style.size * LEADING;
        if self.cursor - leading < MARGIN_BOTTOM {
            self.new_page();
        }
        let mut line = PlacedLine {
            page: self.page,
            x: MARGIN_SIDE + style.indent + extra_indent,
            baseline: self.cursor - style.size,
            size: style.size,
            segments,
        };
        if style.align == Align::Center {
            line.x = ((PAGE_WIDTH - line.width()) / 2.0).max(MARGIN_SIDE);
        }
        self.lines.push(line);
        self.cursor -= leading;
    }

    /// Wrap `runs` to the text column and place the resulting lines.
    fn paragraph(&mut self, runs: &[Run], style: &Style, extra_indent: f32) {
        let max_width = PAGE_WIDTH - 2.0 * MARGIN_SIDE - style.indent - extra_indent;
        let space = text_width(" ", style.size, false);
        let mut line: Vec<Segment> = Vec::new();
        let mut width = 0.0_f32;
        for word in words(runs, style.bold) {
            let w = word_width(&word, style.size);
            if !line.is_empty() && width + space + w > max_width {
                self.place(std::mem::take(&mut line), style, extra_indent);
                width = 0.0;
            }
            if !line.is_empty() {
                width += space;
            }
            push_word(&mut line, &word);
            width += w;
        }
        if !line.is_empty() {
            self.place(line, style, extra_indent);
        }
    }

    fn block(&mut self, style: &Style, runs: &[Run]) {
        self.space(style.space_before);
        self.paragraph(runs, style, 0.0);
        self.cursor -= style.space_after;
    }
}

/// Lay `doc` out on A4 pages.
pub fn layout(doc: &Document) -> Layout {
    let mut p = Paginator::new();
    for block in &doc.blocks {
        match block {
            Block::Title { text, subtitle } => {
                p.block(&TITLE_STYLE, &[Run::plain(text.as_str())]);
                p.block(&SUBTITLE_STYLE, &[Run::plain(subtitle.as_str())]);
            }
            Block::Heading { level, text } => {
                let style = if *level <= 1 { &H1_STYLE } else { &H2_STYLE };
                p.block(style, &[Run::plain(text.as_str())]);
            }
            Block::Paragraph { runs } => p.block(&BODY_STYLE, runs),
            Block::List { lead, style, items } => {
                if let Some(lead) = lead {
                    p.paragraph(&[Run::plain(lead.as_str())], &TIGHT_STYLE, 0.0);
                }
                let indent = match style {
                    ListStyle::Numbered => LIST_INDENT,
                    ListStyle::Lettered => LIST_INDENT / 2.0,
                };
                for item in items {
                    let run = Run::plain(format!("{} {}", item.marker, item.text));
                    p.paragraph(&[run], &TIGHT_STYLE, indent);
                }
                p.cursor -= BODY_STYLE.space_after;
            }
            Block::LineGroup { lines } => {
                for line in lines {
                    p.paragraph(&[Run::plain(line.as_str())], &TIGHT_STYLE, 0.0);
                }
                p.cursor -= BODY_STYLE.space_after * 2.0;
            }
            Block::PageBreak => {
                if !p.at_page_top() {
                    p.new_page();
                }
            }
        }
    }
    Layout { page_count: p.page + 1, lines: p.lines }
}

// ---------------------------------------------------------------------------
// Drawing
// ---------------------------------------------------------------------------

fn mm(points: f32) -> Mm {
    Mm(points * 25.4 / 72.0)
}

fn pdf_err(e: impl std::fmt::Debug) -> RenderError {
    RenderError::Pdf(format!("{e:?}"))
}

fn check_encodable(layout: &Layout) -> Result<(), RenderError> {
    for line in &layout.lines {
        for segment in &line.segments {
            if let Some(character) = unencodable_char(&segment.text) {
                return Err(RenderError::UnencodableCharacter {
                    character,
                    text: segment.text.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Draws a [`Layout`] with printpdf.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        PdfAdapter
    }

    pub fn render_bytes(&self, doc: &Document) -> Result<Vec<u8>, RenderError> {
        let layout = layout(doc);
        check_encodable(&layout)?;
        let (pdf, first_page, first_layer) =
            PdfDocument::new(TITLE, mm(PAGE_WIDTH), mm(PAGE_HEIGHT), "Layer 1");
        let regular = pdf.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_err)?;
        let bold = pdf.add_builtin_font(BuiltinFont::HelveticaBold).map_err(pdf_err)?;

        let mut layers: Vec<PdfLayerReference> =
            vec![pdf.get_page(first_page).get_layer(first_layer)];
        for _ in 1..layout.page_count {
            let (page, layer) = pdf.add_page(mm(PAGE_WIDTH), mm(PAGE_HEIGHT), "Layer 1");
            layers.push(pdf.get_page(page).get_layer(layer));
        }

        for line in &layout.lines {
            let layer = &layers[line.page];
            let mut x = line.x;
            for segment in &line.segments {
                let font: &IndirectFontRef = if segment.bold { &bold } else { &regular };
                layer.use_text(segment.text.as_str(), line.size, mm(x), mm(line.baseline), font);
                x += text_width(&segment.text, line.size, segment.bold);
            }
        }

        let bytes = pdf.save_to_bytes().map_err(pdf_err)?;
        tracing::debug!(pages = layout.page_count, lines = layout.lines.len(), "pdf drawn");
        Ok(bytes)
    }
}

impl FormatAdapter for PdfAdapter {
    fn format(&self) -> OutputFormat {
        OutputFormat::Pdf
    }

    fn render(&self, doc: &Document) -> Result<RenderedOutput, RenderError> {
        self.render_bytes(doc).map(RenderedOutput::Binary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::content_words;

    fn long_paragraph() -> Block {
        Block::paragraph("word ".repeat(200))
    }

    #[test]
    fn widths_use_helvetica_metrics() {
        assert!((text_width("A", 1000.0, false) - 667.0).abs() < 0.01);
        assert!((text_width("i", 10.0, false) - 2.22).abs() < 0.01);
        assert!((text_width("A", 1000.0, true) - 722.0).abs() < 0.01);
        assert!((text_width("r", 1000.0, true) - 389.0).abs() < 0.01);
        assert!((text_width("W", 1000.0, true) - 944.0).abs() < 0.01);
        assert!((text_width("ë", 1000.0, false) - 1000.0).abs() < 0.01);
    }

    #[test]
    fn long_bold_headings_stay_inside_margins() {
        let doc = Document {
            blocks: vec![Block::Heading { level: 1, text: "first trust rift ".repeat(40) }],
        };
        let layout = layout(&doc);
        assert!(layout.lines.len() > 1);
        for line in &layout.lines {
            assert!(line.segments.iter().all(|s| s.bold));
            assert!(line.x + line.width() <= PAGE_WIDTH - MARGIN_SIDE + 0.01, "{}", line.text());
        }
    }

    #[test]
    fn win_ansi_coverage() {
        assert_eq!(unencodable_char("Zoë Müller – “Ltd” €5 • Œ"), None);
        assert_eq!(unencodable_char("Müller-Łukasz"), Some('Ł'));
        assert_eq!(unencodable_char("Ndlovu ✓"), Some('✓'));
        assert_eq!(unencodable_char("Nguyễn"), Some('ễ'));
    }

    #[test]
    fn unencodable_text_is_refused_before_drawing() {
        let doc = Document {
            blocks: vec![Block::Paragraph { runs: vec![Run::bold("(2) ZOË MÜLLER-ŁUKASZ")] }],
        };
        let err = PdfAdapter::new().render_bytes(&doc).expect_err("Ł has no WinAnsi code");
        match &err {
            RenderError::UnencodableCharacter { character, text } => {
                assert_eq!(*character, 'Ł');
                assert_eq!(text, "(2) ZOË MÜLLER-ŁUKASZ");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("'Ł' (U+0141)"), "{err}");
    }

    #[test]
    fn long_paragraphs_wrap_inside_margins() {
        let doc = Document { blocks: vec![long_paragraph()] };
        let layout = layout(&doc);
        assert!(layout.lines.len() > 1);
        for line in &layout.lines {
            assert!(line.x >= MARGIN_SIDE);
            assert!(line.x + line.width() <= PAGE_WIDTH - MARGIN_SIDE + 0.01, "{}", line.text());
        }
        assert_eq!(content_words(&layout.plain_text()), content_words(&doc.plain_text()));
    }

    #[test]
    fn overflow_starts_new_pages() {
        let doc = Document { blocks: (0..20).map(|_| long_paragraph()).collect() };
        let layout = layout(&doc);
        assert!(layout.page_count > 1);
        for line in &layout.lines {
            assert!(line.baseline >= MARGIN_BOTTOM - LEADING * line.size);
        }
    }

    #[test]
    fn page_break_moves_to_next_page() {
        let doc = Document {
            blocks: vec![Block::paragraph("before"), Block::PageBreak, Block::paragraph("after")],
        };
        let layout = layout(&doc);
        assert_eq!(layout.page_count, 2);
        assert_eq!(layout.lines[1].page, 1);
    }

    #[test]
    fn bold_fragments_survive_wrapping() {
        let doc = Document {
            blocks: vec![Block::Paragraph {
                runs: vec![Run::bold("(2) JANE DOE"), Run::plain(", ID Number: 1")],
            }],
        };
        let layout = layout(&doc);
        assert_eq!(
            layout.lines[0].segments,
            vec![
                Segment { text: "(2) JANE DOE".into(), bold: true },
                Segment { text: ", ID Number: 1".into(), bold: false },
            ]
        );
    }

    #[test]
    fn title_is_centred() {
        let doc = Document {
            blocks: vec![Block::Title { text: TITLE.into(), subtitle: "(sub)".into() }],
        };
        let line = &layout(&doc).lines[0];
        let left = line.x;
        let right = PAGE_WIDTH - (line.x + line.width());
        assert!((left - right).abs() < 0.5);
    }

    #[test]
    fn renders_pdf_bytes() {
        let doc = Document { blocks: vec![Block::paragraph("hello"), Block::PageBreak, Block::paragraph("world")] };
        let bytes = PdfAdapter::new().render_bytes(&doc).expect("pdf");
        assert!(bytes.starts_with(b"%PDF"));
    }
}
