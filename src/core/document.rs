//! Structured document tree consumed by the extractor.
//!
//! The tree mirrors what the Docs API returns after the adapter has dropped
//! everything the converter does not understand: paragraphs and tables at the
//! top level, text runs and inline image references inside paragraphs.

use std::collections::HashMap;

/// A whole document: ordered body blocks plus the inline object side table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub title: Option<String>,
    pub blocks: Vec<Block>,
    /// Inline object id -> image metadata.
    pub inline_objects: HashMap<String, InlineObject>,
}

impl Document {
    pub fn push(mut self, block: impl Into<Block>) -> Self {
        self.blocks.push(block.into());
        self
    }

    pub fn insert_inline_object(mut self, id: impl Into<String>, object: InlineObject) -> Self {
        self.inline_objects.insert(id.into(), object);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
}

impl From<Paragraph> for Block {
    fn from(para: Paragraph) -> Self {
        Block::Paragraph(para)
    }
}

impl From<Table> for Block {
    fn from(table: Table) -> Self {
        Block::Table(table)
    }
}

/// Named paragraph style. The set is open: unknown names are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NamedStyle {
    #[default]
    Normal,
    Title,
    Subtitle,
    Heading(u8),
    Other(String),
}

impl NamedStyle {
    pub fn parse(name: &str) -> Self {
        match name {
            "NORMAL_TEXT" | "NORMAL" | "" => NamedStyle::Normal,
            "TITLE" => NamedStyle::Title,
            "SUBTITLE" => NamedStyle::Subtitle,
            other => other
                .strip_prefix("HEADING_")
                .and_then(|level| level.parse::<u8>().ok())
                .filter(|level| *level >= 1)
                .map(NamedStyle::Heading)
                .unwrap_or_else(|| NamedStyle::Other(other.to_string())),
        }
    }

    pub fn is_title(&self) -> bool {
        matches!(self, NamedStyle::Title)
    }

    /// Markup heading level, only for levels the markup output supports (1-3).
    pub fn markup_heading_level(&self) -> Option<usize> {
        match self {
            NamedStyle::Heading(level @ 1..=3) => Some(*level as usize),
            _ => None,
        }
    }
}

/// List membership of a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bullet {
    pub nesting_level: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    pub style: NamedStyle,
    pub bullet: Option<Bullet>,
    pub elements: Vec<Element>,
}

impl Paragraph {
    pub fn new(style: NamedStyle) -> Self {
        Self {
            style,
            ..Default::default()
        }
    }

    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self::new(NamedStyle::Heading(level)).push_text(text)
    }

    pub fn bullet(mut self, nesting_level: usize) -> Self {
        self.bullet = Some(Bullet { nesting_level });
        self
    }

    pub fn push(mut self, element: impl Into<Element>) -> Self {
        self.elements.push(element.into());
        self
    }

    pub fn push_text(self, text: impl Into<String>) -> Self {
        self.push(TextRun::new(text))
    }

    pub fn push_image(self, object_id: impl Into<String>) -> Self {
        self.push(Element::InlineImage(InlineImageRef {
            object_id: object_id.into(),
        }))
    }

    /// Concatenated run contents, ignoring formatting and images.
    pub fn plain_text(&self) -> String {
        self.elements
            .iter()
            .filter_map(|element| match element {
                Element::TextRun(run) => Some(run.content.as_str()),
                Element::InlineImage(_) => None,
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    TextRun(TextRun),
    InlineImage(InlineImageRef),
}

impl From<TextRun> for Element {
    fn from(run: TextRun) -> Self {
        Element::TextRun(run)
    }
}

/// A span of text sharing one set of style flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextRun {
    pub content: String,
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub link: Option<String>,
}

impl TextRun {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn strikethrough(mut self) -> Self {
        self.strikethrough = true;
        self
    }

    pub fn link(mut self, url: impl Into<String>) -> Self {
        self.link = Some(url.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImageRef {
    pub object_id: String,
}

/// Image metadata from the inline object side table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineObject {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Source URL as reported by the API. Usually short-lived.
    pub content_uri: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub rows: Vec<Row>,
}

impl Table {
    pub fn push_row(mut self, row: Row) -> Self {
        self.rows.push(row);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn push_cell(mut self, cell: Cell) -> Self {
        self.cells.push(cell);
        self
    }

    /// One single-paragraph cell per text.
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: texts.into_iter().map(Cell::text).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cell {
    pub content: Vec<Paragraph>,
}

impl Cell {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![Paragraph::default().push_text(text)],
        }
    }

    pub fn push(mut self, para: Paragraph) -> Self {
        self.content.push(para);
        self
    }
}
