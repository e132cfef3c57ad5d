//! Paragraph converter - handles paragraph elements and their structure.

use super::image::ImagePlacement;
use super::run::{RunConverter, RunStyle};
use super::ExtractionContext;
use crate::render::escape_markdown_line_start;
use crate::core::document::{Element, Paragraph};

/// Converter for Paragraph elements.
pub struct ParagraphConverter;

/// Piece of paragraph content, before markup is produced.
#[derive(Debug, Clone, PartialEq)]
enum Segment {
    /// Text with consistent styling. Line breaks already removed.
    Text { text: String, style: RunStyle },
    /// Ready-made image reference.
    Image(String),
}

impl Segment {
    /// Text of an unformatted segment.
    fn plain_text(&self) -> Option<&str> {
        match self {
            Segment::Text { text, style } if style.is_plain() => Some(text.as_str()),
            _ => None,
        }
    }
}

impl ParagraphConverter {
    /// Converts a body paragraph to markup, including its trailing separator.
    ///
    /// Headings end with a single newline; everything else ends with a line
    /// break followed by a blank line.
    pub fn convert(para: &Paragraph, context: &mut ExtractionContext<'_>) -> String {
        let heading_level = para.style.markup_heading_level();
        let mut output = String::new();

        if let Some(level) = heading_level {
            output.push_str(&"#".repeat(level));
            output.push(' ');
        }

        // Every list level is written as an unordered item.
        if let Some(bullet) = &para.bullet {
            output.push_str(&"  ".repeat(bullet.nesting_level));
            output.push_str("* ");
        }

        output.push_str(&Self::convert_inline(para, context, ImagePlacement::Block));

        if heading_level.is_none() {
            output.push('\n');
        }
        output.push('\n');
        output
    }

    /// Converts only the paragraph's inline content.
    pub fn convert_inline(
        para: &Paragraph,
        context: &mut ExtractionContext<'_>,
        placement: ImagePlacement,
    ) -> String {
        let segments = Self::merge_segments(Self::collect_segments(para, context, placement));
        let mut output = String::new();
        let mut at_line_start = true;

        for (i, segment) in segments.iter().enumerate() {
            match segment {
                Segment::Text { text, style } => {
                    let before = i
                        .checked_sub(1)
                        .and_then(|prev| segments[prev].plain_text())
                        .and_then(|text| text.chars().next_back());
                    let after = segments
                        .get(i + 1)
                        .and_then(Segment::plain_text)
                        .and_then(|text| text.chars().next());
                    let markup = RunConverter::convert_between(text, style, before, after);
                    if at_line_start {
                        output.push_str(&escape_markdown_line_start(&markup));
                    } else {
                        output.push_str(&markup);
                    }
                    at_line_start = at_line_start && markup.trim().is_empty();
                }
                Segment::Image(markdown) => {
                    output.push_str(markdown);
                    // Block images end with a blank line, so text after them starts a new block.
                    at_line_start = placement == ImagePlacement::Block;
                }
            }
        }

        output
    }

    fn collect_segments(
        para: &Paragraph,
        context: &mut ExtractionContext<'_>,
        placement: ImagePlacement,
    ) -> Vec<Segment> {
        let mut segments = Vec::new();
        for element in &para.elements {
            match element {
                Element::TextRun(run) => {
                    let text = RunConverter::strip_line_breaks(&run.content);
                    // Covers the synthetic newline Docs appends to every paragraph.
                    if text.is_empty() {
                        continue;
                    }
                    segments.push(Segment::Text {
                        text,
                        style: RunStyle::of(run),
                    });
                }
                Element::InlineImage(image) => {
                    if let Some(markdown) = context.image_markdown(&image.object_id, placement) {
                        segments.push(Segment::Image(markdown));
                    }
                }
            }
        }
        segments
    }

    /// Merges adjacent text segments with identical formatting.
    fn merge_segments(segments: Vec<Segment>) -> Vec<Segment> {
        let mut merged: Vec<Segment> = Vec::new();

        for segment in segments {
            if let (
                Some(Segment::Text {
                    text: last_text,
                    style: last_style,
                }),
                Segment::Text { text, style },
            ) = (merged.last_mut(), &segment)
            {
                if last_style == style {
                    last_text.push_str(text);
                    continue;
                }
            }
            merged.push(segment);
        }

        merged
    }
}
