//! Converter modules for Docs document to WeChat HTML transformation.

mod context;
mod image;
mod paragraph;
mod run;
mod table;

use crate::adapters::gdocs;
use crate::adapters::markdown::{CmarkParser, MarkupParser};
use crate::core::document::{Block, Document};
use crate::render::{Renderer, StyledHtmlRenderer};
use crate::{ConvertOptions, Result};
use log::{debug, info};
use std::path::Path;

pub use self::context::ExtractionContext;
pub use self::image::{
    ImagePlaceholder, ImagePlacement, DEFAULT_IMAGE_ALT, DEFAULT_IMAGE_PLACEHOLDER,
};
pub use self::paragraph::ParagraphConverter;
pub use self::run::{RunConverter, RunStyle};
pub use self::table::TableConverter;

/// Turns a document tree into intermediate markup text.
///
/// Title paragraphs are dropped and extraction ends at the first paragraph
/// whose trimmed text is a stop section title.
pub struct DocumentExtractor<'a> {
    options: &'a ConvertOptions,
}

impl<'a> DocumentExtractor<'a> {
    pub fn new(options: &'a ConvertOptions) -> Self {
        Self { options }
    }

    pub fn extract(&self, document: &Document) -> String {
        let mut context = ExtractionContext::new(
            &document.inline_objects,
            self.options,
            self.options.language.strategy(),
        );
        let mut output = String::new();

        for block in &document.blocks {
            match block {
                Block::Paragraph(para) => {
                    if para.style.is_title() {
                        debug!("skipping title paragraph");
                        continue;
                    }
                    let plain = para.plain_text();
                    if context.is_stop_heading(plain.trim()) {
                        info!(
                            "reached stop section {:?}, ignoring the rest of the document",
                            plain.trim()
                        );
                        break;
                    }
                    output.push_str(&ParagraphConverter::convert(para, &mut context));
                }
                Block::Table(table) => {
                    output.push_str(&TableConverter::convert(table, &mut context));
                }
            }
        }

        let missing = context.take_missing_images();
        if !missing.is_empty() {
            debug!("skipped unresolved inline image(s): {}", missing.join(", "));
        }

        output
    }
}

/// Main converter struct that orchestrates extraction, parsing and rendering.
pub struct DocsToWechat {
    options: ConvertOptions,
}

impl DocsToWechat {
    /// Creates a new converter with the given options.
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Creates a new converter with default options.
    pub fn with_defaults() -> Self {
        Self::new(ConvertOptions::default())
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Extracts the intermediate markup text of a document.
    pub fn extract_markup(&self, document: &Document) -> String {
        DocumentExtractor::new(&self.options).extract(document)
    }

    /// Renders markup text to the final HTML fragment.
    pub fn render_markup(&self, markup: &str) -> Result<String> {
        self.render_markup_with(&CmarkParser, markup)
    }

    /// Renders markup text using a custom parser.
    pub fn render_markup_with<P: MarkupParser>(&self, parser: &P, markup: &str) -> Result<String> {
        let tree = parser.parse(markup)?;
        let html = StyledHtmlRenderer::new(&self.options.styles)
            .with_row_delay_ms(self.options.row_delay_ms)
            .render(&tree);
        Ok(html)
    }

    /// Converts a document tree to HTML.
    pub fn convert(&self, document: &Document) -> Result<String> {
        let markup = self.extract_markup(document);
        let html = self.render_markup(&markup)?;
        info!(
            "converted {} block(s) into {} bytes of HTML",
            document.blocks.len(),
            html.len()
        );
        Ok(html)
    }

    /// Converts a Docs API JSON document to HTML.
    pub fn convert_json(&self, json: &str) -> Result<String> {
        let document = gdocs::parse_document_json(json)?;
        self.convert(&document)
    }

    /// Converts a Docs API JSON file to HTML.
    ///
    /// # Arguments
    /// * `path` - Path to the JSON document
    ///
    /// # Returns
    /// The converted HTML fragment as a String.
    pub fn convert_file<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let document = gdocs::read_document(path)?;
        self.convert(&document)
    }
}
