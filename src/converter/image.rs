//! Inline image placeholders.
//!
//! Docs image URLs expire shortly after export, so images are never linked
//! directly. Each one becomes a placeholder URL derived from its object id,
//! to be replaced after the file is uploaded somewhere permanent.

use crate::core::document::InlineObject;
use crate::render::{escape_markdown_link_destination, escape_markdown_text};

/// Default placeholder template; `{id}` is replaced by the inline object id.
pub const DEFAULT_IMAGE_PLACEHOLDER: &str = "https://your-cdn.com/path/to/image-for-{id}.png";

/// Alt text used when the embedded object has neither title nor description.
pub const DEFAULT_IMAGE_ALT: &str = "Image from Google Docs";

/// Where an image reference is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImagePlacement {
    /// Body text: the image gets its own block, surrounded by blank lines.
    Block,
    /// Inside a table cell: the image stays on the row's line.
    Inline,
}

/// Builds placeholder image references.
pub struct ImagePlaceholder<'a> {
    template: &'a str,
    default_alt: &'a str,
}

impl<'a> ImagePlaceholder<'a> {
    pub fn new(template: &'a str, default_alt: &'a str) -> Self {
        Self {
            template,
            default_alt,
        }
    }

    pub fn url(&self, object_id: &str) -> String {
        self.template.replace("{id}", object_id)
    }

    pub fn markdown(
        &self,
        object_id: &str,
        object: &InlineObject,
        placement: ImagePlacement,
    ) -> String {
        let alt = [&object.title, &object.description]
            .into_iter()
            .flatten()
            .map(|text| text.trim())
            .find(|text| !text.is_empty())
            .unwrap_or(self.default_alt);
        let image = format!(
            "![{}]({})",
            escape_markdown_text(&alt.replace(['\n', '\r'], " ")),
            escape_markdown_link_destination(&self.url(object_id))
        );
        match placement {
            ImagePlacement::Block => format!("\n\n{}\n\n", image),
            ImagePlacement::Inline => image,
        }
    }
}
