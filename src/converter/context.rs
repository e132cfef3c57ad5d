use super::image::{ImagePlaceholder, ImagePlacement};
use crate::core::document::InlineObject;
use crate::localization::LocalizationStrategy;
use crate::ConvertOptions;
use std::collections::HashMap;

/// Context passed through extraction of one document.
pub struct ExtractionContext<'a> {
    inline_objects: &'a HashMap<String, InlineObject>,
    options: &'a ConvertOptions,
    localization: &'a dyn LocalizationStrategy,
    images: ImagePlaceholder<'a>,
    missing_images: Vec<String>,
}

impl<'a> ExtractionContext<'a> {
    pub fn new(
        inline_objects: &'a HashMap<String, InlineObject>,
        options: &'a ConvertOptions,
        localization: &'a dyn LocalizationStrategy,
    ) -> Self {
        Self {
            inline_objects,
            options,
            localization,
            images: ImagePlaceholder::new(&options.image_placeholder, &options.image_alt),
            missing_images: Vec::new(),
        }
    }

    /// Exact, case-sensitive match against the stop section titles.
    pub fn is_stop_heading(&self, text: &str) -> bool {
        self.localization.is_stop_heading(text)
            || self
                .options
                .extra_stop_sentinels
                .iter()
                .any(|sentinel| sentinel == text)
    }

    /// Placeholder reference for an inline object, or `None` when the id is
    /// not in the side table.
    pub fn image_markdown(&mut self, object_id: &str, placement: ImagePlacement) -> Option<String> {
        match self.inline_objects.get(object_id) {
            Some(object) => Some(self.images.markdown(object_id, object, placement)),
            None => {
                self.missing_images.push(object_id.to_string());
                None
            }
        }
    }

    pub fn take_missing_images(&mut self) -> Vec<String> {
        std::mem::take(&mut self.missing_images)
    }
}
