//! # gdoc2wechat
//!
//! Google Docs to WeChat article HTML converter.
//!
//! A document goes through two stages: extraction to Markdown-style markup
//! text, then rendering of the parsed markup to an HTML fragment that uses
//! inline styles only. Tables are rendered as a stack of animated cards.
//!
//! ## Example
//!
//! ```no_run
//! use gdoc2wechat::{ConvertOptions, DocsToWechat, Language};
//!
//! let options = ConvertOptions {
//!     language: Language::En,
//!     ..Default::default()
//! };
//!
//! let converter = DocsToWechat::new(options);
//! let html = converter.convert_file("document.json").unwrap();
//! println!("{}", html);
//! ```

pub mod adapters;
pub mod converter;
pub mod core;
pub mod error;
pub mod localization;
pub mod render;

pub use converter::{DocsToWechat, DocumentExtractor};
pub use error::{Error, Result};
pub use localization::{ChineseLocalization, DefaultLocalization, Language, LocalizationStrategy};
pub use render::{StyleCatalog, StyledHtmlRenderer};

use converter::{DEFAULT_IMAGE_ALT, DEFAULT_IMAGE_PLACEHOLDER};
use render::DEFAULT_ROW_DELAY_MS;

/// Options for Docs to WeChat HTML conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Document language; selects the stop section titles.
    pub language: Language,
    /// Extra section titles that end extraction, matched exactly.
    pub extra_stop_sentinels: Vec<String>,
    /// Image URL template; `{id}` is replaced with the inline object id.
    pub image_placeholder: String,
    /// Alt text for images without a title or description.
    pub image_alt: String,
    /// Animation delay step between table cards, in milliseconds.
    pub row_delay_ms: u32,
    /// Inline styles per element role.
    pub styles: StyleCatalog,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            language: Language::default(),
            extra_stop_sentinels: Vec::new(),
            image_placeholder: DEFAULT_IMAGE_PLACEHOLDER.to_string(),
            image_alt: DEFAULT_IMAGE_ALT.to_string(),
            row_delay_ms: DEFAULT_ROW_DELAY_MS,
            styles: StyleCatalog::default(),
        }
    }
}

// Python bindings (only when 'python' feature is enabled)
#[cfg(feature = "python")]
mod python_bindings {
    use super::*;
    use pyo3::prelude::*;

    /// Converts a Docs API JSON document to WeChat HTML.
    #[pyfunction]
    fn convert_document_json(json: String) -> PyResult<String> {
        DocsToWechat::with_defaults()
            .convert_json(&json)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(e.to_string()))
    }

    /// A Python module implemented in Rust.
    #[pymodule]
    pub fn gdoc2wechat(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(convert_document_json, m)?)?;
        Ok(())
    }
}
