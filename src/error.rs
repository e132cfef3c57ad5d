//! Error types for gdoc2wechat.

use thiserror::Error;

/// Result type for gdoc2wechat operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading, parsing or converting a document.
///
/// Extraction and rendering themselves never fail; errors come from the
/// surrounding collaborators.
#[derive(Error, Debug)]
pub enum Error {
    /// The input payload is JSON but not a usable document.
    #[error("Failed to parse document: {0}")]
    DocumentParse(String),

    /// The input payload is not valid JSON for the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error occurred during file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The markup parser could not build a syntax tree.
    #[error("Markup parse error: {0}")]
    MarkupParse(String),

    /// A style catalog override could not be loaded.
    #[error("Invalid style catalog: {0}")]
    StyleConfig(String),
}
