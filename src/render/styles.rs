//! Inline style catalog for the WeChat editor.
//!
//! The editor strips external stylesheets, so every element carries its style
//! inline. Adjust these to match your account's look.

use crate::error::Error;
use crate::Result;
use serde::Deserialize;
use std::path::Path;

/// Name of the card entrance animation referenced by [`StyleCatalog::table_card`].
pub const CARD_ANIMATION_NAME: &str = "fadeInUp";

/// Keyframes for the card entrance animation. The only non-inline CSS emitted.
pub const CARD_KEYFRAMES: &str = "<style>@keyframes fadeInUp { from { opacity: 0; transform: translateY(20px); } to { opacity: 1; transform: translateY(0); } }</style>";

/// Inline style string per visual role.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleCatalog {
    pub body: String,
    pub heading1: String,
    pub heading2: String,
    pub heading3: String,
    pub paragraph: String,
    pub blockquote: String,
    pub code_block: String,
    pub image: String,
    pub unordered_list: String,
    pub ordered_list: String,
    pub list_item: String,
    pub table_wrapper: String,
    pub table_card: String,
    pub table_row: String,
    /// Same as `table_row` without the trailing margin.
    pub table_row_last: String,
    pub table_label: String,
}

impl Default for StyleCatalog {
    fn default() -> Self {
        Self {
            body: "padding: 16px; letter-spacing: 0.544px; font-size: 16px; line-height: 1.75; color: #333;".into(),
            heading1: "margin-top: 30px; margin-bottom: 20px; font-size: 24px; font-weight: bold; line-height: 1.4; text-align: center;".into(),
            heading2: "margin-top: 25px; margin-bottom: 15px; font-size: 20px; font-weight: bold; line-height: 1.4; border-bottom: 2px solid #f2f2f2; padding-bottom: 5px;".into(),
            heading3: "margin-top: 20px; margin-bottom: 12px; font-size: 18px; font-weight: bold; line-height: 1.4;".into(),
            paragraph: "margin-top: 1em; margin-bottom: 1em;".into(),
            blockquote: "padding: 10px 20px; margin: 20px 0; background-color: #f8f8f8; border-left: 4px solid #d1d1d1; color: #666;".into(),
            code_block: "display: block; overflow-x: auto; padding: 1em; background: #23241f; color: #f8f8f2; margin: 20px 0; border-radius: 5px; font-family: 'Courier New', Courier, monospace;".into(),
            image: "max-width: 100%; height: auto; display: block; margin: 20px auto; border-radius: 4px; box-shadow: 0 4px 8px rgba(0,0,0,0.1);".into(),
            unordered_list: "margin: 1em 0; padding-left: 25px;".into(),
            ordered_list: "margin: 1em 0; padding-left: 25px;".into(),
            list_item: "margin-bottom: 0.5em;".into(),
            table_wrapper: "margin: 20px 0;".into(),
            table_card: "margin: 12px 0; padding: 12px 16px; background-color: #f8f9fa; border-radius: 8px; box-shadow: 0 2px 6px rgba(0,0,0,0.08); animation: fadeInUp 0.5s ease-out both;".into(),
            table_row: "margin: 0 0 6px 0; font-size: 15px; line-height: 1.6;".into(),
            table_row_last: "margin: 0; font-size: 15px; line-height: 1.6;".into(),
            table_label: "font-weight: bold; color: #555;".into(),
        }
    }
}

impl StyleCatalog {
    /// Style for a heading level. Levels past 3 share the level-3 style.
    pub fn heading(&self, level: u8) -> &str {
        match level {
            1 => &self.heading1,
            2 => &self.heading2,
            _ => &self.heading3,
        }
    }

    /// Parses a JSON override. Roles not present keep their default style.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::StyleConfig(e.to_string()))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_level_fallback() {
        let styles = StyleCatalog::default();
        assert_eq!(styles.heading(2), styles.heading2);
        assert_eq!(styles.heading(5), styles.heading3);
        assert_eq!(styles.heading(0), styles.heading3);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let styles = StyleCatalog::from_json_str(r#"{ "paragraph": "margin: 0;" }"#)
            .expect("override should parse");
        assert_eq!(styles.paragraph, "margin: 0;");
        assert_eq!(styles.heading1, StyleCatalog::default().heading1);
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let err = StyleCatalog::from_json_str(r#"{ "footer": "x" }"#).unwrap_err();
        assert!(matches!(err, Error::StyleConfig(_)));
    }

    #[test]
    fn test_card_style_uses_keyframes() {
        let styles = StyleCatalog::default();
        assert!(styles.table_card.contains(CARD_ANIMATION_NAME));
        assert!(CARD_KEYFRAMES.contains(CARD_ANIMATION_NAME));
    }
}
