//! Text run converter - handles text runs with formatting.

use crate::core::document::TextRun;
use crate::render::{escape_markdown_link_destination, escape_markdown_text};

/// Formatting flags shared by one or more adjacent runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStyle {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub link: Option<String>,
}

impl RunStyle {
    pub fn of(run: &TextRun) -> Self {
        Self {
            bold: run.bold,
            italic: run.italic,
            strikethrough: run.strikethrough,
            link: run.link.clone(),
        }
    }

    /// Whether any delimiter-based formatting applies.
    pub fn has_emphasis(&self) -> bool {
        self.bold || self.italic || self.strikethrough
    }

    pub fn is_plain(&self) -> bool {
        !self.has_emphasis() && self.link.is_none()
    }
}

fn is_punctuation(c: char) -> bool {
    !c.is_alphanumeric() && !c.is_whitespace()
}

/// Converter for text runs.
pub struct RunConverter;

impl RunConverter {
    /// Removes line breaks, including the vertical tab Docs uses for soft breaks.
    ///
    /// Run text ends up inside a single markup line (heading, list item or
    /// table cell), so it must never contain one.
    pub fn strip_line_breaks(text: &str) -> String {
        text.chars()
            .filter(|c| !matches!(c, '\n' | '\r' | '\u{000b}'))
            .collect()
    }

    /// Converts run text to markup with formatting applied.
    ///
    /// Markers nest in a fixed order: bold innermost, then italic, then
    /// strikethrough, with the link wrapped around everything.
    pub fn convert(text: &str, style: &RunStyle) -> String {
        Self::convert_between(text, style, None, None)
    }

    /// Like [`RunConverter::convert`], for a run whose unformatted neighbours
    /// start with `before` and `after` (`None` when the neighbour is a line
    /// boundary or itself formatted).
    ///
    /// An emphasis delimiter between punctuation and a letter or digit does
    /// not open or close in CommonMark, so edge punctuation next to a word
    /// character is moved outside the markers.
    pub fn convert_between(
        text: &str,
        style: &RunStyle,
        before: Option<char>,
        after: Option<char>,
    ) -> String {
        if !style.has_emphasis() || style.link.is_some() {
            return Self::format(text, style);
        }

        let core_start = text.len() - text.trim_start().len();
        let core_end = text.trim_end().len();
        if core_start >= core_end {
            return Self::format(text, style);
        }
        let core = &text[core_start..core_end];

        let mut start = 0;
        if core_start == 0 && before.is_some_and(char::is_alphanumeric) {
            start = core
                .char_indices()
                .find(|(_, c)| !is_punctuation(*c))
                .map_or(core.len(), |(i, _)| i);
        }
        let mut end = core.len();
        if core_end == text.len() && after.is_some_and(char::is_alphanumeric) {
            end = core
                .char_indices()
                .rev()
                .find(|(_, c)| !is_punctuation(*c))
                .map_or(0, |(i, c)| i + c.len_utf8());
        }

        if start >= end {
            return escape_markdown_text(text);
        }
        if start == 0 && end == core.len() {
            return Self::format(text, style);
        }

        let inner_start = core_start + start;
        let inner_end = core_start + end;
        format!(
            "{}{}{}",
            escape_markdown_text(&text[..inner_start]),
            Self::format(&text[inner_start..inner_end], style),
            escape_markdown_text(&text[inner_end..])
        )
    }

    fn format(text: &str, style: &RunStyle) -> String {
        let mut result = escape_markdown_text(text);

        if style.bold {
            result = Self::apply_format_safely(&result, "**", "**");
        }
        if style.italic {
            result = Self::apply_format_safely(&result, "*", "*");
        }
        if style.strikethrough {
            result = Self::apply_format_safely(&result, "~~", "~~");
        }
        if let Some(url) = &style.link {
            result = format!("[{}]({})", result, escape_markdown_link_destination(url));
        }

        result
    }

    /// Wraps `text` in markers, keeping surrounding whitespace outside them.
    /// Whitespace-only text is returned unchanged.
    fn apply_format_safely(text: &str, open: &str, close: &str) -> String {
        let content = text.trim();
        if content.is_empty() {
            return text.to_string();
        }

        let leading_ws = &text[..text.len() - text.trim_start().len()];
        let trailing_ws = &text[text.trim_end().len()..];
        format!("{}{}{}{}{}", leading_ws, open, content, close, trailing_ws)
    }
}
