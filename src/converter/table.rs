//! Table converter - converts tables to pipe-delimited markup rows.

use super::image::ImagePlacement;
use super::run::RunConverter;
use super::{ExtractionContext, ParagraphConverter};
use crate::core::document::{Cell, Table};
use log::debug;

/// Converter for Table elements.
pub struct TableConverter;

impl TableConverter {
    /// Converts a table to markup. The first row becomes the header row.
    ///
    /// Rows without cells are dropped; a table left with no rows produces
    /// nothing at all.
    pub fn convert(table: &Table, context: &mut ExtractionContext<'_>) -> String {
        let rows: Vec<Vec<String>> = table
            .rows
            .iter()
            .filter(|row| !row.cells.is_empty())
            .map(|row| {
                row.cells
                    .iter()
                    .map(|cell| Self::convert_cell_content(cell, context))
                    .collect()
            })
            .collect();

        if rows.len() < table.rows.len() {
            debug!(
                "dropped {} table row(s) without cells",
                table.rows.len() - rows.len()
            );
        }
        if rows.is_empty() {
            return String::new();
        }

        let mut output = String::new();
        for (i, cells) in rows.iter().enumerate() {
            output.push_str(&Self::render_row(cells));
            if i == 0 {
                output.push_str(&Self::render_row(&vec!["---".to_string(); cells.len()]));
            }
        }
        output.push('\n');
        output
    }

    fn convert_cell_content(cell: &Cell, context: &mut ExtractionContext<'_>) -> String {
        let parts: Vec<String> = cell
            .content
            .iter()
            .map(|para| ParagraphConverter::convert_inline(para, context, ImagePlacement::Inline))
            .filter(|text| !text.trim().is_empty())
            .collect();
        RunConverter::strip_line_breaks(parts.join(" ").trim())
    }

    fn render_row(cells: &[String]) -> String {
        format!("| {} |\n", cells.join(" | "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::document::{Paragraph, Row, TextRun};
    use crate::ConvertOptions;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn convert(table: &Table) -> String {
        let options = ConvertOptions::default();
        let objects = HashMap::new();
        let mut context = ExtractionContext::new(&objects, &options, options.language.strategy());
        TableConverter::convert(table, &mut context)
    }

    #[test]
    fn test_header_separator_after_first_row() {
        let table = Table::default()
            .push_row(Row::from_texts(["Name\n", "Age\n"]))
            .push_row(Row::from_texts(["Ann\n", "30\n"]));
        assert_eq!(
            convert(&table),
            "| Name | Age |\n| --- | --- |\n| Ann | 30 |\n\n"
        );
    }

    #[test]
    fn test_empty_table_emits_nothing() {
        let table = Table::default().push_row(Row::default());
        assert_eq!(convert(&table), "");
    }

    #[test]
    fn test_cell_paragraphs_join_on_one_line() {
        let cell = Cell::default()
            .push(Paragraph::default().push(TextRun::new("first\n").bold()))
            .push(Paragraph::default().push_text("\n"))
            .push(Paragraph::default().push_text("a|b\n"));
        let table = Table::default().push_row(Row::default().push_cell(cell));
        assert_eq!(convert(&table), "| **first** a\\|b |\n| --- |\n\n");
    }
}
