//! Google Docs API document adapter.
//!
//! Accepts the JSON body returned by `documents.get` and keeps only the parts
//! the converter understands.

mod schema;

use crate::core::document::{
    Block, Bullet, Cell, Document, Element, InlineImageRef, InlineObject, NamedStyle, Paragraph,
    Row, Table, TextRun,
};
use crate::error::Error;
use crate::Result;
use std::path::Path;

/// Parses a Docs API JSON document.
pub fn parse_document_json(json: &str) -> Result<Document> {
    let raw: schema::RawDocument = serde_json::from_str(json)?;
    let body = raw
        .body
        .ok_or_else(|| Error::DocumentParse("document has no body".to_string()))?;

    let blocks = convert_content(&body.content);
    let inline_objects = raw
        .inline_objects
        .into_iter()
        .map(|(id, object)| (id, convert_inline_object(object)))
        .collect();

    Ok(Document {
        title: raw.title,
        blocks,
        inline_objects,
    })
}

/// Reads and parses a Docs API JSON document from disk.
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<Document> {
    let json = std::fs::read_to_string(path)?;
    parse_document_json(&json)
}

fn convert_content(content: &[schema::StructuralElement]) -> Vec<Block> {
    content
        .iter()
        .filter_map(|element| {
            if let Some(para) = &element.paragraph {
                Some(Block::Paragraph(convert_paragraph(para)))
            } else {
                element
                    .table
                    .as_ref()
                    .map(|table| Block::Table(convert_table(table)))
            }
        })
        .collect()
}

fn convert_paragraph(para: &schema::Paragraph) -> Paragraph {
    let style = para
        .paragraph_style
        .as_ref()
        .and_then(|style| style.named_style_type.as_deref())
        .map(NamedStyle::parse)
        .unwrap_or_default();

    let bullet = para.bullet.as_ref().map(|bullet| Bullet {
        nesting_level: bullet.nesting_level.unwrap_or(0).max(0) as usize,
    });

    let elements = para
        .elements
        .iter()
        .filter_map(|element| {
            if let Some(run) = &element.text_run {
                let style = run.text_style.clone().unwrap_or_default();
                Some(Element::TextRun(TextRun {
                    content: run.content.clone().unwrap_or_default(),
                    bold: style.bold.unwrap_or(false),
                    italic: style.italic.unwrap_or(false),
                    strikethrough: style.strikethrough.unwrap_or(false),
                    link: style
                        .link
                        .and_then(|link| link.url)
                        .filter(|url| !url.is_empty()),
                }))
            } else {
                element
                    .inline_object_element
                    .as_ref()
                    .and_then(|object| object.inline_object_id.clone())
                    .map(|object_id| Element::InlineImage(InlineImageRef { object_id }))
            }
        })
        .collect();

    Paragraph {
        style,
        bullet,
        elements,
    }
}

fn convert_table(table: &schema::Table) -> Table {
    let rows = table
        .table_rows
        .iter()
        .map(|row| Row {
            cells: row
                .table_cells
                .iter()
                .map(|cell| Cell {
                    // Nested tables are not representable in a single markup cell.
                    content: cell
                        .content
                        .iter()
                        .filter_map(|element| element.paragraph.as_ref().map(convert_paragraph))
                        .collect(),
                })
                .collect(),
        })
        .collect();
    Table { rows }
}

fn convert_inline_object(object: schema::InlineObject) -> InlineObject {
    let embedded = object
        .inline_object_properties
        .and_then(|props| props.embedded_object)
        .unwrap_or_default();
    InlineObject {
        title: embedded.title,
        description: embedded.description,
        content_uri: embedded.image_properties.and_then(|image| image.content_uri),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_paragraph_styles_and_runs() {
        let json = r#"{
            "documentId": "doc-1",
            "title": "Weekly",
            "body": { "content": [
                { "sectionBreak": {} },
                { "paragraph": {
                    "paragraphStyle": { "namedStyleType": "HEADING_2" },
                    "elements": [ { "textRun": { "content": "Intro\n", "textStyle": {} } } ]
                } },
                { "paragraph": {
                    "paragraphStyle": { "namedStyleType": "NORMAL_TEXT" },
                    "bullet": { "listId": "kix.list", "nestingLevel": 2 },
                    "elements": [
                        { "textRun": { "content": "see ", "textStyle": { "bold": true } } },
                        { "textRun": { "content": "docs", "textStyle": { "link": { "url": "https://d.x" } } } },
                        { "inlineObjectElement": { "inlineObjectId": "kix.img1" } },
                        { "pageBreak": {} }
                    ]
                } }
            ] },
            "inlineObjects": {
                "kix.img1": { "objectId": "kix.img1", "inlineObjectProperties": { "embeddedObject": {
                    "title": "Chart",
                    "imageProperties": { "contentUri": "https://lh3.example/tmp" }
                } } }
            }
        }"#;

        let doc = parse_document_json(json).expect("json should parse");
        assert_eq!(doc.title.as_deref(), Some("Weekly"));
        assert_eq!(doc.blocks.len(), 2);

        let Block::Paragraph(heading) = &doc.blocks[0] else {
            panic!("expected paragraph");
        };
        assert_eq!(heading.style, NamedStyle::Heading(2));
        assert_eq!(heading.plain_text(), "Intro\n");

        let Block::Paragraph(item) = &doc.blocks[1] else {
            panic!("expected paragraph");
        };
        assert_eq!(item.bullet, Some(Bullet { nesting_level: 2 }));
        assert_eq!(item.elements.len(), 3);
        assert_eq!(item.elements[0], Element::TextRun(TextRun::new("see ").bold()));
        assert_eq!(
            item.elements[1],
            Element::TextRun(TextRun::new("docs").link("https://d.x"))
        );

        let image = &doc.inline_objects["kix.img1"];
        assert_eq!(image.title.as_deref(), Some("Chart"));
        assert_eq!(image.content_uri.as_deref(), Some("https://lh3.example/tmp"));
    }

    #[test]
    fn test_parse_table_cells() {
        let json = r#"{
            "body": { "content": [ { "table": { "rows": 1, "columns": 2, "tableRows": [
                { "tableCells": [
                    { "content": [ { "paragraph": { "elements": [ { "textRun": { "content": "Name\n" } } ] } } ] },
                    { "content": [ { "paragraph": { "elements": [ { "textRun": { "content": "Age\n" } } ] } } ] }
                ] }
            ] } } ] }
        }"#;

        let doc = parse_document_json(json).expect("json should parse");
        let Block::Table(table) = &doc.blocks[0] else {
            panic!("expected table");
        };
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].cells[1].content[0].plain_text(), "Age\n");
    }

    #[test]
    fn test_missing_body_is_an_error() {
        let err = parse_document_json(r#"{ "title": "empty" }"#).unwrap_err();
        assert!(matches!(err, Error::DocumentParse(_)));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let err = parse_document_json("{ not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
