use super::MarkupParser;
use crate::core::ast::{NodeId, NodeKind, SyntaxTree};
use crate::error::Error;
use crate::Result;
use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// CommonMark parser with the table and strikethrough extensions enabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct CmarkParser;

impl MarkupParser for CmarkParser {
    fn parse(&self, markup: &str) -> Result<SyntaxTree> {
        let mut opts = Options::empty();
        opts.insert(Options::ENABLE_TABLES);
        opts.insert(Options::ENABLE_STRIKETHROUGH);

        let mut builder = TreeBuilder::new();
        for event in Parser::new_ext(markup, opts) {
            builder.push(event)?;
        }
        builder.finish()
    }
}

struct TreeBuilder {
    tree: SyntaxTree,
    stack: Vec<NodeId>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            tree: SyntaxTree::new(),
            stack: vec![SyntaxTree::ROOT],
        }
    }

    fn current(&self) -> NodeId {
        self.stack.last().copied().unwrap_or(SyntaxTree::ROOT)
    }

    fn open(&mut self, kind: NodeKind) {
        let id = self.tree.append(self.current(), kind);
        self.stack.push(id);
    }

    fn close(&mut self) -> Result<()> {
        if self.stack.len() <= 1 {
            return Err(Error::MarkupParse(
                "end event without a matching start".to_string(),
            ));
        }
        self.stack.pop();
        Ok(())
    }

    fn leaf(&mut self, kind: NodeKind) {
        self.tree.append(self.current(), kind);
    }

    fn push(&mut self, event: Event<'_>) -> Result<()> {
        match event {
            Event::Start(Tag::TableHead) => {
                // Header cells get a row of their own, like body cells.
                self.open(NodeKind::TableHeader);
                self.open(NodeKind::TableRow);
            }
            Event::Start(tag) => self.open(Self::kind_for(tag)),
            Event::End(TagEnd::TableHead) => {
                self.close()?;
                self.close()?;
            }
            Event::End(_) => self.close()?,
            Event::Text(text) => {
                let current = self.current();
                if let NodeKind::CodeBlock { lines, .. } = self.tree.kind_mut(current) {
                    lines.extend(text.split_inclusive('\n').map(str::to_string));
                } else {
                    self.leaf(NodeKind::Text(text.into_string()));
                }
            }
            Event::Code(code) => self.leaf(NodeKind::CodeSpan(code.into_string())),
            Event::Html(html) | Event::InlineHtml(html) => {
                self.leaf(NodeKind::Html(html.into_string()))
            }
            Event::SoftBreak => self.leaf(NodeKind::SoftBreak),
            Event::HardBreak => self.leaf(NodeKind::HardBreak),
            Event::Rule => self.leaf(NodeKind::ThematicBreak),
            Event::FootnoteReference(label) => {
                self.leaf(NodeKind::Text(format!("[^{}]", label)))
            }
            Event::TaskListMarker(checked) => {
                self.leaf(NodeKind::Text(if checked { "[x] " } else { "[ ] " }.to_string()))
            }
            _ => {}
        }
        Ok(())
    }

    fn kind_for(tag: Tag<'_>) -> NodeKind {
        match tag {
            Tag::Paragraph => NodeKind::Paragraph,
            Tag::Heading { level, .. } => NodeKind::Heading {
                level: heading_level(level),
            },
            Tag::BlockQuote(_) => NodeKind::Blockquote,
            Tag::CodeBlock(kind) => match kind {
                CodeBlockKind::Fenced(info) => NodeKind::CodeBlock {
                    fenced: true,
                    info: info.into_string(),
                    lines: Vec::new(),
                },
                CodeBlockKind::Indented => NodeKind::CodeBlock {
                    fenced: false,
                    info: String::new(),
                    lines: Vec::new(),
                },
            },
            Tag::HtmlBlock => NodeKind::HtmlBlock,
            Tag::List(start) => NodeKind::List {
                ordered: start.is_some(),
                start,
            },
            Tag::Item => NodeKind::ListItem,
            Tag::Table(_) => NodeKind::Table,
            Tag::TableRow => NodeKind::TableRow,
            Tag::TableCell => NodeKind::TableCell,
            Tag::Emphasis => NodeKind::Emphasis,
            Tag::Strong => NodeKind::Strong,
            Tag::Strikethrough => NodeKind::Strikethrough,
            Tag::Link {
                dest_url, title, ..
            } => NodeKind::Link {
                destination: dest_url.into_string(),
                title: title.into_string(),
            },
            Tag::Image {
                dest_url, title, ..
            } => NodeKind::Image {
                destination: dest_url.into_string(),
                title: title.into_string(),
            },
            _ => NodeKind::Fragment,
        }
    }

    fn finish(self) -> Result<SyntaxTree> {
        if self.stack.len() != 1 {
            return Err(Error::MarkupParse(format!(
                "{} unclosed block(s) at end of input",
                self.stack.len() - 1
            )));
        }
        Ok(self.tree)
    }
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
