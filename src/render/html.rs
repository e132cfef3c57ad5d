use super::escape::{escape_html, escape_html_attr};
use super::styles::{StyleCatalog, CARD_KEYFRAMES};
use super::table_card::TableCardState;
use crate::core::ast::{NodeId, NodeKind, SyntaxTree, WalkStatus};
use crate::render::Renderer;

/// Delay step between consecutive table cards.
pub const DEFAULT_ROW_DELAY_MS: u32 = 100;

/// Renders a syntax tree to HTML that only uses inline styles and the tag set
/// the WeChat editor accepts. Tables become a stack of animated cards, one per
/// data row, with the header row turned into per-value labels.
#[derive(Debug, Clone, Copy)]
pub struct StyledHtmlRenderer<'a> {
    styles: &'a StyleCatalog,
    row_delay_ms: u32,
}

impl<'a> StyledHtmlRenderer<'a> {
    pub fn new(styles: &'a StyleCatalog) -> Self {
        Self {
            styles,
            row_delay_ms: DEFAULT_ROW_DELAY_MS,
        }
    }

    pub fn with_row_delay_ms(mut self, row_delay_ms: u32) -> Self {
        self.row_delay_ms = row_delay_ms;
        self
    }
}

impl Renderer for StyledHtmlRenderer<'_> {
    fn render(&self, tree: &SyntaxTree) -> String {
        let mut pass = RenderPass {
            styles: self.styles,
            row_delay_ms: self.row_delay_ms,
            out: String::new(),
            table: TableCardState::default(),
            keyframes_emitted: false,
        };
        pass.out
            .push_str(&format!("<div style=\"{}\">\n", style_attr(&self.styles.body)));
        tree.walk(&mut |tree, id, entering| pass.visit(tree, id, entering));
        pass.out.push_str("</div>");
        pass.out
    }
}

/// Mutable state of a single `render` call.
struct RenderPass<'a> {
    styles: &'a StyleCatalog,
    row_delay_ms: u32,
    out: String,
    table: TableCardState,
    keyframes_emitted: bool,
}

impl RenderPass<'_> {
    fn visit(&mut self, tree: &SyntaxTree, id: NodeId, entering: bool) -> WalkStatus {
        match tree.kind(id) {
            NodeKind::Document | NodeKind::Fragment | NodeKind::HtmlBlock => WalkStatus::Continue,
            NodeKind::Heading { level } => self.render_heading(*level, entering),
            NodeKind::Paragraph => self.render_paragraph(tree, id, entering),
            NodeKind::Blockquote => self.render_blockquote(entering),
            NodeKind::CodeBlock { lines, .. } => self.render_code_block(lines, entering),
            NodeKind::ThematicBreak => {
                if entering {
                    self.out.push_str("<hr />\n");
                }
                WalkStatus::Continue
            }
            NodeKind::Image { destination, title } => {
                self.render_image(tree, id, destination, title, entering)
            }
            NodeKind::List { ordered, start } => self.render_list(*ordered, *start, entering),
            NodeKind::ListItem => self.render_list_item(entering),
            NodeKind::Table => self.render_table(entering),
            NodeKind::TableHeader => {
                self.table.in_header = entering;
                WalkStatus::Continue
            }
            NodeKind::TableRow => self.render_table_row(tree, id, entering),
            NodeKind::TableCell => self.render_table_cell(tree, id, entering),
            NodeKind::Text(text) => {
                if entering {
                    self.out.push_str(&escape_html(text));
                }
                WalkStatus::Continue
            }
            NodeKind::Emphasis => self.wrap("<em>", "</em>", entering),
            NodeKind::Strong => self.wrap("<strong>", "</strong>", entering),
            NodeKind::Strikethrough => self.wrap("<del>", "</del>", entering),
            NodeKind::Link { destination, title } => {
                if entering {
                    self.out
                        .push_str(&format!("<a href=\"{}\"", escape_html_attr(destination)));
                    if !title.is_empty() {
                        self.out
                            .push_str(&format!(" title=\"{}\"", escape_html_attr(title)));
                    }
                    self.out.push('>');
                } else {
                    self.out.push_str("</a>");
                }
                WalkStatus::Continue
            }
            NodeKind::CodeSpan(code) => {
                if entering {
                    self.out
                        .push_str(&format!("<code>{}</code>", escape_html(code)));
                }
                WalkStatus::Continue
            }
            NodeKind::SoftBreak => {
                if entering {
                    self.out.push('\n');
                }
                WalkStatus::Continue
            }
            NodeKind::HardBreak => {
                if entering {
                    self.out.push_str("<br />\n");
                }
                WalkStatus::Continue
            }
            NodeKind::Html(_) => {
                if entering {
                    self.out.push_str("<!-- raw HTML omitted -->");
                }
                WalkStatus::Continue
            }
        }
    }

    fn wrap(&mut self, open: &str, close: &str, entering: bool) -> WalkStatus {
        self.out.push_str(if entering { open } else { close });
        WalkStatus::Continue
    }

    fn render_heading(&mut self, level: u8, entering: bool) -> WalkStatus {
        // Semantic heading tags are not allowed by the editor.
        if entering {
            self.out.push_str(&format!(
                "<p style=\"{}\">",
                style_attr(self.styles.heading(level))
            ));
        } else {
            self.out.push_str("</p>\n");
        }
        WalkStatus::Continue
    }

    fn render_paragraph(&mut self, tree: &SyntaxTree, id: NodeId, entering: bool) -> WalkStatus {
        if matches!(tree.parent_kind(id), Some(NodeKind::ListItem)) {
            return WalkStatus::Continue;
        }
        if entering {
            self.out
                .push_str(&format!("<p style=\"{}\">", style_attr(&self.styles.paragraph)));
        } else {
            self.out.push_str("</p>\n");
        }
        WalkStatus::Continue
    }

    fn render_blockquote(&mut self, entering: bool) -> WalkStatus {
        if entering {
            self.out.push_str(&format!(
                "<blockquote style=\"{}\">\n",
                style_attr(&self.styles.blockquote)
            ));
        } else {
            self.out.push_str("</blockquote>\n");
        }
        WalkStatus::Continue
    }

    fn render_code_block(&mut self, lines: &[String], entering: bool) -> WalkStatus {
        if entering {
            self.out.push_str(&format!(
                "<pre style=\"{}\"><code>",
                style_attr(&self.styles.code_block)
            ));
            for line in lines {
                self.out.push_str(&escape_html(line));
            }
        } else {
            self.out.push_str("</code></pre>\n");
        }
        WalkStatus::SkipChildren
    }

    fn render_image(
        &mut self,
        tree: &SyntaxTree,
        id: NodeId,
        destination: &str,
        title: &str,
        entering: bool,
    ) -> WalkStatus {
        if entering {
            self.out.push_str(&format!(
                "<img src=\"{}\" alt=\"{}\"",
                escape_html_attr(destination),
                escape_html_attr(&tree.text_content(id))
            ));
            if !title.is_empty() {
                self.out
                    .push_str(&format!(" title=\"{}\"", escape_html_attr(title)));
            }
            self.out.push_str(&format!(
                " style=\"{}\" />",
                style_attr(&self.styles.image)
            ));
        }
        WalkStatus::SkipChildren
    }

    fn render_list(&mut self, ordered: bool, start: Option<u64>, entering: bool) -> WalkStatus {
        let (tag, style) = if ordered {
            ("ol", &self.styles.ordered_list)
        } else {
            ("ul", &self.styles.unordered_list)
        };
        if entering {
            let start_attr = match start {
                Some(n) if ordered && n != 1 => format!(" start=\"{}\"", n),
                _ => String::new(),
            };
            let open = format!("<{}{} style=\"{}\">\n", tag, start_attr, style_attr(style));
            self.out.push_str(&open);
        } else {
            self.out.push_str(&format!("</{}>\n", tag));
        }
        WalkStatus::Continue
    }

    fn render_list_item(&mut self, entering: bool) -> WalkStatus {
        if entering {
            self.out
                .push_str(&format!("<li style=\"{}\">", style_attr(&self.styles.list_item)));
        } else {
            self.out.push_str("</li>\n");
        }
        WalkStatus::Continue
    }

    fn render_table(&mut self, entering: bool) -> WalkStatus {
        if entering {
            self.table.reset();
            if !self.keyframes_emitted {
                self.out.push_str(CARD_KEYFRAMES);
                self.out.push('\n');
                self.keyframes_emitted = true;
            }
            self.out.push_str(&format!(
                "<section style=\"{}\">\n",
                style_attr(&self.styles.table_wrapper)
            ));
        } else {
            self.out.push_str("</section>\n");
        }
        WalkStatus::Continue
    }

    fn render_table_row(&mut self, tree: &SyntaxTree, id: NodeId, entering: bool) -> WalkStatus {
        // Header rows only feed labels; they are never shown.
        if matches!(tree.parent_kind(id), Some(NodeKind::TableHeader)) {
            return WalkStatus::Continue;
        }
        if entering {
            let delay = self.table.next_row_delay_ms(self.row_delay_ms);
            let style = with_declaration(
                &self.styles.table_card,
                &format!("animation-delay: {}ms;", delay),
            );
            self.out
                .push_str(&format!("<section style=\"{}\">\n", style_attr(&style)));
        } else {
            self.out.push_str("</section>\n");
        }
        WalkStatus::Continue
    }

    fn render_table_cell(&mut self, tree: &SyntaxTree, id: NodeId, entering: bool) -> WalkStatus {
        if !entering {
            return WalkStatus::SkipChildren;
        }

        let text = tree.text_content(id).trim().to_string();
        if self.table.in_header {
            self.table.headers.push(text);
            return WalkStatus::SkipChildren;
        }
        if text.is_empty() {
            return WalkStatus::SkipChildren;
        }

        let column = tree
            .previous_siblings(id)
            .iter()
            .filter(|&&sibling| matches!(tree.kind(sibling), NodeKind::TableCell))
            .count();
        let is_last = tree
            .next_siblings(id)
            .iter()
            .filter(|&&sibling| matches!(tree.kind(sibling), NodeKind::TableCell))
            .all(|&sibling| tree.text_content(sibling).trim().is_empty());
        let row_style = if is_last {
            &self.styles.table_row_last
        } else {
            &self.styles.table_row
        };

        self.out.push_str(&format!(
            "<p style=\"{}\"><strong style=\"{}\">{}: </strong>{}</p>\n",
            style_attr(row_style),
            style_attr(&self.styles.table_label),
            escape_html(self.table.label(column)),
            escape_html(&text)
        ));
        WalkStatus::SkipChildren
    }
}

fn style_attr(style: &str) -> String {
    escape_html(style)
}

/// Appends one CSS declaration to an inline style, adding the separator when
/// the style does not already end with one.
fn with_declaration(style: &str, declaration: &str) -> String {
    let style = style.trim_end();
    if style.is_empty() {
        declaration.to_string()
    } else if style.ends_with(';') {
        format!("{} {}", style, declaration)
    } else {
        format!("{}; {}", style, declaration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::markdown::{CmarkParser, MarkupParser};
    use pretty_assertions::assert_eq;

    fn render(markup: &str) -> String {
        let styles = StyleCatalog::default();
        let tree = CmarkParser.parse(markup).expect("markup should parse");
        StyledHtmlRenderer::new(&styles).render(&tree)
    }

    #[test]
    fn test_heading_uses_styled_paragraph() {
        let styles = StyleCatalog::default();
        let html = render("## Section\n");
        assert!(html.contains(&format!("<p style=\"{}\">Section</p>", styles.heading2)));
        assert!(!html.contains("<h2"));
    }

    #[test]
    fn test_deep_heading_falls_back_to_level_three() {
        let styles = StyleCatalog::default();
        let html = render("##### Deep\n");
        assert!(html.contains(&format!("<p style=\"{}\">Deep</p>", styles.heading3)));
    }

    #[test]
    fn test_body_wrapper() {
        let styles = StyleCatalog::default();
        let html = render("hello\n");
        assert_eq!(
            html,
            format!(
                "<div style=\"{}\">\n<p style=\"{}\">hello</p>\n</div>",
                styles.body, styles.paragraph
            )
        );
    }

    #[test]
    fn test_paragraph_inside_list_item_has_no_wrapper() {
        let styles = StyleCatalog::default();
        let html = render("* one\n\n* two\n");
        assert!(html.contains(&format!("<li style=\"{}\">one</li>", styles.list_item)));
        assert!(!html.contains(&format!("<p style=\"{}\">one", styles.paragraph)));
        assert!(html.contains(&format!("<ul style=\"{}\">", styles.unordered_list)));
    }

    #[test]
    fn test_ordered_list_start_attribute() {
        let html = render("2. b\n3. c\n");
        assert!(html.contains("<ol start=\"2\" style=\""));
    }

    #[test]
    fn test_code_block_is_escaped_verbatim() {
        let styles = StyleCatalog::default();
        let html = render("```\nif a < b && c {\n}\n```\n");
        assert!(html.contains(&format!(
            "<pre style=\"{}\"><code>if a &lt; b &amp;&amp; c {{\n}}\n</code></pre>",
            styles.code_block
        )));
    }

    #[test]
    fn test_image_is_self_closing() {
        let styles = StyleCatalog::default();
        let html = render("![chart](https://cdn/x.png)\n");
        assert!(html.contains(&format!(
            "<img src=\"https://cdn/x.png\" alt=\"chart\" style=\"{}\" />",
            styles.image
        )));
    }

    #[test]
    fn test_inline_formatting() {
        let html = render("***both*** ~~gone~~ [link](https://x.y) `a<b`\n");
        assert!(html.contains("<em><strong>both</strong></em>"));
        assert!(html.contains("<del>gone</del>"));
        assert!(html.contains("<a href=\"https://x.y\">link</a>"));
        assert!(html.contains("<code>a&lt;b</code>"));
    }

    #[test]
    fn test_raw_html_is_not_passed_through() {
        let html = render("a <script>x</script> b\n");
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_keyframes_emitted_once() {
        let html = render("| A |\n| --- |\n| 1 |\n\n| B |\n| --- |\n| 2 |\n");
        assert_eq!(html.matches("@keyframes").count(), 1);
        assert_eq!(html.matches("<style>").count(), 1);
    }

    #[test]
    fn test_with_declaration() {
        assert_eq!(with_declaration("a: 1;", "b: 2;"), "a: 1; b: 2;");
        assert_eq!(with_declaration("a: 1", "b: 2;"), "a: 1; b: 2;");
        assert_eq!(with_declaration("", "b: 2;"), "b: 2;");
    }
}
