mod escape;
mod html;
mod styles;
mod table_card;

use crate::core::ast::SyntaxTree;

pub use escape::{
    escape_html, escape_html_attr, escape_markdown_line_start, escape_markdown_link_destination,
    escape_markdown_text,
};
pub use html::{StyledHtmlRenderer, DEFAULT_ROW_DELAY_MS};
pub use styles::{StyleCatalog, CARD_ANIMATION_NAME, CARD_KEYFRAMES};
pub use table_card::TableCardState;

pub trait Renderer {
    fn render(&self, tree: &SyntaxTree) -> String;
}
