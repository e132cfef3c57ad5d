mod parser;

use crate::core::ast::SyntaxTree;
use crate::Result;

/// Turns intermediate markup text into a syntax tree.
pub trait MarkupParser {
    fn parse(&self, markup: &str) -> Result<SyntaxTree>;
}

pub use parser::CmarkParser;
