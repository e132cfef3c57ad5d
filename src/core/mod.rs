//! Core data structures shared by the extraction and rendering stages.

pub mod ast;
pub mod document;
