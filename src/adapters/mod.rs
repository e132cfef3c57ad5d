//! Adapters between external formats and the core data structures.

pub mod gdocs;
pub mod markdown;
