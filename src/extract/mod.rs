//! PDF text extraction and normalization
//!
//! Provides:
//! - Page-by-page text extraction from PDF files
//! - Whitespace normalization
//! - Sentence splitting for the card generator

mod pdf;
mod text;

pub use pdf::*;
pub use text::*;
