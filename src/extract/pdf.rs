//! PDF text extraction
//!
//! Pulls raw text out of a PDF page by page. Pages that fail to decode are
//! skipped with a warning so a single bad page does not sink the whole
//! document.

use std::path::Path;

use lopdf::Document;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("Failed to read PDF: {0}")]
    Unreadable(String),

    #[error("No extractable text in document")]
    NoText,
}

pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Extract the full text of a PDF file.
///
/// Returns `ExtractionError::Unreadable` when the file cannot be loaded and
/// `ExtractionError::NoText` when no non-whitespace text survives extraction
/// (encrypted or image-only documents).
pub fn extract_text(path: &Path) -> Result<String> {
    let doc = Document::load(path).map_err(|e| ExtractionError::Unreadable(e.to_string()))?;

    let pages = doc.get_pages();
    let total = pages.len();
    let mut text = String::new();

    for (page_num, _page_id) in pages {
        match doc.extract_text(&[page_num]) {
            Ok(content) => {
                if !content.trim().is_empty() {
                    text.push_str(&content);
                    text.push('\n');
                }
            }
            Err(e) => {
                log::warn!("Skipping page {}/{}: {}", page_num, total, e);
            }
        }
    }

    if text.trim().is_empty() {
        return Err(ExtractionError::NoText);
    }

    log::debug!("Extracted {} chars from {} pages", text.len(), total);
    Ok(text)
}
