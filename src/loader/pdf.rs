//! PDF text extraction
//!
//! Prefers per-page extraction through lopdf so each page becomes its own
//! document; falls back to whole-file extraction with pdf-extract when the
//! page-level pass yields nothing.

use crate::error::{Error, Result};
use crate::types::Document;

/// Load a PDF from disk into one document per page when possible
pub fn load_pdf(path: &str) -> Result<Vec<Document>> {
    let data = std::fs::read(path).map_err(|e| Error::load(path, e.to_string()))?;

    if let Ok(doc) = lopdf::Document::load_mem(&data) {
        let mut documents = Vec::new();

        for (&page_number, _) in doc.get_pages().iter() {
            if let Ok(text) = doc.extract_text(&[page_number]) {
                let cleaned = cleanup_text(&text);
                if !cleaned.is_empty() {
                    documents.push(Document::new(cleaned, path));
                }
            }
        }

        if !documents.is_empty() {
            return Ok(documents);
        }
    }

    // Page-level extraction failed or produced nothing; try the whole file
    let text = pdf_extract::extract_text_from_mem(&data)
        .map_err(|e| Error::load(path, format!("PDF extraction failed: {}", e)))?;

    let cleaned = cleanup_text(&text);
    if cleaned.is_empty() {
        return Err(Error::load(
            path,
            "No text content could be extracted from PDF",
        ));
    }

    Ok(vec![Document::new(cleaned, path)])
}

/// Strip null characters, trim lines, and drop blanks
fn cleanup_text(text: &str) -> String {
    text.replace('\0', "")
        .lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
