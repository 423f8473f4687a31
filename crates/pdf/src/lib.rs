//! # nyaya-pdf: Document Text Extraction
//!
//! Pulls text out of an uploaded PDF so it can be fed into a prompt as
//! document context. Extraction is best-effort at the page level: a page
//! that fails to load or decode contributes nothing, in page order, while a
//! document that cannot be parsed at all is a typed error for the caller to
//! present - never an error string posing as content.

use pdf::file::FileOptions;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum PdfExtractError {
    #[error("Failed to parse PDF document: {0}")]
    Parse(String),
}

/// Extracts the concatenated text of every page, in page order.
///
/// Pages with no extractable text (scanned images, decode failures)
/// contribute an empty string rather than failing the whole document.
pub fn extract_text(pdf_data: &[u8]) -> Result<String, PdfExtractError> {
    let file = FileOptions::cached()
        .load(pdf_data)
        .map_err(|e| PdfExtractError::Parse(e.to_string()))?;
    let resolver = file.resolver();
    let mut full_text = String::new();

    for page_num in 0..file.num_pages() {
        let page = match file.get_page(page_num) {
            Ok(page) => page,
            Err(e) => {
                warn!("Skipping unreadable page {page_num}: {e}");
                continue;
            }
        };
        let Some(content) = &page.contents else {
            continue;
        };
        let operations = match content.operations(&resolver) {
            Ok(ops) => ops,
            Err(e) => {
                warn!("Skipping undecodable content on page {page_num}: {e}");
                continue;
            }
        };
        for op in operations.iter() {
            if let pdf::content::Op::TextDraw { text } = op {
                full_text.push_str(&text.to_string_lossy());
            }
        }
    }
    Ok(full_text)
}
