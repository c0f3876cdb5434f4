//! Document extraction: file bytes in, [`RawDocument`] out.
//!
//! Dispatches on file extension. The splitter never sees bytes; every
//! decoding concern ends here.

mod md;
mod pdf;
mod txt;

use thiserror::Error;

use ragline_core::{DocumentMetadata, RawDocument};

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),
    #[error("PDF extraction failed: {0}")]
    PdfError(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Extract text from file bytes based on the filename's extension and
/// wrap it as an immutable [`RawDocument`] with source metadata.
pub fn extract_text(bytes: &[u8], filename: &str) -> Result<RawDocument, ExtractionError> {
    let ext = filename.rsplit('.').next().unwrap_or("").to_lowercase();

    let mut metadata = DocumentMetadata::new(filename).with_file(filename, ext.clone());

    let text = match ext.as_str() {
        "txt" | "text" => txt::extract_txt(bytes),
        "md" | "markdown" => {
            let (text, headings) = md::extract_md(bytes);
            if !headings.is_empty() {
                metadata.set_extension("headings", serde_json::json!(headings));
            }
            text
        }
        "pdf" => {
            let pages = pdf::extract_pdf(bytes)?;
            metadata.set_extension("page_count", serde_json::json!(pages.len()));
            pages.join("\n\n")
        }
        other => return Err(ExtractionError::UnsupportedType(other.to_string())),
    };

    Ok(RawDocument::new(text, metadata))
}
