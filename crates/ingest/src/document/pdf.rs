use super::ExtractionError;

/// Extract the PDF text layer as a list of page texts.
///
/// `pdf-extract` returns the whole document as one string; form feed
/// characters (\x0C) mark page boundaries when present. A PDF with no
/// text layer (scanned/image-only) yields a single empty page, which
/// downstream splitting turns into an empty result.
pub(super) fn extract_pdf(bytes: &[u8]) -> Result<Vec<String>, ExtractionError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ExtractionError::PdfError(e.to_string()))?;

    if text.trim().is_empty() {
        tracing::warn!("PDF has no extractable text layer");
        return Ok(vec![String::new()]);
    }

    let pages: Vec<String> = if text.contains('\x0C') {
        text.split('\x0C')
            .map(str::trim)
            .filter(|page| !page.is_empty())
            .map(str::to_string)
            .collect()
    } else {
        vec![text.trim().to_string()]
    };

    Ok(pages)
}
