//! PDF text extraction boundary.

use crate::errors::AppError;

/// Extracts the embedded text layer from a PDF, pages concatenated in order.
/// A scanned-image-only PDF yields an empty (or whitespace) string, which is
/// valid input downstream. Invalid bytes fail with `PdfDecode`.
pub fn extract_resume_text(bytes: &[u8]) -> Result<String, AppError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| AppError::PdfDecode(e.to_string()))
}
