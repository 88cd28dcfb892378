use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::errors::AppError;

/// Reads all of stdin as UTF-8.
pub fn read_stdin() -> Result<String, AppError> {
    read_text(std::io::stdin().lock())
}

pub fn read_text(mut reader: impl Read) -> Result<String, AppError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text)
}

/// Reads a resume from disk. `.pdf` files are run through text extraction,
/// anything else is read as UTF-8 text.
pub fn read_file(path: &Path) -> Result<String, AppError> {
    if is_pdf_name(&path.to_string_lossy()) {
        let bytes = std::fs::read(path)?;
        return extract_pdf_text(&bytes);
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Reads from `path` when given, otherwise from stdin.
pub fn read_input(path: Option<&Path>) -> Result<String, AppError> {
    match path {
        Some(path) => read_file(path),
        None => read_stdin(),
    }
}

/// pdf-extract panics on some malformed documents; those panics surface as
/// `AppError::PdfExtraction` like ordinary parse failures.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, AppError> {
    let text = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes))
        .map_err(|_| AppError::PdfExtraction("PDF parser panicked".to_string()))?
        .map_err(|e| AppError::PdfExtraction(e.to_string()))?;
    debug!(bytes = bytes.len(), chars = text.len(), "extracted PDF text");
    Ok(text)
}

pub fn is_pdf_name(name: &str) -> bool {
    Path::new(name)
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}
