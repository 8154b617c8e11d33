//! PDF text extraction.

use crate::error::{CliError, Result};
use std::path::Path;
use tracing::{info, warn};

/// Extract the full text content of a PDF file.
///
/// Returns the concatenated text of all pages. Scanned PDFs with no text
/// layer come back empty; that is reported as a warning rather than an
/// error so the caller can decide whether an empty document is acceptable.
pub fn extract_text_from_pdf(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(CliError::Pdf(format!(
            "file not found: {}",
            path.display()
        )));
    }

    let text = pdf_extract::extract_text(path)
        .map_err(|e| CliError::Pdf(format!("{}: {}", path.display(), e)))?;

    if text.trim().is_empty() {
        warn!(path = %path.display(), "PDF produced no text (scanned document?)");
    } else {
        info!(path = %path.display(), chars = text.chars().count(), "Extracted PDF text");
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_pdf_error() {
        let err = extract_text_from_pdf(Path::new("no/such/file.pdf")).unwrap_err();
        assert!(matches!(err, CliError::Pdf(_)));
        assert!(err.to_string().contains("file not found"));
    }
}
