//! PDF → cleaned text for the upload path.

use std::io::Write;

use bytes::Bytes;
use thiserror::Error;
use tracing::{info, warn};

use crate::extraction::cleaner::clean_text;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("temp file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction failed: {0}")]
    Extract(String),
}

/// Extracts and cleans the text of an uploaded PDF.
///
/// Never fails: unreadable documents (and panics inside the PDF library)
/// are logged and read as empty text, which extracts to an empty record.
pub async fn read_pdf_text(bytes: Bytes) -> String {
    let size = bytes.len();
    match tokio::task::spawn_blocking(move || extract_from_bytes(&bytes)).await {
        Ok(Ok(text)) => {
            let cleaned = clean_text(&text);
            info!(bytes = size, chars = cleaned.chars().count(), "PDF text extracted");
            cleaned
        }
        Ok(Err(e)) => {
            warn!(bytes = size, error = %e, "PDF text extraction failed");
            String::new()
        }
        Err(e) => {
            warn!(bytes = size, error = %e, "PDF extraction worker aborted");
            String::new()
        }
    }
}

/// The PDF library reads from a path, so the upload is staged in a temp file
/// that is removed on drop.
fn extract_from_bytes(bytes: &[u8]) -> Result<String, PdfError> {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(bytes)?;
    file.flush()?;

    pdf_extract::extract_text(file.path()).map_err(|e| PdfError::Extract(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_garbage_bytes_read_as_empty_text() {
        let text = read_pdf_text(Bytes::from_static(b"definitely not a pdf")).await;
        assert_eq!(text, "");
    }

    #[tokio::test]
    async fn test_empty_upload_reads_as_empty_text() {
        assert_eq!(read_pdf_text(Bytes::new()).await, "");
    }
}
