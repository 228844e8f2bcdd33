//! CV file text extraction.
//!
//! Runs before any CV-bearing generation call; the LLM layer never sees files.
//! PDF goes through `pdf-extract`, DOCX is read straight out of its zip container.

use thiserror::Error;
use tracing::{debug, warn};

pub mod docx;
pub mod handlers;

/// Uploads above this size are refused before any parsing.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

const PDF_MIME: &str = "application/pdf";
const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Content type wins; the file extension is the fallback for clients that send
    /// `application/octet-stream`.
    pub fn detect(content_type: Option<&str>, file_name: Option<&str>) -> Option<Self> {
        let mime = content_type
            .map(|ct| ct.split(';').next().unwrap_or(ct).trim().to_ascii_lowercase());
        match mime.as_deref() {
            Some(PDF_MIME) => return Some(DocumentKind::Pdf),
            Some(DOCX_MIME) => return Some(DocumentKind::Docx),
            _ => {}
        }

        let name = file_name?.to_ascii_lowercase();
        if name.ends_with(".pdf") {
            Some(DocumentKind::Pdf)
        } else if name.ends_with(".docx") {
            Some(DocumentKind::Docx)
        } else {
            None
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::Docx => "docx",
        }
    }
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),

    #[error("File exceeds the {limit} byte limit")]
    TooLarge { limit: usize },

    #[error("Could not read {kind} content: {detail}")]
    Corrupt { kind: &'static str, detail: String },

    #[error("Failed to process file: {0}")]
    Processing(String),
}

/// Extracts plain text from an uploaded CV.
///
/// CPU-bound; async callers should run it on a blocking thread.
pub fn extract_text(
    bytes: &[u8],
    content_type: Option<&str>,
    file_name: Option<&str>,
) -> Result<String, ExtractError> {
    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(ExtractError::TooLarge {
            limit: MAX_UPLOAD_BYTES,
        });
    }

    let kind = DocumentKind::detect(content_type, file_name).ok_or_else(|| {
        ExtractError::UnsupportedType(
            content_type
                .or(file_name)
                .unwrap_or("unknown")
                .to_string(),
        )
    })?;

    let text = match kind {
        // pdf-extract panics on some malformed inputs instead of returning an error.
        DocumentKind::Pdf => std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes))
            .map_err(|_| ExtractError::Corrupt {
                kind: kind.label(),
                detail: "parser aborted".to_string(),
            })?
            .map_err(|e| ExtractError::Corrupt {
                kind: kind.label(),
                detail: e.to_string(),
            })?,
        DocumentKind::Docx => docx::extract_docx_text(bytes)?,
    };

    let text = normalize_whitespace(&text);
    if text.is_empty() {
        warn!("No text found in uploaded {}", kind.label());
        return Err(ExtractError::Processing(format!(
            "no text found in {} file",
            kind.label()
        )));
    }

    debug!("Extracted {} chars from {}", text.len(), kind.label());
    Ok(text)
}

/// Collapses runs of spaces inside lines and drops blank lines.
fn normalize_whitespace(text: &str) -> String {
    text.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_by_content_type() {
        assert_eq!(
            DocumentKind::detect(Some("application/pdf"), None),
            Some(DocumentKind::Pdf)
        );
        assert_eq!(
            DocumentKind::detect(Some(DOCX_MIME), Some("cv.bin")),
            Some(DocumentKind::Docx)
        );
    }

    #[test]
    fn test_detect_by_extension_fallback() {
        assert_eq!(
            DocumentKind::detect(Some("application/octet-stream"), Some("My CV.PDF")),
            Some(DocumentKind::Pdf)
        );
        assert_eq!(
            DocumentKind::detect(None, Some("resume.docx")),
            Some(DocumentKind::Docx)
        );
        assert_eq!(DocumentKind::detect(Some("text/plain"), Some("cv.txt")), None);
    }

    #[test]
    fn test_too_large_checked_first() {
        let bytes = vec![0u8; MAX_UPLOAD_BYTES + 1];
        let err = extract_text(&bytes, Some("text/plain"), None).unwrap_err();
        assert!(matches!(err, ExtractError::TooLarge { .. }));
    }

    #[test]
    fn test_unsupported_type() {
        let err = extract_text(b"hello", Some("text/plain"), Some("cv.txt")).unwrap_err();
        match err {
            ExtractError::UnsupportedType(t) => assert_eq!(t, "text/plain"),
            other => panic!("expected unsupported, got {other:?}"),
        }
    }

    #[test]
    fn test_garbage_pdf_is_corrupt() {
        let err = extract_text(b"not a pdf at all", Some(PDF_MIME), None).unwrap_err();
        assert!(matches!(err, ExtractError::Corrupt { kind: "pdf", .. }));
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(
            normalize_whitespace("  Jane   Doe \n\n\n Rust \t engineer  "),
            "Jane Doe\nRust engineer"
        );
    }
}
