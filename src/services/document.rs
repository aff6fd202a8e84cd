//! Uploaded documents and their text content.

use thiserror::Error;

/// Errors reading an uploaded document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Document {filename} is not valid UTF-8: {source}")]
    InvalidUtf8 {
        filename: String,
        #[source]
        source: std::str::Utf8Error,
    },
}

/// A file received from a client.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedDocument {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadedDocument {
    pub fn new(
        filename: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            filename: filename.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the declared type is `text/plain`, ignoring parameters.
    pub fn is_plain_text(&self) -> bool {
        self.content_type
            .split(';')
            .next()
            .map(|essence| essence.trim().eq_ignore_ascii_case("text/plain"))
            .unwrap_or(false)
    }

    /// Decoded text for plain-text uploads, otherwise `filler(filename)`.
    ///
    /// Only plain text is decoded; every other type (PDF, DOCX, ...) is
    /// represented by the filler string.
    pub fn text_or_else(
        &self,
        filler: impl FnOnce(&str) -> String,
    ) -> Result<String, DocumentError> {
        if !self.is_plain_text() {
            return Ok(filler(&self.filename));
        }
        std::str::from_utf8(&self.bytes)
            .map(str::to_string)
            .map_err(|source| DocumentError::InvalidUtf8 {
                filename: self.filename.clone(),
                source,
            })
    }
}
