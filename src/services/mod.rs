//! Request orchestration shared by the HTTP handlers and the CLI.
//!
//! Each service builds prompts, calls the inference provider and substitutes
//! fallback text. Nothing here knows about HTTP.

pub mod analysis;
pub mod chat;
pub mod comparison;
pub mod document;
pub mod policy;
pub mod speech;
pub mod summarize;
pub mod templates;

use thiserror::Error;

pub use document::{DocumentError, UploadedDocument};
pub use policy::{Endpoint, FailureMode};

/// Errors surfaced by services.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The caller did not supply required input.
    #[error("{0}")]
    InvalidInput(String),

    #[error(transparent)]
    Document(#[from] DocumentError),

    /// The inference service produced nothing usable and no fallback exists.
    #[error("Inference unavailable: {0}")]
    Unavailable(String),
}

/// First `max_chars` characters of `text` (not bytes).
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Size in kilobytes with two decimals, as shown in reports.
pub fn format_kb(bytes: usize) -> String {
    format!("{:.2}", bytes as f64 / 1024.0)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars_counts_characters() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello", 3), "hel");
        assert_eq!(truncate_chars("§§§§", 2), "§§");
        assert_eq!(truncate_chars("", 5), "");
    }

    #[test]
    fn test_format_kb() {
        assert_eq!(format_kb(1024), "1.00");
        assert_eq!(format_kb(1536), "1.50");
        assert_eq!(format_kb(0), "0.00");
    }
}
