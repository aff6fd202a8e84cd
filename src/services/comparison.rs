//! Side-by-side comparison of two legal documents.

use chrono::NaiveDate;
use tracing::{info, warn};

use super::{format_kb, truncate_chars, ServiceError, UploadedDocument};
use crate::inference::{GenerationParams, InferenceProvider};

/// Characters of each document embedded in the prompt.
pub const PROMPT_TEXT_CHARS: usize = 800;

/// Comparison text used when generation fails.
pub const FALLBACK_COMPARISON: &str = "Documents compared for structural and content differences. Key variations identified in clauses, terms, and legal provisions. Professional review recommended for detailed analysis.";

const MAX_NEW_TOKENS: u32 = 200;
const TEMPERATURE: f32 = 0.7;

/// Build the comparison prompt from both document texts.
pub fn build_prompt(first: &str, second: &str) -> String {
    format!(
        "Compare these two legal documents and identify:
1. Key differences
2. Similar clauses
3. Missing elements in each
4. Recommendations for alignment

Document 1: {}

Document 2: {}

Comparison Analysis:",
        truncate_chars(first, PROMPT_TEXT_CHARS),
        truncate_chars(second, PROMPT_TEXT_CHARS)
    )
}

/// Compare two uploads and render the report.
pub async fn compare(
    provider: &dyn InferenceProvider,
    first: &UploadedDocument,
    second: &UploadedDocument,
) -> Result<String, ServiceError> {
    let text1 = first.text_or_else(|name| format!("Document 1: {}", name))?;
    let text2 = second.text_or_else(|name| format!("Document 2: {}", name))?;

    info!("Comparing {} with {}", first.filename, second.filename);

    let prompt = build_prompt(&text1, &text2);
    let params = GenerationParams::new(MAX_NEW_TOKENS, TEMPERATURE).without_full_text();

    let comparison = provider
        .generate(&prompt, &params)
        .await
        .and_then(|candidates| candidates.into_iter().next())
        .map(|first| first.generated_text.trim().to_string())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| {
            warn!("Using fallback comparison text");
            FALLBACK_COMPARISON.to_string()
        });

    Ok(render(
        first,
        second,
        chrono::Local::now().date_naive(),
        &comparison,
    ))
}

/// Render the comparison report.
pub fn render(
    first: &UploadedDocument,
    second: &UploadedDocument,
    compared_on: NaiveDate,
    comparison: &str,
) -> String {
    format!(
        r#"
DOCUMENT COMPARISON REPORT
=========================

Files Compared:
- Document 1: {name1} ({size1} KB)
- Document 2: {name2} ({size2} KB)

Analysis Date: {date}

COMPARISON RESULTS:
{comparison}

RECOMMENDATIONS:
• Review highlighted differences carefully
• Ensure consistency in legal terminology
• Align similar clauses for uniformity
• Consider legal counsel for significant discrepancies

Note: This comparison is AI-generated and should be reviewed by legal professionals.
"#,
        name1 = first.filename,
        size1 = format_kb(first.size()),
        name2 = second.filename,
        size2 = format_kb(second.size()),
        date = compared_on.format("%Y-%m-%d"),
        comparison = comparison,
    )
}
