//! Document analysis, summarization and comparison endpoints.

use axum::{extract::State, Json};
use serde::Serialize;

use super::form::FormFields;
use crate::server::error::{resolve, ApiError};
use crate::server::AppState;
use crate::services::analysis::{self, DEFAULT_LANGUAGE};
use crate::services::comparison;
use crate::services::summarize::{self, fallback_summary, SummaryLength, SummarySource};
use crate::services::{Endpoint, ServiceError};

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub analysis: String,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

#[derive(Debug, Serialize)]
pub struct ComparisonResponse {
    pub comparison: String,
}

/// `POST /api/analyze-document`
pub async fn analyze_document(
    State(state): State<AppState>,
    mut form: FormFields,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let document = form.require_file("file")?;
    let language = form.text_or("language", DEFAULT_LANGUAGE);

    let report = analysis::analyze(state.provider.as_ref(), &document)
        .await
        .map(|outcome| outcome.render(&document, &language));

    let analysis = resolve(Endpoint::AnalyzeDocument, report, None)?;
    Ok(Json(AnalysisResponse { analysis }))
}

/// `POST /api/summarize-document`
pub async fn summarize_document(
    State(state): State<AppState>,
    mut form: FormFields,
) -> Result<Json<SummaryResponse>, ApiError> {
    let length = SummaryLength::from_tag(&form.text_or("length", "medium"));
    let file = form.take_file("file");
    let text = form.text("text").map(str::to_string);

    let result = match SummarySource::from_parts(file, text) {
        Ok(source) => summarize::summarize(state.provider.as_ref(), source, length).await,
        Err(e) => Err(e),
    };

    let summary = resolve(Endpoint::SummarizeDocument, result, Some(fallback_summary))?;
    Ok(Json(SummaryResponse { summary }))
}

/// `POST /api/compare-documents`
pub async fn compare_documents(
    State(state): State<AppState>,
    mut form: FormFields,
) -> Result<Json<ComparisonResponse>, ApiError> {
    let result = match (form.take_file("file1"), form.take_file("file2")) {
        (Some(first), Some(second)) => {
            comparison::compare(state.provider.as_ref(), &first, &second).await
        }
        _ => Err(ServiceError::InvalidInput(
            "Two files required for comparison".to_string(),
        )),
    };

    let comparison = resolve(Endpoint::CompareDocuments, result, None)?;
    Ok(Json(ComparisonResponse { comparison }))
}
