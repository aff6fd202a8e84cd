//! Document commands that call the inference service directly.

use std::path::Path;

use anyhow::Context;
use console::style;

use crate::cli::icons::{bullet, dim_arrow, success, warn};
use crate::config::Config;
use crate::inference::HuggingFaceClient;
use crate::services::summarize::{fallback_summary, SummaryLength, SummarySource};
use crate::services::{
    analysis, chat, comparison, speech, templates, Endpoint, FailureMode, ServiceError,
    UploadedDocument,
};

fn client(config: &Config) -> anyhow::Result<HuggingFaceClient> {
    if !config.inference.has_api_key() {
        eprintln!(
            "{} No inference credential configured; output will use fallback text",
            warn()
        );
    }
    Ok(HuggingFaceClient::new(config.inference.clone())?)
}

/// Read a file as an upload, guessing its content type from the extension.
async fn read_document(path: &Path) -> anyhow::Result<UploadedDocument> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let content_type = mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string();
    Ok(UploadedDocument::new(filename, content_type, bytes))
}

/// Apply the same failure policy as the HTTP endpoints.
fn apply_policy<T>(
    endpoint: Endpoint,
    result: Result<T, ServiceError>,
    fallback: Option<fn() -> T>,
) -> anyhow::Result<T> {
    match result {
        Ok(value) => Ok(value),
        Err(e @ ServiceError::InvalidInput(_)) => Err(e.into()),
        Err(e) => match endpoint.failure_mode() {
            FailureMode::ServerError(msg) => {
                Err(anyhow::Error::new(e).context(format!("{} ({})", msg, endpoint.name())))
            }
            FailureMode::Fallback => match fallback {
                Some(fallback) => {
                    eprintln!("{} {} failed: {}", warn(), endpoint.name(), e);
                    Ok(fallback())
                }
                None => {
                    Err(anyhow::Error::new(e).context(format!("{} failed", endpoint.name())))
                }
            },
        },
    }
}

/// Analyze a document and print the report.
pub async fn cmd_analyze(config: &Config, file: &Path, language: &str) -> anyhow::Result<()> {
    let client = client(config)?;
    let document = read_document(file).await?;
    eprintln!(
        "{} Analyzing {} ({})",
        dim_arrow(),
        document.filename,
        document.content_type
    );

    let result = analysis::analyze(&client, &document).await;
    let outcome = apply_policy(Endpoint::AnalyzeDocument, result, None)?;
    println!("{}", outcome.render(&document, language));
    eprintln!(
        "{} Analysis finished in {} ms",
        success(),
        outcome.processing_time.as_millis()
    );
    Ok(())
}

/// Summarize a file or raw text.
pub async fn cmd_summarize(
    config: &Config,
    file: Option<&Path>,
    text: Option<String>,
    length: &str,
) -> anyhow::Result<()> {
    let client = client(config)?;
    let document = match file {
        Some(path) => Some(read_document(path).await?),
        None => None,
    };
    let source = SummarySource::from_parts(document, text)?;
    let length = SummaryLength::from_tag(length);

    let result = crate::services::summarize::summarize(&client, source, length).await;
    let summary = apply_policy(Endpoint::SummarizeDocument, result, Some(fallback_summary))?;
    println!("{}", summary);
    Ok(())
}

/// Ask the legal assistant a question.
pub async fn cmd_chat(config: &Config, message: &str, context: &str) -> anyhow::Result<()> {
    let client = client(config)?;
    let reply = chat::ask(&client, message, context).await;
    println!("{}", reply.answer);
    println!();
    println!("{}", style(&reply.disclaimer).dim());
    Ok(())
}

/// Synthesize speech and write it to `output`.
pub async fn cmd_speak(
    config: &Config,
    text: &str,
    output: &Path,
    voice: String,
    speed: String,
) -> anyhow::Result<()> {
    let client = client(config)?;
    let options = speech::SpeechOptions { voice, speed };

    let result = speech::synthesize(&client, text, &options).await;
    let audio = apply_policy(Endpoint::TextToSpeech, result, None)?;

    tokio::fs::write(output, &audio.bytes)
        .await
        .with_context(|| format!("Failed to write {}", output.display()))?;
    eprintln!(
        "{} Wrote {} bytes of {} to {}",
        success(),
        audio.bytes.len(),
        audio.content_type(),
        output.display()
    );
    Ok(())
}

/// Compare two documents and print the report.
pub async fn cmd_compare(config: &Config, first: &Path, second: &Path) -> anyhow::Result<()> {
    let client = client(config)?;
    let first = read_document(first).await?;
    let second = read_document(second).await?;

    let result = comparison::compare(&client, &first, &second).await;
    let report = apply_policy(Endpoint::CompareDocuments, result, None)?;
    println!("{}", report);
    Ok(())
}

/// List the built-in legal templates.
pub fn cmd_templates() -> anyhow::Result<()> {
    let catalog = templates::catalog();
    let mut current = "";
    for template in catalog.iter() {
        if template.category != current {
            current = template.category;
            println!("{}", style(current).bold());
        }
        println!(
            "  {} {:<18} {}",
            bullet(),
            template.id,
            style(template.description).dim()
        );
    }
    Ok(())
}
