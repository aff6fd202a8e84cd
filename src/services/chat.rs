//! Legal chat assistant.

use serde::Serialize;
use tracing::{debug, info};

use crate::fallback::advice_for_message;
use crate::inference::{GenerationParams, InferenceProvider};

/// Context used when the client does not send one.
pub const DEFAULT_CONTEXT: &str = "General legal consultation";

/// Disclaimer attached to every answer.
pub const DISCLAIMER: &str = "This response is for informational purposes only and does not constitute legal advice. Please consult with a qualified legal professional for specific legal matters.";

/// Answers shorter than this (in characters) are replaced by canned advice.
pub const MIN_ANSWER_CHARS: usize = 10;

const ROLE_LABEL: &str = "Legal Assistant:";
const MAX_NEW_TOKENS: u32 = 150;
const TEMPERATURE: f32 = 0.7;

/// Answer returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatReply {
    pub answer: String,
    pub disclaimer: String,
}

impl ChatReply {
    fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            disclaimer: DISCLAIMER.to_string(),
        }
    }

    /// Reply built only from canned advice.
    pub fn fallback(message: &str) -> Self {
        Self::new(advice_for_message(message))
    }
}

/// Conversation prompt for `message`.
pub fn build_prompt(message: &str) -> String {
    format!(
        "Legal Assistant: I'm here to provide general legal information. Please remember this is not legal advice.\n\nUser: {}\n\nLegal Assistant:",
        message
    )
}

/// Strip the echoed prompt and role label from generated text.
pub fn clean_answer(generated: &str, prompt: &str) -> String {
    generated
        .replace(prompt, "")
        .trim()
        .replace(ROLE_LABEL, "")
        .trim()
        .to_string()
}

/// Whether an answer is long enough to show.
pub fn is_usable(answer: &str) -> bool {
    answer.chars().count() >= MIN_ANSWER_CHARS
}

/// Answer `message`. Never fails; unusable output becomes canned advice.
///
/// `context` is accepted for compatibility but is not part of the prompt.
pub async fn ask(provider: &dyn InferenceProvider, message: &str, context: &str) -> ChatReply {
    info!("Chat message ({} chars)", message.len());
    debug!("Chat context: {}", context);

    let prompt = build_prompt(message);
    let params = GenerationParams::new(MAX_NEW_TOKENS, TEMPERATURE);

    let answer = provider
        .generate(&prompt, &params)
        .await
        .and_then(|candidates| candidates.into_iter().next())
        .map(|first| clean_answer(&first.generated_text, &prompt))
        .unwrap_or_default();

    if is_usable(&answer) {
        ChatReply::new(answer)
    } else {
        debug!("Generated answer too short ({} chars), using fallback", answer.len());
        ChatReply::fallback(message)
    }
}
