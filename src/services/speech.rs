//! Text-to-speech.

use tracing::{debug, info};

use super::{truncate_chars, ServiceError};
use crate::inference::InferenceProvider;

/// Characters of input text sent for synthesis.
pub const INPUT_CHARS: usize = 1000;

/// Download name for generated audio.
pub const AUDIO_FILENAME: &str = "echo-verse-audio.wav";

/// Media type of generated audio.
pub const AUDIO_CONTENT_TYPE: &str = "audio/wav";

/// Voice options accepted from clients.
///
/// The hosted model has a single voice, so these are recorded but do not
/// change the audio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechOptions {
    pub voice: String,
    pub speed: String,
}

impl Default for SpeechOptions {
    fn default() -> Self {
        Self {
            voice: "female".to_string(),
            speed: "normal".to_string(),
        }
    }
}

/// Synthesized audio held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeechAudio {
    pub bytes: Vec<u8>,
}

impl SpeechAudio {
    pub fn filename(&self) -> &'static str {
        AUDIO_FILENAME
    }

    pub fn content_type(&self) -> &'static str {
        AUDIO_CONTENT_TYPE
    }
}

/// Synthesize speech for the first 1000 characters of `text`.
pub async fn synthesize(
    provider: &dyn InferenceProvider,
    text: &str,
    options: &SpeechOptions,
) -> Result<SpeechAudio, ServiceError> {
    let input = truncate_chars(text, INPUT_CHARS);
    debug!(
        "Speech options voice={} speed={} (not applied)",
        options.voice, options.speed
    );

    let bytes = provider
        .synthesize_speech(input)
        .await
        .ok_or_else(|| ServiceError::Unavailable("TTS service unavailable".to_string()))?;

    info!("Synthesized {} bytes of audio", bytes.len());
    Ok(SpeechAudio { bytes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{Call, StubProvider};

    #[tokio::test]
    async fn test_truncates_input() {
        let provider = StubProvider::with_audio(b"RIFF....WAVE");
        let text = "é".repeat(1500);
        let audio = synthesize(&provider, &text, &SpeechOptions::default())
            .await
            .unwrap();
        assert_eq!(audio.bytes, b"RIFF....WAVE");
        assert_eq!(audio.filename(), "echo-verse-audio.wav");

        match &provider.calls()[0] {
            Call::Speech(input) => assert_eq!(input.chars().count(), INPUT_CHARS),
            other => panic!("unexpected call {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unavailable_is_error() {
        let provider = StubProvider::unavailable();
        let result = synthesize(&provider, "hello", &SpeechOptions::default()).await;
        assert!(matches!(result, Err(ServiceError::Unavailable(_))));
    }

    #[tokio::test]
    async fn test_options_do_not_change_audio() {
        let provider = StubProvider::with_audio(b"audio");
        let fast = SpeechOptions {
            voice: "male".to_string(),
            speed: "fast".to_string(),
        };
        let a = synthesize(&provider, "hello", &fast).await.unwrap();
        let b = synthesize(&provider, "hello", &SpeechOptions::default())
            .await
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(
            provider.calls(),
            vec![
                Call::Speech("hello".to_string()),
                Call::Speech("hello".to_string())
            ]
        );
    }
}
