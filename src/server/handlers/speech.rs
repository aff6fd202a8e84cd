//! Text-to-speech endpoint.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use super::form::FormFields;
use crate::server::error::{resolve, ApiError};
use crate::server::AppState;
use crate::services::speech::{self, SpeechOptions};
use crate::services::Endpoint;

/// `POST /api/text-to-speech`
///
/// Responds with the audio as an attachment; nothing is written to disk.
pub async fn text_to_speech(
    State(state): State<AppState>,
    form: FormFields,
) -> Result<Response, ApiError> {
    let text = form.require_text("text")?;
    let defaults = SpeechOptions::default();
    let options = SpeechOptions {
        voice: form.text_or("voice", &defaults.voice),
        speed: form.text_or("speed", &defaults.speed),
    };

    let result = speech::synthesize(state.provider.as_ref(), text, &options).await;
    let audio = resolve(Endpoint::TextToSpeech, result, None)?;

    let disposition = format!("attachment; filename=\"{}\"", audio.filename());
    Ok((
        [
            (header::CONTENT_TYPE, audio.content_type().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        audio.bytes,
    )
        .into_response())
}
