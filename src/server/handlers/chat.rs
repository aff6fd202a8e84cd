//! Legal chat endpoint.

use axum::{extract::State, Json};

use super::form::FormFields;
use crate::server::error::ApiError;
use crate::server::AppState;
use crate::services::chat::{self, ChatReply, DEFAULT_CONTEXT};

/// `POST /api/chat-legal-advisor`
///
/// Always answers with 200 once a message is supplied.
pub async fn chat_legal_advisor(
    State(state): State<AppState>,
    form: FormFields,
) -> Result<Json<ChatReply>, ApiError> {
    let message = form.require_text("message")?;
    let context = form.text_or("context", DEFAULT_CONTEXT);

    let reply = chat::ask(state.provider.as_ref(), message, &context).await;
    Ok(Json(reply))
}
