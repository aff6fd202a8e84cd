//! HTTP request handlers for the web server.

mod chat;
mod documents;
mod form;
mod pages;
mod speech;
mod templates;

// Re-export handlers for use by the router
pub use chat::chat_legal_advisor;
pub use documents::{analyze_document, compare_documents, summarize_document};
pub use pages::{health, index};
pub use speech::text_to_speech;
pub use templates::{generate_template, list_templates};
