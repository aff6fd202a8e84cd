//! LegalMind - AI-assisted legal document analysis.
//!
//! A thin HTTP backend and CLI over a hosted inference API, offering
//! document analysis, summarization, comparison, text-to-speech and a
//! legal chat assistant.

pub mod cli;
pub mod config;
pub mod fallback;
pub mod inference;
pub mod server;
pub mod services;
