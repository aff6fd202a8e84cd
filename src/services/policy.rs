//! Per-endpoint behavior when a request fails internally.
//!
//! Invalid client input is reported as such everywhere; this table only
//! covers failures after the input was accepted.

/// Endpoints that can fail after accepting input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    AnalyzeDocument,
    SummarizeDocument,
    TextToSpeech,
    ChatLegalAdvisor,
    CompareDocuments,
}

/// What the client sees when an endpoint fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureMode {
    /// HTTP 500 with this detail message.
    ServerError(&'static str),
    /// HTTP 200 with the endpoint's fallback body.
    Fallback,
}

impl Endpoint {
    pub const fn failure_mode(self) -> FailureMode {
        match self {
            Endpoint::AnalyzeDocument => FailureMode::ServerError("Failed to analyze document"),
            Endpoint::SummarizeDocument => FailureMode::Fallback,
            Endpoint::TextToSpeech => FailureMode::ServerError("Failed to generate speech"),
            Endpoint::ChatLegalAdvisor => FailureMode::Fallback,
            Endpoint::CompareDocuments => FailureMode::ServerError("Failed to compare documents"),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Endpoint::AnalyzeDocument => "analyze-document",
            Endpoint::SummarizeDocument => "summarize-document",
            Endpoint::TextToSpeech => "text-to-speech",
            Endpoint::ChatLegalAdvisor => "chat-legal-advisor",
            Endpoint::CompareDocuments => "compare-documents",
        }
    }
}
