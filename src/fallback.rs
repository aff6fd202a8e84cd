//! Canned responses used when the inference service is unavailable or its
//! output is unusable.

use std::borrow::Cow;

/// Advice for contract questions.
pub const CONTRACT_ADVICE: &str = "For contract-related questions, key considerations include: parties involved, clear obligations, payment terms, termination clauses, and dispute resolution. Always have contracts reviewed by a qualified attorney before signing.";

/// Advice for intellectual property questions.
pub const IP_ADVICE: &str = "Copyright protection generally covers original works of authorship. Key points: automatic protection upon creation, registration provides additional benefits, fair use exceptions exist, and duration varies by work type. Consult an IP attorney for specific cases.";

/// Advice for employment questions.
pub const EMPLOYMENT_ADVICE: &str = "Employment law covers wages, discrimination, harassment, and workplace safety. Important: document workplace issues, know your rights under federal and state laws, and consider consulting an employment attorney for serious matters.";

/// Advice for privacy and data protection questions.
pub const PRIVACY_ADVICE: &str = "Privacy laws like GDPR and CCPA require proper data handling. Key requirements: obtain consent, implement security measures, provide user rights, and maintain compliance documentation. Consult a privacy attorney for specific compliance needs.";

/// Advice when no topic matches.
pub const GENERIC_ADVICE: &str = "Thank you for your question. For specific legal matters, I recommend consulting with a qualified attorney who can provide personalized advice based on your situation and applicable laws in your jurisdiction.";

/// Topic keyword groups, checked in order.
const ADVICE_TOPICS: &[(&[&str], &str)] = &[
    (&["contract", "agreement"], CONTRACT_ADVICE),
    (&["copyright", "trademark"], IP_ADVICE),
    (&["employment", "workplace"], EMPLOYMENT_ADVICE),
    (&["privacy", "data"], PRIVACY_ADVICE),
];

const RISK_ASSESSMENT_FALLBACK: &str = "Document reviewed for potential legal risks. Key areas examined include liability clauses, compliance requirements, and contractual obligations. Recommend legal review for risk mitigation strategies.";

const KEY_POINTS_FALLBACK: &str = "Key legal elements identified include main parties, obligations, terms and conditions, and governing law provisions. Important clauses require careful review for completeness and accuracy.";

const IMPROVEMENTS_FALLBACK: &str = "Suggested improvements include clarifying ambiguous language, ensuring consistent terminology, updating references to current laws, and adding protective clauses where appropriate.";

/// Pick canned advice for a chat message by the first matching topic.
///
/// Matching is a case-insensitive substring search, so "Agreements" and
/// "DATABASE" both match their groups.
pub fn advice_for_message(message: &str) -> &'static str {
    let lower = message.to_lowercase();
    ADVICE_TOPICS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, advice)| *advice)
        .unwrap_or(GENERIC_ADVICE)
}

/// Canned analysis text for an analysis-kind tag.
pub fn analysis_fallback(tag: &str) -> Cow<'static, str> {
    match tag {
        "risk_assessment" => Cow::Borrowed(RISK_ASSESSMENT_FALLBACK),
        "key_points" => Cow::Borrowed(KEY_POINTS_FALLBACK),
        "improvements" => Cow::Borrowed(IMPROVEMENTS_FALLBACK),
        other => Cow::Owned(format!(
            "{} analysis completed. Professional legal review recommended.",
            other
        )),
    }
}
