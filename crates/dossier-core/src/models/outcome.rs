use serde::{Deserialize, Serialize};

use super::generation::GenerationStatus;

/// Result of the citation-sanitization pass.
///
/// Sanitization never fails hard: either the completion text parsed and its
/// `sources` fields were cleaned, or the original text is handed back
/// untouched. Callers that care can tell the two apart; callers that only
/// want text use [`SanitizeOutcome::text`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "text", rename_all = "snake_case")]
pub enum SanitizeOutcome {
    /// Parsed, cleaned, and re-serialized completion text.
    Sanitized(String),
    /// The completion text did not parse as a section array; returned as-is.
    Unsanitized(String),
}

impl SanitizeOutcome {
    pub fn text(&self) -> &str {
        match self {
            SanitizeOutcome::Sanitized(text) | SanitizeOutcome::Unsanitized(text) => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            SanitizeOutcome::Sanitized(text) | SanitizeOutcome::Unsanitized(text) => text,
        }
    }

    pub fn is_sanitized(&self) -> bool {
        matches!(self, SanitizeOutcome::Sanitized(_))
    }

    /// The generation status this outcome implies for the audit record.
    pub fn status(&self) -> GenerationStatus {
        match self {
            SanitizeOutcome::Sanitized(_) => GenerationStatus::Complete,
            SanitizeOutcome::Unsanitized(_) => GenerationStatus::Degraded,
        }
    }
}
