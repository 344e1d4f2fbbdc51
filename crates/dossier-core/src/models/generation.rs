use serde::{Deserialize, Serialize};

/// Which of the two public operations produced a generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationKind {
    /// Structured multi-section profile generation.
    Profile,
    /// Free-text question answering.
    Answer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationStatus {
    /// The output passed citation sanitization.
    Complete,
    /// The sanitizer could not parse the output and fell back to raw text.
    Degraded,
}
