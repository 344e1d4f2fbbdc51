//! Citation cleanup for structured profile output.
//!
//! The prompt asks the model to cite classified document-type labels, but
//! completions sometimes echo the temporary file names seen in the context.
//! Each section's `sources` field is rewritten: known file names become
//! their classified labels, residual temp-file tokens become "Document",
//! and leftover punctuation is normalized. If the completion text does not
//! parse as a section array, the original text is returned untouched.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use tracing::warn;

use dossier_core::models::outcome::SanitizeOutcome;
use dossier_doctypes::classify::FileLabelMap;

static TEMP_FILE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"tmp[a-zA-Z0-9]+\.[a-z]+").unwrap());

static TEMP_PARENTHETICAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(tmp[^)]*\)").unwrap());

// Runs of commas collapse in one pass, which keeps the cleanup idempotent.
static COMMA_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",(\s*,)+").unwrap());

static TRAILING_COMMA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",\s*$").unwrap());

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Sanitize the `sources` fields of a structured completion.
///
/// Never fails: malformed completion text degrades to
/// [`SanitizeOutcome::Unsanitized`] with the original text intact.
pub fn sanitize_citations(raw: &str, labels: &FileLabelMap) -> SanitizeOutcome {
    match try_sanitize(raw, labels) {
        Ok(cleaned) => SanitizeOutcome::Sanitized(cleaned),
        Err(reason) => {
            warn!(%reason, "returning completion text unsanitized");
            SanitizeOutcome::Unsanitized(raw.to_string())
        }
    }
}

fn try_sanitize(raw: &str, labels: &FileLabelMap) -> Result<String, String> {
    let mut parsed: Value =
        serde_json::from_str(raw).map_err(|e| format!("completion is not valid JSON: {e}"))?;

    let Some(sections) = parsed.as_array_mut() else {
        return Err("completion is not a JSON array".to_string());
    };

    for section in sections {
        if let Some(sources) = section.get_mut("sources")
            && let Some(text) = sources.as_str()
        {
            let cleaned = clean_sources(text, labels);
            *sources = Value::String(cleaned);
        }
    }

    serde_json::to_string(&parsed).map_err(|e| format!("re-serialization failed: {e}"))
}

/// Rewrite one `sources` string: known file names first, then residual
/// temp tokens, then punctuation and whitespace normalization.
fn clean_sources(sources: &str, labels: &FileLabelMap) -> String {
    let mut cleaned = sources.to_string();
    for (file_name, label) in labels.iter() {
        cleaned = cleaned.replace(file_name, label);
    }

    let cleaned = TEMP_FILE_TOKEN.replace_all(&cleaned, "Document");
    let cleaned = TEMP_PARENTHETICAL.replace_all(&cleaned, "");
    let cleaned = COMMA_RUN.replace_all(&cleaned, ",");
    let cleaned = TRAILING_COMMA.replace_all(&cleaned, "");
    let cleaned = WHITESPACE_RUN.replace_all(&cleaned, " ");
    cleaned.trim().to_string()
}
