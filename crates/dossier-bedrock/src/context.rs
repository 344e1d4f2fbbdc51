//! Pure string assembly for the prompt: document context, person
//! information, and the document-type summary lines.

use dossier_core::models::metadata::MetadataRecord;

/// Label used when content analysis recognizes none of the categories.
pub const FALLBACK_DOC_TYPES: &str = "Submitted Documents";

/// Join document chunks into the prompt context, in supplied order.
pub fn join_context(chunks: &[String]) -> String {
    chunks.join("\n\n")
}

/// Unique `file_type` values across the records, in first-seen order.
/// Records without a file type contribute nothing.
pub fn unique_file_types(records: &[MetadataRecord]) -> Vec<String> {
    let mut types: Vec<String> = Vec::new();
    for record in records {
        if let Some(file_type) = record.file_type()
            && !types.iter().any(|t| t == file_type)
        {
            types.push(file_type.to_string());
        }
    }
    types
}

/// One `- {type}` line per provided document type.
pub fn document_type_lines(file_types: &[String]) -> String {
    file_types
        .iter()
        .map(|t| format!("- {t}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The "these appear to include" value: comma-joined detected labels, or
/// the fallback when detection found nothing.
pub fn detected_types_line(detected: &[String]) -> String {
    if detected.is_empty() {
        FALLBACK_DOC_TYPES.to_string()
    } else {
        detected.join(", ")
    }
}

/// Person attributes echoed into the prompt: every non-reserved metadata
/// pair as a `key: value` line, record order preserved.
pub fn person_info_block(records: &[MetadataRecord]) -> String {
    let mut lines: Vec<String> = Vec::new();
    for record in records {
        for (key, value) in record.passthrough_pairs() {
            lines.push(format!("{key}: {value}"));
        }
    }
    lines.join("\n")
}
