use dossier_core::models::generation::GenerationKind;
use dossier_core::models::metadata::MetadataRecord;

use crate::rules::{CLINICAL_RULES, ContentRule, PROFILE_RULES};

/// Insertion-ordered mapping from a document's file name to its classified
/// type label. Built once per generation; consumed by the citation
/// sanitizer. Re-inserting a file name replaces its label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileLabelMap {
    entries: Vec<(String, String)>,
}

impl FileLabelMap {
    pub fn insert(&mut self, file_name: impl Into<String>, label: impl Into<String>) {
        let file_name = file_name.into();
        let label = label.into();
        if let Some(entry) = self.entries.iter_mut().find(|(name, _)| *name == file_name) {
            entry.1 = label;
        } else {
            self.entries.push((file_name, label));
        }
    }

    pub fn get(&self, file_name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == file_name)
            .map(|(_, label)| label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, label)| (name.as_str(), label.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

fn rules_for(kind: GenerationKind) -> &'static [ContentRule] {
    match kind {
        GenerationKind::Profile => PROFILE_RULES,
        GenerationKind::Answer => CLINICAL_RULES,
    }
}

/// Detect content-based document categories across all chunks.
///
/// Chunks are joined with a single space; each rule's terms are tested by
/// substring containment against the lower-cased join (raw terms against
/// the join as supplied). Returns matched labels in rule-table order;
/// empty when nothing matches.
pub fn detect_content_types(chunks: &[String], kind: GenerationKind) -> Vec<String> {
    let raw = chunks.join(" ");
    let lowered = raw.to_lowercase();

    rules_for(kind)
        .iter()
        .filter(|rule| {
            rule.terms.iter().any(|pattern| {
                if pattern.raw {
                    raw.contains(pattern.needle)
                } else {
                    lowered.contains(pattern.needle)
                }
            })
        })
        .map(|rule| rule.label.to_string())
        .collect()
}

/// Classify a single file by name, falling back to a label derived from
/// its file type. Rules are checked in fixed priority order; the first
/// match wins.
pub fn label_for_file(file_name: &str, file_type: &str) -> String {
    let lowered = file_name.to_lowercase();

    if lowered.contains("hogan") {
        "Hogan Assessment".to_string()
    } else if file_name.contains("360") {
        "360° Feedback".to_string()
    } else if ["cv", "resume", "résumé"]
        .iter()
        .any(|needle| lowered.contains(needle))
    {
        "CV/Resume".to_string()
    } else if lowered.contains("idi") {
        "IDI Assessment".to_string()
    } else {
        format!("{} Document", file_type.to_uppercase())
    }
}

/// Build the file-name → label map for a set of metadata records.
///
/// Records missing either `file_name` or `file_type` are skipped silently.
pub fn build_file_label_map(records: &[MetadataRecord]) -> FileLabelMap {
    let mut map = FileLabelMap::default();
    for record in records {
        if let (Some(file_name), Some(file_type)) = (record.file_name(), record.file_type()) {
            map.insert(file_name, label_for_file(file_name, file_type));
        }
    }
    map
}
