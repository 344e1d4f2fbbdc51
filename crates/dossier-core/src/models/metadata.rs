use serde::{Deserialize, Serialize};

/// Reserved metadata key holding the source document's file name.
pub const FILE_NAME_KEY: &str = "file_name";
/// Reserved metadata key holding the source document's file type (extension).
pub const FILE_TYPE_KEY: &str = "file_type";

/// Per-document metadata supplied alongside the extracted text chunks.
///
/// Carries the two reserved keys (`file_name`, `file_type`) plus arbitrary
/// additional pairs (person attributes) that are passed through to the
/// prompt verbatim. Insertion order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetadataRecord {
    entries: Vec<(String, String)>,
}

impl MetadataRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a key, replacing any existing value for it.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Builder-style `insert`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn file_name(&self) -> Option<&str> {
        self.get(FILE_NAME_KEY)
    }

    pub fn file_type(&self) -> Option<&str> {
        self.get(FILE_TYPE_KEY)
    }

    /// All pairs except the two reserved keys, in insertion order.
    /// These are the person attributes the prompt echoes verbatim.
    pub fn passthrough_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter(|(k, _)| k != FILE_NAME_KEY && k != FILE_TYPE_KEY)
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for MetadataRecord {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}
