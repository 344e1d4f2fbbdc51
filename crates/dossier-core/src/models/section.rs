use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One section of a generated profile, in the shape the completion
/// prompt demands: a section label, its narrative or numbered-list
/// content, and a comma-joined list of cited source labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSection {
    pub section: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<String>,
}

impl ProfileSection {
    /// Parse a completion payload as the expected array of sections.
    pub fn parse_sections(json: &str) -> Result<Vec<ProfileSection>, CoreError> {
        Ok(serde_json::from_str(json)?)
    }
}
