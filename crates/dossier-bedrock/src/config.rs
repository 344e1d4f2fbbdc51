use serde::{Deserialize, Serialize};

/// Inference profile used for both operations unless overridden in config.
pub const DEFAULT_MODEL_ID: &str = "us.anthropic.claude-sonnet-4-20250514-v1:0";

pub const DEFAULT_REGION: &str = "us-east-1";

/// Where AWS credentials come from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CredentialSource {
    Inline {
        access_key_id: String,
        secret_access_key: String,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        session_token: Option<String>,
    },
    Profile {
        profile_name: String,
    },
    DefaultChain,
}

impl Default for CredentialSource {
    fn default() -> Self {
        CredentialSource::DefaultChain
    }
}

/// Connection settings for the completion service.
///
/// Credentials must resolve when the client is built; a missing or invalid
/// credential source is a fatal configuration error, not something to
/// discover on the first generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BedrockConfig {
    #[serde(default = "default_region")]
    pub region: String,
    #[serde(default)]
    pub credentials: CredentialSource,
    #[serde(default = "default_model_id")]
    pub model_id: String,
}

impl Default for BedrockConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            credentials: CredentialSource::default(),
            model_id: default_model_id(),
        }
    }
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

fn default_model_id() -> String {
    DEFAULT_MODEL_ID.to_string()
}
