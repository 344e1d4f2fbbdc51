use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::{BedrockConfig, CredentialSource};
use crate::error::BedrockError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallerIdentity {
    pub account_id: String,
    pub arn: String,
    pub user_id: String,
}

/// Build an `SdkConfig` from the configured region and credential source.
pub async fn build_aws_config(config: &BedrockConfig) -> aws_config::SdkConfig {
    let mut builder = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.region.clone()));

    match &config.credentials {
        CredentialSource::Inline {
            access_key_id,
            secret_access_key,
            session_token,
        } => {
            builder = builder.credentials_provider(aws_sdk_sts::config::Credentials::new(
                access_key_id,
                secret_access_key,
                session_token.clone(),
                None,
                "dossier-config",
            ));
        }
        CredentialSource::Profile { profile_name } => {
            builder = builder.profile_name(profile_name);
        }
        CredentialSource::DefaultChain => {}
    }

    builder.load().await
}

/// Call STS GetCallerIdentity to validate credentials.
pub async fn validate_credentials(
    config: &aws_config::SdkConfig,
) -> Result<CallerIdentity, BedrockError> {
    let sts = aws_sdk_sts::Client::new(config);
    let resp = sts
        .get_caller_identity()
        .send()
        .await
        .map_err(|e| BedrockError::Config(format!("STS GetCallerIdentity failed: {e}")))?;

    Ok(CallerIdentity {
        account_id: resp.account().unwrap_or_default().to_string(),
        arn: resp.arn().unwrap_or_default().to_string(),
        user_id: resp.user_id().unwrap_or_default().to_string(),
    })
}

/// Build a Bedrock runtime client, validating credentials first.
///
/// Fails with [`BedrockError::Config`] before any generation is accepted if
/// the configured credentials do not resolve to a caller identity.
pub async fn connect(config: &BedrockConfig) -> Result<aws_sdk_bedrockruntime::Client, BedrockError> {
    let sdk_config = build_aws_config(config).await;
    let identity = validate_credentials(&sdk_config).await?;
    info!(
        account_id = %identity.account_id,
        region = %config.region,
        "AWS credentials validated"
    );

    Ok(aws_sdk_bedrockruntime::Client::new(&sdk_config))
}
