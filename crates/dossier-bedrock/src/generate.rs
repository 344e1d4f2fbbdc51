//! The two public operations and the shared Converse invocation.

use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, InferenceConfiguration, Message, SystemContentBlock,
};
use tracing::info;
use uuid::Uuid;

use dossier_core::models::generation::{GenerationKind, GenerationStatus};
use dossier_core::models::metadata::MetadataRecord;
use dossier_core::models::outcome::SanitizeOutcome;
use dossier_core::models::token_count::{TokenCount, TokenUsage};
use dossier_doctypes::classify;

use crate::error::BedrockError;
use crate::prompts;
use crate::sanitize;
use crate::tokens;

/// Completion budget for structured profile output.
const PROFILE_MAX_TOKENS: i32 = 2000;
/// Completion budget for free-text answers.
const ANSWER_MAX_TOKENS: i32 = 4000;
/// One temperature for both operations; low, because the output must stay
/// faithful to the supplied documents.
const TEMPERATURE: f32 = 0.4;

/// The result of one generation — an auditable unit of work.
pub struct GenerationResult<T> {
    pub id: Uuid,
    pub kind: GenerationKind,
    pub model_id: String,
    pub usage: TokenUsage,
    pub status: GenerationStatus,
    pub output: T,
    pub created_at: jiff::Timestamp,
}

/// Generate a structured psychology profile from document chunks.
///
/// Classifies the documents, composes the profile instruction, invokes the
/// model once, and sanitizes citation sources in the structured output.
/// Malformed model output degrades to the raw text instead of failing;
/// the result's status records which way it went.
pub async fn generate_profile(
    client: &Client,
    model_id: &str,
    chunks: &[String],
    records: &[MetadataRecord],
) -> Result<GenerationResult<SanitizeOutcome>, BedrockError> {
    let generation_id = Uuid::new_v4();
    info!(generation_id = %generation_id, model = model_id, "starting profile generation");

    let detected = classify::detect_content_types(chunks, GenerationKind::Profile);
    let labels = classify::build_file_label_map(records);
    let prompt = prompts::build_profile_prompt(&detected, records, chunks);

    let (response_text, usage) = invoke_converse(
        client,
        model_id,
        prompts::SYSTEM_PROMPT,
        &prompt,
        PROFILE_MAX_TOKENS,
    )
    .await?;

    let outcome = sanitize::sanitize_citations(&response_text, &labels);
    let status = outcome.status();

    info!(
        generation_id = %generation_id,
        sanitized = outcome.is_sanitized(),
        "profile generation complete"
    );

    Ok(GenerationResult {
        id: generation_id,
        kind: GenerationKind::Profile,
        model_id: model_id.to_string(),
        usage,
        status,
        output: outcome,
        created_at: jiff::Timestamp::now(),
    })
}

/// Answer a practitioner question from the document context.
///
/// The completion text passes through verbatim; there is no validation or
/// recovery layer on answers.
pub async fn answer_question(
    client: &Client,
    model_id: &str,
    chunks: &[String],
    question: &str,
) -> Result<GenerationResult<String>, BedrockError> {
    let generation_id = Uuid::new_v4();
    info!(generation_id = %generation_id, model = model_id, "starting question answering");

    let detected = classify::detect_content_types(chunks, GenerationKind::Answer);
    let prompt = prompts::build_answer_prompt(&detected, chunks, question);

    let (response_text, usage) = invoke_converse(
        client,
        model_id,
        prompts::SYSTEM_PROMPT,
        &prompt,
        ANSWER_MAX_TOKENS,
    )
    .await?;

    info!(generation_id = %generation_id, "question answering complete");

    Ok(GenerationResult {
        id: generation_id,
        kind: GenerationKind::Answer,
        model_id: model_id.to_string(),
        usage,
        status: GenerationStatus::Complete,
        output: response_text,
        created_at: jiff::Timestamp::now(),
    })
}

/// Core invocation using the Bedrock Converse API.
/// Returns the response text and token usage.
async fn invoke_converse(
    client: &Client,
    model_id: &str,
    system_prompt: &str,
    user_message: &str,
    max_tokens: i32,
) -> Result<(String, TokenUsage), BedrockError> {
    let pricing = tokens::get_pricing(model_id);

    let response = client
        .converse()
        .model_id(model_id)
        .system(SystemContentBlock::Text(system_prompt.to_string()))
        .messages(
            Message::builder()
                .role(ConversationRole::User)
                .content(ContentBlock::Text(user_message.to_string()))
                .build()
                .map_err(|e| BedrockError::Invocation(e.to_string()))?,
        )
        .inference_config(
            InferenceConfiguration::builder()
                .temperature(TEMPERATURE)
                .max_tokens(max_tokens)
                .build(),
        )
        .send()
        .await
        .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

    // Extract response text
    let output_message = response
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| BedrockError::ResponseParse("no message in response".to_string()))?;

    let response_text = output_message
        .content()
        .iter()
        .filter_map(|block| {
            if let ContentBlock::Text(text) = block {
                Some(text.as_str())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("");

    // Extract token usage
    let usage = response
        .usage()
        .map(|u| {
            let token_count = tokens::extract_token_usage(u);
            match &pricing {
                Some(p) => tokens::calculate_cost(token_count, p),
                None => TokenUsage {
                    tokens: token_count,
                    cost_usd: 0.0,
                },
            }
        })
        .unwrap_or(TokenUsage {
            tokens: TokenCount {
                input: 0,
                output: 0,
            },
            cost_usd: 0.0,
        });

    Ok((response_text, usage))
}
