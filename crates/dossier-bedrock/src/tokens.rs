//! Token usage extraction and cost estimation for the audit record.

use dossier_core::models::cost::ModelPricing;
use dossier_core::models::token_count::{TokenCount, TokenUsage};

/// Per-million-token pricing keyed by a model-id fragment, checked in
/// order. Figures are approximate and should be updated as pricing
/// changes. Unknown models fall through and price at zero rather than
/// failing a generation.
const PRICING_TABLE: &[(&str, ModelPricing)] = &[
    (
        "claude-opus-4",
        ModelPricing {
            input_per_million: 15.0,
            output_per_million: 75.0,
        },
    ),
    (
        "claude-sonnet-4",
        ModelPricing {
            input_per_million: 3.0,
            output_per_million: 15.0,
        },
    ),
    (
        "claude-haiku",
        ModelPricing {
            input_per_million: 0.80,
            output_per_million: 4.0,
        },
    ),
];

/// Look up pricing for a model id by fragment match.
pub fn get_pricing(model_id: &str) -> Option<ModelPricing> {
    PRICING_TABLE
        .iter()
        .find(|(fragment, _)| model_id.contains(fragment))
        .map(|(_, pricing)| *pricing)
}

/// Extract token counts from a Bedrock Converse response.
pub fn extract_token_usage(usage: &aws_sdk_bedrockruntime::types::TokenUsage) -> TokenCount {
    TokenCount {
        input: usage.input_tokens as u64,
        output: usage.output_tokens as u64,
    }
}

/// Price a token count for the audit record.
pub fn calculate_cost(tokens: TokenCount, pricing: &ModelPricing) -> TokenUsage {
    TokenUsage {
        tokens,
        cost_usd: pricing.estimate_cost(tokens),
    }
}
