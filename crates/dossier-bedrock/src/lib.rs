//! dossier-bedrock
//!
//! Bedrock model invocation for profile generation and question answering:
//! credential validation, prompt assembly, the Converse call, and citation
//! sanitization of the structured output.

pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod generate;
pub mod prompts;
pub mod sanitize;
pub mod tokens;
