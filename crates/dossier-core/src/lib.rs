//! dossier-core
//!
//! Pure domain types for document classification and profile generation.
//! No AWS SDK dependency — this is the shared vocabulary of the dossier system.

pub mod error;
pub mod models;
