//! dossier-doctypes
//!
//! Document-type vocabulary and classification heuristics. Pure data and
//! pure functions — no AWS dependency. Defines the per-mode content rule
//! tables, the filename rules, and the file-name → label map used by the
//! citation sanitizer.

pub mod classify;
pub mod rules;
