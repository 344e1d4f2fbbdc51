pub mod cost;
pub mod generation;
pub mod metadata;
pub mod outcome;
pub mod section;
pub mod token_count;
