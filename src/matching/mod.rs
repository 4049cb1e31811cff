//! Fuzzy name matching for "did you mean" suggestions.
//!
//! Layered bottom-up: [`distance`] computes Levenshtein distance,
//! [`SimilarityPolicy`] decides whether two names are close, and
//! [`CandidateRanker`] applies the policy across a whole vocabulary.

pub mod distance;
pub mod policy;
pub mod ranker;

pub use distance::distance;
pub use policy::{is_match, SimilarityPolicy};
pub use ranker::{rank, CandidateRanker};
