//! When two names are close enough to suggest one for the other.

use tracing::trace;

use super::distance::distance;

/// Thresholds that decide whether a candidate name is a fuzzy match.
///
/// A pair matches when both names are at least `min_len` characters and
/// either one is a prefix of the other or their edit distance is at most
/// `max_distance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimilarityPolicy {
    min_len: usize,
    max_distance: usize,
}

impl SimilarityPolicy {
    /// Shortest name that takes part in fuzzy matching.
    pub const DEFAULT_MIN_LEN: usize = 4;
    /// Largest edit distance that still counts as a match.
    pub const DEFAULT_MAX_DISTANCE: usize = 2;

    /// Create a policy with explicit thresholds.
    pub const fn new(min_len: usize, max_distance: usize) -> Self {
        Self {
            min_len,
            max_distance,
        }
    }

    /// Minimum length, in chars, of both names.
    pub const fn min_len(&self) -> usize {
        self.min_len
    }

    /// Maximum accepted edit distance.
    pub const fn max_distance(&self) -> usize {
        self.max_distance
    }

    /// Whether `candidate` should be suggested for `query`.
    pub fn is_match(&self, query: &str, candidate: &str) -> bool {
        is_match(query, candidate, self.min_len, self.max_distance)
    }
}

impl Default for SimilarityPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN_LEN, Self::DEFAULT_MAX_DISTANCE)
    }
}

/// Fuzzy-match test with explicit thresholds.
///
/// Short names are rejected outright. Past that, a shared prefix over the
/// length of the shorter name is a match without computing a distance.
pub fn is_match(query: &str, candidate: &str, min_len: usize, max_distance: usize) -> bool {
    if query.chars().count() < min_len || candidate.chars().count() < min_len {
        return false;
    }

    if query
        .chars()
        .zip(candidate.chars())
        .all(|(q, c)| q == c)
    {
        trace!(query, candidate, "prefix match");
        return true;
    }

    let dist = distance(query, candidate);
    trace!(query, candidate, dist, "edit distance");
    dist <= max_distance
}
