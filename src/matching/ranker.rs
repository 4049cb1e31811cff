//! Collects the vocabulary names that are close to a failed query.

use tracing::debug;

use super::policy::SimilarityPolicy;
use crate::core::vocabulary::Vocabulary;

/// Scans a vocabulary for names similar to a query.
#[derive(Debug, Clone, Copy)]
pub struct CandidateRanker<'v> {
    vocabulary: &'v Vocabulary,
    policy: SimilarityPolicy,
}

impl<'v> CandidateRanker<'v> {
    /// Create a ranker over `vocabulary` using `policy`.
    pub fn new(vocabulary: &'v Vocabulary, policy: SimilarityPolicy) -> Self {
        Self { vocabulary, policy }
    }

    /// Every present name that matches `query`, in vocabulary order.
    ///
    /// `query` is expected to be normalized already (uppercase). The reserved
    /// entry at index 0 and holes are never returned.
    pub fn rank(&self, query: &str) -> Vec<&'v str> {
        let suggestions: Vec<&'v str> = self
            .vocabulary
            .iter_present()
            .map(|(_, name)| name)
            .filter(|name| self.policy.is_match(query, name))
            .collect();

        debug!(query, count = suggestions.len(), "ranked suggestions");
        suggestions
    }
}

/// Rank `query` against `vocabulary` with the given policy.
pub fn rank<'v>(query: &str, vocabulary: &'v Vocabulary, policy: SimilarityPolicy) -> Vec<&'v str> {
    CandidateRanker::new(vocabulary, policy).rank(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabulary() -> Vocabulary {
        Vocabulary::from_entries([
            (1, "EPERM"),
            (2, "ENOENT"),
            (5, "EIO"),
            (9, "EBADF"),
            (13, "EACCES"),
            (20, "ENOTDIR"),
            (77, "EBADFD"),
        ])
    }

    #[test]
    fn test_rank_finds_truncated_name() {
        let vocab = vocabulary();
        assert_eq!(rank("ENOEN", &vocab, SimilarityPolicy::default()), vec!["ENOENT"]);
    }

    #[test]
    fn test_rank_keeps_vocabulary_order() {
        let vocab = vocabulary();
        // EBADF matches by prefix, EBADFD by distance; index order is kept.
        assert_eq!(
            rank("EBADFX", &vocab, SimilarityPolicy::default()),
            vec!["EBADF", "EBADFD"]
        );
    }

    #[test]
    fn test_rank_empty_when_nothing_close() {
        let vocab = vocabulary();
        assert!(rank("XYZZY", &vocab, SimilarityPolicy::default()).is_empty());
    }

    #[test]
    fn test_rank_skips_short_names() {
        let vocab = vocabulary();
        assert!(rank("EIOX", &vocab, SimilarityPolicy::default()).is_empty());
    }

    #[test]
    fn test_rank_never_returns_reserved_index() {
        // Index 0 is reserved, even if a caller tries to place a name there.
        let vocab = Vocabulary::from_entries([(0, "ESUCCESS"), (2, "ENOENT")]);
        let policy = SimilarityPolicy::new(1, 100);
        for query in ["ESUCCESS", "ESUCC", "ENOENT", "Q"] {
            let found = rank(query, &vocab, policy);
            assert!(!found.contains(&"ESUCCESS"), "query {query} returned index 0");
        }
    }

    #[test]
    fn test_ranker_reusable_across_queries() {
        let vocab = vocabulary();
        let ranker = CandidateRanker::new(&vocab, SimilarityPolicy::default());
        assert_eq!(ranker.rank("EACCED"), vec!["EACCES"]);
        assert_eq!(ranker.rank("EPREM"), vec!["EPERM"]);
    }
}
