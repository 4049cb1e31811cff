//! Turns a raw command-line token into an error entry.
//!
//! A token is classified as numeric or symbolic, looked up exactly, and on a
//! name miss optionally handed to the [`CandidateRanker`] for suggestions.
//! Nothing here writes output: every outcome is returned as a [`Lookup`] and
//! the caller decides how to report it.

use std::num::IntErrorKind;

use serde::Serialize;
use tracing::debug;

use crate::core::config::MatchingConfig;
use crate::core::errors::LookupFailure;
use crate::core::vocabulary::Vocabulary;
use crate::matching::CandidateRanker;

/// A fully resolved error: number, symbolic name, description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEntry {
    /// Numeric error code
    pub code: usize,
    /// Symbolic name such as `ENOENT`
    pub name: String,
    /// Platform description text
    pub description: String,
}

/// The outcome of resolving one token.
pub type Lookup = std::result::Result<ErrorEntry, LookupFailure>;

/// How a token will be looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// The whole token is a non-negative integer.
    Numeric(u64),
    /// All digits, but too large for any code.
    Overflow,
    /// Anything else is treated as a name.
    Name,
}

/// Decide whether `token` is a number or a name.
///
/// Only an exact run of digits (with an optional leading `+`) is numeric;
/// surrounding whitespace makes the token a name.
pub fn classify(token: &str) -> TokenKind {
    match token.parse::<u64>() {
        Ok(value) => TokenKind::Numeric(value),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => TokenKind::Overflow,
        Err(_) => TokenKind::Name,
    }
}

/// Resolves tokens against a vocabulary.
#[derive(Debug, Clone)]
pub struct LookupResolver<'v> {
    vocabulary: &'v Vocabulary,
    matching: MatchingConfig,
}

impl<'v> LookupResolver<'v> {
    /// Create a resolver with the given matching settings.
    pub fn new(vocabulary: &'v Vocabulary, matching: MatchingConfig) -> Self {
        Self {
            vocabulary,
            matching,
        }
    }

    /// Resolve `token`, offering suggestions if matching is enabled.
    pub fn resolve(&self, token: &str) -> Lookup {
        self.resolve_with(token, self.matching.enabled)
    }

    /// Resolve `token`, choosing explicitly whether to rank suggestions.
    pub fn resolve_with(&self, token: &str, fuzzy: bool) -> Lookup {
        let kind = classify(token);
        debug!(token, ?kind, "classified token");

        match kind {
            TokenKind::Numeric(value) => match usize::try_from(value) {
                Ok(code) if code < self.vocabulary.len() => self.entry(code, token),
                _ => Err(LookupFailure::OutOfRange {
                    token: token.to_string(),
                }),
            },
            TokenKind::Overflow => Err(LookupFailure::OutOfRange {
                token: token.to_string(),
            }),
            TokenKind::Name => match self.vocabulary.position(token) {
                Some(code) => self.entry(code, token),
                None if fuzzy => Err(LookupFailure::NotFound {
                    token: token.to_string(),
                    suggestions: self.suggest(token),
                }),
                None => Err(LookupFailure::not_found(token)),
            },
        }
    }

    /// Resolve a code directly; used when listing the whole vocabulary.
    pub fn resolve_code(&self, code: usize) -> Lookup {
        self.entry(code, &code.to_string())
    }

    /// Every present vocabulary entry, resolved by code, without suggestions.
    pub fn dump(&self) -> impl Iterator<Item = Lookup> + '_ {
        self.vocabulary
            .iter_present()
            .map(move |(code, _)| self.resolve_code(code))
    }

    /// Suggestions for a name that did not resolve.
    pub fn suggest(&self, token: &str) -> Vec<String> {
        let query = token.to_uppercase();
        let ranker = CandidateRanker::new(self.vocabulary, self.matching.policy());
        let limit = self.matching.max_suggestions.unwrap_or(usize::MAX);

        ranker
            .rank(&query)
            .into_iter()
            .take(limit)
            .map(str::to_string)
            .collect()
    }

    fn entry(&self, code: usize, token: &str) -> Lookup {
        let name = self
            .vocabulary
            .name(code)
            .ok_or_else(|| LookupFailure::not_found(token))?;

        let Some(description) = self.vocabulary.describe(code) else {
            debug!(code, name, "no platform description");
            return Err(LookupFailure::not_found(token));
        };

        Ok(ErrorEntry {
            code,
            name: name.to_string(),
            description,
        })
    }
}
