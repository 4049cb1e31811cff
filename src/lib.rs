//! # errknow: OS error number and name lookup
//!
//! Resolves operating-system error identifiers, given either as numbers
//! (`2`) or symbolic names (`ENOENT`), to the triple of code, name and
//! platform description. Names that do not match exactly get "did you mean"
//! suggestions from a small fuzzy matcher.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 LookupResolver               │
//! ├──────────────────────────────────────────────┤
//! │  CandidateRanker  →  SimilarityPolicy  →  distance
//! ├──────────────────────────────────────────────┤
//! │  Vocabulary (libc errno table)  │  Config     │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use errknow::{LookupResolver, MatchingConfig, Vocabulary};
//!
//! let vocabulary = Vocabulary::platform();
//! let resolver = LookupResolver::new(&vocabulary, MatchingConfig::default());
//!
//! match resolver.resolve("ENOENTZZZ") {
//!     Ok(entry) => println!("{} {} {}", entry.code, entry.name, entry.description),
//!     Err(failure) => eprintln!("{failure}"),
//! }
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

// Configuration, errors and the error-name table
pub mod core {
    //! Core data structures: configuration, errors, and the vocabulary.

    pub mod config;
    pub mod errors;
    pub mod vocabulary;
}

// Fuzzy matching
pub mod matching;

// Token resolution
pub mod resolver;

// Re-export primary types for convenience
pub use crate::core::config::{ErrknowConfig, MatchingConfig, OutputConfig, OutputFormat};
pub use crate::core::errors::{ErrknowError, LookupFailure, Result};
pub use crate::core::vocabulary::Vocabulary;
pub use matching::{CandidateRanker, SimilarityPolicy};
pub use resolver::{ErrorEntry, Lookup, LookupResolver};
