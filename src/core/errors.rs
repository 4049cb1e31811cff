//! Error types for the errknow library.
//!
//! Two families live here. [`ErrknowError`] covers the things that can abort a
//! run (configuration, I/O, serialization). [`LookupFailure`] is the ordinary,
//! per-token outcome of a lookup that did not resolve; it is reported and the
//! batch carries on.

use std::fmt;
use std::io;

use thiserror::Error;

/// Main result type for errknow operations.
pub type Result<T> = std::result::Result<T, ErrknowError>;

/// Error type for operations that can fail as a whole.
#[derive(Error, Debug)]
pub enum ErrknowError {
    /// I/O related errors (config files, output streams)
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable error message
        message: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Configuration file content that could not be understood
    #[error("Configuration error: {message}")]
    Config {
        /// Error description
        message: String,
    },

    /// Validation errors for configuration values
    #[error("Validation error: {message}")]
    Validation {
        /// Error description
        message: String,
        /// Field that failed validation
        field: Option<String>,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error description
        message: String,
        /// Underlying serialization error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ErrknowError {
    /// Create a new I/O error with context
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error for a named field
    pub fn validation(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }
}

impl From<io::Error> for ErrknowError {
    fn from(err: io::Error) -> Self {
        Self::io("I/O operation failed", err)
    }
}

impl From<serde_json::Error> for ErrknowError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: format!("JSON serialization failed: {err}"),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_yaml::Error> for ErrknowError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization {
            message: format!("YAML serialization failed: {err}"),
            source: Some(Box::new(err)),
        }
    }
}

/// Why a single token could not be resolved.
///
/// `Display` renders the exact diagnostic line written for the token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupFailure {
    /// The token is a number past the end of the vocabulary.
    #[error("{token} is out of range.")]
    OutOfRange {
        /// The token as supplied
        token: String,
    },

    /// No entry matched the token exactly.
    #[error("{token} was not found.{}", SuggestionClause(.suggestions))]
    NotFound {
        /// The token as supplied
        token: String,
        /// Close vocabulary names, in vocabulary order; may be empty
        suggestions: Vec<String>,
    },
}

impl LookupFailure {
    /// A plain "not found" with no suggestions.
    pub fn not_found(token: impl Into<String>) -> Self {
        Self::NotFound {
            token: token.into(),
            suggestions: Vec::new(),
        }
    }

    /// The token this failure is about.
    pub fn token(&self) -> &str {
        match self {
            Self::OutOfRange { token } | Self::NotFound { token, .. } => token,
        }
    }

    /// Suggestions attached to the failure (empty for `OutOfRange`).
    pub fn suggestions(&self) -> &[String] {
        match self {
            Self::OutOfRange { .. } => &[],
            Self::NotFound { suggestions, .. } => suggestions,
        }
    }
}

/// Renders ` Did you mean A, B or C?`, or nothing for an empty list.
struct SuggestionClause<'a>(&'a [String]);

impl fmt::Display for SuggestionClause<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((last, rest)) = self.0.split_last() else {
            return Ok(());
        };
        f.write_str(" Did you mean ")?;
        if !rest.is_empty() {
            write!(f, "{} or ", rest.join(", "))?;
        }
        write!(f, "{last}?")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_out_of_range_message() {
        let err = LookupFailure::OutOfRange {
            token: "4096".to_string(),
        };
        assert_eq!(err.to_string(), "4096 is out of range.");
        assert!(err.suggestions().is_empty());
    }

    #[test]
    fn test_not_found_without_suggestions() {
        let err = LookupFailure::not_found("EWHAT");
        assert_eq!(err.to_string(), "EWHAT was not found.");
        assert_eq!(err.token(), "EWHAT");
    }

    #[test]
    fn test_not_found_single_suggestion() {
        let err = LookupFailure::NotFound {
            token: "ENOENTZZZ".to_string(),
            suggestions: names(&["ENOENT"]),
        };
        assert_eq!(
            err.to_string(),
            "ENOENTZZZ was not found. Did you mean ENOENT?"
        );
    }

    #[test]
    fn test_not_found_two_suggestions() {
        let err = LookupFailure::NotFound {
            token: "EBAD".to_string(),
            suggestions: names(&["EBADF", "EBADE"]),
        };
        assert_eq!(
            err.to_string(),
            "EBAD was not found. Did you mean EBADF or EBADE?"
        );
    }

    #[test]
    fn test_not_found_many_suggestions() {
        let err = LookupFailure::NotFound {
            token: "ENOT".to_string(),
            suggestions: names(&["ENOTBLK", "ENOTDIR", "ENOTTY"]),
        };
        assert_eq!(
            err.to_string(),
            "ENOT was not found. Did you mean ENOTBLK, ENOTDIR or ENOTTY?"
        );
    }

    #[test]
    fn test_config_error() {
        let err = ErrknowError::config("unknown variant `xml`");

        if let ErrknowError::Config { message } = &err {
            assert_eq!(message, "unknown variant `xml`");
        } else {
            panic!("Expected Config error");
        }
        assert_eq!(err.to_string(), "Configuration error: unknown variant `xml`");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: ErrknowError = io_err.into();

        assert!(matches!(err, ErrknowError::Io { .. }));
    }

    #[test]
    fn test_from_yaml_error() {
        let yaml_err = serde_yaml::from_str::<i32>("invalid: yaml: content").unwrap_err();
        let err: ErrknowError = yaml_err.into();

        assert!(matches!(err, ErrknowError::Serialization { .. }));
        assert!(err.to_string().contains("YAML"));
    }
}
