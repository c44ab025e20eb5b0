//! Error types for the brat-io library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for brat-io operations.
#[derive(Debug, Error)]
pub enum BratError {
    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An annotation file has no companion text file.
    #[error("Text file '{expected}' for annotation file '{annotation}' does not exist")]
    MissingTextFile {
        annotation: PathBuf,
        expected: PathBuf,
    },

    /// A caller-supplied argument violates a precondition.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BratError {
    /// Wrap an IO error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BratError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Why a single annotation line was dropped.
///
/// Line errors never abort a parse; the parser logs them and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    /// Wrong number of tab-separated fields.
    #[error("expected {expected} tab-separated fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    /// Wrong number of space-separated tokens in the second field.
    #[error("expected {expected} space-separated tokens, found {found}")]
    TokenCount { expected: &'static str, found: usize },

    /// Offset list describes a discontinuous span.
    #[error("discontinuous span '{0}' is not supported")]
    Discontinuous(String),

    /// Offset is not a non-negative integer.
    #[error("invalid offset '{0}'")]
    InvalidOffset(String),

    /// End offset precedes start offset.
    #[error("end offset {end} precedes start offset {start}")]
    InvertedSpan { start: usize, end: usize },

    /// Entity id was already defined by an earlier line.
    #[error("duplicate id '{0}'")]
    DuplicateId(String),

    /// A token is not of the `key:value` shape.
    #[error("malformed argument '{0}'")]
    MalformedArgument(String),

    /// Canonical relation argument lacks its `Arg1:`/`Arg2:` prefix.
    #[error("expected argument prefix '{expected}' in '{token}'")]
    ArgumentPrefix {
        expected: &'static str,
        token: String,
    },

    /// A referenced entity id does not exist.
    #[error("unresolved entity reference '{0}'")]
    Unresolved(String),

    /// Too few resolvable arguments for a star relation.
    #[error("only {0} resolvable argument(s), at least 2 required")]
    TooFewArguments(usize),
}

/// Result type alias for brat-io operations.
pub type Result<T> = std::result::Result<T, BratError>;
