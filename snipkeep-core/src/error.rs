//! Error types for `Snipkeep`
//!
//! This module defines all error types used throughout `Snipkeep`,
//! providing descriptive error messages for the snippet store, line
//! extraction, save option validation, and configuration operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors related to the snippet store
#[derive(Debug, Error)]
pub enum StoreError {
    /// A snippet with this tag already exists
    #[error("Tag '{0}' already exists. Please use a different tag.")]
    DuplicateTag(String),

    /// No snippet has this tag
    #[error("Snippet with tag '{0}' not found")]
    NotFound(String),

    /// Tags must not be empty
    #[error("Tag is required")]
    EmptyTag,

    /// The store file exists but does not hold a valid snippet list
    #[error("Corrupt snippet store {}: {reason}", .path.display())]
    CorruptStore {
        /// Path of the store file
        path: PathBuf,
        /// What the parser rejected
        reason: String,
    },

    /// Reading or writing the store file failed
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        /// Path involved in the failed operation
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to encode the store
    #[error("Failed to serialize snippets: {0}")]
    Serialize(String),
}

/// Errors related to extracting lines from a source file
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    /// Start line below 1 or end line before start line
    #[error("Invalid line range {start}..={end}: start must be at least 1 and end must not be less than start")]
    InvalidRange {
        /// Requested first line
        start: i64,
        /// Requested last line
        end: i64,
    },

    /// The file ends before the requested start line
    #[error("File has only {actual} lines, requested start line was {requested}")]
    InsufficientLines {
        /// Number of lines actually in the file
        actual: usize,
        /// Requested first line
        requested: usize,
    },

    /// Opening or reading the source file failed
    #[error("Error reading file '{}': {message}", .path.display())]
    Io {
        /// Path of the source file
        path: PathBuf,
        /// I/O error description
        message: String,
    },
}

/// Errors related to validating the options of a save request
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    /// No tag was given
    #[error("Tag is required")]
    MissingTag,

    /// No source file was given
    #[error("File path is required")]
    MissingFile,

    /// A line number did not parse as an integer
    #[error("{field} line must be a number, got '{value}'")]
    InvalidLineNumber {
        /// Which line option failed ("start" or "end")
        field: &'static str,
        /// The raw value that was rejected
        value: String,
    },

    /// The line numbers parsed but do not form a valid range
    #[error(transparent)]
    Range(#[from] ExtractError),
}

/// Errors related to configuration file operations
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The home directory could not be determined
    #[error("Could not determine the home directory")]
    HomeDirNotFound,

    /// Failed to parse configuration file
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    /// Failed to write configuration file
    #[error("Failed to write configuration: {0}")]
    Write(String),

    /// Failed to serialize configuration
    #[error("Failed to serialize configuration: {0}")]
    Serialize(String),
}

/// Result type alias for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Result type alias for extraction operations
pub type ExtractResult<T> = std::result::Result<T, ExtractError>;

/// Result type alias for save option validation
pub type OptionsResult<T> = std::result::Result<T, OptionsError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
