//! Typed errors for the dictionary, storage and history layers.
//!
//! Orchestration code wraps these in `anyhow::Error` with stage context; the
//! typed variants exist so tests and callers can match on what went wrong.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while converting between nested and flat dictionaries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    /// Two paths disagree on whether a prefix is a leaf or a container
    #[error("Path conflict at '{path}': a leaf and a container share this prefix")]
    PathConflict { path: String },
}

/// Errors raised while reading or writing locale files.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a nested dictionary of strings
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize dictionary for '{code}': {source}")]
    Serialize {
        code: String,
        #[source]
        source: serde_json::Error,
    },

    /// The locale file has no top-level key for its own locale code
    #[error("{path} has no root key '{code}'")]
    MissingRoot { path: PathBuf, code: String },

    /// The locale root key holds a string instead of a dictionary
    #[error("Root key '{code}' in {path} is not a dictionary")]
    RootNotContainer { path: PathBuf, code: String },
}

/// Errors raised by a version-history backend.
#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("Failed to run git: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("git {command} failed: {stderr}")]
    Command { command: String, stderr: String },

    #[error("Snapshot of {path} at {commit} is not valid JSON: {source}")]
    Parse {
        path: String,
        commit: String,
        #[source]
        source: serde_json::Error,
    },
}
