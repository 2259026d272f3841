//! Error types for object store operations.
//!
//! Only the `_checked` operations surface these; the fire-and-forget
//! operations log and swallow every failure, and restore collapses all of
//! its failures to `None`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::codec::CodecError;

/// Errors from object store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The kind's sandbox directory could not be created.
    #[error("failed to create storage folder {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    /// The value could not be encoded.
    #[error("failed to encode value for {name}: {source}")]
    Encode { name: String, source: CodecError },

    /// The encoded bytes could not be written.
    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    /// The file could not be removed.
    #[error("failed to remove {path}: {source}")]
    Remove { path: PathBuf, source: io::Error },

    /// The work lane shut down before the operation could report back.
    #[error("store lane closed before the operation completed")]
    LaneClosed,
}

/// Result alias for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
