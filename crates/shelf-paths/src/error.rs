//! Error types for sandbox path resolution.

use thiserror::Error;

use crate::kind::DirectoryKind;

/// Errors that can occur while resolving the sandbox layout.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The platform exposes no per-user search path for this kind.
    #[error("no platform search path for the {kind} directory")]
    UnavailableRoot { kind: DirectoryKind },
}

/// Convenience type alias for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;
