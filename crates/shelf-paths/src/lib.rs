//! Sandbox path resolution for the shelf object store.
//!
//! This crate maps logical file identities to absolute on-disk paths inside
//! one of two application-private sandbox areas: a durable **documents**
//! area the user backs up, and a reclaimable **caches** area the system may
//! purge. Every other shelf crate resolves paths through this one.
//!
//! # Key Types
//!
//! - [`DirectoryKind`] — which of the two sandboxed roots a file lives under
//! - [`BaseName`] — the closed vocabulary of known logical file names
//! - [`FileName`] — a base name plus an optional free-form suffix
//! - [`SandboxLayout`] — resolves (kind, name) pairs to absolute paths
//!
//! # Design Rules
//!
//! 1. Resolution is a pure function of the configured roots: the same
//!    (kind, name) pair always resolves to the same path.
//! 2. The resolver never creates directories and has no side effects; the
//!    only filesystem access is the `exists` check.
//! 3. The two per-kind subfolder literals are distinct and stable across
//!    versions — changing either orphans existing files.

pub mod error;
pub mod kind;
pub mod layout;
pub mod name;

pub use error::{LayoutError, Result};
pub use kind::DirectoryKind;
pub use layout::SandboxLayout;
pub use name::{BaseName, FileName};
