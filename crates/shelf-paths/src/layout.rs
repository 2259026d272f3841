use std::path::PathBuf;

use crate::error::{LayoutError, Result};
use crate::kind::DirectoryKind;
use crate::name::FileName;

/// Resolves logical (kind, name) pairs to absolute sandbox paths.
///
/// A layout holds the two platform roots and derives every path from them:
/// `<root for kind>/<fixed subfolder>/<resolved file name>`. Resolution is
/// pure — the layout never creates directories, and its only filesystem
/// access is the [`exists`](Self::exists) check.
#[derive(Clone, Debug)]
pub struct SandboxLayout {
    documents_root: PathBuf,
    caches_root: PathBuf,
}

impl SandboxLayout {
    /// Resolve the platform per-user search paths for both kinds.
    pub fn discover() -> Result<Self> {
        let documents_root = dirs::document_dir().ok_or(LayoutError::UnavailableRoot {
            kind: DirectoryKind::Documents,
        })?;
        let caches_root = dirs::cache_dir().ok_or(LayoutError::UnavailableRoot {
            kind: DirectoryKind::Caches,
        })?;
        Ok(Self::with_roots(documents_root, caches_root))
    }

    /// Layout over explicit roots, for tests and embedding.
    pub fn with_roots(documents_root: impl Into<PathBuf>, caches_root: impl Into<PathBuf>) -> Self {
        Self {
            documents_root: documents_root.into(),
            caches_root: caches_root.into(),
        }
    }

    /// The sandbox directory for `kind`: the configured platform root
    /// joined with the kind's fixed subfolder.
    pub fn root_path(&self, kind: DirectoryKind) -> PathBuf {
        let base = match kind {
            DirectoryKind::Documents => &self.documents_root,
            DirectoryKind::Caches => &self.caches_root,
        };
        base.join(kind.subfolder())
    }

    /// The absolute path for a logical file.
    pub fn file_path(&self, kind: DirectoryKind, name: &FileName) -> PathBuf {
        self.root_path(kind).join(name.resolved())
    }

    /// Returns `true` iff a regular file exists at the resolved path.
    pub fn exists(&self, kind: DirectoryKind, name: &FileName) -> bool {
        self.file_path(kind, name).is_file()
    }
}
