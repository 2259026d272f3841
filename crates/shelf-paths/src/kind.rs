use serde::{Deserialize, Serialize};

/// Which of the two sandboxed roots a file lives under.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DirectoryKind {
    /// Durable, user-backed-up storage.
    Documents,
    /// Reclaimable storage the system may purge under pressure.
    #[default]
    Caches,
}

impl DirectoryKind {
    /// The fixed subfolder component under the platform root for this kind.
    ///
    /// These literals are part of the on-disk contract: changing either one
    /// orphans every file stored under the old name.
    pub const fn subfolder(&self) -> &'static str {
        match self {
            Self::Documents => "shelf.documents",
            Self::Caches => "shelf.cache",
        }
    }
}

impl std::fmt::Display for DirectoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Documents => write!(f, "documents"),
            Self::Caches => write!(f, "caches"),
        }
    }
}
