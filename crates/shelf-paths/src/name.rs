//! Logical file identities.
//!
//! Files are never addressed by free-form strings. Every stored file is
//! named by a [`FileName`]: one of the known [`BaseName`] entries, plus an
//! optional suffix for families of related files (per-user variants,
//! dated snapshots, and the like).

use std::fmt;

/// The closed vocabulary of known logical file names.
///
/// One variant per logical file the application persists. Extending the
/// vocabulary means adding a variant here, never passing an ad-hoc string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BaseName {
    /// The user's selected content categories.
    Categories,
    /// The most recently fetched headline list.
    Headlines,
    /// Saved articles.
    Bookmarks,
}

impl BaseName {
    /// Canonical on-disk spelling of this base name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Categories => "categories",
            Self::Headlines => "headlines",
            Self::Bookmarks => "bookmarks",
        }
    }
}

impl fmt::Display for BaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A logical file identifier: a [`BaseName`] plus an optional suffix.
///
/// Identifiers with the same (base, suffix) pair always resolve to the
/// same path within the same directory kind.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FileName {
    base: BaseName,
    suffix: Option<String>,
}

impl FileName {
    /// Identifier for the bare base name.
    pub fn new(base: BaseName) -> Self {
        Self { base, suffix: None }
    }

    /// Identifier for the base name with a suffix appended.
    pub fn with_suffix(base: BaseName, suffix: impl Into<String>) -> Self {
        Self {
            base,
            suffix: Some(suffix.into()),
        }
    }

    /// The base name component.
    pub fn base(&self) -> BaseName {
        self.base
    }

    /// The suffix component, if any.
    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    /// The on-disk file name: the base name followed by the suffix.
    pub fn resolved(&self) -> String {
        match &self.suffix {
            Some(suffix) => format!("{}{suffix}", self.base.as_str()),
            None => self.base.as_str().to_string(),
        }
    }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base.as_str())?;
        if let Some(suffix) = &self.suffix {
            f.write_str(suffix)?;
        }
        Ok(())
    }
}
